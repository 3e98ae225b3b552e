use serde::{Deserialize, Serialize};

/// Link attached to an event (tickets, website, stream)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventLink {
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub link_type: Option<String>,
    pub url: Option<String>,
}

impl EventLink {
    pub fn new(label: Option<String>, link_type: Option<String>, url: Option<String>) -> Self {
        Self {
            label,
            link_type,
            url,
        }
    }

    /// Label, falling back to the URL itself
    pub fn display_label(&self) -> Option<&str> {
        self.label.as_deref().or(self.url.as_deref())
    }
}
