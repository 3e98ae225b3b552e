use serde::{Deserialize, Serialize};

/// Venue and space picked for one event date in the editor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueSpaceSelection {
    pub date_venue_id: Option<i32>,
    pub venue_id: Option<i32>,
    pub space_id: Option<i32>,
    pub venue_name: Option<String>,
    pub space_name: Option<String>,
}

impl VenueSpaceSelection {
    pub fn is_complete(&self) -> bool {
        self.venue_id.is_some() && self.space_id.is_some()
    }

    pub fn display_name(&self) -> &str {
        self.space_name
            .as_deref()
            .or(self.venue_name.as_deref())
            .unwrap_or("Unknown")
    }
}
