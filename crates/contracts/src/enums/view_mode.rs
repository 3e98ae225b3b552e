use serde::{Deserialize, Serialize};

/// Presentation of the event list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventViewMode {
    #[default]
    Detailed,
    Compact,
    Tiles,
    Map,
}

impl EventViewMode {
    pub fn code(&self) -> &'static str {
        match self {
            EventViewMode::Detailed => "detailed",
            EventViewMode::Compact => "compact",
            EventViewMode::Tiles => "tiles",
            EventViewMode::Map => "map",
        }
    }

    pub fn all() -> [EventViewMode; 4] {
        [
            EventViewMode::Detailed,
            EventViewMode::Compact,
            EventViewMode::Tiles,
            EventViewMode::Map,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|m| m.code() == code)
    }
}

/// Grouping of the event list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventGroupingMode {
    #[default]
    Daily,
    Monthly,
}

impl EventGroupingMode {
    pub fn code(&self) -> &'static str {
        match self {
            EventGroupingMode::Daily => "daily",
            EventGroupingMode::Monthly => "monthly",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "daily" => Some(EventGroupingMode::Daily),
            "monthly" => Some(EventGroupingMode::Monthly),
            _ => None,
        }
    }
}
