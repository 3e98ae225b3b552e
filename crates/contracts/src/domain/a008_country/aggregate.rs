use serde::{Deserialize, Serialize};

/// Country choice for address forms
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CountryDto {
    pub country_code: String,
    #[serde(default)]
    pub country_name: Option<String>,
}

/// State/region choice for address forms
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct StateDto {
    pub state_code: String,
    #[serde(default)]
    pub state_name: Option<String>,
}

impl CountryDto {
    /// Name, falling back to the code
    pub fn label(&self) -> &str {
        self.country_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.country_code)
    }
}

impl StateDto {
    /// Name, falling back to the code
    pub fn label(&self) -> &str {
        self.state_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.state_code)
    }
}
