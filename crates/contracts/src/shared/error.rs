use thiserror::Error;

/// Result of mapping raw API data into a domain object
pub type MapResult<T> = Result<T, ContractError>;

/// Errors raised while turning API payloads and stored settings into domain values
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ContractError {
    #[error("Invalid input: expected an object")]
    InvalidInput,

    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Missing or invalid field: {0}")]
    InvalidField(&'static str),

    #[error("Invalid flag value '{value}': {reason}")]
    InvalidFlags { value: String, reason: String },

    #[error("Storage error: {0}")]
    Storage(String),
}

impl ContractError {
    /// Field name for field-level errors
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ContractError::MissingField(name) | ContractError::InvalidField(name) => Some(name),
            _ => None,
        }
    }
}
