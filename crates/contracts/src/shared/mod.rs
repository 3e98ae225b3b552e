pub mod app_state;
pub mod coerce;
pub mod config;
pub mod error;
pub mod flags;
pub mod format;
pub mod string_utils;
pub mod template;
pub mod theme;

pub use error::{ContractError, MapResult};
pub use flags::FlagSet;
pub use template::{replace_in_template, TemplateValue, TemplateValues};
