pub mod aggregate;

pub use aggregate::{CountryDto, StateDto};
