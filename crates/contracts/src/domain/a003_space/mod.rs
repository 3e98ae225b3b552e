pub mod aggregate;

pub use aggregate::{Space, SpaceDto};
