//! Common types and traits for all aggregates

pub mod aggregate_root;
pub mod event_link;
pub mod location;

// Re-exports
pub use aggregate_root::AggregateRoot;
pub use event_link::EventLink;
pub use location::EventLocation;
