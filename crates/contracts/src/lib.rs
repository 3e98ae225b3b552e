//! Data contracts of the Uranus event dashboard: API DTOs, domain models and
//! their mappers, UI state and the shared helpers the views build on.

pub mod dashboards;
pub mod domain;
pub mod enums;
pub mod shared;
