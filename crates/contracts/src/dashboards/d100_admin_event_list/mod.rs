pub mod dto;

pub use dto::{map_dashboard_event, map_dashboard_events, AdminEventListRequest, AdminListEvent};
