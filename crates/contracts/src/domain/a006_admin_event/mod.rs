pub mod aggregate;
pub mod event_date;
pub mod mapper;
pub mod venue_space_selection;

pub use aggregate::{AdminEvent, AdminEventDto};
pub use event_date::{AdminEventDate, AdminEventDateDto};
pub use mapper::map_admin_event;
pub use venue_space_selection::VenueSpaceSelection;
