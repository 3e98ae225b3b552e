pub mod aggregate;
pub mod event_date;
pub mod mapper;

pub use aggregate::Event;
pub use event_date::{
    map_event_date, map_event_date_from_dto, map_event_location, EventDate, EventDateDto,
};
pub use mapper::map_event_data;
