pub mod aggregate;
pub mod venue_info;

pub use aggregate::{Venue, VenueDto, VenueSelectItem};
pub use venue_info::{group_venue_infos, map_venue_info, GroupedVenue, VenueInfo, VenueInfoDto};
