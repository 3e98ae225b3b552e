pub mod a001_organization;
pub mod a002_venue;
pub mod a003_space;
pub mod a004_image;
pub mod a005_event_type;
pub mod a006_admin_event;
pub mod a007_event;
pub mod a008_country;
pub mod common;
