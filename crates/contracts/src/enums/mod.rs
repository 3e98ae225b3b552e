pub mod image_license;
pub mod view_mode;

pub use image_license::ImageLicense;
pub use view_mode::{EventGroupingMode, EventViewMode};
