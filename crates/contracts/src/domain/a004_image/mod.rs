pub mod aggregate;

pub use aggregate::{
    build_default_edit_image_url, build_edit_image_url, build_preview_image_url, map_image,
    map_image_from_api, Image, ImageDto,
};
