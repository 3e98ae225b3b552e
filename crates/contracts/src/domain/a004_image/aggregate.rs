use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::enums::ImageLicense;
use crate::shared::coerce::{field, to_i32_or_null, to_number_or_null, to_nullable_string};
use crate::shared::config::ApiConfig;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ImageDto {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub creator: Option<String>,
    #[serde(default)]
    pub copyright: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub license: Option<i32>,
}

/// Image stored in the image service
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub id: Option<i32>,
    pub url: Option<String>,
    pub alt: Option<String>,
    pub creator: Option<String>,
    pub copyright: Option<String>,
    pub description: Option<String>,
    pub license: Option<ImageLicense>,
    /// Focus point for cropping, 0..1 from the left
    pub focus_x: Option<f64>,
    /// Focus point for cropping, 0..1 from the top
    pub focus_y: Option<f64>,
}

impl Image {
    pub fn has_license(&self) -> bool {
        self.license.is_some()
    }

    pub fn display_name(&self) -> &str {
        self.alt.as_deref().unwrap_or("Untitled image")
    }
}

pub fn map_image(dto: ImageDto) -> Image {
    Image {
        id: dto.id,
        url: dto.url,
        alt: dto.alt,
        creator: dto.creator,
        copyright: dto.copyright,
        description: dto.description,
        license: dto.license.map(ImageLicense::from_id),
        focus_x: None,
        focus_y: None,
    }
}

/// Lenient mapping of a raw image object; ids may come as strings
pub fn map_image_from_api(raw: &Value) -> Option<Image> {
    let r = raw.as_object()?;
    let get = |name: &str| field(r, name);
    Some(Image {
        id: to_i32_or_null(get("id")),
        url: to_nullable_string(get("url")),
        alt: to_nullable_string(get("alt")),
        creator: to_nullable_string(get("creator")),
        copyright: to_nullable_string(get("copyright")),
        description: to_nullable_string(get("description")),
        license: to_i32_or_null(get("license")).map(ImageLicense::from_id),
        focus_x: to_number_or_null(get("focus_x")),
        focus_y: to_number_or_null(get("focus_y")),
    })
}

// ============================================================================
// Image URLs
// ============================================================================

/// Cover-cropped 3:2 webp preview for lists and cards
pub fn build_preview_image_url(api: &ApiConfig, image_id: i32) -> String {
    api.url(&format!(
        "/api/image/{}?mode=cover&width=480&ratio=3%3A2&type=webp&quality=80",
        image_id
    ))
}

/// Large rendition for the image editor
pub fn build_edit_image_url(
    api: &ApiConfig,
    image_id: i32,
    width: u32,
    quality: u32,
    image_type: &str,
) -> String {
    api.url(&format!(
        "/api/image/{}?width={}&type={}&quality={}",
        image_id,
        width,
        urlencoding::encode(image_type),
        quality
    ))
}

/// Editor rendition with default size and quality (1920px, q90, webp)
pub fn build_default_edit_image_url(api: &ApiConfig, image_id: i32) -> String {
    build_edit_image_url(api, image_id, 1920, 90, "webp")
}
