use serde::{Deserialize, Serialize};

use crate::domain::common::AggregateRoot;

// ============================================================================
// DTO
// ============================================================================

/// Organization as sent and received by the API
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OrganizationDto {
    pub id: Option<i32>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
    #[serde(default)]
    pub website_link: Option<String>,

    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub house_number: Option<String>,
    #[serde(default)]
    pub address_addition: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,

    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub modified_at: Option<String>,

    #[serde(default)]
    pub holding_organization_id: Option<i32>,
    #[serde(default)]
    pub legal_form: Option<String>,
    #[serde(default)]
    pub nonprofit: Option<bool>,

    #[serde(default)]
    pub created_by: Option<i32>,
    #[serde(default)]
    pub modified_by: Option<i32>,

    #[serde(default)]
    pub geo_pos: Option<String>,

    #[serde(default)]
    pub image_main_logo_id: Option<i32>,
    #[serde(default)]
    pub image_light_mode_logo_id: Option<i32>,
    #[serde(default)]
    pub image_dark_mode_logo_id: Option<i32>,

    #[serde(default)]
    pub api_key: Option<String>,
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Organization running venues and publishing events
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: Option<i32>,
    pub name: String,

    pub description: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub website_link: Option<String>,

    pub street: Option<String>,
    pub house_number: Option<String>,
    pub address_addition: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,

    pub nonprofit: Option<bool>,
    pub legal_form: Option<String>,
    pub holding_organization_id: Option<i32>,

    pub image_main_logo_id: Option<i32>,
    pub image_light_mode_logo_id: Option<i32>,
    pub image_dark_mode_logo_id: Option<i32>,

    pub api_key: Option<String>,
}

impl Organization {
    /// Blank organization for the "new organization" form
    pub fn empty() -> Self {
        Self::from_dto(OrganizationDto {
            id: Some(-1),
            ..Default::default()
        })
    }

    /// Validation before saving
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name must not be empty".into());
        }
        if let Some(email) = self.contact_email.as_deref().filter(|e| !e.trim().is_empty()) {
            if !email.contains('@') {
                return Err("Contact email is not valid".into());
            }
        }
        if let Some(lat) = self.lat {
            if !(-90.0..=90.0).contains(&lat) {
                return Err("Latitude must be between -90 and 90".into());
            }
        }
        if let Some(lon) = self.lon {
            if !(-180.0..=180.0).contains(&lon) {
                return Err("Longitude must be between -180 and 180".into());
            }
        }
        Ok(())
    }
}

fn or_empty(value: &Option<String>) -> Option<String> {
    Some(value.clone().unwrap_or_default())
}

impl AggregateRoot for Organization {
    type Dto = OrganizationDto;

    fn id(&self) -> Option<i32> {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn from_dto(dto: OrganizationDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            description: dto.description,
            contact_email: dto.contact_email,
            contact_phone: dto.contact_phone,
            website_link: dto.website_link,

            street: dto.street,
            house_number: dto.house_number,
            address_addition: dto.address_addition,
            postal_code: dto.postal_code,
            city: dto.city,
            state: dto.state,
            country: dto.country,
            lat: dto.lat,
            lon: dto.lon,

            nonprofit: dto.nonprofit,
            legal_form: dto.legal_form,
            holding_organization_id: dto.holding_organization_id,

            image_main_logo_id: dto.image_main_logo_id,
            image_light_mode_logo_id: dto.image_light_mode_logo_id,
            image_dark_mode_logo_id: dto.image_dark_mode_logo_id,

            // never taken from read responses
            api_key: None,
        }
    }

    /// Text fields go out as `""` when unset, `nonprofit` as `false`
    fn to_dto(&self) -> OrganizationDto {
        OrganizationDto {
            id: self.id,
            name: self.name.clone(),
            description: or_empty(&self.description),

            contact_email: or_empty(&self.contact_email),
            contact_phone: or_empty(&self.contact_phone),
            website_link: or_empty(&self.website_link),

            street: or_empty(&self.street),
            house_number: or_empty(&self.house_number),
            address_addition: or_empty(&self.address_addition),
            postal_code: or_empty(&self.postal_code),
            city: or_empty(&self.city),
            state: or_empty(&self.state),
            country: or_empty(&self.country),
            lat: self.lat,
            lon: self.lon,

            nonprofit: Some(self.nonprofit.unwrap_or(false)),
            legal_form: self.legal_form.clone(),
            holding_organization_id: self.holding_organization_id,

            image_main_logo_id: self.image_main_logo_id,
            image_light_mode_logo_id: self.image_light_mode_logo_id,
            image_dark_mode_logo_id: self.image_dark_mode_logo_id,

            api_key: or_empty(&self.api_key),
            created_at: String::new(),
            ..Default::default()
        }
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "organization"
    }

    fn element_name() -> &'static str {
        "Organization"
    }

    fn list_name() -> &'static str {
        "Organizations"
    }
}
