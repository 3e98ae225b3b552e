use serde::{Deserialize, Serialize};

use crate::domain::common::AggregateRoot;

// ============================================================================
// DTO
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct VenueDto {
    pub id: Option<i32>,
    #[serde(default)]
    pub organization_id: Option<i32>,
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type")]
    pub venue_type: Option<String>,

    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub house_number: Option<String>,
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
    pub opened_at: Option<String>,
    #[serde(default)]
    pub closed_at: Option<String>,
    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
    #[serde(default)]
    pub website_link: Option<String>,

    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub modified_at: Option<String>,
    #[serde(default)]
    pub created_by: Option<i32>,
    #[serde(default)]
    pub modified_by: Option<i32>,
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Venue (building or site) owned by an organization
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    pub id: Option<i32>,
    pub organization_id: Option<i32>,
    pub name: String,
    #[serde(rename = "type")]
    pub venue_type: Option<String>,

    pub street: Option<String>,
    pub house_number: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,

    pub opened_at: Option<String>,
    pub closed_at: Option<String>,
    pub description: Option<String>,

    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub website_link: Option<String>,

    pub created_at: Option<String>,
    pub modified_at: Option<String>,
    pub created_by: Option<i32>,
    pub modified_by: Option<i32>,
}

/// Entry of a venue dropdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VenueSelectItem {
    pub id: i32,
    pub name: String,
    pub city: Option<String>,
}

impl Venue {
    /// Blank venue for the "new venue" form
    pub fn empty() -> Self {
        Self::from_dto(VenueDto {
            id: Some(-1),
            ..Default::default()
        })
    }

    /// Dropdown entry; `None` for unsaved venues
    pub fn select_item(&self) -> Option<VenueSelectItem> {
        self.id.filter(|id| *id > 0).map(|id| VenueSelectItem {
            id,
            name: self.name.clone(),
            city: self.city.clone(),
        })
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name must not be empty".into());
        }
        if let (Some(opened), Some(closed)) = (self.opened_at.as_deref(), self.closed_at.as_deref()) {
            // ISO dates compare lexicographically
            if !opened.is_empty() && !closed.is_empty() && closed < opened {
                return Err("Closing date lies before opening date".into());
            }
        }
        Ok(())
    }
}

fn or_empty(value: &Option<String>) -> Option<String> {
    Some(value.clone().unwrap_or_default())
}

impl AggregateRoot for Venue {
    type Dto = VenueDto;

    fn id(&self) -> Option<i32> {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn from_dto(dto: VenueDto) -> Self {
        Self {
            id: dto.id,
            organization_id: dto.organization_id,
            name: dto.name,
            // type is always a string on the domain side
            venue_type: Some(dto.venue_type.unwrap_or_default()),

            street: dto.street,
            house_number: dto.house_number,
            postal_code: dto.postal_code,
            city: dto.city,
            state: dto.state,
            country: dto.country,
            lat: dto.lat,
            lon: dto.lon,

            opened_at: dto.opened_at,
            closed_at: dto.closed_at,
            description: dto.description,

            contact_email: dto.contact_email,
            contact_phone: dto.contact_phone,
            website_link: dto.website_link,

            created_at: Some(dto.created_at),
            modified_at: dto.modified_at,
            created_by: dto.created_by,
            modified_by: dto.modified_by,
        }
    }

    fn to_dto(&self) -> VenueDto {
        VenueDto {
            id: self.id,
            organization_id: self.organization_id,
            name: self.name.clone(),
            venue_type: self.venue_type.clone(),

            street: or_empty(&self.street),
            house_number: or_empty(&self.house_number),
            postal_code: or_empty(&self.postal_code),
            city: or_empty(&self.city),
            state: or_empty(&self.state),
            country: or_empty(&self.country),
            lat: self.lat,
            lon: self.lon,

            opened_at: self.opened_at.clone(),
            closed_at: self.closed_at.clone(),
            description: or_empty(&self.description),

            contact_email: or_empty(&self.contact_email),
            contact_phone: or_empty(&self.contact_phone),
            website_link: or_empty(&self.website_link),

            created_at: self.created_at.clone().unwrap_or_default(),
            modified_at: self.modified_at.clone(),
            created_by: self.created_by,
            modified_by: self.modified_by,
        }
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "venue"
    }

    fn element_name() -> &'static str {
        "Venue"
    }

    fn list_name() -> &'static str {
        "Venues"
    }
}
