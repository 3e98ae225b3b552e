use serde::{Deserialize, Serialize};

use crate::domain::common::AggregateRoot;
use crate::shared::FlagSet;

// ============================================================================
// DTO
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SpaceDto {
    pub id: Option<i32>,
    #[serde(default)]
    pub venue_id: Option<i32>,
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub total_capacity: Option<i32>,
    #[serde(default)]
    pub seating_capacity: Option<i32>,
    #[serde(default)]
    pub space_type: Option<String>,
    #[serde(default)]
    pub building_level: Option<i32>,
    #[serde(default)]
    pub website_link: Option<String>,

    #[serde(default)]
    pub accessibility_summary: Option<String>,
    /// Decimal string of a 64-bit flag set
    #[serde(default)]
    pub accessibility_flags: Option<String>,

    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub area_sqm: Option<f64>,

    #[serde(default)]
    pub environmental_features: Option<i64>,
    #[serde(default)]
    pub audio_features: Option<i64>,
    #[serde(default)]
    pub presentation_features: Option<i64>,
    #[serde(default)]
    pub lighting_features: Option<i64>,
    #[serde(default)]
    pub climate_features: Option<i64>,
    #[serde(default)]
    pub misc_features: Option<i64>,

    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub modified_at: Option<String>,
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Room or area inside a venue
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Space {
    pub id: Option<i32>,
    pub venue_id: Option<i32>,
    pub name: String,

    pub total_capacity: Option<i32>,
    pub seating_capacity: Option<i32>,
    pub space_type: Option<String>,
    pub building_level: Option<i32>,
    pub website_link: Option<String>,

    pub accessibility_summary: Option<String>,
    pub accessibility_flags: FlagSet,

    pub description: Option<String>,
    pub area_sqm: Option<f64>,

    pub environmental_features: Option<i64>,
    pub audio_features: Option<i64>,
    pub presentation_features: Option<i64>,
    pub lighting_features: Option<i64>,
    pub climate_features: Option<i64>,
    pub misc_features: Option<i64>,

    pub created_at: Option<String>,
    pub modified_at: Option<String>,
}

impl Space {
    /// Blank space for the "new space" form
    pub fn empty() -> Self {
        Self::from_dto(SpaceDto {
            id: Some(-1),
            ..Default::default()
        })
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name must not be empty".into());
        }
        if let (Some(seating), Some(total)) = (self.seating_capacity, self.total_capacity) {
            if seating > total {
                return Err("Seating capacity exceeds total capacity".into());
            }
        }
        Ok(())
    }
}

impl AggregateRoot for Space {
    type Dto = SpaceDto;

    fn id(&self) -> Option<i32> {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn from_dto(dto: SpaceDto) -> Self {
        Self {
            id: dto.id,
            venue_id: dto.venue_id,
            name: dto.name,

            total_capacity: dto.total_capacity,
            seating_capacity: dto.seating_capacity,
            space_type: dto.space_type,
            building_level: dto.building_level,
            website_link: dto.website_link,

            accessibility_summary: dto.accessibility_summary,
            accessibility_flags: FlagSet::parse_lenient(dto.accessibility_flags.as_deref()),

            description: dto.description,
            area_sqm: dto.area_sqm,

            environmental_features: dto.environmental_features,
            audio_features: dto.audio_features,
            presentation_features: dto.presentation_features,
            lighting_features: dto.lighting_features,
            climate_features: dto.climate_features,
            misc_features: dto.misc_features,

            created_at: Some(dto.created_at),
            modified_at: dto.modified_at,
        }
    }

    fn to_dto(&self) -> SpaceDto {
        SpaceDto {
            id: self.id,
            venue_id: self.venue_id,
            name: self.name.clone(),

            total_capacity: self.total_capacity,
            seating_capacity: self.seating_capacity,
            space_type: self.space_type.clone(),
            building_level: self.building_level,
            website_link: self.website_link.clone(),

            accessibility_summary: self.accessibility_summary.clone(),
            accessibility_flags: Some(self.accessibility_flags.to_wire_string()),

            description: self.description.clone(),
            area_sqm: self.area_sqm,

            environmental_features: self.environmental_features,
            audio_features: self.audio_features,
            presentation_features: self.presentation_features,
            lighting_features: self.lighting_features,
            climate_features: self.climate_features,
            misc_features: self.misc_features,

            created_at: self.created_at.clone().unwrap_or_default(),
            modified_at: self.modified_at.clone(),
        }
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "space"
    }

    fn element_name() -> &'static str {
        "Space"
    }

    fn list_name() -> &'static str {
        "Spaces"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accessibility_flags() {
        let raw = json!({
            "id": 7,
            "venue_id": 4,
            "name": "Großer Saal",
            "accessibility_flags": "10",
            "total_capacity": 400,
            "seating_capacity": 320,
            "created_at": "2026-02-13T12:00:00Z"
        });
        let space = Space::from_api(&raw).unwrap();
        assert!(space.accessibility_flags.is_set(1));
        assert!(space.accessibility_flags.is_set(3));
        assert!(!space.accessibility_flags.is_set(0));
        assert!(space.validate().is_ok());

        let dto = space.to_dto();
        assert_eq!(dto.accessibility_flags.as_deref(), Some("10"));
    }

    #[test]
    fn test_invalid_flags_fall_back_to_zero() {
        let dto = SpaceDto {
            id: Some(1),
            name: "Foyer".into(),
            accessibility_flags: Some("n/a".into()),
            ..Default::default()
        };
        assert_eq!(Space::from_dto(dto).accessibility_flags, FlagSet::empty());
    }

    #[test]
    fn test_empty_space() {
        let space = Space::empty();
        assert_eq!(space.id, Some(-1));
        assert_eq!(space.to_dto().accessibility_flags.as_deref(), Some("0"));
        assert!(space.validate().is_err());
    }
}
