use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::event_date::{
    map_admin_event_dates_from_api, map_admin_event_dates_to_api, AdminEventDate, AdminEventDateDto,
};
use crate::domain::a005_event_type::{
    map_event_type_pairs_from_dto, map_event_type_pairs_to_dto, EventTypePair, EventTypePairDto,
};
use crate::domain::common::{AggregateRoot, EventLink};
use crate::shared::string_utils::build_venue_space_key;
use crate::shared::FlagSet;

// ============================================================================
// DTO
// ============================================================================

/// Event as loaded into and saved from the admin editor
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AdminEventDto {
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    pub release_status: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub external_id: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub custom: Option<String>,
    #[serde(default)]
    pub style: Option<String>,

    #[serde(default)]
    pub content_language: Option<String>,

    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,

    #[serde(default)]
    pub organization_id: i32,
    #[serde(default)]
    pub venue_id: Option<i32>,
    #[serde(default)]
    pub space_id: Option<i32>,

    #[serde(default)]
    pub event_types: Option<Vec<EventTypePairDto>>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,

    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub participation_info: Option<String>,
    #[serde(default)]
    pub meeting_point: Option<String>,

    #[serde(default)]
    pub min_age: Option<i32>,
    #[serde(default)]
    pub max_age: Option<i32>,
    #[serde(default)]
    pub max_attendees: Option<i32>,

    #[serde(default)]
    pub price_type: Option<String>,
    #[serde(default)]
    pub min_price: Option<f64>,
    #[serde(default)]
    pub max_price: Option<f64>,

    #[serde(default)]
    pub ticket_flags: Option<Vec<String>>,

    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub occasion_type_id: Option<i32>,

    #[serde(default)]
    pub online_link: Option<String>,

    /// Decimal string of a 64-bit flag set
    #[serde(default)]
    pub visitor_info_flags: Option<String>,

    #[serde(default)]
    pub languages: Option<Vec<String>>,
    #[serde(default)]
    pub event_dates: Option<Vec<AdminEventDateDto>>,
    #[serde(default)]
    pub event_links: Option<Vec<EventLink>>,
}

// ============================================================================
// Aggregate Root
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdminEvent {
    pub id: Option<i32>,
    pub release_status: Option<String>,
    pub release_date: Option<String>,
    pub external_id: Option<String>,
    pub source_url: Option<String>,
    pub custom: Option<String>,
    pub style: Option<String>,

    pub content_language: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub summary: Option<String>,
    pub event_links: Option<Vec<EventLink>>,

    pub occasion_type_id: Option<i32>,
    pub event_types: Option<Vec<EventTypePair>>,
    pub tags: Option<Vec<String>>,

    pub event_dates: Option<Vec<AdminEventDate>>,

    pub organization_id: Option<i32>,
    pub venue_id: Option<i32>,
    pub space_id: Option<i32>,
    pub meeting_point: Option<String>,
    pub online_link: Option<String>,

    pub participation_info: Option<String>,
    pub languages: Option<Vec<String>>,
    pub min_age: Option<i32>,
    pub max_age: Option<i32>,
    pub max_attendees: Option<i32>,
    pub visitor_info_flags: Option<FlagSet>,

    pub price_type: Option<String>,
    pub currency: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub ticket_flags: Option<Vec<String>>,
}

impl AdminEvent {
    /// Key of the event's default venue/space
    pub fn venue_space_key(&self) -> String {
        build_venue_space_key(self.venue_id, self.space_id)
    }

    pub fn dates(&self) -> &[AdminEventDate] {
        self.event_dates.as_deref().unwrap_or(&[])
    }

    /// Validation before saving
    pub fn validate(&self) -> Result<(), String> {
        if self.title.as_deref().map_or(true, |t| t.trim().is_empty()) {
            return Err("Title must not be empty".into());
        }
        if self.organization_id.map_or(true, |id| id <= 0) {
            return Err("Organization is required".into());
        }
        if let (Some(min), Some(max)) = (self.min_age, self.max_age) {
            if min > max {
                return Err("Minimum age exceeds maximum age".into());
            }
        }
        if let (Some(min), Some(max)) = (self.min_price, self.max_price) {
            if min > max {
                return Err("Minimum price exceeds maximum price".into());
            }
        }
        if self.min_price.map_or(false, |p| p < 0.0) || self.max_price.map_or(false, |p| p < 0.0) {
            return Err("Prices must not be negative".into());
        }
        Ok(())
    }
}

impl AggregateRoot for AdminEvent {
    type Dto = AdminEventDto;

    fn id(&self) -> Option<i32> {
        self.id
    }

    fn name(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    fn from_dto(dto: AdminEventDto) -> Self {
        Self {
            id: Some(dto.id),
            release_status: dto.release_status,
            release_date: dto.release_date,
            external_id: dto.external_id,
            source_url: dto.source_url,
            custom: dto.custom,
            style: dto.style,
            content_language: dto.content_language,
            title: Some(dto.title),
            subtitle: dto.subtitle,
            description: dto.description,
            summary: dto.summary,
            event_links: Some(dto.event_links.unwrap_or_default()),
            occasion_type_id: dto.occasion_type_id,
            event_types: Some(map_event_type_pairs_from_dto(dto.event_types.unwrap_or_default())),
            tags: dto.tags,
            event_dates: Some(map_admin_event_dates_from_api(dto.event_dates)),
            organization_id: Some(dto.organization_id),
            venue_id: dto.venue_id,
            space_id: dto.space_id,
            meeting_point: dto.meeting_point,
            online_link: dto.online_link,
            participation_info: dto.participation_info,
            languages: Some(dto.languages.unwrap_or_default()),
            min_age: dto.min_age,
            max_age: dto.max_age,
            max_attendees: dto.max_attendees,
            visitor_info_flags: Some(FlagSet::parse_lenient(dto.visitor_info_flags.as_deref())),
            price_type: dto.price_type,
            currency: dto.currency,
            min_price: dto.min_price,
            max_price: dto.max_price,
            ticket_flags: dto.ticket_flags,
        }
    }

    fn to_dto(&self) -> AdminEventDto {
        AdminEventDto {
            id: self.id.unwrap_or_default(),
            release_status: self.release_status.clone(),
            release_date: self.release_date.clone(),
            external_id: self.external_id.clone(),
            source_url: self.source_url.clone(),
            custom: self.custom.clone(),
            style: self.style.clone(),
            content_language: self.content_language.clone(),
            title: self.title.clone().unwrap_or_default(),
            subtitle: self.subtitle.clone(),
            organization_id: self.organization_id.unwrap_or_default(),
            venue_id: self.venue_id,
            space_id: self.space_id,
            event_types: Some(
                self.event_types
                    .as_deref()
                    .map(map_event_type_pairs_to_dto)
                    .unwrap_or_default(),
            ),
            tags: self.tags.clone(),
            description: self.description.clone(),
            summary: self.summary.clone(),
            participation_info: self.participation_info.clone(),
            meeting_point: self.meeting_point.clone(),
            min_age: self.min_age,
            max_age: self.max_age,
            max_attendees: self.max_attendees,
            price_type: self.price_type.clone(),
            min_price: self.min_price,
            max_price: self.max_price,
            ticket_flags: self.ticket_flags.clone(),
            currency: self.currency.clone(),
            occasion_type_id: self.occasion_type_id,
            online_link: self.online_link.clone(),
            visitor_info_flags: self.visitor_info_flags.map(|f| f.to_wire_string()),
            languages: Some(self.languages.clone().unwrap_or_default()),
            event_dates: Some(map_admin_event_dates_to_api(self.event_dates.as_deref())),
            event_links: self.event_links.clone(),
        }
    }

    fn aggregate_index() -> &'static str {
        "a006"
    }

    fn collection_name() -> &'static str {
        "admin_event"
    }

    fn element_name() -> &'static str {
        "Event"
    }

    fn list_name() -> &'static str {
        "Events"
    }

    /// Admin payloads carry the dates under `dates`
    fn from_api(raw: &Value) -> Option<Self> {
        super::mapper::map_admin_event(raw)
    }
}
