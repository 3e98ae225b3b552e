use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::common::EventLocation;
use crate::shared::coerce::{field, to_boolean, to_i32_or_null, to_nullable_string, to_number_or_null};

/// Event date as delivered by the public event API, location fields inlined
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct EventDateDto {
    pub id: Option<i32>,
    pub event_id: Option<i32>,
    pub release_status: Option<String>,
    pub start_date: Option<String>,
    pub start_time: Option<String>,
    pub end_date: Option<String>,
    pub end_time: Option<String>,
    pub entry_time: Option<String>,
    pub duration: Option<i32>,
    pub all_day: Option<bool>,
    pub accessibility_flags: Option<String>,
    pub accessibility_summary: Option<String>,
    pub accessibility_info: Option<String>,
    pub visitor_flags: Option<String>,
    pub street: Option<String>,
    pub house_number: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub state: Option<String>,
    pub lon: Option<f64>,
    pub lat: Option<f64>,
    pub total_capacity: Option<i32>,
    pub seating_capacity: Option<i32>,
    pub building_level: Option<i32>,
    pub venue_id: Option<i32>,
    pub venue_name: Option<String>,
    pub venue_website: Option<String>,
    pub venue_logo_id: Option<i32>,
    pub venue_logo_url: Option<String>,
    pub space_id: Option<i32>,
    pub space_name: Option<String>,
    pub space_website: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventDate {
    pub id: Option<i32>,
    pub event_id: Option<i32>,
    pub release_status: Option<String>,
    pub start_date: Option<String>,
    pub start_time: Option<String>,
    pub end_date: Option<String>,
    pub end_time: Option<String>,
    pub entry_time: Option<String>,
    pub duration: Option<i32>,
    pub all_day: bool,
    pub accessibility_flags: Option<String>,
    pub accessibility_summary: Option<String>,
    pub accessibility_info: Option<String>,
    pub visitor_flags: Option<String>,
    pub location: Option<EventLocation>,
    pub total_capacity: Option<i32>,
    pub seating_capacity: Option<i32>,
    pub building_level: Option<i32>,
    pub venue_id: Option<i32>,
    pub venue_name: Option<String>,
    pub venue_website: Option<String>,
    pub venue_logo_id: Option<i32>,
    pub venue_logo_url: Option<String>,
    pub space_id: Option<i32>,
    pub space_name: Option<String>,
    pub space_website: Option<String>,
}

impl EventDate {
    /// Start and end fall on the same day (or no end date is given)
    pub fn is_single_day(&self) -> bool {
        match (&self.start_date, &self.end_date) {
            (_, None) => true,
            (Some(start), Some(end)) => start == end,
            (None, Some(_)) => false,
        }
    }

    /// Space name, else venue name
    pub fn place_name(&self) -> Option<&str> {
        self.space_name.as_deref().or(self.venue_name.as_deref())
    }
}

pub fn map_event_date_from_dto(dto: EventDateDto) -> EventDate {
    EventDate {
        id: dto.id,
        event_id: dto.event_id,
        release_status: dto.release_status,
        start_date: dto.start_date,
        start_time: dto.start_time,
        end_date: dto.end_date,
        end_time: dto.end_time,
        entry_time: dto.entry_time,
        duration: dto.duration,
        all_day: dto.all_day.unwrap_or(false),
        accessibility_flags: dto.accessibility_flags,
        accessibility_summary: dto.accessibility_summary,
        accessibility_info: dto.accessibility_info,
        visitor_flags: dto.visitor_flags,
        location: Some(EventLocation {
            street: dto.street,
            house_number: dto.house_number,
            postal_code: dto.postal_code,
            city: dto.city,
            country: dto.country,
            state: dto.state,
            lon: dto.lon,
            lat: dto.lat,
            ..Default::default()
        }),
        total_capacity: dto.total_capacity,
        seating_capacity: dto.seating_capacity,
        building_level: dto.building_level,
        venue_id: dto.venue_id,
        venue_name: dto.venue_name,
        venue_website: dto.venue_website,
        venue_logo_id: dto.venue_logo_id,
        venue_logo_url: dto.venue_logo_url,
        space_id: dto.space_id,
        space_name: dto.space_name,
        space_website: dto.space_website,
    }
}

/// Location fields of a raw date object; `None` when it carries no address
/// and no coordinates
pub fn map_event_location(raw: &Value) -> Option<EventLocation> {
    let r = raw.as_object()?;
    let get = |name: &str| field(r, name);

    let street = to_nullable_string(get("street"));
    let city = to_nullable_string(get("city"));
    let country = to_nullable_string(get("country"));
    let lon = to_number_or_null(get("lon"));
    let lat = to_number_or_null(get("lat"));

    if street.is_none() && city.is_none() && country.is_none() && lon.is_none() && lat.is_none() {
        return None;
    }

    Some(EventLocation {
        id: None,
        name: to_nullable_string(get("location")),
        street,
        house_number: to_nullable_string(get("house_number")),
        postal_code: to_nullable_string(get("postal_code")),
        city,
        country,
        state: to_nullable_string(get("state")),
        lon,
        lat,
        description: to_nullable_string(get("location_description")),
    })
}

/// Lenient mapping of a raw date object
pub fn map_event_date(raw: &Value) -> Option<EventDate> {
    let r = raw.as_object()?;
    let get = |name: &str| field(r, name);

    Some(EventDate {
        id: to_i32_or_null(get("id")),
        event_id: to_i32_or_null(get("event_id")),
        release_status: to_nullable_string(get("release_status")),
        start_date: to_nullable_string(get("start_date")),
        start_time: to_nullable_string(get("start_time")),
        end_date: to_nullable_string(get("end_date")),
        end_time: to_nullable_string(get("end_time")),
        entry_time: to_nullable_string(get("entry_time")),
        duration: to_i32_or_null(get("duration")),
        all_day: to_boolean(get("all_day")),
        accessibility_flags: to_nullable_string(get("accessibility_flags")),
        accessibility_summary: to_nullable_string(get("accessibility_summary")),
        accessibility_info: to_nullable_string(get("accessibility_info")),
        visitor_flags: to_nullable_string(get("visitor_flags")),
        location: map_event_location(raw),
        total_capacity: to_i32_or_null(get("total_capacity")),
        seating_capacity: to_i32_or_null(get("seating_capacity")),
        building_level: to_i32_or_null(get("building_level")),
        venue_id: to_i32_or_null(get("venue_id")),
        venue_name: to_nullable_string(get("venue_name")),
        venue_website: to_nullable_string(get("venue_website")),
        venue_logo_id: to_i32_or_null(get("venue_logo_id")),
        venue_logo_url: to_nullable_string(get("venue_logo_url")),
        space_id: to_i32_or_null(get("space_id")),
        space_name: to_nullable_string(get("space_name")),
        space_website: to_nullable_string(get("space_website")),
    })
}
