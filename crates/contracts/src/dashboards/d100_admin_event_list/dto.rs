use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::a005_event_type::EventTypePair;
use crate::shared::coerce::{field, to_boolean, to_i32_or_null, to_nullable_string, to_string_or};
use crate::shared::format::format_event_date_time;

/// Number of image slots an event carries
pub const IMAGE_SLOTS: usize = 8;

/// Request for the organization's event list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminEventListRequest {
    pub organization_id: i32,
    /// Earliest start date in format "YYYY-MM-DD"
    pub date_from: Option<String>,
    /// UI language of the returned type names
    pub lang: Option<String>,
}

impl AdminEventListRequest {
    /// Path and query for the admin API
    pub fn path(&self) -> String {
        let mut query = Vec::new();
        if let Some(date) = self.date_from.as_deref().filter(|d| !d.is_empty()) {
            query.push(format!("start={}", urlencoding::encode(date)));
        }
        if let Some(lang) = self.lang.as_deref().filter(|l| !l.is_empty()) {
            query.push(format!("lang={}", urlencoding::encode(lang)));
        }
        let base = format!("/api/admin/organization/{}/events", self.organization_id);
        if query.is_empty() {
            base
        } else {
            format!("{}?{}", base, query.join("&"))
        }
    }
}

/// One event date row of the admin event list
///
/// The `can_*` permissions are read with [`to_boolean`]: `"0"`, `"false"` and
/// `"no"` mean false, unlike plain JavaScript truthiness where any non-empty
/// string is true.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdminListEvent {
    pub event_id: i32,
    pub event_date_id: Option<i32>,
    pub title: String,
    pub subtitle: Option<String>,
    pub organization_id: i32,
    pub organization_name: String,
    pub start_date: String,
    pub start_time: String,
    pub end_date: Option<String>,
    pub end_time: Option<String>,
    pub venue_id: Option<i32>,
    pub venue_name: Option<String>,
    pub space_id: Option<i32>,
    pub space_name: Option<String>,
    pub location_id: Option<i32>,
    pub location_name: Option<String>,
    /// `None` when the payload has no type list at all
    pub event_types: Option<Vec<EventTypePair>>,
    /// Always [`IMAGE_SLOTS`] entries
    pub image_ids: Vec<Option<i32>>,
    pub release_status_id: Option<i32>,
    pub release_status_name: Option<String>,
    pub release_date: Option<String>,
    pub can_edit_event: bool,
    pub can_delete_event: bool,
    pub can_release_event: bool,
    /// Position within a date series, 0 when not part of one
    pub time_series_index: i32,
    /// Size of the date series, 0 when not part of one
    pub time_series: i32,
}

impl AdminListEvent {
    /// Id of the first filled image slot
    pub fn main_image_id(&self) -> Option<i32> {
        self.image_ids.iter().flatten().next().copied()
    }

    pub fn is_series(&self) -> bool {
        self.time_series > 1
    }

    /// "2/5" style label for series dates
    pub fn series_label(&self) -> Option<String> {
        self.is_series()
            .then(|| format!("{}/{}", self.time_series_index, self.time_series))
    }

    pub fn place_name(&self) -> Option<&str> {
        self.space_name
            .as_deref()
            .or(self.venue_name.as_deref())
            .or(self.location_name.as_deref())
    }

    pub fn period_label(&self, locale: &str) -> String {
        format_event_date_time(
            Some(&self.start_date),
            Some(&self.start_time),
            self.end_date.as_deref(),
            self.end_time.as_deref(),
            locale,
        )
    }
}

fn normalize_image_ids(raw: &serde_json::Map<String, Value>) -> Vec<Option<i32>> {
    let mut ids: Vec<Option<i32>> = match field(raw, "image_ids").as_array() {
        Some(items) => items.iter().take(IMAGE_SLOTS).map(to_i32_or_null).collect(),
        None => vec![to_i32_or_null(field(raw, "image_id"))],
    };
    ids.resize(IMAGE_SLOTS, None);
    ids
}

fn map_type_pair(raw: &Value) -> Option<EventTypePair> {
    let r = raw.as_object()?;
    let type_id = to_i32_or_null(field(r, "type_id"))?;
    Some(EventTypePair::new(Some(type_id), to_i32_or_null(field(r, "genre_id"))))
}

/// Map one raw row of the admin event list; rows without an event id are dropped
pub fn map_dashboard_event(raw: &Value) -> Option<AdminListEvent> {
    let r = raw.as_object()?;
    let get = |name: &str| field(r, name);

    let event_id = to_i32_or_null(get("event_id"))?;

    let event_types = get("event_types")
        .as_array()
        .map(|items| items.iter().filter_map(map_type_pair).collect());

    Some(AdminListEvent {
        event_id,
        event_date_id: to_i32_or_null(get("event_date_id")),
        title: to_string_or(get("event_title"), ""),
        subtitle: to_nullable_string(get("event_subtitle")),
        organization_id: to_i32_or_null(get("event_organization_id")).unwrap_or(0),
        organization_name: to_string_or(get("event_organization_name"), ""),
        start_date: to_string_or(get("start_date"), ""),
        start_time: to_string_or(get("start_time"), ""),
        end_date: to_nullable_string(get("end_date")),
        end_time: to_nullable_string(get("end_time")),
        venue_id: to_i32_or_null(get("venue_id")),
        venue_name: to_nullable_string(get("venue_name")),
        space_id: to_i32_or_null(get("space_id")),
        space_name: to_nullable_string(get("space_name")),
        location_id: to_i32_or_null(get("location_id")),
        location_name: to_nullable_string(get("location_name")),
        event_types,
        image_ids: normalize_image_ids(r),
        release_status_id: to_i32_or_null(get("release_status_id")),
        release_status_name: to_nullable_string(get("release_status_name")),
        release_date: to_nullable_string(get("release_date")),
        can_edit_event: to_boolean(get("can_edit_event")),
        can_delete_event: to_boolean(get("can_delete_event")),
        can_release_event: to_boolean(get("can_release_event")),
        time_series_index: to_i32_or_null(get("time_series_index")).unwrap_or(0),
        time_series: to_i32_or_null(get("time_series")).unwrap_or(0),
    })
}

/// Map a raw list response, skipping rows that cannot be mapped
pub fn map_dashboard_events(raw: &Value) -> Vec<AdminListEvent> {
    let Some(items) = raw.as_array() else {
        log::warn!("Admin event list response is not an array");
        return Vec::new();
    };
    let events: Vec<AdminListEvent> = items.iter().filter_map(map_dashboard_event).collect();
    if events.len() < items.len() {
        log::debug!(
            "Skipped {} admin event row(s) without event id",
            items.len() - events.len()
        );
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_map_dashboard_event() {
        let row = map_dashboard_event(&json!({
            "event_id": "12",
            "event_date_id": 40,
            "event_title": "Lesung",
            "event_organization_id": 3,
            "event_organization_name": "Stadtbibliothek",
            "start_date": "2026-02-05",
            "start_time": "19:30",
            "end_time": "21:00",
            "venue_name": "Bibliothek",
            "event_types": [{"type_id": 4, "genre_id": null}, {"genre_id": 2}],
            "image_ids": [null, "9", 10],
            "can_edit_event": true,
            "can_delete_event": 0,
            "can_release_event": "1",
            "time_series_index": 2,
            "time_series": 5
        }))
        .unwrap();

        assert_eq!(row.event_id, 12);
        assert_eq!(row.title, "Lesung");
        assert_eq!(row.event_types, Some(vec![EventTypePair::new(Some(4), None)]));
        assert_eq!(row.image_ids.len(), IMAGE_SLOTS);
        assert_eq!(&row.image_ids[..3], &[None, Some(9), Some(10)]);
        assert_eq!(row.main_image_id(), Some(9));
        assert!(row.can_edit_event);
        assert!(!row.can_delete_event);
        assert!(row.can_release_event);
        assert_eq!(row.series_label().as_deref(), Some("2/5"));
        assert_eq!(row.place_name(), Some("Bibliothek"));
        assert_eq!(row.period_label("en"), "Thu, 02/05/2026, 19:30 - 21:00");
    }

    #[test]
    fn test_defaults() {
        let row = map_dashboard_event(&json!({"event_id": 1, "image_id": 6})).unwrap();
        assert_eq!(row.image_ids[0], Some(6));
        assert!(row.image_ids[1..].iter().all(Option::is_none));
        assert_eq!(row.organization_id, 0);
        assert_eq!(row.title, "");
        assert_eq!(row.event_types, None);
        assert_eq!(row.time_series_index, 0);
        assert_eq!(row.time_series, 0);
        assert_eq!(row.series_label(), None);

        let many: Vec<i32> = (1..=10).collect();
        let row = map_dashboard_event(&json!({"event_id": 1, "image_ids": many})).unwrap();
        assert_eq!(row.image_ids.len(), IMAGE_SLOTS);
        assert_eq!(row.image_ids[7], Some(8));
    }

    #[test]
    fn test_event_id_required() {
        assert!(map_dashboard_event(&json!({"event_title": "x"})).is_none());
        assert!(map_dashboard_event(&json!(null)).is_none());

        let row = map_dashboard_event(&json!({
            "event_id": 2,
            "can_edit_event": "0",
            "can_delete_event": "false",
            "can_release_event": "yes"
        }))
        .unwrap();
        assert!(!row.can_edit_event);
        assert!(!row.can_delete_event);
        assert!(row.can_release_event);

        let rows = map_dashboard_events(&json!([{"event_id": 1}, {"event_id": "n/a"}, 5]));
        assert_eq!(rows.len(), 1);
        assert!(map_dashboard_events(&json!({"event_id": 1})).is_empty());
    }

    #[test]
    fn test_request_path() {
        let request = AdminEventListRequest {
            organization_id: 3,
            date_from: Some("2026-01-01".into()),
            lang: Some("de".into()),
        };
        assert_eq!(
            request.path(),
            "/api/admin/organization/3/events?start=2026-01-01&lang=de"
        );
        let request = AdminEventListRequest {
            organization_id: 3,
            date_from: None,
            lang: None,
        };
        assert_eq!(request.path(), "/api/admin/organization/3/events");
    }

    #[test]
    fn test_request_path_encodes_query_values() {
        let request = AdminEventListRequest {
            organization_id: 1,
            date_from: Some("2026-01-01 10:00".into()),
            lang: Some("de&admin=1".into()),
        };
        assert_eq!(
            request.path(),
            "/api/admin/organization/1/events?start=2026-01-01%2010%3A00&lang=de%26admin%3D1"
        );
    }
}
