use serde::{Deserialize, Serialize};

/// Date of an event as edited in the admin form
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AdminEventDateDto {
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    pub event_id: i32,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub entry_time: Option<String>,
    #[serde(default)]
    pub duration: Option<i32>,
    #[serde(default)]
    pub accessibility_info: Option<String>,
    #[serde(default)]
    pub venue_id: Option<i32>,
    #[serde(default)]
    pub space_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdminEventDate {
    pub id: i32,
    pub event_id: i32,
    pub start_date: Option<String>,
    pub start_time: Option<String>,
    pub end_date: Option<String>,
    pub end_time: Option<String>,
    pub entry_time: Option<String>,
    /// Minutes
    pub duration: Option<i32>,
    pub accessibility_info: Option<String>,
    pub venue_id: Option<i32>,
    pub space_id: Option<i32>,
}

impl AdminEventDate {
    /// No start and no end time
    pub fn is_all_day(&self) -> bool {
        is_blank(&self.start_time) && is_blank(&self.end_time)
    }

    /// Whether the date overrides the event's venue
    pub fn has_own_venue(&self) -> bool {
        self.venue_id.is_some()
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}

pub fn map_admin_event_date_from_api(dto: AdminEventDateDto) -> AdminEventDate {
    AdminEventDate {
        id: dto.id,
        event_id: dto.event_id,

        start_date: dto.start_date,
        start_time: dto.start_time,
        end_date: dto.end_date,
        end_time: dto.end_time,
        entry_time: dto.entry_time,

        duration: dto.duration,
        accessibility_info: dto.accessibility_info,

        venue_id: dto.venue_id,
        space_id: dto.space_id,
    }
}

pub fn map_admin_event_dates_from_api(dtos: Option<Vec<AdminEventDateDto>>) -> Vec<AdminEventDate> {
    dtos.unwrap_or_default()
        .into_iter()
        .map(map_admin_event_date_from_api)
        .collect()
}

pub fn map_admin_event_date_to_api(date: &AdminEventDate) -> AdminEventDateDto {
    AdminEventDateDto {
        id: date.id,
        event_id: date.event_id,

        start_date: date.start_date.clone(),
        start_time: date.start_time.clone(),
        end_date: date.end_date.clone(),
        end_time: date.end_time.clone(),
        entry_time: date.entry_time.clone(),

        duration: date.duration,
        accessibility_info: date.accessibility_info.clone(),

        venue_id: date.venue_id,
        space_id: date.space_id,
    }
}

pub fn map_admin_event_dates_to_api(dates: Option<&[AdminEventDate]>) -> Vec<AdminEventDateDto> {
    dates
        .map(|d| d.iter().map(map_admin_event_date_to_api).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_map_from_api() {
        let dto: AdminEventDateDto = serde_json::from_value(json!({
            "id": 31,
            "event_id": 8,
            "start_date": "2026-03-01",
            "start_time": "19:30",
            "end_time": null,
            "venue_id": 4
        }))
        .unwrap();
        let date = map_admin_event_date_from_api(dto);
        assert_eq!(date.id, 31);
        assert_eq!(date.start_time.as_deref(), Some("19:30"));
        assert_eq!(date.end_date, None);
        assert!(!date.is_all_day());
        assert!(date.has_own_venue());
    }

    #[test]
    fn test_all_day() {
        let date = AdminEventDate {
            start_date: Some("2026-03-01".into()),
            start_time: Some(String::new()),
            ..Default::default()
        };
        assert!(date.is_all_day());
    }

    #[test]
    fn test_lists() {
        assert!(map_admin_event_dates_from_api(None).is_empty());
        assert!(map_admin_event_dates_to_api(None).is_empty());

        let dates = vec![AdminEventDate {
            id: 1,
            event_id: 2,
            duration: Some(90),
            ..Default::default()
        }];
        let dtos = map_admin_event_dates_to_api(Some(&dates));
        assert_eq!(dtos[0].duration, Some(90));
        assert_eq!(map_admin_event_dates_from_api(Some(dtos)), dates);
    }
}
