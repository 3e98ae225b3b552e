use serde_json::{Map, Value};

use super::aggregate::Event;
use super::event_date::{map_event_date, EventDate};
use crate::domain::a004_image::{map_image_from_api, Image};
use crate::domain::a005_event_type::EventType;
use crate::domain::common::EventLink;
use crate::shared::coerce::{
    field, to_boolean, to_i32_or_null, to_number_or_null, to_nullable_string, to_string_list,
};
use crate::shared::error::{ContractError, MapResult};

fn map_event_types(value: &Value) -> Vec<EventType> {
    let Some(items) = value.as_array() else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| {
            let r = item.as_object()?;
            Some(EventType {
                type_id: to_i32_or_null(field(r, "type_id"))?,
                type_name: to_nullable_string(field(r, "type_name")).unwrap_or_default(),
                genre_id: to_i32_or_null(field(r, "genre_id")),
                genre_name: to_nullable_string(field(r, "genre_name")),
            })
        })
        .collect()
}

fn map_event_links(value: &Value) -> Vec<EventLink> {
    let Some(items) = value.as_array() else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| {
            let r = item.as_object()?;
            Some(EventLink::new(
                to_nullable_string(field(r, "label")),
                to_nullable_string(field(r, "url_type")),
                to_nullable_string(field(r, "url")),
            ))
        })
        .collect()
}

/// Main image of the `images` map; the URL is built later from the id
fn map_main_image(r: &Map<String, Value>) -> Option<Image> {
    let main = field(r, "images").get("main")?;
    map_image_from_api(main).map(|mut image| {
        image.url = None;
        image
    })
}

/// Map a raw public event payload
///
/// The first entry of `event_dates` becomes [`Event::date`]; when the payload
/// has no dates the top-level `date`/`start_time`/`end_date`/`end_time`
/// fields describe it instead.
///
/// # Errors
///
/// Fails when `event_id`, `title`, `organization_id`, `organization_name`,
/// the start date or the start time is missing.
pub fn map_event_data(raw: &Value) -> MapResult<Event> {
    let r = raw.as_object().ok_or(ContractError::InvalidInput)?;
    let get = |name: &str| field(r, name);

    let event_id = to_i32_or_null(get("event_id")).ok_or(ContractError::InvalidField("event_id"))?;
    let title = to_nullable_string(get("title")).ok_or(ContractError::MissingField("title"))?;
    let organization_id = to_i32_or_null(get("organization_id"))
        .ok_or(ContractError::InvalidField("organization_id"))?;
    let organization_name = to_nullable_string(get("organization_name"))
        .ok_or(ContractError::MissingField("organization_name"))?;

    let mut dates: Vec<EventDate> = get("event_dates")
        .as_array()
        .map(|items| items.iter().filter_map(map_event_date).collect())
        .unwrap_or_default();

    let first = dates.first();
    let start_date = first
        .and_then(|d| d.start_date.clone())
        .or_else(|| to_nullable_string(get("date")))
        .ok_or(ContractError::MissingField("start_date"))?;
    let start_time = first
        .and_then(|d| d.start_time.clone())
        .or_else(|| to_nullable_string(get("start_time")))
        .ok_or(ContractError::MissingField("start_time"))?;

    let date = if dates.is_empty() {
        EventDate {
            event_id: Some(event_id),
            start_date: Some(start_date),
            start_time: Some(start_time),
            end_date: to_nullable_string(get("end_date")),
            end_time: to_nullable_string(get("end_time")),
            ..Default::default()
        }
    } else {
        let mut first = dates.remove(0);
        first.start_date = Some(start_date);
        first.start_time = Some(start_time);
        first
    };

    log::debug!(
        "Mapped event {} with {} further date(s)",
        event_id,
        dates.len()
    );

    Ok(Event {
        event_id,
        release_status: to_nullable_string(get("release_status")),
        lang: to_nullable_string(get("lang")),
        organization_id,
        organization_name,
        organization_url: to_nullable_string(get("organization_url")),
        title,
        subtitle: to_nullable_string(get("subtitle")),
        description: to_nullable_string(get("description")),
        summary: to_nullable_string(get("summary")),
        types: map_event_types(get("event_types")),
        tags: to_string_list(get("tags")),
        min_age: to_i32_or_null(get("min_age")),
        max_age: to_i32_or_null(get("max_age")),
        languages: to_string_list(get("languages")),
        meeting_point: to_nullable_string(get("meeting_point")),
        participation_info: to_nullable_string(get("participation_info")),
        online_link: to_nullable_string(get("online_link")),
        max_attendees: to_i32_or_null(get("max_attendees")),
        price_type: to_i32_or_null(get("price_type")),
        ticket_advance: to_boolean(get("ticket_advance")),
        ticket_required: to_boolean(get("ticket_required")),
        registration_required: to_boolean(get("registration_required")),
        currency: to_nullable_string(get("currency")),
        min_price: to_number_or_null(get("min_price")),
        max_price: to_number_or_null(get("max_price")),
        image: map_main_image(r),
        event_links: map_event_links(get("event_links")),
        date,
        further_dates: dates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "event_id": "77",
            "title": "Jazz im Hof",
            "organization_id": 3,
            "organization_name": "Kulturhaus",
            "event_types": [
                {"type_id": 2, "type_name": "Concert", "genre_id": 9, "genre_name": "Jazz"},
                {"type_name": "broken"}
            ],
            "tags": ["outdoor", "summer"],
            "languages": ["de"],
            "ticket_required": "1",
            "min_price": "12.5",
            "images": {
                "main": {"id": "5", "url": "ignored", "alt": "Stage", "license": 1}
            },
            "event_links": [
                {"label": "Tickets", "url_type": "ticket", "url": "https://tickets.example.org"}
            ],
            "event_dates": [
                {"id": 1, "start_date": "2026-07-01", "start_time": "19:30", "city": "Flensburg"},
                {"id": 2, "start_date": "2026-07-02", "start_time": "19:30"}
            ]
        })
    }

    #[test]
    fn test_map_event_data() {
        let event = map_event_data(&sample()).unwrap();
        assert_eq!(event.event_id, 77);
        assert_eq!(event.title, "Jazz im Hof");
        assert_eq!(event.types.len(), 1);
        assert_eq!(event.types[0].type_genre_label(), "Concert / Jazz");
        assert_eq!(event.tags, vec!["outdoor", "summer"]);
        assert!(event.ticket_required);
        assert!(!event.registration_required);
        assert_eq!(event.min_price, Some(12.5));
        assert!(!event.is_free());

        let image = event.image.as_ref().unwrap();
        assert_eq!(image.id, Some(5));
        assert_eq!(image.url, None);

        assert_eq!(event.event_links[0].link_type.as_deref(), Some("ticket"));

        assert_eq!(event.date.id, Some(1));
        assert_eq!(
            event.date.location.as_ref().and_then(|l| l.city.as_deref()),
            Some("Flensburg")
        );
        assert_eq!(event.further_dates.len(), 1);
        assert_eq!(event.further_dates[0].start_date.as_deref(), Some("2026-07-02"));
        assert_eq!(event.all_dates().count(), 2);
    }

    #[test]
    fn test_top_level_date_fallback() {
        let mut raw = sample();
        raw["event_dates"] = json!([]);
        raw["date"] = json!("2026-08-01");
        raw["start_time"] = json!("20:00");
        raw["end_time"] = json!("23:00");

        let event = map_event_data(&raw).unwrap();
        assert_eq!(event.date.start_date.as_deref(), Some("2026-08-01"));
        assert_eq!(event.date.end_time.as_deref(), Some("23:00"));
        assert_eq!(event.date.event_id, Some(77));
        assert!(!event.has_further_dates());
    }

    #[test]
    fn test_required_fields() {
        assert_eq!(map_event_data(&json!("x")), Err(ContractError::InvalidInput));

        let cases = [
            ("event_id", ContractError::InvalidField("event_id")),
            ("title", ContractError::MissingField("title")),
            ("organization_id", ContractError::InvalidField("organization_id")),
            ("organization_name", ContractError::MissingField("organization_name")),
        ];
        for (name, expected) in cases {
            let mut raw = sample();
            raw.as_object_mut().unwrap().remove(name);
            assert_eq!(map_event_data(&raw), Err(expected));
        }

        let mut raw = sample();
        raw["event_dates"] = json!([{"start_date": "2026-07-01"}]);
        assert_eq!(
            map_event_data(&raw),
            Err(ContractError::MissingField("start_time"))
        );

        raw["event_dates"] = json!(null);
        assert_eq!(
            map_event_data(&raw),
            Err(ContractError::MissingField("start_date"))
        );
    }
}
