use serde_json::Value;

use super::aggregate::{AdminEvent, AdminEventDto};
use crate::domain::common::AggregateRoot;

/// Map a raw admin event payload
///
/// The API sends dates under `dates`; a missing title reads as `""`, a
/// missing organization as `0`. Non-objects and payloads whose fields have
/// the wrong types yield `None`.
pub fn map_admin_event(raw: &Value) -> Option<AdminEvent> {
    let mut obj = raw.as_object()?.clone();

    let dates = obj.remove("dates").unwrap_or(Value::Null);
    obj.insert("event_dates".to_string(), dates);

    // explicit nulls fall back to the same defaults as missing keys
    obj.retain(|_, v| !v.is_null());

    match serde_json::from_value::<AdminEventDto>(Value::Object(obj)) {
        Ok(dto) => Some(AdminEvent::from_dto(dto)),
        Err(e) => {
            log::debug!("{}: rejected API payload: {}", AdminEvent::full_name(), e);
            None
        }
    }
}
