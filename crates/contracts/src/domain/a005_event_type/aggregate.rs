use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::shared::coerce::{field, to_i32_or_null};

// ============================================================================
// Event type with names (read model)
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventTypeDto {
    pub type_id: i32,
    pub type_name: String,
    #[serde(default)]
    pub genre_id: Option<i32>,
    #[serde(default)]
    pub genre_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventType {
    pub type_id: i32,
    pub type_name: String,
    pub genre_id: Option<i32>,
    pub genre_name: Option<String>,
}

impl EventType {
    pub fn has_genre(&self) -> bool {
        self.genre_id.is_some()
    }

    /// "Concert / Jazz", or just the type name
    pub fn type_genre_label(&self) -> String {
        match self.genre_name.as_deref().filter(|g| !g.is_empty()) {
            Some(genre) => format!("{} / {}", self.type_name, genre),
            None => self.type_name.clone(),
        }
    }
}

pub fn map_event_type(dto: EventTypeDto) -> EventType {
    EventType {
        type_id: dto.type_id,
        type_name: dto.type_name,
        genre_id: dto.genre_id,
        genre_name: dto.genre_name,
    }
}

// ============================================================================
// Type/genre id pair (edit model)
// ============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct EventTypePairDto {
    pub type_id: Option<i32>,
    pub genre_id: Option<i32>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct EventTypePair {
    pub type_id: Option<i32>,
    pub genre_id: Option<i32>,
}

impl EventTypePair {
    pub fn new(type_id: Option<i32>, genre_id: Option<i32>) -> Self {
        Self { type_id, genre_id }
    }

    pub fn is_complete(&self) -> bool {
        self.type_id.is_some() && self.genre_id.is_some()
    }
}

pub fn map_event_type_pair_from_dto(dto: EventTypePairDto) -> EventTypePair {
    EventTypePair::new(dto.type_id, dto.genre_id)
}

pub fn map_event_type_pair_to_dto(pair: &EventTypePair) -> EventTypePairDto {
    EventTypePairDto {
        type_id: pair.type_id,
        genre_id: pair.genre_id,
    }
}

pub fn map_event_type_pairs_from_dto(dtos: Vec<EventTypePairDto>) -> Vec<EventTypePair> {
    dtos.into_iter().map(map_event_type_pair_from_dto).collect()
}

pub fn map_event_type_pairs_to_dto(pairs: &[EventTypePair]) -> Vec<EventTypePairDto> {
    pairs.iter().map(map_event_type_pair_to_dto).collect()
}

/// Raw pair from a list payload; entries without a type id are dropped
pub fn map_event_type_pair_from_api(raw: &Value) -> Option<EventTypePair> {
    let r = raw.as_object()?;
    let type_id = to_i32_or_null(field(r, "type_id"))?;
    Some(EventTypePair::new(Some(type_id), to_i32_or_null(field(r, "genre_id"))))
}

/// Sort by type id, then genre id; missing ids sort as -1
///
/// # Examples
/// ```
/// use contracts::domain::a005_event_type::{sort_event_types, EventTypePair};
///
/// let sorted = sort_event_types(&[
///     EventTypePair::new(Some(2), Some(1)),
///     EventTypePair::new(Some(1), None),
/// ]);
/// assert_eq!(sorted[0].type_id, Some(1));
/// ```
pub fn sort_event_types(types: &[EventTypePair]) -> Vec<EventTypePair> {
    let mut sorted = types.to_vec();
    sorted.sort_by_key(|p| (p.type_id.unwrap_or(-1), p.genre_id.unwrap_or(-1)));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_event_type() {
        let dto: EventTypeDto = serde_json::from_value(json!({
            "type_id": 3,
            "type_name": "Concert",
            "genre_id": 12,
            "genre_name": "Jazz"
        }))
        .unwrap();
        let event_type = map_event_type(dto);
        assert!(event_type.has_genre());
        assert_eq!(event_type.type_genre_label(), "Concert / Jazz");

        let plain: EventTypeDto =
            serde_json::from_value(json!({"type_id": 1, "type_name": "Theater"})).unwrap();
        let plain = map_event_type(plain);
        assert!(!plain.has_genre());
        assert_eq!(plain.type_genre_label(), "Theater");
    }

    #[test]
    fn test_pairs() {
        let dtos = vec![
            EventTypePairDto { type_id: Some(1), genre_id: None },
            EventTypePairDto { type_id: Some(2), genre_id: Some(5) },
        ];
        let pairs = map_event_type_pairs_from_dto(dtos.clone());
        assert!(!pairs[0].is_complete());
        assert!(pairs[1].is_complete());
        assert_eq!(map_event_type_pairs_to_dto(&pairs), dtos);
    }

    #[test]
    fn test_pair_from_api() {
        assert_eq!(
            map_event_type_pair_from_api(&json!({"type_id": "4", "genre_id": 2})),
            Some(EventTypePair::new(Some(4), Some(2)))
        );
        assert_eq!(map_event_type_pair_from_api(&json!({"genre_id": 2})), None);
        assert_eq!(map_event_type_pair_from_api(&json!(3)), None);
    }

    #[test]
    fn test_sort_event_types() {
        let input = vec![
            EventTypePair::new(Some(2), Some(3)),
            EventTypePair::new(Some(1), Some(9)),
            EventTypePair::new(None, Some(1)),
            EventTypePair::new(Some(2), None),
            EventTypePair::new(Some(1), Some(2)),
        ];
        let sorted = sort_event_types(&input);
        assert_eq!(
            sorted,
            vec![
                EventTypePair::new(None, Some(1)),
                EventTypePair::new(Some(1), Some(2)),
                EventTypePair::new(Some(1), Some(9)),
                EventTypePair::new(Some(2), None),
                EventTypePair::new(Some(2), Some(3)),
            ]
        );
        // input untouched
        assert_eq!(input[0], EventTypePair::new(Some(2), Some(3)));
    }
}
