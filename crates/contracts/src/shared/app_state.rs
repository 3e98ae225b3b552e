//! Dashboard-wide UI state: selected organization, list presentation,
//! calendar filters and the active header filter panel.

use serde::{Deserialize, Serialize};

use crate::enums::{EventGroupingMode, EventViewMode};

/// Default search radius around the user's position, km
pub const DEFAULT_LOCATION_RADIUS: u32 = 25;

/// Type filter value meaning "no type restriction"
pub const ALL_TYPES: &str = "all";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventVenueSummary {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub event_date_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventOrganizationSummary {
    pub id: i32,
    pub name: String,
    pub city: Option<String>,
    pub event_date_count: u32,
}

/// Active type filter: either the `"all"` marker or a type id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeFilter {
    Id(i32),
    Key(String),
}

impl Default for TypeFilter {
    fn default() -> Self {
        TypeFilter::Key(ALL_TYPES.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarFilters {
    pub search_query: String,
    pub selected_date: Option<String>,
    pub selected_end_date: Option<String>,
    pub selected_type: String,
    pub active_selected_type: Option<TypeFilter>,
    pub selected_venue: Option<EventVenueSummary>,
    pub selected_organization: Option<EventOrganizationSummary>,
    pub show_my_location: bool,
    pub user_latitude: Option<f64>,
    pub user_longitude: Option<f64>,
    pub location_radius: u32,
}

impl Default for CalendarFilters {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            selected_date: None,
            selected_end_date: None,
            selected_type: ALL_TYPES.to_string(),
            active_selected_type: Some(TypeFilter::default()),
            selected_venue: None,
            selected_organization: None,
            show_my_location: false,
            user_latitude: None,
            user_longitude: None,
            location_radius: DEFAULT_LOCATION_RADIUS,
        }
    }
}

/// Partial update of [`CalendarFilters`]
///
/// Outer `None` leaves a field unchanged; for optional fields `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalendarFiltersPatch {
    pub search_query: Option<String>,
    pub selected_date: Option<Option<String>>,
    pub selected_end_date: Option<Option<String>>,
    pub selected_type: Option<String>,
    pub active_selected_type: Option<Option<TypeFilter>>,
    pub selected_venue: Option<Option<EventVenueSummary>>,
    pub selected_organization: Option<Option<EventOrganizationSummary>>,
    pub show_my_location: Option<bool>,
    pub user_latitude: Option<Option<f64>>,
    pub user_longitude: Option<Option<f64>>,
    pub location_radius: Option<u32>,
}

impl CalendarFilters {
    pub fn apply(&mut self, patch: CalendarFiltersPatch) {
        if let Some(v) = patch.search_query {
            self.search_query = v;
        }
        if let Some(v) = patch.selected_date {
            self.selected_date = v;
        }
        if let Some(v) = patch.selected_end_date {
            self.selected_end_date = v;
        }
        if let Some(v) = patch.selected_type {
            self.selected_type = v;
        }
        if let Some(v) = patch.active_selected_type {
            self.active_selected_type = v;
        }
        if let Some(v) = patch.selected_venue {
            self.selected_venue = v;
        }
        if let Some(v) = patch.selected_organization {
            self.selected_organization = v;
        }
        if let Some(v) = patch.show_my_location {
            self.show_my_location = v;
        }
        if let Some(v) = patch.user_latitude {
            self.user_latitude = v;
        }
        if let Some(v) = patch.user_longitude {
            self.user_longitude = v;
        }
        if let Some(v) = patch.location_radius {
            self.location_radius = v;
        }
    }

    /// Whether anything differs from the defaults
    pub fn is_active(&self) -> bool {
        *self != Self::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub organization_id: Option<i32>,
    pub organization_name: Option<String>,
    pub event_view_mode: EventViewMode,
    pub event_grouping_mode: EventGroupingMode,
    pub calendar_filters: CalendarFilters,
    /// Key of the filter panel shown in the header, if any
    pub active_filter_panel: Option<String>,
}

impl AppState {
    pub fn set_organization(&mut self, id: Option<i32>, name: Option<String>) {
        self.organization_id = id;
        self.organization_name = name;
    }

    pub fn clear_organization(&mut self) {
        self.organization_id = None;
        self.organization_name = None;
    }

    pub fn set_view_mode(&mut self, mode: EventViewMode) {
        self.event_view_mode = mode;
    }

    pub fn set_grouping_mode(&mut self, mode: EventGroupingMode) {
        self.event_grouping_mode = mode;
    }

    pub fn update_calendar_filters(&mut self, patch: CalendarFiltersPatch) {
        self.calendar_filters.apply(patch);
    }

    pub fn reset_calendar_filters(&mut self) {
        self.calendar_filters = CalendarFilters::default();
    }

    pub fn set_filter_panel(&mut self, panel: impl Into<String>) {
        self.active_filter_panel = Some(panel.into());
    }

    pub fn clear_filter_panel(&mut self) {
        self.active_filter_panel = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filters() {
        let filters = CalendarFilters::default();
        assert_eq!(filters.selected_type, "all");
        assert_eq!(filters.location_radius, 25);
        assert_eq!(filters.active_selected_type, Some(TypeFilter::Key("all".into())));
        assert!(!filters.is_active());
    }

    #[test]
    fn test_update_and_reset_filters() {
        let mut state = AppState::default();
        state.update_calendar_filters(CalendarFiltersPatch {
            search_query: Some("jazz".into()),
            selected_date: Some(Some("2026-03-01".into())),
            active_selected_type: Some(Some(TypeFilter::Id(4))),
            ..Default::default()
        });
        assert_eq!(state.calendar_filters.search_query, "jazz");
        assert_eq!(state.calendar_filters.selected_date.as_deref(), Some("2026-03-01"));
        assert_eq!(state.calendar_filters.location_radius, 25);
        assert!(state.calendar_filters.is_active());

        state.update_calendar_filters(CalendarFiltersPatch {
            selected_date: Some(None),
            ..Default::default()
        });
        assert_eq!(state.calendar_filters.selected_date, None);
        assert_eq!(state.calendar_filters.search_query, "jazz");

        state.reset_calendar_filters();
        assert_eq!(state.calendar_filters, CalendarFilters::default());
    }

    #[test]
    fn test_organization_and_modes() {
        let mut state = AppState::default();
        assert_eq!(state.event_view_mode, EventViewMode::Detailed);
        assert_eq!(state.event_grouping_mode, EventGroupingMode::Daily);

        state.set_organization(Some(3), Some("Kulturhaus".into()));
        state.set_view_mode(EventViewMode::Tiles);
        state.set_grouping_mode(EventGroupingMode::Monthly);
        assert_eq!(state.organization_id, Some(3));
        assert_eq!(state.event_view_mode, EventViewMode::Tiles);

        state.clear_organization();
        assert_eq!(state.organization_id, None);
        assert_eq!(state.organization_name, None);
    }

    #[test]
    fn test_filter_panel() {
        let mut state = AppState::default();
        state.set_filter_panel("event-filters");
        assert_eq!(state.active_filter_panel.as_deref(), Some("event-filters"));
        state.clear_filter_panel();
        assert!(state.active_filter_panel.is_none());
    }

    #[test]
    fn test_serde_camel_case() {
        let json = serde_json::to_value(AppState::default()).unwrap();
        assert_eq!(json["eventViewMode"], "detailed");
        assert_eq!(json["calendarFilters"]["locationRadius"], 25);
        assert_eq!(json["calendarFilters"]["activeSelectedType"], "all");
    }
}
