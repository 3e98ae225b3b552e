use serde::{Deserialize, Serialize};

use super::event_date::EventDate;
use crate::domain::a004_image::Image;
use crate::domain::a005_event_type::EventType;
use crate::domain::common::EventLink;

/// Public event as shown in the calendar and detail pages
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub event_id: i32,
    pub release_status: Option<String>,
    pub lang: Option<String>,
    pub organization_id: i32,
    pub organization_name: String,
    pub organization_url: Option<String>,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub summary: Option<String>,
    pub types: Vec<EventType>,
    pub tags: Vec<String>,
    pub min_age: Option<i32>,
    pub max_age: Option<i32>,
    pub languages: Vec<String>,
    pub meeting_point: Option<String>,
    pub participation_info: Option<String>,
    pub online_link: Option<String>,
    pub max_attendees: Option<i32>,
    pub price_type: Option<i32>,
    pub ticket_advance: bool,
    pub ticket_required: bool,
    pub registration_required: bool,
    pub currency: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub image: Option<Image>,
    pub event_links: Vec<EventLink>,
    /// Date the event was requested for (first date of the payload)
    pub date: EventDate,
    pub further_dates: Vec<EventDate>,
}

impl Event {
    /// `date` followed by `further_dates`
    pub fn all_dates(&self) -> impl Iterator<Item = &EventDate> {
        std::iter::once(&self.date).chain(self.further_dates.iter())
    }

    pub fn has_further_dates(&self) -> bool {
        !self.further_dates.is_empty()
    }

    pub fn is_free(&self) -> bool {
        let zero = |price: Option<f64>| price.map_or(true, |p| p == 0.0);
        zero(self.min_price) && zero(self.max_price)
    }
}
