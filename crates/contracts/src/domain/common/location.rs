use serde::{Deserialize, Serialize};

/// Where an event date takes place
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventLocation {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub street: Option<String>,
    pub house_number: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub state: Option<String>,
    pub lon: Option<f64>,
    pub lat: Option<f64>,
    pub description: Option<String>,
}

fn non_empty(s: &Option<String>) -> Option<&str> {
    s.as_deref().filter(|v| !v.is_empty())
}

impl EventLocation {
    /// Address line like "Hauptstraße 5, 24937 Flensburg"
    pub fn full_address(&self) -> String {
        let street_line = [non_empty(&self.street), non_empty(&self.house_number)]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");

        [
            Some(street_line.as_str()).filter(|s| !s.is_empty()),
            non_empty(&self.postal_code),
            non_empty(&self.city),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(", ")
    }

    pub fn has_coordinates(&self) -> bool {
        self.lon.is_some() && self.lat.is_some()
    }

    /// Name, else the address, else a placeholder
    pub fn display_name(&self) -> String {
        if let Some(name) = &self.name {
            return name.clone();
        }
        let address = self.full_address();
        if address.is_empty() {
            "Unknown location".to_string()
        } else {
            address
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_address() {
        let location = EventLocation {
            street: Some("Hauptstraße".into()),
            house_number: Some("5".into()),
            postal_code: Some("24937".into()),
            city: Some("Flensburg".into()),
            ..Default::default()
        };
        assert_eq!(location.full_address(), "Hauptstraße 5, 24937 Flensburg");
        assert_eq!(location.display_name(), "Hauptstraße 5, 24937 Flensburg");

        let city_only = EventLocation {
            city: Some("Aabenraa".into()),
            ..Default::default()
        };
        assert_eq!(city_only.full_address(), "Aabenraa");
    }

    #[test]
    fn test_display_name() {
        let named = EventLocation {
            name: Some("Deutsches Haus".into()),
            city: Some("Flensburg".into()),
            ..Default::default()
        };
        assert_eq!(named.display_name(), "Deutsches Haus");
        assert_eq!(EventLocation::default().display_name(), "Unknown location");
    }

    #[test]
    fn test_has_coordinates() {
        let mut location = EventLocation {
            lat: Some(54.78),
            ..Default::default()
        };
        assert!(!location.has_coordinates());
        location.lon = Some(9.43);
        assert!(location.has_coordinates());
    }
}
