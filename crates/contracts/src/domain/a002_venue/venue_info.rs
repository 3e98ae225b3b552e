use serde::{Deserialize, Serialize};

/// Venue/space pair the current user may plan events in
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VenueInfoDto {
    pub venue_id: i32,
    pub venue_name: String,
    pub space_id: Option<i32>,
    pub space_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VenueInfo {
    pub venue_id: i32,
    pub venue_name: String,
    pub space_id: Option<i32>,
    pub space_name: Option<String>,
}

pub fn map_venue_info(dto: VenueInfoDto) -> VenueInfo {
    VenueInfo {
        venue_id: dto.venue_id,
        venue_name: dto.venue_name,
        space_id: dto.space_id,
        space_name: dto.space_name,
    }
}

/// Venue with all of its selectable spaces
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GroupedVenue {
    pub venue_id: i32,
    pub venue_name: String,
    pub city: String,
    pub venue_infos: Vec<VenueInfo>,
}

/// Group venue infos by venue, keeping the order in which venues first appear
pub fn group_venue_infos<F>(infos: Vec<VenueInfo>, city_of: F) -> Vec<GroupedVenue>
where
    F: Fn(i32) -> Option<String>,
{
    let mut groups: Vec<GroupedVenue> = Vec::new();
    for info in infos {
        match groups.iter_mut().find(|g| g.venue_id == info.venue_id) {
            Some(group) => group.venue_infos.push(info),
            None => groups.push(GroupedVenue {
                venue_id: info.venue_id,
                venue_name: info.venue_name.clone(),
                city: city_of(info.venue_id).unwrap_or_default(),
                venue_infos: vec![info],
            }),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(venue_id: i32, space_id: Option<i32>) -> VenueInfo {
        map_venue_info(VenueInfoDto {
            venue_id,
            venue_name: format!("Venue {}", venue_id),
            space_id,
            space_name: space_id.map(|s| format!("Space {}", s)),
        })
    }

    #[test]
    fn test_map_venue_info() {
        let dto: VenueInfoDto = serde_json::from_str(
            r#"{"venue_id": 1, "venue_name": "Halle", "space_id": null, "space_name": null}"#,
        )
        .unwrap();
        let info = map_venue_info(dto);
        assert_eq!(info.venue_name, "Halle");
        assert_eq!(info.space_id, None);
        assert_eq!(serde_json::to_value(&info).unwrap()["venueName"], "Halle");
    }

    #[test]
    fn test_group_venue_infos() {
        let groups = group_venue_infos(
            vec![info(2, Some(1)), info(1, None), info(2, Some(3))],
            |id| (id == 2).then(|| "Flensburg".to_string()),
        );
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].venue_id, 2);
        assert_eq!(groups[0].city, "Flensburg");
        assert_eq!(groups[0].venue_infos.len(), 2);
        assert_eq!(groups[1].venue_id, 1);
        assert_eq!(groups[1].city, "");
    }
}
