use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::types::{Destination, LotRecord};

pub const DEFAULT_MAPS_URL: &str = "https://www.google.com/maps/";

/// Everything but the RFC 3986 unreserved characters gets escaped.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

fn encode(component: &str) -> String {
    utf8_percent_encode(component, COMPONENT).to_string()
}

/// Builds links into the external mapping service.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkBuilder {
    base_url: String,
}

impl Default for LinkBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_MAPS_URL)
    }
}

impl LinkBuilder {
    pub fn new(base_url: &str) -> Self {
        let mut base_url = base_url.trim().to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self { base_url }
    }

    /// Link for a lot: a point search while no destination place is known,
    /// directions from the lot to the destination otherwise.
    pub fn for_lot(&self, lot: &LotRecord, destination: Option<&Destination>) -> String {
        match destination.and_then(|d| d.place_id.as_deref().map(|id| (d, id))) {
            Some((destination, place_id)) => self.directions(lot, destination, place_id),
            None => self.search(lot),
        }
    }

    fn search(&self, lot: &LotRecord) -> String {
        format!(
            "{}search/?api=1&query={}&query_place_id={}",
            self.base_url,
            encode(&lot.address),
            encode(&lot.place_id)
        )
    }

    fn directions(&self, lot: &LotRecord, destination: &Destination, place_id: &str) -> String {
        let coordinates = format!(
            "{},{}",
            destination.position.latitude, destination.position.longitude
        );
        format!(
            "{}dir/?api=1&waypoints={}&waypoints_place_id={}&destination={}&destination_place_id={}",
            self.base_url,
            encode(&lot.address),
            encode(&lot.place_id),
            encode(&coordinates),
            encode(place_id)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Coordinates;

    fn lot() -> LotRecord {
        LotRecord {
            row: 3,
            id: "SC7".to_string(),
            address: "500 S State St & Hill".to_string(),
            hours: "7:30AM - 6:00PM".to_string(),
            position: Coordinates::new(42.2740, -83.7400),
            place_id: "ChIJ_lot7".to_string(),
            passes: vec![],
            amenities: vec![],
            distance: None,
        }
    }

    fn destination(place_id: Option<&str>) -> Destination {
        Destination {
            place_id: place_id.map(str::to_string),
            name: "Michigan Union".to_string(),
            query: "Michigan Union".to_string(),
            position: Coordinates::new(42.2751, -83.7417),
        }
    }

    #[test]
    fn test_search_form_without_destination() {
        let link = LinkBuilder::default().for_lot(&lot(), None);
        assert_eq!(
            link,
            "https://www.google.com/maps/search/?api=1&query=500%20S%20State%20St%20%26%20Hill&query_place_id=ChIJ_lot7"
        );
    }

    #[test]
    fn test_search_form_when_destination_has_no_place_id() {
        let link = LinkBuilder::default().for_lot(&lot(), Some(&destination(None)));
        assert!(link.starts_with("https://www.google.com/maps/search/"));
        assert!(!link.contains("destination="));
    }

    #[test]
    fn test_directions_form() {
        let link = LinkBuilder::default().for_lot(&lot(), Some(&destination(Some("ChIJ_union"))));
        assert!(link.starts_with("https://www.google.com/maps/dir/?api=1&"));
        assert!(link.contains("waypoints_place_id=ChIJ_lot7"));
        assert!(link.contains("destination=42.2751%2C-83.7417"));
        assert!(link.contains("destination_place_id=ChIJ_union"));
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let link = LinkBuilder::new("https://maps.example.org").for_lot(&lot(), None);
        assert!(link.starts_with("https://maps.example.org/search/"));
    }
}
