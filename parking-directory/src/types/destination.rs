use super::Coordinates;

/// A place returned by the location search.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    /// Empty when the place was typed in as raw coordinates.
    pub place_id: String,
    pub name: String,
    pub position: Coordinates,
}

/// The user's chosen reference point for distance sorting and directions.
#[derive(Debug, Clone, PartialEq)]
pub struct Destination {
    pub place_id: Option<String>,
    pub name: String,
    /// The raw text typed into the search bar.
    pub query: String,
    pub position: Coordinates,
}

impl Destination {
    pub fn from_place(place: Place, query: &str) -> Self {
        let place_id = if place.place_id.trim().is_empty() {
            None
        } else {
            Some(place.place_id)
        };
        Self {
            place_id,
            name: place.name,
            query: query.trim().to_string(),
            position: place.position,
        }
    }
}
