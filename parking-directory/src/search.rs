use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::DirectoryError;
use crate::types::{Coordinates, Destination, MapBounds, Place};

/// Source of place suggestions for the location search bar.
pub trait PlaceProvider {
    /// Places whose name matches `query`, best matches first.
    fn autocomplete(&self, query: &str) -> Vec<Place>;
}

#[derive(Debug, Deserialize)]
struct PlaceRow {
    place_id: String,
    name: String,
    latitude: f64,
    longitude: f64,
}

/// A fixed list of named places read from a CSV gazetteer
/// (`place_id,name,latitude,longitude`).
#[derive(Debug, Clone, Default)]
pub struct Gazetteer {
    places: Vec<Place>,
}

impl Gazetteer {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DirectoryError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut places = Vec::new();
        for row in reader.deserialize::<PlaceRow>() {
            let row = row?;
            places.push(Place {
                place_id: row.place_id,
                name: row.name,
                position: Coordinates::new(row.latitude, row.longitude),
            });
        }
        Ok(Self { places })
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DirectoryError> {
        let gazetteer = Self::from_reader(File::open(path.as_ref())?)?;
        log::info!(
            "loaded {} places from {}",
            gazetteer.places.len(),
            path.as_ref().display()
        );
        Ok(gazetteer)
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }
}

impl PlaceProvider for Gazetteer {
    /// Case-insensitive substring match; names starting with the query come first.
    fn autocomplete(&self, query: &str) -> Vec<Place> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }
        let mut matches: Vec<(bool, &Place)> = self
            .places
            .iter()
            .filter_map(|place| {
                let name = place.name.to_lowercase();
                name.contains(&query).then(|| (!name.starts_with(&query), place))
            })
            .collect();
        matches.sort_by_key(|(not_prefix, _)| *not_prefix);
        matches.into_iter().map(|(_, place)| place.clone()).collect()
    }
}

/// The search bar: autocompletion restricted to a bounding box.
pub struct LocationSearch {
    provider: Box<dyn PlaceProvider>,
    bounds: MapBounds,
    max_suggestions: usize,
}

impl LocationSearch {
    pub fn new(provider: Box<dyn PlaceProvider>, bounds: MapBounds, max_suggestions: usize) -> Self {
        Self {
            provider,
            bounds,
            max_suggestions,
        }
    }

    /// Suggestions for `query`. A `lat, lon` query inside the bounds is offered first as a
    /// place of its own; nothing outside the bounds is ever suggested.
    pub fn suggest(&self, query: &str) -> Vec<Place> {
        let mut suggestions = Vec::new();
        if let Some(position) = Coordinates::parse_pair(query) {
            if self.bounds.is_within_bounds(&position) {
                suggestions.push(Place {
                    place_id: String::new(),
                    name: format!("{}, {}", position.latitude, position.longitude),
                    position,
                });
            }
        }
        suggestions.extend(
            self.provider
                .autocomplete(query)
                .into_iter()
                .filter(|place| self.bounds.is_within_bounds(&place.position)),
        );
        suggestions.truncate(self.max_suggestions);
        suggestions
    }

    /// Turns the chosen suggestion into the new destination.
    pub fn select(&self, place: Place, query: &str) -> Destination {
        log::info!("destination selected: {}", place.name);
        Destination::from_place(place, query)
    }
}
