use serde::{Deserialize, Serialize};

use super::Coordinates;

/// Represents a geographical bounding box, defined by minimum
/// and maximum latitude and longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl MapBounds {
    pub fn from_corners(south_west: Coordinates, north_east: Coordinates) -> Self {
        Self {
            min_lat: south_west.latitude.min(north_east.latitude),
            max_lat: south_west.latitude.max(north_east.latitude),
            min_lon: south_west.longitude.min(north_east.longitude),
            max_lon: south_west.longitude.max(north_east.longitude),
        }
    }

    /// Checks whether a given position is within the bounds.
    pub fn is_within_bounds(&self, pos: &Coordinates) -> bool {
        pos.latitude >= self.min_lat
            && pos.latitude <= self.max_lat
            && pos.longitude >= self.min_lon
            && pos.longitude <= self.max_lon
    }
}

impl Default for MapBounds {
    /// The Ann Arbor campus area.
    fn default() -> Self {
        Self::from_corners(
            Coordinates::new(42.20860196633682, -83.8326050013779),
            Coordinates::new(42.345571528943836, -83.62670724014419),
        )
    }
}
