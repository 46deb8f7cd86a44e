use serde::{Deserialize, Serialize};

/// A point on the Earth's surface, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Parses a `"lat, lon"` pair, as typed into the search bar.
    pub fn parse_pair(text: &str) -> Option<Self> {
        let (lat, lon) = text.split_once(',')?;
        let latitude: f64 = lat.trim().parse().ok()?;
        let longitude: f64 = lon.trim().parse().ok()?;
        let coordinates = Self::new(latitude, longitude);
        coordinates.is_valid().then_some(coordinates)
    }

    /// Returns true if latitude and longitude are finite and within range.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    pub fn to_position(self) -> walkers::Position {
        walkers::Position::from_lat_lon(self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pair() {
        let parsed = Coordinates::parse_pair(" 42.2808, -83.7430 ").unwrap();
        assert_eq!(parsed, Coordinates::new(42.2808, -83.7430));
    }

    #[test]
    fn test_parse_pair_rejects_garbage() {
        assert!(Coordinates::parse_pair("North Campus").is_none());
        assert!(Coordinates::parse_pair("42.28").is_none());
        assert!(Coordinates::parse_pair("142.0, 10.0").is_none());
    }
}
