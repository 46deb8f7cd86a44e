use crate::columns::{ColumnRegistry, Field};
use crate::error::DirectoryError;
use crate::table::EntityTable;

use super::{is_yes, Amenity, Coordinates, PassType};

/// One parking lot, read from a row of the directory table.
///
/// ### Fields
/// - `row`: Position of the row in the table; the lot's identity for the session.
/// - `distance`: Miles to the current destination, `None` until computed.
#[derive(Debug, Clone, PartialEq)]
pub struct LotRecord {
    pub row: usize,
    pub id: String,
    pub address: String,
    pub hours: String,
    pub position: Coordinates,
    pub place_id: String,
    pub passes: Vec<PassType>,
    pub amenities: Vec<Amenity>,
    pub distance: Option<f64>,
}

impl LotRecord {
    /// Reads the lot stored at `row`, failing if its coordinates do not parse.
    pub fn from_row(
        registry: &ColumnRegistry,
        table: &EntityTable,
        row: usize,
    ) -> Result<Self, DirectoryError> {
        let text = |field: Field| -> Result<&str, DirectoryError> {
            table
                .cell(row, registry.index(field))
                .map(|cell| cell.text.trim())
                .ok_or(DirectoryError::RowOutOfRange(row))
        };
        let coordinate = |field: Field, limit: f64| -> Result<f64, DirectoryError> {
            let value = text(field)?;
            value
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite() && v.abs() <= limit)
                .ok_or_else(|| DirectoryError::InvalidCoordinate {
                    row,
                    field: field.title().to_string(),
                    value: value.to_string(),
                })
        };

        let position = Coordinates::new(coordinate(Field::Latitude, 90.0)?, coordinate(Field::Longitude, 180.0)?);

        let mut passes = Vec::new();
        for pass in PassType::ALL {
            if is_yes(text(Field::Pass(pass))?) {
                passes.push(pass);
            }
        }
        let mut amenities = Vec::new();
        for amenity in Amenity::ALL {
            if is_yes(text(Field::Amenity(amenity))?) {
                amenities.push(amenity);
            }
        }

        Ok(Self {
            row,
            id: text(Field::Id)?.to_string(),
            address: text(Field::Address)?.to_string(),
            hours: text(Field::Hours)?.to_string(),
            position,
            place_id: text(Field::PlaceId)?.to_string(),
            passes,
            amenities,
            distance: text(Field::Distance)?.parse::<f64>().ok().filter(|d| d.is_finite()),
        })
    }

    pub fn has_pass(&self, pass: PassType) -> bool {
        self.passes.contains(&pass)
    }

    pub fn has_amenity(&self, amenity: Amenity) -> bool {
        self.amenities.contains(&amenity)
    }

    /// Whether `query` (already lowercased) appears in the id, address or hours.
    pub fn matches_text(&self, query: &str) -> bool {
        [&self.id, &self.address, &self.hours]
            .iter()
            .any(|value| value.to_lowercase().contains(query))
    }
}
