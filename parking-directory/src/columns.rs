use std::collections::HashMap;

use crate::error::DirectoryError;
use crate::table::EntityTable;
use crate::types::{Amenity, PassType};

/// Semantic fields of the directory table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Index,
    Id,
    Address,
    Hours,
    Pass(PassType),
    Amenity(Amenity),
    Latitude,
    Longitude,
    PlaceId,
    Distance,
    /// Summary column holding the pass badges.
    ParkingPass,
    /// Summary column holding the amenity badges.
    Misc,
}

impl Field {
    /// Every field, in header vocabulary order.
    pub const ALL: [Field; 21] = [
        Field::Index,
        Field::Id,
        Field::Address,
        Field::Hours,
        Field::Pass(PassType::Visitor),
        Field::Pass(PassType::Yellow),
        Field::Pass(PassType::Orange),
        Field::Pass(PassType::Blue),
        Field::Pass(PassType::Gold),
        Field::Pass(PassType::Housing),
        Field::Amenity(Amenity::Bus),
        Field::Amenity(Amenity::Handicap),
        Field::Amenity(Amenity::Van),
        Field::Amenity(Amenity::Motorcycle),
        Field::Amenity(Amenity::Ev),
        Field::Latitude,
        Field::Longitude,
        Field::PlaceId,
        Field::Distance,
        Field::ParkingPass,
        Field::Misc,
    ];

    /// Columns shown before any destination is chosen.
    pub const INITIALLY_VISIBLE: [Field; 5] = [
        Field::Id,
        Field::Address,
        Field::Hours,
        Field::ParkingPass,
        Field::Misc,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Field::Index => "index",
            Field::Id => "id",
            Field::Address => "address",
            Field::Hours => "hours",
            Field::Pass(pass) => pass.as_str(),
            Field::Amenity(amenity) => amenity.as_str(),
            Field::Latitude => "latitude",
            Field::Longitude => "longitude",
            Field::PlaceId => "placeId",
            Field::Distance => "distance",
            Field::ParkingPass => "parkingPass",
            Field::Misc => "misc",
        }
    }

    /// The header text that identifies this field's column.
    pub fn title(&self) -> &'static str {
        match self {
            Field::Index => "index",
            Field::Id => "ID",
            Field::Address => "Address",
            Field::Hours => "Hours Enforced",
            Field::Pass(PassType::Visitor) => "Visitor Paid Parking (Y/N)",
            Field::Pass(PassType::Yellow) => "Yellow Pass (Y/N)",
            Field::Pass(PassType::Orange) => "Orange Pass (Y/N)",
            Field::Pass(PassType::Blue) => "Blue Pass (Y/N)",
            Field::Pass(PassType::Gold) => "Gold Pass (Y/N)",
            Field::Pass(PassType::Housing) => "Housing lot (Y/N)",
            Field::Amenity(Amenity::Bus) => "Bus Service (Y/N)",
            Field::Amenity(Amenity::Handicap) => "Handicap (Y/N)",
            Field::Amenity(Amenity::Van) => "Van Spaces (Y/N)",
            Field::Amenity(Amenity::Motorcycle) => "Motorcycle (Y/N)",
            Field::Amenity(Amenity::Ev) => "EV Charging (Y/N)",
            Field::Latitude => "latitude",
            Field::Longitude => "longitude",
            Field::PlaceId => "place_id",
            Field::Distance => "Distance to destination (miles)",
            Field::ParkingPass => "Parking Permit",
            Field::Misc => "Bus Service / Handicap / Van Spaces / Motorcycle / EV Charging",
        }
    }
}

/// Maps every field to the position of its column in the table.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnRegistry {
    indices: HashMap<Field, usize>,
}

impl ColumnRegistry {
    /// Matches each field title against the header row and tags the matched header cells.
    ///
    /// Fails if a title is missing from the header or appears more than once.
    pub fn resolve(table: &mut EntityTable) -> Result<Self, DirectoryError> {
        let mut indices = HashMap::with_capacity(Field::ALL.len());

        for field in Field::ALL {
            let mut matches = table
                .columns()
                .iter()
                .enumerate()
                .filter(|(_, column)| column.header.text.trim() == field.title())
                .map(|(col, _)| col);

            let col = matches
                .next()
                .ok_or_else(|| DirectoryError::MissingColumn(field.title().to_string()))?;
            if matches.next().is_some() {
                return Err(DirectoryError::DuplicateColumn(field.title().to_string()));
            }
            log::debug!("column {} is '{}' at {}", field.key(), field.title(), col);
            indices.insert(field, col);
        }

        for (field, col) in &indices {
            table.tag_column(*col, *field);
        }
        Ok(Self { indices })
    }

    /// Column index of `field`. Every field is present once `resolve` succeeded.
    pub fn index(&self, field: Field) -> usize {
        self.indices[&field]
    }

    /// Applies the initial layout: only the summary columns and identifying text are
    /// visible, and the badge columns cannot be sorted.
    pub fn configure(&self, table: &mut EntityTable) {
        for field in Field::ALL {
            let col = self.index(field);
            table.set_column_visible(col, Field::INITIALLY_VISIBLE.contains(&field));
            table.set_orderable(col, !matches!(field, Field::ParkingPass | Field::Misc));
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Header row with the columns in a different order than the vocabulary.
    pub(crate) fn header_titles() -> Vec<String> {
        let mut titles: Vec<String> = Field::ALL.iter().map(|f| f.title().to_string()).collect();
        titles.reverse();
        titles
    }

    #[test]
    fn test_resolve_maps_every_field() {
        let mut table = EntityTable::new(header_titles(), vec![]);
        let registry = ColumnRegistry::resolve(&mut table).unwrap();

        assert_eq!(registry.index(Field::Misc), 0);
        assert_eq!(registry.index(Field::Index), Field::ALL.len() - 1);
        assert_eq!(
            table.column(registry.index(Field::Distance)).unwrap().field,
            Some(Field::Distance)
        );
    }

    #[test]
    fn test_resolve_ignores_surrounding_whitespace() {
        let titles = header_titles().into_iter().map(|t| format!(" {} ", t)).collect();
        let mut table = EntityTable::new(titles, vec![]);
        assert!(ColumnRegistry::resolve(&mut table).is_ok());
    }

    #[test]
    fn test_resolve_missing_title() {
        let titles = header_titles()
            .into_iter()
            .filter(|t| t != "place_id")
            .collect();
        let mut table = EntityTable::new(titles, vec![]);
        assert!(matches!(
            ColumnRegistry::resolve(&mut table),
            Err(DirectoryError::MissingColumn(title)) if title == "place_id"
        ));
    }

    #[test]
    fn test_resolve_duplicate_title() {
        let mut titles = header_titles();
        titles.push("ID".to_string());
        let mut table = EntityTable::new(titles, vec![]);
        assert!(matches!(
            ColumnRegistry::resolve(&mut table),
            Err(DirectoryError::DuplicateColumn(title)) if title == "ID"
        ));
    }

    #[test]
    fn test_configure_initial_layout() {
        let mut table = EntityTable::new(header_titles(), vec![]);
        let registry = ColumnRegistry::resolve(&mut table).unwrap();
        registry.configure(&mut table);

        assert!(table.is_column_visible(registry.index(Field::Id)));
        assert!(!table.is_column_visible(registry.index(Field::Distance)));
        assert!(!table.is_column_visible(registry.index(Field::Latitude)));
        assert!(!table.column(registry.index(Field::Misc)).unwrap().orderable);
        assert!(table.column(registry.index(Field::Hours)).unwrap().orderable);
    }

    #[test]
    fn test_keys_are_unique() {
        let keys: std::collections::HashSet<&str> = Field::ALL.iter().map(|f| f.key()).collect();
        assert_eq!(keys.len(), Field::ALL.len());
        assert_eq!(Field::PlaceId.key(), "placeId");
        assert_eq!(Field::Amenity(Amenity::Ev).key(), "ev");
    }
}
