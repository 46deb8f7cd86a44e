use crate::columns::{ColumnRegistry, Field};
use crate::error::DirectoryError;
use crate::table::{EntityTable, SortOrder};
use crate::types::{Coordinates, LotRecord};

/// Earth's radius. Used to convert angular distances to miles.
pub const EARTH_RADIUS_MILES: f64 = 3958.8;

/// Great-circle distance in miles, by the spherical law of cosines.
pub fn great_circle_miles(from: Coordinates, to: Coordinates) -> f64 {
    let phi1 = from.latitude.to_radians();
    let phi2 = to.latitude.to_radians();
    let delta_lambda = (to.longitude - from.longitude).to_radians();

    // Rounding can push the cosine just past 1 for coincident points.
    let cosine = (phi1.sin() * phi2.sin() + phi1.cos() * phi2.cos() * delta_lambda.cos())
        .clamp(-1.0, 1.0);
    cosine.acos() * EARTH_RADIUS_MILES
}

pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Recomputes the distance from `destination` for every lot, writes it into the
/// distance column, shows that column and sorts the table by it, nearest first.
pub fn update_distances(
    registry: &ColumnRegistry,
    table: &mut EntityTable,
    lots: &mut [LotRecord],
    destination: Coordinates,
) -> Result<(), DirectoryError> {
    let col = registry.index(Field::Distance);
    for lot in lots.iter_mut() {
        let distance = round_to_hundredths(great_circle_miles(destination, lot.position));
        lot.distance = Some(distance);
        table.set_text(lot.row, col, distance.to_string())?;
    }
    table.set_column_visible(col, true);
    table.sort_by(col, SortOrder::Ascending);

    log::debug!(
        "distances updated for {} lots from ({}, {})",
        lots.len(),
        destination.latitude,
        destination.longitude
    );
    Ok(())
}
