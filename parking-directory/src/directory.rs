use crate::annotate::annotate;
use crate::columns::{ColumnRegistry, Field};
use crate::distance::update_distances;
use crate::error::DirectoryError;
use crate::filter::{FilterState, InclusionSet};
use crate::links::LinkBuilder;
use crate::state::MapView;
use crate::table::{EntityTable, SortOrder};
use crate::types::{Amenity, Coordinates, Destination, LotRecord, PassType};

/// What a lot's popup shows.
#[derive(Debug, Clone, PartialEq)]
pub struct LotDetails {
    pub id: String,
    pub address: String,
    pub hours: String,
    pub passes: Vec<PassType>,
    pub amenities: Vec<Amenity>,
    pub distance: Option<f64>,
    pub directions: String,
}

/// The directory's state, shared by the table, the filter panel and the map.
///
/// Every lot has one table row, one record and one marker, all at the same index.
pub struct Directory {
    registry: ColumnRegistry,
    table: EntityTable,
    lots: Vec<LotRecord>,
    map: MapView,
    filters: FilterState,
    links: LinkBuilder,
    home: Coordinates,
    inclusion: InclusionSet,
}

impl Directory {
    /// Resolves the table's columns, annotates it, reads every lot and runs a first filter pass.
    pub fn new(
        mut table: EntityTable,
        filters: FilterState,
        links: LinkBuilder,
        home: Coordinates,
    ) -> Result<Self, DirectoryError> {
        let registry = ColumnRegistry::resolve(&mut table)?;
        registry.configure(&mut table);
        annotate(&registry, &mut table);

        let lots = (0..table.row_count())
            .map(|row| LotRecord::from_row(&registry, &table, row))
            .collect::<Result<Vec<_>, _>>()?;
        for lot in lots.iter().filter(|lot| lot.place_id.is_empty()) {
            log::warn!("lot {} has no place id, its links will search by address only", lot.id);
        }

        let mut directory = Self {
            map: MapView::new(&lots),
            inclusion: InclusionSet::all(lots.len()),
            registry,
            table,
            lots,
            filters,
            links,
            home,
        };
        directory.apply_filters();
        Ok(directory)
    }

    pub fn registry(&self) -> &ColumnRegistry {
        &self.registry
    }

    pub fn table(&self) -> &EntityTable {
        &self.table
    }

    pub fn lots(&self) -> &[LotRecord] {
        &self.lots
    }

    pub fn lot(&self, row: usize) -> Option<&LotRecord> {
        self.lots.get(row)
    }

    pub fn map(&self) -> &MapView {
        &self.map
    }

    pub fn map_mut(&mut self) -> &mut MapView {
        &mut self.map
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Edits the filter controls. Call `apply_filters` once the edit is done.
    pub fn filters_mut(&mut self) -> &mut FilterState {
        &mut self.filters
    }

    pub fn destination(&self) -> Option<&Destination> {
        self.map.destination()
    }

    pub fn inclusion(&self) -> &InclusionSet {
        &self.inclusion
    }

    /// Runs one filter pass: computes the inclusion set, redraws the table,
    /// syncs marker visibility, then refreshes the map once.
    pub fn apply_filters(&mut self) -> &InclusionSet {
        self.inclusion = self.filters.inclusion_set(&self.lots);
        self.table.draw(&self.inclusion);
        self.map.apply(&self.inclusion);
        let center = self.destination().map_or(self.home, |d| d.position);
        self.map.refresh(center);

        log::debug!(
            "filter pass: {} of {} lots shown",
            self.inclusion.included_count(),
            self.inclusion.len()
        );
        &self.inclusion
    }

    /// Makes `destination` the reference point: replaces its marker, recomputes every
    /// distance, sorts the table nearest first and re-runs the filters. The map always
    /// recenters on it, even when the same place is picked again.
    pub fn set_destination(&mut self, destination: Destination) -> Result<(), DirectoryError> {
        let position = destination.position;
        log::info!(
            "destination set to {} ({}, {})",
            destination.name,
            position.latitude,
            position.longitude
        );
        self.map.replace_destination(destination);
        update_distances(&self.registry, &mut self.table, &mut self.lots, position)?;
        self.map.forget_center();
        self.apply_filters();
        Ok(())
    }

    /// Sorts the table by `col` and redraws it with the current inclusion set.
    pub fn sort_by(&mut self, col: usize, order: SortOrder) {
        self.table.sort_by(col, order);
        self.table.draw(&self.inclusion);
    }

    /// Recenters the map on the destination, or on the home position when none is set,
    /// even if the map was already centered there before the user panned away.
    pub fn recenter(&mut self) {
        let center = self.destination().map_or(self.home, |d| d.position);
        self.map.forget_center();
        self.map.refresh(center);
    }

    /// Link to the external map for the lot at `row`.
    pub fn directions_link(&self, row: usize) -> Result<String, DirectoryError> {
        let lot = self.lot(row).ok_or(DirectoryError::RowOutOfRange(row))?;
        Ok(self.links.for_lot(lot, self.destination()))
    }

    pub fn lot_details(&self, row: usize) -> Result<LotDetails, DirectoryError> {
        let lot = self.lot(row).ok_or(DirectoryError::RowOutOfRange(row))?;
        Ok(LotDetails {
            id: lot.id.clone(),
            address: lot.address.clone(),
            hours: lot.hours.clone(),
            passes: lot.passes.clone(),
            amenities: lot.amenities.clone(),
            distance: lot.distance,
            directions: self.links.for_lot(lot, self.destination()),
        })
    }

    /// Whether the distance column is currently shown.
    pub fn distance_visible(&self) -> bool {
        self.table
            .is_column_visible(self.registry.index(Field::Distance))
    }
}
