use crate::filter::InclusionSet;
use crate::types::{Coordinates, Destination, LotRecord};

/// What a marker on the map stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerTarget {
    Lot(usize),
    Destination,
}

/// Tracks which marker's popup is open.
#[derive(Debug, Default)]
pub struct SelectionState {
    pub selected: Option<MarkerTarget>,
}

impl SelectionState {
    pub fn new() -> SelectionState {
        Self { selected: None }
    }

    /// If the provided marker is already selected, it will be deselected.
    /// Otherwise, it will be selected.
    pub fn toggle(&mut self, target: MarkerTarget) {
        if self.selected == Some(target) {
            self.selected = None;
        } else {
            self.selected = Some(target);
        }
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }
}

/// A lot's pin on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub row: usize,
    pub label: String,
    pub position: Coordinates,
    pub visible: bool,
}

/// Markers shown on the map: one per lot, plus the destination once one is chosen.
#[derive(Debug, Clone, Default)]
pub struct MapView {
    markers: Vec<Marker>,
    destination: Option<Destination>,
    center: Option<Coordinates>,
    pending_center: Option<Coordinates>,
}

impl MapView {
    pub fn new(lots: &[LotRecord]) -> Self {
        Self {
            markers: lots
                .iter()
                .map(|lot| Marker {
                    row: lot.row,
                    label: lot.id.clone(),
                    position: lot.position,
                    visible: true,
                })
                .collect(),
            destination: None,
            center: None,
            pending_center: None,
        }
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn marker(&self, row: usize) -> Option<&Marker> {
        self.markers.get(row)
    }

    /// Shows the markers of included rows and hides the rest.
    pub fn apply(&mut self, inclusion: &InclusionSet) {
        for marker in &mut self.markers {
            marker.visible = inclusion.contains(marker.row);
        }
    }

    pub fn destination(&self) -> Option<&Destination> {
        self.destination.as_ref()
    }

    /// Replaces the destination marker, dropping the previous one.
    pub fn replace_destination(&mut self, destination: Destination) -> Option<Destination> {
        self.destination.replace(destination)
    }

    /// Asks the map to recenter on `center` and redraw. Calling it again with the
    /// same center while the request is pending or served changes nothing.
    pub fn refresh(&mut self, center: Coordinates) {
        if self.center == Some(center) && self.pending_center.is_none() {
            return;
        }
        self.center = Some(center);
        self.pending_center = Some(center);
    }

    /// Forces the next `refresh` to recenter even if the center did not change,
    /// e.g. after the user panned away.
    pub fn forget_center(&mut self) {
        self.center = None;
    }

    /// Hands the pending recenter request to the map widget.
    pub fn take_pending_center(&mut self) -> Option<Coordinates> {
        self.pending_center.take()
    }
}
