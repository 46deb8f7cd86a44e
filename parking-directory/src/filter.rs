use std::collections::BTreeSet;

use crate::types::{Amenity, LotRecord, PassType};

/// Maximum-distance choices offered by the filter panel, in miles.
pub fn distance_steps() -> Vec<f64> {
    (1..=25).map(|step| f64::from(step * 2) / 10.0).collect()
}

pub const DEFAULT_MAX_DISTANCE: f64 = 5.0;

/// Per-row result of one filter pass, indexed by row position.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InclusionSet {
    included: Vec<bool>,
}

impl InclusionSet {
    pub fn all(rows: usize) -> Self {
        Self {
            included: vec![true; rows],
        }
    }

    pub fn contains(&self, row: usize) -> bool {
        self.included.get(row).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.included.len()
    }

    pub fn is_empty(&self) -> bool {
        self.included.is_empty()
    }

    pub fn included_count(&self) -> usize {
        self.included.iter().filter(|included| **included).count()
    }
}

impl From<Vec<bool>> for InclusionSet {
    fn from(included: Vec<bool>) -> Self {
        Self { included }
    }
}

/// State of the filter controls.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub max_distance: f64,
    pub passes: BTreeSet<PassType>,
    pub amenities: BTreeSet<Amenity>,
    /// Free text matched against lot id, address and hours.
    pub text: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DISTANCE)
    }
}

impl FilterState {
    pub fn new(max_distance: f64) -> Self {
        Self {
            max_distance,
            passes: BTreeSet::new(),
            amenities: BTreeSet::new(),
            text: String::new(),
        }
    }

    /// Selects `pass` if unselected, deselects it otherwise.
    pub fn toggle_pass(&mut self, pass: PassType) {
        if !self.passes.remove(&pass) {
            self.passes.insert(pass);
        }
    }

    pub fn toggle_amenity(&mut self, amenity: Amenity) {
        if !self.amenities.remove(&amenity) {
            self.amenities.insert(amenity);
        }
    }

    pub fn deselect_passes(&mut self) {
        self.passes.clear();
    }

    /// Whether `lot` is shown under the current controls.
    ///
    /// A lot without a computed distance passes the distance clause. An empty pass
    /// or amenity selection excludes nothing; selected passes are alternatives, while
    /// every selected amenity is required.
    pub fn include(&self, lot: &LotRecord) -> bool {
        let within_distance = lot.distance.map_or(true, |d| d <= self.max_distance);
        let has_pass = self.passes.is_empty() || self.passes.iter().any(|p| lot.has_pass(*p));
        let has_amenities = self.amenities.iter().all(|a| lot.has_amenity(*a));
        let query = self.text.trim().to_lowercase();
        let matches_text = query.is_empty() || lot.matches_text(&query);

        within_distance && has_pass && has_amenities && matches_text
    }

    /// Evaluates every lot, in row order.
    pub fn inclusion_set(&self, lots: &[LotRecord]) -> InclusionSet {
        InclusionSet::from(lots.iter().map(|lot| self.include(lot)).collect::<Vec<_>>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::great_circle_miles;
    use crate::types::Coordinates;

    fn lot(passes: &[PassType], amenities: &[Amenity], distance: Option<f64>) -> LotRecord {
        LotRecord {
            row: 0,
            id: "NC52".to_string(),
            address: "2281 Bonisteel Blvd".to_string(),
            hours: "7:00AM - 6:00PM".to_string(),
            position: Coordinates::new(42.29, -83.71),
            place_id: "ChIJ-bonisteel".to_string(),
            passes: passes.to_vec(),
            amenities: amenities.to_vec(),
            distance,
        }
    }

    #[test]
    fn test_distance_steps() {
        let steps = distance_steps();
        assert_eq!(steps.len(), 25);
        assert_eq!(steps[0], 0.2);
        assert_eq!(steps[24], 5.0);
    }

    #[test]
    fn test_empty_selections_include_everything() {
        let filters = FilterState::default();
        assert!(filters.include(&lot(&[], &[], Some(1.0))));
        assert!(filters.include(&lot(&[PassType::Gold], &[Amenity::Bus], Some(1.0))));
    }

    #[test]
    fn test_single_pass_excludes_lots_without_it() {
        let mut filters = FilterState::default();
        filters.toggle_pass(PassType::Blue);
        assert!(filters.include(&lot(&[PassType::Blue], &[], Some(1.0))));
        assert!(!filters.include(&lot(&[PassType::Yellow], &[], Some(1.0))));
        assert!(!filters.include(&lot(&[], &[], Some(1.0))));
    }

    #[test]
    fn test_passes_are_alternatives() {
        let mut filters = FilterState::default();
        filters.toggle_pass(PassType::Blue);
        filters.toggle_pass(PassType::Gold);
        assert!(filters.include(&lot(&[PassType::Gold], &[], None)));
    }

    #[test]
    fn test_amenities_are_all_required() {
        let mut filters = FilterState::default();
        filters.toggle_amenity(Amenity::Bus);
        filters.toggle_amenity(Amenity::Ev);
        assert!(filters.include(&lot(&[], &[Amenity::Bus, Amenity::Ev], None)));
        assert!(!filters.include(&lot(&[], &[Amenity::Bus], None)));
    }

    #[test]
    fn test_toggle_twice_deselects() {
        let mut filters = FilterState::default();
        filters.toggle_amenity(Amenity::Van);
        filters.toggle_amenity(Amenity::Van);
        assert!(filters.amenities.is_empty());
        filters.toggle_pass(PassType::Orange);
        filters.deselect_passes();
        assert!(filters.passes.is_empty());
    }

    #[test]
    fn test_distance_threshold() {
        let filters = FilterState::new(1.0);
        assert!(filters.include(&lot(&[], &[], Some(1.0))));
        assert!(!filters.include(&lot(&[], &[], Some(1.01))));
        assert!(filters.include(&lot(&[], &[], None)));
    }

    #[test]
    fn test_text_query() {
        let mut filters = FilterState::default();
        filters.text = "  bonisteel ".to_string();
        assert!(filters.include(&lot(&[], &[], None)));
        filters.text = "state st".to_string();
        assert!(!filters.include(&lot(&[], &[], None)));
    }

    #[test]
    fn test_include_is_pure() {
        let mut filters = FilterState::default();
        filters.toggle_pass(PassType::Visitor);
        let subject = lot(&[PassType::Visitor], &[], Some(2.0));
        let first = filters.include(&subject);
        let second = filters.include(&subject);
        assert_eq!(first, second);
        assert_eq!(subject, lot(&[PassType::Visitor], &[], Some(2.0)));
    }

    #[test]
    fn test_visitor_scenario() {
        let destination = Coordinates::new(42.2086, -83.8326);
        let mut r1 = lot(&[PassType::Visitor], &[], None);
        r1.position = Coordinates::new(42.30, -83.71);
        r1.distance = Some(great_circle_miles(destination, r1.position));
        let mut r2 = lot(&[], &[], None);
        r2.row = 1;
        r2.position = Coordinates::new(42.20, -83.62);
        r2.distance = Some(great_circle_miles(destination, r2.position));

        let mut filters = FilterState::new(5.0);
        filters.toggle_pass(PassType::Visitor);
        let inclusion = filters.inclusion_set(&[r1.clone(), r2]);

        assert_eq!(inclusion.contains(0), r1.distance.unwrap() <= 5.0);
        assert!(!inclusion.contains(1));
    }

    #[test]
    fn test_inclusion_set_bounds() {
        let inclusion = InclusionSet::from(vec![true, false]);
        assert!(inclusion.contains(0));
        assert!(!inclusion.contains(1));
        assert!(!inclusion.contains(7));
        assert_eq!(inclusion.included_count(), 1);
        assert_eq!(InclusionSet::all(3).included_count(), 3);
    }
}
