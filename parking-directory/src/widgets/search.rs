use crate::search::LocationSearch;
use crate::types::{Destination, Place};

/// The location search bar with its suggestion list.
#[derive(Default)]
pub struct WidgetSearch {
    query: String,
    suggestions: Vec<Place>,
}

impl WidgetSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the destination the user picked this frame, if any.
    pub fn show(&mut self, ui: &mut egui::Ui, search: &LocationSearch) -> Option<Destination> {
        let mut chosen = None;

        ui.horizontal(|ui| {
            ui.label("Destination:");
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.query)
                    .hint_text("Building, place or \"lat, lon\""),
            );
            if response.changed() {
                self.suggestions = search.suggest(&self.query);
            }
        });

        let mut picked = None;
        for (i, place) in self.suggestions.iter().enumerate() {
            if ui.selectable_label(false, &place.name).clicked() {
                picked = Some(i);
            }
        }
        if let Some(i) = picked {
            let place = self.suggestions.swap_remove(i);
            chosen = Some(search.select(place, &self.query));
            self.suggestions.clear();
        }

        chosen
    }
}
