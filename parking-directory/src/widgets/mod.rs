mod destination;
mod filters;
mod lot;
mod lots_table;
mod search;
pub use destination::WidgetDestination;
pub use filters::WidgetFilters;
pub use lot::WidgetLot;
pub use lots_table::WidgetLotsTable;
pub use search::WidgetSearch;

use egui::Color32;

use crate::table::{Badge, BadgeKind};

/// Draws badges in a row, each with its label as hover text.
fn badges(ui: &mut egui::Ui, badges: &[Badge]) {
    for badge in badges {
        let response = match badge.kind {
            BadgeKind::Pass(pass) => {
                let [r, g, b] = pass.color();
                ui.colored_label(Color32::from_rgb(r, g, b), "■")
            }
            BadgeKind::Amenity(amenity) => ui.label(amenity.icon().to_string()),
        };
        response.on_hover_text(badge.label);
    }
}
