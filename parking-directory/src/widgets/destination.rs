use crate::types::Destination;

/// Popup for the destination marker: the place's name and what was typed to find it.
pub struct WidgetDestination;

impl WidgetDestination {
    pub fn show(ctx: &egui::Context, destination: &Destination) -> bool {
        let mut open = true;
        egui::Window::new(destination.name.as_str())
            .id(egui::Id::new("destination"))
            .open(&mut open)
            .resizable(false)
            .collapsible(false)
            .anchor(egui::Align2::RIGHT_TOP, [-10., 10.])
            .show(ctx, |ui| {
                ui.heading(&destination.name);
                ui.label(&destination.query);
            });
        open
    }
}
