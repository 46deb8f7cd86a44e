use egui::{Align2, RichText, Ui, Window};
use walkers::MapMemory;

use crate::directory::Directory;

/// Simple GUI to zoom in and out.
pub fn zoom(ui: &Ui, map_memory: &mut MapMemory) {
    Window::new("Map")
        .collapsible(false)
        .resizable(false)
        .title_bar(false)
        .anchor(Align2::LEFT_BOTTOM, [10., -10.])
        .show(ui.ctx(), |ui| {
            ui.horizontal(|ui| {
                if ui.button(RichText::new("➕").heading()).clicked() {
                    let _ = map_memory.zoom_in();
                }

                if ui.button(RichText::new("➖").heading()).clicked() {
                    let _ = map_memory.zoom_out();
                }
            });
        });
}

/// Button that brings the map back to the destination, or to campus when none is set.
pub fn recenter(ui: &Ui, directory: &mut Directory) {
    egui::Area::new("recenter_button".into())
        .anchor(Align2::RIGHT_BOTTOM, [-10., -10.])
        .show(ui.ctx(), |ui| {
            let label = if directory.destination().is_some() {
                "Center on destination"
            } else {
                "Center on campus"
            };
            if ui
                .add_sized([150., 40.], egui::Button::new(label).rounding(10.))
                .clicked()
            {
                directory.recenter();
            }
        });
}
