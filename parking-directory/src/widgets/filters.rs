use egui::Widget;

use crate::directory::Directory;
use crate::filter::distance_steps;
use crate::table::Badge;
use crate::types::{Amenity, PassType};

/// The filter controls. Any change triggers a filter pass right away.
pub struct WidgetFilters<'a> {
    pub directory: &'a mut Directory,
}

impl Widget for WidgetFilters<'_> {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        let mut changed = false;

        let response = ui
            .vertical(|ui| {
                let filters = self.directory.filters_mut();

                egui::ComboBox::from_label("Max distance")
                    .selected_text(format!("{:.1} mi", filters.max_distance))
                    .show_ui(ui, |ui| {
                        for step in distance_steps() {
                            changed |= ui
                                .selectable_value(
                                    &mut filters.max_distance,
                                    step,
                                    format!("{:.1} mi", step),
                                )
                                .changed();
                        }
                    });

                ui.label("Parking permit (any of):");
                ui.horizontal_wrapped(|ui| {
                    for pass in PassType::ALL {
                        let mut checked = filters.passes.contains(&pass);
                        if ui.checkbox(&mut checked, pass.label()).changed() {
                            filters.toggle_pass(pass);
                            changed = true;
                        }
                    }
                    if ui.button("Deselect all").clicked() && !filters.passes.is_empty() {
                        filters.deselect_passes();
                        changed = true;
                    }
                });

                ui.label("Must have:");
                ui.horizontal_wrapped(|ui| {
                    for amenity in Amenity::ALL {
                        let mut checked = filters.amenities.contains(&amenity);
                        ui.horizontal(|ui| {
                            if ui.checkbox(&mut checked, "").changed() {
                                filters.toggle_amenity(amenity);
                                changed = true;
                            }
                            super::badges(ui, &[Badge::amenity(amenity)]);
                            ui.label(amenity.label());
                        });
                    }
                });

                ui.horizontal(|ui| {
                    ui.label("Search:");
                    changed |= ui
                        .text_edit_singleline(&mut filters.text)
                        .changed();
                });
            })
            .response;

        if changed {
            self.directory.apply_filters();
        }
        response
    }
}
