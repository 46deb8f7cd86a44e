use crate::directory::LotDetails;
use crate::table::Badge;

/// Popup with a lot's details, opened from its marker or table row.
pub struct WidgetLot {
    pub row: usize,
}

impl WidgetLot {
    pub fn new(row: usize) -> Self {
        Self { row }
    }

    /// Shows the popup. Returns false once the user closed it.
    pub fn show(&mut self, ctx: &egui::Context, details: &LotDetails) -> bool {
        let mut open = true;
        egui::Window::new(format!("Lot {}", details.id))
            .id(egui::Id::new(("lot", self.row)))
            .open(&mut open)
            .resizable(false)
            .collapsible(false)
            .anchor(egui::Align2::RIGHT_TOP, [-10., 10.])
            .show(ctx, |ui| {
                egui::Grid::new(("lot_details", self.row))
                    .num_columns(2)
                    .show(ui, |ui| {
                        ui.strong("Address:");
                        ui.label(&details.address);
                        ui.end_row();

                        ui.strong("Hours Enforced:");
                        ui.label(&details.hours);
                        ui.end_row();

                        ui.strong("Parking Permit:");
                        ui.horizontal(|ui| {
                            let passes: Vec<Badge> =
                                details.passes.iter().map(|p| Badge::pass(*p)).collect();
                            super::badges(ui, &passes);
                            ui.label(
                                details
                                    .passes
                                    .iter()
                                    .map(|p| p.label())
                                    .collect::<Vec<_>>()
                                    .join(", "),
                            );
                        });
                        ui.end_row();

                        ui.strong("Misc:");
                        ui.horizontal(|ui| {
                            let amenities: Vec<Badge> =
                                details.amenities.iter().map(|a| Badge::amenity(*a)).collect();
                            super::badges(ui, &amenities);
                        });
                        ui.end_row();

                        if let Some(distance) = details.distance {
                            ui.strong("Distance:");
                            ui.label(format!("{:.2} mi", distance));
                            ui.end_row();
                        }
                    });

                if ui.link("Get Google Maps directions").clicked() {
                    ctx.open_url(egui::OpenUrl::new_tab(&details.directions));
                }
            });
        open
    }
}
