use std::{cell::RefCell, rc::Rc};

use egui::Widget;
use egui_extras::{Column, TableBuilder};

use crate::columns::Field;
use crate::directory::Directory;
use crate::state::{MarkerTarget, SelectionState};
use crate::table::SortOrder;

/// The lot table: visible columns only, rows as drawn by the last filter pass.
///
/// Clicking a sortable header sorts by that column (again to reverse), clicking a row
/// opens its lot's popup, and clicking an address opens the external map.
pub struct WidgetLotsTable<'a> {
    pub directory: &'a mut Directory,
    pub selection_state: Rc<RefCell<SelectionState>>,
}

impl Widget for WidgetLotsTable<'_> {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        let response = ui.allocate_response(egui::vec2(0., 0.), egui::Sense::hover());

        let table = self.directory.table();
        let columns = table.visible_columns();
        let rows = table.drawn_rows().to_vec();
        let address_col = self.directory.registry().index(Field::Address);
        let sorted_by = table.sorted_by();
        let selected = self.selection_state.borrow().selected;

        let mut sort_request = None;
        let mut open_link = None;
        let mut toggled_row = None;

        ui.label(format!("Showing {} of {} lots", rows.len(), table.row_count()));

        let mut builder = TableBuilder::new(ui)
            .striped(true)
            .sense(egui::Sense::click())
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center));
        for _ in &columns {
            builder = builder.column(Column::auto().at_least(60.0).resizable(true));
        }

        builder
            .header(40.0, |mut header| {
                for col in &columns {
                    let column = &table.columns()[*col];
                    header.col(|ui| {
                        ui.vertical(|ui| {
                            let arrow = match sorted_by {
                                Some((c, SortOrder::Ascending)) if c == *col => " ⏶",
                                Some((c, SortOrder::Descending)) if c == *col => " ⏷",
                                _ => "",
                            };
                            let title = format!("{}{}", column.header.text, arrow);
                            if column.orderable {
                                if ui.button(egui::RichText::new(title).strong()).clicked() {
                                    sort_request = Some(*col);
                                }
                            } else {
                                ui.strong(title);
                            }
                            if *col == address_col {
                                ui.small("or Coordinates (links to Google Maps)");
                            }
                            if !column.header.badges.is_empty() {
                                ui.horizontal(|ui| super::badges(ui, &column.header.badges));
                            }
                        });
                    });
                }
            })
            .body(|mut body| {
                for row in &rows {
                    body.row(22.0, |mut table_row| {
                        table_row.set_selected(selected == Some(MarkerTarget::Lot(*row)));

                        for col in &columns {
                            table_row.col(|ui| {
                                let Some(cell) = table.cell(*row, *col) else {
                                    return;
                                };
                                if *col == address_col {
                                    if ui.link(&cell.text).clicked() {
                                        open_link = Some(*row);
                                    }
                                } else {
                                    if !cell.text.is_empty() {
                                        ui.label(&cell.text);
                                    }
                                    super::badges(ui, &cell.badges);
                                }
                            });
                        }

                        if table_row.response().clicked() {
                            toggled_row = Some(*row);
                        }
                    });
                }
            });

        if let Some(col) = sort_request {
            let order = match sorted_by {
                Some((c, order)) if c == col => order.toggled(),
                _ => SortOrder::Ascending,
            };
            self.directory.sort_by(col, order);
        }
        if let Some(row) = open_link {
            match self.directory.directions_link(row) {
                Ok(link) => ui.ctx().open_url(egui::OpenUrl::new_tab(link)),
                Err(e) => log::warn!("no link for row {}: {}", row, e),
            }
        } else if let Some(row) = toggled_row {
            self.selection_state
                .borrow_mut()
                .toggle(MarkerTarget::Lot(row));
        }

        response
    }
}
