use std::{cell::RefCell, rc::Rc};

use egui::Context;
use egui_extras::install_image_loaders;
use walkers::{HttpOptions, HttpTiles, Map, MapMemory, Tiles};

use crate::{
    config::MapConfig,
    directory::Directory,
    plugins,
    search::LocationSearch,
    state::{MarkerTarget, SelectionState},
    types::Coordinates,
    widgets::{WidgetDestination, WidgetFilters, WidgetLot, WidgetLotsTable, WidgetSearch},
    windows,
};

/// The directory window: search, filters and table on the left, the map on the right.
pub struct DirectoryApp {
    tiles: Box<dyn Tiles>,
    map_memory: MapMemory,
    selection_state: Rc<RefCell<SelectionState>>,
    directory: Directory,
    search: LocationSearch,
    search_widget: WidgetSearch,
    lot_widget: Option<WidgetLot>,
    home: Coordinates,
}

impl DirectoryApp {
    pub fn new(
        egui_ctx: Context,
        directory: Directory,
        search: LocationSearch,
        map: &MapConfig,
    ) -> Self {
        install_image_loaders(&egui_ctx);
        let mut initial_map_memory = MapMemory::default();
        if initial_map_memory.set_zoom(map.zoom as f32).is_err() {
            log::warn!("zoom {} is out of range, using the default", map.zoom);
        }

        Self {
            tiles: Box::new(HttpTiles::with_options(
                walkers::sources::OpenStreetMap,
                HttpOptions::default(),
                egui_ctx.to_owned(),
            )),
            map_memory: initial_map_memory,
            selection_state: Rc::new(RefCell::new(SelectionState::new())),
            directory,
            search,
            search_widget: WidgetSearch::new(),
            lot_widget: None,
            home: map.home,
        }
    }

    fn side_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Campus Parking");

        if let Some(destination) = self.search_widget.show(ui, &self.search) {
            match self.directory.set_destination(destination) {
                Ok(()) => self.selection_state.borrow_mut().clear(),
                Err(e) => log::error!("could not set destination: {}", e),
            }
        }
        ui.separator();

        ui.add(WidgetFilters {
            directory: &mut self.directory,
        });
        ui.separator();

        ui.add(WidgetLotsTable {
            directory: &mut self.directory,
            selection_state: self.selection_state.clone(),
        });
    }

    fn popups(&mut self, ctx: &Context) {
        let selected = self.selection_state.borrow().selected;
        let open = match selected {
            Some(MarkerTarget::Lot(row)) => {
                if self.lot_widget.as_ref().map(|widget| widget.row) != Some(row) {
                    self.lot_widget = Some(WidgetLot::new(row));
                }
                match (self.lot_widget.as_mut(), self.directory.lot_details(row)) {
                    (Some(widget), Ok(details)) => widget.show(ctx, &details),
                    _ => false,
                }
            }
            Some(MarkerTarget::Destination) => {
                self.lot_widget = None;
                self.directory
                    .destination()
                    .is_some_and(|destination| WidgetDestination::show(ctx, destination))
            }
            None => {
                self.lot_widget = None;
                true
            }
        };

        if !open {
            self.selection_state.borrow_mut().clear();
            self.lot_widget = None;
        }
    }
}

impl eframe::App for DirectoryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("directory_panel")
            .resizable(true)
            .default_width(560.)
            .show(ctx, |ui| self.side_panel(ui));

        if let Some(center) = self.directory.map_mut().take_pending_center() {
            self.map_memory.center_at(center.to_position());
        }

        let rimless = egui::Frame {
            fill: ctx.style().visuals.panel_fill,
            ..Default::default()
        };

        egui::CentralPanel::default()
            .frame(rimless)
            .show(ctx, |ui| {
                let tiles = self.tiles.as_mut();

                let lots_plugin = plugins::Lots::new(
                    self.directory.map().markers(),
                    self.selection_state.clone(),
                );
                let destination_plugin = plugins::DestinationPin::new(
                    self.directory.destination(),
                    self.selection_state.clone(),
                );

                let map = Map::new(Some(tiles), &mut self.map_memory, self.home.to_position())
                    .with_plugin(lots_plugin)
                    .with_plugin(destination_plugin);

                ui.add(map);

                windows::zoom(ui, &mut self.map_memory);
                windows::recenter(ui, &mut self.directory);
            });

        self.popups(ctx);
    }
}
