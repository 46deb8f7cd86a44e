use std::{cell::RefCell, rc::Rc};

use egui::{Align2, Color32, FontId, Painter, Pos2, Response, Stroke, Vec2};
use walkers::{extras::Style, Plugin, Projector};

use crate::state::{Marker, MarkerTarget, SelectionState};

use super::CLICK_RADIUS;

/// Draws one labelled pin per visible lot and opens a lot's popup when its pin is clicked.
pub struct Lots<'a> {
    markers: &'a [Marker],
    selection_state: Rc<RefCell<SelectionState>>,
}

impl<'a> Lots<'a> {
    pub fn new(markers: &'a [Marker], selection_state: Rc<RefCell<SelectionState>>) -> Self {
        Self {
            markers,
            selection_state,
        }
    }
}

impl Plugin for Lots<'_> {
    fn run(
        &mut self,
        response: &egui::Response,
        painter: egui::Painter,
        projector: &walkers::Projector,
    ) {
        let mut click = response
            .clicked()
            .then(|| response.interact_pointer_pos())
            .flatten();

        let selected = self.selection_state.borrow().selected;
        for marker in self.markers.iter().filter(|marker| marker.visible) {
            let mut style = Style::default();
            style.symbol_font.size = 24.;
            let is_selected = selected == Some(MarkerTarget::Lot(marker.row));
            let screen_position = marker.draw(response, painter.clone(), projector, style, is_selected);

            if let Some(pointer) = click {
                if screen_position.distance(pointer) <= CLICK_RADIUS {
                    self.selection_state
                        .borrow_mut()
                        .toggle(MarkerTarget::Lot(marker.row));
                    click = None;
                }
            }
        }
    }
}

impl Marker {
    fn draw(
        &self,
        _response: &Response,
        painter: Painter,
        projector: &Projector,
        style: Style,
        selected: bool,
    ) -> Pos2 {
        let screen_position = projector.project(self.position.to_position());
        let offset = Vec2::new(8., 8.);

        let label =
            painter.layout_no_wrap(self.label.to_string(), FontId::default(), Color32::BLACK);

        painter.rect_filled(
            label
                .rect
                .translate(screen_position)
                .translate(offset)
                .expand(3.),
            4.,
            Color32::from_white_alpha(200),
        );

        painter.galley(
            (screen_position + offset).to_pos2(),
            label,
            egui::Color32::BLACK,
        );

        if selected {
            painter.circle_stroke(
                screen_position.to_pos2(),
                CLICK_RADIUS,
                Stroke::new(2., Color32::from_rgb(0, 39, 76)),
            );
        }

        painter.text(
            screen_position.to_pos2(),
            Align2::CENTER_BOTTOM,
            '🅿',
            style.symbol_font.clone(),
            Color32::from_rgb(0, 39, 76),
        );

        screen_position.to_pos2()
    }
}
