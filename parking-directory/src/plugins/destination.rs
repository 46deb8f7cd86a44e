use std::{cell::RefCell, rc::Rc};

use egui::{Align2, Color32};
use walkers::{extras::Style, Plugin};

use crate::state::{MarkerTarget, SelectionState};
use crate::types::Destination;

use super::CLICK_RADIUS;

/// Draws the chosen destination, if any.
pub struct DestinationPin<'a> {
    destination: Option<&'a Destination>,
    selection_state: Rc<RefCell<SelectionState>>,
}

impl<'a> DestinationPin<'a> {
    pub fn new(
        destination: Option<&'a Destination>,
        selection_state: Rc<RefCell<SelectionState>>,
    ) -> Self {
        Self {
            destination,
            selection_state,
        }
    }
}

impl Plugin for DestinationPin<'_> {
    fn run(
        &mut self,
        response: &egui::Response,
        painter: egui::Painter,
        projector: &walkers::Projector,
    ) {
        let Some(destination) = self.destination else {
            return;
        };
        let mut style = Style::default();
        style.symbol_font.size = 28.;
        let screen_position = projector
            .project(destination.position.to_position())
            .to_pos2();

        painter.text(
            screen_position,
            Align2::CENTER_BOTTOM,
            '📍',
            style.symbol_font.clone(),
            Color32::RED,
        );

        if response.clicked() {
            if let Some(pointer) = response.interact_pointer_pos() {
                if screen_position.distance(pointer) <= CLICK_RADIUS {
                    self.selection_state
                        .borrow_mut()
                        .toggle(MarkerTarget::Destination);
                }
            }
        }
    }
}
