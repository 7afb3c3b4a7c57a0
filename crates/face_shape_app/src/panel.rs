use bevy::prelude::Res;
use bevy_egui::{egui, EguiContexts};

use face_shape::ShapeState;

use crate::tracking::ShapeTracker;

pub fn heading(state: &ShapeState) -> String {
    format!("Head Shape: {}", state.display_text())
}

pub fn shape_panel(mut contexts: EguiContexts, tracker: Res<ShapeTracker>) {
    let state = tracker.cell().snapshot();
    egui::Window::new("Face Shape")
        .resizable(false)
        .show(contexts.ctx_mut(), |ui| {
            ui.heading(heading(&state));
            if let Some(m) = state.measurements {
                ui.separator();
                ui.label(format!("face length: {:.3}", m.face_length));
                ui.label(format!("face width: {:.3}", m.face_width));
                ui.label(format!("jaw width: {:.3}", m.jaw_width));
            }
        });
}
