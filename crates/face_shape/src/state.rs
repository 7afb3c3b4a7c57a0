use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::classify::ShapeLabel;
use crate::measure::Measurements;

/// What the presentation layer shows for the tracked face.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeState {
    pub label: ShapeLabel,
    pub measurements: Option<Measurements>,
    /// Frames classified so far. Zero until a face has been seen.
    pub frames: u64,
}

impl ShapeState {
    pub fn is_detecting(&self) -> bool {
        self.frames == 0
    }

    /// Text for the label display, "Detecting..." before the first face.
    pub fn display_text(&self) -> &'static str {
        if self.is_detecting() {
            "Detecting..."
        } else {
            self.label.as_str()
        }
    }
}

/// The current label. Written once per classified frame by the frame
/// pipeline, read by anything that displays it.
#[derive(Debug, Default)]
pub struct ShapeCell {
    state: RwLock<ShapeState>,
}

impl ShapeCell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish(&self, label: ShapeLabel, measurements: Measurements) {
        let mut state = self.state.write();
        state.label = label;
        state.measurements = Some(measurements);
        state.frames += 1;
    }

    pub fn snapshot(&self) -> ShapeState {
        *self.state.read()
    }

    pub fn label(&self) -> ShapeLabel {
        self.state.read().label
    }
}
