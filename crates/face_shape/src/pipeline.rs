use std::sync::Arc;

use tracing::{debug, warn};

use crate::anchors::{AnchorIndices, LandmarkTopology};
use crate::classify::{ShapeClassifier, ShapeLabel};
use crate::config::ClassifierConfig;
use crate::error::MeasureError;
use crate::landmarks::LandmarkSet;
use crate::measure::{GeometryMeasurer, Measurements};
use crate::state::ShapeCell;

#[derive(Debug, Clone, PartialEq)]
pub enum FrameOutcome {
    /// No face in the frame; the displayed label is left alone.
    NoFace,
    /// The landmarks did not fit the anchor table; the displayed label is
    /// left alone.
    Rejected(MeasureError),
    Classified {
        label: ShapeLabel,
        measurements: Measurements,
    },
}

/// Runs measurement and classification for one frame at a time and
/// publishes the result to a [`ShapeCell`].
#[derive(Debug)]
pub struct FrameProcessor<T = AnchorIndices> {
    measurer: GeometryMeasurer<T>,
    classifier: ShapeClassifier,
    cell: Arc<ShapeCell>,
}

impl FrameProcessor {
    pub fn from_config(config: &ClassifierConfig, cell: Arc<ShapeCell>) -> Self {
        Self::new(
            GeometryMeasurer::new(config.anchors),
            ShapeClassifier::new(config.thresholds),
            cell,
        )
    }
}

impl<T: LandmarkTopology> FrameProcessor<T> {
    pub fn new(measurer: GeometryMeasurer<T>, classifier: ShapeClassifier, cell: Arc<ShapeCell>) -> Self {
        Self {
            measurer,
            classifier,
            cell,
        }
    }

    pub fn cell(&self) -> &Arc<ShapeCell> {
        &self.cell
    }

    pub fn process(&self, face: Option<&LandmarkSet>) -> FrameOutcome {
        let Some(landmarks) = face else {
            return FrameOutcome::NoFace;
        };

        let measurements = match self.measurer.measure(landmarks) {
            Ok(m) => m,
            Err(err) => {
                warn!("dropping frame: {}", err);
                return FrameOutcome::Rejected(err);
            }
        };

        let label = self.classifier.classify(&measurements);
        if label == ShapeLabel::Unknown {
            debug!(?measurements, "degenerate measurements");
        }

        let previous = self.cell.label();
        self.cell.publish(label, measurements);
        if previous != label {
            debug!(%previous, %label, "head shape changed");
        }

        FrameOutcome::Classified {
            label,
            measurements,
        }
    }
}
