use serde::{Deserialize, Serialize};

use crate::anchors::{AnchorIndices, AnchorSet, LandmarkTopology};
use crate::error::Result;
use crate::landmarks::LandmarkSet;

/// Face distances, in whatever unit the landmarks were given in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measurements {
    /// Forehead to chin.
    pub face_length: f32,
    /// Left cheek to right cheek.
    pub face_width: f32,
    /// Left jaw point to right jaw point.
    pub jaw_width: f32,
}

impl Measurements {
    pub const fn new(face_length: f32, face_width: f32, jaw_width: f32) -> Self {
        Self {
            face_length,
            face_width,
            jaw_width,
        }
    }

    pub fn from_anchors(anchors: &AnchorSet) -> Self {
        Self {
            face_length: anchors.forehead.distance(anchors.chin),
            face_width: anchors.left_cheek.distance(anchors.right_cheek),
            jaw_width: anchors.jaw_left.distance(anchors.jaw_right),
        }
    }

    /// Zero face width or a non-finite distance; nothing can be classified.
    pub fn is_degenerate(&self) -> bool {
        self.face_width == 0.0
            || !self.face_length.is_finite()
            || !self.face_width.is_finite()
            || !self.jaw_width.is_finite()
    }
}

#[derive(Debug, Clone, Default)]
pub struct GeometryMeasurer<T = AnchorIndices> {
    topology: T,
}

impl<T: LandmarkTopology> GeometryMeasurer<T> {
    pub fn new(topology: T) -> Self {
        Self { topology }
    }

    pub fn anchors(&self, landmarks: &LandmarkSet) -> Result<AnchorSet> {
        AnchorSet::extract(landmarks, &self.topology)
    }

    pub fn measure(&self, landmarks: &LandmarkSet) -> Result<Measurements> {
        let anchors = self.anchors(landmarks)?;
        Ok(Measurements::from_anchors(&anchors))
    }
}

/// Measures with the MediaPipe anchor table.
pub fn measure(landmarks: &LandmarkSet) -> Result<Measurements> {
    GeometryMeasurer::new(AnchorIndices::MEDIAPIPE).measure(landmarks)
}
