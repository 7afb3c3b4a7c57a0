use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{MeasureError, Result};
use crate::landmarks::{LandmarkSet, Point2D};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Anchor {
    Forehead,
    Chin,
    LeftCheek,
    RightCheek,
    JawLeft,
    JawRight,
}

impl Anchor {
    pub const ALL: [Anchor; 6] = [
        Anchor::Forehead,
        Anchor::Chin,
        Anchor::LeftCheek,
        Anchor::RightCheek,
        Anchor::JawLeft,
        Anchor::JawRight,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Anchor::Forehead => "forehead",
            Anchor::Chin => "chin",
            Anchor::LeftCheek => "leftCheek",
            Anchor::RightCheek => "rightCheek",
            Anchor::JawLeft => "jawLeft",
            Anchor::JawRight => "jawRight",
        }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Maps anchor names onto a detector's landmark numbering.
pub trait LandmarkTopology {
    fn index_of(&self, anchor: Anchor) -> usize;

    /// Smallest landmark count for which every anchor resolves.
    fn required_landmarks(&self) -> usize {
        Anchor::ALL
            .iter()
            .map(|&anchor| self.index_of(anchor) + 1)
            .max()
            .unwrap_or(0)
    }
}

/// A fixed anchor index table.
///
/// The numbers are a contract with the detector's mesh topology. They are not
/// derived from the face contour and must be replaced wholesale if the
/// detector's numbering changes.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnchorIndices {
    pub forehead: usize,
    pub chin: usize,
    pub left_cheek: usize,
    pub right_cheek: usize,
    pub jaw_left: usize,
    pub jaw_right: usize,
}

impl AnchorIndices {
    /// MediaPipe Face Mesh (468 points, 478 with refined irises).
    pub const MEDIAPIPE: AnchorIndices = AnchorIndices {
        forehead: 10,
        chin: 152,
        left_cheek: 234,
        right_cheek: 454,
        jaw_left: 130,
        jaw_right: 359,
    };
}

impl Default for AnchorIndices {
    fn default() -> Self {
        Self::MEDIAPIPE
    }
}

impl LandmarkTopology for AnchorIndices {
    fn index_of(&self, anchor: Anchor) -> usize {
        match anchor {
            Anchor::Forehead => self.forehead,
            Anchor::Chin => self.chin,
            Anchor::LeftCheek => self.left_cheek,
            Anchor::RightCheek => self.right_cheek,
            Anchor::JawLeft => self.jaw_left,
            Anchor::JawRight => self.jaw_right,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorSet {
    pub forehead: Point2D,
    pub chin: Point2D,
    pub left_cheek: Point2D,
    pub right_cheek: Point2D,
    pub jaw_left: Point2D,
    pub jaw_right: Point2D,
}

impl AnchorSet {
    pub fn extract(landmarks: &LandmarkSet, topology: &impl LandmarkTopology) -> Result<Self> {
        let lookup = |anchor: Anchor| {
            let index = topology.index_of(anchor);
            landmarks.get(index).ok_or(MeasureError::OutOfRangeLandmarks {
                anchor,
                index,
                len: landmarks.len(),
            })
        };

        Ok(Self {
            forehead: lookup(Anchor::Forehead)?,
            chin: lookup(Anchor::Chin)?,
            left_cheek: lookup(Anchor::LeftCheek)?,
            right_cheek: lookup(Anchor::RightCheek)?,
            jaw_left: lookup(Anchor::JawLeft)?,
            jaw_right: lookup(Anchor::JawRight)?,
        })
    }

    pub fn get(&self, anchor: Anchor) -> Point2D {
        match anchor {
            Anchor::Forehead => self.forehead,
            Anchor::Chin => self.chin,
            Anchor::LeftCheek => self.left_cheek,
            Anchor::RightCheek => self.right_cheek,
            Anchor::JawLeft => self.jaw_left,
            Anchor::JawRight => self.jaw_right,
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;

    fn numbered(len: usize) -> LandmarkSet {
        (0..len).map(|i| Vec2::new(i as f32, 0.0)).collect()
    }

    #[test]
    fn mediapipe_needs_455_landmarks() {
        assert_eq!(AnchorIndices::MEDIAPIPE.required_landmarks(), 455);
    }

    #[test]
    fn extracts_by_index() {
        let anchors = AnchorSet::extract(&numbered(468), &AnchorIndices::MEDIAPIPE).unwrap();
        assert_eq!(anchors.forehead.x, 10.0);
        assert_eq!(anchors.chin.x, 152.0);
        assert_eq!(anchors.left_cheek.x, 234.0);
        assert_eq!(anchors.right_cheek.x, 454.0);
        assert_eq!(anchors.jaw_left.x, 130.0);
        assert_eq!(anchors.jaw_right.x, 359.0);
        for anchor in Anchor::ALL {
            assert_eq!(anchors.get(anchor).x, AnchorIndices::MEDIAPIPE.index_of(anchor) as f32);
        }
    }

    #[test]
    fn reports_first_missing_anchor() {
        let err = AnchorSet::extract(&numbered(300), &AnchorIndices::MEDIAPIPE).unwrap_err();
        assert_eq!(
            err,
            MeasureError::OutOfRangeLandmarks {
                anchor: Anchor::RightCheek,
                index: 454,
                len: 300,
            }
        );
    }

    #[test]
    fn custom_tables_swap_in() {
        let table = AnchorIndices {
            forehead: 0,
            chin: 1,
            left_cheek: 2,
            right_cheek: 3,
            jaw_left: 4,
            jaw_right: 5,
        };
        assert_eq!(table.required_landmarks(), 6);
        let anchors = AnchorSet::extract(&numbered(6), &table).unwrap();
        assert_eq!(anchors.jaw_right.x, 5.0);
    }
}
