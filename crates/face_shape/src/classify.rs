use std::fmt;

use serde::{Deserialize, Serialize};

use crate::measure::Measurements;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum ShapeLabel {
    Oblong,
    Round,
    Square,
    Oval,
    Heart,
    #[default]
    Unknown,
}

impl ShapeLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            ShapeLabel::Oblong => "Oblong",
            ShapeLabel::Round => "Round",
            ShapeLabel::Square => "Square",
            ShapeLabel::Oval => "Oval",
            ShapeLabel::Heart => "Heart",
            ShapeLabel::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ShapeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const OBLONG_RATIO: f32 = 1.5;
/// Absolute, so it only means something at one coordinate scale. Unlike the
/// ratio rules, rescaling the landmarks changes which faces come out Round.
pub const ROUND_DIFFERENCE: f32 = 30.0;
pub const SQUARE_JAW_RATIO: f32 = 0.9;
pub const OVAL_WIDTH_RATIO: f32 = 0.9;

/// Decision thresholds, applied in rule order by [`ShapeClassifier`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Thresholds {
    /// Length over width above which a face is Oblong.
    pub oblong_ratio: f32,
    /// Length and width closer than this (input units) make a face Round.
    pub round_difference: f32,
    /// Jaw wider than this fraction of the face width is Square.
    pub square_jaw_ratio: f32,
    /// Face width above this fraction of the face length is Oval.
    pub oval_width_ratio: f32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            oblong_ratio: OBLONG_RATIO,
            round_difference: ROUND_DIFFERENCE,
            square_jaw_ratio: SQUARE_JAW_RATIO,
            oval_width_ratio: OVAL_WIDTH_RATIO,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ShapeClassifier {
    thresholds: Thresholds,
}

impl ShapeClassifier {
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    /// First matching rule wins. The shapes overlap geometrically, so the
    /// order is part of the policy.
    pub fn classify(&self, m: &Measurements) -> ShapeLabel {
        if m.is_degenerate() {
            return ShapeLabel::Unknown;
        }

        let t = &self.thresholds;
        if m.face_length / m.face_width > t.oblong_ratio {
            ShapeLabel::Oblong
        } else if (m.face_length - m.face_width).abs() < t.round_difference {
            ShapeLabel::Round
        } else if m.jaw_width > m.face_width * t.square_jaw_ratio {
            ShapeLabel::Square
        } else if m.face_width > m.face_length * t.oval_width_ratio {
            ShapeLabel::Oval
        } else {
            ShapeLabel::Heart
        }
    }
}

/// Classifies with the default thresholds.
pub fn classify(m: &Measurements) -> ShapeLabel {
    ShapeClassifier::default().classify(m)
}
