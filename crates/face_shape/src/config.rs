use serde::{Deserialize, Serialize};

use crate::anchors::AnchorIndices;
use crate::classify::Thresholds;

/// Everything that tunes the classifier. Missing fields fall back to the
/// MediaPipe anchor table and the stock thresholds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClassifierConfig {
    pub anchors: AnchorIndices,
    pub thresholds: Thresholds,
}
