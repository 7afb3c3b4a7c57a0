use thiserror::Error;

use crate::anchors::Anchor;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeasureError {
    /// The detector delivered fewer landmarks than the anchor table expects.
    #[error("landmark {index} ({anchor}) is out of range for a set of {len} landmarks")]
    OutOfRangeLandmarks {
        anchor: Anchor,
        index: usize,
        len: usize,
    },
}

pub type Result<T, E = MeasureError> = std::result::Result<T, E>;
