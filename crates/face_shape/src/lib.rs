//! Head shape classification from face mesh landmarks.
//!
//! A face arrives as a [`LandmarkSet`]. [`GeometryMeasurer`] picks six anchor
//! landmarks out of it and turns them into three distances, and
//! [`ShapeClassifier`] maps those onto a [`ShapeLabel`]. [`FrameProcessor`]
//! runs both once per frame and keeps the latest label in a [`ShapeCell`].
//!
//! ```
//! use face_shape::{classify, Measurements, ShapeLabel};
//!
//! let label = classify(&Measurements::new(180.0, 100.0, 80.0));
//! assert_eq!(label, ShapeLabel::Oblong);
//! ```

pub mod anchors;
pub mod classify;
pub mod config;
mod error;
pub mod landmarks;
pub mod measure;
pub mod mesh;
pub mod pipeline;
pub mod state;

pub use anchors::{Anchor, AnchorIndices, AnchorSet, LandmarkTopology};
pub use classify::{classify, ShapeClassifier, ShapeLabel, Thresholds};
pub use config::ClassifierConfig;
pub use error::{MeasureError, Result};
pub use landmarks::{LandmarkSet, Point2D};
pub use measure::{measure, GeometryMeasurer, Measurements};
pub use pipeline::{FrameOutcome, FrameProcessor};
pub use state::{ShapeCell, ShapeState};
