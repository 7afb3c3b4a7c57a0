use std::sync::Arc;

use bevy::prelude::Resource;

use face_shape::{ClassifierConfig, FrameOutcome, FrameProcessor, LandmarkSet, ShapeCell};
use face_shape_api::SetFacesRequest;

/// The face from the most recent landmark frame, if there was one.
#[derive(Debug, Default, Resource)]
pub struct TrackedFace {
    pub landmarks: Option<LandmarkSet>,
}

#[derive(Resource)]
pub struct ShapeTracker {
    processor: FrameProcessor,
}

impl ShapeTracker {
    pub fn new(config: &ClassifierConfig, cell: Arc<ShapeCell>) -> Self {
        Self {
            processor: FrameProcessor::from_config(config, cell),
        }
    }

    pub fn cell(&self) -> &Arc<ShapeCell> {
        self.processor.cell()
    }

    /// Classifies the first face of the frame and hands its landmarks to the
    /// overlay.
    pub fn track(&self, request: &SetFacesRequest, tracked: &mut TrackedFace) -> FrameOutcome {
        let landmarks = request.tracked_face().map(|face| face.to_landmark_set());
        let outcome = self.processor.process(landmarks.as_ref());
        tracked.landmarks = landmarks;
        outcome
    }
}

#[cfg(test)]
mod tests {
    use face_shape::ShapeLabel;
    use face_shape_api::{Face, FaceLandmark};

    use super::*;

    fn landmark(x: f32, y: f32) -> FaceLandmark {
        FaceLandmark {
            x,
            y,
            z: 0.0,
            presence: None,
            visibility: None,
        }
    }

    fn oblong_face() -> Face {
        let mut landmarks = vec![landmark(0.5, 0.5); 478];
        landmarks[10] = landmark(0.5, 0.1);
        landmarks[152] = landmark(0.5, 0.9);
        landmarks[234] = landmark(0.35, 0.5);
        landmarks[454] = landmark(0.65, 0.5);
        landmarks[130] = landmark(0.4, 0.4);
        landmarks[359] = landmark(0.6, 0.4);
        Face { landmarks }
    }

    #[test]
    fn tracks_first_face_only() {
        let tracker = ShapeTracker::new(&ClassifierConfig::default(), Arc::new(ShapeCell::new()));
        let mut tracked = TrackedFace::default();
        let request = SetFacesRequest {
            faces: vec![oblong_face(), Face::default()],
        };

        let outcome = tracker.track(&request, &mut tracked);
        assert!(matches!(outcome, FrameOutcome::Classified { label: ShapeLabel::Oblong, .. }));
        assert_eq!(tracked.landmarks.as_ref().map(LandmarkSet::len), Some(478));
        assert_eq!(tracker.cell().label(), ShapeLabel::Oblong);
    }

    #[test]
    fn empty_frame_clears_overlay_but_keeps_label() {
        let tracker = ShapeTracker::new(&ClassifierConfig::default(), Arc::new(ShapeCell::new()));
        let mut tracked = TrackedFace::default();
        tracker.track(&SetFacesRequest { faces: vec![oblong_face()] }, &mut tracked);

        let outcome = tracker.track(&SetFacesRequest::default(), &mut tracked);
        assert_eq!(outcome, FrameOutcome::NoFace);
        assert!(tracked.landmarks.is_none());
        assert_eq!(tracker.cell().label(), ShapeLabel::Oblong);
    }
}
