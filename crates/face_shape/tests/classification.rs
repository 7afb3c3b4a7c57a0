use std::sync::Arc;

use face_shape::{
    classify, measure, AnchorIndices, ClassifierConfig, FrameOutcome, FrameProcessor, GeometryMeasurer,
    LandmarkSet, MeasureError, Measurements, Point2D, ShapeCell, ShapeLabel,
};

/// A 478 point set (refined mesh) whose anchors produce the given distances.
fn face_with(length: f32, width: f32, jaw: f32) -> LandmarkSet {
    let centre = Point2D::new(320.0, 240.0);
    let mut points = vec![centre; 478];
    points[10] = centre - Point2D::new(0.0, length / 2.0);
    points[152] = centre + Point2D::new(0.0, length / 2.0);
    points[234] = centre - Point2D::new(width / 2.0, 0.0);
    points[454] = centre + Point2D::new(width / 2.0, 0.0);
    points[130] = centre + Point2D::new(-jaw / 2.0, length / 4.0);
    points[359] = centre + Point2D::new(jaw / 2.0, length / 4.0);
    LandmarkSet::new(points)
}

fn label_of(length: f32, width: f32, jaw: f32) -> ShapeLabel {
    classify(&measure(&face_with(length, width, jaw)).unwrap())
}

#[test]
fn reference_scenarios() {
    assert_eq!(label_of(180.0, 100.0, 80.0), ShapeLabel::Oblong);
    assert_eq!(label_of(100.0, 110.0, 90.0), ShapeLabel::Round);
    assert_eq!(label_of(150.0, 120.0, 115.0), ShapeLabel::Square);
    assert_eq!(label_of(140.0, 135.0, 100.0), ShapeLabel::Round);
    assert_eq!(label_of(150.0, 145.0, 100.0), ShapeLabel::Round);
    assert_eq!(label_of(160.0, 0.0, 70.0), ShapeLabel::Unknown);
}

#[test]
fn measurements_are_finite_and_non_negative() {
    // A deterministic spread of 468 point sets.
    let mut seed = 0x2545_f491_u32;
    let mut next = move || {
        seed ^= seed << 13;
        seed ^= seed >> 17;
        seed ^= seed << 5;
        (seed % 10_000) as f32 / 10_000.0
    };

    for _ in 0..64 {
        let points: Vec<Point2D> = (0..468).map(|_| Point2D::new(next(), next())).collect();
        let m = measure(&LandmarkSet::new(points)).unwrap();
        for value in [m.face_length, m.face_width, m.jaw_width] {
            assert!(value.is_finite());
            assert!(value >= 0.0);
        }
    }
}

#[test]
fn short_sets_fail_with_out_of_range() {
    for len in [0, 1, 152, 400, 454] {
        let set = LandmarkSet::new(vec![Point2D::ZERO; len]);
        assert!(
            matches!(measure(&set), Err(MeasureError::OutOfRangeLandmarks { len: l, .. }) if l == len),
            "len {}",
            len
        );
    }
}

#[test]
fn normalized_coordinates_hit_the_absolute_round_rule() {
    // In normalized units every length/width difference is far below 30, so
    // anything that is not Oblong comes out Round.
    let m = measure(&face_with(0.3, 0.25, 0.24)).unwrap();
    assert_eq!(classify(&m), ShapeLabel::Round);
    let m = measure(&face_with(0.5, 0.25, 0.24)).unwrap();
    assert_eq!(classify(&m), ShapeLabel::Oblong);
}

#[test]
fn measurer_with_default_table_matches_free_function() {
    let face = face_with(150.0, 120.0, 115.0);
    let measurer = GeometryMeasurer::new(AnchorIndices::default());
    assert_eq!(measurer.measure(&face).unwrap(), measure(&face).unwrap());
    assert_eq!(measure(&face).unwrap(), Measurements::new(150.0, 120.0, 115.0));
}

#[test]
fn live_sequence() {
    let cell = Arc::new(ShapeCell::new());
    let processor = FrameProcessor::from_config(&ClassifierConfig::default(), cell.clone());

    assert_eq!(cell.snapshot().display_text(), "Detecting...");

    let frames = [
        Some(face_with(100.0, 110.0, 90.0)),
        None,
        Some(LandmarkSet::new(vec![Point2D::ZERO; 10])),
        Some(face_with(180.0, 100.0, 80.0)),
    ];
    let outcomes: Vec<FrameOutcome> = frames.iter().map(|f| processor.process(f.as_ref())).collect();

    assert!(matches!(outcomes[0], FrameOutcome::Classified { label: ShapeLabel::Round, .. }));
    assert_eq!(outcomes[1], FrameOutcome::NoFace);
    assert!(matches!(outcomes[2], FrameOutcome::Rejected(_)));
    assert!(matches!(outcomes[3], FrameOutcome::Classified { label: ShapeLabel::Oblong, .. }));

    let state = cell.snapshot();
    assert_eq!(state.label, ShapeLabel::Oblong);
    assert_eq!(state.frames, 2);
    assert_eq!(state.display_text(), "Oblong");
}
