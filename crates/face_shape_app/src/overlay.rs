use bevy::color::palettes::css::BLUE;
use bevy::prelude::{
    default, Commands, Component, DefaultGizmoConfigGroup, GizmoConfigStore, Gizmos, Query, Res, ResMut, Resource,
    Sprite, SpriteBundle, Transform, Vec2, Visibility, With,
};

use face_shape::mesh::ConnectorGroup;
use face_shape::LandmarkSet;

use crate::tracking::TrackedFace;

const LINE_WIDTH: f32 = 2.;
const MARKER_SIZE: f32 = 4.;
const MARKER_DEPTH: f32 = 1.;

/// The camera frame's size on screen. The backdrop sprite and the overlay
/// both use it, so landmarks stay on the image whatever the window size.
#[derive(Debug, Clone, Copy, Resource)]
pub struct FrameView {
    pub size: Vec2,
}

impl FrameView {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: Vec2::new(width as f32, height as f32),
        }
    }

    /// Top left corner of the backdrop sprite, which is centred on the
    /// camera.
    pub fn top_left(&self) -> Vec2 {
        Vec2::new(-self.size.x / 2., self.size.y / 2.)
    }
}

/// One filled square per landmark, reused across frames.
#[derive(Component)]
pub struct LandmarkMarker;

/// Maps a normalized landmark (origin top left, y down) onto a 2D camera
/// centred on a view of the given size (y up).
pub fn to_view(point: Vec2, view: Vec2) -> Vec2 {
    Vec2::new((point.x - 0.5) * view.x, (0.5 - point.y) * view.y)
}

/// Connector segments in view space. Pairs that reference a missing landmark
/// are skipped.
pub fn connector_segments(landmarks: &LandmarkSet, view: Vec2) -> Vec<(Vec2, Vec2)> {
    ConnectorGroup::ALL
        .iter()
        .flat_map(|group| group.connections())
        .filter_map(|&(a, b)| {
            let a = landmarks.get(a)?;
            let b = landmarks.get(b)?;
            Some((to_view(a, view), to_view(b, view)))
        })
        .collect()
}

pub fn configure_gizmos(mut config_store: ResMut<GizmoConfigStore>) {
    let (config, _) = config_store.config_mut::<DefaultGizmoConfigGroup>();
    config.line_width = LINE_WIDTH;
}

fn tracked_landmarks(tracked: &TrackedFace) -> Option<&LandmarkSet> {
    tracked.landmarks.as_ref().filter(|landmarks| !landmarks.is_empty())
}

pub fn draw_contours(mut gizmos: Gizmos, tracked: Res<TrackedFace>, view: Res<FrameView>) {
    let Some(landmarks) = tracked_landmarks(&tracked) else {
        return;
    };

    for (start, end) in connector_segments(landmarks, view.size) {
        gizmos.line_2d(start, end, BLUE);
    }
}

pub fn update_markers(
    mut commands: Commands,
    tracked: Res<TrackedFace>,
    view: Res<FrameView>,
    mut markers: Query<(&mut Transform, &mut Visibility), With<LandmarkMarker>>,
) {
    let mut points = tracked_landmarks(&tracked)
        .into_iter()
        .flat_map(|landmarks| landmarks.iter())
        .map(|point| to_view(point, view.size));

    for (mut transform, mut visibility) in &mut markers {
        match points.next() {
            Some(position) => {
                transform.translation = position.extend(MARKER_DEPTH);
                *visibility = Visibility::Visible;
            }
            None => *visibility = Visibility::Hidden,
        }
    }

    for position in points {
        commands.spawn((
            SpriteBundle {
                sprite: Sprite {
                    color: BLUE.into(),
                    custom_size: Some(Vec2::splat(MARKER_SIZE)),
                    ..default()
                },
                transform: Transform::from_translation(position.extend(MARKER_DEPTH)),
                visibility: Visibility::Visible,
                ..default()
            },
            LandmarkMarker,
        ));
    }
}
