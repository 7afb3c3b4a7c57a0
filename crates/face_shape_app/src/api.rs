use std::sync::Arc;

use axum::{Json, Router};
use axum::extract::{DefaultBodyLimit, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, put};
use axum_extra::TypedHeader;
use bevy::prelude::{Assets, Image, Query, Res, ResMut, Resource};
use bytes::Bytes;
use headers::ContentLength;
use tokio::sync::mpsc;

use face_shape::ShapeCell;
use face_shape_api::{ApiError, SetCameraRequest, SetFacesRequest, ShapeResponse};

use crate::tracking::{ShapeTracker, TrackedFace};
use crate::webcam::{camera_frame, WebcamTexture};

pub enum Command {
    SetFaces(SetFacesRequest),
    SetCamera(SetCameraRequest),
}

pub struct ApiState {
    tx: mpsc::UnboundedSender<Command>,
    shape: Arc<ShapeCell>,
}

impl ApiState {
    pub fn new(shape: Arc<ShapeCell>) -> (Arc<Self>, ApiResource) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Arc::new(Self { tx, shape }), ApiResource { rx })
    }

    fn send(&self, command: Command) -> Result<StatusCode, ApiError> {
        self.tx.send(command).map_err(|_| ApiError::unavailable())?;
        Ok(StatusCode::OK)
    }
}

fn dimension(headers: &HeaderMap, name: &'static str) -> Result<u32, ApiError> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse::<u32>().ok())
        .filter(|&v| v > 0)
        .ok_or_else(|| ApiError::invalid_argument(format!("missing or invalid {} header", name)))
}

fn camera_request(headers: &HeaderMap, content_length: u64, payload: Bytes) -> Result<SetCameraRequest, ApiError> {
    let width = dimension(headers, "width")?;
    let height = dimension(headers, "height")?;

    let Some(payload_size) = SetCameraRequest::expected_len(width, height) else {
        return Err(ApiError::invalid_argument("frame too large"));
    };
    if content_length != payload_size || payload.len() as u64 != payload_size {
        return Err(ApiError::invalid_argument("invalid payload size"));
    }

    Ok(SetCameraRequest {
        width,
        height,
        payload,
    })
}

async fn put_camera(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    TypedHeader(ContentLength(content_length)): TypedHeader<ContentLength>,
    payload: Bytes,
) -> Result<StatusCode, ApiError> {
    let request = camera_request(&headers, content_length, payload)?;
    state.send(Command::SetCamera(request))
}

async fn put_faces(
    State(state): State<Arc<ApiState>>,
    Json(faces): Json<SetFacesRequest>,
) -> Result<StatusCode, ApiError> {
    state.send(Command::SetFaces(faces))
}

async fn get_shape(State(state): State<Arc<ApiState>>) -> Json<ShapeResponse> {
    Json(state.shape.snapshot())
}

pub fn new_api() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/v1/camera", put(put_camera))
        .route("/v1/faces", put(put_faces))
        .route("/v1/shape", get(get_shape))
        .layer(DefaultBodyLimit::disable())
}

#[derive(Resource)]
pub struct ApiResource {
    rx: mpsc::UnboundedReceiver<Command>,
}

/// Applies queued API commands in arrival order, one landmark frame at a
/// time.
pub fn update_api(
    mut api: ResMut<ApiResource>,
    tracker: Res<ShapeTracker>,
    mut tracked: ResMut<TrackedFace>,
    cameras: Query<&WebcamTexture>,
    mut images: ResMut<Assets<Image>>,
) {
    while let Ok(command) = api.rx.try_recv() {
        match command {
            Command::SetFaces(request) => {
                tracker.track(&request, &mut tracked);
            }
            Command::SetCamera(request) => {
                let image = camera_frame(&request);
                for component in &cameras {
                    images.insert(&component.image, image.clone());
                }
            }
        }
    }
}
