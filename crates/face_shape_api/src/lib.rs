use std::borrow::Cow;

use axum::http::StatusCode;
use axum::Json;
use axum::response::{IntoResponse, Response};

use bytes::Bytes;
use face_shape::{LandmarkSet, ShapeState};
use glam::Vec3;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorCategory {
    Unknown,
    Cancelled,
    InvalidArgument,
}

impl ErrorCategory {
    pub fn to_status_code(self) -> StatusCode {
        match self {
            ErrorCategory::Unknown => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorCategory::Cancelled => StatusCode::SERVICE_UNAVAILABLE,
            ErrorCategory::InvalidArgument => StatusCode::BAD_REQUEST,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    pub category: ErrorCategory,
    pub error_code: Cow<'static, str>,
    pub instance_id: String,
    pub message: Cow<'static, str>,
}

impl ApiError {
    pub fn with_message(
        category: ErrorCategory,
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            category,
            error_code: code.into(),
            instance_id: nanoid::nanoid!(),
            message: message.into(),
        }
    }

    pub fn invalid_argument(message: impl Into<Cow<'static, str>>) -> Self {
        Self::with_message(ErrorCategory::InvalidArgument, "invalid_argument", message)
    }

    pub fn unavailable() -> Self {
        Self::with_message(ErrorCategory::Cancelled, "unavailable", "service unavailable")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = self.category.to_status_code();
        (status_code, Json(self)).into_response()
    }
}

/// One landmark as MediaPipe reports it, in normalized image coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FaceLandmark {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub z: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presence: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<f32>,
}

impl FaceLandmark {
    pub fn position(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Face {
    pub landmarks: Vec<FaceLandmark>,
}

impl Face {
    pub fn to_landmark_set(&self) -> LandmarkSet {
        LandmarkSet::from_projected(self.landmarks.iter().map(FaceLandmark::position))
    }
}

/// The landmarks for one frame. An empty list means no face was found.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetFacesRequest {
    pub faces: Vec<Face>,
}

impl SetFacesRequest {
    /// Only the first face is tracked.
    pub fn tracked_face(&self) -> Option<&Face> {
        self.faces.first()
    }
}

/// A raw RGBA8 camera frame.
#[derive(Debug, Clone)]
pub struct SetCameraRequest {
    pub width: u32,
    pub height: u32,
    pub payload: Bytes,
}

impl SetCameraRequest {
    pub fn expected_len(width: u32, height: u32) -> Option<u64> {
        (width as u64).checked_mul(height as u64)?.checked_mul(4)
    }
}

pub type ShapeResponse = ShapeState;
