use crate::{Error, origin::OriginRecord};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use tracing::{error, warn};

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub service: String,
    pub version: String,
    pub health: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub db_connected: bool,
    pub inference_available: bool,
}

#[derive(Debug, Serialize)]
pub struct OriginListResponse {
    pub data: Vec<OriginRecord>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct OriginResponse {
    pub data: OriginRecord,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: bool,
    pub code: String,
    pub message: String,
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::FileRequired | Self::FileRead(_) => StatusCode::BAD_REQUEST,
            Self::FileTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::ServiceUnavailable(_) | Self::Remote { .. } => StatusCode::SERVICE_UNAVAILABLE,
            Self::Protocol(_) => StatusCode::BAD_GATEWAY,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(status = status.as_u16(), code = self.code(), "Request failed: {}", self);
        } else {
            warn!(status = status.as_u16(), code = self.code(), "Request rejected: {}", self);
        }

        let body = ErrorResponse {
            error: true,
            code: self.code().to_string(),
            message: self.public_message(),
        };
        (status, Json(body)).into_response()
    }
}
