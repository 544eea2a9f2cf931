//! Errors returned to HTTP clients.
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The path segment is not an integer.
    #[error("invalid integer '{0}'")]
    InvalidNumber(String),

    /// The request body is not a valid `LogEvent`.
    #[error("{message}")]
    InvalidPayload { status: StatusCode, message: String },

    /// The sink could not write the rendered line.
    #[error("failed to write log line: {0}")]
    Output(#[from] std::io::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidNumber(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidPayload { status, .. } => *status,
            ApiError::Output(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidPayload {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
