// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::message::ErrorBody;
use crate::services::upstream::UpstreamError;

/// Failures surfaced by the proxy endpoint. Upstream detail stays server-side.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("API key not configured")]
    MissingCredential,

    #[error("Message is required")]
    MissingMessage,

    #[error("upstream call failed: {0}")]
    Upstream(#[from] UpstreamError),

    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl AppError {
    pub const UPSTREAM_FAILURE: &'static str = "Failed to get AI response";

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingCredential | AppError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::MissingMessage => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    /// What the client is allowed to see.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Upstream(_) => Self::UPSTREAM_FAILURE.to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Upstream(ref err) = self {
            tracing::error!(error = %err, "Error in API proxy");
        }
        (self.status(), Json(ErrorBody::new(self.public_message()))).into_response()
    }
}
