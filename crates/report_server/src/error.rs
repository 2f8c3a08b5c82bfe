//! Error responses for the HTTP layer.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use maintenance_report::ReportError;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

/// JSON body of every error response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// Failures surfaced by the `/generate` endpoint.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The body did not match the request schema; nothing was rendered.
    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] JsonRejection),

    /// Rendering or saving the report failed.
    #[error(transparent)]
    Report(#[from] ReportError),

    /// The render task panicked or was cancelled.
    #[error("Report task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl ApiError {
    /// Returns the HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Report(_) | Self::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn detail(&self) -> String {
        match self {
            Self::InvalidRequest(rejection) => rejection.body_text(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = self.detail();
        if status.is_server_error() {
            error!("Error while generating PDF: {}", detail);
        } else {
            warn!("Rejected request: {}", detail);
        }
        (status, Json(ErrorBody { detail })).into_response()
    }
}
