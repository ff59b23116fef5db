//! Response bodies shared by the product handlers.

use crate::errors::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::{error, warn};

/// `{"message": "..."}` confirmation returned by mutating endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    /// Confirmation text
    pub message: &'static str,
}

impl Message {
    /// Wraps a confirmation text.
    #[must_use]
    pub const fn new(message: &'static str) -> Self {
        Self { message }
    }
}

/// `{"error": kind, "message": text}` body of every failed request.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    /// Stable machine-readable error kind
    pub error: &'static str,
    /// Human-readable detail
    pub message: String,
}

impl Error {
    /// HTTP status and error kind for this error.
    #[must_use]
    pub const fn status(&self) -> (StatusCode, &'static str) {
        match self {
            Self::ProductNotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
            Self::InvalidInput { .. } => (StatusCode::BAD_REQUEST, "invalid_input"),
            Self::Database(_) => (StatusCode::SERVICE_UNAVAILABLE, "store_unavailable"),
            Self::Config { .. } | Self::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal"),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, kind) = self.status();

        // Server-side details stay in the log.
        let message = if status.is_server_error() {
            error!(error = %self, "Request failed");
            "the product store is unavailable".to_string()
        } else {
            warn!(error = %self, "Request rejected");
            self.to_string()
        };

        (status, Json(ErrorBody { error: kind, message })).into_response()
    }
}
