//! Error types for the HTTP server.
//!
//! Every request-level failure maps to an HTTP status with a
//! human-readable plain-text reason. Rendering is all-or-nothing per
//! request; no partial page is ever returned.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ServerError {
    /// Requested path is not a markdown file.
    #[error("Only markdown files are supported")]
    UnsupportedType,

    /// Requested resource does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Path escapes the documentation root or is otherwise invalid.
    #[error("Access denied")]
    Forbidden,

    /// Read failure on a file that passed resolution.
    #[error("Error reading {path}: {source}")]
    Io {
        /// The file that failed to read.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

impl ServerError {
    /// HTTP status code for this error.
    fn status(&self) -> StatusCode {
        match self {
            Self::UnsupportedType | Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Io { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }
        (status, self.to_string()).into_response()
    }
}
