//! HTTP error responses.
//!
//! Store errors are logged in full and answered with a fixed message; the
//! response body never carries driver text, SQL or request input.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

pub const INVALID_PAYLOAD: &str = "Invalid request payload";
pub const FIELDS_REQUIRED: &str = "Title and content are required";
pub const NOTE_NOT_FOUND: &str = "Note not found";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(&'static str),
    #[error("{0}")]
    NotFound(&'static str),
    #[error("{message}: {source}")]
    Internal {
        message: &'static str,
        #[source]
        source: jotter_core::Error,
    },
}

impl ApiError {
    /// Map a repository error, using `message` if it turns out to be a
    /// server-side failure.
    ///
    /// ```rust,ignore
    /// let note = state.notes.create(input).await.map_err(ApiError::store("Failed to create note"))?;
    /// ```
    pub fn store(message: &'static str) -> impl FnOnce(jotter_core::Error) -> ApiError {
        move |err| match err {
            jotter_core::Error::NotFound(_) => ApiError::NotFound(NOTE_NOT_FOUND),
            jotter_core::Error::InvalidInput(_) => ApiError::BadRequest(FIELDS_REQUIRED),
            source => ApiError::Internal { message, source },
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::BadRequest(msg) | ApiError::NotFound(msg) => msg,
            ApiError::Internal { message, source } => {
                error!(
                    subsystem = "api",
                    component = "handlers",
                    error = %source,
                    "{}",
                    message
                );
                message
            }
        };

        let body = Json(serde_json::json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
