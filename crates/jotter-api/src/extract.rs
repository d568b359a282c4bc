//! Request extractors.

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ApiError, INVALID_PAYLOAD, NOTE_NOT_FOUND};

/// JSON request body that ignores `Content-Type`.
///
/// Unlike [`axum::Json`], every failure (unreadable or oversized body,
/// malformed JSON, wrong field types) is answered with the same
/// `400 {"error": "Invalid request payload"}`. Only the first JSON value is
/// read; anything after it is ignored.
#[derive(Debug, Clone)]
pub struct JsonPayload<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for JsonPayload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            debug!(
                subsystem = "api",
                component = "extract",
                error = %e,
                "Failed to read request body"
            );
            ApiError::BadRequest(INVALID_PAYLOAD)
        })?;

        let first = serde_json::Deserializer::from_slice(&bytes)
            .into_iter::<T>()
            .next();

        match first {
            Some(Ok(value)) => Ok(JsonPayload(value)),
            Some(Err(e)) => {
                debug!(
                    subsystem = "api",
                    component = "extract",
                    error = %e,
                    body_len = bytes.len(),
                    "Rejected request payload"
                );
                Err(ApiError::BadRequest(INVALID_PAYLOAD))
            }
            None => {
                debug!(
                    subsystem = "api",
                    component = "extract",
                    "Empty request payload"
                );
                Err(ApiError::BadRequest(INVALID_PAYLOAD))
            }
        }
    }
}

/// The `:id` path segment of a note route.
///
/// A segment that cannot be extracted (for example one that percent-decodes
/// to invalid UTF-8) names no note, so it is answered with 404 like any
/// other unknown id.
#[derive(Debug, Clone)]
pub struct NoteId(pub String);

#[axum::async_trait]
impl<S> FromRequestParts<S> for NoteId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                debug!(
                    subsystem = "api",
                    component = "extract",
                    error = %e,
                    "Unusable note id"
                );
                ApiError::NotFound(NOTE_NOT_FOUND)
            })?;
        Ok(NoteId(id))
    }
}
