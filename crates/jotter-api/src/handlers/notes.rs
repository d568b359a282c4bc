//! Note HTTP handlers.
//!
//! Provides the REST endpoints for listing, creating, replacing and deleting
//! notes. Error bodies are always `{"error": "<message>"}`.

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use tracing::info;

use jotter_core::{Note, NoteInput};

use crate::error::{ApiError, FIELDS_REQUIRED};
use crate::extract::{JsonPayload, NoteId};
use crate::AppState;

/// Request body for create and update.
///
/// Missing fields deserialize as empty strings so they fail validation with
/// the same message as explicitly empty ones. Unknown fields are ignored.
/// Capitalized keys (`Title`, `Content`) are accepted as well.
#[derive(Debug, Default, Deserialize)]
pub struct NoteBody {
    #[serde(default, alias = "Title")]
    pub title: String,
    #[serde(default, alias = "Content")]
    pub content: String,
}

impl From<NoteBody> for NoteInput {
    fn from(body: NoteBody) -> Self {
        NoteInput::new(body.title, body.content)
    }
}

fn validated(body: NoteBody) -> Result<NoteInput, ApiError> {
    let input = NoteInput::from(body);
    input
        .validate()
        .map_err(|_| ApiError::BadRequest(FIELDS_REQUIRED))?;
    Ok(input)
}

/// List all notes.
///
/// # Returns
/// - 200 OK with an array of notes in insertion order (`[]` when empty)
/// - 500 Internal Server Error if the query fails
pub async fn list_notes(State(state): State<AppState>) -> Result<Json<Vec<Note>>, ApiError> {
    let notes = state
        .notes
        .list_all()
        .await
        .map_err(ApiError::store("Failed to fetch notes"))?;
    Ok(Json(notes))
}

/// Create a note.
///
/// # Returns
/// - 201 Created with the stored note
/// - 400 Bad Request if the body is not JSON or a field is empty
/// - 500 Internal Server Error if the insert fails
pub async fn create_note(
    State(state): State<AppState>,
    JsonPayload(body): JsonPayload<NoteBody>,
) -> Result<(StatusCode, Json<Note>), ApiError> {
    let input = validated(body)?;
    let note = state
        .notes
        .create(input)
        .await
        .map_err(ApiError::store("Failed to create note"))?;

    info!(
        subsystem = "api",
        component = "notes",
        op = "create",
        note_id = note.id,
        "Note created"
    );
    Ok((StatusCode::CREATED, Json(note)))
}

/// Replace a note's title and content.
///
/// # Path Parameters
/// - `id`: Note identifier as it appears in the URL
///
/// # Returns
/// - 200 OK with the updated note
/// - 400 Bad Request if the body is not JSON or a field is empty
/// - 404 Not Found if no note has this id
/// - 500 Internal Server Error if the update fails
pub async fn update_note(
    State(state): State<AppState>,
    NoteId(id): NoteId,
    JsonPayload(body): JsonPayload<NoteBody>,
) -> Result<Json<Note>, ApiError> {
    let input = validated(body)?;
    let note = state
        .notes
        .update(&id, input)
        .await
        .map_err(ApiError::store("Failed to update note"))?;

    info!(
        subsystem = "api",
        component = "notes",
        op = "update",
        note_id = note.id,
        "Note updated"
    );
    Ok(Json(note))
}

/// Delete a note.
///
/// # Returns
/// - 204 No Content on success
/// - 404 Not Found if no note has this id
/// - 500 Internal Server Error if the delete fails
pub async fn delete_note(
    State(state): State<AppState>,
    NoteId(id): NoteId,
) -> Result<StatusCode, ApiError> {
    state
        .notes
        .delete(&id)
        .await
        .map_err(ApiError::store("Failed to delete note"))?;

    info!(
        subsystem = "api",
        component = "notes",
        op = "delete",
        note_id = %id,
        "Note deleted"
    );
    Ok(StatusCode::NO_CONTENT)
}
