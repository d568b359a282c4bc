//! Repository traits.

use async_trait::async_trait;

use crate::{Note, NoteInput, Result};

/// Repository for note CRUD operations.
///
/// Identifiers arrive as the raw path segment and are only ever used as a
/// bound statement parameter. An identifier that matches nothing, numeric or
/// not, yields [`crate::Error::NotFound`].
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// List every note in insertion order.
    async fn list_all(&self) -> Result<Vec<Note>>;

    /// Insert a note and return it as stored.
    async fn create(&self, input: NoteInput) -> Result<Note>;

    /// Replace title and content, refreshing `updated_at`.
    async fn update(&self, id: &str, input: NoteInput) -> Result<Note>;

    /// Permanently delete a note.
    async fn delete(&self, id: &str) -> Result<()>;
}
