//! Note entity and write payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A persisted note.
///
/// `id`, `created_at` and `updated_at` are assigned by the store; callers
/// never set them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Title and content for creating or replacing a note.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteInput {
    pub title: String,
    pub content: String,
}

impl NoteInput {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Reject empty titles or content before anything reaches the store.
    ///
    /// Only the empty string is rejected; whitespace is treated as content.
    pub fn validate(&self) -> Result<()> {
        if self.title.is_empty() || self.content.is_empty() {
            return Err(Error::InvalidInput(
                "title and content are required".to_string(),
            ));
        }
        Ok(())
    }
}
