//! In-memory note repository for deterministic testing.
//!
//! Behaves like the SQLite repository at the trait boundary: ids start at 1
//! and are never reused, unknown or non-numeric ids yield `NotFound`, and
//! empty input is rejected before anything is stored.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use jotter_core::mock::MockNoteRepository;
//! use jotter_core::{NoteInput, NoteRepository};
//!
//! #[tokio::test]
//! async fn test_with_mock_repository() {
//!     let repo = MockNoteRepository::new();
//!     let note = repo.create(NoteInput::new("A", "B")).await.unwrap();
//!     assert_eq!(note.id, 1);
//!     assert_eq!(repo.calls().len(), 1);
//! }
//! ```

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;

use crate::{Error, Note, NoteInput, NoteRepository, Result};

/// Mock note repository for testing.
#[derive(Clone, Default)]
pub struct MockNoteRepository {
    state: Arc<Mutex<MockState>>,
    call_log: Arc<Mutex<Vec<MockCall>>>,
}

#[derive(Default)]
struct MockState {
    last_id: i64,
    notes: BTreeMap<i64, Note>,
    failing: bool,
}

/// A recorded repository call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockCall {
    pub operation: &'static str,
    pub id: Option<String>,
}

impl MockNoteRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail the way an unreachable store would.
    pub fn with_store_failure(self) -> Self {
        self.lock_state().failing = true;
        self
    }

    /// Calls received so far, in order.
    pub fn calls(&self) -> Vec<MockCall> {
        self.call_log
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Snapshot of the stored notes.
    pub fn notes(&self) -> Vec<Note> {
        self.lock_state().notes.values().cloned().collect()
    }

    fn record(&self, operation: &'static str, id: Option<&str>) {
        self.call_log
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(MockCall {
                operation,
                id: id.map(str::to_string),
            });
    }

    fn lock_state(&self) -> MutexGuard<'_, MockState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn not_found(id: &str) -> Error {
    Error::NotFound(format!("Note {} not found", id))
}

#[async_trait]
impl NoteRepository for MockNoteRepository {
    async fn list_all(&self) -> Result<Vec<Note>> {
        self.record("list_all", None);
        let state = self.lock_state();
        if state.failing {
            return Err(Error::Query(sqlx::Error::PoolClosed));
        }
        Ok(state.notes.values().cloned().collect())
    }

    async fn create(&self, input: NoteInput) -> Result<Note> {
        self.record("create", None);
        input.validate()?;
        let mut state = self.lock_state();
        if state.failing {
            return Err(Error::Write(sqlx::Error::PoolClosed));
        }

        state.last_id += 1;
        let now = Utc::now();
        let note = Note {
            id: state.last_id,
            title: input.title,
            content: input.content,
            created_at: now,
            updated_at: now,
        };
        state.notes.insert(note.id, note.clone());
        Ok(note)
    }

    async fn update(&self, id: &str, input: NoteInput) -> Result<Note> {
        self.record("update", Some(id));
        input.validate()?;
        let mut state = self.lock_state();
        if state.failing {
            return Err(Error::Write(sqlx::Error::PoolClosed));
        }

        let key = id.parse::<i64>().map_err(|_| not_found(id))?;
        let note = state.notes.get_mut(&key).ok_or_else(|| not_found(id))?;
        note.title = input.title;
        note.content = input.content;
        note.updated_at = Utc::now().max(note.created_at);
        Ok(note.clone())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.record("delete", Some(id));
        let mut state = self.lock_state();
        if state.failing {
            return Err(Error::Write(sqlx::Error::PoolClosed));
        }

        let key = id.parse::<i64>().map_err(|_| not_found(id))?;
        state
            .notes
            .remove(&key)
            .map(|_| ())
            .ok_or_else(|| not_found(id))
    }
}
