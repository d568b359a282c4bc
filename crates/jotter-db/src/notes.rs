//! Note repository implementation.

use std::time::Instant;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::debug;

use jotter_core::{Error, Note, NoteInput, NoteRepository, Result};

/// Columns selected for every note read, in `map_row_to_note` order.
const NOTE_COLUMNS: &str = "id, title, content, created_at, updated_at";

/// Current time as stored in timestamp columns (UTC, millisecond resolution).
const NOW_SQL: &str = "strftime('%Y-%m-%d %H:%M:%f', 'now')";

/// SQLite implementation of NoteRepository.
#[derive(Clone)]
pub struct SqliteNoteRepository {
    pool: SqlitePool,
}

impl SqliteNoteRepository {
    /// Create a new SqliteNoteRepository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Read back a single row by its rowid after a write.
    async fn fetch_written(&self, id: i64) -> Result<Note> {
        let sql = format!("SELECT {} FROM notes WHERE id = ?", NOTE_COLUMNS);
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(Error::Write)?;
        map_row_to_note(&row).map_err(Error::Write)
    }
}

/// Map a database row to a Note.
///
/// Decoding errors are returned rather than defaulted so one bad row fails
/// the whole read.
fn map_row_to_note(row: &SqliteRow) -> sqlx::Result<Note> {
    Ok(Note {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        content: row.try_get("content")?,
        created_at: row.try_get::<DateTime<Utc>, _>("created_at")?,
        updated_at: row.try_get::<DateTime<Utc>, _>("updated_at")?,
    })
}

fn not_found(id: &str) -> Error {
    Error::NotFound(format!("Note {} not found", id))
}

#[async_trait]
impl NoteRepository for SqliteNoteRepository {
    async fn list_all(&self) -> Result<Vec<Note>> {
        let start = Instant::now();
        let sql = format!("SELECT {} FROM notes ORDER BY id", NOTE_COLUMNS);
        let rows = sqlx::query(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(Error::Query)?;

        let notes = rows
            .iter()
            .map(map_row_to_note)
            .collect::<sqlx::Result<Vec<_>>>()
            .map_err(Error::Query)?;

        debug!(
            subsystem = "database",
            component = "notes",
            op = "list",
            result_count = notes.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Listed notes"
        );
        Ok(notes)
    }

    async fn create(&self, input: NoteInput) -> Result<Note> {
        input.validate()?;
        let start = Instant::now();

        let result = sqlx::query("INSERT INTO notes (title, content) VALUES (?, ?)")
            .bind(&input.title)
            .bind(&input.content)
            .execute(&self.pool)
            .await
            .map_err(Error::Write)?;

        let note = self.fetch_written(result.last_insert_rowid()).await?;

        debug!(
            subsystem = "database",
            component = "notes",
            op = "create",
            note_id = note.id,
            duration_ms = start.elapsed().as_millis() as u64,
            "Created note"
        );
        Ok(note)
    }

    async fn update(&self, id: &str, input: NoteInput) -> Result<Note> {
        input.validate()?;
        let start = Instant::now();

        let sql = format!(
            "UPDATE notes SET title = ?, content = ?, updated_at = {} WHERE id = ?",
            NOW_SQL
        );
        let result = sqlx::query(&sql)
            .bind(&input.title)
            .bind(&input.content)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(Error::Write)?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }

        // Re-read by the same opaque key the update matched on.
        let select = format!("SELECT {} FROM notes WHERE id = ?", NOTE_COLUMNS);
        let row = sqlx::query(&select)
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(Error::Write)?;
        let note = map_row_to_note(&row).map_err(Error::Write)?;

        debug!(
            subsystem = "database",
            component = "notes",
            op = "update",
            note_id = note.id,
            rows_affected = result.rows_affected(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Updated note"
        );
        Ok(note)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let start = Instant::now();

        let result = sqlx::query("DELETE FROM notes WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(Error::Write)?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }

        debug!(
            subsystem = "database",
            component = "notes",
            op = "delete",
            note_id = id,
            rows_affected = result.rows_affected(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Deleted note"
        );
        Ok(())
    }
}
