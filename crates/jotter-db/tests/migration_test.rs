//! Integration tests for connecting and schema bootstrap.
//!
//! Covers:
//! - Connecting creates the database file
//! - Connecting to an unreachable path is a Connection error
//! - Migrations are idempotent and keep existing rows
//! - A notes table created before migrations were tracked is adopted as is

mod helpers;

use helpers::TestDatabase;
use jotter_db::{Database, Error, NoteInput, NoteRepository};

#[tokio::test]
async fn test_connect_creates_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.db");

    let db = Database::connect(&path).await.expect("Failed to connect");
    assert!(path.exists());
    db.close().await;
}

#[tokio::test]
async fn test_connect_to_unreachable_path_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing-dir").join("notes.db");

    match Database::connect(&path).await {
        Err(Error::Connection(_)) => {}
        Err(other) => panic!("Expected Connection error, got {:?}", other),
        Ok(_) => panic!("Expected Connection error, got a database"),
    }
}

#[tokio::test]
async fn test_migrate_is_idempotent_and_keeps_rows() {
    let test_db = TestDatabase::new().await;
    let note = test_db
        .db
        .notes
        .create(NoteInput::new("kept", "across restarts"))
        .await
        .unwrap();

    test_db.db.migrate().await.expect("Second migrate failed");
    test_db.db.migrate().await.expect("Third migrate failed");

    assert_eq!(test_db.db.notes.list_all().await.unwrap(), vec![note]);
}

#[tokio::test]
async fn test_reopening_existing_file_keeps_rows() {
    let test_db = TestDatabase::new().await;
    let note = test_db
        .db
        .notes
        .create(NoteInput::new("A", "B"))
        .await
        .unwrap();
    test_db.db.close().await;

    let reopened = Database::connect(test_db.dir().join("notes.db"))
        .await
        .unwrap();
    reopened.migrate().await.unwrap();

    assert_eq!(reopened.notes.list_all().await.unwrap(), vec![note]);
    reopened.close().await;
}

#[tokio::test]
async fn test_adopts_untracked_notes_table() {
    let dir = tempfile::tempdir().unwrap();
    let db = Database::connect(dir.path().join("legacy.db")).await.unwrap();

    // Second-resolution CURRENT_TIMESTAMP defaults, no migration bookkeeping.
    sqlx::query(
        "CREATE TABLE notes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            content TEXT NOT NULL,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
            updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
        )",
    )
    .execute(db.pool())
    .await
    .unwrap();
    sqlx::query("INSERT INTO notes (title, content) VALUES ('old', 'row')")
        .execute(db.pool())
        .await
        .unwrap();

    db.migrate().await.expect("Migrate over existing table failed");

    let listed = db.notes.list_all().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].title, "old");
    assert_eq!(listed[0].created_at, listed[0].updated_at);

    let updated = db
        .notes
        .update("1", NoteInput::new("new", "row"))
        .await
        .unwrap();
    assert!(updated.updated_at >= updated.created_at);
    db.close().await;
}
