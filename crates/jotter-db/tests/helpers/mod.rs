//! Shared setup for database integration tests.

use jotter_db::Database;
use tempfile::TempDir;

/// A migrated database in a throwaway directory.
///
/// The directory (and the database file in it) is removed when this value
/// is dropped, after the pool.
pub struct TestDatabase {
    pub db: Database,
    dir: TempDir,
}

impl TestDatabase {
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db = Database::connect(dir.path().join("notes.db"))
            .await
            .expect("Failed to connect to test database");
        db.migrate().await.expect("Failed to run migrations");
        Self { db, dir }
    }

    /// Path of the directory holding the database file.
    #[allow(dead_code)]
    pub fn dir(&self) -> &std::path::Path {
        self.dir.path()
    }
}
