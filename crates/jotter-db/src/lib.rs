//! # jotter-db
//!
//! SQLite database layer for jotter.
//!
//! This crate provides:
//! - Connection pool management with an explicit liveness probe
//! - Embedded, idempotent schema migrations
//! - The SQLite implementation of [`NoteRepository`]
//!
//! ## Example
//!
//! ```rust,ignore
//! use jotter_db::{Database, NoteInput, NoteRepository};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::connect("./notes.db").await?;
//!     db.migrate().await?;
//!
//!     let note = db.notes.create(NoteInput::new("Groceries", "Milk, eggs")).await?;
//!     println!("Created note: {}", note.id);
//!     Ok(())
//! }
//! ```

pub mod notes;
pub mod pool;

use std::path::Path;
use std::time::Instant;

use sqlx::migrate::Migrator;
use sqlx::SqlitePool;
use tracing::info;

// Re-export core types
pub use jotter_core::*;

pub use notes::SqliteNoteRepository;
pub use pool::{create_pool, create_pool_with_config, ping, PoolConfig};

/// Schema migrations embedded at compile time.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Combined database context with all repositories.
#[derive(Clone)]
pub struct Database {
    /// The underlying connection pool.
    pub pool: SqlitePool,
    /// Note repository for CRUD operations.
    pub notes: SqliteNoteRepository,
}

impl Database {
    /// Create a new Database instance from a connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            notes: SqliteNoteRepository::new(pool.clone()),
            pool,
        }
    }

    /// Open (creating if needed) the database file at `path`.
    pub async fn connect(path: impl AsRef<Path>) -> Result<Self> {
        let pool = create_pool(path).await?;
        Ok(Self::new(pool))
    }

    /// Create with custom pool configuration.
    pub async fn connect_with_config(path: impl AsRef<Path>, config: PoolConfig) -> Result<Self> {
        let pool = create_pool_with_config(path, config).await?;
        Ok(Self::new(pool))
    }

    /// Run pending migrations.
    ///
    /// Safe to call on every start: applied migrations are skipped and the
    /// schema is only ever created if absent.
    pub async fn migrate(&self) -> Result<()> {
        let start = Instant::now();
        MIGRATOR
            .run(&self.pool)
            .await
            .map_err(|e| Error::Migration(e.to_string()))?;

        info!(
            subsystem = "database",
            component = "migrate",
            op = "run",
            migration_count = MIGRATOR.iter().count(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Database migrations complete"
        );
        Ok(())
    }

    /// Get the underlying connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close every pooled connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
