//! # jotter-api
//!
//! HTTP layer for jotter: JSON note endpoints over a [`NoteRepository`],
//! plus configuration and logging setup for the `jotter-api` binary.
//!
//! ## Routes
//!
//! | Method | Path | Success |
//! |--------|------|---------|
//! | `GET` | `/health` | `200 OK` |
//! | `GET` | `/notes` | `200` with all notes |
//! | `POST` | `/notes` | `201` with the created note |
//! | `PUT` | `/notes/:id` | `200` with the updated note |
//! | `DELETE` | `/notes/:id` | `204` |
//!
//! [`NoteRepository`]: jotter_core::NoteRepository

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod logging;
pub mod router;

pub use config::{LogConfig, LogFormat, ServerConfig};
pub use error::ApiError;
pub use router::{app, cors_layer, router, AppState};
