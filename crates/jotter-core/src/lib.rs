//! # jotter-core
//!
//! Core types, traits, and abstractions for the jotter notes service.
//!
//! This crate provides the note entity, the repository trait the HTTP layer
//! is written against, and the error taxonomy shared by every other crate.

pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod models;
pub mod traits;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use models::*;
pub use traits::*;
