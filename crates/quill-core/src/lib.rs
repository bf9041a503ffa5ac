//! Core domain layer of the Quill client SDK.
//!
//! Holds the typed records the platform API speaks, the shared error type,
//! configuration, the session-store abstraction, the repository traits
//! implemented by `quill-client`, and the pure list-derivation helpers
//! used by the view controllers in `quill-app`.

pub mod analytics;
pub mod article;
pub mod author;
pub mod blog;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod interaction;
pub mod listing;
pub mod repository;
pub mod session;
pub mod taxonomy;

// Re-export common error type
pub use error::{QuillError, Result};
