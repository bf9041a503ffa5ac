//! Blog domain: the publication namespaces a user can operate in.

pub mod model;
pub mod repository;

pub use model::{Blog, BlogRole, BlogStatus};
pub use repository::BlogRepository;
