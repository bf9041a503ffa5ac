//! Article domain: posts, their authors, and the repository contract.

pub mod model;
pub mod repository;

pub use model::{Article, ArticleDraft, ArticleStatus, Author};
pub use repository::ArticleRepository;
