//! Taxonomy domain: categories (optionally hierarchical) and tags.

pub mod model;
pub mod repository;

pub use model::{Category, NewCategory, NewTag, Tag};
pub use repository::TaxonomyRepository;
