//! Repository trait re-exports.
//!
//! This module provides centralized access to all repository traits.

pub use crate::analytics::AnalyticsRepository;
pub use crate::article::ArticleRepository;
pub use crate::author::AuthorRepository;
pub use crate::blog::BlogRepository;
pub use crate::dashboard::DashboardRepository;
pub use crate::interaction::InteractionRepository;
pub use crate::taxonomy::TaxonomyRepository;
