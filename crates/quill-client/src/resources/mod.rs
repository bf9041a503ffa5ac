//! Resource access: one module per resource family, each implementing the
//! corresponding `quill-core` repository trait over the gateway.
//!
//! Every method returns an explicit `Result`. The dashboard's historical
//! "errors become empty lists" contract is available as the [`OrEmpty`]
//! adapter for call sites that want exactly that.

pub mod analytics;
pub mod articles;
pub mod authors;
pub mod blogs;
pub mod dashboard;
pub mod interactions;
pub mod taxonomy;

pub use analytics::ApiAnalyticsRepository;
pub use articles::ApiArticleRepository;
pub use authors::ApiAuthorRepository;
pub use blogs::ApiBlogRepository;
pub use dashboard::ApiDashboardRepository;
pub use interactions::ApiInteractionRepository;
pub use taxonomy::ApiTaxonomyRepository;

use quill_core::error::Result;

/// Degrades a failed fetch to its empty value, logging the error.
///
/// Callers that use this cannot distinguish "no data" from "fetch failed"
/// without reading the logs; prefer matching on the `Result` when the view
/// can tell the two apart.
pub trait OrEmpty<T> {
    fn or_empty(self) -> T;
}

impl<T: Default> OrEmpty<T> for Result<T> {
    fn or_empty(self) -> T {
        match self {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(error = %err, "fetch failed, degrading to empty result");
                T::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::OrEmpty;
    use quill_core::QuillError;

    #[test]
    fn test_or_empty_passes_values_through() {
        let ok: quill_core::Result<Vec<u32>> = Ok(vec![1, 2]);
        assert_eq!(ok.or_empty(), vec![1, 2]);
    }

    #[test]
    fn test_or_empty_degrades_errors_to_default() {
        let err: quill_core::Result<Vec<u32>> = Err(QuillError::http(500, "Internal Server Error", ""));
        assert_eq!(err.or_empty(), Vec::<u32>::new());

        let err: quill_core::Result<Option<u32>> = Err(QuillError::SessionExpired);
        assert_eq!(err.or_empty(), None);
    }
}
