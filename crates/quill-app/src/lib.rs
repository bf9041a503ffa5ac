//! View-local state controllers of the Quill dashboard.
//!
//! Each dashboard page owns one controller here. Controllers fetch through
//! the `quill-core` repository traits, derive what they show on every read
//! (sort / filter / paginate), and protect themselves against the usual
//! UI races: search keystrokes are debounced, slow stale responses are
//! discarded by generation, deletes are optimistic.

pub mod analytics;
pub mod blogs;
pub mod content;
pub mod dashboard;
pub mod debounce;
pub mod fetch;
pub mod taxonomy;

pub use analytics::AnalyticsBoard;
pub use blogs::BlogDirectory;
pub use content::{ContentLibrary, DeleteStrategy, SEARCH_DEBOUNCE};
pub use dashboard::DashboardOverview;
pub use debounce::Debouncer;
pub use fetch::FetchGuard;
pub use taxonomy::TaxonomyBoard;
