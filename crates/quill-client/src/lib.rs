//! HTTP client layer of the Quill SDK.
//!
//! Everything that touches the network lives here: the authenticated
//! request [`Gateway`], the [`AuthService`], the `Api*Repository`
//! implementations of the `quill-core` repository traits, and the session
//! stores the gateway persists tokens through.

pub mod auth;
pub mod gateway;
pub mod resources;
pub mod session_store;

pub use auth::{AuthService, Credentials, Registration};
pub use gateway::{
    AuthExpiredHook, Gateway, LOGIN_PATH, ME_PATH, NoopAuthExpiredHook, QueryPairs, REFRESH_PATH,
    REGISTER_PATH,
};
pub use resources::{
    ApiAnalyticsRepository, ApiArticleRepository, ApiAuthorRepository, ApiBlogRepository,
    ApiDashboardRepository, ApiInteractionRepository, ApiTaxonomyRepository, OrEmpty,
};
pub use session_store::{FileSessionStore, MemorySessionStore};
