//! Session store trait.
//!
//! Defines the interface for persisting the token pair between runs.

use super::model::AuthSession;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract store for the current session's token pair.
///
/// This trait decouples the request gateway from the persistence mechanism
/// (in-memory for tests, a file in the user config dir for desktop
/// embedders, platform keychains for anything stricter). One store instance
/// is constructed per application and shared via `Arc`; there is no ambient
/// global session.
///
/// # Security Note
///
/// Implementations should ensure that:
/// - Persisted token files have appropriate permissions (e.g., 600 on Unix)
/// - Tokens are never logged or exposed in error messages
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Returns the stored session, if any.
    ///
    /// A store that cannot read its backing state reports `None`; the
    /// caller proceeds unauthenticated.
    async fn load(&self) -> Option<AuthSession>;

    /// Replaces the stored session with a new token pair.
    ///
    /// # Returns
    ///
    /// - `Ok(())`: Session persisted successfully
    /// - `Err(_)`: Error occurred during persistence
    async fn store(&self, session: AuthSession) -> Result<()>;

    /// Removes the stored session.
    ///
    /// # Returns
    ///
    /// - `Ok(())`: Session removed (or none was stored)
    /// - `Err(_)`: Error occurred during removal
    async fn clear(&self) -> Result<()>;
}
