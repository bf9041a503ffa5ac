//! Reader interactions: likes and bookmarks on public posts.

use crate::error::Result;
use async_trait::async_trait;

/// Toggle-style interactions on a post. Each call returns the new state as
/// reported by the server.
#[async_trait]
pub trait InteractionRepository: Send + Sync {
    /// Toggles the like on a post; `true` when the post is now liked.
    async fn like(&self, post_id: u64) -> Result<bool>;

    /// Toggles the bookmark on a post; `true` when the post is now
    /// bookmarked.
    async fn bookmark(&self, post_id: u64) -> Result<bool>;
}
