//! Blog repository trait.

use super::model::Blog;
use crate::error::Result;
use async_trait::async_trait;

/// Access to the blogs the current session belongs to.
#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// Lists the blogs the authenticated user is a member of.
    async fn list_mine(&self) -> Result<Vec<Blog>>;
}
