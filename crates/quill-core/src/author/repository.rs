//! Author repository trait.

use super::model::AuthorProfile;
use crate::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait AuthorRepository: Send + Sync {
    /// Fetches an author's public profile.
    async fn profile(&self, author_id: u64) -> Result<AuthorProfile>;
}
