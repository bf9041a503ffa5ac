//! Article repository trait.
//!
//! Defines the interface for fetching and mutating posts, decoupling the
//! view controllers from the HTTP client that implements it.

use super::model::{Article, ArticleDraft};
use crate::error::Result;
use async_trait::async_trait;

/// An abstract repository for articles.
///
/// Every method returns an explicit `Result` so callers can distinguish
/// "no data" from "fetch failed"; the degrade-to-empty convenience lives
/// with the implementations, not in this contract.
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Lists the articles of one blog for the dashboard, optionally
    /// narrowed by a search string.
    async fn list_for_blog(&self, blog_id: u64, search: Option<&str>) -> Result<Vec<Article>>;

    /// Fetches a single article by id (dashboard/editor view).
    async fn find_by_id(&self, id: u64) -> Result<Article>;

    /// Fetches a published article from the public mirror by blog and post
    /// slug.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(article))`: Article found
    /// - `Ok(None)`: The mirror does not know this slug
    /// - `Err(_)`: Error occurred during retrieval
    async fn find_published(&self, blog_slug: &str, post_slug: &str) -> Result<Option<Article>>;

    /// Lists published articles from the public mirror, optionally
    /// filtered by category and/or search string.
    async fn list_published(
        &self,
        blog_slug: &str,
        category: Option<&str>,
        search: Option<&str>,
    ) -> Result<Vec<Article>>;

    /// The current featured article of a blog, if any.
    async fn featured(&self, blog_slug: &str) -> Result<Option<Article>>;

    /// Lists the published articles of one author.
    async fn list_by_author(&self, author_id: u64) -> Result<Vec<Article>>;

    /// Creates an article in a blog.
    async fn create(&self, blog_id: u64, draft: &ArticleDraft) -> Result<Article>;

    /// Saves changes to an existing article.
    async fn update(&self, id: u64, draft: &ArticleDraft) -> Result<Article>;

    /// Deletes an article.
    async fn remove(&self, id: u64) -> Result<()>;
}
