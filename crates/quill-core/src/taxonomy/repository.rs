//! Taxonomy repository trait.

use super::model::{Category, NewCategory, NewTag, Tag};
use crate::error::Result;
use async_trait::async_trait;

/// Access to a blog's categories and tags.
#[async_trait]
pub trait TaxonomyRepository: Send + Sync {
    /// Lists the categories of a blog.
    async fn list_categories(&self, blog_id: u64) -> Result<Vec<Category>>;

    /// Lists the tags of a blog.
    async fn list_tags(&self, blog_id: u64) -> Result<Vec<Tag>>;

    /// Creates a category in a blog.
    async fn create_category(&self, blog_id: u64, category: &NewCategory) -> Result<Category>;

    /// Deletes a category.
    async fn remove_category(&self, category_id: u64) -> Result<()>;

    /// Creates a tag in a blog.
    async fn create_tag(&self, blog_id: u64, tag: &NewTag) -> Result<Tag>;

    /// Deletes a tag.
    async fn remove_tag(&self, tag_id: u64) -> Result<()>;
}
