//! Taxonomy page controller: categories and tags of the current blog,
//! fetched together, re-fetched after every mutation.

use quill_core::error::Result;
use quill_core::taxonomy::{Category, NewCategory, NewTag, Tag, TaxonomyRepository};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Default)]
struct TaxonomyState {
    blog_id: Option<u64>,
    categories: Vec<Category>,
    tags: Vec<Tag>,
    loading: bool,
    last_error: Option<String>,
}

pub struct TaxonomyBoard {
    taxonomy: Arc<dyn TaxonomyRepository>,
    state: RwLock<TaxonomyState>,
}

impl TaxonomyBoard {
    pub fn new(taxonomy: Arc<dyn TaxonomyRepository>) -> Self {
        Self {
            taxonomy,
            state: RwLock::new(TaxonomyState::default()),
        }
    }

    /// Points the board at a blog and fetches both collections.
    pub async fn activate(&self, blog_id: Option<u64>) {
        self.state.write().await.blog_id = blog_id;
        match blog_id {
            Some(_) => self.refresh().await,
            None => {
                let mut state = self.state.write().await;
                state.categories.clear();
                state.tags.clear();
                state.loading = false;
                state.last_error = None;
            }
        }
    }

    /// Fetches categories and tags concurrently. A failed half degrades to
    /// empty and records the error; the other half still renders.
    pub async fn refresh(&self) {
        let Some(blog_id) = self.state.read().await.blog_id else {
            return;
        };
        self.state.write().await.loading = true;

        let (categories, tags) = tokio::join!(
            self.taxonomy.list_categories(blog_id),
            self.taxonomy.list_tags(blog_id),
        );

        let mut state = self.state.write().await;
        state.loading = false;
        state.last_error = None;
        match categories {
            Ok(categories) => state.categories = categories,
            Err(err) => {
                tracing::warn!(blog_id, error = %err, "failed to load categories");
                state.categories.clear();
                state.last_error = Some(err.to_string());
            }
        }
        match tags {
            Ok(tags) => state.tags = tags,
            Err(err) => {
                tracing::warn!(blog_id, error = %err, "failed to load tags");
                state.tags.clear();
                state.last_error = Some(err.to_string());
            }
        }
    }

    pub async fn create_category(&self, category: NewCategory) -> Result<Category> {
        let blog_id = self.require_blog().await?;
        let created = self.taxonomy.create_category(blog_id, &category).await?;
        self.refresh().await;
        Ok(created)
    }

    pub async fn remove_category(&self, category_id: u64) -> Result<()> {
        self.require_blog().await?;
        self.taxonomy.remove_category(category_id).await?;
        self.refresh().await;
        Ok(())
    }

    pub async fn create_tag(&self, tag: NewTag) -> Result<Tag> {
        let blog_id = self.require_blog().await?;
        let created = self.taxonomy.create_tag(blog_id, &tag).await?;
        self.refresh().await;
        Ok(created)
    }

    pub async fn remove_tag(&self, tag_id: u64) -> Result<()> {
        self.require_blog().await?;
        self.taxonomy.remove_tag(tag_id).await?;
        self.refresh().await;
        Ok(())
    }

    pub async fn categories(&self) -> Vec<Category> {
        self.state.read().await.categories.clone()
    }

    pub async fn tags(&self) -> Vec<Tag> {
        self.state.read().await.tags.clone()
    }

    pub async fn is_loading(&self) -> bool {
        self.state.read().await.loading
    }

    pub async fn last_error(&self) -> Option<String> {
        self.state.read().await.last_error.clone()
    }

    async fn require_blog(&self) -> Result<u64> {
        self.state
            .read()
            .await
            .blog_id
            .ok_or_else(|| quill_core::QuillError::internal("no blog selected"))
    }
}
