//! Taxonomy resource access. Collections are blog-scoped; deletion is by
//! bare id.

use crate::gateway::Gateway;
use async_trait::async_trait;
use quill_core::error::Result;
use quill_core::taxonomy::{Category, NewCategory, NewTag, Tag, TaxonomyRepository};
use serde_json::Value;
use std::sync::Arc;

pub struct ApiTaxonomyRepository {
    gateway: Arc<Gateway>,
}

impl ApiTaxonomyRepository {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl TaxonomyRepository for ApiTaxonomyRepository {
    async fn list_categories(&self, blog_id: u64) -> Result<Vec<Category>> {
        self.gateway
            .get(&format!("/blogs/{blog_id}/categories"), &[])
            .await
    }

    async fn list_tags(&self, blog_id: u64) -> Result<Vec<Tag>> {
        self.gateway
            .get(&format!("/blogs/{blog_id}/tags"), &[])
            .await
    }

    async fn create_category(&self, blog_id: u64, category: &NewCategory) -> Result<Category> {
        self.gateway
            .post(&format!("/blogs/{blog_id}/categories"), category)
            .await
    }

    async fn remove_category(&self, category_id: u64) -> Result<()> {
        let _: Value = self
            .gateway
            .delete(&format!("/categories/{category_id}"))
            .await?;
        Ok(())
    }

    async fn create_tag(&self, blog_id: u64, tag: &NewTag) -> Result<Tag> {
        self.gateway
            .post(&format!("/blogs/{blog_id}/tags"), tag)
            .await
    }

    async fn remove_tag(&self, tag_id: u64) -> Result<()> {
        let _: Value = self.gateway.delete(&format!("/tags/{tag_id}")).await?;
        Ok(())
    }
}
