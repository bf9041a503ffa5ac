//! Blog resource access.

use crate::gateway::Gateway;
use async_trait::async_trait;
use quill_core::blog::{Blog, BlogRepository};
use quill_core::error::Result;
use std::sync::Arc;

pub struct ApiBlogRepository {
    gateway: Arc<Gateway>,
}

impl ApiBlogRepository {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl BlogRepository for ApiBlogRepository {
    async fn list_mine(&self) -> Result<Vec<Blog>> {
        self.gateway.get("/blogs", &[]).await
    }
}
