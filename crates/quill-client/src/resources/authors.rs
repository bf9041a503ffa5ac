//! Author resource access.

use crate::gateway::Gateway;
use async_trait::async_trait;
use quill_core::author::{AuthorProfile, AuthorRepository};
use quill_core::error::Result;
use std::sync::Arc;

pub struct ApiAuthorRepository {
    gateway: Arc<Gateway>,
}

impl ApiAuthorRepository {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl AuthorRepository for ApiAuthorRepository {
    async fn profile(&self, author_id: u64) -> Result<AuthorProfile> {
        self.gateway
            .get(&format!("/authors/{author_id}/profile"), &[])
            .await
    }
}
