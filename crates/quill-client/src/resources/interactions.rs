//! Reader interactions: like and bookmark toggles on public posts.

use crate::gateway::Gateway;
use async_trait::async_trait;
use quill_core::error::Result;
use quill_core::interaction::InteractionRepository;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
struct LikeState {
    liked: bool,
}

#[derive(Debug, Deserialize)]
struct BookmarkState {
    bookmarked: bool,
}

pub struct ApiInteractionRepository {
    gateway: Arc<Gateway>,
}

impl ApiInteractionRepository {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl InteractionRepository for ApiInteractionRepository {
    async fn like(&self, post_id: u64) -> Result<bool> {
        let state: LikeState = self
            .gateway
            .post(&format!("/posts/{post_id}/like"), &serde_json::json!({}))
            .await?;
        Ok(state.liked)
    }

    async fn bookmark(&self, post_id: u64) -> Result<bool> {
        let state: BookmarkState = self
            .gateway
            .post(&format!("/posts/{post_id}/bookmark"), &serde_json::json!({}))
            .await?;
        Ok(state.bookmarked)
    }
}
