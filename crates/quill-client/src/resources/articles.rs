//! Article resource access.
//!
//! Dashboard reads and writes go through `/blogs/:id/posts` and
//! `/posts/:id`; the public reader site uses the read-only mirror under
//! `/public/`. Post listings arrive wrapped in a `{ "data": [...] }`
//! envelope, single posts as bare objects.

use crate::gateway::Gateway;
use async_trait::async_trait;
use quill_core::article::{Article, ArticleDraft, ArticleRepository};
use quill_core::error::Result;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
struct ArticleList {
    #[serde(default)]
    data: Vec<Article>,
}

pub struct ApiArticleRepository {
    gateway: Arc<Gateway>,
}

impl ApiArticleRepository {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl ArticleRepository for ApiArticleRepository {
    async fn list_for_blog(&self, blog_id: u64, search: Option<&str>) -> Result<Vec<Article>> {
        let list: ArticleList = self
            .gateway
            .get(
                &format!("/blogs/{blog_id}/posts"),
                &[("search", search.map(str::to_string))],
            )
            .await?;
        Ok(list.data)
    }

    async fn find_by_id(&self, id: u64) -> Result<Article> {
        self.gateway.get(&format!("/posts/{id}"), &[]).await
    }

    async fn find_published(&self, blog_slug: &str, post_slug: &str) -> Result<Option<Article>> {
        let path = format!("/public/blogs/{blog_slug}/posts/{post_slug}");
        match self.gateway.get::<Article>(&path, &[]).await {
            Ok(article) => Ok(Some(article)),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }

    async fn list_published(
        &self,
        blog_slug: &str,
        category: Option<&str>,
        search: Option<&str>,
    ) -> Result<Vec<Article>> {
        let list: ArticleList = self
            .gateway
            .get(
                &format!("/public/blogs/{blog_slug}/posts"),
                &[
                    ("category", category.map(str::to_string)),
                    ("search", search.map(str::to_string)),
                ],
            )
            .await?;
        Ok(list.data)
    }

    async fn featured(&self, blog_slug: &str) -> Result<Option<Article>> {
        let list: ArticleList = self
            .gateway
            .get(
                &format!("/public/blogs/{blog_slug}/posts"),
                &[
                    ("featured", Some("true".to_string())),
                    ("limit", Some("1".to_string())),
                ],
            )
            .await?;
        Ok(list.data.into_iter().next())
    }

    async fn list_by_author(&self, author_id: u64) -> Result<Vec<Article>> {
        let list: ArticleList = self
            .gateway
            .get(&format!("/authors/{author_id}/posts"), &[])
            .await?;
        Ok(list.data)
    }

    async fn create(&self, blog_id: u64, draft: &ArticleDraft) -> Result<Article> {
        self.gateway
            .post(&format!("/blogs/{blog_id}/posts"), draft)
            .await
    }

    async fn update(&self, id: u64, draft: &ArticleDraft) -> Result<Article> {
        self.gateway.put(&format!("/posts/{id}"), draft).await
    }

    async fn remove(&self, id: u64) -> Result<()> {
        let _: Value = self.gateway.delete(&format!("/posts/{id}")).await?;
        Ok(())
    }
}
