//! Blog directory controller.
//!
//! Holds the blogs the user belongs to and the ambient "current blog"
//! every dashboard page operates against. The selection lives in memory
//! only; a restart falls back to the first blog of the list.

use quill_core::blog::{Blog, BlogRepository};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Default)]
struct DirectoryState {
    blogs: Vec<Blog>,
    current: Option<Blog>,
    loading: bool,
}

pub struct BlogDirectory {
    blogs: Arc<dyn BlogRepository>,
    state: RwLock<DirectoryState>,
}

impl BlogDirectory {
    pub fn new(blogs: Arc<dyn BlogRepository>) -> Self {
        Self {
            blogs,
            state: RwLock::new(DirectoryState::default()),
        }
    }

    /// Re-fetches the directory. Unauthenticated sessions get an empty
    /// directory and no request. The current selection survives a refresh
    /// when the blog still exists (picking up its updated record),
    /// otherwise it falls back to the first blog.
    pub async fn refresh(&self, authenticated: bool) {
        if !authenticated {
            let mut state = self.state.write().await;
            state.blogs.clear();
            state.current = None;
            state.loading = false;
            return;
        }

        self.state.write().await.loading = true;
        let fetched = self.blogs.list_mine().await;

        let mut state = self.state.write().await;
        state.loading = false;
        match fetched {
            Ok(blogs) => {
                state.current = match state.current.take() {
                    Some(current) => blogs
                        .iter()
                        .find(|blog| blog.id == current.id)
                        .cloned()
                        .or_else(|| blogs.first().cloned()),
                    None => blogs.first().cloned(),
                };
                state.blogs = blogs;
            }
            Err(err) => {
                // Keep whatever we had; the directory going stale beats
                // the sidebar going blank.
                tracing::warn!(error = %err, "failed to load blogs");
            }
        }
    }

    /// Makes a blog the current one. `false` when the id is not in the
    /// directory.
    pub async fn select(&self, blog_id: u64) -> bool {
        let mut state = self.state.write().await;
        match state.blogs.iter().find(|blog| blog.id == blog_id).cloned() {
            Some(blog) => {
                state.current = Some(blog);
                true
            }
            None => false,
        }
    }

    pub async fn current(&self) -> Option<Blog> {
        self.state.read().await.current.clone()
    }

    pub async fn blogs(&self) -> Vec<Blog> {
        self.state.read().await.blogs.clone()
    }

    pub async fn is_loading(&self) -> bool {
        self.state.read().await.loading
    }
}
