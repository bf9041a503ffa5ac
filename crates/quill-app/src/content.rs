//! Content library controller.
//!
//! Owns the state behind the dashboard's post table: the raw fetched
//! collection plus search text, status facet, 1-based page index,
//! selection, and a loading flag. Everything shown is derived on read
//! (sort, filter, slice); nothing derived is ever stored.

use crate::debounce::Debouncer;
use crate::fetch::FetchGuard;
use quill_core::article::{Article, ArticleRepository};
use quill_core::error::Result;
use quill_core::listing::{self, PAGE_SIZE, StatusFacet};
use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

/// Delay between the last keystroke and the search fetch.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// What a delete does.
///
/// `LocalOnly` reproduces the dashboard's historical behavior: the rows
/// vanish from the in-memory list and nothing is sent to the server, so
/// they return on the next fetch. `ServerSynced` deletes remotely first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeleteStrategy {
    #[default]
    LocalOnly,
    ServerSynced,
}

#[derive(Default)]
struct LibraryState {
    blog_id: Option<u64>,
    raw: Vec<Article>,
    search: String,
    facet: StatusFacet,
    page: usize,
    selection: BTreeSet<u64>,
    loading: bool,
    last_error: Option<String>,
}

pub struct ContentLibrary {
    articles: Arc<dyn ArticleRepository>,
    state: RwLock<LibraryState>,
    guard: FetchGuard,
    debouncer: Debouncer,
    delete_strategy: DeleteStrategy,
}

impl ContentLibrary {
    pub fn new(articles: Arc<dyn ArticleRepository>, delete_strategy: DeleteStrategy) -> Self {
        Self {
            articles,
            state: RwLock::new(LibraryState {
                page: 1,
                ..LibraryState::default()
            }),
            guard: FetchGuard::new(),
            debouncer: Debouncer::new(SEARCH_DEBOUNCE),
            delete_strategy,
        }
    }

    /// Points the library at a blog (or at nothing) and fetches
    /// immediately. With no blog there is nothing to show and nothing to
    /// fetch.
    pub async fn activate(&self, blog_id: Option<u64>) {
        {
            let mut state = self.state.write().await;
            state.blog_id = blog_id;
            state.selection.clear();
            state.page = 1;
        }
        match blog_id {
            Some(_) => self.refresh().await,
            None => {
                // Invalidate any fetch still in flight for the old blog.
                self.guard.begin();
                let mut state = self.state.write().await;
                state.raw.clear();
                state.loading = false;
                state.last_error = None;
            }
        }
    }

    /// Re-fetches the raw collection for the current blog and search text.
    /// A response that comes back after a newer fetch started is dropped.
    pub async fn refresh(&self) {
        let (blog_id, search) = {
            let state = self.state.read().await;
            (state.blog_id, state.search.clone())
        };
        let Some(blog_id) = blog_id else {
            return;
        };

        let ticket = self.guard.begin();
        self.state.write().await.loading = true;

        let search = if search.is_empty() {
            None
        } else {
            Some(search)
        };
        let result = self
            .articles
            .list_for_blog(blog_id, search.as_deref())
            .await;

        let mut state = self.state.write().await;
        if !self.guard.admit(ticket) {
            tracing::debug!(blog_id, "discarding stale article fetch");
            return;
        }
        state.loading = false;
        match result {
            Ok(articles) => {
                state.raw = articles;
                state.last_error = None;
            }
            Err(err) => {
                tracing::warn!(blog_id, error = %err, "failed to load articles");
                state.raw.clear();
                state.last_error = Some(err.to_string());
            }
        }
    }

    /// Updates the search text; the fetch fires once the debounce window
    /// closes, with whatever text is current by then.
    pub async fn set_search(self: &Arc<Self>, text: impl Into<String>) {
        self.state.write().await.search = text.into();
        let library = self.clone();
        self.debouncer
            .run(async move {
                library.refresh().await;
            })
            .await;
    }

    pub async fn search(&self) -> String {
        self.state.read().await.search.clone()
    }

    /// Switches the status facet. Always jumps back to page 1.
    pub async fn set_facet(&self, facet: StatusFacet) {
        let mut state = self.state.write().await;
        state.facet = facet;
        state.page = 1;
    }

    pub async fn facet(&self) -> StatusFacet {
        self.state.read().await.facet
    }

    pub async fn set_page(&self, page: usize) {
        let mut state = self.state.write().await;
        let total = listing::derive_listing(&state.raw, state.facet).len();
        state.page = listing::clamp_page(page, listing::page_count(total, PAGE_SIZE));
    }

    pub async fn page(&self) -> usize {
        self.state.read().await.page
    }

    /// The articles of the current page: facet-filtered, newest first.
    pub async fn visible(&self) -> Vec<Article> {
        let state = self.state.read().await;
        let derived = listing::derive_listing(&state.raw, state.facet);
        listing::page_slice(&derived, state.page, PAGE_SIZE).to_vec()
    }

    /// Number of pages in the current derived listing.
    pub async fn page_count(&self) -> usize {
        let state = self.state.read().await;
        let total = listing::derive_listing(&state.raw, state.facet).len();
        listing::page_count(total, PAGE_SIZE)
    }

    /// Size of the derived listing across all pages ("Showing 8 of 23").
    pub async fn filtered_count(&self) -> usize {
        let state = self.state.read().await;
        listing::derive_listing(&state.raw, state.facet).len()
    }

    pub async fn is_loading(&self) -> bool {
        self.state.read().await.loading
    }

    pub async fn last_error(&self) -> Option<String> {
        self.state.read().await.last_error.clone()
    }

    // ========================================================================
    // Selection
    // ========================================================================

    pub async fn toggle_selection(&self, id: u64) {
        let mut state = self.state.write().await;
        if !state.selection.remove(&id) {
            state.selection.insert(id);
        }
    }

    /// Selects every article on the current page.
    pub async fn select_visible(&self) {
        let visible: Vec<u64> = self.visible().await.iter().map(|a| a.id).collect();
        self.state.write().await.selection.extend(visible);
    }

    pub async fn clear_selection(&self) {
        self.state.write().await.selection.clear();
    }

    pub async fn selection(&self) -> Vec<u64> {
        self.state.read().await.selection.iter().copied().collect()
    }

    // ========================================================================
    // Deletes
    // ========================================================================

    /// Deletes every selected article and clears the selection. Returns
    /// how many were deleted.
    ///
    /// Under `ServerSynced`, a failing remote delete aborts the operation
    /// and leaves the local list untouched; the next refresh reconciles
    /// whatever the server did accept.
    pub async fn delete_selected(&self) -> Result<usize> {
        let ids = self.selection().await;
        if ids.is_empty() {
            return Ok(0);
        }
        if self.delete_strategy == DeleteStrategy::ServerSynced {
            for id in &ids {
                self.articles.remove(*id).await?;
            }
        }

        let mut state = self.state.write().await;
        state.raw.retain(|article| !ids.contains(&article.id));
        state.selection.clear();
        let total = listing::derive_listing(&state.raw, state.facet).len();
        state.page = listing::clamp_page(state.page, listing::page_count(total, PAGE_SIZE));
        Ok(ids.len())
    }

    /// Deletes one article, selected or not.
    pub async fn delete_article(&self, id: u64) -> Result<()> {
        if self.delete_strategy == DeleteStrategy::ServerSynced {
            self.articles.remove(id).await?;
        }
        let mut state = self.state.write().await;
        state.raw.retain(|article| article.id != id);
        state.selection.remove(&id);
        let total = listing::derive_listing(&state.raw, state.facet).len();
        state.page = listing::clamp_page(state.page, listing::page_count(total, PAGE_SIZE));
        Ok(())
    }
}
