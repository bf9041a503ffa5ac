//! Derived list state.
//!
//! The dashboard list views never mutate what they fetched; they re-derive
//! a sorted, filtered, paginated view from the raw collection on every
//! read. These are the pure pieces of that derivation; the controllers in
//! `quill-app` own the inputs (facet, page index, selection).

use crate::article::{Article, ArticleStatus};

/// Page size of the content library table.
pub const PAGE_SIZE: usize = 7;

/// Number of pages needed for `total` items: ceil(total / page_size).
///
/// An empty collection has zero pages.
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Clamps a 1-based page index into the valid range for `total_pages`.
/// An empty listing still sits on page 1.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.max(1).min(total_pages.max(1))
}

/// The 1-based `page` of `items`. Out-of-range pages are empty.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = (page.max(1) - 1).saturating_mul(page_size);
    if start >= items.len() || page_size == 0 {
        return &[];
    }
    let end = (start + page_size).min(items.len());
    &items[start..end]
}

/// The status facet row above the content table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFacet {
    #[default]
    All,
    Only(ArticleStatus),
}

impl StatusFacet {
    pub fn admits(&self, status: ArticleStatus) -> bool {
        match self {
            StatusFacet::All => true,
            StatusFacet::Only(only) => *only == status,
        }
    }

    /// Display label, matching the dashboard facet buttons.
    pub fn label(&self) -> &'static str {
        match self {
            StatusFacet::All => "All Posts",
            StatusFacet::Only(status) => status.as_str(),
        }
    }
}

/// Sorts newest-first. Articles whose `date` does not parse sort after all
/// dated ones, ordered by the raw string so the result stays stable.
pub fn sort_by_date_desc(articles: &mut [Article]) {
    articles.sort_by(|a, b| {
        b.published_at()
            .cmp(&a.published_at())
            .then_with(|| b.date.cmp(&a.date))
    });
}

/// The full derivation of a list view: facet filter, then date sort.
/// Re-run from the raw collection on every read; nothing is cached.
pub fn derive_listing(raw: &[Article], facet: StatusFacet) -> Vec<Article> {
    let mut listing: Vec<Article> = raw
        .iter()
        .filter(|article| facet.admits(article.status))
        .cloned()
        .collect();
    sort_by_date_desc(&mut listing);
    listing
}
