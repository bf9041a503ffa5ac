//! Article domain model.
//!
//! Plain records mirroring the wire format (camelCase field names,
//! SCREAMING status values). Decoding is tolerant: everything the UI can
//! live without carries a default so a sparse server payload still
//! produces a usable record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Publication state of an article. Closed set; the server owns the
/// transitions between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ArticleStatus {
    Published,
    #[default]
    Draft,
    Scheduling,
    Archived,
}

impl ArticleStatus {
    /// All statuses, in the order the dashboard facets list them.
    pub const ALL: [ArticleStatus; 4] = [
        ArticleStatus::Published,
        ArticleStatus::Draft,
        ArticleStatus::Scheduling,
        ArticleStatus::Archived,
    ];

    /// The wire/display form (`PUBLISHED`, `DRAFT`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleStatus::Published => "PUBLISHED",
            ArticleStatus::Draft => "DRAFT",
            ArticleStatus::Scheduling => "SCHEDULING",
            ArticleStatus::Archived => "ARCHIVED",
        }
    }
}

impl std::fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Author reference embedded in an article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// A blog post as fetched from the platform.
///
/// Fetched records are copied by value into view state; there is no shared
/// cache, so two views of the same article can drift until the next
/// re-fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: u64,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub author: Option<Author>,
    /// Publication timestamp as an ISO 8601 string, kept verbatim.
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub read_time: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub status: ArticleStatus,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Article {
    /// Parses the `date` field. `None` when the server sent something that
    /// is not RFC 3339; such articles sort after dated ones.
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.date)
            .ok()
            .map(|date| date.with_timezone(&Utc))
    }
}

/// Payload for creating or updating an article.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDraft {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub status: ArticleStatus,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}
