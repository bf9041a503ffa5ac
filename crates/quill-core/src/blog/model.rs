//! Blog domain model.

use serde::{Deserialize, Serialize};

/// Visibility state of a blog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BlogStatus {
    Live,
    #[default]
    Draft,
    Maintenance,
}

/// The current user's membership role in a blog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BlogRole {
    Owner,
    #[default]
    Editor,
    Admin,
}

/// A publication namespace. The session operates against exactly one
/// "current" blog at a time; that selection is ambient UI state held by
/// the blog directory controller, not part of this record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    pub id: u64,
    pub name: String,
    pub subdomain: String,
    #[serde(default)]
    pub custom_domain: Option<String>,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub color: String,
    /// Post count as reported by the server; display-only.
    #[serde(default)]
    pub posts: u64,
    /// Pre-formatted visitor count ("12.4k"); display-only.
    #[serde(default)]
    pub visitors: String,
    #[serde(default)]
    pub status: BlogStatus,
    #[serde(default)]
    pub role: BlogRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_wire_names_match_display_values() {
        assert_eq!(serde_json::to_string(&BlogStatus::Live).unwrap(), "\"Live\"");
        assert_eq!(serde_json::to_string(&BlogRole::Owner).unwrap(), "\"Owner\"");
    }

    #[test]
    fn test_sparse_blog_decodes() {
        let blog: Blog =
            serde_json::from_str(r#"{"id": 1, "name": "Field Notes", "subdomain": "field"}"#)
                .unwrap();
        assert_eq!(blog.status, BlogStatus::Draft);
        assert_eq!(blog.role, BlogRole::Editor);
    }
}
