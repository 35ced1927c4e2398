//! Post model representing one document of the knowledge base.

use serde::{Deserialize, Serialize};

/// A post as stored in the document store.
///
/// Only `id`, `title` and `content` are read by the search engine; the
/// classification fields and the timestamp are carried through to results
/// untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Post {
    /// Unique identifier of the post
    pub id: String,

    /// Post title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Post body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Container (project, area, ...) the post is filed under
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container: Option<String>,

    /// Domain classification (Inbox, Project, Area, Resource, Archive)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    /// Parent container ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_container: Option<String>,

    /// Whether this entry is itself a container
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_container: Option<bool>,

    /// Creation timestamp, in whatever shape the store returns it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<serde_json::Value>,
}

impl Post {
    /// Create a new post with the searchable fields set.
    pub fn new(id: impl Into<String>, title: Option<&str>, content: Option<&str>) -> Self {
        Self {
            id: id.into(),
            title: title.map(str::to_string),
            content: content.map(str::to_string),
            ..Default::default()
        }
    }

    /// Title text, or the empty string when missing.
    pub fn title_text(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// Body text, or the empty string when missing.
    pub fn content_text(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }
}
