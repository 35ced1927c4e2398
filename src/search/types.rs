//! Shared result shapes for both search tiers.

use crate::models::Post;
use serde::Serialize;

/// Searchable field of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    /// Post title
    Title,
    /// Post body
    Content,
}

impl Field {
    /// Fields in the order the fuzzy tier queries them.
    pub const ALL: [Field; 2] = [Field::Title, Field::Content];

    /// The text of this field in `post`, empty when missing.
    pub fn source<'a>(&self, post: &'a Post) -> &'a str {
        match self {
            Self::Title => post.title_text(),
            Self::Content => post.content_text(),
        }
    }
}

/// One located occurrence in a single field.
///
/// `start` and `end` are inclusive character offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub field: Field,
    pub start: usize,
    pub end: usize,
}

impl Match {
    pub fn new(field: Field, start: usize, end: usize) -> Self {
        Self { field, start, end }
    }
}

/// Which tier produced a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchTier {
    /// Case-insensitive literal search
    Exact,
    /// Similarity search fallback
    Fuzzy,
}

/// Per-document output of a tier, before snippets are built.
#[derive(Debug, Clone)]
pub enum DocumentHit<'a> {
    /// Literal occurrences, in discovery order
    Exact { post: &'a Post, matches: Vec<Match> },

    /// Similarity matches; `score` is 0.0 for a perfect match and only
    /// orders documents
    Fuzzy {
        post: &'a Post,
        matches: Vec<Match>,
        score: f64,
    },
}

impl<'a> DocumentHit<'a> {
    pub fn post(&self) -> &'a Post {
        match self {
            Self::Exact { post, .. } | Self::Fuzzy { post, .. } => post,
        }
    }

    pub fn matches(&self) -> &[Match] {
        match self {
            Self::Exact { matches, .. } | Self::Fuzzy { matches, .. } => matches,
        }
    }

    /// Drop the tier tag, keeping the unified match list.
    pub fn into_parts(self) -> (&'a Post, Vec<Match>) {
        match self {
            Self::Exact { post, matches } | Self::Fuzzy { post, matches, .. } => (post, matches),
        }
    }
}

/// Original offsets of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub start: usize,
    pub end: usize,
}

/// Preview window plus exact highlight for one match.
///
/// `text` is only a preview and may be snapped to word boundaries;
/// `position` and `highlight` always refer to the unmodified field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    pub text: String,
    pub position: Position,
    pub highlight: String,
    pub field: Field,
    pub is_title: bool,
}

/// A matching post with all of its snippets.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub id: String,
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_container: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<serde_json::Value>,
    pub match_count: usize,
    pub snippets: Vec<Snippet>,
}
