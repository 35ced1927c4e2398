//! Full-text search over posts.
//!
//! A query runs through two tiers. The exact tier finds every case-insensitive
//! literal occurrence in titles and bodies; only when it finds nothing does
//! the fuzzy tier run. Either way each match becomes a highlighted snippet and
//! matches are grouped into one result per post.

pub mod assembler;
pub mod engine;
pub mod exact;
pub mod snippet;
pub mod types;

pub use assembler::assemble;
pub use engine::{SearchEngine, SearchOutcome, SearchQuery, SearchSettings};
pub use exact::{ExactMatcher, MatchPositions};
pub use snippet::SnippetBuilder;
pub use types::{DocumentHit, Field, Match, Position, SearchResult, SearchTier, Snippet};
