//! Two-tier search pipeline.
//!
//! The exact tier always runs first. The fuzzy tier runs only when the exact
//! tier matched no post at all; a single literal hit anywhere in the corpus
//! suppresses it. Each tier runs at most once per query.

use super::assembler::assemble;
use super::exact::ExactMatcher;
use super::snippet::{SnippetBuilder, DEFAULT_CONTEXT_RADIUS, DEFAULT_SNAP_TOLERANCE};
use super::types::{SearchResult, SearchTier};
use crate::error::SearchError;
use crate::matching::{FuzzyMatcher, FuzzyOptions};
use crate::metrics::Metrics;
use crate::models::Post;

/// Tunables for one search engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchSettings {
    /// Characters of context on each side of a content match
    pub context_radius: usize,

    /// How far to look for a word or line break at window edges
    pub snap_tolerance: usize,

    /// Fuzzy tier options
    pub fuzzy: FuzzyOptions,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            context_radius: DEFAULT_CONTEXT_RADIUS,
            snap_tolerance: DEFAULT_SNAP_TOLERANCE,
            fuzzy: FuzzyOptions::default(),
        }
    }
}

/// A validated, trimmed, non-empty query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Validate a raw query parameter.
    pub fn parse(raw: Option<&str>) -> Result<Self, SearchError> {
        let raw = raw.ok_or_else(|| SearchError::InvalidQuery("query is required".to_string()))?;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SearchError::InvalidQuery(
                "query cannot be empty".to_string(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Result of one query.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Tier that produced `results`; `Fuzzy` whenever the exact tier was empty
    pub tier: SearchTier,

    pub results: Vec<SearchResult>,

    /// Posts the fuzzy tier skipped after an engine failure
    pub skipped_documents: usize,
}

/// Runs the exact tier, then the fuzzy tier if needed, then assembles results.
pub struct SearchEngine {
    snippets: SnippetBuilder,
    fuzzy: FuzzyMatcher,
    metrics: Metrics,
}

impl SearchEngine {
    /// Create an engine with the default nucleo fuzzy matcher.
    pub fn new(settings: &SearchSettings) -> Self {
        Self::with_fuzzy_matcher(settings, FuzzyMatcher::new(settings.fuzzy))
    }

    /// Create an engine around a specific fuzzy matcher.
    pub fn with_fuzzy_matcher(settings: &SearchSettings, fuzzy: FuzzyMatcher) -> Self {
        Self {
            snippets: SnippetBuilder::new(settings.context_radius, settings.snap_tolerance),
            fuzzy,
            metrics: Metrics::new(),
        }
    }

    /// Report tier usage into a shared collector.
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Search a corpus snapshot.
    pub fn search(&mut self, query: &SearchQuery, corpus: &[Post]) -> SearchOutcome {
        self.metrics.record_exact_search();
        let exact_hits = ExactMatcher::new(query.as_str()).search(corpus);

        if !exact_hits.is_empty() {
            tracing::debug!(
                "Exact tier matched {} of {} posts",
                exact_hits.len(),
                corpus.len()
            );
            return SearchOutcome {
                tier: SearchTier::Exact,
                results: assemble(exact_hits, &self.snippets),
                skipped_documents: 0,
            };
        }

        tracing::debug!(
            "No exact match for {:?}, falling back to fuzzy tier",
            query.as_str()
        );
        self.metrics.record_fuzzy_fallback();

        let outcome = self.fuzzy.search(query.as_str(), corpus);
        if outcome.skipped > 0 {
            self.metrics.record_documents_skipped(outcome.skipped);
        }

        SearchOutcome {
            tier: SearchTier::Fuzzy,
            results: assemble(outcome.hits, &self.snippets),
            skipped_documents: outcome.skipped,
        }
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new(&SearchSettings::default())
    }
}
