//! Fuzzy matching utilities for the search fallback tier.
//!
//! This module provides approximate matching of a query against post titles
//! and bodies, used when literal search finds nothing.

pub mod fuzzy_matcher;

pub use fuzzy_matcher::{
    FieldMatch, FuzzyMatcher, FuzzyOptions, FuzzyOutcome, NucleoEngine, SimilarityEngine,
};
