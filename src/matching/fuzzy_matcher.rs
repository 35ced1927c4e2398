//! Fuzzy matching fallback for full-text search.
//!
//! This module provides the similarity tier that runs when literal search
//! finds nothing:
//! - A [`SimilarityEngine`] seam so the matching library can be swapped or mocked
//! - [`NucleoEngine`], the default engine built on `nucleo-matcher`
//! - Fuse-style scoring (0.0 is a perfect match, 1.0 the worst) with a
//!   configurable threshold
//! - Per-document isolation: an engine error skips one post, never the search

use crate::error::{MatchingError, MatchingResult};
use crate::models::Post;
use crate::search::{DocumentHit, Field, Match};
use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Matcher, Utf32Str};

/// Tuning for the similarity tier.
///
/// The defaults favour recall since this tier is a last resort.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyOptions {
    /// Highest accepted score (0.0 = perfect match only, 1.0 = anything)
    pub threshold: f64,

    /// Matched runs shorter than this many characters are discarded
    pub min_match_length: usize,

    /// When false, the first matched character must lie within `distance`
    /// characters of the field start
    pub ignore_location: bool,

    /// How many characters a match may spread beyond the query length
    pub distance: usize,
}

impl Default for FuzzyOptions {
    fn default() -> Self {
        Self {
            threshold: 0.6,
            min_match_length: 2,
            ignore_location: true,
            distance: 200,
        }
    }
}

/// An accepted match of the query against one field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldMatch {
    /// 0.0 for a perfect match, up to `threshold`
    pub score: f64,

    /// Inclusive character ranges, in field order
    pub ranges: Vec<(usize, usize)>,
}

/// Approximate string matching against a single field.
pub trait SimilarityEngine: Send {
    /// Match `query` against `haystack`.
    ///
    /// Returns `Ok(None)` when the field does not qualify.
    fn find(
        &mut self,
        query: &str,
        haystack: &str,
        options: &FuzzyOptions,
    ) -> MatchingResult<Option<FieldMatch>>;
}

/// Similarity engine backed by `nucleo-matcher`.
pub struct NucleoEngine {
    matcher: Matcher,
    haystack_buf: Vec<char>,
    query_buf: Vec<char>,
    indices: Vec<u32>,
}

impl NucleoEngine {
    pub fn new() -> Self {
        Self {
            matcher: Matcher::new(nucleo_matcher::Config::DEFAULT),
            haystack_buf: Vec::new(),
            query_buf: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Score of the query matched against itself, the best any field can get.
    fn ideal_score(&mut self, pattern: &Pattern, query: &str) -> Option<u32> {
        fill_chars(&mut self.query_buf, query);
        pattern.score(Utf32Str::Unicode(&self.query_buf), &mut self.matcher)
    }
}

/// Replace `buf` with the chars of `text`.
///
/// `Utf32Str::new` segments non-ASCII text into grapheme clusters, which
/// folds `\r\n` and combining marks into one unit. Matching over plain chars
/// keeps every reported index a char offset into `text`.
fn fill_chars(buf: &mut Vec<char>, text: &str) {
    buf.clear();
    buf.extend(text.chars());
}

impl Default for NucleoEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SimilarityEngine for NucleoEngine {
    fn find(
        &mut self,
        query: &str,
        haystack: &str,
        options: &FuzzyOptions,
    ) -> MatchingResult<Option<FieldMatch>> {
        if query.trim().is_empty() || haystack.is_empty() {
            return Ok(None);
        }

        // Literal atoms: query characters such as '^' or '!' carry no syntax here
        let pattern = Pattern::new(
            query,
            CaseMatching::Ignore,
            Normalization::Smart,
            AtomKind::Fuzzy,
        );

        self.indices.clear();
        fill_chars(&mut self.haystack_buf, haystack);
        let raw = pattern.indices(
            Utf32Str::Unicode(&self.haystack_buf),
            &mut self.matcher,
            &mut self.indices,
        );
        let Some(raw) = raw else {
            return Ok(None);
        };
        let Some(ideal) = self.ideal_score(&pattern, query).filter(|&s| s > 0) else {
            return Ok(None);
        };

        let score = 1.0 - (raw as f64 / ideal as f64).min(1.0);
        if score > options.threshold {
            return Ok(None);
        }

        self.indices.sort_unstable();
        self.indices.dedup();

        let len = self.haystack_buf.len();
        if let Some(&index) = self.indices.iter().find(|&&i| i as usize >= len) {
            return Err(MatchingError::MalformedIndices {
                index: index as usize,
                len,
            });
        }

        let (Some(&first), Some(&last)) = (self.indices.first(), self.indices.last()) else {
            return Ok(None);
        };
        let (first, last) = (first as usize, last as usize);

        if !options.ignore_location && first > options.distance {
            return Ok(None);
        }
        let query_len = query.chars().filter(|c| !c.is_whitespace()).count();
        if (last - first + 1).saturating_sub(query_len) > options.distance {
            return Ok(None);
        }

        let ranges: Vec<(usize, usize)> = group_ranges(&self.indices)
            .into_iter()
            .filter(|(start, end)| end - start + 1 >= options.min_match_length)
            .collect();

        if ranges.is_empty() {
            return Ok(None);
        }

        Ok(Some(FieldMatch { score, ranges }))
    }
}

/// Collapse sorted, de-duplicated indices into inclusive runs.
pub fn group_ranges(indices: &[u32]) -> Vec<(usize, usize)> {
    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for &index in indices {
        let index = index as usize;
        match ranges.last_mut() {
            Some((_, end)) if *end + 1 == index => *end = index,
            _ => ranges.push((index, index)),
        }
    }
    ranges
}

/// Output of one fuzzy tier run.
#[derive(Debug, Clone)]
pub struct FuzzyOutcome<'a> {
    /// Matching posts, best first
    pub hits: Vec<DocumentHit<'a>>,

    /// Posts skipped because the engine failed on them
    pub skipped: usize,
}

/// Fuzzy tier over a corpus.
pub struct FuzzyMatcher {
    engine: Box<dyn SimilarityEngine>,
    options: FuzzyOptions,
}

impl FuzzyMatcher {
    /// Create a matcher using the nucleo engine.
    pub fn new(options: FuzzyOptions) -> Self {
        Self::with_engine(Box::new(NucleoEngine::new()), options)
    }

    /// Create a matcher around a custom engine.
    pub fn with_engine(engine: Box<dyn SimilarityEngine>, options: FuzzyOptions) -> Self {
        Self { engine, options }
    }

    /// Match every post's title and content, ordering posts best first.
    ///
    /// A post whose match fails is logged and skipped.
    pub fn search<'a>(&mut self, query: &str, corpus: &'a [Post]) -> FuzzyOutcome<'a> {
        let mut scored: Vec<(f64, DocumentHit<'a>)> = Vec::new();
        let mut skipped = 0;

        for post in corpus {
            match self.match_post(query, post) {
                Ok(Some((score, matches))) => scored.push((
                    score,
                    DocumentHit::Fuzzy {
                        post,
                        matches,
                        score,
                    },
                )),
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!("Skipping post {} in fuzzy search: {}", post.id, e);
                    skipped += 1;
                }
            }
        }

        // Stable, so ties keep corpus order
        scored.sort_by(|a, b| a.0.total_cmp(&b.0));

        FuzzyOutcome {
            hits: scored.into_iter().map(|(_, hit)| hit).collect(),
            skipped,
        }
    }

    /// Best field score and all matches for one post.
    fn match_post(&mut self, query: &str, post: &Post) -> MatchingResult<Option<(f64, Vec<Match>)>> {
        let mut best: Option<f64> = None;
        let mut matches = Vec::new();

        for field in Field::ALL {
            let source = field.source(post);
            if source.is_empty() {
                continue;
            }

            if let Some(found) = self.engine.find(query, source, &self.options)? {
                best = Some(best.map_or(found.score, |b| b.min(found.score)));
                matches.extend(
                    found
                        .ranges
                        .into_iter()
                        .map(|(start, end)| Match::new(field, start, end)),
                );
            }
        }

        Ok(best.map(|score| (score, matches)))
    }
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self::new(FuzzyOptions::default())
    }
}
