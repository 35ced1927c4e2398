//! Exact tier: case-insensitive literal search over titles and bodies.

use super::types::{DocumentHit, Field, Match};
use crate::models::Post;
use std::iter::FusedIterator;

/// Lower-case `text` one character at a time.
///
/// Characters whose lower-case form expands to several characters are kept
/// unchanged, so offsets into the folded text are offsets into `text`.
pub fn fold_chars(text: &str) -> Vec<char> {
    text.chars().map(fold_char).collect()
}

fn fold_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Lazy sequence of the start offsets of `needle` in `haystack`.
///
/// After a hit at `s` the scan resumes at `s + 1`, so overlapping
/// occurrences are all reported ("aa" in "aaaa" yields 0, 1, 2).
#[derive(Debug, Clone)]
pub struct MatchPositions<'a> {
    haystack: &'a [char],
    needle: &'a [char],
    from: usize,
}

impl<'a> MatchPositions<'a> {
    pub fn new(haystack: &'a [char], needle: &'a [char]) -> Self {
        Self {
            haystack,
            needle,
            from: 0,
        }
    }

    /// Resume scanning at `from`.
    pub fn restart_at(&mut self, from: usize) {
        self.from = from;
    }
}

impl Iterator for MatchPositions<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.needle.is_empty()
            || self.needle.len() > self.haystack.len()
            || self.from > self.haystack.len() - self.needle.len()
        {
            return None;
        }

        match self.haystack[self.from..]
            .windows(self.needle.len())
            .position(|window| window == self.needle)
        {
            Some(offset) => {
                let found = self.from + offset;
                self.from = found + 1;
                Some(found)
            }
            None => {
                self.from = self.haystack.len();
                None
            }
        }
    }
}

impl FusedIterator for MatchPositions<'_> {}

/// Literal matcher for one query.
#[derive(Debug, Clone)]
pub struct ExactMatcher {
    needle: Vec<char>,
}

impl ExactMatcher {
    /// Create a matcher for an already trimmed, non-empty query.
    pub fn new(query: &str) -> Self {
        Self {
            needle: fold_chars(query),
        }
    }

    /// All matches in one post: every body occurrence, then the first title
    /// occurrence if there is one.
    pub fn match_post(&self, post: &Post) -> Vec<Match> {
        let len = self.needle.len();
        if len == 0 {
            return Vec::new();
        }

        let body = fold_chars(post.content_text());
        let mut matches: Vec<Match> = MatchPositions::new(&body, &self.needle)
            .map(|start| Match::new(Field::Content, start, start + len - 1))
            .collect();

        let title = fold_chars(post.title_text());
        if let Some(start) = MatchPositions::new(&title, &self.needle).next() {
            matches.push(Match::new(Field::Title, start, start + len - 1));
        }

        matches
    }

    /// Run the tier over the corpus, keeping corpus order.
    pub fn search<'a>(&self, corpus: &'a [Post]) -> Vec<DocumentHit<'a>> {
        corpus
            .iter()
            .filter_map(|post| {
                let matches = self.match_post(post);
                if matches.is_empty() {
                    None
                } else {
                    Some(DocumentHit::Exact { post, matches })
                }
            })
            .collect()
    }
}
