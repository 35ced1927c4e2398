//! Snippet generation shared by both search tiers.
//!
//! A snippet is a preview window of up to `radius` characters on each side of
//! a match. Window edges are pulled outward to the nearest space, or failing
//! that the nearest newline, when one lies within `tolerance` characters, so
//! previews do not start or end mid-word.

use super::types::{Field, Match, Position, Snippet};

/// Context characters to show before and after a match
pub const DEFAULT_CONTEXT_RADIUS: usize = 100;

/// How far past a raw window edge to look for a word or line break
pub const DEFAULT_SNAP_TOLERANCE: usize = 15;

/// Builds snippets from matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnippetBuilder {
    radius: usize,
    tolerance: usize,
}

impl SnippetBuilder {
    pub fn new(radius: usize, tolerance: usize) -> Self {
        Self { radius, tolerance }
    }

    pub fn radius(&self) -> usize {
        self.radius
    }

    pub fn tolerance(&self) -> usize {
        self.tolerance
    }

    /// Build the snippet for `m` inside `source`.
    ///
    /// Title matches keep the whole title as their text; content matches are
    /// windowed. Offsets past the end of `source` are clamped.
    pub fn build(&self, m: &Match, source: &str) -> Snippet {
        let chars: Vec<char> = source.chars().collect();
        let is_title = m.field == Field::Title;

        if chars.is_empty() {
            return Snippet {
                text: String::new(),
                position: Position { start: 0, end: 0 },
                highlight: String::new(),
                field: m.field,
                is_title,
            };
        }

        let end = m.end.min(chars.len() - 1);
        let start = m.start.min(end);

        let text = if is_title {
            source.to_string()
        } else {
            let (left, right) = self.window(&chars, start, end);
            chars[left..right].iter().collect()
        };

        Snippet {
            text,
            position: Position { start, end },
            highlight: chars[start..=end].iter().collect(),
            field: m.field,
            is_title,
        }
    }

    /// Snapped window `[left, right)` around the inclusive range
    /// `start..=end`. Requires `start <= end < chars.len()`.
    pub fn window(&self, chars: &[char], start: usize, end: usize) -> (usize, usize) {
        let len = chars.len();
        let raw_left = start.saturating_sub(self.radius);
        let raw_right = end.saturating_add(1).saturating_add(self.radius).min(len);

        let left = if raw_left == 0 {
            0
        } else {
            self.snap_left(chars, raw_left, ' ')
                .or_else(|| self.snap_left(chars, raw_left, '\n'))
                .unwrap_or(raw_left)
                .min(start)
        };

        let right = if raw_right >= len {
            len
        } else {
            self.snap_right(chars, raw_right, ' ')
                .or_else(|| self.snap_right(chars, raw_right, '\n'))
                .unwrap_or(raw_right)
        };

        (left, right)
    }

    /// Nearest `delimiter` at or before `edge`, returning the index just after it.
    fn snap_left(&self, chars: &[char], edge: usize, delimiter: char) -> Option<usize> {
        let floor = edge.saturating_sub(self.tolerance);
        (floor..=edge)
            .rev()
            .find(|&i| chars[i] == delimiter)
            .map(|i| i + 1)
    }

    /// Nearest `delimiter` at or after `edge`, returning its index.
    fn snap_right(&self, chars: &[char], edge: usize, delimiter: char) -> Option<usize> {
        let ceiling = edge.saturating_add(self.tolerance).min(chars.len() - 1);
        (edge..=ceiling).find(|&i| chars[i] == delimiter)
    }
}

impl Default for SnippetBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_CONTEXT_RADIUS, DEFAULT_SNAP_TOLERANCE)
    }
}
