//! Turns per-document hits into public search results.

use super::snippet::SnippetBuilder;
use super::types::{DocumentHit, SearchResult};

/// Build one result per hit, in the order given.
///
/// Snippets follow match discovery order; hits without matches are dropped.
pub fn assemble(hits: Vec<DocumentHit<'_>>, builder: &SnippetBuilder) -> Vec<SearchResult> {
    hits.into_iter()
        .filter_map(|hit| {
            let (post, matches) = hit.into_parts();
            if matches.is_empty() {
                return None;
            }

            let snippets: Vec<_> = matches
                .iter()
                .map(|m| builder.build(m, m.field.source(post)))
                .collect();

            Some(SearchResult {
                id: post.id.clone(),
                title: post.title.clone(),
                container: post.container.clone(),
                domain: post.domain.clone(),
                parent_container: post.parent_container.clone(),
                created_at: post.created_at.clone(),
                match_count: snippets.len(),
                snippets,
            })
        })
        .collect()
}
