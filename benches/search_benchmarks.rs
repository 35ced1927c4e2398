//! Performance benchmarks for search functionality.
//!
//! These benchmarks measure search performance under various conditions:
//! - Exact tier hits at different corpus sizes
//! - Fuzzy fallback when nothing matches literally
//! - The full tool path including paginated fetching from a repository

use async_trait::async_trait;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use post_search::error::StoreApiResult;
use post_search::models::Post;
use post_search::repositories::PostRepository;
use post_search::search::{SearchEngine, SearchQuery, SearchSettings};
use post_search::tools::{SearchParams, SearchTools};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Runtime;

const WORDS: &[&str] = &[
    "alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf", "hotel", "india", "juliet",
    "kilo", "lima", "mike", "november", "oscar", "papa", "quebec", "romeo", "sierra", "tango",
];

/// Deterministic corpus of posts with a few hundred words each.
fn synthetic_corpus(size: usize) -> Vec<Post> {
    (0..size)
        .map(|i| {
            let words: Vec<&str> = (0..300)
                .map(|j| WORDS[(i * 7 + j * 3) % WORDS.len()])
                .collect();
            let content = words.join(" ");
            let title = format!("{} {} notes", WORDS[i % WORDS.len()], i);
            Post::new(format!("post-{}", i), Some(title.as_str()), Some(content.as_str()))
        })
        .collect()
}

/// In-memory repository serving a fixed corpus.
struct StaticRepository {
    posts: Vec<Post>,
}

#[async_trait]
impl PostRepository for StaticRepository {
    async fn list(&self, limit: usize, offset: usize) -> StoreApiResult<Vec<Post>> {
        Ok(self.posts.iter().skip(offset).take(limit).cloned().collect())
    }
}

/// Benchmark the exact tier across corpus sizes.
fn bench_exact_tier(c: &mut Criterion) {
    let mut group = c.benchmark_group("exact_tier");
    let query = SearchQuery::parse(Some("sierra")).unwrap();

    for size in [10, 100, 500].iter() {
        let corpus = synthetic_corpus(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &corpus, |b, corpus| {
            b.iter(|| {
                let mut engine = SearchEngine::new(&SearchSettings::default());
                engine.search(&query, corpus)
            });
        });
    }

    group.finish();
}

/// Benchmark the fuzzy fallback (no literal match anywhere).
fn bench_fuzzy_fallback(c: &mut Criterion) {
    let mut group = c.benchmark_group("fuzzy_fallback");
    let query = SearchQuery::parse(Some("novmber")).unwrap();

    for size in [10, 100].iter() {
        let corpus = synthetic_corpus(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &corpus, |b, corpus| {
            b.iter(|| {
                let mut engine = SearchEngine::new(&SearchSettings::default());
                engine.search(&query, corpus)
            });
        });
    }

    group.finish();
}

/// Benchmark the tool path, including paginated fetching.
fn bench_search_tool(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let repo = Arc::new(StaticRepository {
        posts: synthetic_corpus(250),
    });
    let search_tools = SearchTools::new(repo, SearchSettings::default());

    c.bench_function("search_tool_250_posts", |b| {
        b.to_async(&rt).iter(|| async {
            let params = SearchParams {
                query: Some("quebec".to_string()),
            };

            let _result = search_tools.search_posts(params).await;
        });
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(10))
        .sample_size(50);
    targets = bench_exact_tier,
        bench_fuzzy_fallback,
        bench_search_tool
}

criterion_main!(benches);
