//! Basic metrics instrumentation for tracking performance.
//!
//! Provides counters for store HTTP requests, fetched posts, and which search
//! tier answered each query.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Metrics collector shared by the store client and the search engine.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// Total number of HTTP requests made
    http_requests_total: Arc<AtomicU64>,

    /// Total number of HTTP errors
    http_errors_total: Arc<AtomicU64>,

    /// Total duration of all HTTP requests in milliseconds
    http_duration_total_ms: Arc<AtomicU64>,

    /// Number of posts fetched from the store
    posts_fetched_total: Arc<AtomicU64>,

    /// Queries that ran the exact tier
    exact_searches_total: Arc<AtomicU64>,

    /// Queries that fell through to the fuzzy tier
    fuzzy_fallbacks_total: Arc<AtomicU64>,

    /// Posts skipped after a similarity engine failure
    documents_skipped_total: Arc<AtomicU64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            http_requests_total: Arc::new(AtomicU64::new(0)),
            http_errors_total: Arc::new(AtomicU64::new(0)),
            http_duration_total_ms: Arc::new(AtomicU64::new(0)),
            posts_fetched_total: Arc::new(AtomicU64::new(0)),
            exact_searches_total: Arc::new(AtomicU64::new(0)),
            fuzzy_fallbacks_total: Arc::new(AtomicU64::new(0)),
            documents_skipped_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record an HTTP request with duration.
    pub fn record_http_request(&self, duration: Duration) {
        self.http_requests_total.fetch_add(1, Ordering::Relaxed);
        self.http_duration_total_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    /// Record an HTTP error.
    pub fn record_http_error(&self) {
        self.http_errors_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record posts fetched.
    pub fn record_posts_fetched(&self, count: usize) {
        self.posts_fetched_total
            .fetch_add(count as u64, Ordering::Relaxed);
    }

    pub fn record_exact_search(&self) {
        self.exact_searches_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_fuzzy_fallback(&self) {
        self.fuzzy_fallbacks_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_documents_skipped(&self, count: usize) {
        self.documents_skipped_total
            .fetch_add(count as u64, Ordering::Relaxed);
    }

    /// Get total HTTP requests.
    pub fn http_requests_total(&self) -> u64 {
        self.http_requests_total.load(Ordering::Relaxed)
    }

    /// Get total HTTP errors.
    pub fn http_errors_total(&self) -> u64 {
        self.http_errors_total.load(Ordering::Relaxed)
    }

    /// Get total HTTP duration in milliseconds.
    pub fn http_duration_total_ms(&self) -> u64 {
        self.http_duration_total_ms.load(Ordering::Relaxed)
    }

    /// Get average HTTP request duration in milliseconds.
    pub fn http_duration_avg_ms(&self) -> f64 {
        let total = self.http_duration_total_ms.load(Ordering::Relaxed);
        let count = self.http_requests_total.load(Ordering::Relaxed);
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    pub fn posts_fetched_total(&self) -> u64 {
        self.posts_fetched_total.load(Ordering::Relaxed)
    }

    pub fn exact_searches_total(&self) -> u64 {
        self.exact_searches_total.load(Ordering::Relaxed)
    }

    pub fn fuzzy_fallbacks_total(&self) -> u64 {
        self.fuzzy_fallbacks_total.load(Ordering::Relaxed)
    }

    pub fn documents_skipped_total(&self) -> u64 {
        self.documents_skipped_total.load(Ordering::Relaxed)
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            http_requests_total: self.http_requests_total(),
            http_errors_total: self.http_errors_total(),
            http_duration_total_ms: self.http_duration_total_ms(),
            http_duration_avg_ms: self.http_duration_avg_ms(),
            posts_fetched_total: self.posts_fetched_total(),
            exact_searches_total: self.exact_searches_total(),
            fuzzy_fallbacks_total: self.fuzzy_fallbacks_total(),
            documents_skipped_total: self.documents_skipped_total(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone)]
pub struct MetricsSummary {
    pub http_requests_total: u64,
    pub http_errors_total: u64,
    pub http_duration_total_ms: u64,
    pub http_duration_avg_ms: f64,
    pub posts_fetched_total: u64,
    pub exact_searches_total: u64,
    pub fuzzy_fallbacks_total: u64,
    pub documents_skipped_total: u64,
}

/// Helper for timing HTTP requests.
pub struct HttpTimer {
    start: Instant,
    metrics: Metrics,
}

impl HttpTimer {
    /// Start timing an HTTP request.
    pub fn new(metrics: Metrics) -> Self {
        Self {
            start: Instant::now(),
            metrics,
        }
    }

    /// Complete the timing and record the duration.
    pub fn complete(self) {
        let duration = self.start.elapsed();
        self.metrics.record_http_request(duration);
    }

    /// Complete the timing and record as an error.
    pub fn complete_with_error(self) {
        let duration = self.start.elapsed();
        self.metrics.record_http_request(duration);
        self.metrics.record_http_error();
    }
}
