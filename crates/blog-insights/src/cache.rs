//! Per-query search result cache

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use moka::future::Cache;

use crate::types::{CacheStats, SearchReport};

/// Process-wide cache of search reports keyed by the raw request string.
///
/// Entries are written once and never evicted or expired: a query returns
/// the report computed on its first successful fetch for the lifetime of
/// the process, even if the remote collection changes afterwards.
/// Concurrent misses for the same key share a single in-flight computation;
/// failed computations are not stored.
pub struct QueryCache {
    entries: Cache<String, SearchReport>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl QueryCache {
    pub fn new() -> Self {
        // No capacity bound and no TTL: entries live until process teardown
        Self {
            entries: Cache::builder().build(),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Build the cache key for a raw query parameter.
    ///
    /// The query is deliberately not normalized: `Foo` and `foo` are
    /// distinct entries, and existing clients rely on the exact key shape.
    pub fn cache_key(query: &str) -> String {
        format!("/api/blog-search?query={}", query)
    }

    /// Return the cached report for `key`, or run `compute`, store its
    /// result under `key`, and return it.
    pub async fn get_or_compute<F, Fut, E>(
        &self,
        key: String,
        compute: F,
    ) -> std::result::Result<SearchReport, Arc<E>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = std::result::Result<SearchReport, E>> + Send,
        E: Send + Sync + 'static,
    {
        if let Some(report) = self.entries.get(&key).await {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(report);
        }
        self.misses.fetch_add(1, Ordering::Relaxed);

        self.entries.try_get_with(key, compute()).await
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.entry_count(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new()
    }
}
