//! Key-indexed cache of fetch results.
//!
//! Each distinct (source, date) pair gets one entry. The entry is inserted
//! when a fetch starts, updated exactly once when the fetch completes, and
//! evicted only on manual invalidation (refresh, or discarding a stale
//! in-flight request). A `Loading` entry doubles as in-flight deduplication:
//! a key that is already loading is never fetched a second time.

use crate::api::types::ContentResponse;
use crate::source::Source;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::fmt::Display;
use std::time::Instant;

/// The (source, date) pair identifying a distinct content request.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct FetchKey {
    pub source: Source,
    pub date: NaiveDate,
}

impl FetchKey {
    pub fn new(source: Source, date: NaiveDate) -> Self {
        Self { source, date }
    }
}

impl Display for FetchKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.source.slug(), self.date.format("%Y-%m-%d"))
    }
}

/// Observable state of one fetch key.
#[derive(Debug, Clone)]
pub enum FetchState {
    /// A request is in flight.
    Loading { started_at: Instant },
    /// The last fetch succeeded. Zero items is still `Ready`; emptiness is a
    /// render branch, not an error.
    Ready(ContentResponse),
    /// The retry budget is exhausted; holds the message shown verbatim.
    Failed(String),
}

#[derive(Debug, Default)]
pub struct FetchCache {
    entries: HashMap<FetchKey, FetchState>,
}

impl FetchCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &FetchKey) -> Option<&FetchState> {
        self.entries.get(key)
    }

    /// Marks a fetch as started. Returns false without touching the entry if
    /// the key already has one (loading, ready, or failed) — the caller must
    /// not spawn a request in that case.
    pub fn begin(&mut self, key: FetchKey) -> bool {
        if self.entries.contains_key(&key) {
            return false;
        }
        self.entries.insert(
            key,
            FetchState::Loading {
                started_at: Instant::now(),
            },
        );
        true
    }

    /// Records the outcome of a completed fetch.
    pub fn complete(&mut self, key: FetchKey, state: FetchState) {
        self.entries.insert(key, state);
    }

    /// Manual invalidation: drops the entry so the next selection refetches.
    pub fn evict(&mut self, key: &FetchKey) {
        self.entries.remove(key);
    }

    pub fn is_loading(&self, key: &FetchKey) -> bool {
        matches!(self.get(key), Some(FetchState::Loading { .. }))
    }

    pub fn is_ready(&self, key: &FetchKey) -> bool {
        matches!(self.get(key), Some(FetchState::Ready(_)))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(day: u32) -> FetchKey {
        FetchKey::new(
            Source::HackerNews,
            NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
        )
    }

    fn ready() -> FetchState {
        FetchState::Ready(ContentResponse { items: vec![] })
    }

    #[test]
    fn test_begin_inserts_loading_once() {
        let mut cache = FetchCache::new();
        assert!(cache.begin(key(1)));
        assert!(cache.is_loading(&key(1)));

        // Second begin for the same key is a dedup no-op.
        assert!(!cache.begin(key(1)));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cached_key_is_not_refetched() {
        let mut cache = FetchCache::new();
        cache.begin(key(1));
        cache.complete(key(1), ready());

        assert!(cache.is_ready(&key(1)));
        assert!(!cache.begin(key(1)), "a ready key must not refetch");
    }

    #[test]
    fn test_distinct_keys_fetch_independently() {
        let mut cache = FetchCache::new();
        assert!(cache.begin(key(1)));
        assert!(cache.begin(key(2)));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_evict_allows_refetch() {
        let mut cache = FetchCache::new();
        cache.begin(key(1));
        cache.complete(key(1), FetchState::Failed("HTTP 500".to_string()));

        cache.evict(&key(1));
        assert!(cache.get(&key(1)).is_none());
        assert!(cache.begin(key(1)), "evicted key re-enters loading");
    }

    #[test]
    fn test_key_display() {
        assert_eq!(key(9).to_string(), "hackernews/2024-01-09");
    }
}
