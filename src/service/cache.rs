//! In-memory TTL cache for computed summaries.
//!
//! The data service owns this cache exclusively. An entry is valid while
//! `now - stored_at < ttl`; expired entries are treated as absent and
//! evicted lazily on the next lookup.

use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::time::Instant;

/// Default time-to-live for cached summaries
pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

#[derive(Clone, Debug)]
struct CacheEntry<T> {
    value: T,
    stored_at: Instant,
    ttl: Duration,
}

impl<T> CacheEntry<T> {
    fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.stored_at) >= self.ttl
    }
}

/// Hit/miss counters since creation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

/// Concurrent string-keyed cache with per-entry TTL
pub struct TtlCache<T> {
    entries: DashMap<String, CacheEntry<T>>,
    default_ttl: Duration,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<T: Clone> TtlCache<T> {
    pub fn new(default_ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            default_ttl,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    /// Valid entry or None. Expired entries are removed on the way out.
    pub fn get(&self, key: &str) -> Option<T> {
        let now = Instant::now();
        let live = match self.entries.get(key) {
            Some(entry) if !entry.is_expired(now) => Some(entry.value.clone()),
            _ => None,
        };
        if let Some(value) = live {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Some(value);
        }
        if self
            .entries
            .remove_if(key, |_, entry| entry.is_expired(now))
            .is_some()
        {
            log::debug!("Evicted expired cache entry: {}", key);
        }
        self.misses.fetch_add(1, Ordering::Relaxed);
        None
    }

    pub fn insert(&self, key: impl Into<String>, value: T) {
        self.insert_with_ttl(key, value, self.default_ttl);
    }

    pub fn insert_with_ttl(&self, key: impl Into<String>, value: T, ttl: Duration) {
        self.entries.insert(
            key.into(),
            CacheEntry {
                value,
                stored_at: Instant::now(),
                ttl,
            },
        );
    }

    /// Drop a single entry
    pub fn invalidate(&self, key: &str) {
        if self.entries.remove(key).is_some() {
            log::debug!("Invalidated cache entry: {}", key);
        }
    }

    /// Drop every entry
    pub fn clear(&self) {
        let count = self.entries.len();
        self.entries.clear();
        log::debug!("Cleared {} cache entries", count);
    }

    /// Sweep expired entries; lookup-time eviction makes this optional,
    /// but long-lived processes can run it on a timer.
    pub fn prune_expired(&self) -> usize {
        let now = Instant::now();
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(now));
        let removed = before - self.entries.len();
        if removed > 0 {
            log::debug!("Pruned {} expired cache entries", removed);
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

impl<T: Clone> Default for TtlCache<T> {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_returns_identical_value() {
        let cache: TtlCache<String> = TtlCache::default();
        cache.insert("team:alpha", "summary".to_string());
        assert_eq!(cache.get("team:alpha"), Some("summary".to_string()));
        assert_eq!(cache.stats(), CacheStats { hits: 1, misses: 0 });
    }

    #[test]
    fn test_missing_key_counts_a_miss() {
        let cache: TtlCache<u32> = TtlCache::default();
        assert_eq!(cache.get("absent"), None);
        assert_eq!(cache.stats(), CacheStats { hits: 0, misses: 1 });
    }

    #[tokio::test(start_paused = true)]
    async fn test_entry_expires_after_ttl() {
        let cache: TtlCache<u32> = TtlCache::new(Duration::from_secs(300));
        cache.insert("team:alpha", 7);

        tokio::time::advance(Duration::from_secs(299)).await;
        assert_eq!(cache.get("team:alpha"), Some(7));

        tokio::time::advance(Duration::from_secs(1)).await;
        assert_eq!(cache.get("team:alpha"), None);
        assert!(cache.is_empty(), "expired entry should be evicted lazily");
    }

    #[tokio::test(start_paused = true)]
    async fn test_per_entry_ttl_override() {
        let cache: TtlCache<u32> = TtlCache::new(Duration::from_secs(300));
        cache.insert_with_ttl("short", 1, Duration::from_secs(10));
        cache.insert("long", 2);

        tokio::time::advance(Duration::from_secs(10)).await;
        assert_eq!(cache.get("short"), None);
        assert_eq!(cache.get("long"), Some(2));
    }

    #[test]
    fn test_invalidate_single_key() {
        let cache: TtlCache<u32> = TtlCache::default();
        cache.insert("keep", 1);
        cache.insert("drop", 2);
        cache.invalidate("drop");
        assert_eq!(cache.get("keep"), Some(1));
        assert_eq!(cache.get("drop"), None);
    }

    #[test]
    fn test_clear_drops_everything() {
        let cache: TtlCache<u32> = TtlCache::default();
        cache.insert("a", 1);
        cache.insert("b", 2);
        cache.clear();
        assert!(cache.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_prune_removes_only_expired() {
        let cache: TtlCache<u32> = TtlCache::new(Duration::from_secs(300));
        cache.insert_with_ttl("stale", 1, Duration::from_secs(5));
        cache.insert("fresh", 2);

        tokio::time::advance(Duration::from_secs(6)).await;
        assert_eq!(cache.prune_expired(), 1);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("fresh"), Some(2));
    }
}
