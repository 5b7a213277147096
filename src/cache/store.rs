//! Response Cache Module
//!
//! In-memory map from cache key to cached upstream response with TTL reads.

use std::collections::HashMap;

use serde_json::Value;
use tracing::debug;

use crate::cache::{CacheEntry, CacheStats};

// == Response Cache ==
/// TTL cache for upstream responses.
///
/// Unbounded: entries are only ever overwritten, never evicted. An expired
/// entry is treated as absent on read and lingers until the next write to
/// its key; there is no background cleanup.
#[derive(Debug, Default)]
pub struct ResponseCache {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Hit/miss counters
    stats: CacheStats,
}

impl ResponseCache {
    // == Constructor ==
    /// Creates an empty ResponseCache.
    pub fn new() -> Self {
        Self::default()
    }

    // == Get ==
    /// Retrieves a value by key, honoring the entry's TTL.
    ///
    /// Returns `None` for missing keys and for entries whose expiry has
    /// passed. Expired entries are not removed here; they stay in the map
    /// until the next `set` on the same key.
    pub fn get(&mut self, key: &str) -> Option<Value> {
        match self.entries.get(key) {
            Some(entry) if !entry.is_expired() => {
                self.stats.record_hit();
                debug!(key, "cache hit");
                Some(entry.value.clone())
            }
            _ => {
                self.stats.record_miss();
                debug!(key, "cache miss");
                None
            }
        }
    }

    // == Set ==
    /// Stores a value under a key with the given TTL.
    ///
    /// Overwrites any prior entry for the key and resets its expiry to
    /// now + ttl.
    pub fn set(&mut self, key: String, value: Value, ttl_seconds: u64) {
        self.entries.insert(key, CacheEntry::new(value, ttl_seconds));
        self.stats.set_entries(self.entries.len());
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries, expired leftovers included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn test_cache_new() {
        let cache = ResponseCache::new();
        assert_eq!(cache.len(), 0);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_cache_set_and_get() {
        let mut cache = ResponseCache::new();

        cache.set("player:alice".to_string(), json!({"kills": 7}), 120);
        let value = cache.get("player:alice");

        assert_eq!(value, Some(json!({"kills": 7})));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_get_missing() {
        let mut cache = ResponseCache::new();

        assert_eq!(cache.get("player:nobody"), None);
    }

    #[test]
    fn test_cache_overwrite_resets_expiry() {
        let mut cache = ResponseCache::new();

        cache.set("baltop".to_string(), json!([1]), 1);
        sleep(Duration::from_millis(1100));
        assert_eq!(cache.get("baltop"), None);

        // Overwriting the expired entry makes the key live again
        cache.set("baltop".to_string(), json!([2]), 120);
        assert_eq!(cache.get("baltop"), Some(json!([2])));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_ttl_expiration() {
        let mut cache = ResponseCache::new();

        cache.set("guilds:1:10".to_string(), json!({"guilds": []}), 1);
        assert!(cache.get("guilds:1:10").is_some());

        sleep(Duration::from_millis(1100));

        // Expired entry reads as absent but still occupies a slot
        assert_eq!(cache.get("guilds:1:10"), None);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_stats() {
        let mut cache = ResponseCache::new();

        cache.set("economy:alice".to_string(), json!(100), 120);
        cache.get("economy:alice"); // hit
        cache.get("economy:bob"); // miss

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.entries, 1);
    }

    #[test]
    fn test_cache_expired_read_counts_as_miss() {
        let mut cache = ResponseCache::new();

        cache.set("player:carol".to_string(), json!(null), 1);
        sleep(Duration::from_millis(1100));
        cache.get("player:carol");

        assert_eq!(cache.stats().misses, 1);
    }
}
