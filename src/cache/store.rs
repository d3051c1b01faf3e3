//! Cache Store Module
//!
//! Main cache engine: a HashMap of fingerprint entries with TTL expiry.
//! Expiry is evaluated lazily on reads; physical removal of stale entries
//! piggybacks on writes, so no background sweeper is needed.

use std::collections::HashMap;
use std::time::Duration;

use tracing::debug;

use crate::cache::{CacheStats, FingerprintEntry, StatsSnapshot};

// == Fingerprint Cache ==
/// TTL-based lookup cache for per-client fingerprints.
///
/// `get` is read-only so callers can share it behind the read half of a
/// reader-writer lock; `set` takes `&mut self` and doubles as the cleanup
/// pass that keeps the map bounded by the active-client count within one
/// TTL window.
#[derive(Debug)]
pub struct FingerprintCache {
    /// Client key to cached fingerprint
    entries: HashMap<String, FingerprintEntry>,
    /// Maximum entry age before a read treats it as absent
    ttl: Duration,
    /// Performance statistics
    stats: CacheStats,
}

impl FingerprintCache {
    // == Constructor ==
    /// Creates an empty cache with the given TTL.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
            stats: CacheStats::new(),
        }
    }

    // == Get ==
    /// Retrieves the fingerprint cached for `key`, if still fresh.
    ///
    /// Expired entries are treated as absent but are NOT removed here;
    /// removal happens on the next `set`. The read path never mutates the
    /// map, so concurrent lookups can proceed under a shared lock.
    pub fn get(&self, key: &str) -> Option<String> {
        match self.entries.get(key) {
            Some(entry) if !entry.is_expired(self.ttl) => {
                self.stats.record_hit();
                Some(entry.value.clone())
            }
            _ => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Set ==
    /// Stores a fingerprint for `key`, overwriting any previous entry.
    ///
    /// Before inserting, every expired entry in the map is removed. The
    /// full scan makes each write O(map size), which keeps the map bounded
    /// without a timer thread. This operation cannot fail.
    pub fn set(&mut self, key: String, value: String) {
        let before = self.entries.len();
        let ttl = self.ttl;
        self.entries.retain(|_, entry| !entry.is_expired(ttl));

        let purged = before - self.entries.len();
        if purged > 0 {
            self.stats.record_purged(purged as u64);
            debug!(purged, remaining = self.entries.len(), "purged expired fingerprints");
        }

        self.entries.insert(key, FingerprintEntry::new(value));
    }

    // == TTL ==
    /// Returns the configured TTL.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Stats ==
    /// Returns a snapshot of the current statistics.
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot(self.entries.len())
    }

    // == Length ==
    /// Returns the current number of entries, including any not yet purged.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Age in milliseconds of the oldest entry, if any. Test support for
    /// checking the cleanup bound after writes.
    #[cfg(test)]
    pub fn oldest_age_ms(&self) -> Option<u64> {
        self.entries.values().map(|entry| entry.age_ms()).max()
    }
}
