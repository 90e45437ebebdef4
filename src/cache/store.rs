//! Cache Store Module
//!
//! The entry table underlying the response cache: a HashMap of cached
//! bodies keyed by request URL, with age-based staleness driven by a
//! single configured interval.

use std::collections::HashMap;
use std::time::Duration;

use crate::cache::{CacheEntry, CacheStats};

// == Cache Store ==
/// Key-value storage for response bodies with a fixed time-to-live.
///
/// The store itself never expires anything on its own; staleness is
/// enforced by a periodic call to [`CacheStore::remove_stale`], issued by
/// the background sweep task. Lookups return whatever is present at the
/// moment of the call, even if the entry is past its interval.
#[derive(Debug)]
pub struct CacheStore {
    /// Cached bodies keyed by request URL
    entries: HashMap<String, CacheEntry>,
    /// Time-to-live for every entry, fixed at construction
    interval: Duration,
    /// Performance statistics
    stats: CacheStats,
}

impl CacheStore {
    // == Constructor ==
    /// Creates a new CacheStore with the given time-to-live.
    ///
    /// # Panics
    /// Panics if `interval` is zero. The sweep runs once per interval, so
    /// a zero interval would spin the sweep task in a hot loop.
    pub fn new(interval: Duration) -> Self {
        assert!(!interval.is_zero(), "cache interval must be positive");
        Self {
            entries: HashMap::new(),
            interval,
            stats: CacheStats::new(),
        }
    }

    // == Put ==
    /// Stores a payload under the given key.
    ///
    /// If the key already exists the entry is replaced wholesale, which
    /// resets its age to zero. Never fails.
    pub fn put(&mut self, key: String, payload: Vec<u8>) {
        self.entries.insert(key, CacheEntry::new(payload));
        self.stats.set_entries(self.entries.len());
    }

    // == Get ==
    /// Retrieves the payload stored under `key`, if any.
    ///
    /// Returns whatever is present at the moment of the call; an entry past
    /// its interval is still returned until the sweep removes it. A miss is
    /// a routine outcome, not an error.
    pub fn get(&mut self, key: &str) -> Option<Vec<u8>> {
        match self.entries.get(key) {
            Some(entry) => {
                self.stats.record_hit();
                Some(entry.payload().to_vec())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Remove Stale ==
    /// Removes every entry whose age exceeds the configured interval.
    ///
    /// Full-table scan; returns the number of entries removed.
    pub fn remove_stale(&mut self) -> usize {
        let stale_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_stale(self.interval))
            .map(|(key, _)| key.clone())
            .collect();

        let count = stale_keys.len();

        for key in stale_keys {
            self.entries.remove(&key);
        }

        self.stats.record_evictions(count as u64);
        self.stats.set_entries(self.entries.len());
        count
    }

    // == Interval ==
    /// Returns the configured time-to-live.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
