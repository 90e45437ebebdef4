//! Cache Entry Module
//!
//! Defines the structure for individual cached response bodies.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A single cached payload together with its insertion timestamp.
///
/// The payload is an immutable snapshot of a response body at insertion
/// time. The timestamp is captured once in [`CacheEntry::new`] and never
/// mutated; re-inserting under the same key replaces the entry wholesale.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The cached response body
    payload: Vec<u8>,
    /// Insertion timestamp (monotonic)
    created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry, stamping it with the current instant.
    pub fn new(payload: Vec<u8>) -> Self {
        Self {
            payload,
            created_at: Instant::now(),
        }
    }

    // == Payload ==
    /// Returns the cached payload.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    // == Age ==
    /// Returns how long ago this entry was inserted.
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    // == Is Stale ==
    /// Checks whether the entry has outlived the given interval.
    ///
    /// Boundary condition: an entry is stale only once its age strictly
    /// exceeds the interval. At an age of exactly `interval` it is still
    /// fresh.
    pub fn is_stale(&self, interval: Duration) -> bool {
        self.age() > interval
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new(b"val1".to_vec());

        assert_eq!(entry.payload(), b"val1");
        assert!(entry.age() < Duration::from_secs(1));
    }

    #[test]
    fn test_entry_fresh_within_interval() {
        let entry = CacheEntry::new(b"val1".to_vec());

        assert!(!entry.is_stale(Duration::from_secs(60)));
    }

    #[test]
    fn test_entry_stale_after_interval() {
        let entry = CacheEntry::new(b"val1".to_vec());

        sleep(Duration::from_millis(30));

        assert!(entry.is_stale(Duration::from_millis(10)));
    }

    #[test]
    fn test_entry_age_grows() {
        let entry = CacheEntry::new(Vec::new());

        let first = entry.age();
        sleep(Duration::from_millis(10));
        let second = entry.age();

        assert!(second > first);
    }

    #[test]
    fn test_entry_empty_payload() {
        let entry = CacheEntry::new(Vec::new());
        assert!(entry.payload().is_empty());
    }
}
