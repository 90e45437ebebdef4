//! Cache Handle Module
//!
//! Public face of the response cache: a cloneable handle over the shared
//! entry table, tied to the background sweep task that expires it.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use crate::cache::{CacheStats, CacheStore};
use crate::tasks::spawn_sweep_task;

// == Sweep Guard ==
/// Aborts the sweep task once the last cache handle is dropped.
///
/// The sweep otherwise runs for the life of the process; the guard keeps
/// dynamically created caches from leaking a perpetual task.
#[derive(Debug)]
struct SweepGuard {
    handle: JoinHandle<()>,
}

impl Drop for SweepGuard {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

// == Cache ==
/// Thread-safe response cache with automatic time-based expiry.
///
/// [`Cache::new`] spawns exactly one background sweep task for the
/// instance; no two instances share a sweep task. Cloning the handle is
/// cheap and every clone addresses the same entry table. All access to the
/// table is serialized through one lock, so a lookup observes either a
/// complete entry or none at all.
#[derive(Debug, Clone)]
pub struct Cache {
    /// Shared entry table, also held by the sweep task
    store: Arc<RwLock<CacheStore>>,
    /// Drop guard for the sweep task, shared by all clones
    sweeper: Arc<SweepGuard>,
}

impl Cache {
    // == Constructor ==
    /// Creates a cache whose entries live for `interval`, and starts the
    /// sweep task that enforces it.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Panics
    /// Panics if `interval` is zero.
    pub fn new(interval: Duration) -> Self {
        let store = Arc::new(RwLock::new(CacheStore::new(interval)));
        let handle = spawn_sweep_task(Arc::clone(&store), interval);
        Self {
            store,
            sweeper: Arc::new(SweepGuard { handle }),
        }
    }

    // == Put ==
    /// Stores a payload under `key`, replacing any previous entry and
    /// resetting its age. Never fails.
    pub async fn put(&self, key: impl Into<String>, payload: Vec<u8>) {
        self.store.write().await.put(key.into(), payload);
    }

    // == Get ==
    /// Returns the payload stored under `key`, or `None`.
    ///
    /// Staleness is not checked here; an entry past its interval is still
    /// returned until the sweep removes it.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        // Write lock: the lookup also records hit/miss statistics.
        self.store.write().await.get(key)
    }

    // == Stats ==
    /// Returns a snapshot of the cache statistics.
    pub async fn stats(&self) -> CacheStats {
        self.store.read().await.stats()
    }

    // == Length ==
    /// Returns the current number of entries.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }
}
