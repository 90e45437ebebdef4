//! Cache Sweep Task
//!
//! Background task that periodically removes stale cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

use crate::cache::CacheStore;

/// Spawns a background task that sweeps the cache once per interval.
///
/// The task loops forever, sleeping for the interval between passes. Each
/// pass takes the write lock on the entry table and removes every entry
/// older than the interval, so a sweep never observes a half-written
/// entry and callers never observe a half-finished sweep.
///
/// # Arguments
/// * `store` - shared entry table, also held by the cache handle
/// * `interval` - time between sweep passes; equals the entry time-to-live
///
/// # Returns
/// A JoinHandle for the spawned task. The cache handle aborts it when the
/// last clone is dropped.
pub fn spawn_sweep_task(store: Arc<RwLock<CacheStore>>, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        debug!(
            interval_ms = interval.as_millis() as u64,
            "starting cache sweep task"
        );

        loop {
            // Sleep for the configured interval
            tokio::time::sleep(interval).await;

            // Acquire write lock and drop stale entries
            let removed = {
                let mut store = store.write().await;
                store.remove_stale()
            };

            if removed > 0 {
                debug!(removed, "cache sweep removed stale entries");
            } else {
                trace!("cache sweep found no stale entries");
            }
        }
    })
}
