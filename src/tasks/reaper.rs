//! Reaper Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::cache::CacheStore;

/// Spawns the background task that sweeps expired entries out of the store.
///
/// The task loops forever: sleep for `reap_interval`, then take the write
/// lock and remove every entry older than the store's TTL. Each sweep runs
/// in its own spawned task so that a panic inside one sweep is contained to
/// that sweep; the loop logs it and keeps going rather than silently
/// disabling expiration for the rest of the process.
///
/// # Arguments
/// * `store` - Shared reference to the cache store
/// * `reap_interval` - Time between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task. Aborting it is the only way the loop
/// ends; the cache handle does so on shutdown.
pub fn spawn_reaper_task(
    store: Arc<RwLock<CacheStore>>,
    reap_interval: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("Starting cache reaper with interval of {:?}", reap_interval);

        loop {
            // Waiting: blocked until the next tick
            tokio::time::sleep(reap_interval).await;

            // Sweeping: one pass over the map under the write lock
            let sweep_store = Arc::clone(&store);
            let sweep = tokio::spawn(async move {
                let mut guard = sweep_store.write().await;
                guard.remove_expired()
            });

            match sweep.await {
                Ok(removed) if removed > 0 => {
                    info!("Reaper: removed {} expired entries", removed);
                }
                Ok(_) => {
                    debug!("Reaper: no expired entries found");
                }
                Err(err) => {
                    warn!("Reaper: sweep failed, continuing: {}", err);
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reaper_removes_expired_entries() {
        let store = Arc::new(RwLock::new(CacheStore::new(Duration::from_millis(50))));

        {
            let mut guard = store.write().await;
            guard.insert("expire_soon".to_string(), b"value".to_vec());
        }

        let handle = spawn_reaper_task(Arc::clone(&store), Duration::from_millis(50));

        // Wait for the entry to expire and at least one sweep to run
        tokio::time::sleep(Duration::from_millis(160)).await;

        {
            let guard = store.read().await;
            assert!(
                guard.lookup("expire_soon").is_none(),
                "Expired entry should have been reaped"
            );
        }

        handle.abort();
    }

    #[tokio::test]
    async fn test_reaper_preserves_valid_entries() {
        let store = Arc::new(RwLock::new(CacheStore::new(Duration::from_secs(3600))));

        {
            let mut guard = store.write().await;
            guard.insert("long_lived".to_string(), b"value".to_vec());
        }

        let handle = spawn_reaper_task(Arc::clone(&store), Duration::from_millis(30));

        tokio::time::sleep(Duration::from_millis(100)).await;

        {
            let guard = store.read().await;
            let entry = guard.lookup("long_lived");
            assert!(entry.is_some(), "Valid entry should not be removed");
            assert_eq!(entry.unwrap().value(), b"value");
        }

        handle.abort();
    }

    #[tokio::test]
    async fn test_reaper_sweeps_repeatedly() {
        let store = Arc::new(RwLock::new(CacheStore::new(Duration::from_millis(40))));

        let handle = spawn_reaper_task(Arc::clone(&store), Duration::from_millis(40));

        // First generation expires across the first sweeps
        {
            let mut guard = store.write().await;
            guard.insert("first".to_string(), b"a".to_vec());
        }
        tokio::time::sleep(Duration::from_millis(120)).await;
        assert!(store.read().await.lookup("first").is_none());

        // A second generation added later is swept by later ticks, so the
        // loop is still alive after earlier sweeps
        {
            let mut guard = store.write().await;
            guard.insert("second".to_string(), b"b".to_vec());
        }
        tokio::time::sleep(Duration::from_millis(120)).await;
        assert!(store.read().await.lookup("second").is_none());

        handle.abort();
    }

    #[tokio::test]
    async fn test_reaper_can_be_aborted() {
        let store = Arc::new(RwLock::new(CacheStore::new(Duration::from_secs(300))));

        let handle = spawn_reaper_task(store, Duration::from_millis(10));

        handle.abort();

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
