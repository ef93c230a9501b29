//! Cache Module
//!
//! In-memory key/value caching with a fixed time-to-live and a background
//! reaper that evicts stale entries.

mod entry;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use store::CacheStore;

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use crate::tasks::spawn_reaper_task;

// == Reaper Guard ==
/// Owns the reaper task handle and aborts it when the last cache handle is
/// dropped, so short-lived caches (tests in particular) do not leak tasks.
#[derive(Debug)]
struct ReaperGuard {
    handle: JoinHandle<()>,
}

impl Drop for ReaperGuard {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

// == Cache ==
/// Shared handle to an expiring cache.
///
/// The handle owns the store behind a single lock plus the reaper task that
/// sweeps it. Cloning is cheap and every clone addresses the same store.
/// There is exactly one reaper per cache, started at construction; it runs
/// until [`shutdown`](Cache::shutdown) or until the last handle is dropped.
#[derive(Debug, Clone)]
pub struct Cache {
    /// The store, guarded by the cache's one lock
    store: Arc<RwLock<CacheStore>>,
    /// Keeps the background reaper alive for the cache's lifetime
    reaper: Arc<ReaperGuard>,
}

impl Cache {
    // == Constructor ==
    /// Creates a cache whose entries expire after `ttl`, sweeping once per
    /// `ttl` as well.
    ///
    /// Must be called from within a tokio runtime, since construction spawns
    /// the reaper task. Construction cannot fail.
    pub fn new(ttl: Duration) -> Self {
        Self::with_reap_interval(ttl, ttl)
    }

    /// Creates a cache with an explicit sweep period.
    ///
    /// Entries may transiently outlive `ttl` by up to one `reap_interval`
    /// between sweeps; after a sweep no entry is older than `ttl`.
    pub fn with_reap_interval(ttl: Duration, reap_interval: Duration) -> Self {
        let store = Arc::new(RwLock::new(CacheStore::new(ttl)));
        let handle = spawn_reaper_task(Arc::clone(&store), reap_interval);

        Self {
            store,
            reaper: Arc::new(ReaperGuard { handle }),
        }
    }

    // == Add ==
    /// Inserts or replaces the value for `key`.
    ///
    /// Replacing resets the entry's age to zero. Visible to every other
    /// handle as soon as the write lock is released.
    pub async fn add(&self, key: impl Into<String>, value: Vec<u8>) {
        self.store.write().await.insert(key.into(), value);
    }

    // == Get ==
    /// Looks up `key`, returning a copy of the stored bytes.
    ///
    /// `None` is a routine cache miss; callers are expected to fetch from the
    /// source of truth and [`add`](Cache::add) the result. A hit does not
    /// refresh the entry's age.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.store
            .read()
            .await
            .lookup(key)
            .map(|entry| entry.value().to_vec())
    }

    // == Length ==
    /// Current number of cached entries.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    /// Returns true if the cache holds no entries.
    #[allow(dead_code)]
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }

    // == Shutdown ==
    /// Stops the background reaper.
    ///
    /// Cached entries stay readable afterwards; they just stop expiring.
    pub fn shutdown(&self) {
        self.reaper.handle.abort();
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_cache_add_and_get() {
        let cache = Cache::new(Duration::from_secs(5));

        cache.add("hello", b"test-data".to_vec()).await;

        assert_eq!(cache.get("hello").await, Some(b"test-data".to_vec()));
        assert_eq!(cache.get("non-existent").await, None);
    }

    #[tokio::test]
    async fn test_cache_clones_share_store() {
        let cache = Cache::new(Duration::from_secs(5));
        let other = cache.clone();

        cache.add("shared", vec![1, 2, 3]).await;

        assert_eq!(other.get("shared").await, Some(vec![1, 2, 3]));
        assert_eq!(other.len().await, 1);
    }

    #[tokio::test]
    async fn test_cache_shutdown_keeps_entries() {
        let cache = Cache::new(Duration::from_secs(5));

        cache.add("kept", vec![42]).await;
        cache.shutdown();

        assert_eq!(cache.get("kept").await, Some(vec![42]));
    }
}
