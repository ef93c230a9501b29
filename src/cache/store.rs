//! Cache Store Module
//!
//! The plain synchronous map behind the cache: string keys to byte entries
//! plus the fixed time-to-live. All mutation goes through `&mut self`, which
//! the public [`Cache`](crate::cache::Cache) handle only hands out while
//! holding its lock.

use std::collections::HashMap;
use std::time::Duration;

use crate::cache::CacheEntry;

// == Cache Store ==
/// Key-value storage with a single fixed TTL.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// How long an entry may live before the reaper removes it
    ttl: Duration,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store whose entries expire after `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
        }
    }

    // == Insert ==
    /// Stores a key-value pair.
    ///
    /// If the key already exists the old entry is replaced, which resets the
    /// entry's age to zero. Insertion never fails and never evicts anything.
    pub fn insert(&mut self, key: String, value: Vec<u8>) {
        self.entries.insert(key, CacheEntry::new(value));
    }

    // == Lookup ==
    /// Retrieves the entry for `key`, if present.
    ///
    /// Absence is an ordinary miss, not an error. A lookup does not consult
    /// the TTL: an entry that has outlived it but not yet been swept is still
    /// returned. Only the reaper removes entries.
    pub fn lookup(&self, key: &str) -> Option<&CacheEntry> {
        self.entries.get(key)
    }

    // == Remove Expired ==
    /// Removes every entry whose age strictly exceeds the TTL.
    ///
    /// Returns the number of entries removed. This is the only place entries
    /// leave the map.
    pub fn remove_expired(&mut self) -> usize {
        let before = self.entries.len();
        let ttl = self.ttl;
        self.entries.retain(|_, entry| !entry.is_expired(ttl));
        before - self.entries.len()
    }

    // == TTL ==
    /// The store's fixed time-to-live.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Length ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
