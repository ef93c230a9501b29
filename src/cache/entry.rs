//! Cache Entry Module
//!
//! Defines the structure for individual cache entries.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A single cache entry: an opaque byte payload plus its creation instant.
///
/// Entries are owned exclusively by the store's map and are never mutated in
/// place. Re-adding a key replaces the whole entry, which is what resets its
/// age to zero.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// When the entry was created
    created_at: Instant,
    /// The stored payload
    value: Vec<u8>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry holding `value`, aged zero.
    pub fn new(value: Vec<u8>) -> Self {
        Self {
            created_at: Instant::now(),
            value,
        }
    }

    // == Age ==
    /// Time elapsed since the entry was created.
    ///
    /// A lookup never refreshes this: reads are not a touch, so an entry's
    /// age only ever grows until the reaper removes it.
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    // == Is Expired ==
    /// Checks whether the entry has outlived `ttl`.
    ///
    /// Boundary condition: an entry is expired only when its age strictly
    /// exceeds the TTL, so an entry observed at exactly `ttl` is still live.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.age() > ttl
    }

    // == Value ==
    /// The stored payload.
    pub fn value(&self) -> &[u8] {
        &self.value
    }
}
