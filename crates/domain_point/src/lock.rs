//! Per-user lock registry
//!
//! Hands out one mutex per user key. Mutations on the same user serialize on
//! that mutex; mutations on different users never touch each other's locks.
//!
//! The registry's own map is a sharded `DashMap`, so get-or-create is atomic:
//! concurrent first requests for an unseen key all receive the same mutex.
//! Locks are never evicted; memory grows with the number of distinct keys.

use dashmap::DashMap;
use parking_lot::Mutex;
use std::sync::Arc;

use core_kernel::UserId;

/// Lazily created per-key mutual exclusion
#[derive(Debug, Default)]
pub struct LockRegistry {
    locks: DashMap<UserId, Arc<Mutex<()>>>,
}

impl LockRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the lock for `key`, creating it on first use
    pub fn lock_for(&self, key: UserId) -> Arc<Mutex<()>> {
        // The shard guard returned by `entry` is dropped at the end of this
        // statement, before any caller blocks on the returned mutex.
        Arc::clone(&self.locks.entry(key).or_insert_with(|| Arc::new(Mutex::new(()))))
    }

    /// Number of keys that have a lock
    pub fn len(&self) -> usize {
        self.locks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}
