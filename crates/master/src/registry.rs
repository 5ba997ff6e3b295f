// SPDX-License-Identifier: MIT

//! Tracks which (service, endpoint, agent) watchers are currently live.
//!
//! This is in-process bookkeeping only — nothing here is persisted to the
//! store. It exists to enforce and to let tests assert the uniqueness
//! invariant (P5): at most one live watcher per (svc, ep, agent).

use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WatcherKey {
    pub service: String,
    pub endpoint: String,
    pub agent: String,
}

/// Shared registry of currently-live watcher keys.
#[derive(Clone, Default)]
pub struct WatcherRegistry {
    live: Arc<Mutex<HashSet<WatcherKey>>>,
}

impl WatcherRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempt to register `key` as live. Returns `false` (and registers
    /// nothing) if a watcher for this key is already live — the caller
    /// must not spawn a second one (P5).
    pub fn try_register(&self, key: WatcherKey) -> bool {
        self.live.lock().insert(key)
    }

    /// Mark `key` as no longer live, freeing it up to be spawned again
    /// later (e.g. once a re-joined agent creates a new vote node).
    pub fn unregister(&self, key: &WatcherKey) {
        self.live.lock().remove(key);
    }

    pub fn live_count(&self) -> usize {
        self.live.lock().len()
    }

    pub fn is_live(&self, key: &WatcherKey) -> bool {
        self.live.lock().contains(key)
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
