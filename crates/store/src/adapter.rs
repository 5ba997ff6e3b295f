// SPDX-License-Identifier: MIT

//! The store adapter contract (§4.A) — a thin, backend-agnostic facade
//! over the coordination store that every other crate in this workspace
//! depends on instead of talking to a ZooKeeper client directly.

use crate::error::StoreError;
use std::future::Future;
use std::pin::Pin;

/// Whether a created node survives the creator's session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeMode {
    /// Survives until explicitly deleted.
    Persistent,
    /// Deleted automatically when the creating session ends.
    Ephemeral,
}

/// A one-shot watch: resolves exactly once, to either a change
/// notification or an error (including session loss), matching the
/// coordination store's watch contract (§4.A).
pub type Watch = Pin<Box<dyn Future<Output = Result<(), StoreError>> + Send>>;

/// Thin contract over the coordination store.
///
/// Implementations: [`crate::memory::InMemoryStore`] for tests, and a
/// ZooKeeper-backed adapter wrapping a real session for production use.
/// The trait is object-safe so components can hold `Arc<dyn StoreAdapter>`
/// without committing to a concrete backend.
#[async_trait::async_trait]
pub trait StoreAdapter: Send + Sync {
    /// Create `path` with empty data if it doesn't already exist.
    /// Treats "already exists" as success (§4.B bootstrap idempotency).
    async fn create_if_missing(&self, path: &str, mode: NodeMode) -> Result<(), StoreError>;

    /// Create `path` with `data`, failing with [`StoreError::NodeExists`]
    /// if it's already present. Used by the bootstrap loader to write the
    /// initial port for each endpoint.
    async fn create(&self, path: &str, data: &[u8], mode: NodeMode) -> Result<(), StoreError>;

    async fn exists(&self, path: &str) -> Result<bool, StoreError>;

    async fn get(&self, path: &str) -> Result<Vec<u8>, StoreError>;

    /// Unconditional write — the source ignores the znode version on every
    /// `Set` call, and this contract does the same (§4.A).
    async fn set(&self, path: &str, data: &[u8]) -> Result<(), StoreError>;

    async fn children(&self, path: &str) -> Result<Vec<String>, StoreError>;

    async fn children_watch(&self, path: &str) -> Result<(Vec<String>, Watch), StoreError>;

    async fn get_watch(&self, path: &str) -> Result<(Vec<u8>, Watch), StoreError>;
}
