// SPDX-License-Identifier: MIT

//! Errors surfaced by the [`crate::StoreAdapter`] contract (§7).

use thiserror::Error;

/// A store operation failed.
///
/// `NoNode` is the one variant callers are expected to branch on —
/// watcher setup treats it as "the agent left," aggregation treats it as
/// "nothing voted yet." Every other variant is fatal: the caller should
/// stop trying to make progress and let its supervisor restart the
/// process (§5, §7).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no such node: {0}")]
    NoNode(String),

    #[error("node already exists: {0}")]
    NodeExists(String),

    #[error("session to the coordination store was lost")]
    SessionLoss,

    #[error("coordination store connection failed: {0}")]
    ConnectionLoss(String),

    #[error("coordination store error: {0}")]
    Other(String),
}

impl StoreError {
    /// True for the one variant that is expected and non-fatal (§7).
    pub fn is_no_node(&self) -> bool {
        matches!(self, StoreError::NoNode(_))
    }

    /// True for variants that invalidate the whole session rather than
    /// just one call (§5 failure policy: fatal, process should restart).
    pub fn is_fatal(&self) -> bool {
        matches!(self, StoreError::SessionLoss | StoreError::ConnectionLoss(_))
    }
}
