// SPDX-License-Identifier: MIT

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! quorum-store: the store adapter contract (§4.A) and its two
//! implementations — a real ZooKeeper-backed client and an in-memory
//! fake for tests.

mod adapter;
mod error;
#[cfg(any(test, feature = "test-support"))]
mod memory;
mod zk;

pub use adapter::{NodeMode, StoreAdapter, Watch};
pub use error::StoreError;
pub use zk::ZkStore;

#[cfg(any(test, feature = "test-support"))]
pub use memory::{InMemoryCluster, InMemoryStore};
