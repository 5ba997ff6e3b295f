// SPDX-License-Identifier: MIT

use quorum_store::StoreError;
use thiserror::Error;

/// A fatal error from any part of the master's watcher fleet, membership
/// tracker, or aggregator (§5: any store error other than "no such node"
/// is fatal; the master process should terminate and let a fresh one
/// take over via `/root/state`).
#[derive(Debug, Error)]
pub enum MasterError {
    #[error("store error during master startup: {0}")]
    Startup(#[from] StoreError),

    #[error("membership tracker failed: {0}")]
    Tracker(StoreError),

    #[error("aggregator failed on {service}/{endpoint}: {source}")]
    Aggregator { service: String, endpoint: String, #[source] source: StoreError },

    #[error("watcher for {service}/{endpoint}/{agent} failed: {source}")]
    Watcher { service: String, endpoint: String, agent: String, #[source] source: StoreError },

    #[error("master supervisor: {0} exited")]
    Supervisor(&'static str),
}
