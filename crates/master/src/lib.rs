// SPDX-License-Identifier: MIT

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! quorum-master: the watcher fleet (§4.D), membership tracker (§4.E),
//! and aggregator (§4.F) that together form the master role.
//!
//! Orchestrated by [`run_master`], which claims `/root/state` and wires
//! the three components together over in-process channels.

mod aggregator;
mod error;
mod fleet;
mod registry;
mod tracker;

pub use aggregator::run_aggregator;
pub use error::MasterError;
pub use fleet::{VoteReport, WatcherFleet};
pub use registry::{WatcherKey, WatcherRegistry};
pub use tracker::{run_snapshot_handler, run_watch_loop};

use quorum_core::{AgentName, Clock};
use quorum_store::{NodeMode, StoreAdapter};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::mpsc;

const SNAPSHOT_CHANNEL_CAPACITY: usize = 64;
const REPORT_CHANNEL_CAPACITY: usize = 1024;
const FATAL_CHANNEL_CAPACITY: usize = 16;

#[derive(Serialize)]
struct StateMarker<'a> {
    master: &'a str,
}

/// Claim the master role and run forever: write `/root/state`, then drive
/// the membership tracker, watcher fleet, and aggregator until one of them
/// hits a fatal store error (§4.G, §5).
pub async fn run_master(
    store: Arc<dyn StoreAdapter>,
    clock: Arc<dyn Clock>,
    root: &str,
    self_name: &AgentName,
) -> Result<(), MasterError> {
    let state_path = quorum_core::paths::state(root);
    let state_json = serde_json::to_string(&StateMarker { master: self_name.as_str() })
        .unwrap_or_else(|_| format!(r#"{{"master":"{self_name}"}}"#));
    store.create(&state_path, state_json.as_bytes(), NodeMode::Ephemeral).await?;
    tracing::info!(%self_name, "claimed master role");

    let (report_tx, report_rx) = mpsc::channel(REPORT_CHANNEL_CAPACITY);
    let (fatal_tx, mut fatal_rx) = mpsc::channel(FATAL_CHANNEL_CAPACITY);
    let fleet = WatcherFleet::new(store.clone(), clock, report_tx, fatal_tx);

    let (snapshot_tx, snapshot_rx) = mpsc::channel(SNAPSHOT_CHANNEL_CAPACITY);

    let watch_loop = tokio::spawn({
        let store = store.clone();
        let root = root.to_string();
        async move { run_watch_loop(store, &root, snapshot_tx).await }
    });
    let snapshot_handler = tokio::spawn({
        let store = store.clone();
        let root = root.to_string();
        let fleet = fleet.clone();
        async move { run_snapshot_handler(snapshot_rx, fleet, store, root).await }
    });
    let aggregator = tokio::spawn({
        let store = store.clone();
        let root = root.to_string();
        async move { run_aggregator(store, &root, report_rx).await }
    });

    // Any of the three supervised tasks returning, or a watcher reporting
    // a fatal store error over `fatal_rx`, means the master has nothing
    // left to reliably supervise and gives up, letting a fresh process
    // take over via `/root/state`.
    let err = tokio::select! {
        res = watch_loop => match res {
            Ok(Ok(())) => MasterError::Supervisor("membership tracker watch loop"),
            Ok(Err(e)) => MasterError::Tracker(e),
            Err(_) => MasterError::Supervisor("membership tracker watch loop panicked"),
        },
        res = snapshot_handler => match res {
            Ok(()) => MasterError::Supervisor("membership tracker snapshot handler"),
            Err(_) => MasterError::Supervisor("membership tracker snapshot handler panicked"),
        },
        res = aggregator => match res {
            Ok(Ok(())) => MasterError::Supervisor("aggregator"),
            Ok(Err(e)) => e,
            Err(_) => MasterError::Supervisor("aggregator panicked"),
        },
        fatal = fatal_rx.recv() => fatal.unwrap_or(MasterError::Supervisor("watcher fatal channel closed")),
    };

    Err(err)
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
