// SPDX-License-Identifier: MIT

//! The master's watcher fleet (§4.D): one task per (service, endpoint,
//! agent) forwarding vote reports to the aggregator, alive for exactly as
//! long as the agent's vote znode is.

use crate::registry::{WatcherKey, WatcherRegistry};
use crate::MasterError;
use quorum_core::{paths, AgentName, Clock, EndpointId, ServiceName};
use quorum_store::StoreAdapter;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

const REARM_DELAY: Duration = Duration::from_millis(200);

/// A reported vote, forwarded from a watcher to the aggregator.
#[derive(Debug, Clone)]
pub struct VoteReport {
    pub service: ServiceName,
    pub endpoint: EndpointId,
    pub agent: AgentName,
    pub data: Vec<u8>,
}

/// Shared handle for spawning and deduplicating watchers.
#[derive(Clone)]
pub struct WatcherFleet {
    store: Arc<dyn StoreAdapter>,
    clock: Arc<dyn Clock>,
    registry: WatcherRegistry,
    report_tx: mpsc::Sender<VoteReport>,
    fatal_tx: mpsc::Sender<MasterError>,
}

impl WatcherFleet {
    pub fn new(
        store: Arc<dyn StoreAdapter>,
        clock: Arc<dyn Clock>,
        report_tx: mpsc::Sender<VoteReport>,
        fatal_tx: mpsc::Sender<MasterError>,
    ) -> Self {
        Self { store, clock, registry: WatcherRegistry::new(), report_tx, fatal_tx }
    }

    pub fn registry(&self) -> &WatcherRegistry {
        &self.registry
    }

    /// Spawn a watcher for `(svc, ep, agent)` unless one is already live
    /// (P5's uniqueness invariant, enforced here).
    pub fn spawn(&self, root: &str, svc: ServiceName, ep: EndpointId, agent: AgentName) {
        let key = WatcherKey { service: svc.to_string(), endpoint: ep.to_string(), agent: agent.to_string() };
        if !self.registry.try_register(key.clone()) {
            return;
        }

        let store = self.store.clone();
        let clock = self.clock.clone();
        let registry = self.registry.clone();
        let report_tx = self.report_tx.clone();
        let fatal_tx = self.fatal_tx.clone();
        let root = root.to_string();

        tokio::spawn(async move {
            tracing::info!(%svc, %ep, %agent, "creating watcher");
            run_watcher(store, clock, &root, &svc, &ep, &agent, report_tx, fatal_tx).await;
            tracing::info!(%svc, %ep, %agent, "removing watcher");
            registry.unregister(&key);
        });
    }
}

/// The watcher loop body (§4.D): watch the vote znode, forward non-empty
/// data to the aggregator, terminate on "no such node". Any other store
/// error (session loss or similar) is fatal to the whole master and is
/// reported on `fatal_tx` rather than swallowed here (§5, §7).
async fn run_watcher(
    store: Arc<dyn StoreAdapter>,
    clock: Arc<dyn Clock>,
    root: &str,
    svc: &ServiceName,
    ep: &EndpointId,
    agent: &AgentName,
    report_tx: mpsc::Sender<VoteReport>,
    fatal_tx: mpsc::Sender<MasterError>,
) {
    let vote_path = paths::vote(root, svc, ep, agent);
    let fatal = |source| MasterError::Watcher {
        service: svc.to_string(),
        endpoint: ep.to_string(),
        agent: agent.to_string(),
        source,
    };

    loop {
        let (data, watch) = match store.get_watch(&vote_path).await {
            Ok(v) => v,
            Err(e) if e.is_no_node() => {
                tracing::info!(%svc, %ep, %agent, "agent disappeared");
                return;
            }
            Err(e) => {
                tracing::error!(%svc, %ep, %agent, error = %e, "watcher setup failed, fatal");
                let _ = fatal_tx.send(fatal(e)).await;
                return;
            }
        };

        if !data.is_empty() {
            let report = VoteReport { service: svc.clone(), endpoint: ep.clone(), agent: agent.clone(), data };
            if report_tx.send(report).await.is_err() {
                return;
            }
        }

        if let Err(e) = watch.await {
            tracing::error!(%svc, %ep, %agent, error = %e, "watch event errored, fatal");
            let _ = fatal_tx.send(fatal(e)).await;
            return;
        }

        clock.sleep(REARM_DELAY).await;
    }
}

#[cfg(test)]
#[path = "fleet_tests.rs"]
mod tests;
