// SPDX-License-Identifier: MIT

//! The membership tracker (§4.E): watches the live agent population and,
//! on growth, spawns watchers for the newly joined agents across every
//! configured (service, endpoint).
//!
//! Split into two halves per the teacher's watch-loop convention: a task
//! that re-arms `children_watch` forever and forwards snapshots over a
//! channel, and a handler that diffs consecutive snapshots and reacts.
//! Departures are deliberately not acted on here — a departed agent's
//! watcher self-terminates via `no such node` (§4.D).

use crate::fleet::WatcherFleet;
use quorum_core::{paths, EndpointId, ServiceName};
use quorum_store::{StoreAdapter, StoreError};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Watches `/root/agents`, forwarding each children snapshot until the
/// store errors (fatal: session loss or similar) or the receiver drops.
pub async fn run_watch_loop(
    store: Arc<dyn StoreAdapter>,
    root: &str,
    snapshot_tx: mpsc::Sender<Vec<String>>,
) -> Result<(), StoreError> {
    let agents_path = paths::agents_root(root);
    loop {
        let (children, watch) = match store.children_watch(&agents_path).await {
            Ok(v) => v,
            Err(e) => {
                tracing::error!(error = %e, "membership tracker: children_watch failed");
                return Err(e);
            }
        };

        if snapshot_tx.send(children).await.is_err() {
            return Ok(());
        }

        if let Err(e) = watch.await {
            tracing::error!(error = %e, "membership tracker: watch event errored");
            return Err(e);
        }
    }
}

/// Consumes agent-population snapshots and spawns watchers for agents
/// that newly joined since the previous snapshot.
pub async fn run_snapshot_handler(
    mut snapshot_rx: mpsc::Receiver<Vec<String>>,
    fleet: WatcherFleet,
    store: Arc<dyn StoreAdapter>,
    root: String,
) {
    let mut old: HashSet<String> = HashSet::new();

    while let Some(snapshot) = snapshot_rx.recv().await {
        let new: HashSet<String> = snapshot.into_iter().collect();

        if new.is_empty() {
            tracing::info!("membership tracker: no live agents");
        } else if new != old {
            tracing::info!(count = new.len(), "membership tracker: agent population changed");
        }

        if new.len() > old.len() {
            let joined: Vec<&String> = new.difference(&old).collect();
            for agent_name in joined {
                spawn_watchers_for_agent(&fleet, &store, &root, agent_name).await;
            }
        }

        old = new;
    }
}

async fn spawn_watchers_for_agent(fleet: &WatcherFleet, store: &Arc<dyn StoreAdapter>, root: &str, agent_name: &str) {
    let agent = match quorum_core::AgentName::try_from(agent_name) {
        Ok(a) => a,
        Err(e) => {
            tracing::warn!(agent = agent_name, error = %e, "skipping malformed agent name");
            return;
        }
    };

    let services_path = paths::services_root(root);
    let service_names = match store.children(&services_path).await {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(error = %e, "membership tracker: could not list services");
            return;
        }
    };

    for svc_name in service_names {
        let svc = match ServiceName::try_from(svc_name.as_str()) {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!(service = svc_name, error = %e, "skipping malformed service name");
                continue;
            }
        };
        let service_path = paths::service(root, &svc);
        let endpoint_names = match store.children(&service_path).await {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(%svc, error = %e, "membership tracker: could not list endpoints");
                continue;
            }
        };
        for ep_name in endpoint_names {
            let ep = match EndpointId::try_from(ep_name.as_str()) {
                Ok(e) => e,
                Err(e) => {
                    tracing::warn!(%svc, endpoint = ep_name, error = %e, "skipping malformed endpoint name");
                    continue;
                }
            };
            fleet.spawn(root, svc.clone(), ep, agent.clone());
        }
    }
}

#[cfg(test)]
#[path = "tracker_tests.rs"]
mod tests;
