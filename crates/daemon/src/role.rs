// SPDX-License-Identifier: MIT

//! The role selector (§4.G): initializes the root tree, then decides
//! whether this process becomes an agent or the master based on whether
//! `/root/state` already exists.

use crate::bootstrap;
use crate::error::DaemonError;
use quorum_core::{AgentName, Clock};
use quorum_store::{NodeMode, StoreAdapter};
use std::sync::Arc;

/// Initialize `/root`, `/root/services`, `/root/agents` (idempotent),
/// then dispatch to the agent or master role depending on `/root/state`.
///
/// `config_path` is re-read and republished whenever this process claims
/// the master role, so a master started against a topology file that has
/// grown since the tree was first bootstrapped still picks up the new
/// services and endpoints (§6).
pub async fn run(
    store: Arc<dyn StoreAdapter>,
    clock: Arc<dyn Clock>,
    root: &str,
    self_name: AgentName,
    config_path: &str,
) -> Result<(), DaemonError> {
    store.create_if_missing(root, NodeMode::Persistent).await.map_err(DaemonError::RoleSelector)?;
    store
        .create_if_missing(&quorum_core::paths::services_root(root), NodeMode::Persistent)
        .await
        .map_err(DaemonError::RoleSelector)?;
    store
        .create_if_missing(&quorum_core::paths::agents_root(root), NodeMode::Persistent)
        .await
        .map_err(DaemonError::RoleSelector)?;

    let state_path = quorum_core::paths::state(root);
    let state_exists = store.exists(&state_path).await.map_err(DaemonError::RoleSelector)?;

    if state_exists {
        tracing::info!(%self_name, "a master is already running, starting as agent");
        let deps = quorum_agent::ProbeDeps { store, dialer: Arc::new(quorum_agent::TcpDialer), clock };
        let handles = quorum_agent::start_agent(deps, root, self_name).await?;
        // Any probe loop returning means a fatal store error (§4.C, §5);
        // the process has nothing left to supervise.
        if !handles.is_empty() {
            let (result, _index, _rest) = futures_util::future::select_all(handles).await;
            if let Ok(agent_err) = result {
                return Err(DaemonError::Agent(agent_err));
            }
        }
    } else {
        tracing::info!(%self_name, "no master state found, claiming the master role");
        let raw = std::fs::read_to_string(config_path)
            .map_err(|source| DaemonError::ConfigRead { path: config_path.to_string(), source })?;
        let topology = bootstrap::parse_topology(&raw)?;
        bootstrap::run_bootstrap(store.clone(), root, &topology).await.map_err(DaemonError::Bootstrap)?;
        quorum_master::run_master(store, clock, root, &self_name).await?;
    }

    Ok(())
}

#[cfg(test)]
#[path = "role_tests.rs"]
mod tests;
