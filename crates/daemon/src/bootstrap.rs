// SPDX-License-Identifier: MIT

//! The bootstrap loader (§4.B): a one-shot utility that publishes a
//! static service/endpoint topology into the coordination store.

use quorum_core::paths;
use quorum_store::{NodeMode, StoreAdapter, StoreError};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Topology {
    pub services: Vec<ServiceSpec>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ServiceSpec {
    pub name: String,
    pub nodes: Vec<NodeSpec>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct NodeSpec {
    pub ip: String,
    pub port: String,
}

/// Parse the bootstrap YAML document (§6).
pub fn parse_topology(raw: &str) -> Result<Topology, serde_yaml::Error> {
    serde_yaml::from_str(raw)
}

/// Publish `topology` into the store, rooted at `root`. Idempotent under
/// re-run: "already exists" on the service node is not an error.
pub async fn run_bootstrap(store: Arc<dyn StoreAdapter>, root: &str, topology: &Topology) -> Result<(), StoreError> {
    store.create_if_missing(root, NodeMode::Persistent).await?;
    store.create_if_missing(&paths::services_root(root), NodeMode::Persistent).await?;
    store.create_if_missing(&paths::agents_root(root), NodeMode::Persistent).await?;

    for service in &topology.services {
        let svc_path = format!("{}/{}", paths::services_root(root), service.name);
        store.create_if_missing(&svc_path, NodeMode::Persistent).await?;

        for node in &service.nodes {
            let node_path = format!("{svc_path}/{}", node.ip);
            match store.create(&node_path, node.port.as_bytes(), NodeMode::Persistent).await {
                Ok(()) => {}
                Err(e) if matches!(e, StoreError::NodeExists(_)) => {
                    tracing::debug!(path = %node_path, "bootstrap: node already exists, ignoring");
                }
                Err(e) => return Err(e),
            }
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "bootstrap_tests.rs"]
mod tests;
