// SPDX-License-Identifier: MIT

use quorum_agent::AgentError;
use quorum_master::MasterError;
use quorum_store::StoreError;
use thiserror::Error;

/// Top-level daemon error, composed at the binary's entry point with
/// `anyhow::Result` (§7).
#[derive(Debug, Error)]
pub enum DaemonError {
    #[error("could not read topology config at {path}: {source}")]
    ConfigRead { path: String, #[source] source: std::io::Error },

    #[error("bootstrap topology file could not be parsed: {0}")]
    BootstrapParse(#[from] serde_yaml::Error),

    #[error("bootstrap loader failed: {0}")]
    Bootstrap(StoreError),

    #[error("role selector failed to initialize the root tree: {0}")]
    RoleSelector(StoreError),

    #[error(transparent)]
    Agent(#[from] AgentError),

    #[error(transparent)]
    Master(#[from] MasterError),
}
