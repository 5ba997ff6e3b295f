// SPDX-License-Identifier: MIT

use quorum_store::StoreError;
use thiserror::Error;

/// Fatal error from agent startup or a probe loop (§7: any store error
/// other than a transient topology race is fatal to the process).
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("store error during agent startup: {0}")]
    Startup(#[from] StoreError),

    #[error("probe loop for {service}/{endpoint} failed: {source}")]
    Probe { service: String, endpoint: String, #[source] source: StoreError },
}
