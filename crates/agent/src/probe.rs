// SPDX-License-Identifier: MIT

//! The per-(service, endpoint) probe loop (§4.C).

use crate::dialer::Dialer;
use crate::error::AgentError;
use quorum_core::{paths, AgentName, Clock, EndpointId, ProbeState, ServiceName};
use quorum_store::StoreAdapter;
use std::sync::Arc;
use std::time::Duration;

const PROBE_INTERVAL: Duration = Duration::from_secs(2);

/// The dependencies a probe loop needs, bundled so spawning one is a
/// single cheap clone rather than five separate arguments.
#[derive(Clone)]
pub struct ProbeDeps {
    pub store: Arc<dyn StoreAdapter>,
    pub dialer: Arc<dyn Dialer>,
    pub clock: Arc<dyn Clock>,
}

/// Runs the hysteresis probe loop for `(svc, ep)` forever, publishing
/// transitions to the agent's ephemeral vote node. Returns only on a
/// fatal store error — matching the original source, where every store
/// call in this loop is `must()`-wrapped.
pub async fn run_probe_loop(
    deps: ProbeDeps,
    root: &str,
    svc: ServiceName,
    ep: EndpointId,
    agent: AgentName,
) -> AgentError {
    let vote_path = paths::vote(root, &svc, &ep, &agent);
    let endpoint_path = paths::endpoint(root, &svc, &ep);
    let mut state = ProbeState::new();

    let fatal = |source| AgentError::Probe { service: svc.to_string(), endpoint: ep.to_string(), source };

    loop {
        let port = match deps.store.get(&endpoint_path).await {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(e) => return fatal(e),
        };

        let healthy = deps.dialer.probe(ep.as_str(), &port).await;
        tracing::debug!(%svc, %ep, %port, healthy, "probe cycle");

        let transition = if healthy { state.record_success() } else { state.record_failure() };

        if let Some(vote) = transition {
            tracing::info!(%svc, %ep, vote = ?vote, "publishing vote");
            if let Err(e) = deps.store.set(&vote_path, vote.as_bytes()).await {
                return fatal(e);
            }
        }

        deps.clock.sleep(PROBE_INTERVAL).await;
    }
}

#[cfg(test)]
#[path = "probe_tests.rs"]
mod tests;
