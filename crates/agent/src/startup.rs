// SPDX-License-Identifier: MIT

//! Agent startup (§4.C): create the ephemeral agent marker, discover the
//! configured topology, create one ephemeral vote node per (service,
//! endpoint), and launch a probe loop for each.

use crate::error::AgentError;
use crate::probe::{run_probe_loop, ProbeDeps};
use quorum_core::{paths, AgentName, EndpointId, ServiceName};
use quorum_store::{NodeMode, StoreAdapter};
use tokio::task::JoinHandle;

/// Start the agent: register its presence, discover the topology, and
/// spawn one probe-loop task per (service, endpoint).
///
/// Returns the spawned tasks' join handles. Each task resolves only on a
/// fatal store error (§4.C: "the probe loop runs forever until the
/// process or session dies"); the caller is expected to treat the first
/// one that resolves as a reason to terminate the process (§5, §7).
pub async fn start_agent(
    deps: ProbeDeps,
    root: &str,
    name: AgentName,
) -> Result<Vec<JoinHandle<AgentError>>, AgentError> {
    deps.store.create_if_missing(&paths::agent(root, &name), NodeMode::Ephemeral).await?;

    let services_root = paths::services_root(root);
    let service_names = deps.store.children(&services_root).await?;

    let mut handles = Vec::new();
    for raw_svc in service_names {
        let svc = match ServiceName::new(raw_svc.clone()) {
            Ok(svc) => svc,
            Err(e) => {
                tracing::warn!(service = %raw_svc, error = %e, "skipping malformed service name");
                continue;
            }
        };
        tracing::info!(%svc, "service detected in config at the coordination store");

        let service_path = paths::service(root, &svc);
        let endpoints = deps.store.children(&service_path).await?;

        for raw_ep in endpoints {
            let ep = match EndpointId::new(raw_ep.clone()) {
                Ok(ep) => ep,
                Err(e) => {
                    tracing::warn!(endpoint = %raw_ep, error = %e, "skipping malformed endpoint name");
                    continue;
                }
            };
            tracing::info!(%svc, %ep, "endpoint detected in config at the coordination store");

            let vote_path = paths::vote(root, &svc, &ep, &name);
            deps.store.create_if_missing(&vote_path, NodeMode::Ephemeral).await?;

            let task_deps = deps.clone();
            let root = root.to_string();
            let svc = svc.clone();
            let ep = ep.clone();
            let name = name.clone();
            handles.push(tokio::spawn(async move {
                run_probe_loop(task_deps, &root, svc, ep, name).await
            }));
        }
    }

    Ok(handles)
}

#[cfg(test)]
#[path = "startup_tests.rs"]
mod tests;
