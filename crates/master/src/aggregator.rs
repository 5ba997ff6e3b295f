// SPDX-License-Identifier: MIT

//! The aggregator (§4.F): consumes vote reports from the watcher fleet and
//! maintains the authoritative healthy-endpoint list for each service.
//!
//! Single-threaded by construction — everything flows through one mpsc
//! receiver — so the read-modify-write on `/root/services/<svc>` never
//! races with itself (§5).

use crate::fleet::VoteReport;
use crate::MasterError;
use quorum_core::{paths, quorum_holds, ServiceMembership};
use quorum_store::StoreAdapter;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Drains vote reports forever, applying the quorum rule on each one.
/// Returns only when the channel closes (fleet shutdown) or a fatal store
/// error occurs.
pub async fn run_aggregator(
    store: Arc<dyn StoreAdapter>,
    root: &str,
    mut reports: mpsc::Receiver<VoteReport>,
) -> Result<(), MasterError> {
    while let Some(report) = reports.recv().await {
        if let Err(e) = apply_vote(&store, root, &report).await {
            if e.is_fatal() {
                tracing::error!(error = %e, "aggregator: fatal store error, stopping");
                return Err(MasterError::Aggregator {
                    service: report.service.to_string(),
                    endpoint: report.endpoint.to_string(),
                    source: e,
                });
            }
            tracing::warn!(service = %report.service, endpoint = %report.endpoint, error = %e, "aggregator: non-fatal error, continuing");
        }
    }
    Ok(())
}

async fn apply_vote(
    store: &Arc<dyn StoreAdapter>,
    root: &str,
    report: &VoteReport,
) -> Result<(), quorum_store::StoreError> {
    let endpoint_path = paths::endpoint(root, &report.service, &report.endpoint);
    let agent_names = match store.children(&endpoint_path).await {
        Ok(v) => v,
        Err(e) if e.is_no_node() => return Ok(()),
        Err(e) => return Err(e),
    };
    let count = agent_names.len();
    if count == 0 {
        // An absent vote set means "unvoted," not "unhealthy" (§4.F edge case).
        return Ok(());
    }

    let mut healthy = 0;
    for agent_name in &agent_names {
        let vote_path = format!("{endpoint_path}/{agent_name}");
        match store.get(&vote_path).await {
            Ok(data) if data == b"true" => healthy += 1,
            Ok(_) => {}
            Err(e) if e.is_no_node() => {}
            Err(e) => return Err(e),
        }
    }

    let service_path = paths::service(root, &report.service);
    let current = store.get(&service_path).await?;
    let current = String::from_utf8_lossy(&current);
    let mut membership = ServiceMembership::parse(&current);

    let should_be_present = quorum_holds(healthy, count);
    let ep = report.endpoint.to_string();
    let changed = if should_be_present { membership.insert(&ep) } else { membership.remove(&ep) };

    if changed {
        store.set(&service_path, membership.to_string().as_bytes()).await?;
    }

    Ok(())
}

#[cfg(test)]
#[path = "aggregator_tests.rs"]
mod tests;
