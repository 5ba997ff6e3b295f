// SPDX-License-Identifier: MIT

use crate::prelude::*;
use std::sync::Arc;
use std::time::Duration;

const TOPOLOGY: &str = r#"
services:
  - name: svc1
    nodes:
      - ip: ep1
        port: "80"
"#;

/// Two agents vote the endpoint healthy; one of them crashes (its
/// session ends, purging its ephemeral vote node and agent marker). The
/// remaining agent's vote alone must still hold quorum once the
/// aggregator re-counts, and P2 continues to hold (§4.D, §8 scenario 6).
#[tokio::test]
async fn agent_crash_drops_out_of_the_vote_count_without_losing_quorum() {
    let cluster = bootstrapped_cluster(TOPOLOGY).await;
    let clock: Arc<dyn Clock> = Arc::new(FakeClock::new());

    spawn_master(&cluster, clock.clone(), "master1");
    let a1 = spawn_agent(&cluster, clock.clone(), "a1", vec![true, true]).await;
    spawn_agent(&cluster, clock.clone(), "a2", vec![true, true]).await;

    let check_store = cluster.session();
    wait_until(
        || {
            let store = check_store.clone();
            Box::pin(async move { store.get("/root/services/svc1").await.ok() == Some(b"ep1".to_vec()) })
        },
        Duration::from_secs(2),
    )
    .await;

    // simulate a1 crashing: its session ends, purging its ephemeral nodes
    a1.close();

    wait_until(
        || {
            let check_store = check_store.clone();
            Box::pin(async move { check_store.exists("/root/agents/a1").await.ok() == Some(false) })
        },
        Duration::from_secs(2),
    )
    .await;

    // force a fresh aggregation pass so the endpoint-children count
    // reflects a1's departure
    let a2_vote_path = "/root/services/svc1/ep1/a2";
    check_store.set(a2_vote_path, b"true").await.unwrap();

    wait_until(
        || {
            let store = check_store.clone();
            Box::pin(async move { store.get("/root/services/svc1").await.ok() == Some(b"ep1".to_vec()) })
        },
        Duration::from_secs(2),
    )
    .await;

    let remaining_voters = check_store.children("/root/services/svc1/ep1").await.unwrap();
    assert_eq!(remaining_voters, vec!["a2".to_string()]);
}
