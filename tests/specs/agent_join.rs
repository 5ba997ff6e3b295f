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

/// A master running with one agent observes a second agent joining later
/// and starts counting its votes too — proof that the membership tracker
/// spawned a watcher for the newcomer without being restarted (§4.E
/// scenario 5).
#[tokio::test]
async fn agent_join_after_master_start_is_picked_up_by_the_tracker() {
    let cluster = bootstrapped_cluster(TOPOLOGY).await;
    let clock: Arc<dyn Clock> = Arc::new(FakeClock::new());

    spawn_master(&cluster, clock.clone(), "master1");
    spawn_agent(&cluster, clock.clone(), "a1", vec![true, true]).await;

    let check_store = cluster.session();
    wait_until(
        || {
            let store = check_store.clone();
            Box::pin(async move { store.get("/root/services/svc1").await.ok() == Some(b"ep1".to_vec()) })
        },
        Duration::from_secs(2),
    )
    .await;

    // a2 joins after the master has already settled on a1's vote alone.
    spawn_agent(&cluster, clock, "a2", vec![false, false, false]).await;

    // Once a2's "false" vote is counted, 1/2 agents voting true is no
    // longer a majority, so ep1 must drop out of membership.
    wait_until(
        || {
            let store = check_store.clone();
            Box::pin(async move { store.get("/root/services/svc1").await.ok() == Some(Vec::new()) })
        },
        Duration::from_secs(2),
    )
    .await;
}
