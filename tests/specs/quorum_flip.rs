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

/// Three agents: two vote true, one false. Quorum holds (2/3 > 0.5). One
/// of the true-voters then flips down through hysteresis, dropping the
/// endpoint once the majority is lost (1/3 < 0.5) — §4.F scenario 4.
#[tokio::test]
async fn quorum_flip_down_when_the_majority_turns_false() {
    let cluster = bootstrapped_cluster(TOPOLOGY).await;
    let clock: Arc<dyn Clock> = Arc::new(FakeClock::new());

    spawn_master(&cluster, clock.clone(), "master1");
    spawn_agent(&cluster, clock.clone(), "a1", vec![true, true]).await;
    spawn_agent(&cluster, clock.clone(), "a2", vec![true, true, false, false, false]).await;
    spawn_agent(&cluster, clock, "a3", vec![false, false, false]).await;

    let check_store = cluster.session();
    wait_until(
        || {
            let store = check_store.clone();
            Box::pin(async move { store.get("/root/services/svc1").await.ok() == Some(b"ep1".to_vec()) })
        },
        Duration::from_secs(3),
    )
    .await;

    wait_until(
        || {
            let store = check_store.clone();
            Box::pin(async move { store.get("/root/services/svc1").await.ok() == Some(Vec::new()) })
        },
        Duration::from_secs(3),
    )
    .await;
}
