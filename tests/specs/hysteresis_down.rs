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

/// Starting from a healthy vote, three consecutive failures flip the
/// endpoint back out of the service's membership (§4.C, P4).
#[tokio::test]
async fn hysteresis_down_after_three_consecutive_failures() {
    let cluster = bootstrapped_cluster(TOPOLOGY).await;
    let clock: Arc<dyn Clock> = Arc::new(FakeClock::new());

    spawn_master(&cluster, clock.clone(), "master1");
    spawn_agent(&cluster, clock, "a1", vec![true, true, false, false, false]).await;

    let check_store = cluster.session();
    wait_until(
        || {
            let store = check_store.clone();
            Box::pin(async move { store.get("/root/services/svc1").await.ok() == Some(b"ep1".to_vec()) })
        },
        Duration::from_secs(2),
    )
    .await;

    wait_until(
        || {
            let store = check_store.clone();
            Box::pin(async move { store.get("/root/services/svc1").await.ok() == Some(Vec::new()) })
        },
        Duration::from_secs(2),
    )
    .await;
}
