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

/// One success, one failure, then two successes: the single failure in
/// the middle must not prevent the eventual flip to healthy (§4.C, P4).
#[tokio::test]
async fn hysteresis_up_survives_an_interleaved_failure() {
    let cluster = bootstrapped_cluster(TOPOLOGY).await;
    let clock: Arc<dyn Clock> = Arc::new(FakeClock::new());

    spawn_master(&cluster, clock.clone(), "master1");
    spawn_agent(&cluster, clock, "a1", vec![true, false, true, true]).await;

    let check_store = cluster.session();
    wait_until(
        || {
            let store = check_store.clone();
            Box::pin(async move { store.get("/root/services/svc1").await.ok() == Some(b"ep1".to_vec()) })
        },
        Duration::from_secs(2),
    )
    .await;
}
