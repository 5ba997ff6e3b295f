// SPDX-License-Identifier: MIT

use super::*;
use quorum_core::FakeClock;
use quorum_store::InMemoryStore;
use std::time::Duration;

async fn bootstrapped_store() -> InMemoryStore {
    let store = InMemoryStore::standalone();
    store.create_if_missing("/root", NodeMode::Persistent).await.unwrap();
    store.create_if_missing("/root/services", NodeMode::Persistent).await.unwrap();
    store.create_if_missing("/root/agents", NodeMode::Persistent).await.unwrap();
    store.create_if_missing("/root/services/svc1", NodeMode::Persistent).await.unwrap();
    store.create_if_missing("/root/services/svc1/ep1", NodeMode::Persistent).await.unwrap();
    store
}

#[tokio::test]
async fn run_master_writes_state_and_reacts_to_an_incoming_vote() {
    let store = bootstrapped_store().await;
    let self_name = AgentName::try_from("master1").unwrap();
    let store_dyn: Arc<dyn StoreAdapter> = Arc::new(store.clone());
    let clock: Arc<dyn Clock> = Arc::new(FakeClock::new());

    let handle = tokio::spawn({
        let store_dyn = store_dyn.clone();
        let self_name = self_name.clone();
        async move { run_master(store_dyn, clock, "/root", &self_name).await }
    });

    // let the master claim state before asserting on it
    tokio::time::sleep(Duration::from_millis(20)).await;
    let state = store.get("/root/state").await.unwrap();
    assert_eq!(String::from_utf8(state).unwrap(), r#"{"master":"master1"}"#);

    // an agent joins and casts two successful votes -> quorum holds
    store.create_if_missing("/root/agents/a1", quorum_store::NodeMode::Ephemeral).await.unwrap();
    store
        .create("/root/services/svc1/ep1/a1", b"true", quorum_store::NodeMode::Ephemeral)
        .await
        .unwrap();

    tokio::time::sleep(Duration::from_millis(100)).await;
    let data = store.get("/root/services/svc1").await.unwrap();
    assert_eq!(String::from_utf8(data).unwrap(), "ep1");

    drop(store);
    let _ = tokio::time::timeout(Duration::from_secs(1), handle).await;
}
