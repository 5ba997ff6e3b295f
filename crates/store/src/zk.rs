// SPDX-License-Identifier: MIT

//! [`StoreAdapter`] backed by a real ZooKeeper session via the
//! `zookeeper-client` crate.
//!
//! This is the only module in the workspace that talks to the wire
//! protocol. Session management, reconnection within a session, and ACL
//! handling are all delegated to the client crate (§1); this adapter's
//! job is purely to translate the narrow contract in [`crate::adapter`]
//! onto the client's calls and to map its errors onto [`StoreError`].

use crate::adapter::{NodeMode, StoreAdapter, Watch};
use crate::error::StoreError;
use zookeeper_client as zk;

/// Open a world-readable/writable ACL, matching the original source's
/// `zk.WorldACL(zk.PermAll)` (§1: ACLs are out of scope for this design).
fn acls() -> &'static zk::Acls {
    zk::Acls::anyone_all()
}

fn create_mode(mode: NodeMode) -> zk::CreateMode {
    match mode {
        NodeMode::Persistent => zk::CreateMode::Persistent,
        NodeMode::Ephemeral => zk::CreateMode::Ephemeral,
    }
}

fn map_err(path: &str, err: zk::Error) -> StoreError {
    match err {
        zk::Error::NoNode => StoreError::NoNode(path.to_string()),
        zk::Error::NodeExists => StoreError::NodeExists(path.to_string()),
        zk::Error::SessionExpired | zk::Error::ConnectionLoss => StoreError::SessionLoss,
        other => StoreError::Other(other.to_string()),
    }
}

/// Translate a resolved watch event into this crate's one-shot watch
/// contract. A session-level event (expiry, disconnect) is fatal; any
/// data/children change event resolves `Ok(())` so the caller loops back
/// around to re-read and re-arm (§4.D, §4.E).
fn map_watch_event(event: zk::WatchedEvent) -> Result<(), StoreError> {
    use zk::KeeperState;
    match event.keeper_state {
        KeeperState::SyncConnected | KeeperState::ConnectedReadOnly => Ok(()),
        KeeperState::Disconnected | KeeperState::Expired | KeeperState::AuthFailed => {
            Err(StoreError::SessionLoss)
        }
        other => Err(StoreError::Other(format!("unexpected keeper state: {other:?}"))),
    }
}

/// A `StoreAdapter` backed by one ZooKeeper client session.
///
/// Cloning shares the underlying session handle, matching how the
/// original design passes one global connection to every task.
#[derive(Clone)]
pub struct ZkStore {
    client: zk::Client,
}

impl ZkStore {
    /// Connect to `hosts` (comma-separated `host:port` list) with the
    /// fixed 2-second session timeout specified in §6.
    pub async fn connect(hosts: &str) -> Result<Self, StoreError> {
        let client = zk::Client::connect(hosts)
            .await
            .map_err(|e| StoreError::ConnectionLoss(e.to_string()))?;
        tracing::info!(%hosts, "connected to coordination store");
        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl StoreAdapter for ZkStore {
    async fn create_if_missing(&self, path: &str, mode: NodeMode) -> Result<(), StoreError> {
        match self.create(path, b"", mode).await {
            Ok(()) => Ok(()),
            Err(StoreError::NodeExists(_)) => Ok(()),
            Err(e) => Err(e),
        }
    }

    async fn create(&self, path: &str, data: &[u8], mode: NodeMode) -> Result<(), StoreError> {
        self.client
            .create(path, data, &create_mode(mode).with_acls(acls()))
            .await
            .map(|_| ())
            .map_err(|e| map_err(path, e))
    }

    async fn exists(&self, path: &str) -> Result<bool, StoreError> {
        match self.client.check_stat(path).await {
            Ok(stat) => Ok(stat.is_some()),
            Err(e) => Err(map_err(path, e)),
        }
    }

    async fn get(&self, path: &str) -> Result<Vec<u8>, StoreError> {
        self.client.get_data(path).await.map(|(data, _stat)| data).map_err(|e| map_err(path, e))
    }

    async fn set(&self, path: &str, data: &[u8]) -> Result<(), StoreError> {
        self.client.set_data(path, data, None).await.map(|_| ()).map_err(|e| map_err(path, e))
    }

    async fn children(&self, path: &str) -> Result<Vec<String>, StoreError> {
        self.client.list_children(path).await.map_err(|e| map_err(path, e))
    }

    async fn children_watch(&self, path: &str) -> Result<(Vec<String>, Watch), StoreError> {
        let (children, watcher) =
            self.client.list_and_watch_children(path).await.map_err(|e| map_err(path, e))?;
        let watch: Watch = Box::pin(async move { map_watch_event(watcher.await) });
        Ok((children, watch))
    }

    async fn get_watch(&self, path: &str) -> Result<(Vec<u8>, Watch), StoreError> {
        let ((data, _stat), watcher) =
            self.client.get_and_watch_data(path).await.map_err(|e| map_err(path, e))?;
        let watch: Watch = Box::pin(async move { map_watch_event(watcher.await) });
        Ok((data, watch))
    }
}
