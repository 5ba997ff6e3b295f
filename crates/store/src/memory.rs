// SPDX-License-Identifier: MIT

//! An in-memory [`StoreAdapter`] fake, used by every test in this
//! workspace instead of a real ZooKeeper server.
//!
//! [`InMemoryCluster`] is the shared tree; [`InMemoryStore`] is a session
//! handle into it. Ephemeral nodes are tagged with the session that
//! created them and removed — recursively, notifying watchers — when
//! [`InMemoryStore::close`] runs or the handle is dropped, mirroring how a
//! real ZooKeeper session purges its ephemeral nodes on disconnect (P1).

use crate::adapter::{NodeMode, StoreAdapter, Watch};
use crate::error::StoreError;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

struct Node {
    data: Vec<u8>,
    owner_session: Option<u64>,
    children: Vec<String>,
}

struct Tree {
    nodes: HashMap<String, Node>,
    data_watch: HashMap<String, Arc<Notify>>,
    children_watch: HashMap<String, Arc<Notify>>,
}

impl Tree {
    fn new() -> Self {
        let mut nodes = HashMap::new();
        nodes.insert(
            String::new(),
            Node { data: Vec::new(), owner_session: None, children: Vec::new() },
        );
        Self { nodes, data_watch: HashMap::new(), children_watch: HashMap::new() }
    }

    fn notify_data(&self, path: &str) {
        if let Some(n) = self.data_watch.get(path) {
            n.notify_waiters();
        }
    }

    fn notify_children(&self, path: &str) {
        if let Some(n) = self.children_watch.get(path) {
            n.notify_waiters();
        }
    }

    fn data_notify_handle(&mut self, path: &str) -> Arc<Notify> {
        self.data_watch.entry(path.to_string()).or_insert_with(|| Arc::new(Notify::new())).clone()
    }

    fn children_notify_handle(&mut self, path: &str) -> Arc<Notify> {
        self.children_watch.entry(path.to_string()).or_insert_with(|| Arc::new(Notify::new())).clone()
    }
}

fn parent_of(path: &str) -> &str {
    match path.rfind('/') {
        Some(0) => "",
        Some(idx) => &path[..idx],
        None => "",
    }
}

fn leaf_of(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

/// The shared cluster state behind one or more [`InMemoryStore`] sessions.
#[derive(Clone)]
pub struct InMemoryCluster {
    tree: Arc<Mutex<Tree>>,
    next_session: Arc<AtomicU64>,
}

impl InMemoryCluster {
    pub fn new() -> Self {
        Self { tree: Arc::new(Mutex::new(Tree::new())), next_session: Arc::new(AtomicU64::new(1)) }
    }

    /// Open a new session handle. Each handle owns the ephemeral nodes it
    /// creates; closing or dropping it purges them (P1).
    pub fn session(&self) -> InMemoryStore {
        let id = self.next_session.fetch_add(1, Ordering::Relaxed);
        InMemoryStore { tree: self.tree.clone(), session_id: id, closed: Arc::new(Mutex::new(false)) }
    }
}

impl Default for InMemoryCluster {
    fn default() -> Self {
        Self::new()
    }
}

/// A session handle into an [`InMemoryCluster`], implementing
/// [`StoreAdapter`].
#[derive(Clone)]
pub struct InMemoryStore {
    tree: Arc<Mutex<Tree>>,
    session_id: u64,
    closed: Arc<Mutex<bool>>,
}

impl InMemoryStore {
    /// Convenience: a standalone cluster with a single session, for tests
    /// that don't care about simulating multiple agents' sessions.
    pub fn standalone() -> Self {
        InMemoryCluster::new().session()
    }

    /// End this session, deleting every ephemeral node it owns and waking
    /// any watcher on the node itself or on its parent's children.
    pub fn close(&self) {
        let mut closed = self.closed.lock();
        if *closed {
            return;
        }
        *closed = true;
        let mut tree = self.tree.lock();
        let doomed: Vec<String> = tree
            .nodes
            .iter()
            .filter(|(_, n)| n.owner_session == Some(self.session_id))
            .map(|(p, _)| p.clone())
            .collect();
        for path in doomed {
            remove_node(&mut tree, &path);
        }
    }
}

fn remove_node(tree: &mut Tree, path: &str) {
    if tree.nodes.remove(path).is_none() {
        return;
    }
    let parent = parent_of(path).to_string();
    if let Some(p) = tree.nodes.get_mut(&parent) {
        p.children.retain(|c| c != leaf_of(path));
    }
    tree.notify_data(path);
    tree.notify_children(&parent);
}

impl Drop for InMemoryStore {
    fn drop(&mut self) {
        self.close();
    }
}

#[async_trait::async_trait]
impl StoreAdapter for InMemoryStore {
    async fn create_if_missing(&self, path: &str, mode: NodeMode) -> Result<(), StoreError> {
        match self.create(path, b"", mode).await {
            Ok(()) | Err(StoreError::NodeExists(_)) => Ok(()),
            Err(e) => Err(e),
        }
    }

    async fn create(&self, path: &str, data: &[u8], mode: NodeMode) -> Result<(), StoreError> {
        let mut tree = self.tree.lock();
        if tree.nodes.contains_key(path) {
            return Err(StoreError::NodeExists(path.to_string()));
        }
        let parent = parent_of(path).to_string();
        if !tree.nodes.contains_key(&parent) {
            return Err(StoreError::NoNode(parent));
        }
        let owner_session = match mode {
            NodeMode::Ephemeral => Some(self.session_id),
            NodeMode::Persistent => None,
        };
        tree.nodes.insert(path.to_string(), Node { data: data.to_vec(), owner_session, children: Vec::new() });
        let leaf = leaf_of(path).to_string();
        if let Some(p) = tree.nodes.get_mut(&parent) {
            p.children.push(leaf);
        }
        tree.notify_children(&parent);
        Ok(())
    }

    async fn exists(&self, path: &str) -> Result<bool, StoreError> {
        Ok(self.tree.lock().nodes.contains_key(path))
    }

    async fn get(&self, path: &str) -> Result<Vec<u8>, StoreError> {
        self.tree
            .lock()
            .nodes
            .get(path)
            .map(|n| n.data.clone())
            .ok_or_else(|| StoreError::NoNode(path.to_string()))
    }

    async fn set(&self, path: &str, data: &[u8]) -> Result<(), StoreError> {
        let mut tree = self.tree.lock();
        let node = tree.nodes.get_mut(path).ok_or_else(|| StoreError::NoNode(path.to_string()))?;
        node.data = data.to_vec();
        tree.notify_data(path);
        Ok(())
    }

    async fn children(&self, path: &str) -> Result<Vec<String>, StoreError> {
        self.tree
            .lock()
            .nodes
            .get(path)
            .map(|n| n.children.clone())
            .ok_or_else(|| StoreError::NoNode(path.to_string()))
    }

    async fn children_watch(&self, path: &str) -> Result<(Vec<String>, Watch), StoreError> {
        let mut tree = self.tree.lock();
        let children = tree
            .nodes
            .get(path)
            .map(|n| n.children.clone())
            .ok_or_else(|| StoreError::NoNode(path.to_string()))?;
        let notify = tree.children_notify_handle(path);
        drop(tree);
        let watch: Watch = Box::pin(async move {
            notify.notified().await;
            Ok(())
        });
        Ok((children, watch))
    }

    async fn get_watch(&self, path: &str) -> Result<(Vec<u8>, Watch), StoreError> {
        let mut tree = self.tree.lock();
        let data = tree.nodes.get(path).map(|n| n.data.clone()).ok_or_else(|| StoreError::NoNode(path.to_string()))?;
        let notify = tree.data_notify_handle(path);
        drop(tree);
        let watch: Watch = Box::pin(async move {
            notify.notified().await;
            Ok(())
        });
        Ok((data, watch))
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
