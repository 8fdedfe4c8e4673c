//! Connection registry implementation
//!
//! The central registry that tracks every open connection across both
//! listening ports so broadcasts can fan out to the right group.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::net::tcp::OwnedWriteHalf;
use tokio::sync::RwLock;

use super::entry::ConnEntry;

/// Registry of currently open connections
///
/// Thread-safe via `RwLock`. Broadcasts iterate a copy-on-read snapshot, so
/// add/remove may interleave freely with an in-flight broadcast: an entry
/// added or removed mid-broadcast may or may not be visited, never twice.
pub struct ConnectionRegistry {
    /// Map of registry-assigned id to connection entry
    conns: RwLock<HashMap<u64, Arc<ConnEntry>>>,

    /// Next id to hand out
    next_id: AtomicU64,
}

impl ConnectionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            conns: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Register a freshly accepted connection
    ///
    /// Assigns the connection its identity and stores the write half for
    /// broadcast delivery. Called exactly once per accepted socket.
    pub async fn insert(
        &self,
        local_addr: SocketAddr,
        peer_addr: SocketAddr,
        writer: OwnedWriteHalf,
    ) -> Arc<ConnEntry> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let entry = Arc::new(ConnEntry::new(id, local_addr, peer_addr, writer));

        let mut conns = self.conns.write().await;
        conns.insert(id, Arc::clone(&entry));

        entry
    }

    /// Deregister a connection by id
    ///
    /// Idempotent: removing an id that is absent is a no-op and never
    /// disturbs any other entry.
    pub async fn remove(&self, id: u64) -> Option<Arc<ConnEntry>> {
        self.conns.write().await.remove(&id)
    }

    /// Whether the given id is currently registered
    pub async fn contains(&self, id: u64) -> bool {
        self.conns.read().await.contains_key(&id)
    }

    /// Snapshot of all currently registered connections, in no particular order
    pub async fn snapshot(&self) -> Vec<Arc<ConnEntry>> {
        self.conns.read().await.values().cloned().collect()
    }

    /// Number of registered connections
    pub async fn len(&self) -> usize {
        self.conns.read().await.len()
    }

    /// Whether the registry is empty
    pub async fn is_empty(&self) -> bool {
        self.conns.read().await.is_empty()
    }
}

impl Default for ConnectionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
