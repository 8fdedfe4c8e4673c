//! Per-connection registry entry

use std::net::SocketAddr;

use tokio::net::tcp::OwnedWriteHalf;
use tokio::sync::Mutex;

/// A single registered connection.
///
/// The read half stays with the connection handler; the registry holds the
/// write half so any broadcast can reach the socket. The local address is
/// rendered once at accept time because it is compared as a string on every
/// broadcast.
pub struct ConnEntry {
    id: u64,
    local_addr: String,
    peer_addr: SocketAddr,
    pub(crate) writer: Mutex<OwnedWriteHalf>,
}

impl ConnEntry {
    pub(super) fn new(
        id: u64,
        local_addr: SocketAddr,
        peer_addr: SocketAddr,
        writer: OwnedWriteHalf,
    ) -> Self {
        Self {
            id,
            local_addr: local_addr.to_string(),
            peer_addr,
            writer: Mutex::new(writer),
        }
    }

    /// Registry-assigned identity, stable for the connection's lifetime
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Accept-side address, i.e. the listener this connection arrived on
    pub fn local_addr(&self) -> &str {
        &self.local_addr
    }

    /// Remote peer address, used for logging only
    pub fn peer_addr(&self) -> SocketAddr {
        self.peer_addr
    }
}

impl std::fmt::Debug for ConnEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnEntry")
            .field("id", &self.id)
            .field("local_addr", &self.local_addr)
            .field("peer_addr", &self.peer_addr)
            .finish_non_exhaustive()
    }
}
