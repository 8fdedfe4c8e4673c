//! Per-connection read loop and teardown

use std::sync::Arc;

use bytes::Bytes;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::tcp::OwnedReadHalf;

use crate::registry::{ConnEntry, ConnectionRegistry};
use crate::relay::{is_heartbeat, send_to_all};

/// Owns one connection from registration to teardown.
///
/// The handler reads chunks off the socket, classifies each one, and fans it
/// out through the registry:
///
/// - data goes to every connection on the peer port and the loop continues,
/// - a heartbeat is echoed to the sender's own port and the loop ends, so a
///   heartbeat terminates the connection that sent it.
///
/// Whichever way the loop exits (error, EOF, or post-heartbeat), teardown
/// runs exactly once: shut the socket down and deregister the entry.
pub struct ConnectionHandler {
    entry: Arc<ConnEntry>,
    reader: OwnedReadHalf,
    peer_target: String,
    registry: Arc<ConnectionRegistry>,
    read_buffer_size: usize,
}

impl ConnectionHandler {
    pub fn new(
        entry: Arc<ConnEntry>,
        reader: OwnedReadHalf,
        peer_target: String,
        registry: Arc<ConnectionRegistry>,
        read_buffer_size: usize,
    ) -> Self {
        Self {
            entry,
            reader,
            peer_target,
            registry,
            read_buffer_size,
        }
    }

    /// Drive the connection until it closes
    pub async fn run(mut self) {
        self.read_loop().await;
        self.teardown().await;
    }

    async fn read_loop(&mut self) {
        let mut buf = vec![0u8; self.read_buffer_size];

        loop {
            match self.reader.read(&mut buf).await {
                // Clean end-of-stream
                Ok(0) => return,
                Ok(n) => {
                    let msg = Bytes::copy_from_slice(&buf[..n]);

                    if is_heartbeat(&msg) {
                        // Same-port echo, then this connection is done. The
                        // sender itself is still registered at dispatch time
                        // and may receive its own echo.
                        let own_addr = self.entry.local_addr().to_string();
                        send_to_all(&self.registry, &msg, &own_addr).await;
                        return;
                    }

                    send_to_all(&self.registry, &msg, &self.peer_target).await;
                }
                Err(e) => {
                    tracing::error!(
                        peer = %self.entry.peer_addr(),
                        error = %e,
                        "Error reading from connection"
                    );
                    return;
                }
            }
        }
    }

    async fn teardown(&self) {
        {
            let mut writer = self.entry.writer.lock().await;
            // The peer may already be gone; nothing to do about it here.
            let _ = writer.shutdown().await;
        }

        self.registry.remove(self.entry.id()).await;

        tracing::info!(peer = %self.entry.peer_addr(), "Connection closed");
    }
}
