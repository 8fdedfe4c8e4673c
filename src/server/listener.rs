//! Relay server and per-port listeners
//!
//! Handles the TCP accept loops and spawns a connection handler per
//! accepted socket.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::{TcpListener, TcpStream};

use crate::registry::ConnectionRegistry;
use crate::server::config::RelayConfig;
use crate::server::connection::ConnectionHandler;

/// The bidirectional relay
///
/// Runs one [`Listener`] per configured port against a shared connection
/// registry. The registry is injectable so tests can run isolated relays
/// and observe membership directly.
pub struct RelayServer {
    config: RelayConfig,
    registry: Arc<ConnectionRegistry>,
}

impl RelayServer {
    /// Create a server with its own registry
    pub fn new(config: RelayConfig) -> Self {
        Self::with_registry(config, Arc::new(ConnectionRegistry::new()))
    }

    /// Create a server over an externally owned registry
    pub fn with_registry(config: RelayConfig, registry: Arc<ConnectionRegistry>) -> Self {
        Self { config, registry }
    }

    /// Get a reference to the connection registry
    pub fn registry(&self) -> &Arc<ConnectionRegistry> {
        &self.registry
    }

    /// Run both listeners.
    ///
    /// Each listener is independent: one port failing to bind is logged and
    /// does not affect the other. Returns only when both listeners have
    /// ended, which under normal operation is never.
    pub async fn run(&self) {
        let a = Listener::new(self.config.port, self.config.peer_port, &self.config, &self.registry);
        let b = Listener::new(self.config.peer_port, self.config.port, &self.config, &self.registry);

        tokio::join!(a.run(), b.run());
    }
}

/// Accept loop for a single port
///
/// Every accepted connection is registered, then read by its own spawned
/// [`ConnectionHandler`] that relays data toward `peer_target`.
pub struct Listener {
    port: u16,
    listen_addr: String,
    peer_target: String,
    read_buffer_size: usize,
    registry: Arc<ConnectionRegistry>,
}

impl Listener {
    /// Create a listener for `port` relaying data to `peer_port`
    pub fn new(
        port: u16,
        peer_port: u16,
        config: &RelayConfig,
        registry: &Arc<ConnectionRegistry>,
    ) -> Self {
        Self {
            port,
            listen_addr: config.listen_addr(port),
            peer_target: RelayConfig::target_addr(peer_port),
            read_buffer_size: config.read_buffer_size,
            registry: Arc::clone(registry),
        }
    }

    /// Bind and serve until the process ends.
    ///
    /// A bind failure is terminal for this listener only; accept failures
    /// are logged and the loop keeps accepting.
    pub async fn run(&self) {
        let listener = match TcpListener::bind(&self.listen_addr).await {
            Ok(l) => l,
            Err(e) => {
                tracing::error!(addr = %self.listen_addr, error = %e, "Error listening");
                return;
            }
        };
        tracing::info!(addr = %self.listen_addr, "Listening");

        self.accept_loop(&listener).await;
    }

    async fn accept_loop(&self, listener: &TcpListener) {
        loop {
            match listener.accept().await {
                Ok((socket, peer_addr)) => {
                    self.handle_connection(socket, peer_addr).await;
                }
                Err(e) => {
                    tracing::error!(port = self.port, error = %e, "Error accepting connection");
                }
            }
        }
    }

    async fn handle_connection(&self, socket: TcpStream, peer_addr: SocketAddr) {
        let local_addr = match socket.local_addr() {
            Ok(addr) => addr,
            Err(e) => {
                tracing::error!(peer = %peer_addr, error = %e, "Failed to read local address");
                return;
            }
        };

        let (reader, writer) = socket.into_split();
        let entry = self.registry.insert(local_addr, peer_addr, writer).await;

        tracing::info!(peer = %peer_addr, port = self.port, "New connection");

        let handler = ConnectionHandler::new(
            entry,
            reader,
            self.peer_target.clone(),
            Arc::clone(&self.registry),
            self.read_buffer_size,
        );

        tokio::spawn(handler.run());
    }
}
