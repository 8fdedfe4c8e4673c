//! Server side of the relay: configuration, listeners, connection handlers

pub mod config;
pub mod connection;
pub mod listener;

pub use config::{RelayConfig, DEFAULT_PEER_PORT, DEFAULT_PORT, DEFAULT_READ_BUFFER_SIZE};
pub use connection::ConnectionHandler;
pub use listener::{Listener, RelayServer};
