//! tcpfan - bidirectional TCP fan-out relay
//!
//! Listens on two ports and forwards every payload received on one port to
//! every connection currently open on the other, byte for byte, with no
//! framing or protocol on top. Payloads of exactly 7 bytes are heartbeats:
//! they are echoed to the sender's own port instead, and the sending
//! connection is closed right after. Built for debugging embedded-device
//! serial-over-TCP links, so every relayed payload is logged as a hex table.
//!
//! # Example
//!
//! ```no_run
//! use tcpfan::server::{RelayConfig, RelayServer};
//!
//! #[tokio::main]
//! async fn main() -> tcpfan::Result<()> {
//!     let config = RelayConfig::from_ports(34050, 34051)?;
//!     let server = RelayServer::new(config);
//!     server.run().await;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod registry;
pub mod relay;
pub mod server;

pub use error::{RelayError, Result};
pub use registry::ConnectionRegistry;
pub use server::{RelayConfig, RelayServer};
