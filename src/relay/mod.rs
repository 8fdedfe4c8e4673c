//! Relay rules: classification, port matching, broadcast delivery
//!
//! The relay has exactly two behavioral rules, both decided per message:
//!
//! - a payload of exactly 7 bytes is a heartbeat; it is echoed to the
//!   sender's own port and the sending connection is closed,
//! - any other payload is data; it is fanned out to every connection on the
//!   configured peer port and the sender stays open.
//!
//! Matching is textual on the port segment of address strings, which keeps a
//! bare `:PORT` configuration value comparable against a full `HOST:PORT`
//! socket address.

pub mod broadcast;
pub mod classify;
pub mod hexdump;
pub mod port_match;

pub use broadcast::send_to_all;
pub use classify::{is_heartbeat, HEARTBEAT_LEN};
pub use hexdump::hex_dump;
pub use port_match::same_port;
