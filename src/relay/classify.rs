//! Heartbeat classification

/// Exact payload length that marks a heartbeat
pub const HEARTBEAT_LEN: usize = 7;

/// Classify a payload as a heartbeat.
///
/// Content-blind: any payload of exactly [`HEARTBEAT_LEN`] bytes counts,
/// including real data that happens to be 7 bytes long. The collision is a
/// structural limitation of the device convention, not something the relay
/// can resolve.
pub fn is_heartbeat(msg: &[u8]) -> bool {
    msg.len() == HEARTBEAT_LEN
}
