//! Relay configuration

use crate::error::{RelayError, Result};

/// Default listening port
pub const DEFAULT_PORT: u16 = 34050;

/// Default peer listening port
pub const DEFAULT_PEER_PORT: u16 = 34051;

/// Default per-read chunk size in bytes
pub const DEFAULT_READ_BUFFER_SIZE: usize = 1024;

/// Relay configuration options
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// First listening port
    pub port: u16,

    /// Second listening port; data received on one port is relayed to
    /// connections on the other
    pub peer_port: u16,

    /// Host to bind both listeners to
    pub bind_host: String,

    /// Maximum bytes consumed per read call
    pub read_buffer_size: usize,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            peer_port: DEFAULT_PEER_PORT,
            bind_host: "0.0.0.0".to_string(),
            read_buffer_size: DEFAULT_READ_BUFFER_SIZE,
        }
    }
}

impl RelayConfig {
    /// Build a config from raw port values, validating both lie in
    /// [0, 65535].
    ///
    /// Out-of-range values are fatal: the caller is expected to abort
    /// before opening any socket.
    pub fn from_ports(port: u32, peer_port: u32) -> Result<Self> {
        let port = u16::try_from(port).map_err(|_| RelayError::PortOutOfRange(port))?;
        let peer_port =
            u16::try_from(peer_port).map_err(|_| RelayError::PortOutOfRange(peer_port))?;

        Ok(Self {
            port,
            peer_port,
            ..Default::default()
        })
    }

    /// Set the bind host
    pub fn bind_host(mut self, host: impl Into<String>) -> Self {
        self.bind_host = host.into();
        self
    }

    /// Set the per-read chunk size
    pub fn read_buffer_size(mut self, size: usize) -> Self {
        self.read_buffer_size = size;
        self
    }

    /// Bind address for the given port
    pub fn listen_addr(&self, port: u16) -> String {
        format!("{}:{}", self.bind_host, port)
    }

    /// Broadcast target string for the given port, in bare `:PORT` form
    pub fn target_addr(port: u16) -> String {
        format!(":{}", port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RelayConfig::default();

        assert_eq!(config.port, 34050);
        assert_eq!(config.peer_port, 34051);
        assert_eq!(config.bind_host, "0.0.0.0");
        assert_eq!(config.read_buffer_size, 1024);
    }

    #[test]
    fn test_from_ports_accepts_full_range() {
        assert!(RelayConfig::from_ports(0, 65535).is_ok());

        let config = RelayConfig::from_ports(5000, 5001).unwrap();
        assert_eq!(config.port, 5000);
        assert_eq!(config.peer_port, 5001);
    }

    #[test]
    fn test_from_ports_rejects_out_of_range() {
        assert!(matches!(
            RelayConfig::from_ports(65536, 34051),
            Err(RelayError::PortOutOfRange(65536))
        ));
        assert!(matches!(
            RelayConfig::from_ports(34050, 100_000),
            Err(RelayError::PortOutOfRange(100_000))
        ));
    }

    #[test]
    fn test_builder_chaining() {
        let config = RelayConfig::default()
            .bind_host("127.0.0.1")
            .read_buffer_size(4096);

        assert_eq!(config.bind_host, "127.0.0.1");
        assert_eq!(config.read_buffer_size, 4096);
    }

    #[test]
    fn test_addr_rendering() {
        let config = RelayConfig::default().bind_host("127.0.0.1");

        assert_eq!(config.listen_addr(config.port), "127.0.0.1:34050");
        assert_eq!(RelayConfig::target_addr(34051), ":34051");
    }
}
