//! Crate error types

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, RelayError>;

/// Error type for relay setup and I/O
#[derive(Debug)]
pub enum RelayError {
    /// A configured port falls outside [0, 65535]
    PortOutOfRange(u32),
    /// Underlying socket I/O failure
    Io(std::io::Error),
}

impl std::fmt::Display for RelayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RelayError::PortOutOfRange(port) => {
                write!(f, "port {} must be in range [0, 65535]", port)
            }
            RelayError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for RelayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RelayError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RelayError {
    fn from(e: std::io::Error) -> Self {
        RelayError::Io(e)
    }
}
