//! Textual port matching
//!
//! Broadcast targets are address strings: either a bare `:PORT` built from
//! configuration or a full `HOST:PORT` taken from a socket. Matching is
//! textual on the port segment.

/// Decide whether two address strings name the same port.
///
/// True on exact equality, or when both strings contain exactly one `:` and
/// the segments after it are equal. Addresses with more than one colon
/// (unbracketed IPv6) never match by suffix; the relay's port representation
/// is host:port or :port only.
pub fn same_port(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }
    let parts_a: Vec<&str> = a.split(':').collect();
    let parts_b: Vec<&str> = b.split(':').collect();
    parts_a.len() == 2 && parts_b.len() == 2 && parts_a[1] == parts_b[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        assert!(same_port("127.0.0.1:34050", "127.0.0.1:34050"));
        assert!(same_port(":34050", ":34050"));
    }

    #[test]
    fn test_bare_port_matches_full_address() {
        assert!(same_port(":34050", "127.0.0.1:34050"));
        assert!(same_port("127.0.0.1:34050", ":34050"));
    }

    #[test]
    fn test_different_ports_do_not_match() {
        assert!(!same_port(":34050", ":34051"));
        assert!(!same_port("127.0.0.1:34050", "127.0.0.1:34051"));
    }

    #[test]
    fn test_multi_colon_strings_do_not_match_by_suffix() {
        assert!(!same_port("a:b:1", "c:d:1"));
        assert!(!same_port("::1:34050", ":34050"));
    }

    #[test]
    fn test_portless_strings_do_not_match() {
        assert!(!same_port("127.0.0.1", "127.0.0.2"));
        assert!(!same_port("127.0.0.1", ":34050"));
    }
}
