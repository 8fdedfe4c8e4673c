//! Broadcast delivery
//!
//! Fans a single payload out to every registered connection on the target
//! port. Fire-and-forget: no retry, no buffering, no backpressure.

use bytes::Bytes;
use tokio::io::AsyncWriteExt;

use crate::registry::ConnectionRegistry;

use super::classify::is_heartbeat;
use super::hexdump::hex_dump;
use super::port_match::same_port;

/// Write `msg` to every registered connection whose local address matches
/// `target`.
///
/// `target` is an address string: a bare `:PORT` for peer-port relay or a
/// full `HOST:PORT` for same-port heartbeat echo. Iterates a registry
/// snapshot, so connections added or removed while the broadcast is in
/// flight may or may not be reached. A failed write is logged and delivery
/// continues with the remaining targets; the failing connection's own
/// handler notices the broken socket on its next read.
pub async fn send_to_all(registry: &ConnectionRegistry, msg: &Bytes, target: &str) {
    let heartbeat = is_heartbeat(msg);

    for entry in registry.snapshot().await {
        if !same_port(entry.local_addr(), target) {
            continue;
        }

        tracing::info!(
            peer = %entry.peer_addr(),
            heartbeat = heartbeat,
            len = msg.len(),
            "send\n{}",
            hex_dump(msg)
        );

        let mut writer = entry.writer.lock().await;
        if let Err(e) = writer.write_all(msg).await {
            tracing::error!(
                peer = %entry.peer_addr(),
                error = %e,
                "Failed to send to connection"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use tokio::io::AsyncReadExt;
    use tokio::net::{TcpListener, TcpStream};
    use tokio::time::{timeout, Duration};

    use super::*;

    async fn register_loopback(registry: &ConnectionRegistry) -> (String, TcpStream) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let client = TcpStream::connect(addr).await.unwrap();
        let (accepted, peer_addr) = listener.accept().await.unwrap();
        let local_addr = accepted.local_addr().unwrap();
        let (_rd, wr) = accepted.into_split();
        let entry = registry.insert(local_addr, peer_addr, wr).await;
        (entry.local_addr().to_string(), client)
    }

    #[tokio::test]
    async fn test_delivers_to_matching_port_only() {
        let registry = ConnectionRegistry::new();
        let (addr_a, mut client_a) = register_loopback(&registry).await;
        let (_addr_b, mut client_b) = register_loopback(&registry).await;

        let msg = Bytes::from_static(b"payload");
        send_to_all(&registry, &msg, &addr_a).await;

        let mut buf = [0u8; 16];
        let n = timeout(Duration::from_secs(1), client_a.read(&mut buf))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(&buf[..n], b"payload");

        // The other connection sits on a different port and gets nothing.
        let other = timeout(Duration::from_millis(100), client_b.read(&mut buf)).await;
        assert!(other.is_err());
    }

    #[tokio::test]
    async fn test_zero_targets_is_a_no_op() {
        let registry = ConnectionRegistry::new();
        let (_addr, mut client) = register_loopback(&registry).await;

        let msg = Bytes::from_static(b"nobody home");
        send_to_all(&registry, &msg, ":1").await;

        let mut buf = [0u8; 16];
        let got = timeout(Duration::from_millis(100), client.read(&mut buf)).await;
        assert!(got.is_err());
    }

    #[tokio::test]
    async fn test_write_failure_does_not_stop_delivery() {
        let registry = ConnectionRegistry::new();

        // Two connections accepted on the same listener, so both match the
        // same target address.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let dead_client = TcpStream::connect(addr).await.unwrap();
        let (dead, dead_peer) = listener.accept().await.unwrap();
        let local_addr = dead.local_addr().unwrap();
        let (_rd, wr) = dead.into_split();
        registry.insert(local_addr, dead_peer, wr).await;
        drop(dead_client);

        let mut live_client = TcpStream::connect(addr).await.unwrap();
        let (live, live_peer) = listener.accept().await.unwrap();
        let (_rd, wr) = live.into_split();
        registry.insert(local_addr, live_peer, wr).await;

        // Let the dead client's FIN/RST land before broadcasting.
        tokio::time::sleep(Duration::from_millis(50)).await;

        let msg = Bytes::from_static(b"still delivered");
        send_to_all(&registry, &msg, &local_addr.to_string()).await;
        // A second round trips the broken pipe on the dead socket for sure.
        send_to_all(&registry, &msg, &local_addr.to_string()).await;

        let mut buf = vec![0u8; msg.len()];
        timeout(Duration::from_secs(1), live_client.read_exact(&mut buf))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(buf, b"still delivered");
    }
}
