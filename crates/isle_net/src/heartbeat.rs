//! Heartbeat sender.
//!
//! Once per interval one byte is written to the connection. The byte
//! starts at 0 and wraps at 255. The first failed write is logged and ends
//! the sender; there is no retry.

use std::time::Duration;

use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

/// Heartbeat timing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeartbeatConfig {
    /// Delay before each byte.
    pub interval: Duration,
}

impl HeartbeatConfig {
    /// Set the delay between bytes.
    #[must_use]
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }
}

impl Default for HeartbeatConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(1),
        }
    }
}

/// Send heartbeats until a write fails.
///
/// Returns the number of bytes sent.
pub async fn run_heartbeat<W>(mut conn: W, config: HeartbeatConfig) -> u64
where
    W: AsyncWrite + Unpin,
{
    let mut counter = 0u8;
    let mut sent = 0u64;
    loop {
        tokio::time::sleep(config.interval).await;

        match conn.write(&[counter]).await {
            Ok(0) => {
                warn!(sent, "heartbeat connection closed");
                return sent;
            }
            Ok(n) => {
                debug!(n, counter, "sent heartbeat");
                sent += n as u64;
                counter = counter.wrapping_add(1);
            }
            Err(e) => {
                warn!(error = %e, sent, "heartbeat send failed");
                return sent;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use tokio::io::AsyncReadExt;

    use super::*;

    fn fast() -> HeartbeatConfig {
        HeartbeatConfig::default().with_interval(Duration::from_millis(2))
    }

    #[tokio::test]
    async fn test_sends_incrementing_bytes() {
        let (client, mut server) = tokio::io::duplex(64);
        let sender = tokio::spawn(run_heartbeat(client, fast()));

        let mut received = [0u8; 4];
        server.read_exact(&mut received).await.unwrap();
        assert_eq!(received, [0, 1, 2, 3]);

        sender.abort();
    }

    #[tokio::test]
    async fn test_stops_after_write_error() {
        let (client, server) = tokio::io::duplex(64);
        drop(server);

        let sent = run_heartbeat(client, fast()).await;
        assert_eq!(sent, 0);
    }

    #[tokio::test]
    async fn test_stops_when_peer_goes_away() {
        let (client, mut server) = tokio::io::duplex(64);
        let sender = tokio::spawn(run_heartbeat(client, fast()));

        let mut first = [0u8; 2];
        server.read_exact(&mut first).await.unwrap();
        drop(server);

        let sent = sender.await.unwrap();
        assert!(sent >= 2);
    }

    #[test]
    fn test_default_interval_is_one_second() {
        assert_eq!(HeartbeatConfig::default().interval, Duration::from_secs(1));
    }
}
