//! Liveness listener.
//!
//! Accepts TCP connections and logs every chunk received. A connection is
//! dropped after a read error, when the peer closes it, or when nothing has
//! arrived for the idle timeout.

use std::future::Future;
use std::time::Duration;

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::error::NetError;

/// Listener settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Drop a client after this long without data.
    pub idle_timeout: Duration,
    /// Largest chunk read in one go. Never zero.
    max_message_size: usize,
}

impl ServerConfig {
    /// Set how long a silent client is kept.
    #[must_use]
    pub fn with_idle_timeout(mut self, idle_timeout: Duration) -> Self {
        self.idle_timeout = idle_timeout;
        self
    }

    /// Set the read chunk size. Values below one byte are raised to one.
    #[must_use]
    pub fn with_max_message_size(mut self, max_message_size: usize) -> Self {
        self.max_message_size = max_message_size.max(1);
        self
    }

    /// Largest chunk read in one go.
    #[must_use]
    pub fn max_message_size(&self) -> usize {
        self.max_message_size
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            idle_timeout: Duration::from_secs(60),
            max_message_size: 4 * 1024,
        }
    }
}

/// Why a connection ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionEnd {
    /// The peer closed the connection.
    Closed,
    /// A read failed.
    ReadError,
    /// Nothing arrived within the idle timeout.
    TimedOut,
}

/// What happened on one connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionSummary {
    /// Total payload bytes read.
    pub bytes_received: u64,
    /// How the connection ended.
    pub end: ConnectionEnd,
}

/// Bind the listening socket.
///
/// # Errors
///
/// Returns [`NetError::Bind`] if the address cannot be bound.
pub async fn bind(addr: &str) -> Result<TcpListener, NetError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| NetError::Bind {
            addr: addr.to_string(),
            source,
        })?;
    info!(addr = %listener.local_addr()?, "listening");
    Ok(listener)
}

/// Accept connections until `shutdown` resolves. Each connection is served
/// on its own task.
///
/// # Errors
///
/// Accept failures are logged and skipped; this only returns an error if the
/// listener's local address cannot be read.
pub async fn serve<S>(listener: TcpListener, config: ServerConfig, shutdown: S) -> Result<(), NetError>
where
    S: Future<Output = ()>,
{
    let local = listener.local_addr()?;
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            accepted = listener.accept() => match accepted {
                Ok((stream, peer)) => {
                    info!(%peer, "client connected");
                    let config = config.clone();
                    tokio::spawn(async move {
                        let summary = serve_connection(stream, &config).await;
                        info!(
                            %peer,
                            bytes = summary.bytes_received,
                            end = ?summary.end,
                            "client disconnected"
                        );
                    });
                }
                Err(e) => warn!(error = %e, "failed to accept connection"),
            },
            () = &mut shutdown => {
                info!(%local, "listener shutting down");
                return Ok(());
            }
        }
    }
}

/// Read from one connection until it closes, fails or idles out.
pub async fn serve_connection<R>(mut conn: R, config: &ServerConfig) -> ConnectionSummary
where
    R: AsyncRead + Unpin,
{
    let mut buf = vec![0u8; config.max_message_size];
    let mut bytes_received = 0u64;

    let end = loop {
        match tokio::time::timeout(config.idle_timeout, conn.read(&mut buf)).await {
            Err(_) => {
                info!(
                    timeout_ms = config.idle_timeout.as_millis() as u64,
                    "client timed out"
                );
                break ConnectionEnd::TimedOut;
            }
            Ok(Ok(0)) => break ConnectionEnd::Closed,
            Ok(Ok(n)) => {
                bytes_received += n as u64;
                info!(message = ?&buf[..n], "message");
            }
            Ok(Err(e)) => {
                warn!(error = %e, "read error");
                break ConnectionEnd::ReadError;
            }
        }
    };

    ConnectionSummary {
        bytes_received,
        end,
    }
}
