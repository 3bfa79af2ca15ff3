//! Connection setup.

use tokio::net::TcpStream;
use tracing::info;

use crate::error::NetError;

/// Default liveness server address.
pub const DEFAULT_SERVER_ADDR: &str = "127.0.0.1:8000";

/// The environment variable used to override the server address.
pub const SERVER_ADDR_ENV: &str = "ISLE_SERVER_ADDR";

/// Connect using the address from `ISLE_SERVER_ADDR`, falling back to
/// [`DEFAULT_SERVER_ADDR`].
///
/// # Errors
///
/// Returns [`NetError::Connect`] if the connection cannot be established.
pub async fn connect() -> Result<TcpStream, NetError> {
    let addr = std::env::var(SERVER_ADDR_ENV).unwrap_or_else(|_| DEFAULT_SERVER_ADDR.to_string());
    connect_to(&addr).await
}

/// Connect to the server at `addr`.
///
/// # Errors
///
/// Returns [`NetError::Connect`] if the connection cannot be established.
pub async fn connect_to(addr: &str) -> Result<TcpStream, NetError> {
    info!(addr, "connecting to liveness server");
    let stream = TcpStream::connect(addr)
        .await
        .map_err(|source| NetError::Connect {
            addr: addr.to_string(),
            source,
        })?;
    info!(addr, "connection established");
    Ok(stream)
}

#[cfg(test)]
mod tests {
    use tokio::net::TcpListener;

    use super::*;

    #[tokio::test]
    async fn test_connect_to_listening_socket() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap().to_string();
        assert!(connect_to(&addr).await.is_ok());
    }

    #[tokio::test]
    async fn test_connect_to_closed_port_is_typed_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap().to_string();
        drop(listener);

        let err = connect_to(&addr).await.unwrap_err();
        assert!(matches!(err, NetError::Connect { addr: ref a, .. } if *a == addr));
    }
}
