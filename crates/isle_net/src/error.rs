//! Network-layer error types.

/// Errors that can occur while setting up the heartbeat transport.
#[derive(Debug, thiserror::Error)]
pub enum NetError {
    /// The server could not be reached.
    #[error("failed to connect to {addr}: {source}")]
    Connect {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The listening socket could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// Any other socket error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
