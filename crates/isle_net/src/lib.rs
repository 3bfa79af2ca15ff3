//! # isle_net
//!
//! A fire-and-forget liveness signal between a client and a server. It has no
//! game semantics and shares no state with the simulation.
//!
//! - [`connection`]: address defaults and TCP connect.
//! - [`heartbeat`]: sends one incrementing byte per interval.
//! - [`listener`]: accepts connections and logs what arrives.
//! - [`error`]: network-layer error types.

pub mod connection;
pub mod error;
pub mod heartbeat;
pub mod listener;

pub use connection::{connect, connect_to};
pub use error::NetError;
pub use heartbeat::{HeartbeatConfig, run_heartbeat};
pub use listener::{ConnectionEnd, ConnectionSummary, ServerConfig, bind, serve, serve_connection};
