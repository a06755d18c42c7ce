//! Connection handles and the connection registry.

pub mod handle;
pub mod pool;

pub use handle::{ConnectionHandle, ConnectionId, ConnectionState, PushOutcome};
pub use pool::ConnectionPool;
