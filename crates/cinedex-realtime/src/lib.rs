//! # cinedex-realtime
//!
//! Notification hub for Cinedex. Keeps a registry of open WebSocket
//! connections and fans a data-changed event out to every one of them
//! after each mutation. Delivery is best effort: each connection has a
//! bounded outbound buffer and a full buffer drops the message for that
//! connection only.

pub mod connection;
pub mod hub;
pub mod message;
pub mod metrics;

pub use connection::{ConnectionHandle, ConnectionId, ConnectionState};
pub use hub::{BroadcastReport, NotificationHub};
pub use message::{DataChangedEvent, OutboundMessage};
pub use metrics::{HubMetrics, MetricsSnapshot};
