//! Individual WebSocket connection handle.

use std::sync::atomic::{AtomicU8, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::message::OutboundMessage;

/// Unique connection identifier
pub type ConnectionId = Uuid;

/// Lifecycle of a connection: `Connecting -> Open -> Closed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionState {
    /// Upgrade accepted, not yet registered.
    Connecting,
    /// Registered and receiving broadcasts.
    Open,
    /// Disconnected or found dead during a push.
    Closed,
}

impl ConnectionState {
    fn as_u8(self) -> u8 {
        match self {
            Self::Connecting => 0,
            Self::Open => 1,
            Self::Closed => 2,
        }
    }

    fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Connecting,
            1 => Self::Open,
            _ => Self::Closed,
        }
    }
}

/// Result of a non-blocking push to one connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushOutcome {
    /// The message is queued for the client.
    Delivered,
    /// The outbound buffer was full; the message was dropped.
    Dropped,
    /// The receiving side is gone; the connection is now closed.
    Closed,
}

/// A handle to a single WebSocket connection.
///
/// Holds the sender half of the connection's outbound buffer. The
/// receiving half is drained by the socket writer task.
#[derive(Debug)]
pub struct ConnectionHandle {
    /// Unique connection ID
    pub id: ConnectionId,
    /// Sender for outbound messages
    sender: mpsc::Sender<OutboundMessage>,
    /// When the connection was established
    pub connected_at: DateTime<Utc>,
    state: AtomicU8,
}

impl ConnectionHandle {
    /// Create a new handle in the `Connecting` state
    pub fn new(sender: mpsc::Sender<OutboundMessage>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender,
            connected_at: Utc::now(),
            state: AtomicU8::new(ConnectionState::Connecting.as_u8()),
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> ConnectionState {
        ConnectionState::from_u8(self.state.load(Ordering::SeqCst))
    }

    /// Move from `Connecting` to `Open`. A closed handle stays closed.
    pub fn mark_open(&self) -> bool {
        self.state
            .compare_exchange(
                ConnectionState::Connecting.as_u8(),
                ConnectionState::Open.as_u8(),
                Ordering::SeqCst,
                Ordering::SeqCst,
            )
            .is_ok()
    }

    /// Mark the connection closed
    pub fn mark_closed(&self) {
        self.state
            .store(ConnectionState::Closed.as_u8(), Ordering::SeqCst);
    }

    /// Check if connection is open
    pub fn is_open(&self) -> bool {
        self.state() == ConnectionState::Open
    }

    /// Queue a message, waiting for buffer space if the writer lags.
    ///
    /// Never returns `Dropped`.
    pub async fn send(&self, msg: OutboundMessage) -> PushOutcome {
        if !self.is_open() {
            return PushOutcome::Closed;
        }
        match self.sender.send(msg).await {
            Ok(()) => PushOutcome::Delivered,
            Err(_) => {
                self.mark_closed();
                PushOutcome::Closed
            }
        }
    }

    /// Push a message without waiting for buffer space
    pub fn push(&self, msg: OutboundMessage) -> PushOutcome {
        if !self.is_open() {
            return PushOutcome::Closed;
        }
        match self.sender.try_send(msg) {
            Ok(()) => PushOutcome::Delivered,
            Err(mpsc::error::TrySendError::Full(_)) => {
                tracing::warn!(conn_id = %self.id, "Send buffer full, dropping message");
                PushOutcome::Dropped
            }
            Err(mpsc::error::TrySendError::Closed(_)) => {
                self.mark_closed();
                PushOutcome::Closed
            }
        }
    }
}
