//! Messages pushed from the server to WebSocket clients.

use serde::{Deserialize, Serialize};

/// Text of the event broadcast after every mutation.
pub const DATA_CHANGED_MESSAGE: &str = "New data is available. Please refresh.";

/// Broadcast payload telling clients to refetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataChangedEvent {
    /// Human-readable notice.
    pub message: String,
}

impl Default for DataChangedEvent {
    fn default() -> Self {
        Self {
            message: DATA_CHANGED_MESSAGE.to_string(),
        }
    }
}

/// A message queued for one connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundMessage {
    /// JSON-encoded data-changed event.
    Notification(DataChangedEvent),
    /// Plain-text reply to an inbound frame.
    Echo(String),
    /// Ask the writer to close the socket.
    Close,
}

impl OutboundMessage {
    /// Build an echo reply.
    pub fn echo(text: impl Into<String>) -> Self {
        Self::Echo(text.into())
    }

    /// Text frame body, or `None` for [`OutboundMessage::Close`].
    pub fn to_text(&self) -> Result<Option<String>, serde_json::Error> {
        match self {
            Self::Notification(event) => serde_json::to_string(event).map(Some),
            Self::Echo(text) => Ok(Some(text.clone())),
            Self::Close => Ok(None),
        }
    }
}
