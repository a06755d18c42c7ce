//! Notification hub configuration.

use serde::{Deserialize, Serialize};

/// Real-time (WebSocket) hub configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealtimeConfig {
    /// Outbound buffer size per connection. A full buffer drops messages
    /// for that connection only.
    #[serde(default = "default_channel_buffer")]
    pub channel_buffer_size: usize,
    /// Prefix prepended to echoed inbound frames.
    #[serde(default = "default_echo_prefix")]
    pub echo_prefix: String,
}

impl Default for RealtimeConfig {
    fn default() -> Self {
        Self {
            channel_buffer_size: default_channel_buffer(),
            echo_prefix: default_echo_prefix(),
        }
    }
}

fn default_channel_buffer() -> usize {
    64
}

fn default_echo_prefix() -> String {
    "Message text was: ".to_string()
}
