//! Notification hub: connection lifecycle and broadcast fan-out.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::{debug, info};

use cinedex_core::config::RealtimeConfig;

use crate::connection::{ConnectionHandle, ConnectionId, ConnectionPool, PushOutcome};
use crate::message::{DataChangedEvent, OutboundMessage};
use crate::metrics::{HubMetrics, MetricsSnapshot};

/// Per-broadcast delivery counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BroadcastReport {
    /// Connections the event was queued for.
    pub delivered: usize,
    /// Connections that were full or closed.
    pub failed: usize,
}

/// Registry of open connections with unfiltered broadcast.
#[derive(Debug)]
pub struct NotificationHub {
    pool: ConnectionPool,
    metrics: Arc<HubMetrics>,
    config: RealtimeConfig,
}

impl NotificationHub {
    /// Creates an empty hub.
    pub fn new(config: RealtimeConfig) -> Self {
        Self {
            pool: ConnectionPool::new(),
            metrics: Arc::new(HubMetrics::new()),
            config,
        }
    }

    /// Opens a connection and adds it to the registry.
    ///
    /// Returns the handle and the receiver the socket writer drains.
    pub fn register(&self) -> (Arc<ConnectionHandle>, mpsc::Receiver<OutboundMessage>) {
        let (tx, rx) = mpsc::channel(self.config.channel_buffer_size.max(1));
        let handle = Arc::new(ConnectionHandle::new(tx));

        handle.mark_open();
        self.pool.add(handle.clone());
        self.metrics.connection_opened();

        info!(conn_id = %handle.id, "WebSocket connection registered");
        (handle, rx)
    }

    /// Removes a connection. Unknown ids are ignored.
    pub fn unregister(&self, conn_id: &ConnectionId) {
        if let Some(handle) = self.pool.remove(conn_id) {
            handle.mark_closed();
            self.metrics.connection_closed();
            info!(
                conn_id = %conn_id,
                open_secs = (Utc::now() - handle.connected_at).num_seconds(),
                "WebSocket connection unregistered"
            );
        }
    }

    /// Pushes `event` to every registered connection.
    ///
    /// Iterates a snapshot of the registry. A failed push never stops the
    /// loop; connections found closed are pruned.
    pub fn broadcast(&self, event: &DataChangedEvent) -> BroadcastReport {
        let mut report = BroadcastReport::default();

        for handle in self.pool.snapshot() {
            match handle.push(OutboundMessage::Notification(event.clone())) {
                PushOutcome::Delivered => report.delivered += 1,
                PushOutcome::Dropped => report.failed += 1,
                PushOutcome::Closed => {
                    report.failed += 1;
                    self.unregister(&handle.id);
                }
            }
        }

        self.metrics.delivered(report.delivered as u64);
        self.metrics.failed(report.failed as u64);
        debug!(
            delivered = report.delivered,
            failed = report.failed,
            "Broadcast complete"
        );
        report
    }

    /// Broadcasts the standard data-changed event.
    pub fn notify_data_changed(&self) -> BroadcastReport {
        self.broadcast(&DataChangedEvent::default())
    }

    /// Replies to an inbound frame on the same connection.
    ///
    /// Unlike a broadcast, an echo waits for room in the connection's own
    /// buffer, so every frame gets its reply.
    pub async fn echo(&self, conn_id: &ConnectionId, text: &str) -> bool {
        let Some(handle) = self.pool.get(conn_id) else {
            return false;
        };
        let reply = OutboundMessage::echo(format!("{}{text}", self.config.echo_prefix));
        match handle.send(reply).await {
            PushOutcome::Delivered => true,
            PushOutcome::Dropped | PushOutcome::Closed => {
                self.unregister(conn_id);
                false
            }
        }
    }

    /// Asks every writer to close its socket and empties the registry.
    pub fn close_all(&self) {
        let all = self.pool.snapshot();
        for handle in &all {
            let _ = handle.push(OutboundMessage::Close);
            self.unregister(&handle.id);
        }
        info!(count = all.len(), "All connections closed");
    }

    /// Number of registered connections.
    pub fn connection_count(&self) -> usize {
        self.pool.connection_count()
    }

    /// Current counter values.
    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }
}
