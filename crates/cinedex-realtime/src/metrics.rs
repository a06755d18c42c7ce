//! Hub metrics counters.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Hub-level counters.
#[derive(Debug, Default)]
pub struct HubMetrics {
    connections_opened: AtomicU64,
    connections_closed: AtomicU64,
    messages_delivered: AtomicU64,
    messages_failed: AtomicU64,
}

impl HubMetrics {
    /// Create new zeroed metrics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new connection
    pub fn connection_opened(&self) {
        self.connections_opened.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a disconnection
    pub fn connection_closed(&self) {
        self.connections_closed.fetch_add(1, Ordering::Relaxed);
    }

    /// Record queued messages
    pub fn delivered(&self, count: u64) {
        self.messages_delivered.fetch_add(count, Ordering::Relaxed);
    }

    /// Record dropped or undeliverable messages
    pub fn failed(&self, count: u64) {
        self.messages_failed.fetch_add(count, Ordering::Relaxed);
    }

    /// Get a snapshot of all metrics
    pub fn snapshot(&self) -> MetricsSnapshot {
        let opened = self.connections_opened.load(Ordering::Relaxed);
        let closed = self.connections_closed.load(Ordering::Relaxed);
        MetricsSnapshot {
            connections_opened: opened,
            connections_closed: closed,
            connections_active: opened.saturating_sub(closed),
            messages_delivered: self.messages_delivered.load(Ordering::Relaxed),
            messages_failed: self.messages_failed.load(Ordering::Relaxed),
        }
    }
}

/// Serializable metrics snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    /// Connections ever opened
    pub connections_opened: u64,
    /// Connections closed
    pub connections_closed: u64,
    /// Currently open connections
    pub connections_active: u64,
    /// Messages queued for delivery
    pub messages_delivered: u64,
    /// Messages dropped or sent to dead connections
    pub messages_failed: u64,
}
