//! Outbound message types.

pub mod types;

pub use types::{DATA_CHANGED_MESSAGE, DataChangedEvent, OutboundMessage};
