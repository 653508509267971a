//! In-process pub/sub hub for table change notifications.
//!
//! Mirrors the hosted store's push channel: every successful write publishes
//! a change event for its table, and SSE subscribers re-fetch on any event.
//! Topics are table names; payloads carry the table and the operation.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::{broadcast, RwLock};

/// Write operation that triggered a change event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeOp {
    Insert,
    Update,
    Delete,
}

/// A change to one table's rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEvent {
    pub table: String,
    pub op: ChangeOp,
}

/// Topic-keyed broadcast hub. Thread-safe, cloneable.
#[derive(Clone)]
pub struct StreamHub {
    channels: Arc<RwLock<HashMap<String, broadcast::Sender<ChangeEvent>>>>,
    capacity: usize,
}

impl StreamHub {
    /// Create a hub with default capacity (256 events per topic).
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            channels: Arc::new(RwLock::new(HashMap::new())),
            capacity,
        }
    }

    /// Publish a change for a table. No-op if nobody is subscribed.
    pub async fn publish(&self, table: &str, op: ChangeOp) {
        let channels = self.channels.read().await;
        if let Some(tx) = channels.get(table) {
            // Ignore send errors (no active receivers)
            let _ = tx.send(ChangeEvent {
                table: table.to_string(),
                op,
            });
        }
    }

    /// Subscribe to a table's changes. Creates the channel if needed.
    pub async fn subscribe(&self, table: &str) -> broadcast::Receiver<ChangeEvent> {
        let mut channels = self.channels.write().await;
        let tx = channels
            .entry(table.to_string())
            .or_insert_with(|| broadcast::channel(self.capacity).0);
        tx.subscribe()
    }

    /// Remove channels with zero subscribers (housekeeping).
    pub async fn cleanup(&self) {
        let mut channels = self.channels.write().await;
        channels.retain(|_, tx| tx.receiver_count() > 0);
    }
}

impl Default for StreamHub {
    fn default() -> Self {
        Self::new()
    }
}
