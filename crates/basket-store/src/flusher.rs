//! # Persistence Flusher
//!
//! The single consumer of the persistence queue. Mutations enqueue full
//! cart snapshots; this task serializes each one to JSON and writes it
//! under the fixed storage key, strictly sequentially, so a burst of
//! mutations can never produce concurrent conflicting writes.
//!
//! ## Coalescing
//! Each write stores the complete list, so only the newest queued snapshot
//! matters. When the flusher wakes up with several snapshots pending it
//! drains the queue and writes once. The final state is always written:
//! every mutation enqueues, and the queue is drained to the last entry
//! before the task exits.
//!
//! ## Failure Policy
//! A failed write is logged and dropped. Persistence is a best-effort
//! mirror of the in-memory cart, not a source of truth (except at
//! startup), and a storage failure must never interrupt the user.

use tokio::sync::mpsc;
use tracing::{debug, error};

use basket_core::CartItem;
use basket_db::KvRepository;

use crate::store::CART_STORAGE_KEY;

/// Single-consumer persistence task for cart snapshots.
pub(crate) struct CartFlusher {
    /// Snapshot queue, fed by every mutation on the store.
    rx: mpsc::UnboundedReceiver<Vec<CartItem>>,

    /// Key-value storage the snapshots are written to.
    kv: KvRepository,
}

impl CartFlusher {
    pub(crate) fn new(rx: mpsc::UnboundedReceiver<Vec<CartItem>>, kv: KvRepository) -> Self {
        CartFlusher { rx, kv }
    }

    /// Runs the flusher loop.
    ///
    /// Spawned as a background task by [`crate::CartStore::open`]; exits
    /// once every sender is dropped and the queue is drained.
    pub(crate) async fn run(mut self) {
        debug!("Persistence flusher starting");

        while let Some(mut snapshot) = self.rx.recv().await {
            // Only the newest pending snapshot needs to hit storage
            while let Ok(newer) = self.rx.try_recv() {
                snapshot = newer;
            }

            self.write(&snapshot).await;
        }

        debug!("Persistence flusher stopped");
    }

    /// Encodes and writes one snapshot. Failures are logged, never raised.
    async fn write(&self, snapshot: &[CartItem]) {
        let payload = match serde_json::to_string(snapshot) {
            Ok(payload) => payload,
            Err(e) => {
                error!(?e, "Failed to encode cart snapshot");
                return;
            }
        };

        match self.kv.set(CART_STORAGE_KEY, &payload).await {
            Ok(()) => debug!(lines = snapshot.len(), "Cart persisted"),
            Err(e) => error!(?e, "Failed to persist cart"),
        }
    }
}
