//! # Cart Store
//!
//! The exclusive owner of the live cart list.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Cart Store Lifecycle                          │
//! │                                                                     │
//! │  CartStore::open(db)                                                │
//! │       │                                                             │
//! │       ├── read "@basket:cart" from storage                          │
//! │       ├── decode JSON list (absent/undecodable → empty cart)        │
//! │       ├── spawn persistence flusher                                 │
//! │       └── enqueue the restored state (the initial mirror write)     │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  add_to_cart / increment / decrement                                │
//! │       │   synchronous copy-on-write swap, then snapshot enqueued    │
//! │       ▼                                                             │
//! │  close()  ── drains the queue, awaits the final write               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The restore completes before `open` returns, so no mutation can race it:
//! by the time a caller holds a `CartStore`, the stored list is already the
//! in-memory list.
//!
//! ## Thread Safety
//! The cart is behind a `Mutex` because UI layers may call in from more
//! than one thread. Mutations hold the lock only for the in-memory swap
//! and the (non-blocking) enqueue; the storage write happens on the
//! flusher task.

use std::sync::Mutex;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use basket_core::{Cart, CartItem, NewCartItem};
use basket_db::Database;

use crate::error::StoreResult;
use crate::flusher::CartFlusher;

/// Fixed storage key for the cart blob, namespaced to keep the app's other
/// stored keys out of the way.
pub const CART_STORAGE_KEY: &str = "@basket:cart";

/// The in-memory owner of the current cart list plus its mutation
/// operations.
///
/// ## Contract
/// - `products()` hands out owned snapshots; consumers never see later
///   mutations through them
/// - the three mutations are total: unknown ids are silent no-ops
/// - every mutation enqueues a full-state write to local storage
///   (fire-and-forget; failures are logged, never surfaced)
#[derive(Debug)]
pub struct CartStore {
    /// The live cart. Replaced wholesale on every mutation.
    cart: Mutex<Cart>,

    /// Snapshot queue feeding the persistence flusher.
    persist_tx: mpsc::UnboundedSender<Vec<CartItem>>,

    /// The flusher task, awaited by [`CartStore::close`].
    flusher: JoinHandle<()>,
}

impl CartStore {
    /// Opens the store: restores the persisted list, then starts the
    /// persistence flusher.
    ///
    /// ## Restore
    /// - stored blob present and decodable: installed verbatim, order
    ///   preserved
    /// - absent: empty cart
    /// - present but undecodable: logged at WARN, treated as absent
    ///
    /// The read happens before `open` returns, so mutations made through
    /// the returned store can never be overwritten by a late restore.
    ///
    /// ## Errors
    /// Only a failing storage *read* surfaces here. Everything after open
    /// is fire-and-forget.
    pub async fn open(db: Database) -> StoreResult<Self> {
        let kv = db.kv();

        let cart = match kv.get(CART_STORAGE_KEY).await? {
            Some(blob) => match serde_json::from_str::<Vec<CartItem>>(&blob) {
                Ok(items) => Cart::from_items(items),
                Err(e) => {
                    warn!(?e, "Stored cart is not a valid line list; starting empty");
                    Cart::new()
                }
            },
            None => Cart::new(),
        };

        info!(lines = cart.item_count(), "Cart restored from storage");

        let (persist_tx, persist_rx) = mpsc::unbounded_channel();
        let flusher = tokio::spawn(CartFlusher::new(persist_rx, kv).run());

        let store = CartStore {
            cart: Mutex::new(cart),
            persist_tx,
            flusher,
        };

        // Mirror the restored state back out, as every state change does
        store.enqueue_snapshot(&store.cart.lock().expect("cart mutex poisoned"));

        Ok(store)
    }

    /// Adds a product to the cart, or bumps its quantity if already
    /// present. Duplicate adds are the defined way to increase quantity.
    pub fn add_to_cart(&self, item: NewCartItem) {
        debug!(id = %item.id, "add_to_cart");

        let mut cart = self.cart.lock().expect("cart mutex poisoned");
        *cart = cart.add(&item);
        self.enqueue_snapshot(&cart);
    }

    /// Increments the quantity of the line matching `id`. Unknown ids are
    /// silently ignored.
    pub fn increment(&self, id: &str) {
        debug!(id = %id, "increment");

        let mut cart = self.cart.lock().expect("cart mutex poisoned");
        *cart = cart.increment(id);
        self.enqueue_snapshot(&cart);
    }

    /// Decrements the quantity of the line matching `id`, removing it at
    /// quantity 1. Unknown ids are silently ignored.
    pub fn decrement(&self, id: &str) {
        debug!(id = %id, "decrement");

        let mut cart = self.cart.lock().expect("cart mutex poisoned");
        *cart = cart.decrement(id);
        self.enqueue_snapshot(&cart);
    }

    /// Returns an owned snapshot of the current lines, in insertion order.
    pub fn products(&self) -> Vec<CartItem> {
        self.cart
            .lock()
            .expect("cart mutex poisoned")
            .items()
            .to_vec()
    }

    /// Returns the total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.cart.lock().expect("cart mutex poisoned").total_quantity()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.cart.lock().expect("cart mutex poisoned").is_empty()
    }

    /// Shuts the store down, draining the persistence queue and awaiting
    /// the final write.
    ///
    /// Optional: dropping the store also lets the flusher drain and exit;
    /// `close` just makes the flush deterministic (tests, app exit hooks).
    pub async fn close(self) {
        let CartStore {
            cart: _,
            persist_tx,
            flusher,
        } = self;

        // Closing the channel is the flusher's shutdown signal
        drop(persist_tx);

        if let Err(e) = flusher.await {
            error!(?e, "Persistence flusher task failed");
        }
    }

    /// Queues the current full state for persistence. Never blocks; a
    /// closed queue is logged and otherwise ignored.
    fn enqueue_snapshot(&self, cart: &Cart) {
        if self.persist_tx.send(cart.items().to_vec()).is_err() {
            warn!("Persistence queue is closed; cart change not mirrored");
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use basket_db::DbConfig;

    fn descriptor(id: &str, title: &str, price: f64) -> NewCartItem {
        NewCartItem {
            id: id.to_string(),
            title: title.to_string(),
            image_url: format!("https://cdn.example.com/{}.png", id),
            price,
        }
    }

    async fn test_db() -> Database {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();

        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_open_with_empty_storage_starts_empty() {
        let db = test_db().await;
        let store = CartStore::open(db.clone()).await.unwrap();

        assert!(store.is_empty());

        // The initial mirror write lands once the queue drains
        store.close().await;
        assert_eq!(
            db.kv().get(CART_STORAGE_KEY).await.unwrap().as_deref(),
            Some("[]")
        );
    }

    #[tokio::test]
    async fn test_duplicate_add_bumps_quantity() {
        let db = test_db().await;
        let store = CartStore::open(db).await.unwrap();

        store.add_to_cart(descriptor("A", "Shoe", 10.0));
        store.add_to_cart(descriptor("A", "Shoe", 10.0));

        let lines = store.products();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].quantity, 2);
    }

    #[tokio::test]
    async fn test_unknown_id_mutations_are_no_ops() {
        let db = test_db().await;
        let store = CartStore::open(db).await.unwrap();

        store.add_to_cart(descriptor("A", "Shoe", 10.0));
        let before = store.products();

        store.increment("nonexistent");
        store.decrement("nonexistent");

        assert_eq!(store.products(), before);
    }

    #[tokio::test]
    async fn test_decrement_to_zero_removes_line() {
        let db = test_db().await;
        let store = CartStore::open(db).await.unwrap();

        store.add_to_cart(descriptor("A", "Shoe", 10.0));
        store.add_to_cart(descriptor("A", "Shoe", 10.0));

        store.decrement("A");
        assert_eq!(store.products()[0].quantity, 1);

        store.decrement("A");
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_snapshots_do_not_observe_later_mutations() {
        let db = test_db().await;
        let store = CartStore::open(db).await.unwrap();

        store.add_to_cart(descriptor("A", "Shoe", 10.0));
        let snapshot = store.products();

        store.increment("A");
        store.add_to_cart(descriptor("B", "Mug", 5.0));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].quantity, 1);
    }

    #[tokio::test]
    async fn test_restart_round_trip_preserves_state() {
        let db = test_db().await;

        let store = CartStore::open(db.clone()).await.unwrap();
        store.add_to_cart(descriptor("A", "Shoe", 129.9));
        store.add_to_cart(descriptor("B", "Mug", 9.5));
        store.increment("A");
        let expected = store.products();
        store.close().await;

        // Simulated restart: a fresh store over the same storage
        let reopened = CartStore::open(db).await.unwrap();
        assert_eq!(reopened.products(), expected);
    }

    #[tokio::test]
    async fn test_undecodable_blob_restores_as_empty() {
        let db = test_db().await;
        db.kv().set(CART_STORAGE_KEY, "{definitely not a list").await.unwrap();

        let store = CartStore::open(db.clone()).await.unwrap();
        assert!(store.is_empty());

        // The initial mirror write replaces the bad blob
        store.close().await;
        assert_eq!(
            db.kv().get(CART_STORAGE_KEY).await.unwrap().as_deref(),
            Some("[]")
        );
    }

    #[tokio::test]
    async fn test_persisted_wire_format() {
        let db = test_db().await;

        let store = CartStore::open(db.clone()).await.unwrap();
        store.add_to_cart(descriptor("A", "Shoe", 10.0));
        store.close().await;

        let blob = db.kv().get(CART_STORAGE_KEY).await.unwrap().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&blob).unwrap();

        let lines = parsed.as_array().unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0]["id"], "A");
        assert_eq!(lines[0]["title"], "Shoe");
        assert_eq!(lines[0]["image_url"], "https://cdn.example.com/A.png");
        assert_eq!(lines[0]["price"], 10.0);
        assert_eq!(lines[0]["quantity"], 1);
    }

    #[tokio::test]
    async fn test_burst_of_mutations_persists_final_state() {
        let db = test_db().await;

        let store = CartStore::open(db.clone()).await.unwrap();
        for _ in 0..50 {
            store.add_to_cart(descriptor("A", "Shoe", 10.0));
        }
        store.close().await;

        let blob = db.kv().get(CART_STORAGE_KEY).await.unwrap().unwrap();
        let restored: Vec<CartItem> = serde_json::from_str(&blob).unwrap();
        assert_eq!(restored.len(), 1);
        assert_eq!(restored[0].quantity, 50);
    }
}
