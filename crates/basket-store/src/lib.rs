//! # basket-store: Cart State Container
//!
//! The live shopping cart: exclusive owner of the in-memory line list, with
//! restore from local storage at startup and a persistence queue that
//! mirrors every mutation back to storage.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Cart Store Data Flow                         │
//! │                                                                     │
//! │  UI action            CartStore                 Flusher task        │
//! │  ─────────            ─────────                 ────────────        │
//! │                                                                     │
//! │  add_to_cart ───────► new cart installed ────► snapshot queued      │
//! │  increment   ───────► (copy-on-write,          │                    │
//! │  decrement   ───────►  synchronous)            ▼                    │
//! │                                          JSON-encode newest         │
//! │  products()  ◄─────── owned snapshot     snapshot, write under      │
//! │                                          "@basket:cart"             │
//! │                                                                     │
//! │  Startup: CartStore::open(db) reads the stored list BEFORE any      │
//! │  mutation can occur, so the restore can never clobber a user edit.  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`store`] - [`CartStore`]: restore, mutations, snapshots, shutdown
//! - `flusher` - the single-consumer persistence task (internal)
//! - [`handle`] - [`CartHandle`]: the explicit provider seam for UI code
//! - [`error`] - [`StoreError`]
//!
//! ## Usage
//!
//! ```rust,ignore
//! use basket_db::{Database, DbConfig};
//! use basket_store::{CartHandle, CartStore, NewCartItem};
//!
//! // Composition root
//! let db = Database::new(DbConfig::new(DbConfig::default_path()?)).await?;
//! let handle = CartHandle::new();
//! handle.install(CartStore::open(db).await?);
//!
//! // Anywhere a clone of `handle` was passed
//! let store = handle.get()?;
//! store.add_to_cart(NewCartItem { /* … */ });
//! let lines = store.products();
//! ```

pub mod error;
mod flusher;
pub mod handle;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use handle::CartHandle;
pub use store::{CartStore, CART_STORAGE_KEY};

// Re-exports so UI code only needs one import
pub use basket_core::{Cart, CartItem, NewCartItem};
