//! # basket-core: Pure Cart Logic for Basket
//!
//! This crate is the heart of the Basket cart: the line-item types and the
//! cart operations, as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Basket Data Flow                             │
//! │                                                                     │
//! │   UI action ──► basket-store (CartStore)                            │
//! │                      │                                              │
//! │                      ▼                                              │
//! │   ★ basket-core (THIS CRATE) ★                                      │
//! │                                                                     │
//! │   ┌───────────┐      ┌───────────────────────────┐                  │
//! │   │   types   │      │           cart            │                  │
//! │   │ CartItem  │      │  add / increment /        │                  │
//! │   │NewCartItem│      │  decrement (copy-on-write)│                  │
//! │   └───────────┘      └───────────────────────────┘                  │
//! │                                                                     │
//! │   NO I/O • NO STORAGE • NO ASYNC • PURE FUNCTIONS                   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Line-item types ([`CartItem`], [`NewCartItem`])
//! - [`cart`] - The ordered cart and its operations
//!
//! ## Design Principles
//!
//! 1. **Copy-on-write**: every cart operation produces a fresh cart; held
//!    snapshots are never mutated behind a consumer's back
//! 2. **Total operations**: increment/decrement of an unknown id is a
//!    silent no-op, never an error
//! 3. **No I/O**: storage and async live in `basket-db` / `basket-store`

pub mod cart;
pub mod types;

pub use cart::Cart;
pub use types::{CartItem, NewCartItem};
