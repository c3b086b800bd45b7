//! # basket-db: Local Storage Layer for Basket
//!
//! On-device storage for the cart: a key-value store over SQLite, accessed
//! asynchronously through sqlx.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Basket Storage Flow                          │
//! │                                                                     │
//! │  basket-store (persistence flusher / restore)                       │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                    basket-db (THIS CRATE)                     │  │
//! │  │                                                               │  │
//! │  │   ┌───────────────┐   ┌───────────────┐   ┌──────────────┐   │  │
//! │  │   │   Database    │   │ KvRepository  │   │  Migrations  │   │  │
//! │  │   │   (pool.rs)   │◄──│   get / set   │   │  (embedded)  │   │  │
//! │  │   │  SqlitePool   │   │   / remove    │   │ 001_init.sql │   │  │
//! │  │   └───────────────┘   └───────────────┘   └──────────────┘   │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  SQLite file in the platform app-data directory                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Storage error types
//! - [`repository`] - The key-value repository
//!
//! ## Usage
//!
//! ```rust,ignore
//! use basket_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("path/to/basket.db")).await?;
//! db.kv().set("@basket:cart", "[]").await?;
//! let blob = db.kv().get("@basket:cart").await?;
//! ```

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use repository::kv::KvRepository;
