//! # Repositories
//!
//! Storage access objects. The key-value repository is the only one the
//! cart needs; it is constructed per call from [`crate::Database::kv`] and
//! is cheap to create (clones the pool handle).

pub mod kv;
