//! # Cart Handle
//!
//! The seam between the composition root and UI collaborators: a cheap
//! cloneable slot holding the shared [`CartStore`].
//!
//! The root creates one handle, opens the store, and installs it; every
//! screen gets a clone of the handle instead of reaching for a global.
//! Accessing the cart through a handle whose store was never installed
//! (or was taken down) fails synchronously with
//! [`StoreError::NotInitialized`] on every call.

use std::sync::{Arc, RwLock};

use tracing::info;

use crate::error::{StoreError, StoreResult};
use crate::store::CartStore;

/// Cloneable access point for the shared [`CartStore`].
///
/// All clones observe the same slot: installing a store on one clone makes
/// it visible through every other.
#[derive(Debug, Clone, Default)]
pub struct CartHandle {
    inner: Arc<RwLock<Option<Arc<CartStore>>>>,
}

impl CartHandle {
    /// Creates an empty handle. [`CartHandle::get`] fails until a store is
    /// installed.
    pub fn new() -> Self {
        CartHandle::default()
    }

    /// Publishes an opened store to every clone of this handle.
    ///
    /// Returns the shared reference, replacing any previously installed
    /// store.
    pub fn install(&self, store: CartStore) -> Arc<CartStore> {
        let store = Arc::new(store);

        let mut slot = self.inner.write().expect("cart handle lock poisoned");
        *slot = Some(Arc::clone(&store));

        info!("Cart store installed");
        store
    }

    /// Returns the shared store.
    ///
    /// ## Errors
    /// [`StoreError::NotInitialized`], synchronously, whenever no store is
    /// currently installed.
    pub fn get(&self) -> StoreResult<Arc<CartStore>> {
        self.inner
            .read()
            .expect("cart handle lock poisoned")
            .as_ref()
            .map(Arc::clone)
            .ok_or(StoreError::NotInitialized)
    }

    /// Checks whether a store is currently installed.
    pub fn is_installed(&self) -> bool {
        self.inner
            .read()
            .expect("cart handle lock poisoned")
            .is_some()
    }

    /// Removes the installed store from the slot, returning it.
    ///
    /// Subsequent [`CartHandle::get`] calls fail again with
    /// [`StoreError::NotInitialized`]. Used at teardown, where the root
    /// can reclaim sole ownership and call [`CartStore::close`].
    pub fn take(&self) -> Option<Arc<CartStore>> {
        self.inner
            .write()
            .expect("cart handle lock poisoned")
            .take()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use basket_db::{Database, DbConfig};

    async fn opened_store() -> CartStore {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        CartStore::open(db).await.unwrap()
    }

    #[test]
    fn test_get_without_install_fails_every_time() {
        let handle = CartHandle::new();

        assert!(matches!(handle.get(), Err(StoreError::NotInitialized)));
        // Still failing on the second read, not just the first
        assert!(matches!(handle.get(), Err(StoreError::NotInitialized)));
        assert!(!handle.is_installed());
    }

    #[tokio::test]
    async fn test_install_publishes_to_all_clones() {
        let handle = CartHandle::new();
        let screen_handle = handle.clone();

        handle.install(opened_store().await);

        assert!(screen_handle.is_installed());
        assert!(screen_handle.get().is_ok());
    }

    #[tokio::test]
    async fn test_take_deactivates_the_handle() {
        let handle = CartHandle::new();
        handle.install(opened_store().await);

        let store = handle.take();
        assert!(store.is_some());
        assert!(matches!(handle.get(), Err(StoreError::NotInitialized)));
    }
}
