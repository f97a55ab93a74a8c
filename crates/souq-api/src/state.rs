//! # Shared Shop State
//!
//! Wraps the whole [`ShopStore`] in `Arc<Mutex<_>>`.
//!
//! ## Concurrency Decision
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │             Why one global lock instead of per-resource locks           │
//! │                                                                         │
//! │  The racy spots are check-then-act spans:                               │
//! │    • add_to_cart: "already in cart" count → limit check → append        │
//! │    • checkout:    stock re-validation → stock decrement                 │
//! │                                                                         │
//! │  Per-product + per-cart mutexes would serialize these too, but          │
//! │  checkout touches the catalog, one cart AND the ledger, so it would     │
//! │  need a lock-ordering protocol. The store is tiny and every operation   │
//! │  is a few hundred nanoseconds of in-memory work; one Mutex over the     │
//! │  whole store gives the same guarantee with no ordering to get wrong.    │
//! │                                                                         │
//! │  Swapping in a finer-grained store later only touches this module:      │
//! │  all callers go through with_shop / with_shop_mut.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use souq_core::ShopStore;

use crate::config::ShopConfig;

/// Thread-safe handle to the in-memory shop.
///
/// Cloning is cheap (Arc); all clones see the same shop.
#[derive(Debug, Clone)]
pub struct SharedShop {
    shop: Arc<Mutex<ShopStore>>,
}

impl SharedShop {
    /// Wraps an existing store (tests, custom seeds).
    pub fn new(store: ShopStore) -> Self {
        SharedShop {
            shop: Arc::new(Mutex::new(store)),
        }
    }

    /// Builds the store the composition root wants: demo catalog unless
    /// disabled, the two fixed seed identities, and the primary admin
    /// credential overridden from config.
    pub fn from_config(config: &ShopConfig) -> Self {
        let mut store = if config.seed_demo_catalog {
            ShopStore::seeded()
        } else {
            let mut empty = ShopStore::new();
            empty.directory = ShopStore::seeded().directory;
            empty
        };

        if let Some(admin) = store.directory.find_mut("admin") {
            admin.username = config.admin_username.clone();
            admin.password = config.admin_password.clone();
        }

        SharedShop::new(store)
    }

    /// Executes a function with read access to the shop.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let count = shared.with_shop(|shop| shop.catalog.products().len());
    /// ```
    pub fn with_shop<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ShopStore) -> R,
    {
        let shop = self.shop.lock().expect("Shop mutex poisoned");
        f(&shop)
    }

    /// Executes a function with write access to the shop.
    ///
    /// The closure runs under the lock, so a check-then-act sequence inside
    /// it is atomic with respect to every other operation.
    pub fn with_shop_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut ShopStore) -> R,
    {
        let mut shop = self.shop.lock().expect("Shop mutex poisoned");
        f(&mut shop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_overrides_admin_credential() {
        let config = ShopConfig {
            admin_username: "root".to_string(),
            admin_password: "hunter2".to_string(),
            seed_demo_catalog: true,
        };
        let shared = SharedShop::from_config(&config);

        shared.with_shop(|shop| {
            assert!(shop.directory.authenticate("root", "hunter2").is_ok());
            assert!(shop.directory.authenticate("admin", "123").is_err());
            // The secondary seed identity is untouched.
            assert!(shop.directory.authenticate("place", "123").is_ok());
        });
    }

    #[test]
    fn test_from_config_without_demo_catalog() {
        let config = ShopConfig {
            seed_demo_catalog: false,
            ..ShopConfig::default()
        };
        let shared = SharedShop::from_config(&config);

        shared.with_shop(|shop| {
            assert!(shop.catalog.products().is_empty());
            assert!(shop.directory.authenticate("admin", "123").is_ok());
        });
    }

    #[test]
    fn test_clones_share_state() {
        let shared = SharedShop::new(ShopStore::seeded());
        let clone = shared.clone();

        shared.with_shop_mut(|shop| {
            shop.directory.register("ali", "pw").unwrap();
        });
        clone.with_shop(|shop| {
            assert!(shop.directory.find("ali").is_some());
        });
    }
}
