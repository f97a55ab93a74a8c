//! # Shop Store
//!
//! Composition of the catalog, the account directory and the order ledger —
//! the single injected store object the boundary layer owns and locks.
//!
//! All mutation flows through the cart and checkout engines; the store only
//! adds the borrow-splitting needed to hand one identity's cart and the
//! catalog to an engine at the same time.

use crate::cart;
use crate::catalog::Catalog;
use crate::checkout::{self, CheckoutReceipt};
use crate::directory::AccountDirectory;
use crate::error::{ShopError, ShopResult};
use crate::ledger::OrderLedger;
use crate::money::Money;
use crate::types::{Identity, Product, Role};

/// The whole in-memory shop. Lost on process restart by design.
#[derive(Debug, Clone, Default)]
pub struct ShopStore {
    pub catalog: Catalog,
    pub directory: AccountDirectory,
    pub ledger: OrderLedger,
}

impl ShopStore {
    /// An empty shop: no products, no identities, no orders.
    pub fn new() -> Self {
        ShopStore {
            catalog: Catalog::new(),
            directory: AccountDirectory::new(),
            ledger: OrderLedger::new(),
        }
    }

    /// The demo shop: the 30-product catalog and the two fixed seed
    /// identities (`place`/`123`, `admin`/`123`, both Admin).
    pub fn seeded() -> Self {
        ShopStore {
            catalog: Catalog::with_products(seed_products()),
            directory: AccountDirectory::with_identities(vec![
                Identity::new("place", "123", Role::Admin),
                Identity::new("admin", "123", Role::Admin),
            ]),
            ledger: OrderLedger::new(),
        }
    }

    /// Appends `qty` of a product to `username`'s cart, enforcing the stock
    /// and offer-limit ceilings. Returns the cart's new line count.
    pub fn add_to_cart(&mut self, username: &str, product_id: u32, qty: u32) -> ShopResult<usize> {
        let identity = self
            .directory
            .find_mut(username)
            .ok_or_else(|| ShopError::UserNotFound(username.to_string()))?;
        cart::add_to_cart(&self.catalog, &mut identity.cart, product_id, qty)?;
        Ok(identity.cart.line_count())
    }

    /// Removes all of a product's lines from `username`'s cart. Returns the
    /// number of removed lines (zero is fine).
    pub fn remove_from_cart(&mut self, username: &str, product_id: u32) -> ShopResult<usize> {
        let identity = self
            .directory
            .find_mut(username)
            .ok_or_else(|| ShopError::UserNotFound(username.to_string()))?;
        Ok(identity.cart.remove_product(product_id))
    }

    /// `username`'s cart total with live per-line discounts.
    pub fn cart_total(&self, username: &str) -> ShopResult<Money> {
        let identity = self
            .directory
            .find(username)
            .ok_or_else(|| ShopError::UserNotFound(username.to_string()))?;
        cart::cart_total(&self.catalog, &identity.cart)
    }

    /// Runs the checkout engine over `username`'s cart.
    pub fn checkout(
        &mut self,
        username: &str,
        address: &str,
        payment_method: &str,
    ) -> ShopResult<CheckoutReceipt> {
        // Split borrows: the engine needs the catalog, one cart and the
        // ledger mutably at once.
        let ShopStore {
            catalog,
            directory,
            ledger,
        } = self;
        let identity = directory
            .find_mut(username)
            .ok_or_else(|| ShopError::UserNotFound(username.to_string()))?;
        checkout::checkout(
            catalog,
            &mut identity.cart,
            ledger,
            username,
            address,
            payment_method,
        )
    }
}

/// The demo catalog. Same 30 products, prices, stock levels and categories
/// the storefront has always shipped with.
pub fn seed_products() -> Vec<Product> {
    let p = |id, name, major, stock, category| {
        Product::new(id, name, Money::from_major(major), stock, category)
    };
    vec![
        p(101, "Laptop HP Pavilion", 850, 10, "Electronics"),
        p(102, "iPhone 14 Pro", 1100, 5, "Electronics"),
        p(103, "Samsung S23 Ultra", 1050, 8, "Electronics"),
        p(104, "Sony WH-1000XM5", 350, 15, "Electronics"),
        p(105, "iPad Air 5", 600, 12, "Electronics"),
        p(106, "Logitech Mouse", 40, 50, "Electronics"),
        p(107, "Mechanical Keyboard", 80, 20, "Electronics"),
        p(108, "Monitor Dell 24\"", 150, 10, "Electronics"),
        p(201, "Cotton T-Shirt", 20, 100, "Clothing"),
        p(202, "Blue Jeans", 45, 40, "Clothing"),
        p(203, "Leather Jacket", 120, 10, "Clothing"),
        p(204, "Running Shoes", 70, 25, "Clothing"),
        p(205, "Formal Shirt", 35, 30, "Clothing"),
        p(206, "Sports Cap", 15, 60, "Clothing"),
        p(301, "Coffee Maker", 90, 8, "Home"),
        p(302, "Blender 500W", 40, 15, "Home"),
        p(303, "Air Fryer", 80, 12, "Home"),
        p(304, "Desk Lamp LED", 25, 30, "Home"),
        p(305, "Towel Set", 15, 50, "Home"),
        p(401, "Yoga Mat", 20, 40, "Sports"),
        p(402, "Dumbbell Set", 50, 10, "Sports"),
        p(403, "Tennis Racket", 90, 5, "Sports"),
        p(404, "Football", 25, 20, "Sports"),
        p(501, "Python Programming", 40, 50, "Books"),
        p(502, "Notebook A4", 5, 200, "Stationery"),
        p(503, "Luxury Pen", 10, 100, "Stationery"),
        p(504, "Novel: 1984", 15, 30, "Books"),
        p(505, "Scientific Calc", 20, 25, "Stationery"),
        p(506, "Backpack", 45, 15, "Travel"),
        p(507, "Water Bottle", 12, 60, "Travel"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PaymentStatus;

    #[test]
    fn test_seeded_store_shape() {
        let store = ShopStore::seeded();
        assert_eq!(store.catalog.products().len(), 30);
        assert!(store.directory.authenticate("admin", "123").is_ok());
        assert!(store.directory.authenticate("place", "123").is_ok());
        assert!(store.ledger.is_empty());

        // No seed product starts with an active offer.
        assert!(store.catalog.products().iter().all(|p| !p.has_offer()));
    }

    #[test]
    fn test_store_end_to_end_flow() {
        let mut store = ShopStore::seeded();
        store.directory.register("ali", "pw").unwrap();

        store.add_to_cart("ali", 106, 2).unwrap(); // Logitech Mouse $40
        store.add_to_cart("ali", 507, 1).unwrap(); // Water Bottle $12
        assert_eq!(store.cart_total("ali").unwrap(), Money::from_major(92));

        let receipt = store
            .checkout("ali", "12 Harbor St", "Cash on Delivery")
            .unwrap();
        assert_eq!(receipt.total, Money::from_major(92));
        assert_eq!(receipt.payment_status, PaymentStatus::UponDelivery);

        assert_eq!(store.catalog.find(106).unwrap().stock, 48);
        assert_eq!(store.catalog.find(507).unwrap().stock, 59);
        assert!(store.directory.find("ali").unwrap().cart.is_empty());
        assert_eq!(store.ledger.len(), 1);
    }

    #[test]
    fn test_store_unknown_user() {
        let mut store = ShopStore::seeded();
        assert!(matches!(
            store.add_to_cart("ghost", 101, 1),
            Err(ShopError::UserNotFound(_))
        ));
        assert!(matches!(
            store.cart_total("ghost"),
            Err(ShopError::UserNotFound(_))
        ));
    }

    #[test]
    fn test_remove_from_cart_via_store() {
        let mut store = ShopStore::seeded();
        store.directory.register("ali", "pw").unwrap();
        store.add_to_cart("ali", 101, 1).unwrap();
        store.add_to_cart("ali", 101, 2).unwrap();

        assert_eq!(store.remove_from_cart("ali", 101).unwrap(), 2);
        assert_eq!(store.remove_from_cart("ali", 101).unwrap(), 0);
    }
}
