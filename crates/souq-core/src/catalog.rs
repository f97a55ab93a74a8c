//! # Catalog
//!
//! The set of sellable products and their offer metadata.
//!
//! ## Mutation Policy
//! Products are never deleted; the only mutations are admin field edits,
//! admin offer changes, and stock decrements performed by the checkout
//! engine. The catalog itself is deliberately **permissive**: it does not
//! range-check discounts or reject negative-looking input because the
//! boundary layer validates before calling in (documented contract, see
//! `souq_api::ops::admin`).

use crate::error::{ShopError, ShopResult};
use crate::money::Money;
use crate::types::{Offer, Product};

/// Ordered collection of products, looked up by stable id.
///
/// Backed by a `Vec` in seed order: the catalog is small (tens of products)
/// and listing order matters to the storefront, so linear lookup beats an
/// index map here.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Catalog {
            products: Vec::new(),
        }
    }

    /// Creates a catalog from an initial product list (seed data, tests).
    pub fn with_products(products: Vec<Product>) -> Self {
        Catalog { products }
    }

    /// Adds a product. Caller is responsible for id uniqueness; this is
    /// only reachable from seeding.
    pub fn insert(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Looks up a product by id.
    pub fn find(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Looks up a product by id for mutation.
    pub fn find_mut(&mut self, id: u32) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.id == id)
    }

    /// All products in seed order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Overwrites a product's offer sub-record atomically.
    ///
    /// Permissive: no discount range validation at this layer; the boundary
    /// rejects out-of-range percentages before they get here.
    pub fn apply_offer(&mut self, id: u32, offer: Offer) -> ShopResult<()> {
        let product = self.find_mut(id).ok_or(ShopError::ProductNotFound(id))?;
        product.offer = offer;
        Ok(())
    }

    /// Updates a product's basic fields. Absent fields are no-ops.
    ///
    /// Permissive on bounds beyond what the types enforce; callers must
    /// validate non-negativity of the price before calling.
    pub fn edit_fields(
        &mut self,
        id: u32,
        name: Option<String>,
        price: Option<Money>,
        stock: Option<u32>,
    ) -> ShopResult<()> {
        let product = self.find_mut(id).ok_or(ShopError::ProductNotFound(id))?;
        if let Some(name) = name {
            product.name = name;
        }
        if let Some(price) = price {
            product.price = price;
        }
        if let Some(stock) = stock {
            product.stock = stock;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DiscountRate;

    fn sample_catalog() -> Catalog {
        Catalog::with_products(vec![
            Product::new(101, "Laptop HP Pavilion", Money::from_major(850), 10, "Electronics"),
            Product::new(201, "Cotton T-Shirt", Money::from_major(20), 100, "Clothing"),
        ])
    }

    #[test]
    fn test_find_by_id() {
        let catalog = sample_catalog();
        assert_eq!(catalog.find(101).unwrap().name, "Laptop HP Pavilion");
        assert!(catalog.find(999).is_none());
    }

    #[test]
    fn test_apply_offer_overwrites_whole_record() {
        let mut catalog = sample_catalog();

        let first = Offer {
            discount: DiscountRate::from_percentage(20.0),
            gift: Some("Sleeve".to_string()),
            limit: 3,
        };
        catalog.apply_offer(101, first).unwrap();

        // A later offer with no gift must clear the previous gift.
        let second = Offer {
            discount: DiscountRate::from_percentage(5.0),
            gift: None,
            limit: 0,
        };
        catalog.apply_offer(101, second.clone()).unwrap();
        assert_eq!(catalog.find(101).unwrap().offer, second);

        assert!(matches!(
            catalog.apply_offer(999, Offer::none()),
            Err(ShopError::ProductNotFound(999))
        ));
    }

    #[test]
    fn test_edit_fields_partial_update() {
        let mut catalog = sample_catalog();

        catalog
            .edit_fields(201, None, Some(Money::from_major(25)), None)
            .unwrap();

        let shirt = catalog.find(201).unwrap();
        assert_eq!(shirt.name, "Cotton T-Shirt"); // untouched
        assert_eq!(shirt.price, Money::from_major(25)); // updated
        assert_eq!(shirt.stock, 100); // untouched

        catalog
            .edit_fields(201, Some("Premium T-Shirt".to_string()), None, Some(80))
            .unwrap();
        let shirt = catalog.find(201).unwrap();
        assert_eq!(shirt.name, "Premium T-Shirt");
        assert_eq!(shirt.stock, 80);
    }
}
