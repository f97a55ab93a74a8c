//! # Admin Operations
//!
//! Product edits, offer management and the order list. Authorization is
//! binary and happens HERE: every operation takes the acting username and
//! rejects non-admins before touching the core (the core performs no role
//! checks of its own).

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use souq_core::validation::{
    validate_discount_percentage, validate_price_cents, validate_product_name,
};
use souq_core::{DiscountRate, Money, Offer, ShopError, ShopStore};

use crate::error::ApiError;
use crate::state::SharedShop;
use crate::view::{OrderView, ProductView};

/// Partial product edit. Absent fields are left untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditProductInput {
    /// Username of the acting identity (must be Admin).
    pub acting_user: String,
    pub product_id: u32,
    pub name: Option<String>,
    pub price_cents: Option<i64>,
    pub stock: Option<u32>,
}

/// Offer replacement. The whole offer sub-record is overwritten atomically.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyOfferInput {
    /// Username of the acting identity (must be Admin).
    pub acting_user: String,
    pub product_id: u32,
    /// Percentage 0..=100 (0 = no discount). Fractions allowed.
    #[serde(default)]
    pub discount_pct: f64,
    /// Gift label; empty strings are normalized to none.
    #[serde(default)]
    pub gift: Option<String>,
    /// Per-identity purchase limit (0 = unbounded).
    #[serde(default)]
    pub limit: u32,
}

/// Checks the acting identity's role under the lock. Authorization lives at
/// this layer only; the core never inspects roles.
fn require_admin(shop: &ShopStore, acting_user: &str, operation: &str) -> Result<(), ApiError> {
    let identity = shop.directory.find(acting_user).ok_or_else(|| {
        warn!(acting_user, operation, "admin gate: unknown user");
        ApiError::from(ShopError::UserNotFound(acting_user.to_string()))
    })?;
    if !identity.is_admin() {
        warn!(acting_user, operation, "admin gate: role check failed");
        return Err(ApiError::unauthorized(operation));
    }
    Ok(())
}

/// Updates a product's name/price/stock. Validation happens before the
/// permissive catalog is touched, so invalid states (negative price, blank
/// name) cannot persist.
pub fn edit_product(shop: &SharedShop, input: EditProductInput) -> Result<ProductView, ApiError> {
    debug!(acting_user = %input.acting_user, product_id = input.product_id, "edit_product operation");

    if let Some(name) = &input.name {
        validate_product_name(name).map_err(ShopError::from)?;
    }
    if let Some(cents) = input.price_cents {
        validate_price_cents(cents).map_err(ShopError::from)?;
    }

    shop.with_shop_mut(|store| {
        require_admin(store, &input.acting_user, "edit_product")?;

        store
            .catalog
            .edit_fields(
                input.product_id,
                input.name.clone(),
                input.price_cents.map(Money::from_cents),
                input.stock,
            )
            .map_err(ApiError::from)?;

        let product = store
            .catalog
            .find(input.product_id)
            .expect("edited product exists");
        info!(product_id = product.id, "product edited");
        Ok(ProductView::from(product))
    })
}

/// Replaces a product's offer.
pub fn apply_offer(shop: &SharedShop, input: ApplyOfferInput) -> Result<ProductView, ApiError> {
    debug!(
        acting_user = %input.acting_user,
        product_id = input.product_id,
        discount_pct = input.discount_pct,
        limit = input.limit,
        "apply_offer operation"
    );

    validate_discount_percentage(input.discount_pct).map_err(ShopError::from)?;

    // Empty gift strings come from blank form fields.
    let gift = input.gift.as_deref().map(str::trim).filter(|g| !g.is_empty());

    let offer = Offer {
        discount: DiscountRate::from_percentage(input.discount_pct),
        gift: gift.map(str::to_string),
        limit: input.limit,
    };

    shop.with_shop_mut(|store| {
        require_admin(store, &input.acting_user, "apply_offer")?;

        store
            .catalog
            .apply_offer(input.product_id, offer)
            .map_err(ApiError::from)?;

        let product = store
            .catalog
            .find(input.product_id)
            .expect("offered product exists");
        info!(product_id = product.id, has_offer = product.has_offer(), "offer applied");
        Ok(ProductView::from(product))
    })
}

/// The full order ledger, oldest first, for the admin dashboard.
pub fn list_orders(shop: &SharedShop, acting_user: &str) -> Result<Vec<OrderView>, ApiError> {
    debug!(acting_user, "list_orders operation");

    shop.with_shop(|store| {
        require_admin(store, acting_user, "list_orders")?;
        Ok(store.ledger.orders().iter().map(OrderView::from).collect())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::ops::cart::{add_to_cart, AddToCartInput};
    use crate::ops::checkout::{checkout, CheckoutInput};

    fn shop() -> SharedShop {
        let mut store = ShopStore::seeded();
        store.directory.register("ali", "pw").unwrap();
        SharedShop::new(store)
    }

    fn offer_input(acting_user: &str, product_id: u32, pct: f64, limit: u32) -> ApplyOfferInput {
        ApplyOfferInput {
            acting_user: acting_user.to_string(),
            product_id,
            discount_pct: pct,
            gift: None,
            limit,
        }
    }

    #[test]
    fn test_edit_product_partial() {
        let shop = shop();
        let view = edit_product(
            &shop,
            EditProductInput {
                acting_user: "admin".to_string(),
                product_id: 201,
                name: None,
                price_cents: Some(2_500),
                stock: None,
            },
        )
        .unwrap();

        assert_eq!(view.name, "Cotton T-Shirt"); // untouched
        assert_eq!(view.price_cents, 2_500); // updated
        assert_eq!(view.stock, 100); // untouched
    }

    #[test]
    fn test_edit_product_validation() {
        let shop = shop();
        let err = edit_product(
            &shop,
            EditProductInput {
                acting_user: "admin".to_string(),
                product_id: 201,
                name: None,
                price_cents: Some(-100),
                stock: None,
            },
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        // Invalid input never reached the permissive catalog.
        shop.with_shop(|s| assert_eq!(s.catalog.find(201).unwrap().price.cents(), 2_000));
    }

    #[test]
    fn test_role_gate() {
        let shop = shop();

        let err = apply_offer(&shop, offer_input("ali", 104, 10.0, 0)).unwrap_err();
        assert_eq!(err.code, ErrorCode::Unauthorized);

        let err = list_orders(&shop, "ali").unwrap_err();
        assert_eq!(err.code, ErrorCode::Unauthorized);

        // Both seeded identities are admins.
        assert!(apply_offer(&shop, offer_input("place", 104, 10.0, 0)).is_ok());
    }

    #[test]
    fn test_apply_offer_normalizes_and_overwrites() {
        let shop = shop();

        let view = apply_offer(
            &shop,
            ApplyOfferInput {
                acting_user: "admin".to_string(),
                product_id: 104,
                discount_pct: 20.0,
                gift: Some("  ".to_string()), // blank form field
                limit: 3,
            },
        )
        .unwrap();
        assert_eq!(view.gift, None);
        assert_eq!(view.new_price_cents, 28_000);
        assert!(view.has_offer);

        // A follow-up offer replaces the record wholesale.
        let view = apply_offer(&shop, offer_input("admin", 104, 0.0, 0)).unwrap();
        assert!(!view.has_offer);
        assert_eq!(view.new_price_cents, 35_000);
    }

    #[test]
    fn test_apply_offer_rejects_out_of_range_discount() {
        let shop = shop();
        let err = apply_offer(&shop, offer_input("admin", 104, 150.0, 0)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_list_orders_after_checkout() {
        let shop = shop();
        add_to_cart(
            &shop,
            AddToCartInput {
                username: "ali".to_string(),
                product_id: 506,
                qty: 1,
            },
        )
        .unwrap();
        checkout(
            &shop,
            CheckoutInput {
                username: "ali".to_string(),
                address: "12 Harbor St".to_string(),
                payment_method: "Online Payment".to_string(),
            },
        )
        .unwrap();

        let orders = list_orders(&shop, "admin").unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].id, 100);
        assert_eq!(orders[0].customer, "ali");
        assert_eq!(orders[0].items, vec!["Backpack x1"]);
        assert_eq!(orders[0].total_cents, 4_500);
    }
}
