//! # Cart Operations

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use souq_core::validation::validate_quantity;
use souq_core::ShopError;

use crate::error::ApiError;
use crate::state::SharedShop;
use crate::view::CartView;

/// Add-to-cart request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartInput {
    pub username: String,
    pub product_id: u32,
    /// Requested quantity; defaults to 1 when the form omits it.
    #[serde(default = "default_qty")]
    pub qty: u32,
}

fn default_qty() -> u32 {
    1
}

/// Appends a new cart line for the product, enforcing the stock and
/// offer-limit ceilings under the store lock (the "already in cart" count
/// and the append are one atomic span).
pub fn add_to_cart(shop: &SharedShop, input: AddToCartInput) -> Result<CartView, ApiError> {
    debug!(username = %input.username, product_id = input.product_id, qty = input.qty, "add_to_cart operation");

    validate_quantity(input.qty).map_err(ShopError::from)?;

    shop.with_shop_mut(|shop| {
        shop.add_to_cart(&input.username, input.product_id, input.qty)?;
        let identity = shop
            .directory
            .find(&input.username)
            .ok_or_else(|| ShopError::UserNotFound(input.username.clone()))?;
        CartView::resolve(&shop.catalog, &identity.cart)
    })
    .map(|view| {
        info!(username = %input.username, product_id = input.product_id, qty = input.qty, lines = view.line_count, "added to cart");
        view
    })
    .map_err(|err: ShopError| {
        warn!(username = %input.username, product_id = input.product_id, error = %err, "add_to_cart rejected");
        err.into()
    })
}

/// Removes **all** lines for the product from the identity's cart. Removing
/// a product that isn't in the cart is a no-op success.
pub fn remove_from_cart(
    shop: &SharedShop,
    username: &str,
    product_id: u32,
) -> Result<CartView, ApiError> {
    debug!(username, product_id, "remove_from_cart operation");

    shop.with_shop_mut(|shop| {
        let removed = shop.remove_from_cart(username, product_id)?;
        info!(username, product_id, removed, "removed from cart");
        let identity = shop
            .directory
            .find(username)
            .ok_or_else(|| ShopError::UserNotFound(username.to_string()))?;
        CartView::resolve(&shop.catalog, &identity.cart)
    })
    .map_err(|err: ShopError| err.into())
}

/// The identity's cart with live pricing.
pub fn get_cart(shop: &SharedShop, username: &str) -> Result<CartView, ApiError> {
    debug!(username, "get_cart operation");

    shop.with_shop(|shop| {
        let identity = shop
            .directory
            .find(username)
            .ok_or_else(|| ShopError::UserNotFound(username.to_string()))?;
        CartView::resolve(&shop.catalog, &identity.cart)
    })
    .map_err(|err: ShopError| err.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use souq_core::{DiscountRate, Offer, ShopStore};

    fn shop() -> SharedShop {
        let mut store = ShopStore::seeded();
        store.directory.register("ali", "pw").unwrap();
        SharedShop::new(store)
    }

    fn add(username: &str, product_id: u32, qty: u32) -> AddToCartInput {
        AddToCartInput {
            username: username.to_string(),
            product_id,
            qty,
        }
    }

    #[test]
    fn test_add_and_view_cart() {
        let shop = shop();

        let view = add_to_cart(&shop, add("ali", 106, 2)).unwrap(); // Mouse $40
        assert_eq!(view.line_count, 1);
        assert_eq!(view.total_cents, 8_000);

        // Same product again: second independent line.
        let view = add_to_cart(&shop, add("ali", 106, 1)).unwrap();
        assert_eq!(view.line_count, 2);
        assert_eq!(view.total_cents, 12_000);

        let view = get_cart(&shop, "ali").unwrap();
        assert_eq!(view.lines.len(), 2);
    }

    #[test]
    fn test_add_rejections_cite_ceiling() {
        let shop = shop();

        // Zero quantity never reaches the engine.
        let err = add_to_cart(&shop, add("ali", 106, 0)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        // Over stock: engine rejection with the computed ceiling.
        let err = add_to_cart(&shop, add("ali", 403, 6)).unwrap_err(); // stock 5
        assert_eq!(err.code, ErrorCode::InvalidQuantity);
        assert!(err.message.contains("maximum is 5"), "{}", err.message);
    }

    #[test]
    fn test_offer_limit_flow_through_boundary() {
        let shop = shop();
        shop.with_shop_mut(|s| {
            s.catalog
                .apply_offer(
                    104,
                    Offer {
                        discount: DiscountRate::from_percentage(20.0),
                        gift: None,
                        limit: 3,
                    },
                )
                .unwrap();
        });

        add_to_cart(&shop, add("ali", 104, 3)).unwrap();
        let err = add_to_cart(&shop, add("ali", 104, 1)).unwrap_err();
        assert_eq!(err.code, ErrorCode::OfferLimitExhausted);
        assert!(err.message.contains('3'), "{}", err.message);
    }

    #[test]
    fn test_remove_clears_all_lines_for_product() {
        let shop = shop();
        add_to_cart(&shop, add("ali", 106, 1)).unwrap();
        add_to_cart(&shop, add("ali", 106, 2)).unwrap();
        add_to_cart(&shop, add("ali", 507, 1)).unwrap();

        let view = remove_from_cart(&shop, "ali", 106).unwrap();
        assert_eq!(view.line_count, 1);
        assert_eq!(view.lines[0].product_id, 507);

        // Absent product: no-op success.
        let view = remove_from_cart(&shop, "ali", 106).unwrap();
        assert_eq!(view.line_count, 1);
    }

    #[test]
    fn test_unknown_user() {
        let shop = shop();
        assert_eq!(
            get_cart(&shop, "ghost").unwrap_err().code,
            ErrorCode::NotFound
        );
    }
}
