//! # Product Browsing Operations

use serde::{Deserialize, Serialize};
use tracing::debug;

use souq_core::{cart, ShopError};

use crate::error::ApiError;
use crate::state::SharedShop;
use crate::view::{ProductDetailView, ProductView};

/// Catalog listing filter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListProductsInput {
    /// When true, only products with an active offer (discount or gift).
    #[serde(default)]
    pub offers_only: bool,
}

/// Lists the catalog in seed order, optionally filtered to active offers.
pub fn list_products(shop: &SharedShop, input: ListProductsInput) -> Vec<ProductView> {
    debug!(offers_only = input.offers_only, "list_products operation");

    shop.with_shop(|shop| {
        shop.catalog
            .products()
            .iter()
            .filter(|p| !input.offers_only || p.has_offer())
            .map(ProductView::from)
            .collect()
    })
}

/// Product page payload for one identity: the product view-model plus the
/// current-in-cart count, the add-to-cart ceiling and the remaining offer
/// allowance.
///
/// An exhausted offer limit renders as `max_addable == 0` here; the actual
/// add would be rejected with the offer-limit message.
pub fn get_product_detail(
    shop: &SharedShop,
    username: &str,
    product_id: u32,
) -> Result<ProductDetailView, ApiError> {
    debug!(username, product_id, "get_product_detail operation");

    shop.with_shop(|shop| {
        let identity = shop
            .directory
            .find(username)
            .ok_or_else(|| ShopError::UserNotFound(username.to_string()))?;
        let product = shop
            .catalog
            .find(product_id)
            .ok_or(ShopError::ProductNotFound(product_id))?;

        let current_in_cart = identity.cart.quantity_of(product_id);
        let max_addable = cart::max_addable(product, current_in_cart).unwrap_or(0);
        let remaining_limit = (product.offer.limit > 0)
            .then(|| product.offer.limit.saturating_sub(current_in_cart));

        Ok(ProductDetailView {
            product: ProductView::from(product),
            current_in_cart,
            max_addable,
            remaining_limit,
        })
    })
    .map_err(|err: ShopError| err.into())
}
