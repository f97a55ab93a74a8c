//! # Checkout Operation

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use souq_core::ShopError;

use crate::error::ApiError;
use crate::state::SharedShop;
use crate::view::CheckoutView;

/// Address used when the checkout form leaves the field blank: the customer
/// collects the order in person.
pub const BRANCH_PICKUP_ADDRESS: &str = "Branch pickup";

/// Checkout request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutInput {
    pub username: String,
    /// Delivery address; blank means branch pickup.
    #[serde(default)]
    pub address: String,
    /// Payment method label, matched verbatim for status derivation.
    pub payment_method: String,
}

/// Converts the identity's cart into an order.
///
/// Runs entirely under the store lock, so the re-validation pass and the
/// commit pass are atomic against concurrent checkouts: two carts cannot
/// both pass re-validation for the same stock.
pub fn checkout(shop: &SharedShop, input: CheckoutInput) -> Result<CheckoutView, ApiError> {
    debug!(username = %input.username, payment_method = %input.payment_method, "checkout operation");

    let address = if input.address.trim().is_empty() {
        BRANCH_PICKUP_ADDRESS
    } else {
        input.address.trim()
    };

    shop.with_shop_mut(|shop| {
        shop.checkout(&input.username, address, &input.payment_method)
    })
    .map(|receipt| {
        info!(
            username = %input.username,
            order_id = receipt.order_id,
            total = %receipt.total,
            status = %receipt.payment_status,
            "checkout committed"
        );
        CheckoutView {
            order_id: receipt.order_id,
            total_cents: receipt.total.cents(),
            payment_status: receipt.payment_status,
        }
    })
    .map_err(|err: ShopError| {
        warn!(username = %input.username, error = %err, "checkout rejected");
        err.into()
    })
}
