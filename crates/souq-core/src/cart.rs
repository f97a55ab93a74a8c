//! # Cart & Offer Engine
//!
//! Decides whether a requested add-to-cart quantity is admissible and
//! computes monetary totals. This is the first half of the core.
//!
//! ## The Ceiling Rule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      max_addable(product, in_cart)                      │
//! │                                                                         │
//! │  no offer limit (limit == 0):                                           │
//! │      ceiling = stock                                                    │
//! │                                                                         │
//! │  offer limit set (limit > 0):                                           │
//! │      remaining = limit − already_in_cart                                │
//! │      remaining ≤ 0  ──►  OfferLimitExhausted (regardless of stock)      │
//! │      otherwise      ──►  ceiling = min(stock, remaining)                │
//! │                                                                         │
//! │  Stock is NOT decremented by adding to cart; the stock ceiling only     │
//! │  reflects what checkout could possibly fulfil right now.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Live Pricing
//! Cart totals re-read price and discount from the catalog on every call.
//! An offer applied *after* a product was added to a cart retroactively
//! changes that cart's displayed total.

use crate::catalog::Catalog;
use crate::error::{ShopError, ShopResult};
use crate::money::Money;
use crate::types::{Cart, CartLine, Product};

/// Computes the maximum quantity of `product` currently addable to a cart
/// that already holds `already_in_cart` units of it.
///
/// Returns the ceiling; callers compare their requested quantity against it.
/// An exhausted offer limit is a rejection ([`ShopError::OfferLimitExhausted`]),
/// not a zero ceiling: no quantity is admissible in that state and the error
/// message must say why.
pub fn max_addable(product: &Product, already_in_cart: u32) -> ShopResult<u32> {
    let mut ceiling = product.stock;

    if product.offer.limit > 0 {
        if already_in_cart >= product.offer.limit {
            return Err(ShopError::OfferLimitExhausted {
                limit: product.offer.limit,
            });
        }
        let remaining = product.offer.limit - already_in_cart;
        ceiling = ceiling.min(remaining);
    }

    Ok(ceiling)
}

/// Appends `qty` units of a product to the cart.
///
/// ## Preconditions
/// `0 < qty ≤ max_addable(product, quantity already in this cart)`.
///
/// ## Effects
/// Appends a **new** line entry; never merges with existing lines for the
/// same product and never touches stock (stock is decremented at checkout).
///
/// ## Failures
/// - unknown product id → [`ShopError::ProductNotFound`]
/// - exhausted offer limit → [`ShopError::OfferLimitExhausted`]
/// - `qty == 0` or `qty` above the ceiling → [`ShopError::InvalidQuantity`]
///   carrying the computed ceiling
pub fn add_to_cart(catalog: &Catalog, cart: &mut Cart, product_id: u32, qty: u32) -> ShopResult<()> {
    let product = catalog
        .find(product_id)
        .ok_or(ShopError::ProductNotFound(product_id))?;

    let ceiling = max_addable(product, cart.quantity_of(product_id))?;

    if qty == 0 || qty > ceiling {
        return Err(ShopError::InvalidQuantity {
            requested: qty,
            max: ceiling,
        });
    }

    cart.lines.push(CartLine { product_id, qty });
    Ok(())
}

/// Computes the cart's total with per-line discounts applied.
///
/// Each line is `price × qty` discounted by the product's *current* rate,
/// read live from the catalog. Unresolvable product ids are an error, though
/// they cannot arise today because products are never deleted.
pub fn cart_total(catalog: &Catalog, cart: &Cart) -> ShopResult<Money> {
    let mut total = Money::zero();
    for line in &cart.lines {
        let product = catalog
            .find(line.product_id)
            .ok_or(ShopError::ProductNotFound(line.product_id))?;
        total += line_subtotal(product, line.qty);
    }
    Ok(total)
}

/// One line's discounted subtotal: `(price × qty)` reduced by the product's
/// current discount. Shared by display totals and the checkout commit pass
/// so both always agree.
#[inline]
pub fn line_subtotal(product: &Product, qty: u32) -> Money {
    product
        .price
        .multiply_quantity(qty)
        .discounted_by(product.offer.discount)
}

// =============================================================================
// Unit Tests
// =============================================================================
