//! # Checkout/Order Engine
//!
//! Converts a validated cart into an immutable order, decrementing
//! inventory. This is the second half of the core.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        checkout(cart, …)                                │
//! │                                                                         │
//! │  1. cart empty? ────────────────────────► Err(EmptyCart)                │
//! │  2. re-validate: Σ qty per product ≤ current stock                      │
//! │        any violation ───────────────────► Err(InsufficientStock),       │
//! │                                            NOTHING mutated              │
//! │  3. derive payment status from method (pure)                            │
//! │  4. commit, in cart-line order:                                         │
//! │        stock −= qty                                                     │
//! │        total += discounted line subtotal (current discount)             │
//! │        items += "name xqty" snapshot                                    │
//! │  5. append order (monotonic id, timestamp now)                          │
//! │  6. clear the cart                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All-or-nothing: the aggregate re-validation in step 2 guarantees the
//! commit pass cannot underflow stock, so either every line is applied or
//! none are. The pass aggregates per product id because a cart may hold
//! several lines for one product; checking lines independently would let two
//! lines of 3 pass against a stock of 5.

use std::collections::HashMap;

use chrono::Utc;

use crate::cart::line_subtotal;
use crate::catalog::Catalog;
use crate::error::{ShopError, ShopResult};
use crate::ledger::OrderLedger;
use crate::money::Money;
use crate::types::{Cart, PaymentStatus};

/// Result payload of a successful checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutReceipt {
    pub order_id: u64,
    pub total: Money,
    pub payment_status: PaymentStatus,
}

/// Runs the full checkout state machine over one identity's cart.
///
/// Synchronous and terminal: success commits stock decrements, appends an
/// order to the ledger and clears the cart; failure reports a typed reason
/// and mutates nothing. Serialization against concurrent checkouts is the
/// caller's job (the boundary layer holds the store lock across this call).
pub fn checkout(
    catalog: &mut Catalog,
    cart: &mut Cart,
    ledger: &mut OrderLedger,
    customer: &str,
    address: &str,
    payment_method: &str,
) -> ShopResult<CheckoutReceipt> {
    if cart.is_empty() {
        return Err(ShopError::EmptyCart);
    }

    // Re-validation pass. Stock may have been consumed by other checkouts
    // since the cart was filled, and one product may span several lines, so
    // requested quantities are aggregated per product before comparing.
    let mut requested: HashMap<u32, u32> = HashMap::new();
    for line in &cart.lines {
        *requested.entry(line.product_id).or_insert(0) += line.qty;
    }
    for line in &cart.lines {
        let product = catalog
            .find(line.product_id)
            .ok_or(ShopError::ProductNotFound(line.product_id))?;
        let wanted = requested[&line.product_id];
        if wanted > product.stock {
            return Err(ShopError::InsufficientStock {
                name: product.name.clone(),
                available: product.stock,
                requested: wanted,
            });
        }
    }

    let payment_status = PaymentStatus::from_method(payment_method);

    // Commit pass, in cart-line order. Line subtotals use the product's
    // discount as it stands right now, same as display-time totals.
    let mut total = Money::zero();
    let mut items = Vec::with_capacity(cart.lines.len());
    for line in &cart.lines {
        let product = catalog
            .find_mut(line.product_id)
            .ok_or(ShopError::ProductNotFound(line.product_id))?;
        product.stock -= line.qty;
        total += line_subtotal(product, line.qty);
        items.push(format!("{} x{}", product.name, line.qty));
    }

    let order = ledger.append(
        customer.to_string(),
        items,
        total,
        address.to_string(),
        payment_method.to_string(),
        payment_status,
        Utc::now(),
    );
    let order_id = order.id;

    cart.clear();

    Ok(CheckoutReceipt {
        order_id,
        total,
        payment_status,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
