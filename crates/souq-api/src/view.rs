//! # View-Models
//!
//! JSON-ready shapes handed to the presentation layer.
//!
//! ## Why DTOs?
//! - Decouples the internal domain model from the API contract
//! - Pre-computes derived fields (effective price, has-offer flag) so
//!   templates never do money math
//! - Handles serde rename to camelCase for JS consumption
//!
//! Everything here is a snapshot taken under the store lock; a view never
//! holds a live reference into the shop.

use serde::{Deserialize, Serialize};

use souq_core::{Cart, Catalog, Order, PaymentStatus, Product, Role, ShopError, ShopResult};

// =============================================================================
// Product Views
// =============================================================================

/// One catalog entry as the storefront sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    pub id: u32,
    pub name: String,
    pub price_cents: i64,
    pub stock: u32,
    pub category: String,
    /// Discount as a percentage (0 = none), for display.
    pub discount_pct: f64,
    pub gift: Option<String>,
    /// Per-identity purchase limit (0 = unbounded).
    pub limit: u32,
    /// Effective unit price after the discount.
    pub new_price_cents: i64,
    pub has_offer: bool,
}

impl From<&Product> for ProductView {
    fn from(p: &Product) -> Self {
        ProductView {
            id: p.id,
            name: p.name.clone(),
            price_cents: p.price.cents(),
            stock: p.stock,
            category: p.category.clone(),
            discount_pct: p.offer.discount.percentage(),
            gift: p.offer.gift.clone(),
            limit: p.offer.limit,
            new_price_cents: p.effective_price().cents(),
            has_offer: p.has_offer(),
        }
    }
}

/// Product page payload: the product plus this identity's cart context.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetailView {
    pub product: ProductView,

    /// Units of this product already across the identity's cart lines.
    pub current_in_cart: u32,

    /// Ceiling for the next add-to-cart call. Zero when the offer limit is
    /// exhausted (the add itself would be rejected with a message).
    pub max_addable: u32,

    /// Remaining offer allowance; `None` when the offer has no limit.
    pub remaining_limit: Option<u32>,
}

// =============================================================================
// Cart Views
// =============================================================================

/// One cart line resolved against the live catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineView {
    pub product_id: u32,
    pub name: String,
    pub qty: u32,
    /// Effective (discounted) unit price right now.
    pub unit_price_cents: i64,
    /// Discounted `price × qty` for this line.
    pub line_total_cents: i64,
}

/// The identity's cart with its live total.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    /// Number of line entries (duplicates for one product count separately).
    pub line_count: usize,
    pub total_cents: i64,
}

impl CartView {
    /// Resolves a cart against the catalog. Discounts are read live, so the
    /// same cart renders differently after an admin changes an offer.
    pub fn resolve(catalog: &Catalog, cart: &Cart) -> ShopResult<CartView> {
        let mut lines = Vec::with_capacity(cart.lines.len());
        for line in &cart.lines {
            let product = catalog
                .find(line.product_id)
                .ok_or(ShopError::ProductNotFound(line.product_id))?;
            let line_total = souq_core::cart::line_subtotal(product, line.qty);
            lines.push(CartLineView {
                product_id: product.id,
                name: product.name.clone(),
                qty: line.qty,
                unit_price_cents: product.effective_price().cents(),
                line_total_cents: line_total.cents(),
            });
        }
        let total_cents = souq_core::cart::cart_total(catalog, cart)?.cents();
        Ok(CartView {
            line_count: lines.len(),
            lines,
            total_cents,
        })
    }
}

// =============================================================================
// Session / Checkout / Order Views
// =============================================================================

/// Returned by login and register; the presentation layer stores this in its
/// session however it likes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub username: String,
    pub role: Role,
}

/// Successful checkout payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutView {
    pub order_id: u64,
    pub total_cents: i64,
    pub payment_status: PaymentStatus,
}

/// One ledger entry for the admin order list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderView {
    pub id: u64,
    pub customer: String,
    pub items: Vec<String>,
    pub total_cents: i64,
    pub address: String,
    pub payment_method: String,
    pub payment_status: PaymentStatus,
    /// RFC 3339 commit timestamp.
    pub created_at: String,
}

impl From<&Order> for OrderView {
    fn from(order: &Order) -> Self {
        OrderView {
            id: order.id,
            customer: order.customer.clone(),
            items: order.items.clone(),
            total_cents: order.total.cents(),
            address: order.address.clone(),
            payment_method: order.payment_method.clone(),
            payment_status: order.payment_status,
            created_at: order.created_at.to_rfc3339(),
        }
    }
}
