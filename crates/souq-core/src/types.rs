//! # Domain Types
//!
//! Core domain types used throughout Souq.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    Identity     │   │     Order       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (u32)       │   │  username       │   │  id (u64)       │       │
//! │  │  price (Money)  │   │  role           │   │  customer       │       │
//! │  │  stock          │   │  cart           │   │  items (text)   │       │
//! │  │  offer          │   └─────────────────┘   │  total, status  │       │
//! │  └─────────────────┘                         └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  DiscountRate   │   │      Role       │   │ PaymentStatus   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  bps (u32)      │   │  Admin          │   │  Paid           │       │
//! │  │  2000 = 20%     │   │  Customer       │   │  UponDelivery   │       │
//! │  └─────────────────┘   └─────────────────┘   │  Pending        │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Reference vs Snapshot
//! Cart lines reference products **by id** and are resolved live against the
//! catalog on every read, so offer changes retroactively affect displayed
//! totals. Orders snapshot everything (customer name, item descriptions,
//! total) and never hold live references.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Discount Rate
// =============================================================================

/// Promotional discount rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 2000 bps = 20%. Admin input arrives as a percentage (possibly
/// fractional); storing bps keeps all later math in integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// Creates a discount rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        DiscountRate(bps)
    }

    /// Creates a discount rate from a percentage (admin input form).
    pub fn from_percentage(pct: f64) -> Self {
        DiscountRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero discount rate.
    #[inline]
    pub const fn zero() -> Self {
        DiscountRate(0)
    }

    /// Checks if the rate is zero (no discount).
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for DiscountRate {
    fn default() -> Self {
        DiscountRate::zero()
    }
}

// =============================================================================
// Offer
// =============================================================================

/// A product-level promotion: a discount percentage, an optional gift label,
/// and an optional purchase-quantity limit.
///
/// ## Limit Semantics
/// `limit == 0` means unbounded. A positive limit caps the total quantity of
/// the product one identity may hold in their cart, independent of stock.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Offer {
    /// Discount rate (zero = none).
    pub discount: DiscountRate,

    /// Free gift bundled with the purchase ("Free Mouse Pad").
    pub gift: Option<String>,

    /// Per-identity purchase limit while the offer runs (0 = unbounded).
    pub limit: u32,
}

impl Offer {
    /// An inactive offer: no discount, no gift, no limit.
    pub const fn none() -> Self {
        Offer {
            discount: DiscountRate::zero(),
            gift: None,
            limit: 0,
        }
    }

    /// Whether this offer should be surfaced to customers.
    ///
    /// A pure purchase limit without discount or gift is not an offer.
    pub fn is_active(&self) -> bool {
        !self.discount.is_zero() || self.gift.is_some()
    }
}

// =============================================================================
// Product
// =============================================================================

/// A sellable product in the catalog.
///
/// Products are mutated only by admin edit/offer operations and are never
/// deleted. Stock is decremented exclusively by checkout.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique, stable identifier.
    pub id: u32,

    /// Display name shown in listings and order snapshots.
    pub name: String,

    /// Unit price before any discount. Non-negative.
    pub price: Money,

    /// Units currently in stock. Invariant: never goes negative (enforced
    /// by the checkout re-validation pass).
    pub stock: u32,

    /// Category label ("Electronics", "Clothing", ...).
    pub category: String,

    /// Current promotional offer (default: none).
    pub offer: Offer,
}

impl Product {
    /// Creates a product with no active offer.
    pub fn new(id: u32, name: &str, price: Money, stock: u32, category: &str) -> Self {
        Product {
            id,
            name: name.to_string(),
            price,
            stock,
            category: category.to_string(),
            offer: Offer::none(),
        }
    }

    /// The unit price after the current discount.
    ///
    /// `effective_price = price × (1 − discount/100)`, exact in cents.
    #[inline]
    pub fn effective_price(&self) -> Money {
        self.price.discounted_by(self.offer.discount)
    }

    /// Whether the product carries a customer-visible offer.
    #[inline]
    pub fn has_offer(&self) -> bool {
        self.offer.is_active()
    }
}

// =============================================================================
// Role
// =============================================================================

/// Authorization role for an identity.
///
/// Authorization is binary and checked at the boundary; the core never
/// inspects roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// May edit products and apply offers.
    Admin,
    /// May browse, fill a cart and check out.
    Customer,
}

// =============================================================================
// Cart
// =============================================================================

/// One requested line in a cart: a product reference and a quantity.
///
/// Lines reference the product by id, never by copy: prices and discounts
/// are always read live from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartLine {
    pub product_id: u32,
    /// Requested quantity, always positive.
    pub qty: u32,
}

/// A mutable, per-identity shopping cart.
///
/// ## Duplicate Lines
/// Repeated add-to-cart calls for the same product append independent lines
/// rather than merging. This mirrors the long-standing storefront behavior;
/// quantity checks always aggregate across lines, so the duplication is
/// purely representational.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Cart {
    pub lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Total quantity of one product across all lines (duplicates included).
    pub fn quantity_of(&self, product_id: u32) -> u32 {
        self.lines
            .iter()
            .filter(|line| line.product_id == product_id)
            .map(|line| line.qty)
            .sum()
    }

    /// Number of line entries (not unique products).
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Checks if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Removes **all** lines referencing the product id.
    ///
    /// Returns the number of removed lines; removing an absent product is a
    /// no-op, not an error.
    pub fn remove_product(&mut self, product_id: u32) -> usize {
        let before = self.lines.len();
        self.lines.retain(|line| line.product_id != product_id);
        before - self.lines.len()
    }

    /// Drops every line. Called by checkout after a successful commit.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

// =============================================================================
// Identity
// =============================================================================

/// A registered identity: credentials, role, and an owned mutable cart.
///
/// Passwords are stored in plain text: hashing is explicitly out of scope
/// for this simulation.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Identity {
    /// Unique username (directory key).
    pub username: String,

    /// Credential secret, compared verbatim on login.
    pub password: String,

    pub role: Role,

    /// The identity's current cart. Cleared by checkout.
    pub cart: Cart,
}

impl Identity {
    /// Creates an identity with an empty cart.
    pub fn new(username: &str, password: &str, role: Role) -> Self {
        Identity {
            username: username.to_string(),
            password: password.to_string(),
            role,
            cart: Cart::new(),
        }
    }

    /// Checks whether this identity may call admin operations.
    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

// =============================================================================
// Payment Status
// =============================================================================

/// Settlement state of an order, derived purely from the chosen payment
/// method at checkout time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Paid at checkout ("Online Payment").
    Paid,
    /// Settled at the door ("Cash on Delivery", "Visa on Delivery").
    UponDelivery,
    /// Anything unrecognized defaults to pending settlement.
    Pending,
}

impl PaymentStatus {
    /// Derives the status from the payment method string.
    ///
    /// Pure function of the method; matching is exact, not normalized, so
    /// the recognized labels must be passed verbatim by the caller.
    pub fn from_method(method: &str) -> Self {
        match method {
            "Online Payment" => PaymentStatus::Paid,
            "Cash on Delivery" | "Visa on Delivery" => PaymentStatus::UponDelivery,
            _ => PaymentStatus::Pending,
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::UponDelivery => "Upon Delivery",
            PaymentStatus::Pending => "Pending",
        };
        f.write_str(text)
    }
}

// =============================================================================
// Order
// =============================================================================

/// A completed order. Immutable once appended to the ledger.
///
/// Uses the snapshot pattern throughout: the customer name is a string, the
/// items are human-readable description strings frozen at commit time, and
/// the total reflects the discounts in force at that moment.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Order {
    /// Monotonically assigned identifier (see `OrderLedger`).
    pub id: u64,

    /// Username snapshot, not a live directory reference.
    pub customer: String,

    /// Item descriptions frozen at commit time ("Blue Jeans x2").
    pub items: Vec<String>,

    /// Total charged, after per-line discounts.
    pub total: Money,

    /// Delivery address as supplied at checkout.
    pub address: String,

    /// Payment method string, verbatim as supplied.
    pub payment_method: String,

    pub payment_status: PaymentStatus,

    /// Commit timestamp.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount_rate_from_percentage() {
        assert_eq!(DiscountRate::from_percentage(20.0).bps(), 2000);
        assert_eq!(DiscountRate::from_percentage(8.25).bps(), 825);
        assert_eq!(DiscountRate::from_percentage(0.0).bps(), 0);
    }

    #[test]
    fn test_offer_activity() {
        assert!(!Offer::none().is_active());

        let discount_only = Offer {
            discount: DiscountRate::from_percentage(10.0),
            gift: None,
            limit: 0,
        };
        assert!(discount_only.is_active());

        let gift_only = Offer {
            discount: DiscountRate::zero(),
            gift: Some("Free Mouse Pad".to_string()),
            limit: 0,
        };
        assert!(gift_only.is_active());

        // A bare purchase limit is not a customer-visible offer.
        let limit_only = Offer {
            discount: DiscountRate::zero(),
            gift: None,
            limit: 3,
        };
        assert!(!limit_only.is_active());
    }

    #[test]
    fn test_effective_price() {
        let mut product = Product::new(101, "Laptop", Money::from_major(850), 10, "Electronics");
        assert_eq!(product.effective_price(), product.price);

        product.offer.discount = DiscountRate::from_percentage(20.0);
        assert_eq!(product.effective_price().cents(), 68_000);
    }

    #[test]
    fn test_cart_quantity_aggregates_duplicate_lines() {
        let mut cart = Cart::new();
        cart.lines.push(CartLine {
            product_id: 101,
            qty: 2,
        });
        cart.lines.push(CartLine {
            product_id: 202,
            qty: 1,
        });
        cart.lines.push(CartLine {
            product_id: 101,
            qty: 3,
        });

        assert_eq!(cart.quantity_of(101), 5);
        assert_eq!(cart.quantity_of(202), 1);
        assert_eq!(cart.quantity_of(999), 0);
        assert_eq!(cart.line_count(), 3);
    }

    #[test]
    fn test_cart_remove_product_removes_all_lines() {
        let mut cart = Cart::new();
        cart.lines.push(CartLine {
            product_id: 101,
            qty: 2,
        });
        cart.lines.push(CartLine {
            product_id: 202,
            qty: 1,
        });
        cart.lines.push(CartLine {
            product_id: 101,
            qty: 3,
        });

        assert_eq!(cart.remove_product(101), 2);
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.remove_product(101), 0);
    }

    #[test]
    fn test_payment_status_from_method() {
        assert_eq!(
            PaymentStatus::from_method("Online Payment"),
            PaymentStatus::Paid
        );
        assert_eq!(
            PaymentStatus::from_method("Cash on Delivery"),
            PaymentStatus::UponDelivery
        );
        assert_eq!(
            PaymentStatus::from_method("Visa on Delivery"),
            PaymentStatus::UponDelivery
        );
        assert_eq!(
            PaymentStatus::from_method("Carrier Pigeon"),
            PaymentStatus::Pending
        );
        // Exact match only: casing matters.
        assert_eq!(
            PaymentStatus::from_method("online payment"),
            PaymentStatus::Pending
        );
    }

    #[test]
    fn test_payment_status_display() {
        assert_eq!(PaymentStatus::UponDelivery.to_string(), "Upon Delivery");
    }

    #[test]
    fn test_product_serializes_with_offer() {
        let mut product = Product::new(104, "Sony WH-1000XM5", Money::from_major(350), 15, "Electronics");
        product.offer = Offer {
            discount: DiscountRate::from_percentage(10.0),
            gift: Some("Carry Case".to_string()),
            limit: 2,
        };

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["id"], 104);
        assert_eq!(json["offer"]["limit"], 2);
        assert_eq!(json["offer"]["gift"], "Carry Case");
    }
}
