//! # souq-core: Pure Business Logic for Souq
//!
//! This crate is the **heart** of the Souq shop simulation. It contains all
//! business logic as pure, synchronous functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Souq Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Presentation layer (external)                      │   │
//! │  │    routing ──► page rendering ──► session identity              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ synchronous calls                      │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    souq-api (boundary)                          │   │
//! │  │    validated inputs, role gates, view-models, shared state      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                ★ souq-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────────────┐  │   │
//! │  │   │ catalog  │ │   cart   │ │ checkout │ │ directory/ledger │  │   │
//! │  │   │ Products │ │ ceilings │ │ commit   │ │ Identities       │  │   │
//! │  │   │ + offers │ │ + totals │ │ + orders │ │ Orders           │  │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Offer, Identity, Order, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Boundary input validation rules
//! - [`catalog`] - The set of sellable products and their offer metadata
//! - [`cart`] - The offer-aware cart engine (ceilings and totals)
//! - [`checkout`] - Converts a validated cart into an immutable order
//! - [`directory`] - Registered identities and their carts
//! - [`ledger`] - Append-only list of completed orders
//! - [`store`] - Composition of the above plus seed data
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic apart from order
//!    timestamps taken at commit time
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid
//!    float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use souq_core::money::Money;
//! use souq_core::types::DiscountRate;
//!
//! // Create money from cents (never from floats!)
//! let price = Money::from_cents(85_000); // $850.00
//!
//! // A 20% promotional discount
//! let rate = DiscountRate::from_percentage(20.0);
//! let effective = price.discounted_by(rate);
//!
//! assert_eq!(effective.cents(), 68_000); // $680.00
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod directory;
pub mod error;
pub mod ledger;
pub mod money;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use souq_core::Money` instead of
// `use souq_core::money::Money`

pub use catalog::Catalog;
pub use checkout::CheckoutReceipt;
pub use directory::AccountDirectory;
pub use error::{ShopError, ShopResult, ValidationError};
pub use ledger::OrderLedger;
pub use money::Money;
pub use store::ShopStore;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// The id assigned to the first order ever committed.
///
/// ## Why 100?
/// Order numbers are customer-facing; starting above zero keeps early order
/// ids from looking like test data. Ids are allocated by an explicit
/// monotonic counter in [`ledger::OrderLedger`], never derived from the
/// ledger's length, so they stay unique even if ledger filtering is ever
/// introduced.
pub const FIRST_ORDER_ID: u64 = 100;

/// Maximum quantity accepted for a single add-to-cart request.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
/// Stock and offer-limit ceilings apply on top of this.
pub const MAX_LINE_QUANTITY: u32 = 999;
