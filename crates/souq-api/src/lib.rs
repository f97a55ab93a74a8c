//! # souq-api: Boundary Layer for Souq
//!
//! The operation surface consumed by the presentation layer (request
//! handlers, page rendering, session mechanics — all external to this
//! workspace).
//!
//! ## Module Organization
//! ```text
//! souq_api/
//! ├── lib.rs          ◄─── You are here (exports & tracing setup)
//! ├── state.rs        ◄─── SharedShop: the locked ShopStore
//! ├── config.rs       ◄─── Env-driven configuration
//! ├── view.rs         ◄─── View-models (camelCase, JSON-ready)
//! ├── error.rs        ◄─── ApiError { code, message }
//! └── ops/
//!     ├── auth.rs     ◄─── login, register
//!     ├── products.rs ◄─── list_products, get_product_detail
//!     ├── cart.rs     ◄─── add_to_cart, remove_from_cart, get_cart
//!     ├── checkout.rs ◄─── checkout
//!     └── admin.rs    ◄─── edit_product, apply_offer, list_orders
//! ```
//!
//! ## Responsibilities
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  souq-api does                        souq-api does NOT                 │
//! │  ───────────────────────────────      ─────────────────────────────     │
//! │  • parse/validate input structs       • route HTTP requests             │
//! │  • gate admin operations by role      • render pages                    │
//! │  • hold the store lock per call       • manage session cookies          │
//! │  • translate ShopError → ApiError     • authorize inside the core       │
//! │  • log every operation (tracing)      • persist anything                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every operation is synchronous and acquires the single store lock for its
//! full check-then-act span, which is what makes the limit checks and the
//! checkout re-validation race-free under concurrent callers.

pub mod config;
pub mod error;
pub mod ops;
pub mod state;
pub mod view;

pub use config::{ConfigError, ShopConfig};
pub use error::{ApiError, ErrorCode};
pub use state::SharedShop;

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=souq=trace` - Show trace for souq crates only
/// - Default: INFO overall, DEBUG for souq crates
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,souq=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
