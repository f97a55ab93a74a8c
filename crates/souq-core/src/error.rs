//! # Error Types
//!
//! Domain-specific error types for souq-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  souq-core errors (this file)                                           │
//! │  ├── ShopError        - Business rule violations                        │
//! │  └── ValidationError  - Input validation failures                       │
//! │                                                                         │
//! │  souq-api errors (separate crate)                                       │
//! │  └── ApiError         - What the presentation layer sees (serialized)   │
//! │                                                                         │
//! │  Flow: ValidationError → ShopError → ApiError → presentation layer      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product id, computed ceiling, etc.)
//! 3. Errors are enum variants, never String
//! 4. Every error is recoverable and user-facing; nothing here is fatal to
//!    the process

use thiserror::Error;

// =============================================================================
// Shop Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations or domain logic failures.
/// The boundary layer translates them into user-friendly messages; every
/// rejected mutation names what was violated and, where applicable, the
/// computed limit that caused it.
#[derive(Debug, Error)]
pub enum ShopError {
    /// Product cannot be found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(u32),

    /// Identity cannot be found in the account directory.
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// Requested quantity is zero or exceeds the computed ceiling.
    ///
    /// ## When This Occurs
    /// - Add-to-cart with `qty == 0`
    /// - Add-to-cart with `qty` above `min(stock, remaining offer limit)`
    ///
    /// The `max` field is the ceiling computed at rejection time so the
    /// caller can suggest a valid quantity.
    #[error("Invalid quantity {requested}: allowed maximum is {max}")]
    InvalidQuantity { requested: u32, max: u32 },

    /// The identity has already claimed the full per-offer purchase limit.
    ///
    /// Distinct from [`ShopError::InvalidQuantity`]: when the remaining
    /// limit is zero or less, NO quantity is admissible regardless of stock.
    #[error("Offer limit of {limit} already reached for this product")]
    OfferLimitExhausted { limit: u32 },

    /// Checkout attempted on an empty cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// A cart line (or several lines combined) asks for more units than the
    /// product currently has in stock.
    ///
    /// ## When This Occurs
    /// Stock is decremented at checkout, not at add-to-cart, so time may
    /// have passed and other checkouts may have consumed stock since the
    /// cart was filled. The re-validation pass aborts the entire checkout
    /// on the first violation; no stock is touched.
    #[error("Insufficient stock for {name}: available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        available: u32,
        requested: u32,
    },

    /// Registration attempted with a username that already exists.
    #[error("Username '{0}' already exists")]
    DuplicateUsername(String),

    /// Login failed. Deliberately uniform: callers cannot distinguish an
    /// unknown user from a wrong password.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when boundary input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ShopError.
pub type ShopResult<T> = Result<T, ShopError>;

// =============================================================================
// Unit Tests
// =============================================================================
