//! # API Error Type
//!
//! Unified error type for boundary operations.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Error Flow in Souq                                 │
//! │                                                                         │
//! │  Presentation layer              souq-api                souq-core      │
//! │  ──────────────────              ────────                ─────────      │
//! │                                                                         │
//! │  add_to_cart(qty: 7) ──────────► validate input                         │
//! │                                       │                                 │
//! │                                       ▼                                 │
//! │                                  engine call ──────────► ShopError::    │
//! │                                       │                  InvalidQuantity│
//! │                                       ▼                                 │
//! │  { code: "INVALID_QUANTITY",  ◄── ApiError::from(ShopError)             │
//! │    message: "Invalid quantity                                           │
//! │    7: allowed maximum is 5" }                                           │
//! │                                                                         │
//! │  The presentation layer shows the message and never crashes on a        │
//! │  core-reported failure.                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use souq_core::ShopError;

/// API error returned from boundary operations.
///
/// ## Serialization
/// This is what the presentation layer receives when an operation fails:
/// ```json
/// {
///   "code": "OFFER_LIMIT_EXHAUSTED",
///   "message": "Offer limit of 3 already reached for this product"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
///
/// One code per entry in the error taxonomy, plus `Unauthorized` (which only
/// exists at this layer — the core performs no authorization) and a fallback
/// `Internal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Unknown product or user
    NotFound,

    /// Role check failed at the boundary
    Unauthorized,

    /// Input failed validation before reaching the core
    ValidationError,

    /// Quantity zero or above the computed ceiling
    InvalidQuantity,

    /// The per-offer purchase limit is used up
    OfferLimitExhausted,

    /// Checkout attempted on an empty cart
    EmptyCart,

    /// Checkout re-validation found a line exceeding current stock
    InsufficientStock,

    /// Registration with a taken username
    DuplicateUsername,

    /// Login failed (uniform for unknown user / wrong password)
    InvalidCredentials,

    /// Anything unexpected
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates an unauthorized error for a gated operation.
    pub fn unauthorized(operation: &str) -> Self {
        ApiError::new(
            ErrorCode::Unauthorized,
            format!("Admin role required for {}", operation),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }
}

/// Converts core errors to API errors. Messages come straight from the
/// `thiserror` display impls so core and boundary never disagree on wording.
impl From<ShopError> for ApiError {
    fn from(err: ShopError) -> Self {
        let code = match &err {
            ShopError::ProductNotFound(_) | ShopError::UserNotFound(_) => ErrorCode::NotFound,
            ShopError::InvalidQuantity { .. } => ErrorCode::InvalidQuantity,
            ShopError::OfferLimitExhausted { .. } => ErrorCode::OfferLimitExhausted,
            ShopError::EmptyCart => ErrorCode::EmptyCart,
            ShopError::InsufficientStock { .. } => ErrorCode::InsufficientStock,
            ShopError::DuplicateUsername(_) => ErrorCode::DuplicateUsername,
            ShopError::InvalidCredentials => ErrorCode::InvalidCredentials,
            ShopError::Validation(_) => ErrorCode::ValidationError,
        };
        ApiError::new(code, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shop_error_mapping() {
        let err: ApiError = ShopError::InvalidQuantity {
            requested: 2,
            max: 1,
        }
        .into();
        assert_eq!(err.code, ErrorCode::InvalidQuantity);
        assert_eq!(err.message, "Invalid quantity 2: allowed maximum is 1");

        let err: ApiError = ShopError::ProductNotFound(999).into();
        assert_eq!(err.code, ErrorCode::NotFound);

        let err: ApiError = ShopError::InvalidCredentials.into();
        assert_eq!(err.code, ErrorCode::InvalidCredentials);
    }

    #[test]
    fn test_serialized_shape() {
        let err = ApiError::unauthorized("apply_offer");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "UNAUTHORIZED");
        assert_eq!(json["message"], "Admin role required for apply_offer");
    }
}
