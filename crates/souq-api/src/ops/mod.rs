//! # Boundary Operations
//!
//! One module per operation family. Every function here:
//! 1. validates its input struct (malformed payloads never reach the core),
//! 2. acquires the store lock for the full check-then-act span,
//! 3. returns a view-model or a typed [`crate::ApiError`].
//!
//! Admin operations additionally gate on the acting identity's role; the
//! core itself performs no authorization.

pub mod admin;
pub mod auth;
pub mod cart;
pub mod checkout;
pub mod products;
