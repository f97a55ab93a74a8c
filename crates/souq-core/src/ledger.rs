//! # Order Ledger
//!
//! The append-only, ordered collection of completed orders.
//!
//! ## Id Allocation
//! Ids come from an explicit monotonic counter, NOT from the ledger's
//! length. Length-derived ids would silently reuse numbers if filtering or
//! deletion were ever introduced; a counter costs nothing and removes the
//! trap. The counter starts at [`crate::FIRST_ORDER_ID`] so customer-facing
//! order numbers match the historical numbering.

use chrono::{DateTime, Utc};

use crate::money::Money;
use crate::types::{Order, PaymentStatus};
use crate::FIRST_ORDER_ID;

/// Append-only order history plus the id counter.
#[derive(Debug, Clone)]
pub struct OrderLedger {
    orders: Vec<Order>,
    next_id: u64,
}

impl OrderLedger {
    /// Creates an empty ledger with the counter at [`FIRST_ORDER_ID`].
    pub fn new() -> Self {
        OrderLedger {
            orders: Vec::new(),
            next_id: FIRST_ORDER_ID,
        }
    }

    /// Allocates the next order id and appends the order.
    ///
    /// Only the checkout engine calls this; orders are immutable afterwards.
    #[allow(clippy::too_many_arguments)]
    pub fn append(
        &mut self,
        customer: String,
        items: Vec<String>,
        total: Money,
        address: String,
        payment_method: String,
        payment_status: PaymentStatus,
        created_at: DateTime<Utc>,
    ) -> &Order {
        let order = Order {
            id: self.next_id,
            customer,
            items,
            total,
            address,
            payment_method,
            payment_status,
            created_at,
        };
        self.next_id += 1;
        self.orders.push(order);
        self.orders.last().expect("just pushed")
    }

    /// All orders, oldest first.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Number of completed orders.
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Checks if no order has been committed yet.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

impl Default for OrderLedger {
    fn default() -> Self {
        OrderLedger::new()
    }
}
