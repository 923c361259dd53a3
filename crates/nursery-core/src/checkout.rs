//! Checkout acknowledgement
//!
//! Checkout is a placeholder: it reports the cart totals with a thank-you
//! message and touches no state.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// What the user sees after pressing checkout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutAcknowledgement {
    /// Confirmation text
    pub message: String,
    /// Items in the cart at checkout time
    pub total_quantity: u64,
    /// Rounded cart cost at checkout time
    #[serde(with = "rust_decimal::serde::float")]
    pub total_cost: Decimal,
}
