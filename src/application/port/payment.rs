// SPDX-License-Identifier: MPL-2.0
//! Payment gateway port definition.
//!
//! Capture and settlement belong to the third-party payment widget; this
//! seam only reports the outcome of one purchase attempt. The adapter is
//! expected to have completed (or simulated) the capture before returning
//! a [`PaymentReceipt`].

use crate::domain::access::SubscriptionPlan;
use std::fmt;

/// Errors that can occur during a purchase attempt.
///
/// Every variant is recoverable: the viewer keeps whatever subscription
/// state they had, and the UI offers a retry.
#[derive(Debug, Clone, PartialEq)]
pub enum PaymentError {
    /// The viewer dismissed the payment widget.
    Cancelled,

    /// The gateway processed the order and refused it.
    Declined(String),

    /// The payment widget failed to load or the gateway is unreachable.
    Unavailable(String),
}

impl fmt::Display for PaymentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentError::Cancelled => write!(f, "Payment cancelled"),
            PaymentError::Declined(reason) => write!(f, "Payment declined: {reason}"),
            PaymentError::Unavailable(msg) => write!(f, "Payment gateway unavailable: {msg}"),
        }
    }
}

impl std::error::Error for PaymentError {}

/// Proof of a completed purchase, as reported by the gateway.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentReceipt {
    /// Gateway order identifier (e.g. `sub_premium_17`).
    pub order_id: String,
    /// The purchased tier.
    pub plan: SubscriptionPlan,
    /// Captured monthly amount in US dollars.
    pub amount_usd: f64,
}

/// Port for the third-party payment widget.
pub trait PaymentGateway {
    /// Runs the gateway's purchase flow for one subscription tier.
    ///
    /// # Errors
    ///
    /// Returns a [`PaymentError`] if the flow was cancelled, the order was
    /// declined, or the gateway is unavailable.
    fn purchase(&mut self, plan: SubscriptionPlan) -> Result<PaymentReceipt, PaymentError>;
}
