// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters
//! implement. The traits use only domain types; concrete SDK bindings
//! (storage backend, OAuth provider, payment widget) live behind them.
//!
//! # Available Ports
//!
//! - [`catalog`]: Bulk content loading (`CatalogSource`)
//! - [`identity`]: Sign-in/sign-out (`IdentityProvider`)
//! - [`payment`]: Subscription purchase (`PaymentGateway`)
//!
//! # Design Notes
//!
//! - Every operation is synchronous; any asynchronous SDK work happens
//!   inside the adapter before it returns.
//! - Errors are recoverable by design: a failed load, sign-in, or purchase
//!   surfaces as a retryable notification and never corrupts in-memory
//!   gallery state.

pub mod catalog;
pub mod identity;
pub mod payment;

// Re-export main types for convenience
pub use catalog::{CatalogError, CatalogSource};
pub use identity::{IdentityError, IdentityProvider};
pub use payment::{PaymentError, PaymentGateway, PaymentReceipt};
