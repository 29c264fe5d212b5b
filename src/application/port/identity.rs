// SPDX-License-Identifier: MPL-2.0
//! Identity provider port definition.
//!
//! The authentication protocol itself (OAuth redirects, tokens, popups) is
//! out of scope for this crate; adapters wrap whatever SDK the site uses
//! and report the resulting [`Account`] through this seam.

use crate::domain::access::Account;
use std::fmt;

/// Errors that can occur during sign-in or sign-out.
///
/// All variants are recoverable: the session service maps them to
/// retryable notifications and leaves the viewer signed out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityError {
    /// The viewer dismissed the provider's sign-in flow.
    Cancelled,

    /// The provider refused the site's domain (misconfigured allow-list).
    DomainNotAuthorized(String),

    /// The provider could not be reached.
    Unavailable(String),
}

impl fmt::Display for IdentityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentityError::Cancelled => write!(f, "Sign-in cancelled"),
            IdentityError::DomainNotAuthorized(domain) => {
                write!(f, "Domain not authorized for sign-in: {domain}")
            }
            IdentityError::Unavailable(msg) => write!(f, "Identity provider unavailable: {msg}"),
        }
    }
}

impl std::error::Error for IdentityError {}

/// Port for the third-party identity provider.
pub trait IdentityProvider {
    /// Runs the provider's sign-in flow and returns the account on success.
    ///
    /// # Errors
    ///
    /// Returns an [`IdentityError`] if the flow was cancelled, the domain
    /// is not authorized, or the provider is unreachable.
    fn sign_in(&mut self) -> Result<Account, IdentityError>;

    /// Signs the current account out.
    ///
    /// # Errors
    ///
    /// Returns an [`IdentityError`] if the provider rejected the request.
    fn sign_out(&mut self) -> Result<(), IdentityError>;
}
