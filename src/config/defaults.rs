// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Paging**: Gallery page sizes
//! - **Plans**: Subscription tier prices

// ==========================================================================
// Paging Defaults
// ==========================================================================

/// Default number of photos added to the visible window per page.
pub const DEFAULT_PHOTO_PAGE_SIZE: usize = 12;

/// Default number of videos added to the visible window per page.
pub const DEFAULT_VIDEO_PAGE_SIZE: usize = 8;

// ==========================================================================
// Plan Defaults
// ==========================================================================

/// Monthly price of the basic tier (USD).
pub const PLAN_BASIC_PRICE_USD: f64 = 9.99;

/// Monthly price of the premium tier (USD).
pub const PLAN_PREMIUM_PRICE_USD: f64 = 19.99;

/// Monthly price of the VIP tier (USD).
pub const PLAN_VIP_PRICE_USD: f64 = 49.99;
