// SPDX-License-Identifier: MPL-2.0
//! Viewer session and paywall decision types.
//!
//! These are pure value types: the [`Session`] records what the surrounding
//! collaborators (identity provider, payment gateway, age gate) have told us
//! about the current viewer, and [`Session::can_view`] turns that into a
//! display-side access decision for a single item.
//!
//! There is deliberately no enforcement here beyond presentation: the
//! backing content source applies no server-side authorization, so a locked
//! card is a rendering decision and nothing more.

use crate::config::defaults::{PLAN_BASIC_PRICE_USD, PLAN_PREMIUM_PRICE_USD, PLAN_VIP_PRICE_USD};
use crate::domain::media::MediaItem;

/// Subscription tiers offered on the profile page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionPlan {
    /// Entry tier.
    Basic,
    /// Middle tier.
    Premium,
    /// Top tier.
    Vip,
}

impl SubscriptionPlan {
    /// Monthly price in US dollars. Display-only.
    #[must_use]
    pub fn monthly_price_usd(&self) -> f64 {
        match self {
            SubscriptionPlan::Basic => PLAN_BASIC_PRICE_USD,
            SubscriptionPlan::Premium => PLAN_PREMIUM_PRICE_USD,
            SubscriptionPlan::Vip => PLAN_VIP_PRICE_USD,
        }
    }

    /// Returns the i18n message key for this plan's display name.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            SubscriptionPlan::Basic => "plan-basic",
            SubscriptionPlan::Premium => "plan-premium",
            SubscriptionPlan::Vip => "plan-vip",
        }
    }

    /// Stable machine identifier used in order ids ("basic", "premium", "vip").
    #[must_use]
    pub fn slug(&self) -> &'static str {
        match self {
            SubscriptionPlan::Basic => "basic",
            SubscriptionPlan::Premium => "premium",
            SubscriptionPlan::Vip => "vip",
        }
    }
}

/// Account details reported by the identity provider after sign-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Name shown in the header button.
    pub display_name: String,
    /// Account email.
    pub email: String,
    /// Avatar image URL, if the provider supplied one.
    pub avatar_url: Option<String>,
}

/// Ephemeral per-visit viewer state.
///
/// One instance lives for the page session. It is mutated only by the
/// application-layer session service; nothing here persists anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    /// Whether the viewer confirmed the age gate.
    pub age_confirmed: bool,
    /// Signed-in account, if any.
    pub account: Option<Account>,
    /// Active subscription, if a purchase succeeded this session.
    pub subscription: Option<SubscriptionPlan>,
}

/// Display-side access decision for a single item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// The item can be shown in full.
    Granted,
    /// The item is premium and the viewer has no active subscription;
    /// the renderer shows a locked card that opens the paywall.
    RequiresSubscription,
}

impl Session {
    /// Returns `true` if an account is signed in.
    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.account.is_some()
    }

    /// Returns the access decision for one item under this session.
    ///
    /// Premium items are locked unless any subscription tier is active;
    /// the tier itself does not matter for display purposes.
    #[must_use]
    pub fn can_view(&self, item: &MediaItem) -> Access {
        if item.is_premium && self.subscription.is_none() {
            Access::RequiresSubscription
        } else {
            Access::Granted
        }
    }
}
