// SPDX-License-Identifier: MPL-2.0
//! Profile session service.
//!
//! [`ProfileSession`] composes the page: it owns the two gallery
//! view-models (photos, videos), the viewer [`Session`], and the
//! notification queue, and drives the three collaborator ports. All
//! operations are synchronous; any async SDK work happens inside the
//! adapters before they return.
//!
//! Failure handling follows one rule: collaborator errors surface as
//! recoverable notifications and never touch in-memory gallery state.

use crate::application::port::{
    CatalogSource, IdentityError, IdentityProvider, PaymentError, PaymentGateway,
};
use crate::application::query::GalleryView;
use crate::config::defaults::{DEFAULT_PHOTO_PAGE_SIZE, DEFAULT_VIDEO_PAGE_SIZE};
use crate::config::Config;
use crate::domain::access::{Session, SubscriptionPlan};
use crate::ui::notifications::{Manager, Notification};

/// Outcome of a plan selection attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanSelection {
    /// The viewer is signed in; the payment widget can open for this plan.
    Ready(SubscriptionPlan),
    /// The viewer must sign in first; an error notification was pushed.
    SignInRequired,
}

/// Composes one profile page: galleries, viewer session, notifications,
/// and the collaborator adapters behind their ports.
#[derive(Debug)]
pub struct ProfileSession<C, I, P> {
    catalog: C,
    identity: I,
    payments: P,
    session: Session,
    photos: GalleryView,
    videos: GalleryView,
    notifications: Manager,
}

impl<C, I, P> ProfileSession<C, I, P> {
    /// Creates a session with gallery page sizes taken from `config`.
    #[must_use]
    pub fn new(catalog: C, identity: I, payments: P, config: &Config) -> Self {
        Self {
            catalog,
            identity,
            payments,
            session: Session::default(),
            photos: GalleryView::new(config.photo_page_size.unwrap_or(DEFAULT_PHOTO_PAGE_SIZE)),
            videos: GalleryView::new(config.video_page_size.unwrap_or(DEFAULT_VIDEO_PAGE_SIZE)),
            notifications: Manager::new(),
        }
    }

    /// Returns the viewer session state.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the photo gallery view-model.
    #[must_use]
    pub fn photos(&self) -> &GalleryView {
        &self.photos
    }

    /// Returns the photo gallery view-model for filter/paging operations.
    pub fn photos_mut(&mut self) -> &mut GalleryView {
        &mut self.photos
    }

    /// Returns the video gallery view-model.
    #[must_use]
    pub fn videos(&self) -> &GalleryView {
        &self.videos
    }

    /// Returns the video gallery view-model for filter/paging operations.
    pub fn videos_mut(&mut self) -> &mut GalleryView {
        &mut self.videos
    }

    /// Returns the notification queue.
    #[must_use]
    pub fn notifications(&self) -> &Manager {
        &self.notifications
    }

    /// Returns the notification queue for dismissal and tick handling.
    pub fn notifications_mut(&mut self) -> &mut Manager {
        &mut self.notifications
    }
}

impl<C, I, P> ProfileSession<C, I, P>
where
    C: CatalogSource,
    I: IdentityProvider,
    P: PaymentGateway,
{
    /// Records the viewer's age confirmation, opening the galleries.
    pub fn confirm_age(&mut self) {
        self.session.age_confirmed = true;
    }

    /// Records a declined age gate.
    ///
    /// Any previously loaded content is dropped so nothing remains to show
    /// behind the gate screen.
    pub fn deny_age(&mut self) {
        self.session.age_confirmed = false;
        self.photos.load(Vec::new());
        self.videos.load(Vec::new());
    }

    /// Loads both galleries from the catalog.
    ///
    /// A no-op while the age gate is unconfirmed. Each collection is loaded
    /// independently: a failure on one side pushes an error notification
    /// and leaves that gallery's previous in-memory state intact. Stale
    /// load-error toasts from an earlier attempt are cleared first. Returns
    /// `true` if at least one collection loaded.
    pub fn load_content(&mut self) -> bool {
        if !self.session.age_confirmed {
            return false;
        }
        self.notifications.clear_load_errors();

        let mut loaded_any = false;
        match self.catalog.photos() {
            Ok(items) => {
                self.photos.load(items);
                loaded_any = true;
            }
            Err(_) => {
                self.notifications
                    .push(Notification::error("notification-load-error"));
            }
        }
        match self.catalog.videos() {
            Ok(items) => {
                self.videos.load(items);
                loaded_any = true;
            }
            Err(_) => {
                self.notifications
                    .push(Notification::error("notification-load-error"));
            }
        }

        loaded_any
    }

    /// Runs the identity provider's sign-in flow.
    ///
    /// On success records the account and pushes a welcome notification.
    /// Returns `true` if the viewer is signed in afterwards.
    pub fn sign_in(&mut self) -> bool {
        match self.identity.sign_in() {
            Ok(account) => {
                self.session.account = Some(account);
                self.notifications
                    .push(Notification::success("notification-signin-success"));
                true
            }
            Err(err) => {
                self.notifications.push(match err {
                    IdentityError::Cancelled => {
                        Notification::warning("notification-signin-cancelled")
                    }
                    IdentityError::DomainNotAuthorized(domain) => {
                        Notification::error("notification-signin-domain").with_arg("domain", domain)
                    }
                    IdentityError::Unavailable(_) => {
                        Notification::error("notification-signin-error")
                    }
                });
                false
            }
        }
    }

    /// Signs the viewer out, dropping account and subscription state.
    ///
    /// Returns `true` if the provider accepted the request.
    pub fn sign_out(&mut self) -> bool {
        match self.identity.sign_out() {
            Ok(()) => {
                self.session.account = None;
                self.session.subscription = None;
                self.notifications
                    .push(Notification::success("notification-signout-success"));
                true
            }
            Err(_) => {
                self.notifications
                    .push(Notification::error("notification-signout-error"));
                false
            }
        }
    }

    /// Checks whether the payment widget may open for `plan`.
    ///
    /// Subscribing requires a signed-in account; otherwise an error
    /// notification is pushed and the caller should open the sign-in flow.
    pub fn select_plan(&mut self, plan: SubscriptionPlan) -> PlanSelection {
        if self.session.is_signed_in() {
            PlanSelection::Ready(plan)
        } else {
            self.notifications
                .push(Notification::error("notification-subscribe-signin"));
            PlanSelection::SignInRequired
        }
    }

    /// Runs the payment gateway's purchase flow for `plan`.
    ///
    /// On success records the subscription and pushes a success
    /// notification carrying the plan name key and price. Returns `true`
    /// if the subscription is active afterwards.
    pub fn purchase(&mut self, plan: SubscriptionPlan) -> bool {
        if !self.session.is_signed_in() {
            self.notifications
                .push(Notification::error("notification-subscribe-signin"));
            return false;
        }

        match self.payments.purchase(plan) {
            Ok(receipt) => {
                self.session.subscription = Some(receipt.plan);
                self.notifications.push(
                    Notification::success("notification-payment-success")
                        .with_arg("plan", receipt.plan.slug())
                        .with_arg("price", format!("{:.2}", receipt.amount_usd)),
                );
                true
            }
            Err(err) => {
                self.notifications.push(match err {
                    PaymentError::Cancelled => {
                        Notification::warning("notification-payment-cancelled")
                    }
                    PaymentError::Declined(_) => Notification::error("notification-payment-error"),
                    PaymentError::Unavailable(_) => {
                        Notification::error("notification-payment-unavailable")
                    }
                });
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::{CatalogError, PaymentReceipt};
    use crate::domain::access::Account;
    use crate::domain::media::{MediaItem, MediaKind};
    use crate::ui::notifications::Severity;
    use chrono::DateTime;

    fn items(count: usize) -> Vec<MediaItem> {
        (0..count)
            .map(|i| MediaItem {
                id: format!("item_{}", i + 1),
                kind: MediaKind::Photo,
                title: format!("Item {}", i + 1),
                description: String::new(),
                url: "https://example.com/x.jpg".to_string(),
                thumbnail_url: None,
                duration: None,
                category: "casual".to_string(),
                is_premium: false,
                timestamp: DateTime::UNIX_EPOCH,
            })
            .collect()
    }

    struct StubCatalog {
        photos: Result<Vec<MediaItem>, CatalogError>,
        videos: Result<Vec<MediaItem>, CatalogError>,
    }

    impl CatalogSource for StubCatalog {
        fn photos(&self) -> Result<Vec<MediaItem>, CatalogError> {
            self.photos.clone()
        }

        fn videos(&self) -> Result<Vec<MediaItem>, CatalogError> {
            self.videos.clone()
        }
    }

    struct StubIdentity {
        outcome: Result<Account, IdentityError>,
    }

    impl IdentityProvider for StubIdentity {
        fn sign_in(&mut self) -> Result<Account, IdentityError> {
            self.outcome.clone()
        }

        fn sign_out(&mut self) -> Result<(), IdentityError> {
            Ok(())
        }
    }

    struct StubGateway {
        outcome: Result<(), PaymentError>,
    }

    impl PaymentGateway for StubGateway {
        fn purchase(&mut self, plan: SubscriptionPlan) -> Result<PaymentReceipt, PaymentError> {
            self.outcome.clone().map(|()| PaymentReceipt {
                order_id: format!("sub_{}_1", plan.slug()),
                plan,
                amount_usd: plan.monthly_price_usd(),
            })
        }
    }

    fn account() -> Account {
        Account {
            display_name: "Viewer".to_string(),
            email: "viewer@example.com".to_string(),
            avatar_url: None,
        }
    }

    fn working_session() -> ProfileSession<StubCatalog, StubIdentity, StubGateway> {
        ProfileSession::new(
            StubCatalog {
                photos: Ok(items(24)),
                videos: Ok(items(16)),
            },
            StubIdentity {
                outcome: Ok(account()),
            },
            StubGateway { outcome: Ok(()) },
            &Config::default(),
        )
    }

    #[test]
    fn load_content_is_gated_behind_age_confirmation() {
        let mut profile = working_session();
        assert!(!profile.load_content());
        assert!(profile.photos().is_empty());

        profile.confirm_age();
        assert!(profile.load_content());
        assert_eq!(profile.photos().total_count(), 24);
        assert_eq!(profile.videos().total_count(), 16);
    }

    #[test]
    fn deny_age_drops_loaded_content() {
        let mut profile = working_session();
        profile.confirm_age();
        profile.load_content();
        assert!(!profile.photos().is_empty());

        profile.deny_age();
        assert!(profile.photos().is_empty());
        assert!(profile.videos().is_empty());
        assert!(!profile.session().age_confirmed);
    }

    #[test]
    fn catalog_failure_preserves_previous_items_and_notifies() {
        let mut profile = working_session();
        profile.confirm_age();
        profile.load_content();

        profile.catalog = StubCatalog {
            photos: Err(CatalogError::Unavailable("storage offline".to_string())),
            videos: Ok(items(4)),
        };
        assert!(profile.load_content());

        // Photos keep their previously loaded state, videos reloaded
        assert_eq!(profile.photos().total_count(), 24);
        assert_eq!(profile.videos().total_count(), 4);
        assert!(profile
            .notifications()
            .visible()
            .any(|n| n.message_key() == "notification-load-error"));
    }

    #[test]
    fn successful_reload_clears_stale_load_errors() {
        let mut profile = working_session();
        profile.confirm_age();
        profile.catalog = StubCatalog {
            photos: Err(CatalogError::Unavailable("offline".to_string())),
            videos: Err(CatalogError::Unavailable("offline".to_string())),
        };
        assert!(!profile.load_content());
        assert_eq!(profile.notifications().visible_count(), 2);

        profile.catalog = StubCatalog {
            photos: Ok(items(2)),
            videos: Ok(items(2)),
        };
        assert!(profile.load_content());
        assert!(!profile
            .notifications()
            .visible()
            .any(|n| n.message_key() == "notification-load-error"));
    }

    #[test]
    fn sign_in_records_account_and_welcomes() {
        let mut profile = working_session();
        assert!(profile.sign_in());
        assert!(profile.session().is_signed_in());
        assert!(profile
            .notifications()
            .visible()
            .any(|n| n.message_key() == "notification-signin-success"));
    }

    #[test]
    fn cancelled_sign_in_is_a_warning() {
        let mut profile = working_session();
        profile.identity = StubIdentity {
            outcome: Err(IdentityError::Cancelled),
        };
        assert!(!profile.sign_in());
        let notification = profile.notifications().visible().next().expect("pushed");
        assert_eq!(notification.severity(), Severity::Warning);
    }

    #[test]
    fn domain_error_carries_the_domain_as_argument() {
        let mut profile = working_session();
        profile.identity = StubIdentity {
            outcome: Err(IdentityError::DomainNotAuthorized("example.test".to_string())),
        };
        profile.sign_in();
        let notification = profile.notifications().visible().next().expect("pushed");
        assert_eq!(notification.message_key(), "notification-signin-domain");
        assert!(notification
            .message_args()
            .iter()
            .any(|(key, value)| key == "domain" && value == "example.test"));
    }

    #[test]
    fn sign_out_drops_account_and_subscription() {
        let mut profile = working_session();
        profile.sign_in();
        profile.purchase(SubscriptionPlan::Basic);
        assert!(profile.session().subscription.is_some());

        assert!(profile.sign_out());
        assert!(!profile.session().is_signed_in());
        assert!(profile.session().subscription.is_none());
    }

    #[test]
    fn select_plan_requires_sign_in() {
        let mut profile = working_session();
        assert_eq!(
            profile.select_plan(SubscriptionPlan::Premium),
            PlanSelection::SignInRequired
        );
        assert!(profile
            .notifications()
            .visible()
            .any(|n| n.message_key() == "notification-subscribe-signin"));

        profile.sign_in();
        assert_eq!(
            profile.select_plan(SubscriptionPlan::Premium),
            PlanSelection::Ready(SubscriptionPlan::Premium)
        );
    }

    #[test]
    fn purchase_records_subscription_with_plan_and_price_args() {
        let mut profile = working_session();
        profile.sign_in();
        assert!(profile.purchase(SubscriptionPlan::Premium));
        assert_eq!(
            profile.session().subscription,
            Some(SubscriptionPlan::Premium)
        );

        let success = profile
            .notifications()
            .visible()
            .find(|n| n.message_key() == "notification-payment-success")
            .expect("success notification");
        assert!(success
            .message_args()
            .iter()
            .any(|(key, value)| key == "plan" && value == "premium"));
        assert!(success.message_args().iter().any(|(key, _)| key == "price"));
    }

    #[test]
    fn failed_purchase_leaves_subscription_unchanged() {
        let mut profile = working_session();
        profile.sign_in();
        profile.payments = StubGateway {
            outcome: Err(PaymentError::Unavailable("widget failed".to_string())),
        };
        assert!(!profile.purchase(SubscriptionPlan::Vip));
        assert!(profile.session().subscription.is_none());
        assert!(profile
            .notifications()
            .visible()
            .any(|n| n.message_key() == "notification-payment-unavailable"));
    }

    #[test]
    fn purchase_without_sign_in_is_refused() {
        let mut profile = working_session();
        assert!(!profile.purchase(SubscriptionPlan::Basic));
        assert!(profile.session().subscription.is_none());
    }
}
