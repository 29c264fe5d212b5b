// SPDX-License-Identifier: MPL-2.0
//! Identity and payment stubs for the demo binary.
//!
//! The production site binds these ports to its provider SDKs; the demo
//! approves everything so the whole flow can run offline. The order id
//! format (`sub_<plan>_<sequence>`) mirrors what the real gateway adapter
//! attaches to an order.

use crate::application::port::{
    IdentityError, IdentityProvider, PaymentError, PaymentGateway, PaymentReceipt,
};
use crate::domain::access::{Account, SubscriptionPlan};

/// Identity stub that signs in a fixed demo account.
#[derive(Debug, Clone)]
pub struct DemoIdentity {
    account: Account,
}

impl DemoIdentity {
    /// Creates the stub with the given account.
    #[must_use]
    pub fn new(account: Account) -> Self {
        Self { account }
    }
}

impl Default for DemoIdentity {
    fn default() -> Self {
        Self::new(Account {
            display_name: "Demo Viewer".to_string(),
            email: "viewer@example.com".to_string(),
            avatar_url: None,
        })
    }
}

impl IdentityProvider for DemoIdentity {
    fn sign_in(&mut self) -> Result<Account, IdentityError> {
        Ok(self.account.clone())
    }

    fn sign_out(&mut self) -> Result<(), IdentityError> {
        Ok(())
    }
}

/// Payment stub that approves every purchase.
#[derive(Debug, Clone, Default)]
pub struct DemoGateway {
    next_order: u64,
}

impl DemoGateway {
    /// Creates the stub.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PaymentGateway for DemoGateway {
    fn purchase(&mut self, plan: SubscriptionPlan) -> Result<PaymentReceipt, PaymentError> {
        self.next_order += 1;
        Ok(PaymentReceipt {
            order_id: format!("sub_{}_{}", plan.slug(), self.next_order),
            plan,
            amount_usd: plan.monthly_price_usd(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_identity_signs_in_the_fixed_account() {
        let mut identity = DemoIdentity::default();
        let account = identity.sign_in().expect("demo sign-in always succeeds");
        assert_eq!(account.email, "viewer@example.com");
        assert!(identity.sign_out().is_ok());
    }

    #[test]
    fn demo_gateway_issues_sequential_order_ids() {
        let mut gateway = DemoGateway::new();
        let first = gateway.purchase(SubscriptionPlan::Basic).expect("approved");
        let second = gateway.purchase(SubscriptionPlan::Vip).expect("approved");

        assert_eq!(first.order_id, "sub_basic_1");
        assert_eq!(second.order_id, "sub_vip_2");
        assert_eq!(second.amount_usd, SubscriptionPlan::Vip.monthly_price_usd());
    }
}
