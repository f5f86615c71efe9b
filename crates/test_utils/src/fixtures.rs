//! Pre-built test fixtures and collaborator stubs

use async_trait::async_trait;

use core_kernel::{ClaimId, Currency, Money, PaymentId, PolicyId, Timezone};
use domain_lifecycle::{Claim, Payment, PaymentHistory, PortError};
use domain_policy::ApplicationModule;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// The standard main-member cover amount, 5000 rupees
    pub fn mur_cover() -> Money {
        Money::from_minor(500_000, Currency::MUR)
    }

    /// A monthly premium amount
    pub fn mur_premium() -> Money {
        Money::from_minor(860, Currency::MUR)
    }

    /// An arrears balance for reactivation scenarios
    pub fn mur_arrears() -> Money {
        Money::from_minor(-4_500, Currency::MUR)
    }

    /// A ZAR amount for currency mismatch tests
    pub fn zar_100() -> Money {
        Money::from_minor(10_000, Currency::ZAR)
    }
}

/// Fixture for module snapshots
pub struct ModuleFixtures;

impl ModuleFixtures {
    /// A main-member-only module snapshot for a 30-year-old
    pub fn main_member_only() -> ApplicationModule {
        ApplicationModule {
            module_type: domain_policy::PACKAGE_TYPE.to_string(),
            cover_amount: MoneyFixtures::mur_cover(),
            age: 30,
            gender: None,
            spouse_included: false,
            spouse_cover_amount: None,
            spouse: None,
            children_included: false,
            children_cover_amount: None,
            children: None,
            extended_family_included: false,
            extended_family_cover_amount: None,
            extended_family: None,
            timezone: Timezone::new(chrono_tz::Indian::Mauritius),
        }
    }
}

/// A payment for hook contexts
pub fn payment_fixture() -> Payment {
    Payment {
        payment_id: PaymentId::new(),
        amount: MoneyFixtures::mur_premium(),
    }
}

/// A claim for hook contexts
pub fn claim_fixture() -> Claim {
    Claim {
        claim_id: ClaimId::new(),
    }
}

/// In-memory [`PaymentHistory`] returning a fixed payment list
pub struct StubPaymentHistory {
    payments: Vec<Payment>,
}

impl StubPaymentHistory {
    /// A history with the given number of identical payments
    pub fn with_payment_count(count: usize) -> Self {
        Self {
            payments: (0..count).map(|_| payment_fixture()).collect(),
        }
    }

    pub fn empty() -> Self {
        Self {
            payments: Vec::new(),
        }
    }
}

#[async_trait]
impl PaymentHistory for StubPaymentHistory {
    async fn policy_payments(&self, _policy_id: PolicyId) -> Result<Vec<Payment>, PortError> {
        Ok(self.payments.clone())
    }
}

/// [`PaymentHistory`] that always fails, for propagation tests
pub struct FailingPaymentHistory;

#[async_trait]
impl PaymentHistory for FailingPaymentHistory {
    async fn policy_payments(&self, policy_id: PolicyId) -> Result<Vec<Payment>, PortError> {
        Err(PortError::Connection {
            message: format!("payment history unavailable for {policy_id}"),
        })
    }
}
