//! Test Data Builders
//!
//! Builder patterns for constructing test data with sensible defaults.
//! Tests specify only the fields they care about.

use chrono::{DateTime, TimeZone, Utc};

use core_kernel::{add_years, Money, PolicyId};
use domain_policy::{standard_charges, ApplicationModule, Policy};

use crate::fixtures::{ModuleFixtures, MoneyFixtures};

/// Builder for issued policies
pub struct TestPolicyBuilder {
    policy_id: PolicyId,
    package_name: String,
    sum_assured: Money,
    base_premium: Money,
    monthly_premium: Money,
    start_date: DateTime<Utc>,
    balance: Money,
    module: ApplicationModule,
}

impl Default for TestPolicyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestPolicyBuilder {
    /// A one-year main-member-only policy starting 2025-03-01
    pub fn new() -> Self {
        Self {
            policy_id: PolicyId::new(),
            package_name: "Funeral Cover: Main Member".to_string(),
            sum_assured: MoneyFixtures::mur_cover(),
            base_premium: Money::from_minor(669, MoneyFixtures::mur_cover().currency()),
            monthly_premium: MoneyFixtures::mur_premium(),
            start_date: Utc.with_ymd_and_hms(2025, 3, 1, 8, 0, 0).unwrap(),
            balance: Money::zero(MoneyFixtures::mur_cover().currency()),
            module: ModuleFixtures::main_member_only(),
        }
    }

    pub fn with_policy_id(mut self, id: PolicyId) -> Self {
        self.policy_id = id;
        self
    }

    pub fn with_monthly_premium(mut self, premium: Money) -> Self {
        self.monthly_premium = premium;
        self
    }

    pub fn with_balance(mut self, balance: Money) -> Self {
        self.balance = balance;
        self
    }

    pub fn with_start_date(mut self, start: DateTime<Utc>) -> Self {
        self.start_date = start;
        self
    }

    pub fn with_module(mut self, module: ApplicationModule) -> Self {
        self.module = module;
        self
    }

    pub fn build(self) -> Policy {
        let currency = self.sum_assured.currency();
        Policy {
            policy_id: self.policy_id,
            package_name: self.package_name,
            sum_assured: self.sum_assured,
            base_premium: self.base_premium,
            monthly_premium: self.monthly_premium,
            start_date: self.start_date,
            end_date: add_years(self.start_date, 1),
            balance: self.balance,
            charges: standard_charges(currency),
            module: self.module,
        }
    }
}
