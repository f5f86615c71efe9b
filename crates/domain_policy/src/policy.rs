//! Policy issue and requote

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use core_kernel::{add_years, Money, PolicyId};

use crate::application::{Application, ApplicationModule};
use crate::charges::{standard_charges, Charge};
use crate::identity::Policyholder;

/// An issued policy as the platform persists it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    pub policy_id: PolicyId,
    pub package_name: String,
    pub sum_assured: Money,
    pub base_premium: Money,
    pub monthly_premium: Money,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    /// Running account balance, negative while in arrears
    pub balance: Money,
    pub charges: Vec<Charge>,
    pub module: ApplicationModule,
}

/// A repriced view of an in-force policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequotePolicy {
    pub package_name: String,
    pub sum_assured: Money,
    pub base_premium: Money,
    pub monthly_premium: Money,
    pub end_date: NaiveDate,
    pub module: ApplicationModule,
}

/// Issues a policy from an accepted application.
///
/// Cover starts at `now` and runs for one year. The balance opens at
/// zero and the standard charge schedule is attached.
pub fn issue_policy(
    application: &Application,
    _policyholder: &Policyholder,
    now: DateTime<Utc>,
) -> Policy {
    let currency = application.sum_assured.currency();
    let policy = Policy {
        policy_id: PolicyId::new(),
        package_name: application.package_name.clone(),
        sum_assured: application.sum_assured,
        base_premium: application.base_premium,
        monthly_premium: application.monthly_premium,
        start_date: now,
        end_date: add_years(now, 1),
        balance: Money::zero(currency),
        charges: standard_charges(currency),
        module: application.module.clone(),
    };
    info!(policy_id = %policy.policy_id, package = %policy.package_name, "issued policy");
    policy
}

/// Re-expresses an in-force policy under the current application terms.
///
/// Premiums and the module come from the fresh application; cover runs
/// for a new year from `now`, expressed as a calendar date.
pub fn requote_policy(
    _policy: &Policy,
    _policyholder: &Policyholder,
    application: &Application,
    now: DateTime<Utc>,
) -> RequotePolicy {
    RequotePolicy {
        package_name: application.package_name.clone(),
        sum_assured: application.sum_assured,
        base_premium: application.base_premium,
        monthly_premium: application.monthly_premium,
        end_date: add_years(now, 1).date_naive(),
        module: application.module.clone(),
    }
}
