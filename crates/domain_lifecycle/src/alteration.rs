//! Mid-term alteration hooks
//!
//! Alterations run in two steps: `get_alteration` prices the change into
//! an [`AlterationPackage`], and once accepted `apply_alteration` folds
//! the package into the policy as an [`AlteredPolicy`]. Like lifecycle
//! dispatch, alteration hooks are parsed from their platform key with an
//! explicit error for unknown keys.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use core_kernel::{add_years, Money};
use domain_policy::{Charge, Policy};
use domain_rating::Gender;

use crate::error::LifecycleError;

/// Alteration hooks this product handles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlterationHook {
    Hook1,
}

impl AlterationHook {
    pub fn key(&self) -> &'static str {
        match self {
            AlterationHook::Hook1 => "hook_1",
        }
    }
}

impl FromStr for AlterationHook {
    type Err = LifecycleError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        match key {
            "hook_1" => Ok(AlterationHook::Hook1),
            other => Err(LifecycleError::UnknownAlterationHook(other.to_string())),
        }
    }
}

/// Customer-supplied inputs to an alteration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlterationData {
    pub cover_amount: Money,
    pub age: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
}

/// Module snapshot carried by an alteration package
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlterationModule {
    pub suggested_premium: Money,
    pub package_name: String,
    pub base_premium: Money,
    pub cover_amount: Money,
    pub age: u8,
    pub alteration_package_applied: bool,
    pub billing_frequency: String,
}

/// A priced alteration awaiting acceptance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlterationPackage {
    pub input_data: Value,
    pub sum_assured: Money,
    pub monthly_premium: Money,
    pub change_description: String,
    pub module: AlterationModule,
}

/// The policy as it stands after an alteration is applied
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlteredPolicy {
    pub package_name: String,
    pub sum_assured: Money,
    pub monthly_premium: Money,
    pub base_premium: Money,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub charges: Vec<Charge>,
    /// Policy module with the package module's fields folded over it
    pub module: Value,
}

const SUM_ASSURED_UPLIFT: i64 = 99900;
const PREMIUM_UPLIFT: i64 = 11100;

fn plus_minor(amount: Money, minor_units: i64) -> Money {
    Money::from_minor(amount.minor_units() + minor_units, amount.currency())
}

/// Prices an alteration against the current policy
pub fn get_alteration(
    hook: AlterationHook,
    data: &AlterationData,
    policy: &Policy,
) -> AlterationPackage {
    match hook {
        AlterationHook::Hook1 => AlterationPackage {
            input_data: Value::Object(serde_json::Map::new()),
            sum_assured: plus_minor(policy.sum_assured, SUM_ASSURED_UPLIFT),
            monthly_premium: plus_minor(policy.monthly_premium, PREMIUM_UPLIFT),
            change_description: "applying alteration hook 1".to_string(),
            module: AlterationModule {
                suggested_premium: plus_minor(policy.base_premium, PREMIUM_UPLIFT),
                package_name: "Funeral Cover".to_string(),
                base_premium: plus_minor(policy.base_premium, PREMIUM_UPLIFT),
                cover_amount: data.cover_amount,
                age: data.age,
                alteration_package_applied: true,
                billing_frequency: "monthly".to_string(),
            },
        },
    }
}

/// Folds an accepted alteration package into the policy.
///
/// Cover is extended to two years from `now`, charges carry over, and
/// the package module's fields shadow the policy module's.
pub fn apply_alteration(
    hook: AlterationHook,
    policy: &Policy,
    package: &AlterationPackage,
    now: DateTime<Utc>,
) -> AlteredPolicy {
    match hook {
        AlterationHook::Hook1 => AlteredPolicy {
            package_name: "Funeral Cover".to_string(),
            sum_assured: plus_minor(package.sum_assured, PREMIUM_UPLIFT),
            monthly_premium: plus_minor(package.monthly_premium, PREMIUM_UPLIFT),
            base_premium: plus_minor(package.module.base_premium, PREMIUM_UPLIFT),
            start_date: policy.start_date,
            end_date: add_years(now, 2),
            charges: policy.charges.clone(),
            module: merged_module(policy, package),
        },
    }
}

fn merged_module(policy: &Policy, package: &AlterationPackage) -> Value {
    let mut base = match serde_json::to_value(&policy.module) {
        Ok(Value::Object(map)) => map,
        _ => serde_json::Map::new(),
    };
    if let Ok(Value::Object(overlay)) = serde_json::to_value(&package.module) {
        for (key, value) in overlay {
            base.insert(key, value);
        }
    }
    Value::Object(base)
}
