//! Reactivation options for lapsed policies

use serde::{Deserialize, Serialize};

use core_kernel::Money;
use domain_policy::Policy;

/// The two ways a lapsed policy can come back into force
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReactivationType {
    Reinstatement,
    Recommencement,
}

/// One way of reactivating a lapsed policy, as offered to the customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReactivationOption {
    #[serde(rename = "type")]
    pub option_type: ReactivationType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settlement_amount: Option<Money>,
    pub description: String,
    pub minimum_balance_required: bool,
}

/// Always exactly two options in fixed order: reinstatement, which
/// settles the arrears up front, then recommencement, which recovers
/// them from the first claim payout.
pub fn reactivation_options(policy: &Policy) -> Vec<ReactivationOption> {
    vec![
        ReactivationOption {
            option_type: ReactivationType::Reinstatement,
            settlement_amount: Some(policy.balance.abs()),
            description: "For a policy to be reinstated, all arrear premiums must first be paid."
                .to_string(),
            minimum_balance_required: true,
        },
        ReactivationOption {
            option_type: ReactivationType::Recommencement,
            settlement_amount: None,
            description: "For a policy to be recommenced, all arrear premiums will be deducted \
                          from the first claim income."
                .to_string(),
            minimum_balance_required: false,
        },
    ]
}
