//! Hook handlers
//!
//! Each handler builds the exact command list the host applies for its
//! event. Amounts in `update_policy` payloads are minor units; the field
//! names follow the host's billing contract.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::json;

use core_kernel::{Currency, Money};
use domain_policy::Policy;

use crate::command::Command;
use crate::ports::Payment;
use crate::reactivation::{ReactivationOption, ReactivationType};

const UPDATE_POLICY: &str = "update_policy";
const UPDATE_POLICY_MODULE_DATA: &str = "update_policy_module_data";
const UPDATE_CLAIM_MODULE_DATA: &str = "update_claim_module_data";

fn set_premiums(minor_units: i64) -> Command {
    Command::update(
        UPDATE_POLICY,
        json!({
            "monthlyPremium": minor_units,
            "basePremium": minor_units,
            "billingAmount": minor_units,
        }),
    )
}

pub fn after_payment_success(
    policy: &Policy,
    payment: &Payment,
    number_of_payments: usize,
) -> Vec<Command> {
    vec![
        Command::update(
            UPDATE_POLICY_MODULE_DATA,
            json!({
                "has_on_payment_success_run": true,
                "policy_id": policy.policy_id,
                "payment_id": payment.payment_id,
                "number_of_payments": number_of_payments,
            }),
        ),
        set_premiums(1000),
        Command::debit(
            "debit_policy",
            Money::from_minor(9999, Currency::MUR),
            "Debit Policy",
        ),
    ]
}

pub fn after_payment_failed(
    policy: &Policy,
    payment: &Payment,
    number_of_payments: usize,
) -> Vec<Command> {
    vec![
        Command::update(
            UPDATE_POLICY_MODULE_DATA,
            json!({
                "has_on_payment_failed_run": true,
                "policy_id": policy.policy_id,
                "payment_id": payment.payment_id,
                "number_of_payments": number_of_payments,
            }),
        ),
        set_premiums(2000),
    ]
}

pub fn after_payment_reversed(
    policy: &Policy,
    payment: &Payment,
    number_of_payments: usize,
) -> Vec<Command> {
    vec![
        Command::update(
            UPDATE_POLICY_MODULE_DATA,
            json!({
                "has_on_payment_reversed_run": true,
                "policy_id": policy.policy_id,
                "payment_id": payment.payment_id,
                "number_of_payments": number_of_payments,
            }),
        ),
        set_premiums(4000),
    ]
}

pub fn after_policy_issued(_policy: &Policy) -> Vec<Command> {
    vec![Command::update(
        UPDATE_POLICY_MODULE_DATA,
        json!({ "policy_was_issued": true }),
    )]
}

pub fn after_policy_not_taken_up(policy: &Policy) -> Vec<Command> {
    vec![
        Command::update(
            UPDATE_POLICY_MODULE_DATA,
            json!({ "policy_has_not_taken_up": true }),
        ),
        set_premiums(policy.monthly_premium.minor_units() + 15000),
    ]
}

pub fn after_policy_cancelled(policy: &Policy) -> Vec<Command> {
    vec![
        Command::update(
            UPDATE_POLICY_MODULE_DATA,
            json!({ "policy_was_cancelled": true }),
        ),
        set_premiums(policy.monthly_premium.minor_units() + 15000),
    ]
}

/// Lapsing also moves billing to the last day of the month.
pub fn after_policy_lapsed(policy: &Policy) -> Vec<Command> {
    let premium = policy.monthly_premium.minor_units() + 10000;
    vec![
        Command::update(
            UPDATE_POLICY_MODULE_DATA,
            json!({ "policy_has_lapsed": true }),
        ),
        Command::update(
            UPDATE_POLICY,
            json!({
                "monthlyPremium": premium,
                "basePremium": premium,
                "billingAmount": premium,
                "billingDay": 31,
            }),
        ),
    ]
}

/// Reinstatement marks the policy reinstated; any other option type
/// marks it recommenced.
pub fn after_policy_reactivated(option: &ReactivationOption) -> Vec<Command> {
    let data = match option.option_type {
        ReactivationType::Reinstatement => json!({ "has_been_reinstated": true }),
        ReactivationType::Recommencement => json!({ "has_been_recommenced": true }),
    };
    vec![Command::update(UPDATE_POLICY_MODULE_DATA, data)]
}

pub fn after_claim_block_updated() -> Vec<Command> {
    vec![Command::update(
        UPDATE_CLAIM_MODULE_DATA,
        json!({ "has_claim_block_updated": true }),
    )]
}

pub fn after_policy_linked_to_claim() -> Vec<Command> {
    vec![Command::update(
        UPDATE_CLAIM_MODULE_DATA,
        json!({ "has_after_policy_linked_to_claim_hook_run": true }),
    )]
}

pub fn after_claim_approved() -> Vec<Command> {
    vec![Command::update(
        UPDATE_CLAIM_MODULE_DATA,
        json!({ "has_after_claim_approved_hook_run": true }),
    )]
}

pub fn update_policy_on_schedule(now: DateTime<Utc>) -> Vec<Command> {
    vec![Command::update(
        UPDATE_POLICY_MODULE_DATA,
        json!({ "last_updated": now.to_rfc3339_opts(SecondsFormat::Millis, true) }),
    )]
}

/// Platform-defined scheduled job; marks that it ran
pub fn custom_scheduled_function() -> Vec<Command> {
    vec![Command::update(
        UPDATE_POLICY_MODULE_DATA,
        json!({ "has_scheduled_function_run": true }),
    )]
}
