//! Hook dispatch
//!
//! The platform invokes hooks by name. Dispatch is a tagged enum parsed
//! from the hook key, so an unhandled key is an explicit
//! [`LifecycleError::UnknownHook`] rather than a silent no-op.

use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::ClaimId;
use domain_policy::Policy;

use crate::command::Command;
use crate::error::LifecycleError;
use crate::hooks;
use crate::ports::{Payment, PaymentHistory};
use crate::reactivation::ReactivationOption;

/// Every lifecycle event this product handles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LifecycleHook {
    AfterPaymentSuccess,
    AfterPaymentFailed,
    AfterPaymentReversed,
    AfterPolicyIssued,
    AfterPolicyCancelled,
    AfterPolicyLapsed,
    AfterPolicyNotTakenUp,
    AfterPolicyReactivated,
    AfterClaimBlockUpdated,
    AfterPolicyLinkedToClaim,
    AfterClaimApproved,
    UpdatePolicyOnSchedule,
    CustomScheduledFunction,
}

impl LifecycleHook {
    /// The hook key as the platform spells it
    pub fn key(&self) -> &'static str {
        match self {
            LifecycleHook::AfterPaymentSuccess => "afterPaymentSuccess",
            LifecycleHook::AfterPaymentFailed => "afterPaymentFailed",
            LifecycleHook::AfterPaymentReversed => "afterPaymentReversed",
            LifecycleHook::AfterPolicyIssued => "afterPolicyIssued",
            LifecycleHook::AfterPolicyCancelled => "afterPolicyCancelled",
            LifecycleHook::AfterPolicyLapsed => "afterPolicyLapsed",
            LifecycleHook::AfterPolicyNotTakenUp => "afterPolicyNotTakenUp",
            LifecycleHook::AfterPolicyReactivated => "afterPolicyReactivated",
            LifecycleHook::AfterClaimBlockUpdated => "afterClaimBlockUpdated",
            LifecycleHook::AfterPolicyLinkedToClaim => "afterPolicyLinkedToClaim",
            LifecycleHook::AfterClaimApproved => "afterClaimApproved",
            LifecycleHook::UpdatePolicyOnSchedule => "updatePolicyOnSchedule",
            LifecycleHook::CustomScheduledFunction => "customScheduledFunction",
        }
    }

    pub const ALL: [LifecycleHook; 13] = [
        LifecycleHook::AfterPaymentSuccess,
        LifecycleHook::AfterPaymentFailed,
        LifecycleHook::AfterPaymentReversed,
        LifecycleHook::AfterPolicyIssued,
        LifecycleHook::AfterPolicyCancelled,
        LifecycleHook::AfterPolicyLapsed,
        LifecycleHook::AfterPolicyNotTakenUp,
        LifecycleHook::AfterPolicyReactivated,
        LifecycleHook::AfterClaimBlockUpdated,
        LifecycleHook::AfterPolicyLinkedToClaim,
        LifecycleHook::AfterClaimApproved,
        LifecycleHook::UpdatePolicyOnSchedule,
        LifecycleHook::CustomScheduledFunction,
    ];
}

impl FromStr for LifecycleHook {
    type Err = LifecycleError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|hook| hook.key() == key)
            .ok_or_else(|| LifecycleError::UnknownHook(key.to_string()))
    }
}

/// A claim as the dispatcher sees it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    pub claim_id: ClaimId,
}

/// Everything a hook invocation may carry.
///
/// Fields are optional because each hook needs a different subset; a
/// hook that finds its field missing fails with
/// [`LifecycleError::MissingContext`]. The clock travels in the context
/// so re-running a hook with the same context yields the same commands.
#[derive(Debug, Clone)]
pub struct HookContext {
    pub policy: Option<Policy>,
    pub payment: Option<Payment>,
    pub claim: Option<Claim>,
    pub reactivation_option: Option<ReactivationOption>,
    pub now: DateTime<Utc>,
}

impl HookContext {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            policy: None,
            payment: None,
            claim: None,
            reactivation_option: None,
            now,
        }
    }

    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = Some(policy);
        self
    }

    pub fn with_payment(mut self, payment: Payment) -> Self {
        self.payment = Some(payment);
        self
    }

    pub fn with_claim(mut self, claim: Claim) -> Self {
        self.claim = Some(claim);
        self
    }

    pub fn with_reactivation_option(mut self, option: ReactivationOption) -> Self {
        self.reactivation_option = Some(option);
        self
    }

    fn policy(&self) -> Result<&Policy, LifecycleError> {
        self.policy
            .as_ref()
            .ok_or(LifecycleError::MissingContext("policy"))
    }

    fn payment(&self) -> Result<&Payment, LifecycleError> {
        self.payment
            .as_ref()
            .ok_or(LifecycleError::MissingContext("payment"))
    }

    fn reactivation_option(&self) -> Result<&ReactivationOption, LifecycleError> {
        self.reactivation_option
            .as_ref()
            .ok_or(LifecycleError::MissingContext("reactivation_option"))
    }
}

/// Maps lifecycle events to ordered command lists
pub struct Dispatcher {
    payment_history: Arc<dyn PaymentHistory>,
}

impl Dispatcher {
    pub fn new(payment_history: Arc<dyn PaymentHistory>) -> Self {
        Self { payment_history }
    }

    /// Runs one hook against its context.
    ///
    /// Payment hooks await the payment history before building their
    /// result; every other hook is a pure function of the context.
    pub async fn dispatch(
        &self,
        hook: LifecycleHook,
        context: &HookContext,
    ) -> Result<Vec<Command>, LifecycleError> {
        let commands = match hook {
            LifecycleHook::AfterPaymentSuccess => {
                let policy = context.policy()?;
                let payments = self.payment_history.policy_payments(policy.policy_id).await?;
                hooks::after_payment_success(policy, context.payment()?, payments.len())
            }
            LifecycleHook::AfterPaymentFailed => {
                let policy = context.policy()?;
                let payments = self.payment_history.policy_payments(policy.policy_id).await?;
                hooks::after_payment_failed(policy, context.payment()?, payments.len())
            }
            LifecycleHook::AfterPaymentReversed => {
                let policy = context.policy()?;
                let payments = self.payment_history.policy_payments(policy.policy_id).await?;
                hooks::after_payment_reversed(policy, context.payment()?, payments.len())
            }
            LifecycleHook::AfterPolicyIssued => hooks::after_policy_issued(context.policy()?),
            LifecycleHook::AfterPolicyCancelled => {
                hooks::after_policy_cancelled(context.policy()?)
            }
            LifecycleHook::AfterPolicyLapsed => hooks::after_policy_lapsed(context.policy()?),
            LifecycleHook::AfterPolicyNotTakenUp => {
                hooks::after_policy_not_taken_up(context.policy()?)
            }
            LifecycleHook::AfterPolicyReactivated => {
                hooks::after_policy_reactivated(context.reactivation_option()?)
            }
            LifecycleHook::AfterClaimBlockUpdated => hooks::after_claim_block_updated(),
            LifecycleHook::AfterPolicyLinkedToClaim => hooks::after_policy_linked_to_claim(),
            LifecycleHook::AfterClaimApproved => hooks::after_claim_approved(),
            LifecycleHook::UpdatePolicyOnSchedule => {
                hooks::update_policy_on_schedule(context.now)
            }
            LifecycleHook::CustomScheduledFunction => hooks::custom_scheduled_function(),
        };
        debug!(hook = hook.key(), commands = commands.len(), "dispatched hook");
        Ok(commands)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_round_trips() {
        for hook in LifecycleHook::ALL {
            assert_eq!(hook.key().parse::<LifecycleHook>().unwrap(), hook);
        }
    }

    #[test]
    fn test_unknown_key_is_an_error() {
        let err = "afterSomethingElse".parse::<LifecycleHook>().unwrap_err();
        assert!(matches!(err, LifecycleError::UnknownHook(key) if key == "afterSomethingElse"));
    }
}
