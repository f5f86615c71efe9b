//! Collaborator ports
//!
//! The dispatcher's only collaborator is the platform's payment history.
//! Adapters live with the host; tests use the stub in `test_utils`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use core_kernel::{Money, PaymentId, PolicyId};

/// Error type for port operations
#[derive(Debug, Error)]
pub enum PortError {
    #[error("Not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    #[error("Connection failed: {message}")]
    Connection { message: String },

    #[error("External system error: {message}")]
    External { message: String },
}

/// A payment as reported by the platform's payment history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub payment_id: PaymentId,
    pub amount: Money,
}

/// Read access to a policy's payment history
#[async_trait]
pub trait PaymentHistory: Send + Sync {
    /// Returns every payment recorded against the policy, oldest first
    async fn policy_payments(&self, policy_id: PolicyId) -> Result<Vec<Payment>, PortError>;
}
