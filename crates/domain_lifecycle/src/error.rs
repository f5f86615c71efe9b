//! Lifecycle dispatch errors

use thiserror::Error;

use crate::ports::PortError;

/// Errors raised while dispatching lifecycle or alteration hooks
#[derive(Debug, Error)]
pub enum LifecycleError {
    /// The platform named a hook this product does not handle
    #[error("Unknown lifecycle hook: {0}")]
    UnknownHook(String),

    /// The platform named an alteration hook this product does not handle
    #[error("Unknown alteration hook: {0}")]
    UnknownAlterationHook(String),

    /// The hook requires a context field the platform did not supply
    #[error("Hook context is missing required field: {0}")]
    MissingContext(&'static str),

    /// A collaborator call failed; the platform decides retry policy
    #[error(transparent)]
    Port(#[from] PortError),
}
