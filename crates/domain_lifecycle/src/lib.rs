//! Lifecycle Hook Dispatch Domain
//!
//! The platform drives a policy through its life by invoking named
//! hooks: payment outcomes, issue, cancellation, lapse, reactivation,
//! claim events, and two scheduled jobs. Each hook is a deterministic
//! transformation from its context to an ordered list of [`Command`]s;
//! applying the commands is the host record store's job, so re-running a
//! hook with the same context is always safe.
//!
//! The only collaborator is the [`PaymentHistory`] port, awaited by the
//! payment hooks to report a payment count.

pub mod alteration;
pub mod command;
pub mod dispatcher;
pub mod error;
pub mod hooks;
pub mod ports;
pub mod reactivation;

pub use alteration::{
    apply_alteration, get_alteration, AlterationData, AlterationHook, AlterationModule,
    AlterationPackage, AlteredPolicy,
};
pub use command::Command;
pub use dispatcher::{Claim, Dispatcher, HookContext, LifecycleHook};
pub use error::LifecycleError;
pub use ports::{Payment, PaymentHistory, PortError};
pub use reactivation::{reactivation_options, ReactivationOption, ReactivationType};
