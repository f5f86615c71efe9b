//! Policy Composition Domain
//!
//! Turns priced household compositions into the records the platform
//! persists, one step at a time:
//!
//! ```text
//! QuoteRequest -> Quote -> Application -> Policy -> RequotePolicy
//! ```
//!
//! Each composer is a pure function over its inputs. The quote freezes a
//! `module` snapshot of everything it was priced from; the application
//! pulls its structural fields from that snapshot (never recomputing) and
//! adds applicant identity records; the policy adds dates, the charge
//! schedule, and an opening balance.
//!
//! Cross-checks between applicant-supplied data and the quoted snapshot
//! are configuration-gated and disabled by default - see
//! [`ApplicationChecks`].

pub mod application;
pub mod charges;
pub mod error;
pub mod identity;
pub mod policy;
pub mod quote;
pub mod validation;

pub use application::{Application, ApplicationComposer, ApplicationModule, ApplicationRequest};
pub use charges::{standard_charges, Charge};
pub use error::PolicyError;
pub use identity::{ExtendedFamilyMember, PersonDetails, Policyholder, Relationship};
pub use policy::{issue_policy, requote_policy, Policy, RequotePolicy};
pub use quote::{Quote, QuoteComposer, QuoteModule, PACKAGE_TYPE};
pub use validation::ApplicationChecks;
