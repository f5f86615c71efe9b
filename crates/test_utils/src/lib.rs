//! Test Utilities Crate
//!
//! Shared test infrastructure for the funeral cover test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test data and the payment-history stub
//! - `builders`: Builder patterns for test data construction
//! - `logging`: One-shot tracing initialisation for tests

pub mod builders;
pub mod fixtures;
pub mod logging;

pub use builders::*;
pub use fixtures::*;
pub use logging::*;
