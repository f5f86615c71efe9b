//! Core Kernel - Foundational types for the funeral cover core
//!
//! This crate provides the building blocks shared by the rating, policy,
//! and lifecycle domains:
//! - Money held in integer minor currency units
//! - Strongly-typed entity identifiers
//! - Timezone handling for quote snapshots and policy terms

pub mod identifiers;
pub mod money;
pub mod temporal;

pub use identifiers::{ClaimId, PaymentId, PolicyId};
pub use money::{Currency, Money, MoneyError};
pub use temporal::{add_years, Timezone};
