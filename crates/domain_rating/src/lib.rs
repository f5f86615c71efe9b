//! Premium Rating Engine
//!
//! Converts a household composition (main member plus optional spouse,
//! children, and extended family members) into a priced funeral cover
//! package. The engine is pure: the four actuarial tables are parsed once
//! at load time and never mutated, and every calculation is a synchronous
//! function over immutable inputs.
//!
//! # Components
//!
//! - [`RateTables`]: loads and indexes the four actuarial tables by age,
//!   with gender columns and a blended fallback for adult tables
//! - [`risk_premium`]: sums the independent per-member contributions
//! - [`describe_package`]: composes the product name and terms from the
//!   included household groups
//!
//! Table lookups do not interpolate. An age outside a table's domain is a
//! [`RatingError::RatingDataMissing`] failure, never a silent default -
//! range checking is the upstream validator's responsibility.

pub mod calculator;
pub mod error;
pub mod package;
pub mod repository;
pub mod request;
pub mod tables;

pub use calculator::{base_premium, capped_child_cover, risk_premium, suggested_premium};
pub use error::RatingError;
pub use package::{describe_package, PackageDescription};
pub use repository::RateTables;
pub use request::{Child, HouseholdMember, QuoteRequest};
pub use tables::{Gender, RateRow, RateTable, TableId};
