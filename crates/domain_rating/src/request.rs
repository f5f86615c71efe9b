//! Rating input contract
//!
//! Mirrors the wire shape the platform sends for a quote: cover amounts,
//! the main member's age and optional gender, and for each optional group
//! an inclusion flag, a cover amount, and member details. The upstream
//! validator enforces field ranges and conditional requiredness; this
//! crate only assumes the shape.

use core_kernel::Money;
use serde::{Deserialize, Serialize};

use crate::tables::Gender;

/// An adult household member priced from a gendered table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseholdMember {
    pub age: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
}

/// A child priced from the single-rate children table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Child {
    pub age: u8,
}

/// A household composition to be priced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// Main member cover, in minor currency units
    pub cover_amount: Money,
    pub age: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,

    pub spouse_included: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spouse_cover_amount: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spouse: Option<HouseholdMember>,

    pub children_included: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children_cover_amount: Option<Money>,
    /// Per-child ages; when absent the flat children rate applies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Child>>,

    pub extended_family_included: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extended_family_cover_amount: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extended_family: Option<Vec<HouseholdMember>>,
}

impl QuoteRequest {
    /// A main-member-only request, the smallest composition we price
    pub fn main_member_only(cover_amount: Money, age: u8, gender: Option<Gender>) -> Self {
        Self {
            cover_amount,
            age,
            gender,
            spouse_included: false,
            spouse_cover_amount: None,
            spouse: None,
            children_included: false,
            children_cover_amount: None,
            children: None,
            extended_family_included: false,
            extended_family_cover_amount: None,
            extended_family: None,
        }
    }
}
