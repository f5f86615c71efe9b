//! Package name and terms composition
//!
//! The product name is a pure function of which household groups are
//! included. The join rules are part of the observable product catalogue:
//! without extended family the base parts join with " & ", with extended
//! family they join with ", " before " & Extended Family" is appended.
//! That asymmetry is deliberate product wording - do not unify it.

use crate::request::QuoteRequest;

/// Fixed first term of every package
pub const NATURAL_DEATH_EXCLUSION_TERM: &str = "No claim for natural death in first 3 months.";

/// Added whenever children are covered
pub const CHILDREN_TERMINATION_TERM: &str =
    "Cover for children terminates when they reach the age of 21. Legal cover limits apply to children.";

/// Human-readable name and terms for a priced package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageDescription {
    pub name: String,
    pub terms: Vec<String>,
}

/// Composes the package name and terms from the included groups
pub fn describe_package(request: &QuoteRequest) -> PackageDescription {
    let mut name_parts = vec!["Main Member"];
    let mut terms = vec![NATURAL_DEATH_EXCLUSION_TERM.to_string()];

    if request.spouse_included {
        name_parts.push("Spouse");
    }
    if request.children_included {
        name_parts.push("Children");
        terms.push(CHILDREN_TERMINATION_TERM.to_string());
    }
    // Main + Spouse + Children collapses into the family package
    if name_parts.len() == 3 {
        name_parts = vec!["Family"];
    }

    let name = if request.extended_family_included {
        format!("{} & Extended Family", name_parts.join(", "))
    } else {
        name_parts.join(" & ")
    };

    PackageDescription { name, terms }
}
