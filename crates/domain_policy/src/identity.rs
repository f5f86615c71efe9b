//! Applicant identity records
//!
//! Personal details arrive with the application, not the quote: the quote
//! prices anonymous ages, the application names the people behind them.

use chrono::NaiveDate;
use domain_rating::Gender;
use serde::{Deserialize, Serialize};

/// Personal details for a covered person
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonDetails {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
}

/// How an extended family member relates to the main member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relationship {
    Parent,
    ParentInLaw,
    Brother,
    Sister,
    Uncle,
    Aunt,
    Nephew,
    Niece,
    AdditionalSpouse,
    AdditionalChild,
}

/// An extended family member: personal details plus relationship
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtendedFamilyMember {
    #[serde(flatten)]
    pub person: PersonDetails,
    pub relationship: Relationship,
}

/// The policyholder as known to the platform
///
/// Demographic derivation from national identity numbers happens in an
/// external service; by the time this core sees a policyholder, gender
/// and date of birth are already plain fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Policyholder {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relationship_serialises_snake_case() {
        let json = serde_json::to_string(&Relationship::ParentInLaw).unwrap();
        assert_eq!(json, "\"parent_in_law\"");
        let json = serde_json::to_string(&Relationship::AdditionalSpouse).unwrap();
        assert_eq!(json, "\"additional_spouse\"");
    }

    #[test]
    fn test_extended_family_member_flattens_person() {
        let member = ExtendedFamilyMember {
            person: PersonDetails {
                first_name: "Asha".to_string(),
                last_name: "Ramgoolam".to_string(),
                date_of_birth: NaiveDate::from_ymd_opt(1960, 5, 1).unwrap(),
            },
            relationship: Relationship::Aunt,
        };
        let value = serde_json::to_value(&member).unwrap();
        assert_eq!(value["first_name"], "Asha");
        assert_eq!(value["relationship"], "aunt");
    }
}
