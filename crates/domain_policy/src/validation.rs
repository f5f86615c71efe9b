//! Configuration-gated application checks
//!
//! These cross-checks between applicant-supplied identity data and the
//! quoted snapshot shipped disabled in the original product and stay
//! disabled by default here. Each check has its own switch so product
//! teams can re-enable any of them without re-deriving the rules.

use chrono::{Datelike, NaiveDate};

use crate::application::ApplicationRequest;
use crate::error::PolicyError;
use crate::identity::Policyholder;
use crate::quote::QuoteModule;

/// Switches for the application cross-checks, all off by default
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ApplicationChecks {
    /// Child count and ages must match the quoted children
    pub children_match_quote: bool,
    /// Spouse age derived from date of birth must match the quoted age
    pub spouse_age_matches_quote: bool,
    /// Extended family count and ages must match the quoted members
    pub extended_family_match_quote: bool,
    /// Policyholder must be at least 18 and under 70
    pub policyholder_age_eligible: bool,
    /// Policyholder age must match the quoted main-member age
    pub policyholder_age_matches_quote: bool,
    /// A gendered quote requires a matching policyholder gender
    pub policyholder_gender_matches_quote: bool,
}

impl ApplicationChecks {
    /// Enables every check, the strictest configuration
    pub fn strict() -> Self {
        Self {
            children_match_quote: true,
            spouse_age_matches_quote: true,
            extended_family_match_quote: true,
            policyholder_age_eligible: true,
            policyholder_age_matches_quote: true,
            policyholder_gender_matches_quote: true,
        }
    }
}

/// Whole years between a date of birth and a reference date
pub fn age_on(date_of_birth: NaiveDate, as_of: NaiveDate) -> u8 {
    let mut age = as_of.year() - date_of_birth.year();
    if (as_of.month(), as_of.day()) < (date_of_birth.month(), date_of_birth.day()) {
        age -= 1;
    }
    age.clamp(0, u8::MAX as i32) as u8
}

/// Runs every enabled check against the quoted snapshot
pub fn run_checks(
    checks: &ApplicationChecks,
    request: &ApplicationRequest,
    policyholder: &Policyholder,
    quote: &QuoteModule,
    as_of: NaiveDate,
) -> Result<(), PolicyError> {
    if checks.children_match_quote {
        check_children(request, quote, as_of)?;
    }
    if checks.spouse_age_matches_quote {
        check_spouse_age(request, quote, as_of)?;
    }
    if checks.extended_family_match_quote {
        check_extended_family(request, quote, as_of)?;
    }
    if checks.policyholder_age_eligible || checks.policyholder_age_matches_quote {
        let age = policyholder_age(policyholder, as_of)?;
        if checks.policyholder_age_eligible {
            if age < 18 {
                return Err(PolicyError::invalid_request(
                    "Policyholder must be older than 18.",
                ));
            }
            if age >= 70 {
                return Err(PolicyError::invalid_request(
                    "Policyholder can't be older than 70.",
                ));
            }
        }
        if checks.policyholder_age_matches_quote && age != quote.age {
            return Err(PolicyError::invalid_request(format!(
                "Policyholder does not match quoted age. Expected: {}",
                quote.age
            )));
        }
    }
    if checks.policyholder_gender_matches_quote {
        check_policyholder_gender(policyholder, quote)?;
    }
    Ok(())
}

fn policyholder_age(policyholder: &Policyholder, as_of: NaiveDate) -> Result<u8, PolicyError> {
    let dob = policyholder
        .date_of_birth
        .ok_or_else(|| PolicyError::invalid_request("Policyholder does not have date of birth"))?;
    Ok(age_on(dob, as_of))
}

fn check_children(
    request: &ApplicationRequest,
    quote: &QuoteModule,
    as_of: NaiveDate,
) -> Result<(), PolicyError> {
    let Some(quoted) = &quote.children else {
        return Ok(());
    };

    let supplied = request.children.as_deref().unwrap_or_default();
    if supplied.len() != quoted.len() {
        return Err(PolicyError::invalid_request(format!(
            "Incorrect number of children provided. Expected: {}",
            quoted.len()
        )));
    }

    let mut supplied_ages: Vec<u8> = supplied
        .iter()
        .map(|child| age_on(child.date_of_birth, as_of))
        .collect();
    let mut quoted_ages: Vec<u8> = quoted.iter().map(|child| child.age).collect();
    supplied_ages.sort_unstable();
    quoted_ages.sort_unstable();

    if supplied_ages != quoted_ages {
        return Err(PolicyError::invalid_request(format!(
            "Child ages do not match quote. Expected ages: {:?}",
            quoted_ages
        )));
    }
    Ok(())
}

fn check_spouse_age(
    request: &ApplicationRequest,
    quote: &QuoteModule,
    as_of: NaiveDate,
) -> Result<(), PolicyError> {
    if !quote.spouse_included {
        return Ok(());
    }
    let (Some(quoted_spouse), Some(spouse)) = (&quote.spouse, &request.spouse) else {
        return Ok(());
    };

    let age = age_on(spouse.date_of_birth, as_of);
    if age != quoted_spouse.age {
        return Err(PolicyError::invalid_request(format!(
            "Spouse age does not match age provided in quote. Expected: {}",
            quoted_spouse.age
        )));
    }
    Ok(())
}

fn check_extended_family(
    request: &ApplicationRequest,
    quote: &QuoteModule,
    as_of: NaiveDate,
) -> Result<(), PolicyError> {
    if !quote.extended_family_included {
        return Ok(());
    }
    let quoted = quote.extended_family.as_deref().unwrap_or_default();
    let supplied = request.extended_family.as_deref().unwrap_or_default();

    if supplied.len() != quoted.len() {
        return Err(PolicyError::invalid_request(format!(
            "Number of extended family members must match quote. Expected: {}",
            quoted.len()
        )));
    }

    let mut supplied_ages: Vec<u8> = supplied
        .iter()
        .map(|member| age_on(member.person.date_of_birth, as_of))
        .collect();
    let mut quoted_ages: Vec<u8> = quoted.iter().map(|member| member.age).collect();
    supplied_ages.sort_unstable();
    quoted_ages.sort_unstable();

    if supplied_ages != quoted_ages {
        return Err(PolicyError::invalid_request(format!(
            "Extended family members' ages do not match quote. Expected ages: {:?}",
            quoted_ages
        )));
    }
    Ok(())
}

fn check_policyholder_gender(
    policyholder: &Policyholder,
    quote: &QuoteModule,
) -> Result<(), PolicyError> {
    let Some(quoted_gender) = quote.gender else {
        return Ok(());
    };

    let Some(gender) = policyholder.gender else {
        return Err(PolicyError::invalid_request(format!(
            "Policyholder does not have gender set, but quote expects: {:?}. \
             Consider updating the policyholder's gender, or getting a gender-less \
             (blended) quote instead.",
            quoted_gender
        )));
    };

    if gender != quoted_gender {
        return Err(PolicyError::invalid_request(format!(
            "Policyholder does not match quoted gender. Expected: {:?}. \
             Consider getting a gender-less (blended) quote instead.",
            quoted_gender
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_on_before_and_after_birthday() {
        let dob = NaiveDate::from_ymd_opt(1990, 6, 15).unwrap();
        assert_eq!(age_on(dob, NaiveDate::from_ymd_opt(2025, 6, 14).unwrap()), 34);
        assert_eq!(age_on(dob, NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()), 35);
        assert_eq!(age_on(dob, NaiveDate::from_ymd_opt(2025, 6, 16).unwrap()), 35);
    }

    #[test]
    fn test_age_on_never_negative() {
        let dob = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
        assert_eq!(age_on(dob, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()), 0);
    }
}
