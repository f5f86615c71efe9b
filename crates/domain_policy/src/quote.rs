//! Quote composition
//!
//! A quote is the priced package plus a frozen `module` snapshot of every
//! input it was priced from. The snapshot is the authoritative record a
//! later application is checked against, so it echoes the request
//! structurally - cover amounts, ages, genders, inclusion flags, raw
//! member sub-objects - and adds only the package type discriminator and
//! the organization timezone.

use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::{Money, Timezone};
use domain_rating::{
    base_premium, describe_package, risk_premium, suggested_premium, Child, Gender,
    HouseholdMember, QuoteRequest, RateTables,
};

use crate::error::PolicyError;

/// Module type discriminator carried by every snapshot
pub const PACKAGE_TYPE: &str = "root_funeral";

/// Frozen snapshot of the inputs a quote was priced from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteModule {
    #[serde(rename = "type")]
    pub module_type: String,
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
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Child>>,
    pub extended_family_included: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extended_family_cover_amount: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extended_family: Option<Vec<HouseholdMember>>,
    pub timezone: Timezone,
}

/// A priced funeral cover package
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub package_name: String,
    pub sum_assured: Money,
    pub base_premium: Money,
    pub suggested_premium: Money,
    pub terms: Vec<String>,
    /// Opaque echo of the request as received
    pub input_data: serde_json::Value,
    pub module: QuoteModule,
}

/// Prices quote requests against a loaded set of rate tables
#[derive(Debug, Clone)]
pub struct QuoteComposer {
    tables: RateTables,
    timezone: Timezone,
}

impl QuoteComposer {
    pub fn new(tables: RateTables, timezone: Timezone) -> Self {
        Self { tables, timezone }
    }

    /// Prices a household composition into a [`Quote`]
    pub fn quote(&self, request: &QuoteRequest) -> Result<Quote, PolicyError> {
        let risk = risk_premium(&self.tables, request)?;
        let currency = request.cover_amount.currency();
        let base = base_premium(risk, currency)?;
        let suggested = suggested_premium(risk, currency)?;

        let package = describe_package(request);
        debug!(
            package = %package.name,
            base_premium = base.minor_units(),
            suggested_premium = suggested.minor_units(),
            "composed quote"
        );

        Ok(Quote {
            package_name: format!("Funeral Cover: {}", package.name),
            sum_assured: request.cover_amount,
            base_premium: base,
            suggested_premium: suggested,
            terms: package.terms,
            input_data: serde_json::to_value(request)?,
            module: self.snapshot(request),
        })
    }

    fn snapshot(&self, request: &QuoteRequest) -> QuoteModule {
        QuoteModule {
            module_type: PACKAGE_TYPE.to_string(),
            cover_amount: request.cover_amount,
            age: request.age,
            gender: request.gender,
            spouse_included: request.spouse_included,
            spouse_cover_amount: request.spouse_cover_amount,
            spouse: request.spouse,
            children_included: request.children_included,
            children_cover_amount: request.children_cover_amount,
            children: request.children.clone(),
            extended_family_included: request.extended_family_included,
            extended_family_cover_amount: request.extended_family_cover_amount,
            extended_family: request.extended_family.clone(),
            timezone: self.timezone,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::Currency;

    fn composer() -> QuoteComposer {
        QuoteComposer::new(
            RateTables::load().unwrap(),
            Timezone::new(chrono_tz::Indian::Mauritius),
        )
    }

    #[test]
    fn test_module_echoes_request_and_adds_discriminator() {
        let request = QuoteRequest::main_member_only(
            Money::from_minor(500_000, Currency::MUR),
            30,
            Some(Gender::Male),
        );
        let quote = composer().quote(&request).unwrap();

        assert_eq!(quote.module.module_type, PACKAGE_TYPE);
        assert_eq!(quote.module.cover_amount, request.cover_amount);
        assert_eq!(quote.module.age, 30);
        assert_eq!(quote.module.gender, Some(Gender::Male));
        assert!(!quote.module.spouse_included);
        assert_eq!(quote.module.timezone.name(), "Indian/Mauritius");
    }

    #[test]
    fn test_input_data_is_a_faithful_echo() {
        let request = QuoteRequest::main_member_only(
            Money::from_minor(500_000, Currency::MUR),
            45,
            None,
        );
        let quote = composer().quote(&request).unwrap();
        let echoed: QuoteRequest = serde_json::from_value(quote.input_data.clone()).unwrap();
        assert_eq!(echoed, request);
    }
}
