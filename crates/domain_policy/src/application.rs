//! Application composition
//!
//! The application layers applicant identity records over the quoted
//! snapshot. Pricing is never recomputed here: premiums and every
//! structural field are carried from the quote, and the quoted monthly
//! figure is the suggested premium. Anonymous per-member ages from the
//! quote snapshot are replaced by the named person records.

use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::{Currency, Money, Timezone};
use domain_rating::Gender;

use crate::error::PolicyError;
use crate::identity::{ExtendedFamilyMember, PersonDetails, Policyholder};
use crate::quote::Quote;
use crate::validation::{run_checks, ApplicationChecks};

/// Applicant-supplied data accompanying an application
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ApplicationRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spouse: Option<PersonDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<PersonDetails>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extended_family: Option<Vec<ExtendedFamilyMember>>,
}

/// Snapshot carried by an application: quoted structure plus named people
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationModule {
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
    pub spouse: Option<PersonDetails>,
    pub children_included: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children_cover_amount: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<PersonDetails>>,
    pub extended_family_included: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extended_family_cover_amount: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extended_family: Option<Vec<ExtendedFamilyMember>>,
    pub timezone: Timezone,
}

/// An accepted application, ready to be issued as a policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub package_name: String,
    pub sum_assured: Money,
    pub base_premium: Money,
    pub monthly_premium: Money,
    /// Opaque echo of the request as received
    pub input_data: serde_json::Value,
    pub module: ApplicationModule,
}

/// Composes applications from quotes and applicant identity data
#[derive(Debug, Clone, Default)]
pub struct ApplicationComposer {
    checks: ApplicationChecks,
}

impl ApplicationComposer {
    pub fn new(checks: ApplicationChecks) -> Self {
        Self { checks }
    }

    /// Builds an [`Application`] from a quote and the applicant's records.
    ///
    /// `as_of` is the date ages are derived against when cross-checks are
    /// enabled.
    pub fn application(
        &self,
        request: &ApplicationRequest,
        policyholder: &Policyholder,
        quote: &Quote,
        as_of: chrono::NaiveDate,
    ) -> Result<Application, PolicyError> {
        run_checks(&self.checks, request, policyholder, &quote.module, as_of)?;

        debug!(
            package = %quote.package_name,
            monthly_premium = quote.suggested_premium.minor_units(),
            "composed application"
        );

        Ok(Application {
            package_name: quote.package_name.clone(),
            sum_assured: quote.sum_assured,
            base_premium: quote.base_premium,
            monthly_premium: quote.suggested_premium,
            input_data: serde_json::to_value(request)?,
            module: ApplicationModule {
                module_type: quote.module.module_type.clone(),
                cover_amount: quote.module.cover_amount,
                age: quote.module.age,
                gender: quote.module.gender,
                spouse_included: quote.module.spouse_included,
                spouse_cover_amount: quote.module.spouse_cover_amount,
                spouse: request.spouse.clone(),
                children_included: quote.module.children_included,
                children_cover_amount: quote.module.children_cover_amount,
                children: request.children.clone(),
                extended_family_included: quote.module.extended_family_included,
                extended_family_cover_amount: quote.module.extended_family_cover_amount,
                extended_family: request.extended_family.clone(),
                timezone: quote.module.timezone,
            },
        })
    }
}
