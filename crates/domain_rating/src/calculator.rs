//! Premium calculation
//!
//! The risk premium for a household is the sum of independent
//! contributions: main member, optional spouse, optional children (per
//! age or flat), optional extended family members. Each contribution is
//! `rate * cover / 1000` with the rate looked up by exact age. The risk
//! premium stays a decimal until the loading step rounds it into minor
//! currency units.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use core_kernel::{Currency, Money};

use crate::error::RatingError;
use crate::repository::RateTables;
use crate::request::QuoteRequest;

/// Legal ceiling on child cover for young ages: 10 000 major units
pub const CHILD_LEGAL_COVER_CEILING: i64 = 1_000_000;

/// Divisor applied to every rate * cover product
const PER_MILLE: Decimal = dec!(1000);

/// Remaining share of the premium after the 10% platform fee
const PLATFORM_FEE_FACTOR: Decimal = dec!(0.9);

/// Remaining share after the 10% platform fee plus 20% commission
const COMMISSION_FACTOR: Decimal = dec!(0.7);

/// Computes the household risk premium in decimal minor units
///
/// # Errors
///
/// - [`RatingError::InvalidRequest`] when exactly one of the main member
///   and spouse carries a gender, or when an included group omits the
///   details the inclusion flag promises
/// - [`RatingError::RatingDataMissing`] when an age falls outside its
///   table - the upstream validator range-checks, so reaching this means
///   a caller skipped validation
pub fn risk_premium(tables: &RateTables, request: &QuoteRequest) -> Result<Decimal, RatingError> {
    let mut risk = Decimal::ZERO;

    let main_row = tables.main_member().lookup(request.age)?;
    risk += main_row.rate(request.gender)? * request.cover_amount.as_decimal() / PER_MILLE;

    if request.spouse_included {
        let spouse = request.spouse.as_ref().ok_or_else(|| {
            RatingError::invalid_request("Spouse details required when spouse is included")
        })?;
        let cover = request.spouse_cover_amount.ok_or_else(|| {
            RatingError::invalid_request("Spouse cover amount required when spouse is included")
        })?;

        // Gender must be specified for both members or neither, in
        // either direction.
        if request.gender.is_some() != spouse.gender.is_some() {
            return Err(RatingError::invalid_request(
                "Spouse gender required when main member gender is specified",
            ));
        }

        let row = tables.spouse().lookup(spouse.age)?;
        risk += row.rate(spouse.gender)? * cover.as_decimal() / PER_MILLE;
    }

    if request.children_included {
        let cover = request.children_cover_amount.ok_or_else(|| {
            RatingError::invalid_request(
                "Children cover amount required when children are included",
            )
        })?;

        match &request.children {
            Some(children) => {
                for child in children {
                    let rate = tables.children().lookup(child.age)?.single_rate()?;
                    let capped = capped_child_cover(child.age, cover);
                    risk += rate * capped.as_decimal() / PER_MILLE;
                }
            }
            None => {
                risk += tables.flat_children_rate() * cover.as_decimal() / PER_MILLE;
            }
        }
    }

    if request.extended_family_included {
        let members = request.extended_family.as_ref().ok_or_else(|| {
            RatingError::invalid_request(
                "Extended family members required when extended family is included",
            )
        })?;
        let cover = request.extended_family_cover_amount.ok_or_else(|| {
            RatingError::invalid_request(
                "Extended family cover amount required when extended family is included",
            )
        })?;

        for member in members {
            let row = tables.extended_family().lookup(member.age)?;
            risk += row.rate(member.gender)? * cover.as_decimal() / PER_MILLE;
        }
    }

    debug!(risk_premium = %risk, age = request.age, "computed household risk premium");
    Ok(risk)
}

/// Applies the legal ceiling to a child's cover amount
///
/// Ages under 6 and under 14 currently share the same ceiling; the two
/// branches are kept separate because they are distinct legal brackets.
/// From age 14 the requested cover stands unchanged.
pub fn capped_child_cover(age: u8, cover: Money) -> Money {
    let legal_max = if age < 6 {
        Some(CHILD_LEGAL_COVER_CEILING)
    } else if age < 14 {
        Some(CHILD_LEGAL_COVER_CEILING)
    } else {
        None
    };

    match legal_max {
        Some(max) if max < cover.minor_units() => Money::from_minor(max, cover.currency()),
        _ => cover,
    }
}

/// Base premium: risk premium grossed up for the 10% platform fee
pub fn base_premium(risk_premium: Decimal, currency: Currency) -> Result<Money, RatingError> {
    Ok(Money::from_decimal_minor(
        risk_premium / PLATFORM_FEE_FACTOR,
        currency,
    )?)
}

/// Suggested premium: grossed up for platform fee plus 20% commission
pub fn suggested_premium(risk_premium: Decimal, currency: Currency) -> Result<Money, RatingError> {
    Ok(Money::from_decimal_minor(
        risk_premium / COMMISSION_FACTOR,
        currency,
    )?)
}
