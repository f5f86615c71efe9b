//! Money held in integer minor currency units
//!
//! Every amount the product deals in (cover amounts, premiums, fees,
//! balances) is a whole number of minor units, so `Money` stores an `i64`
//! rather than a decimal. Rate arithmetic still happens in `rust_decimal`
//! and is rounded back to minor units exactly once, half away from zero.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Neg, Sub};
use thiserror::Error;

/// Currencies the product is sold in, following ISO 4217
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Mauritian rupee - the product's home currency
    MUR,
    ZAR,
    USD,
}

impl Currency {
    /// Returns the number of minor-unit decimal places
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::MUR | Currency::ZAR | Currency::USD => 2,
        }
    }

    /// Returns the ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::MUR => "MUR",
            Currency::ZAR => "ZAR",
            Currency::USD => "USD",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Currency mismatch: cannot operate on {0} and {1}")]
    CurrencyMismatch(String, String),

    #[error("Amount does not fit in minor units: {0}")]
    OutOfRange(String),
}

/// A monetary amount in integer minor units with its currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    minor_units: i64,
    currency: Currency,
}

impl Money {
    /// Creates Money from an amount in minor units (e.g. cents)
    pub fn from_minor(minor_units: i64, currency: Currency) -> Self {
        Self {
            minor_units,
            currency,
        }
    }

    /// Creates a zero amount in the given currency
    pub fn zero(currency: Currency) -> Self {
        Self::from_minor(0, currency)
    }

    /// Rounds a decimal amount of minor units to Money, half away from zero
    pub fn from_decimal_minor(amount: Decimal, currency: Currency) -> Result<Self, MoneyError> {
        let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        let minor_units = rounded
            .to_i64()
            .ok_or_else(|| MoneyError::OutOfRange(amount.to_string()))?;
        Ok(Self::from_minor(minor_units, currency))
    }

    /// Returns the amount in minor units
    pub fn minor_units(&self) -> i64 {
        self.minor_units
    }

    /// Returns the amount in minor units as a decimal, for rate arithmetic
    pub fn as_decimal(&self) -> Decimal {
        Decimal::from(self.minor_units)
    }

    /// Returns the currency
    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn is_zero(&self) -> bool {
        self.minor_units == 0
    }

    pub fn is_negative(&self) -> bool {
        self.minor_units < 0
    }

    /// Returns the absolute value
    pub fn abs(&self) -> Self {
        Self::from_minor(self.minor_units.abs(), self.currency)
    }

    /// Checked addition that fails on currency mismatch
    pub fn checked_add(&self, other: &Money) -> Result<Money, MoneyError> {
        self.same_currency(other)?;
        Ok(Self::from_minor(
            self.minor_units + other.minor_units,
            self.currency,
        ))
    }

    /// Checked subtraction that fails on currency mismatch
    pub fn checked_sub(&self, other: &Money) -> Result<Money, MoneyError> {
        self.same_currency(other)?;
        Ok(Self::from_minor(
            self.minor_units - other.minor_units,
            self.currency,
        ))
    }

    fn same_currency(&self, other: &Money) -> Result<(), MoneyError> {
        if self.currency != other.currency {
            return Err(MoneyError::CurrencyMismatch(
                self.currency.to_string(),
                other.currency.to_string(),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dp = self.currency.decimal_places();
        let major = Decimal::new(self.minor_units, dp);
        write!(f, "{} {:.dp$}", self.currency.code(), major, dp = dp as usize)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.checked_add(&other)
            .expect("Currency mismatch in Money::add")
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.checked_sub(&other)
            .expect("Currency mismatch in Money::sub")
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_minor(-self.minor_units, self.currency)
    }
}
