//! Timezone and policy-term date handling

use chrono::{DateTime, Months, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// The organization's configured timezone
///
/// Wraps `chrono_tz::Tz` with string serde so quote snapshots record the
/// timezone by IANA name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timezone(pub Tz);

impl Timezone {
    pub fn new(tz: Tz) -> Self {
        Self(tz)
    }

    /// Returns the IANA name, e.g. "Indian/Mauritius"
    pub fn name(&self) -> &'static str {
        self.0.name()
    }
}

impl Default for Timezone {
    fn default() -> Self {
        Self(chrono_tz::UTC)
    }
}

impl Serialize for Timezone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.0.name())
    }
}

impl<'de> Deserialize<'de> for Timezone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Tz::from_str(&s)
            .map(Timezone)
            .map_err(|_| serde::de::Error::custom(format!("Invalid timezone: {}", s)))
    }
}

/// Advances a timestamp by whole calendar years, used for policy terms
///
/// Falls back to day-count arithmetic on the rare calendar edge
/// (e.g. leap-day overflow at the i32 month limit).
pub fn add_years(from: DateTime<Utc>, years: u32) -> DateTime<Utc> {
    from.checked_add_months(Months::new(years * 12))
        .unwrap_or(from + chrono::Duration::days(365 * years as i64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_add_one_year() {
        let start = Utc.with_ymd_and_hms(2025, 3, 15, 10, 30, 0).unwrap();
        let end = add_years(start, 1);
        assert_eq!(end, Utc.with_ymd_and_hms(2026, 3, 15, 10, 30, 0).unwrap());
    }

    #[test]
    fn test_add_years_over_leap_day() {
        let start = Utc.with_ymd_and_hms(2024, 2, 29, 0, 0, 0).unwrap();
        let end = add_years(start, 1);
        // Feb 29 clamps to Feb 28 in a non-leap year
        assert_eq!(end, Utc.with_ymd_and_hms(2025, 2, 28, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_timezone_serde_by_name() {
        let tz = Timezone::new(chrono_tz::Indian::Mauritius);
        let json = serde_json::to_string(&tz).unwrap();
        assert_eq!(json, "\"Indian/Mauritius\"");
        let back: Timezone = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tz);
    }

    #[test]
    fn test_timezone_rejects_garbage() {
        let err = serde_json::from_str::<Timezone>("\"Not/AZone\"");
        assert!(err.is_err());
    }
}
