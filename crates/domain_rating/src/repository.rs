//! Rate table repository
//!
//! Loads the four fixed pricing tables embedded with the crate, plus the
//! flat per-household children rate. The
//! repository is built once at startup and is read-only afterwards, so
//! concurrent readers never race.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::RatingError;
use crate::tables::{RateTable, TableId};

/// Flat per-household children rate, used when no per-child ages are given
const FLAT_CHILDREN_RATE: Decimal = dec!(0.7755994882);

/// The actuarial datasets backing the rating engine
#[derive(Debug, Clone)]
pub struct RateTables {
    main_member: RateTable,
    spouse: RateTable,
    children: RateTable,
    extended_family: RateTable,
    flat_children_rate: Decimal,
}

impl RateTables {
    /// Parses and indexes the embedded tables
    ///
    /// Any schema problem in the embedded data is a load error; nothing
    /// is coerced or defaulted.
    pub fn load() -> Result<Self, RatingError> {
        Ok(Self {
            main_member: RateTable::parse(
                TableId::MainMember,
                include_str!("../data/main_member.txt"),
            )?,
            spouse: RateTable::parse(TableId::Spouse, include_str!("../data/spouse.txt"))?,
            children: RateTable::parse(TableId::Children, include_str!("../data/children.txt"))?,
            extended_family: RateTable::parse(
                TableId::ExtendedFamily,
                include_str!("../data/extended_family.txt"),
            )?,
            flat_children_rate: FLAT_CHILDREN_RATE,
        })
    }

    pub fn main_member(&self) -> &RateTable {
        &self.main_member
    }

    pub fn spouse(&self) -> &RateTable {
        &self.spouse
    }

    pub fn children(&self) -> &RateTable {
        &self.children
    }

    pub fn extended_family(&self) -> &RateTable {
        &self.extended_family
    }

    pub fn flat_children_rate(&self) -> Decimal {
        self.flat_children_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::Gender;

    #[test]
    fn test_load_embedded_tables() {
        let tables = RateTables::load().unwrap();
        assert_eq!(tables.main_member().age_range(), (18, 70));
        assert_eq!(tables.spouse().age_range(), (18, 70));
        assert_eq!(tables.children().age_range(), (0, 21));
        assert_eq!(tables.extended_family().age_range(), (0, 80));
    }

    #[test]
    fn test_published_entries_survive_loading_exactly() {
        let tables = RateTables::load().unwrap();

        let row = tables.main_member().lookup(30).unwrap();
        assert_eq!(
            row.rate(None).unwrap(),
            "1.141663547".parse::<Decimal>().unwrap()
        );
        assert_eq!(
            row.rate(Some(Gender::Male)).unwrap(),
            "1.204559813".parse::<Decimal>().unwrap()
        );

        let spouse = tables.spouse().lookup(70).unwrap();
        assert_eq!(
            spouse.rate(Some(Gender::Female)).unwrap(),
            "4.28634766".parse::<Decimal>().unwrap()
        );

        let child = tables.children().lookup(0).unwrap();
        assert_eq!(
            child.single_rate().unwrap(),
            "0.6209950491".parse::<Decimal>().unwrap()
        );

        let family = tables.extended_family().lookup(80).unwrap();
        assert_eq!(
            family.rate(Some(Gender::Male)).unwrap(),
            "36.08343105".parse::<Decimal>().unwrap()
        );
    }
}
