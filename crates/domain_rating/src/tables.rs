//! Actuarial rate tables
//!
//! Tables arrive as whitespace-delimited text: a header row naming the
//! columns, then one row per age with a decimal rate per column. Column
//! names are case-insensitive and lower-cased on load. Parsing validates
//! the schema explicitly - column counts, numeric cells, unique ages -
//! so a malformed table fails at load time rather than producing a
//! garbage rate mid-quote.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::RatingError;

/// Member gender for gendered rate columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// The table column this gender resolves to
    fn column(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

/// Column used when no gender is supplied
const BLENDED_COLUMN: &str = "blended_gender";

/// Column name of the single-rate children table
const RATE_COLUMN: &str = "rate";

/// Identifies which of the four embedded tables a table holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableId {
    MainMember,
    Spouse,
    Children,
    ExtendedFamily,
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TableId::MainMember => "main_member",
            TableId::Spouse => "spouse",
            TableId::Children => "children",
            TableId::ExtendedFamily => "extended_family",
        };
        write!(f, "{}", name)
    }
}

/// One table row: the rate per column for a single age
#[derive(Debug, Clone)]
pub struct RateRow {
    table: TableId,
    columns: BTreeMap<String, Decimal>,
}

impl RateRow {
    /// Resolves the rate for a gendered table row
    ///
    /// A supplied gender selects its own column; absence falls back to
    /// the blended column.
    pub fn rate(&self, gender: Option<Gender>) -> Result<Decimal, RatingError> {
        let column = gender.map_or(BLENDED_COLUMN, |g| g.column());
        self.column(column)
    }

    /// Resolves the single `rate` column of the children table
    pub fn single_rate(&self) -> Result<Decimal, RatingError> {
        self.column(RATE_COLUMN)
    }

    fn column(&self, column: &str) -> Result<Decimal, RatingError> {
        self.columns
            .get(column)
            .copied()
            .ok_or_else(|| RatingError::MissingColumn {
                table: self.table,
                column: column.to_string(),
            })
    }
}

/// An immutable, age-indexed rate table
#[derive(Debug, Clone)]
pub struct RateTable {
    id: TableId,
    rows: BTreeMap<u8, RateRow>,
}

impl RateTable {
    /// Parses a whitespace-delimited table, validating its schema
    pub fn parse(id: TableId, source: &str) -> Result<Self, RatingError> {
        let mut lines = source
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty());

        let (_, header) = lines
            .next()
            .ok_or(RatingError::MalformedHeader { table: id })?;
        let columns: Vec<String> = header
            .split_whitespace()
            .map(|name| name.to_lowercase())
            .collect();
        if columns.len() < 2 || columns[0] != "age" {
            return Err(RatingError::MalformedHeader { table: id });
        }

        let mut rows = BTreeMap::new();
        for (line_no, line) in lines {
            let cells: Vec<&str> = line.split_whitespace().collect();
            if cells.len() != columns.len() {
                return Err(RatingError::ColumnCount {
                    table: id,
                    line: line_no,
                    expected: columns.len(),
                    found: cells.len(),
                });
            }

            let age = u8::from_str(cells[0]).map_err(|_| RatingError::InvalidNumber {
                table: id,
                line: line_no,
                value: cells[0].to_string(),
            })?;

            let mut row_columns = BTreeMap::new();
            for (name, cell) in columns[1..].iter().zip(&cells[1..]) {
                let rate = Decimal::from_str(cell).map_err(|_| RatingError::InvalidNumber {
                    table: id,
                    line: line_no,
                    value: cell.to_string(),
                })?;
                row_columns.insert(name.clone(), rate);
            }

            let row = RateRow {
                table: id,
                columns: row_columns,
            };
            if rows.insert(age, row).is_some() {
                return Err(RatingError::DuplicateAge {
                    table: id,
                    line: line_no,
                    age,
                });
            }
        }

        if rows.is_empty() {
            return Err(RatingError::EmptyTable { table: id });
        }

        Ok(Self { id, rows })
    }

    /// Looks up the row for an exact age - no interpolation
    pub fn lookup(&self, age: u8) -> Result<&RateRow, RatingError> {
        self.rows.get(&age).ok_or(RatingError::RatingDataMissing {
            table: self.id,
            age,
        })
    }

    /// The closed age range covered by this table
    pub fn age_range(&self) -> (u8, u8) {
        // parse() guarantees at least one row
        let min = self.rows.keys().next().copied().unwrap_or(0);
        let max = self.rows.keys().next_back().copied().unwrap_or(0);
        (min, max)
    }

    pub fn id(&self) -> TableId {
        self.id
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
