//! Rating domain errors

use crate::tables::TableId;
use core_kernel::MoneyError;
use thiserror::Error;

/// Errors raised by the rating engine
///
/// `InvalidRequest` is the only domain error a well-formed caller can
/// trigger; the remaining variants surface table schema problems at load
/// time or lookups the upstream validator should have prevented.
#[derive(Debug, Error)]
pub enum RatingError {
    /// The request is structurally valid but actuarially inconsistent
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// No table row exists for the requested age
    #[error("No {table} rate for age {age}")]
    RatingDataMissing { table: TableId, age: u8 },

    /// A table row does not match the header's column count
    #[error("{table} table line {line}: expected {expected} columns, found {found}")]
    ColumnCount {
        table: TableId,
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A cell failed numeric parsing
    #[error("{table} table line {line}: invalid number {value:?}")]
    InvalidNumber {
        table: TableId,
        line: usize,
        value: String,
    },

    /// Two rows claim the same age
    #[error("{table} table line {line}: duplicate age {age}")]
    DuplicateAge {
        table: TableId,
        line: usize,
        age: u8,
    },

    /// The header row is missing or does not start with an age column
    #[error("{table} table has a malformed header")]
    MalformedHeader { table: TableId },

    /// The table has a header but no data rows
    #[error("{table} table has no rows")]
    EmptyTable { table: TableId },

    /// A row exists but lacks the requested rate column
    #[error("{table} table is missing column {column:?}")]
    MissingColumn { table: TableId, column: String },

    #[error(transparent)]
    Money(#[from] MoneyError),
}

impl RatingError {
    pub fn invalid_request(message: impl Into<String>) -> Self {
        RatingError::InvalidRequest(message.into())
    }
}
