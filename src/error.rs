//! Error types for formatting dates and updating records.

use chrono::NaiveDate;
use thiserror::Error;

use crate::table::{FieldId, FieldType, TableId};

/// Errors that can occur when formatting a date.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    #[error("unknown format selector {value} (expected 0..=6)")]
    UnknownSelector { value: i64 },

    #[error("format selector '{raw}' is not an integer")]
    InvalidSelector { raw: String },

    #[error("lunar day {day} has no numeral (expected 1..=31)")]
    InvalidLunarDay { day: u32 },

    #[error("date {date} is outside the supported lunar calendar range")]
    DateOutOfRange { date: NaiveDate },
}

/// Errors scoped to a single row. These never abort a batch.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RowError {
    #[error("source field has no value")]
    MissingSourceValue,

    #[error("cannot interpret '{raw}' as a date")]
    UnparseableDate { raw: String },

    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Errors reported by a data source while listing or fetching.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SourceError {
    #[error("table {table} not found")]
    TableNotFound { table: TableId },

    #[error("field {field} not found")]
    FieldNotFound { field: FieldId },

    #[error("data source unavailable: {reason}")]
    Unavailable { reason: String },
}

/// Errors reported by a data source when the bulk write fails.
///
/// Nothing may be assumed persisted after a commit error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommitError {
    #[error("table {table} not found")]
    TableNotFound { table: TableId },

    #[error("commit rejected: {reason}")]
    Rejected { reason: String },
}

/// Invocation-level errors that abort a whole update run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UpdateError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Commit(#[from] CommitError),

    #[error("field {field} has type {found:?}, expected {expected}")]
    IncompatibleField {
        field: FieldId,
        expected: &'static str,
        found: FieldType,
    },
}
