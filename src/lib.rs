//! datefmt-base - date-to-text formatting for spreadsheet-like bases
//!
//! This crate renders calendar dates in seven fixed styles (Chinese, US
//! English and Chinese lunar) and writes them into a text field of every
//! row in a table, through a host-provided [`TableDataSource`].

pub mod error;
pub mod lunar;
pub mod memory;
pub mod options;
pub mod selector;
pub mod table;
pub mod updater;
pub mod value;

mod formatter;
mod locale;

pub use error::{CommitError, FormatError, RowError, SourceError, UpdateError};
pub use formatter::{add_ordinal_suffix, number_to_chinese};
pub use locale::Locale;
pub use options::{FormatOptions, UpdateOptions, DEFAULT_MAX_ROWS};
pub use selector::FormatSelector;
pub use table::{
    date_time_fields, text_fields, FieldId, FieldMeta, FieldType, RecordId, Row,
    TableDataSource, TableId, TableMeta,
};
pub use updater::{update_records, RowFailure, UpdateRequest, UpdateSummary};
pub use value::{FieldValue, TextSegment};

/// A calendar date. Time of day never affects formatting.
pub type DateValue = chrono::NaiveDate;

/// Format a date with the given options.
pub fn format_date_with(
    date: DateValue,
    selector: FormatSelector,
    opts: &FormatOptions,
) -> Result<String, FormatError> {
    formatter::format_date(date, selector, opts)
}

/// Format a date with the built-in `zh-CN` and `en-US` names.
pub fn format_date(date: DateValue, selector: FormatSelector) -> Result<String, FormatError> {
    format_date_with(date, selector, &FormatOptions::default())
}
