//! Bulk record updater.
//!
//! One run fetches a bounded page of rows, formats the source date of each
//! row into the target text field, and writes the whole page back with a
//! single commit. The commit is only issued once every row has been
//! transformed or recorded as a failure.

use tracing::{debug, error, info, warn};

use crate::error::{RowError, SourceError, UpdateError};
use crate::formatter::format_date;
use crate::options::UpdateOptions;
use crate::selector::FormatSelector;
use crate::table::{FieldId, FieldMeta, RecordId, Row, TableDataSource, TableId};
use crate::value::FieldValue;

/// Parameters of one run, as collected by the host form.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateRequest {
    pub table_id: TableId,
    /// A date/time field to read.
    pub source_field: FieldId,
    /// A text field to write.
    pub target_field: FieldId,
    /// Raw style selector, validated before any data source call.
    pub format: i64,
}

impl UpdateRequest {
    pub fn new(
        table_id: impl Into<TableId>,
        source_field: impl Into<FieldId>,
        target_field: impl Into<FieldId>,
        format: i64,
    ) -> Self {
        UpdateRequest {
            table_id: table_id.into(),
            source_field: source_field.into(),
            target_field: target_field.into(),
            format,
        }
    }
}

/// A row whose target field was left untouched because of an error.
#[derive(Debug, Clone, PartialEq)]
pub struct RowFailure {
    pub record_id: RecordId,
    pub error: RowError,
}

/// Outcome of one run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UpdateSummary {
    /// Rows returned by the fetch, all of which were committed back.
    pub fetched: usize,
    /// Rows whose target field was written.
    pub processed: usize,
    /// Rows with an empty source field.
    pub skipped: usize,
    /// Rows that could not be formatted.
    pub failed: usize,
    pub failures: Vec<RowFailure>,
    /// True if the fetch hit `max_rows`; later rows were not processed.
    pub limit_reached: bool,
}

enum RowOutcome {
    Written,
    Skipped,
}

/// Format `request.source_field` into `request.target_field` for every
/// fetched row of `request.table_id`.
///
/// # Errors
/// Fails without touching rows when the selector is unknown or a field is
/// missing or of the wrong type, and fails as a whole when the fetch or the
/// commit fails. Per-row problems are reported in the summary instead.
pub fn update_records<S>(
    source: &S,
    request: &UpdateRequest,
    opts: &UpdateOptions,
) -> Result<UpdateSummary, UpdateError>
where
    S: TableDataSource + ?Sized,
{
    let selector = FormatSelector::try_from(request.format)?;
    info!(
        table = %request.table_id,
        source_field = %request.source_field,
        target_field = %request.target_field,
        selector = %selector,
        "updating records"
    );

    let fields = source.list_fields(&request.table_id)?;
    check_field(&fields, &request.source_field, "date_time", |f| {
        f.field_type.is_date_time()
    })?;
    check_field(&fields, &request.target_field, "text", |f| {
        f.field_type.is_text()
    })?;

    let mut rows = source.fetch_rows(&request.table_id, opts.max_rows)?;
    let mut summary = UpdateSummary {
        fetched: rows.len(),
        limit_reached: rows.len() >= opts.max_rows,
        ..UpdateSummary::default()
    };
    if summary.limit_reached {
        warn!(
            table = %request.table_id,
            max_rows = opts.max_rows,
            "row limit reached, later rows are not processed"
        );
    }

    for row in rows.iter_mut() {
        match transform_row(row, request, selector, opts) {
            Ok(RowOutcome::Written) => summary.processed += 1,
            Ok(RowOutcome::Skipped) => {
                debug!(record = %row.record_id, "no source value, skipping");
                summary.skipped += 1;
            }
            Err(err) => {
                warn!(record = %row.record_id, error = %err, "row not updated");
                summary.failed += 1;
                summary.failures.push(RowFailure {
                    record_id: row.record_id.clone(),
                    error: err,
                });
            }
        }
    }

    if let Err(err) = source.commit_rows(&request.table_id, &rows) {
        error!(table = %request.table_id, error = %err, "commit failed");
        return Err(err.into());
    }

    info!(
        table = %request.table_id,
        processed = summary.processed,
        skipped = summary.skipped,
        failed = summary.failed,
        "records updated"
    );
    Ok(summary)
}

fn check_field(
    fields: &[FieldMeta],
    id: &FieldId,
    expected: &'static str,
    accepts: impl Fn(&FieldMeta) -> bool,
) -> Result<(), UpdateError> {
    let field = fields
        .iter()
        .find(|f| &f.id == id)
        .ok_or_else(|| SourceError::FieldNotFound { field: id.clone() })?;

    if accepts(field) {
        Ok(())
    } else {
        Err(UpdateError::IncompatibleField {
            field: id.clone(),
            expected,
            found: field.field_type,
        })
    }
}

fn transform_row(
    row: &mut Row,
    request: &UpdateRequest,
    selector: FormatSelector,
    opts: &UpdateOptions,
) -> Result<RowOutcome, RowError> {
    let value = match row.get(&request.source_field) {
        Some(value) if !value.is_blank() => value,
        _ => return Ok(RowOutcome::Skipped),
    };

    let date = value.to_date(opts.reference_offset)?;
    let text = format_date(date, selector, &opts.format)?;
    row.set(request.target_field.clone(), FieldValue::text(text));
    Ok(RowOutcome::Written)
}
