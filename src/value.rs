//! Cell values as the host stores them.

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::RowError;

/// Naive layouts accepted for text cells, tried in order after RFC 3339.
const TEXT_DATETIME_LAYOUTS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y/%m/%d %H:%M:%S"];
const TEXT_DATE_LAYOUTS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

/// One run of rich text. The host only ever writes `type: "text"` runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSegment {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

impl TextSegment {
    pub fn plain(text: impl Into<String>) -> Self {
        TextSegment {
            kind: "text".to_string(),
            text: text.into(),
        }
    }
}

/// A cell value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    /// An explicitly empty cell
    Null,
    /// Milliseconds since the Unix epoch, as date/time fields store them
    DateTime(i64),
    /// A plain number
    Number(f64),
    /// Rich text
    Text(Vec<TextSegment>),
    /// A checkbox
    Bool(bool),
}

impl FieldValue {
    /// Single-run text value, the shape written into target fields.
    pub fn text(s: impl Into<String>) -> Self {
        FieldValue::Text(vec![TextSegment::plain(s)])
    }

    /// Concatenated text of all runs, if this is text.
    pub fn as_plain_text(&self) -> Option<String> {
        match self {
            FieldValue::Text(segments) => Some(segments.iter().map(|s| s.text.as_str()).collect()),
            _ => None,
        }
    }

    /// True if the cell holds nothing worth formatting.
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Null => true,
            FieldValue::Text(segments) => segments.iter().all(|s| s.text.trim().is_empty()),
            FieldValue::DateTime(_) | FieldValue::Number(_) | FieldValue::Bool(_) => false,
        }
    }

    /// Calendar date of this value in the zone given by `offset`.
    ///
    /// Instants are projected into `offset` before the time of day is
    /// dropped. Text with no zone is taken as already local.
    pub fn to_date(&self, offset: FixedOffset) -> Result<NaiveDate, RowError> {
        match self {
            FieldValue::DateTime(ms) => millis_to_date(*ms, offset)
                .ok_or_else(|| RowError::UnparseableDate { raw: ms.to_string() }),
            FieldValue::Number(n) => {
                if n.is_finite() && n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
                    millis_to_date(*n as i64, offset)
                        .ok_or_else(|| RowError::UnparseableDate { raw: n.to_string() })
                } else {
                    Err(RowError::UnparseableDate { raw: n.to_string() })
                }
            }
            FieldValue::Text(_) => {
                let text = self.as_plain_text().unwrap_or_default();
                parse_text_date(text.trim(), offset)
                    .ok_or(RowError::UnparseableDate { raw: text })
            }
            FieldValue::Bool(b) => Err(RowError::UnparseableDate { raw: b.to_string() }),
            FieldValue::Null => Err(RowError::MissingSourceValue),
        }
    }

    /// Midnight of `date` in the zone given by `offset`, as a date/time cell.
    ///
    /// `to_date` with the same offset gives `date` back.
    pub fn date_at(date: NaiveDate, offset: FixedOffset) -> Self {
        let ms = date
            .and_hms_opt(0, 0, 0)
            .and_then(|local| local.checked_sub_signed(offset_delta(offset)))
            .map(|utc| utc.and_utc().timestamp_millis())
            .unwrap_or_default();
        FieldValue::DateTime(ms)
    }
}

/// Midnight UTC of the date. Use [`FieldValue::date_at`] when the reading
/// side uses another offset; a negative offset would read the previous day.
impl From<NaiveDate> for FieldValue {
    fn from(date: NaiveDate) -> Self {
        FieldValue::date_at(date, FixedOffset::east_opt(0).expect("UTC is a valid offset"))
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::text(s)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

fn offset_delta(offset: FixedOffset) -> Duration {
    Duration::seconds(offset.local_minus_utc() as i64)
}

/// Local date of a UTC instant, or `None` if the shift leaves chrono's range.
fn local_date(utc: NaiveDateTime, offset: FixedOffset) -> Option<NaiveDate> {
    utc.checked_add_signed(offset_delta(offset))
        .map(|local| local.date())
}

fn millis_to_date(ms: i64, offset: FixedOffset) -> Option<NaiveDate> {
    DateTime::from_timestamp_millis(ms).and_then(|dt| local_date(dt.naive_utc(), offset))
}

fn parse_text_date(text: &str, offset: FixedOffset) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return local_date(dt.naive_utc(), offset);
    }
    for layout in TEXT_DATETIME_LAYOUTS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, layout) {
            return Some(dt.date());
        }
    }
    for layout in TEXT_DATE_LAYOUTS {
        if let Ok(date) = NaiveDate::parse_from_str(text, layout) {
            return Some(date);
        }
    }
    None
}
