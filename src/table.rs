//! Table model and the data source seam.
//!
//! The host platform owns tables, fields and records. This crate only sees
//! them through [`TableDataSource`]: it lists metadata, fetches a bounded
//! page of rows, and writes the rows back in a single commit.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CommitError, SourceError};
use crate::value::FieldValue;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                $name(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                $name(s)
            }
        }
    };
}

string_id!(
    /// Identifier of a table within a base.
    TableId
);
string_id!(
    /// Identifier of a field (column) within a table.
    FieldId
);
string_id!(
    /// Identifier of a record (row) within a table.
    RecordId
);

/// Declared type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Text,
    Number,
    SingleSelect,
    MultiSelect,
    DateTime,
    Checkbox,
    User,
    Url,
    Attachment,
    /// A host type this crate has no use for, by its numeric code.
    Other(u32),
}

impl FieldType {
    /// True if the field can be a formatting source.
    pub fn is_date_time(self) -> bool {
        match self {
            FieldType::DateTime => true,
            FieldType::Text
            | FieldType::Number
            | FieldType::SingleSelect
            | FieldType::MultiSelect
            | FieldType::Checkbox
            | FieldType::User
            | FieldType::Url
            | FieldType::Attachment
            | FieldType::Other(_) => false,
        }
    }

    /// True if the field can receive formatted text.
    pub fn is_text(self) -> bool {
        match self {
            FieldType::Text => true,
            FieldType::Number
            | FieldType::SingleSelect
            | FieldType::MultiSelect
            | FieldType::DateTime
            | FieldType::Checkbox
            | FieldType::User
            | FieldType::Url
            | FieldType::Attachment
            | FieldType::Other(_) => false,
        }
    }
}

/// Table metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableMeta {
    pub id: TableId,
    pub name: String,
}

/// Field metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldMeta {
    pub id: FieldId,
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
}

/// One record with its cell values. Absent keys are empty cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub record_id: RecordId,
    #[serde(default)]
    pub fields: BTreeMap<FieldId, FieldValue>,
}

impl Row {
    pub fn new(record_id: impl Into<RecordId>) -> Self {
        Row {
            record_id: record_id.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style cell assignment.
    pub fn with(mut self, field: impl Into<FieldId>, value: FieldValue) -> Self {
        self.fields.insert(field.into(), value);
        self
    }

    pub fn get(&self, field: &FieldId) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    pub fn set(&mut self, field: FieldId, value: FieldValue) {
        self.fields.insert(field, value);
    }
}

/// Access to the host's tables.
pub trait TableDataSource {
    fn list_tables(&self) -> Result<Vec<TableMeta>, SourceError>;

    fn list_fields(&self, table: &TableId) -> Result<Vec<FieldMeta>, SourceError>;

    /// Fetch at most `max_count` rows of `table`.
    fn fetch_rows(&self, table: &TableId, max_count: usize) -> Result<Vec<Row>, SourceError>;

    /// Write `rows` back in one batch.
    fn commit_rows(&self, table: &TableId, rows: &[Row]) -> Result<(), CommitError>;
}

/// Fields of `table` that can be used as a formatting source.
pub fn date_time_fields<S>(source: &S, table: &TableId) -> Result<Vec<FieldMeta>, SourceError>
where
    S: TableDataSource + ?Sized,
{
    let fields = source.list_fields(table)?;
    Ok(fields
        .into_iter()
        .filter(|f| f.field_type.is_date_time())
        .collect())
}

/// Fields of `table` that can receive formatted text.
pub fn text_fields<S>(source: &S, table: &TableId) -> Result<Vec<FieldMeta>, SourceError>
where
    S: TableDataSource + ?Sized,
{
    let fields = source.list_fields(table)?;
    Ok(fields.into_iter().filter(|f| f.field_type.is_text()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_type_eligibility() {
        assert!(FieldType::DateTime.is_date_time());
        assert!(!FieldType::DateTime.is_text());
        assert!(FieldType::Text.is_text());
        assert!(!FieldType::Number.is_date_time());
        assert!(!FieldType::Other(1001).is_text());
    }

    #[test]
    fn test_row_set_overwrites() {
        let mut row = Row::new("rec1").with("fld", FieldValue::text("old"));
        row.set(FieldId::from("fld"), FieldValue::text("new"));
        assert_eq!(row.get(&"fld".into()), Some(&FieldValue::text("new")));
        assert_eq!(row.fields.len(), 1);
    }
}
