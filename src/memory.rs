//! In-memory data source.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use crate::error::{CommitError, SourceError};
use crate::table::{FieldMeta, RecordId, Row, TableDataSource, TableId, TableMeta};

#[derive(Debug, Clone)]
struct MemoryTable {
    name: String,
    fields: Vec<FieldMeta>,
    rows: Vec<Row>,
    /// Position of each record in `rows`.
    index: BTreeMap<RecordId, usize>,
}

impl MemoryTable {
    fn new(name: String, fields: Vec<FieldMeta>, rows: Vec<Row>) -> Self {
        let index = rows
            .iter()
            .enumerate()
            .map(|(pos, row)| (row.record_id.clone(), pos))
            .collect();
        MemoryTable {
            name,
            fields,
            rows,
            index,
        }
    }

    /// Replace the row with the same record id, or append it.
    fn upsert(&mut self, row: &Row) {
        match self.index.get(&row.record_id) {
            Some(&pos) => self.rows[pos] = row.clone(),
            None => {
                self.index.insert(row.record_id.clone(), self.rows.len());
                self.rows.push(row.clone());
            }
        }
    }
}

#[derive(Debug, Default)]
struct State {
    tables: BTreeMap<TableId, MemoryTable>,
    fetch_calls: usize,
    commit_calls: usize,
    reject_commits: Option<String>,
}

/// A [`TableDataSource`] backed by process memory.
///
/// Commits replace stored rows by record id, so rows that were never fetched
/// survive a commit untouched.
#[derive(Debug, Default)]
pub struct MemoryTableSource {
    state: Mutex<State>,
}

impl MemoryTableSource {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        // A panic while holding the lock leaves plain data behind; keep going.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Add (or replace) a table.
    pub fn with_table(
        self,
        id: impl Into<TableId>,
        name: impl Into<String>,
        fields: Vec<FieldMeta>,
        rows: Vec<Row>,
    ) -> Self {
        self.lock()
            .tables
            .insert(id.into(), MemoryTable::new(name.into(), fields, rows));
        self
    }

    /// Make every following commit fail with `reason`.
    pub fn reject_commits(&self, reason: impl Into<String>) {
        self.lock().reject_commits = Some(reason.into());
    }

    /// Snapshot of the stored rows of `table`.
    pub fn rows(&self, table: &TableId) -> Option<Vec<Row>> {
        self.lock().tables.get(table).map(|t| t.rows.clone())
    }

    /// Number of `fetch_rows` calls so far.
    pub fn fetch_calls(&self) -> usize {
        self.lock().fetch_calls
    }

    /// Number of `commit_rows` calls so far, successful or not.
    pub fn commit_calls(&self) -> usize {
        self.lock().commit_calls
    }
}

impl TableDataSource for MemoryTableSource {
    fn list_tables(&self) -> Result<Vec<TableMeta>, SourceError> {
        Ok(self
            .lock()
            .tables
            .iter()
            .map(|(id, t)| TableMeta {
                id: id.clone(),
                name: t.name.clone(),
            })
            .collect())
    }

    fn list_fields(&self, table: &TableId) -> Result<Vec<FieldMeta>, SourceError> {
        self.lock()
            .tables
            .get(table)
            .map(|t| t.fields.clone())
            .ok_or_else(|| SourceError::TableNotFound {
                table: table.clone(),
            })
    }

    fn fetch_rows(&self, table: &TableId, max_count: usize) -> Result<Vec<Row>, SourceError> {
        let mut state = self.lock();
        state.fetch_calls += 1;
        state
            .tables
            .get(table)
            .map(|t| t.rows.iter().take(max_count).cloned().collect())
            .ok_or_else(|| SourceError::TableNotFound {
                table: table.clone(),
            })
    }

    fn commit_rows(&self, table: &TableId, rows: &[Row]) -> Result<(), CommitError> {
        let mut state = self.lock();
        state.commit_calls += 1;
        if let Some(reason) = &state.reject_commits {
            return Err(CommitError::Rejected {
                reason: reason.clone(),
            });
        }

        let stored = state
            .tables
            .get_mut(table)
            .ok_or_else(|| CommitError::TableNotFound {
                table: table.clone(),
            })?;

        for row in rows {
            stored.upsert(row);
        }
        Ok(())
    }
}
