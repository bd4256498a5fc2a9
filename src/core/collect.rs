//! Drive a table reader through one file and turn its rows into records.

use std::path::Path;

use crate::errors::{AppError, AppResult};
use crate::models::{Entry, EntryContext, EntryError};
use crate::reader::{Dialect, ReaderOptions, TableReader};
use crate::ui::messages::warning;

/// A row that failed validation and was left out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRow {
    pub line: u64,
    /// The row as read, `{key: value, ...}`.
    pub fields: String,
    pub error: EntryError,
}

/// Result of reading one file: accepted records in output order plus the
/// rows that were skipped.
#[derive(Debug)]
pub struct Collected<E> {
    pub entries: Vec<E>,
    pub rejected: Vec<RejectedRow>,
}

/// Required columns absent from `found`, in declaration order.
pub fn missing_columns(found: &[String], required: &[&str]) -> Vec<String> {
    required
        .iter()
        .filter(|r| !found.iter().any(|f| f == *r))
        .map(|r| r.to_string())
        .collect()
}

/// Read every row of `path` as an `E`.
///
/// Missing required columns abort the file. A row that fails validation is
/// reported and skipped; the rest of the file is still read. The accepted
/// records are sorted with `E::sort`.
pub fn collect_entries<E: Entry>(
    path: &Path,
    encoding: &str,
    dialect: Option<Dialect>,
    ctx: &EntryContext,
) -> AppResult<Collected<E>> {
    let options = ReaderOptions::default()
        .with_dialect(dialect)
        .with_remapping(E::REMAPPING)
        .lowercase(true);
    let mut reader = TableReader::open(path, encoding, options)?;

    let found = reader.fieldnames()?.to_vec();
    let missing = missing_columns(&found, E::REQUIRED);
    if !missing.is_empty() {
        return Err(AppError::MissingColumns {
            path: path.to_path_buf(),
            found,
            missing,
        });
    }

    let mut entries = Vec::new();
    let mut rejected = Vec::new();

    for row in reader.by_ref() {
        let row = row?;
        match E::from_row(&row, ctx) {
            Ok(entry) => entries.push(entry),
            Err(error) => {
                warning(format!("Invalid line {}: {}\n    {}", row.line(), row, error));
                rejected.push(RejectedRow {
                    line: row.line(),
                    fields: row.to_string(),
                    error,
                });
            }
        }
    }

    tracing::info!(
        path = %path.display(),
        kind = %E::KIND,
        delimiter = reader.dialect().delimiter_name(),
        encoding = reader.encoding().name(),
        accepted = entries.len(),
        rejected = rejected.len(),
        "file collected"
    );

    E::sort(&mut entries);
    Ok(Collected { entries, rejected })
}

/// Individual mode: keep the records of `contributor` and the unattributed
/// ones.
pub fn retain_contributor<E: Entry>(entries: &mut Vec<E>, contributor: Option<&str>) {
    entries.retain(|e| e.contributor().is_none() || e.contributor() == contributor);
}
