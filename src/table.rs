//! Tabular reader for the CSV exports.
//!
//! Parses an export into ordered records keyed by normalized column name.
//! Exports in the wild are ragged: a UTF-8 byte-order mark glued to the
//! first header, rows with more or fewer fields than the header, stray
//! blank lines, and padded cells. The reader absorbs all of that; only a
//! file the parser cannot make sense of at all is an error.

use crate::error::{GraftError, Result};
use csv::{ReaderBuilder, Trim};
use std::path::Path;

/// One data row: (column name, cell value) pairs in original column order.
///
/// Column names are normalized (byte-order mark and surrounding whitespace
/// stripped) and cell values are trimmed. Lookups are by exact normalized
/// name; scans see the columns in the order the header declared them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowRecord {
    fields: Vec<(String, String)>,
}

impl RowRecord {
    /// Value of the named column. `None` when the column does not exist.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    /// Column names in original header order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }
}

/// Read a CSV export from disk into ordered row records.
pub fn read_records(path: &Path) -> Result<Vec<RowRecord>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        GraftError::UserError(format!(
            "failed to read input file '{}': {}",
            path.display(),
            e
        ))
    })?;
    parse_records(&content)
}

/// Parse CSV content into ordered row records.
///
/// Rows shorter than the header are padded with empty values; extra fields
/// beyond the header are dropped. Fully empty lines are skipped.
pub fn parse_records(content: &str) -> Result<Vec<RowRecord>> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(content.as_bytes());

    let columns: Vec<String> = reader
        .headers()
        .map_err(|e| GraftError::ParseError(format!("failed to read header row: {}", e)))?
        .iter()
        .map(normalize_column)
        .collect();

    let mut rows = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = result.map_err(|e| {
            GraftError::ParseError(format!("failed to parse data row {}: {}", index + 1, e))
        })?;

        let fields = columns
            .iter()
            .enumerate()
            .map(|(idx, name)| (name.clone(), record.get(idx).unwrap_or("").to_string()))
            .collect();
        rows.push(RowRecord { fields });
    }

    Ok(rows)
}

/// Normalize a column name: drop a leading byte-order mark, then trim.
fn normalize_column(name: &str) -> String {
    name.strip_prefix('\u{feff}').unwrap_or(name).trim().to_string()
}
