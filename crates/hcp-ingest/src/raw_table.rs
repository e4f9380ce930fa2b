use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use tracing::debug;

use crate::{IngestError, Result};

/// How many leading rows to scan for a header marker before giving up.
///
/// The WPP export carries 16 rows of preamble; the limit leaves headroom for
/// format drift without letting a wrong file scan forever.
pub const DEFAULT_HEADER_SCAN_LIMIT: usize = 64;

/// An in-memory tabular source: normalized headers plus string rows.
///
/// Rows may be ragged (the readers run in flexible mode because preamble
/// rows rarely match the header width); use [`cell`] for width-safe access.
#[derive(Debug, Clone)]
pub struct RawTable {
    pub path: PathBuf,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Index of a column by case-insensitive exact header match.
    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
            .ok_or_else(|| IngestError::MissingColumn {
                path: self.path.clone(),
                column: name.to_string(),
            })
    }

    /// Index of the first column whose header contains `fragment`
    /// (case-insensitive). Used for sources with verbose, unit-suffixed
    /// headers such as "Births (thousands)".
    pub fn find_column_containing(&self, fragment: &str) -> Result<usize> {
        let needle = fragment.to_lowercase();
        self.headers
            .iter()
            .position(|h| h.to_lowercase().contains(&needle))
            .ok_or_else(|| IngestError::MissingColumn {
                path: self.path.clone(),
                column: fragment.to_string(),
            })
    }
}

/// Width-safe cell access for ragged rows; out-of-range reads as empty.
pub fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map_or("", String::as_str)
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn is_blank_row(row: &[String]) -> bool {
    row.iter().all(|cell| cell.is_empty())
}

fn read_all_records(path: &Path) -> Result<Vec<Vec<String>>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::csv(path, source))?;

    let mut records = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::csv(path, source))?;
        records.push(record.iter().map(normalize_cell).collect::<Vec<_>>());
    }
    Ok(records)
}

/// Read a CSV whose first row is the header.
///
/// Blank rows are skipped. Header and cell text is whitespace/BOM
/// normalized.
pub fn read_raw_table(path: &Path) -> Result<RawTable> {
    let mut records = read_all_records(path)?.into_iter();
    let headers: Vec<String> = records
        .next()
        .unwrap_or_default()
        .iter()
        .map(|h| normalize_header(h))
        .collect();
    let rows: Vec<Vec<String>> = records.filter(|row| !is_blank_row(row)).collect();

    debug!(
        path = %path.display(),
        columns = headers.len(),
        rows = rows.len(),
        "read raw table"
    );
    Ok(RawTable {
        path: path.to_path_buf(),
        headers,
        rows,
    })
}

/// Read a CSV whose header row is buried under a preamble.
///
/// Scans the first [`DEFAULT_HEADER_SCAN_LIMIT`] rows for one containing a
/// cell equal to `marker` (case-insensitive, whitespace-collapsed); that row
/// becomes the header and everything below it the data. A missing marker is
/// fatal rather than a silent wrong-offset read.
pub fn read_raw_table_at_marker(path: &Path, marker: &str) -> Result<RawTable> {
    let records = read_all_records(path)?;
    let scanned = records.len().min(DEFAULT_HEADER_SCAN_LIMIT);

    let header_index = records[..scanned]
        .iter()
        .position(|row| {
            row.iter()
                .any(|cell| normalize_header(cell).eq_ignore_ascii_case(marker))
        })
        .ok_or_else(|| IngestError::HeaderNotFound {
            path: path.to_path_buf(),
            marker: marker.to_string(),
            scanned,
        })?;

    let headers: Vec<String> = records[header_index]
        .iter()
        .map(|h| normalize_header(h))
        .collect();
    let rows: Vec<Vec<String>> = records[header_index + 1..]
        .iter()
        .filter(|row| !is_blank_row(row))
        .cloned()
        .collect();

    debug!(
        path = %path.display(),
        header_row = header_index,
        columns = headers.len(),
        rows = rows.len(),
        "located header by marker"
    );
    Ok(RawTable {
        path: path.to_path_buf(),
        headers,
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_normalization_collapses_whitespace_and_bom() {
        assert_eq!(normalize_header("\u{feff} Geographic   area "), "Geographic area");
        assert_eq!(normalize_header("TIME_PERIOD"), "TIME_PERIOD");
    }

    #[test]
    fn cell_is_width_safe() {
        let row = vec!["a".to_string()];
        assert_eq!(cell(&row, 0), "a");
        assert_eq!(cell(&row, 5), "");
    }
}
