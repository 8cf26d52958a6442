//! Matrix row selection
//!
//! This module handles:
//! - Loading the matrix document (`{"rows": [...]}`)
//! - Parsing `key=value` filters and comma-separated id lists
//! - Selecting the rows that satisfy every restriction, in matrix order
//! - Serializing the selection as compact single-line JSON

use crate::types::{Row, field_text};
use log::debug;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// The matrix definition file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MatrixDocument {
    #[serde(default)]
    pub rows: Vec<Row>,
}

/// A single `key=value` restriction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowFilter {
    pub key: String,
    pub value: String,
}

impl RowFilter {
    /// Parse a `key=value` expression.
    ///
    /// Splits at the first `=` so values may themselves contain `=`. Key and
    /// value are trimmed.
    pub fn parse(expr: &str) -> Result<Self, String> {
        match expr.split_once('=') {
            Some((key, value)) => Ok(RowFilter { key: key.trim().to_string(), value: value.trim().to_string() }),
            None => Err(format!("Invalid --filter '{}'. Expected key=value.", expr)),
        }
    }

    /// Compare against the row's value as text; a missing key compares as ""
    pub fn matches(&self, row: &Row) -> bool {
        field_text(row, &self.key) == self.value
    }
}

/// Parse every filter expression, failing on the first malformed one
pub fn parse_filters(exprs: &[String]) -> Result<Vec<RowFilter>, String> {
    exprs.iter().map(|e| RowFilter::parse(e)).collect()
}

/// Parse a comma-separated id list.
///
/// Returns `None` for a blank list, meaning "no id restriction". A list made
/// only of separators (",,") is a restriction that nothing satisfies.
pub fn parse_ids(raw: &str) -> Option<HashSet<String>> {
    if raw.trim().is_empty() {
        return None;
    }
    Some(raw.split(',').map(str::trim).filter(|id| !id.is_empty()).map(str::to_string).collect())
}

/// Everything that restricts which rows are emitted
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowSelection {
    pub ids: Option<HashSet<String>>,
    pub filters: Vec<RowFilter>,
}

impl RowSelection {
    /// Whether a row passes both the id restriction and every filter
    pub fn accepts(&self, row: &Row) -> bool {
        let id_allowed = match &self.ids {
            Some(ids) => ids.contains(&field_text(row, "id")),
            None => true,
        };
        id_allowed && self.filters.iter().all(|f| f.matches(row))
    }

    /// Keep the accepted rows, preserving matrix order
    pub fn select(&self, rows: Vec<Row>) -> Vec<Row> {
        let total = rows.len();
        let selected: Vec<Row> = rows.into_iter().filter(|row| self.accepts(row)).collect();
        debug!("Selected {} of {} matrix rows", selected.len(), total);
        selected
    }
}

/// Read and parse the matrix document at `path`
pub fn load_matrix(path: &Path) -> Result<MatrixDocument, String> {
    debug!("Loading matrix from {}", path.display());

    let text = fs::read_to_string(path).map_err(|e| format!("Failed to read matrix {}: {}", path.display(), e))?;
    serde_json::from_str(&text).map_err(|e| format!("Failed to parse matrix {}: {}", path.display(), e))
}

/// Serialize rows as a single-line JSON array with no extra whitespace
pub fn to_compact_json(rows: &[Row]) -> Result<String, String> {
    serde_json::to_string(rows).map_err(|e| format!("Failed to serialize rows: {}", e))
}

#[cfg(test)]
#[path = "matrix_test.rs"]
mod matrix_test;
