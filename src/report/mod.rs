//! Compatibility report generation.
//!
//! This module handles:
//! - Deriving table cells from result records (per-column precedence rules)
//! - Rendering the Markdown table with its fixed title and footer notes
//!
//! # Module Organization
//!
//! - `types` - Rendering types (StatusIcon, CompatRow, column headings)
//! - `markdown` - Markdown document rendering

mod markdown;
mod types;

use crate::results;
use std::path::Path;

pub use markdown::{FOOTER_NOTES, format_table_header, format_table_row, render_compatibility_report};
pub use types::{COLUMNS, CompatRow, StatusIcon};

/// Load, order and render every result file in `results_dir`.
pub fn generate_report(results_dir: &Path) -> String {
    let mut records = results::load_results(results_dir);
    results::sort_results(&mut records);
    render_compatibility_report(&records)
}
