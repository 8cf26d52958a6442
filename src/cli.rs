use crate::matrix::{self, RowSelection};
use crate::summary::DEFAULT_MAX_LOG_CHARS;
use crate::types::Platform;
use clap::Parser;
use std::path::PathBuf;

/// Matrix file used when --matrix is not given
pub const DEFAULT_MATRIX_PATH: &str = "scripts/ci/matrix.json";

#[derive(Parser, Debug, Clone)]
#[command(name = "extract-matrix-rows")]
#[command(about = "Print the CI matrix rows matching the given ids and filters as compact JSON")]
#[command(version)]
pub struct SelectArgs {
    /// Path to the matrix definition (JSON object with a "rows" array)
    #[arg(long, value_name = "PATH", default_value = DEFAULT_MATRIX_PATH)]
    pub matrix: PathBuf,

    /// Keep rows whose KEY equals VALUE (repeatable, all must match)
    /// Example: --filter support_level=recommended
    #[arg(long = "filter", value_name = "KEY=VALUE")]
    pub filters: Vec<String>,

    /// Comma-separated row ids to include
    #[arg(long, value_name = "ID,ID,...", default_value = "")]
    pub ids: String,
}

impl SelectArgs {
    /// Turn the raw id list and filter expressions into a selection.
    ///
    /// Fails on the first filter without `=`; nothing has been read yet at
    /// that point.
    pub fn selection(&self) -> Result<RowSelection, String> {
        Ok(RowSelection { ids: matrix::parse_ids(&self.ids), filters: matrix::parse_filters(&self.filters)? })
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "compat-table")]
#[command(about = "Render per-row CI results as a Markdown compatibility table")]
#[command(version)]
pub struct ReportArgs {
    /// Directory holding one <row-id>.json result file per matrix row
    #[arg(long, value_name = "DIR")]
    pub results_dir: PathBuf,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "job-summary")]
#[command(about = "Render a job summary block for a single matrix row result")]
#[command(version)]
pub struct SummaryArgs {
    /// Platform the row was built for
    #[arg(long, value_enum)]
    pub platform: Platform,

    /// Path to the row's result JSON (may be missing)
    #[arg(long = "json", value_name = "PATH")]
    pub json_path: PathBuf,

    /// Keep at most this many trailing log characters (0 or less hides the log)
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_LOG_CHARS, allow_negative_numbers = true)]
    pub max_log_chars: i64,
}
