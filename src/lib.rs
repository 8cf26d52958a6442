//! Post-processing for a CI build matrix and its per-row results.
//!
//! Three independent tools share this library:
//! - `extract-matrix-rows` selects matrix rows by id and `key=value` filters
//! - `compat-table` renders a directory of results as a Markdown table
//! - `job-summary` renders one result as a job summary block

pub mod cli;
pub mod matrix;
pub mod report;
pub mod results;
pub mod summary;
pub mod types;
pub mod ui;
