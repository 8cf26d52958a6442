//! Loading per-row result files from a results directory
//!
//! Every `*.json` file directly inside the directory yields exactly one
//! record. Files that cannot be read or parsed are replaced with a synthetic
//! failing record, so the report always accounts for every file found.

use crate::types::ResultRecord;
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// List the `.json` files directly inside `dir`, sorted by file name.
///
/// A directory that cannot be listed yields no files.
pub fn discover_result_files(dir: &Path) -> Vec<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Cannot list results directory {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();

    debug!("Found {} result files in {}", files.len(), dir.display());
    files
}

/// Load one result file, substituting a failing record if it is unusable
pub fn load_result_file(path: &Path) -> ResultRecord {
    let parsed = fs::read_to_string(path).map_err(|e| e.to_string()).and_then(|text| ResultRecord::from_json(&text));

    match parsed {
        Ok(record) => record,
        Err(e) => {
            warn!("Treating {} as failed: {}", path.display(), e);
            ResultRecord::parse_failure(&file_stem(path), &e)
        }
    }
}

/// Load every result file in `dir`, in file name order
pub fn load_results(dir: &Path) -> Vec<ResultRecord> {
    discover_result_files(dir).iter().map(|path| load_result_file(path)).collect()
}

/// Ordering key: (platform, requested flutter version, requested jdk, id)
pub fn sort_key(record: &ResultRecord) -> (String, String, String, String) {
    (
        record.platform().to_string(),
        record.requested.get("flutter_version"),
        record.requested.get("jdk"),
        record.id().to_string(),
    )
}

/// Sort records by [`sort_key`]; records with equal keys keep their order
pub fn sort_results(records: &mut [ResultRecord]) {
    records.sort_by_cached_key(sort_key);
}

/// File name without its extension, used as a fallback row id
pub fn file_stem(path: &Path) -> String {
    path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default()
}
