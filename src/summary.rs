//! Job summary rendering for a single result record
//!
//! The summary is appended to the CI job page, so it must render even when
//! the build step produced no result file or a broken one. Every path here
//! returns text; nothing is an error.

use crate::results::file_stem;
use crate::types::{Platform, ResultRecord};
use log::debug;
use std::fs;
use std::path::Path;

/// Default number of log characters kept in the excerpt
pub const DEFAULT_MAX_LOG_CHARS: i64 = 6000;

/// What was found at the result path
#[derive(Debug, Clone, PartialEq)]
pub enum SummarySource {
    /// No file at the path
    Missing,
    /// The file could not be read or is not a result object
    Invalid(String),
    Record(ResultRecord),
}

impl SummarySource {
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            debug!("No result file at {}", path.display());
            return SummarySource::Missing;
        }

        let parsed = fs::read_to_string(path).map_err(|e| e.to_string()).and_then(|text| ResultRecord::from_json(&text));
        match parsed {
            Ok(record) => SummarySource::Record(record),
            Err(e) => {
                debug!("Invalid result file {}: {}", path.display(), e);
                SummarySource::Invalid(e)
            }
        }
    }
}

/// Detected fields shown for every platform: (key, label)
const COMMON_FIELDS: [(&str, &str); 2] = [("flutter_version", "Flutter"), ("dart_version", "Dart")];

const ANDROID_FIELDS: [(&str, &str); 4] = [
    ("java_version", "Java"),
    ("agp_version", "AGP"),
    ("kotlin_version", "Kotlin"),
    ("gradle_version", "Gradle"),
];

const IOS_FIELDS: [(&str, &str); 4] = [
    ("xcode_version", "Xcode"),
    ("swift_version", "Swift"),
    ("cocoapods_version", "CocoaPods"),
    ("ruby_version", "Ruby"),
];

/// Load the result at `path` and render its summary block
pub fn render_job_summary(platform: Platform, path: &Path, max_log_chars: i64) -> String {
    render_summary(platform, &SummarySource::load(path), &file_stem(path), max_log_chars)
}

/// Render a summary block.
///
/// `fallback_id` is used in the heading when the record has no id.
pub fn render_summary(platform: Platform, source: &SummarySource, fallback_id: &str, max_log_chars: i64) -> String {
    let shouted = platform.as_str().to_uppercase();
    let mut content = String::new();

    let record = match source {
        SummarySource::Missing => {
            content.push_str(&format!("### {} · (missing result JSON)\n", shouted));
            content.push_str("- Outcome: **no result JSON produced**\n");
            return content;
        }
        SummarySource::Invalid(error) => {
            content.push_str(&format!("### {} · (invalid JSON)\n", shouted));
            content.push_str("- Outcome: **invalid JSON**\n");
            content.push_str(&format!("- Error: {}\n", error));
            return content;
        }
        SummarySource::Record(record) => record,
    };

    let row_id = if record.id().is_empty() { fallback_id } else { record.id() };
    let outcome = if record.outcome().is_empty() { "unknown" } else { record.outcome() };

    content.push_str(&format!("### {} · {}\n", platform.title(), row_id));
    content.push_str(&format!("- Outcome: **{}**\n", outcome));
    if !record.notes().is_empty() {
        content.push_str(&format!("- Notes: {}\n", record.notes()));
    }

    let platform_fields: &[(&str, &str)] = match platform {
        Platform::Android => &ANDROID_FIELDS,
        Platform::Ios => &IOS_FIELDS,
    };
    for (key, label) in COMMON_FIELDS.iter().chain(platform_fields) {
        let value = record.detected.get(key);
        if !value.is_empty() {
            content.push_str(&format!("- {}: {}\n", label, value));
        }
    }

    let log = record.log_tail().trim();
    if !log.is_empty() {
        content.push_str("\n<details><summary>Log tail</summary>\n\n```\n");
        content.push_str(truncate_tail(log, max_log_chars));
        content.push_str("\n```\n</details>\n\n");
    }

    content
}

/// Keep the last `max_chars` characters of `s`.
///
/// Build failures surface at the end of a log, so the head is dropped.
/// A non-positive limit yields the empty string.
pub fn truncate_tail(s: &str, max_chars: i64) -> &str {
    if max_chars <= 0 {
        return "";
    }
    let total = s.chars().count();
    let keep = usize::try_from(max_chars).unwrap_or(usize::MAX);
    if total <= keep {
        return s;
    }
    match s.char_indices().nth(total - keep) {
        Some((start, _)) => &s[start..],
        None => "",
    }
}

#[cfg(test)]
#[path = "summary_test.rs"]
mod summary_test;
