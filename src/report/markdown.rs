//! Markdown rendering of the compatibility table.

use super::types::{COLUMNS, CompatRow};
use crate::types::ResultRecord;

pub const TITLE: &str = "## Validated combinations (CI)";

pub const GENERATED_NOTICE: &str = "> This table is generated automatically by CI. Do not edit it manually.";

/// Static notes printed under the table
pub const FOOTER_NOTES: [&str; 2] = [
    "- Android rows build a Debug APK using the repo's Gradle wrapper (`android/gradlew`).",
    "- iOS rows build with `flutter build ios --no-codesign` and run `pod install`.",
];

/// Render the full report for records that are already in display order.
pub fn render_compatibility_report(records: &[ResultRecord]) -> String {
    let mut content = String::new();

    content.push_str(&format!("{}\n\n", TITLE));
    content.push_str(&format!("{}\n\n", GENERATED_NOTICE));
    content.push_str(&format_table_header());

    for record in records {
        content.push_str(&format_table_row(&CompatRow::from_record(record)));
    }

    content.push_str("\n### Notes\n");
    for note in FOOTER_NOTES {
        content.push_str(note);
        content.push('\n');
    }

    content
}

/// Heading row and separator row
pub fn format_table_header() -> String {
    let separator = vec!["---"; COLUMNS.len()];
    format!("| {} |\n| {} |\n", COLUMNS.join(" | "), separator.join(" | "))
}

pub fn format_table_row(row: &CompatRow) -> String {
    format!("| {} |\n", row.cells().join(" | "))
}
