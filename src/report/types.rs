//! Report type definitions for the compatibility table.
//!
//! A [`CompatRow`] holds the already-derived text of every table cell for
//! one result record. Each column has its own precedence between the
//! requested and detected versions; those rules live in
//! [`CompatRow::from_record`] and nowhere else.

use crate::types::{Platform, ResultRecord};

/// Outcome glyph for the Result column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusIcon {
    /// Outcome is exactly "pass": ✅
    Passed,
    /// Any other outcome: ❌
    Failed,
}

impl StatusIcon {
    pub fn from_outcome(outcome: &str) -> Self {
        if outcome == "pass" { StatusIcon::Passed } else { StatusIcon::Failed }
    }

    /// Get the glyph for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusIcon::Passed => "✅",
            StatusIcon::Failed => "❌",
        }
    }
}

/// Column headings, in table order.
pub const COLUMNS: [&str; 12] = [
    "Row",
    "Platform",
    "Flutter",
    "Runner OS",
    "Build JDK",
    "AGP",
    "Gradle",
    "Kotlin",
    "Resolved compileSdk/targetSdk/minSdk",
    "Xcode / Swift",
    "CocoaPods / Ruby",
    "Result",
];

/// One rendered row of the compatibility table.
#[derive(Debug, Clone, PartialEq)]
pub struct CompatRow {
    pub id: String,
    pub platform: String,
    pub flutter: String,
    pub runner_os: String,
    /// Android only
    pub build_jdk: String,
    pub agp: String,
    pub gradle: String,
    pub kotlin: String,
    /// Detected android_sdk_triplet, never falls back to requested
    pub sdk_triplet: String,
    /// iOS only
    pub xcode_swift: String,
    /// iOS only
    pub pods_ruby: String,
    pub icon: StatusIcon,
    pub outcome: String,
}

impl CompatRow {
    /// Derive every cell from a result record.
    pub fn from_record(record: &ResultRecord) -> Self {
        let req = &record.requested;
        let det = &record.detected;
        let platform = record.platform();
        let is_android = Platform::Android.is(platform);
        let is_ios = Platform::Ios.is(platform);

        let (xcode_swift, pods_ruby) = if is_ios {
            (
                join_present(&[det.get("xcode_version"), det.get("swift_version")]),
                join_present(&[det.get("cocoapods_version"), det.get("ruby_version")]),
            )
        } else {
            (String::new(), String::new())
        };

        let outcome = match record.outcome() {
            "" => "fail".to_string(),
            other => other.to_string(),
        };

        CompatRow {
            id: record.id().to_string(),
            platform: platform.to_string(),
            flutter: first_present([req.get("flutter_version"), det.get("flutter_version")]),
            runner_os: first_present([det.get("runner_os"), req.get("runs_on")]),
            build_jdk: if is_android { req.get("jdk") } else { String::new() },
            agp: first_present([det.get("agp_version"), req.get("agp")]),
            gradle: first_present([det.get("gradle_version"), req.get("gradle")]),
            kotlin: first_present([det.get("kotlin_version"), req.get("kotlin")]),
            sdk_triplet: det.get("android_sdk_triplet"),
            xcode_swift,
            pods_ruby,
            icon: StatusIcon::from_outcome(&outcome),
            outcome,
        }
    }

    /// Result cell: glyph followed by the literal outcome
    pub fn result_cell(&self) -> String {
        format!("{} {}", self.icon.as_str(), self.outcome)
    }

    /// Cell texts in [`COLUMNS`] order.
    pub fn cells(&self) -> [String; 12] {
        [
            format!("`{}`", self.id),
            self.platform.clone(),
            self.flutter.clone(),
            self.runner_os.clone(),
            self.build_jdk.clone(),
            self.agp.clone(),
            self.gradle.clone(),
            self.kotlin.clone(),
            self.sdk_triplet.clone(),
            self.xcode_swift.clone(),
            self.pods_ruby.clone(),
            self.result_cell(),
        ]
    }
}

/// First non-empty candidate, or the empty string
fn first_present<const N: usize>(candidates: [String; N]) -> String {
    candidates.into_iter().find(|c| !c.is_empty()).unwrap_or_default()
}

/// Join the non-empty values with " / ", so a lone value has no separator
fn join_present(values: &[String]) -> String {
    values.iter().filter(|v| !v.is_empty()).map(String::as_str).collect::<Vec<_>>().join(" / ")
}
