//! Core data structures for matrix rows and per-row build results
//!
//! Matrix rows are kept as raw JSON objects so that selected rows can be
//! written back out with their original keys, values and key order. Result
//! records are typed, but tolerant: every field is optional, `null` means
//! absent, and scalar fields accept numbers and booleans.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Platform value used for result files that could not be parsed
pub const UNKNOWN_PLATFORM: &str = "unknown";

/// A single matrix entry (one platform + version combination)
pub type Row = Map<String, Value>;

/// Render a JSON value as plain text.
///
/// Strings are used verbatim and `null` becomes the empty string. Anything
/// else uses its compact JSON text, so `17` stays `17` and `true` stays `true`.
pub fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Text of `key` in a matrix row, or the empty string when the key is missing
pub fn field_text(row: &Row, key: &str) -> String {
    row.get(key).map(scalar_text).unwrap_or_default()
}

/// The platform a matrix row builds for
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Platform {
    Android,
    Ios,
}

impl Platform {
    /// Value as it appears in result records ("android" / "ios")
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Android => "android",
            Platform::Ios => "ios",
        }
    }

    /// Display name used in summary headings
    pub fn title(&self) -> &'static str {
        match self {
            Platform::Android => "Android",
            Platform::Ios => "iOS",
        }
    }

    pub fn is(&self, platform: &str) -> bool {
        self.as_str() == platform
    }
}

/// Version parameters keyed by name, either requested or detected.
///
/// A `null` or missing map deserializes to an empty one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VersionMap(Map<String, Value>);

impl VersionMap {
    /// Text for `key`, empty when absent
    pub fn get(&self, key: &str) -> String {
        self.0.get(key).map(scalar_text).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for VersionMap {
    fn from(map: Map<String, Value>) -> Self {
        VersionMap(map)
    }
}

impl<'de> Deserialize<'de> for VersionMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = Option::<Map<String, Value>>::deserialize(deserializer)?;
        Ok(VersionMap(map.unwrap_or_default()))
    }
}

/// Outcome of building one matrix row, as written by the build step
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ResultRecord {
    #[serde(default, deserialize_with = "lenient_text")]
    pub id: Option<String>,

    #[serde(default, deserialize_with = "lenient_text")]
    pub platform: Option<String>,

    /// Versions the row asked for (flutter_version, jdk, runs_on, agp, gradle, kotlin)
    #[serde(default)]
    pub requested: VersionMap,

    /// Versions the build actually resolved
    #[serde(default)]
    pub detected: VersionMap,

    /// "pass" or "fail"
    #[serde(default, deserialize_with = "lenient_text")]
    pub outcome: Option<String>,

    #[serde(default, deserialize_with = "lenient_text")]
    pub notes: Option<String>,

    /// Trailing excerpt of the build log
    #[serde(default, deserialize_with = "lenient_text")]
    pub log_tail: Option<String>,
}

impl ResultRecord {
    /// Parse a result record from JSON text
    pub fn from_json(text: &str) -> Result<Self, String> {
        serde_json::from_str(text).map_err(|e| e.to_string())
    }

    /// Synthetic failing record standing in for a file that could not be parsed
    pub fn parse_failure(id: &str, error: &str) -> Self {
        ResultRecord {
            id: Some(id.to_string()),
            platform: Some(UNKNOWN_PLATFORM.to_string()),
            requested: VersionMap::default(),
            detected: VersionMap::default(),
            outcome: Some("fail".to_string()),
            notes: Some(format!("Parse error: {}", error)),
            log_tail: None,
        }
    }

    pub fn id(&self) -> &str {
        self.id.as_deref().unwrap_or("")
    }

    pub fn platform(&self) -> &str {
        self.platform.as_deref().unwrap_or("")
    }

    pub fn outcome(&self) -> &str {
        self.outcome.as_deref().unwrap_or("")
    }

    pub fn notes(&self) -> &str {
        self.notes.as_deref().unwrap_or("")
    }

    pub fn log_tail(&self) -> &str {
        self.log_tail.as_deref().unwrap_or("")
    }
}

/// Accept strings, numbers and booleans for a text field; `null` is absent
fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.map(|v| scalar_text(&v)))
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
