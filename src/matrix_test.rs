/// Tests for matrix row selection

#[cfg(test)]
mod tests {
    use crate::matrix::*;
    use crate::types::Row;
    use serde_json::json;
    use std::io::Write;

    fn sample_rows() -> Vec<Row> {
        let doc = json!({
            "rows": [
                {"id": "android-flutter-3.29.3-jdk17", "platform": "android", "support_level": "recommended", "jdk": 17},
                {"id": "android-flutter-3.27.4-jdk11", "platform": "android", "support_level": "beta", "jdk": 11},
                {"id": "ios-flutter-3.29.3", "platform": "ios", "support_level": "recommended"},
                {"id": "ios-flutter-3.24.5", "platform": "ios", "support_level": "legacy"}
            ]
        });
        serde_json::from_value::<MatrixDocument>(doc).unwrap().rows
    }

    fn ids(rows: &[Row]) -> Vec<String> {
        rows.iter().map(|r| r["id"].as_str().unwrap().to_string()).collect()
    }

    fn selection(ids: &str, filters: &[&str]) -> RowSelection {
        let exprs: Vec<String> = filters.iter().map(|s| s.to_string()).collect();
        RowSelection { ids: parse_ids(ids), filters: parse_filters(&exprs).unwrap() }
    }

    #[test]
    fn test_filter_parse_trims_both_sides() {
        let filter = RowFilter::parse("  support_level = recommended ").unwrap();
        assert_eq!(filter.key, "support_level");
        assert_eq!(filter.value, "recommended");
    }

    #[test]
    fn test_filter_parse_splits_on_first_equals() {
        let filter = RowFilter::parse("flags=a=b").unwrap();
        assert_eq!(filter.key, "flags");
        assert_eq!(filter.value, "a=b");
    }

    #[test]
    fn test_filter_without_equals_is_rejected() {
        let err = RowFilter::parse("support_level").unwrap_err();
        assert_eq!(err, "Invalid --filter 'support_level'. Expected key=value.");

        let exprs = vec!["platform=ios".to_string(), "oops".to_string()];
        assert!(parse_filters(&exprs).is_err());
    }

    #[test]
    fn test_filter_compares_row_value_as_text() {
        let rows = sample_rows();
        let filter = RowFilter::parse("jdk=17").unwrap();
        assert!(filter.matches(&rows[0]));
        assert!(!filter.matches(&rows[1]));

        // Missing key compares as the empty string
        let missing = RowFilter::parse("jdk=").unwrap();
        assert!(missing.matches(&rows[2]));
    }

    #[test]
    fn test_filter_does_not_trim_row_value() {
        let row = json!({"id": "a", "support_level": " beta"}).as_object().unwrap().clone();
        assert!(!RowFilter::parse("support_level=beta").unwrap().matches(&row));
    }

    #[test]
    fn test_parse_ids() {
        assert_eq!(parse_ids(""), None);
        assert_eq!(parse_ids("   "), None);

        let parsed = parse_ids(" a , b,,c ").unwrap();
        assert_eq!(parsed.len(), 3);
        assert!(parsed.contains("a") && parsed.contains("b") && parsed.contains("c"));

        assert_eq!(parse_ids(",,").map(|s| s.len()), Some(0));
    }

    #[test]
    fn test_empty_selection_keeps_everything() {
        let rows = sample_rows();
        let selected = RowSelection::default().select(rows.clone());
        assert_eq!(selected, rows);
    }

    #[test]
    fn test_filter_example_recommended() {
        let doc: MatrixDocument = serde_json::from_str(
            r#"{"rows":[{"id":"a","support_level":"recommended"},{"id":"b","support_level":"beta"}]}"#,
        )
        .unwrap();
        let selected = selection("", &["support_level=recommended"]).select(doc.rows);
        assert_eq!(to_compact_json(&selected).unwrap(), r#"[{"id":"a","support_level":"recommended"}]"#);
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let selected = selection("", &["platform=android", "support_level=recommended"]).select(sample_rows());
        assert_eq!(ids(&selected), vec!["android-flutter-3.29.3-jdk17"]);
    }

    #[test]
    fn test_ids_preserve_matrix_order() {
        let selected = selection("ios-flutter-3.24.5,android-flutter-3.29.3-jdk17", &[]).select(sample_rows());
        assert_eq!(ids(&selected), vec!["android-flutter-3.29.3-jdk17", "ios-flutter-3.24.5"]);
    }

    #[test]
    fn test_ids_then_filters_equals_single_predicate() {
        let rows = sample_rows();
        let combined = selection("ios-flutter-3.29.3,android-flutter-3.27.4-jdk11", &["platform=ios"]);

        let staged_ids = RowSelection { ids: combined.ids.clone(), filters: vec![] };
        let staged_filters = RowSelection { ids: None, filters: combined.filters.clone() };

        let ids_first = staged_filters.select(staged_ids.select(rows.clone()));
        let filters_first = staged_ids.select(staged_filters.select(rows.clone()));
        let single = combined.select(rows);

        assert_eq!(ids_first, single);
        assert_eq!(filters_first, single);
        assert_eq!(ids(&single), vec!["ios-flutter-3.29.3"]);
    }

    #[test]
    fn test_selection_is_ordered_subset() {
        let rows = sample_rows();
        let selected = selection("", &["support_level=recommended"]).select(rows.clone());
        let mut cursor = rows.iter();
        for row in &selected {
            assert!(cursor.any(|r| r == row), "selected rows must appear in matrix order");
        }
    }

    #[test]
    fn test_no_match_gives_empty_array() {
        let selected = selection("", &["platform=web"]).select(sample_rows());
        assert!(selected.is_empty());
        assert_eq!(to_compact_json(&selected).unwrap(), "[]");
    }

    #[test]
    fn test_compact_json_preserves_key_order() {
        let doc: MatrixDocument = serde_json::from_str(r#"{"rows":[{"zeta":1,"id":"z","alpha":"x"}]}"#).unwrap();
        assert_eq!(to_compact_json(&doc.rows).unwrap(), r#"[{"zeta":1,"id":"z","alpha":"x"}]"#);
    }

    #[test]
    fn test_load_matrix_missing_rows_is_empty() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{}}").unwrap();
        let doc = load_matrix(file.path()).unwrap();
        assert!(doc.rows.is_empty());
    }

    #[test]
    fn test_load_matrix_errors() {
        assert!(load_matrix(std::path::Path::new("/nonexistent/matrix.json")).unwrap_err().contains("Failed to read"));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"rows\": [").unwrap();
        assert!(load_matrix(file.path()).unwrap_err().contains("Failed to parse"));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"rows\": [1, 2]}}").unwrap();
        assert!(load_matrix(file.path()).is_err());
    }
}
