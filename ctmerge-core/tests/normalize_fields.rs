use ctmerge_core::normalize::operator::OPERATOR_ALIASES;
use ctmerge_core::normalize::{StateShape, normalize_state};
use ctmerge_core::{normalize_operator_name, normalize_temporal_interval};
use serde_json::json;

#[test]
fn operator_alias_maps_long_form() {
    assert_eq!(
        normalize_operator_name("Up In The Air Consulting"),
        "Up In The Air"
    );
    for (long, short) in OPERATOR_ALIASES {
        assert_eq!(normalize_operator_name(long), *short);
    }
}

#[test]
fn unknown_operator_passes_through() {
    assert_eq!(normalize_operator_name("Google"), "Google");
    assert_eq!(normalize_operator_name(""), "");
    assert_eq!(normalize_operator_name("up in the air consulting"), "up in the air consulting");
}

#[test]
fn single_entry_state_expands() {
    let state = json!({"usable": {"timestamp": "2021-01-01T00:00:00Z"}});
    let expanded = normalize_state(&state);
    assert_eq!(expanded.status, Some("usable"));
    assert_eq!(expanded.timestamp, Some(&json!("2021-01-01T00:00:00Z")));
    assert_eq!(expanded.shape, StateShape::Single);
    assert!(!expanded.is_violation());
}

#[test]
fn extra_fields_in_status_object_are_ignored() {
    let state = json!({"qualified": {"timestamp": "2022-05-01", "version": "1.0"}});
    let expanded = normalize_state(&state);
    assert_eq!(expanded.status, Some("qualified"));
    assert_eq!(expanded.timestamp, Some(&json!("2022-05-01")));
}

#[test]
fn multi_entry_state_uses_lowest_key_and_flags_violation() {
    let state = json!({
        "usable": {"timestamp": "2021-01-01"},
        "retired": {"timestamp": "2023-01-01"},
    });
    let expanded = normalize_state(&state);
    assert_eq!(expanded.status, Some("retired"));
    assert_eq!(expanded.timestamp, Some(&json!("2023-01-01")));
    assert_eq!(expanded.shape, StateShape::Entries(2));
    assert!(expanded.is_violation());
}

#[test]
fn multi_entry_state_ignores_document_order() {
    let state: serde_json::Value =
        serde_json::from_str(r#"{"b": {"timestamp": 1}, "a": {"timestamp": 2}}"#).unwrap();
    let expanded = normalize_state(&state);
    assert_eq!(expanded.status, Some("a"));
    assert_eq!(expanded.timestamp, Some(&json!(2)));
    assert_eq!(expanded.shape, StateShape::Entries(2));
}

#[test]
fn empty_or_non_object_state_yields_nothing() {
    let empty = json!({});
    let expanded = normalize_state(&empty);
    assert_eq!(expanded.status, None);
    assert_eq!(expanded.timestamp, None);
    assert_eq!(expanded.shape, StateShape::Entries(0));

    let text = json!("usable");
    let expanded = normalize_state(&text);
    assert_eq!(expanded.status, None);
    assert_eq!(expanded.shape, StateShape::NotObject);
}

#[test]
fn status_without_timestamp_keeps_status() {
    let state = json!({"pending": {}});
    let expanded = normalize_state(&state);
    assert_eq!(expanded.status, Some("pending"));
    assert_eq!(expanded.timestamp, None);
}

#[test]
fn interval_bounds_are_extracted_verbatim() {
    let interval = json!({
        "start_inclusive": "2021-01-01T00:00:00Z",
        "end_exclusive": "2023-01-01T00:00:00Z",
    });
    let (start, end) = normalize_temporal_interval(Some(&interval));
    assert_eq!(start, Some(&json!("2021-01-01T00:00:00Z")));
    assert_eq!(end, Some(&json!("2023-01-01T00:00:00Z")));
}

#[test]
fn absent_or_partial_interval() {
    assert_eq!(normalize_temporal_interval(None), (None, None));

    let open = json!({"start_inclusive": "2021-01-01"});
    assert_eq!(
        normalize_temporal_interval(Some(&open)),
        (Some(&json!("2021-01-01")), None)
    );

    let bogus = json!("2021-01-01/2023-01-01");
    assert_eq!(normalize_temporal_interval(Some(&bogus)), (None, None));
}
