use ctmerge_types::{CtMergeError, DataIssue, MergeConfig};

#[test]
fn fetch_error_message_names_source_and_status() {
    let e = CtMergeError::fetch_status("google", 503, "service unavailable");
    assert_eq!(
        e.to_string(),
        "fetching google log list failed with status 503: service unavailable"
    );
    assert!(e.is_fetch_failure());
    assert_eq!(e.feed(), Some("google"));

    let e = CtMergeError::fetch("apple", "connection refused");
    assert_eq!(
        e.to_string(),
        "fetching apple log list failed: connection refused"
    );
}

#[test]
fn builder_errors_are_not_fetch_failures() {
    let e = CtMergeError::InvalidArg("source A is not set".into());
    assert!(!e.is_fetch_failure());
    assert_eq!(e.feed(), None);
}

#[test]
fn error_roundtrip() {
    let e = CtMergeError::source_timeout("apple");
    let json = serde_json::to_string(&e).expect("serialize error");
    let de: CtMergeError = serde_json::from_str(&json).expect("deserialize error");
    assert_eq!(de, e);
}

#[test]
fn data_issue_display() {
    let issue = DataIssue::StateShape {
        feed: "apple".into(),
        url: Some("https://ct.example/".into()),
        entries: 2,
    };
    assert_eq!(
        issue.to_string(),
        "apple: state of https://ct.example/ has 2 entries, expected exactly one"
    );
    assert_eq!(issue.feed(), "apple");
}

#[test]
fn merge_config_roundtrip() {
    let cfg = MergeConfig {
        include_tiled_logs: true,
        fetch_timeout: std::time::Duration::from_secs(5),
        request_timeout: Some(std::time::Duration::from_secs(9)),
    };
    let json = serde_json::to_string(&cfg).expect("serialize config");
    let de: MergeConfig = serde_json::from_str(&json).expect("deserialize config");
    assert_eq!(de, cfg);
    assert!(!MergeConfig::default().include_tiled_logs);
}
