use ctmerge_core::{CtMergeError, LogListSource, SourceKey};
use ctmerge_http::HttpLogListSource;
use httpmock::prelude::*;
use serde_json::json;

fn log_list() -> serde_json::Value {
    json!({
        "version": "58.3",
        "log_list_timestamp": "2025-10-01T12:52:41Z",
        "operators": [{
            "name": "Google",
            "email": ["google-ct-logs@googlegroups.com"],
            "logs": [{
                "description": "Google 'Argon2025h2' log",
                "log_id": "EjFVXJJJyc2ZVpLK2bp/eIzXlO6nExSqwM3hpmAIxPk=",
                "url": "https://ct.googleapis.com/logs/us1/argon2025h2/",
                "mmd": 86400,
                "state": {"usable": {"timestamp": "2024-11-01T00:00:00Z"}},
            }],
            "tiled_logs": [],
        }],
    })
}

#[tokio::test]
async fn fetches_and_parses_a_log_list() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/ct/log_list.json");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(log_list());
        })
        .await;

    let source =
        HttpLogListSource::new(SourceKey::GOOGLE, &server.url("/ct/log_list.json")).unwrap();
    let doc = source.fetch().await.unwrap();
    mock.assert_async().await;

    assert_eq!(doc.operators.len(), 1);
    assert_eq!(doc.log_count(), 1);
    assert!(!doc.extra.contains_key("version"));
    assert!(!doc.extra.contains_key("log_list_timestamp"));
    let google = &doc.operators[0];
    assert_eq!(google.name, "Google");
    assert!(google.extra.contains_key("email"));
    assert_eq!(
        google.logs[0].url(),
        Some("https://ct.googleapis.com/logs/us1/argon2025h2/")
    );
}

#[tokio::test]
async fn non_success_status_names_source_and_status() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/missing.json");
            then.status(404);
        })
        .await;

    let source = HttpLogListSource::new(SourceKey::APPLE, &server.url("/missing.json")).unwrap();
    let err = source.fetch().await.unwrap_err();
    assert_eq!(
        err,
        CtMergeError::SourceFetch {
            feed: "apple".into(),
            status: Some(404),
            msg: "Not Found".into(),
        }
    );
    assert!(err.to_string().contains("apple"));
    assert!(err.to_string().contains("404"));
}

#[tokio::test]
async fn server_error_is_a_fetch_failure() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/list.json");
            then.status(503).body("maintenance");
        })
        .await;

    let source = HttpLogListSource::new(SourceKey::GOOGLE, &server.url("/list.json")).unwrap();
    let err = source.fetch().await.unwrap_err();
    assert!(err.is_fetch_failure());
    assert!(matches!(
        err,
        CtMergeError::SourceFetch {
            status: Some(503),
            ..
        }
    ));
}

#[tokio::test]
async fn malformed_body_is_a_parse_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/list.json");
            then.status(200).body("<html>captive portal</html>");
        })
        .await;

    let source = HttpLogListSource::new(SourceKey::GOOGLE, &server.url("/list.json")).unwrap();
    let err = source.fetch().await.unwrap_err();
    assert!(matches!(err, CtMergeError::SourceParse { ref feed, .. } if feed == "google"));
}

#[tokio::test]
async fn operators_of_the_wrong_shape_are_a_parse_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/list.json");
            then.status(200).json_body(json!({"operators": "none"}));
        })
        .await;

    let source = HttpLogListSource::new(SourceKey::APPLE, &server.url("/list.json")).unwrap();
    let err = source.fetch().await.unwrap_err();
    assert!(matches!(err, CtMergeError::SourceParse { .. }));
}

#[tokio::test]
async fn connection_failure_has_no_status() {
    // Port 9 (discard) is not served in test environments
    let source = HttpLogListSource::new(SourceKey::APPLE, "http://127.0.0.1:9/list.json").unwrap();
    let err = source.fetch().await.unwrap_err();
    assert!(matches!(
        err,
        CtMergeError::SourceFetch { status: None, .. }
    ));
}

#[test]
fn rejects_unusable_urls() {
    for bad in ["not a url", "/relative/path.json", "ftp://example.com/list.json"] {
        let err = HttpLogListSource::new(SourceKey::APPLE, bad).unwrap_err();
        assert!(matches!(err, CtMergeError::InvalidArg(_)), "{bad}");
    }
}

#[test]
fn custom_client_keeps_url() {
    let source = HttpLogListSource::new(SourceKey::new("mirror"), "https://mirror.example/list.json")
        .unwrap()
        .with_client(reqwest::Client::new());
    assert_eq!(source.url(), "https://mirror.example/list.json");
    assert_eq!(source.key(), SourceKey::new("mirror"));
    assert_eq!(source.name(), "ctmerge-http");
}
