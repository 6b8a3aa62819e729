use std::collections::BTreeSet;

use ctmerge_core::{
    CollectingDiagnostics, LogListDocument, MergeOptions, Operator, RawLogEntry, SourceTags, merge,
};
use proptest::prelude::*;
use serde_json::{Map, Value, json};

fn log(url: &str, description: &str, status: &str) -> RawLogEntry {
    let mut state = Map::new();
    state.insert(status.to_string(), json!({"timestamp": "2024-01-01T00:00:00Z"}));
    RawLogEntry::new()
        .with("url", url)
        .with("description", description)
        .with("state", state)
}

fn arb_status() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("usable"),
        Just("qualified"),
        Just("retired"),
        Just("readonly"),
        Just("rejected"),
        Just("pending"),
    ]
}

/// Documents whose urls come from a small shared pool, so the two sides overlap.
fn arb_document() -> impl Strategy<Value = LogListDocument> {
    proptest::collection::btree_map(
        0u8..24,
        (
            prop_oneof![Just("Google"), Just("Sectigo"), Just("DigiCert"), Just("Cloudflare")],
            "[A-Z][a-z]{2,6}20(2[0-9])",
            arb_status(),
        ),
        0..12,
    )
    .prop_map(|logs| {
        let mut operators: Vec<Operator> = vec![];
        for (id, (operator, description, status)) in logs {
            let url = format!("https://ct{id}.example/");
            let entry = log(&url, &format!("{operator} '{description}' log"), status);
            match operators.iter_mut().find(|op| op.name == operator) {
                Some(op) => op.logs.push(entry),
                None => operators.push(Operator::new(operator, vec![entry])),
            }
        }
        LogListDocument::new(operators)
    })
}

fn reversed(document: &LogListDocument) -> LogListDocument {
    let mut out = document.clone();
    out.operators.reverse();
    for op in &mut out.operators {
        op.logs.reverse();
    }
    out
}

fn all_urls(document: &LogListDocument) -> BTreeSet<String> {
    document
        .operators
        .iter()
        .flat_map(|op| op.logs.iter())
        .filter_map(|log| log.url().map(str::to_string))
        .collect()
}

fn sort_key(record: &ctmerge_core::LogRecord, field: &str) -> String {
    let tags = SourceTags::default();
    match record.view(field, tags).primary() {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

proptest! {
    #[test]
    fn every_url_appears_exactly_once(a in arb_document(), b in arb_document()) {
        let diagnostics = CollectingDiagnostics::new();
        let merged = merge(&a, &b, &MergeOptions::default(), &diagnostics);

        let expected: BTreeSet<String> = all_urls(&a).union(&all_urls(&b)).cloned().collect();
        let seen: Vec<&str> = merged.urls().collect();
        let unique: BTreeSet<String> = seen.iter().map(|s| (*s).to_string()).collect();
        prop_assert_eq!(seen.len(), unique.len());
        prop_assert_eq!(unique, expected);
        prop_assert!(diagnostics.issues().is_empty());
    }

    #[test]
    fn output_is_sorted_by_operator_description_url(a in arb_document(), b in arb_document()) {
        let merged = merge(&a, &b, &MergeOptions::default(), &CollectingDiagnostics::new());
        let keys: Vec<(String, String, String)> = merged
            .iter()
            .map(|(url, record)| (
                sort_key(record, "operator"),
                sort_key(record, "description"),
                url.to_string(),
            ))
            .collect();
        for pair in keys.windows(2) {
            prop_assert!(pair[0] <= pair[1]);
        }
    }

    #[test]
    fn processing_order_does_not_change_output(a in arb_document(), b in arb_document()) {
        let options = MergeOptions::default();
        let first = merge(&a, &b, &options, &CollectingDiagnostics::new());
        let second = merge(&reversed(&a), &reversed(&b), &options, &CollectingDiagnostics::new());
        prop_assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn status_is_either_agreed_or_fully_split(a in arb_document(), b in arb_document()) {
        let merged = merge(&a, &b, &MergeOptions::default(), &CollectingDiagnostics::new());
        for (_, record) in merged.iter() {
            let bare = record.contains("status");
            let tagged_a = record.contains("status_apple");
            let tagged_b = record.contains("status_google");
            prop_assert!(bare ^ (tagged_a && tagged_b));
            prop_assert_eq!(tagged_a, tagged_b);
        }
    }
}

#[test]
fn one_sided_logs_are_normalized_and_shared_logs_reconciled() {
    let a = LogListDocument::new(vec![Operator::new(
        "Google",
        vec![
            log("https://ct.googleapis.com/logs/argon2024/", "Google 'Argon2024' log", "usable"),
            log("https://ct.googleapis.com/logs/xenon2024/", "Google 'Xenon2024' log", "usable"),
        ],
    )]);
    let b = LogListDocument::new(vec![
        Operator::new(
            "Google",
            vec![log(
                "https://ct.googleapis.com/logs/argon2024/",
                "Google 'Argon2024' log",
                "qualified",
            )],
        ),
        Operator::new(
            "Cloudflare",
            vec![log("https://ct.cloudflare.com/logs/nimbus2024/", "Cloudflare 'Nimbus2024' Log", "usable")],
        ),
    ]);

    let merged = merge(&a, &b, &MergeOptions::default(), &CollectingDiagnostics::new());
    let urls: Vec<&str> = merged.urls().collect();
    assert_eq!(
        urls,
        vec![
            "https://ct.cloudflare.com/logs/nimbus2024/",
            "https://ct.googleapis.com/logs/argon2024/",
            "https://ct.googleapis.com/logs/xenon2024/",
        ]
    );

    let argon = merged.get("https://ct.googleapis.com/logs/argon2024/").unwrap();
    assert_eq!(argon.get_str("description"), Some("Argon2024"));
    assert_eq!(argon.get_str("full_description"), Some("Google 'Argon2024' log"));
    assert_eq!(argon.get_str("status_apple"), Some("usable"));
    assert_eq!(argon.get_str("status_google"), Some("qualified"));

    let nimbus = merged.get("https://ct.cloudflare.com/logs/nimbus2024/").unwrap();
    assert_eq!(nimbus.get_str("description"), Some("Nimbus2024"));
    assert_eq!(nimbus.get_str("status"), Some("usable"));
    assert!(!nimbus.contains("full_description"));
}

#[test]
fn disagreeing_operator_sorts_by_source_a() {
    let a = LogListDocument::new(vec![Operator::new(
        "Zeta",
        vec![log("https://a.example/", "Zeta 'One' log", "usable")],
    )]);
    let b = LogListDocument::new(vec![
        Operator::new("Alpha", vec![log("https://a.example/", "Alpha 'One' log", "usable")]),
        Operator::new("Mu", vec![log("https://m.example/", "Mu 'Two' log", "usable")]),
    ]);
    let merged = merge(&a, &b, &MergeOptions::default(), &CollectingDiagnostics::new());
    let urls: Vec<&str> = merged.urls().collect();
    assert_eq!(urls, vec!["https://m.example/", "https://a.example/"]);
    let split = merged.get("https://a.example/").unwrap();
    assert_eq!(split.get_str("operator_apple"), Some("Zeta"));
    assert_eq!(split.get_str("operator_google"), Some("Alpha"));
}

#[test]
fn tiled_logs_merge_when_enabled() {
    let tiled = RawLogEntry::new()
        .with("submission_url", "https://sycamore.example/2025h1/")
        .with("description", "Let's Encrypt 'Sycamore2025h1'");
    let mut op = Operator::new("Let's Encrypt", vec![]);
    op.tiled_logs.push(tiled);
    let a = LogListDocument::new(vec![op]);
    let b = LogListDocument::default();

    let off = merge(&a, &b, &MergeOptions::default(), &CollectingDiagnostics::new());
    assert!(off.is_empty());

    let options = MergeOptions {
        include_tiled_logs: true,
        ..MergeOptions::default()
    };
    let on = merge(&a, &b, &options, &CollectingDiagnostics::new());
    assert_eq!(on.len(), 1);
    let record = on.get("https://sycamore.example/2025h1/").unwrap();
    assert_eq!(record.get_str("description"), Some("Sycamore2025h1"));
    assert_eq!(record.get_str("operator"), Some("Let's Encrypt"));
}
