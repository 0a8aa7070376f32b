use anyhow::Result;
use chrono::{Duration, SecondsFormat, Utc};
use httpmock::prelude::*;
use revision_rest::{
    AdapterConfig, BufferedReporter, FixedTag, LineKind, Outcome, RevisionAdapter,
};
use serde_json::{json, Value};

fn adapter_for(
    config: AdapterConfig,
) -> Result<(RevisionAdapter<FixedTag, BufferedReporter>, BufferedReporter)> {
    let reporter = BufferedReporter::new();
    let adapter = RevisionAdapter::new(config, FixedTag("unused".to_string()), reporter.clone())?;
    Ok((adapter, reporter))
}

fn revision_json(id: &str, hours_ago: i64, current: bool) -> Value {
    let created_at = (Utc::now() - Duration::hours(hours_ago)).to_rfc3339_opts(SecondsFormat::Secs, true);
    json!({"id": id, "created_at": created_at, "current": current})
}

/// 取出清單中的 revision 行（"1. xxx (...)" 格式）
fn listing_lines(reporter: &BufferedReporter) -> Vec<String> {
    reporter
        .of_kind(LineKind::Plain)
        .into_iter()
        .filter(|line| !line.is_empty())
        .collect()
}

#[tokio::test]
async fn test_list_sorts_most_recent_first() -> Result<()> {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/revisions");
            then.status(200).json_body(json!([
                revision_json("web:t1", 30, false),
                revision_json("web:t3", 3, true),
                revision_json("web:t2", 5, false),
            ]));
        })
        .await;

    let (adapter, reporter) = adapter_for(AdapterConfig::new(server.base_url(), "revisions"))?;
    let outcome = adapter.list().await;

    api_mock.assert_async().await;
    assert_eq!(outcome, Outcome::Completed);
    assert_eq!(
        listing_lines(&reporter),
        vec![
            "1. web:t3 (3 hours ago) current".to_string(),
            "2. web:t2 (5 hours ago)".to_string(),
            "3. web:t1 (a day ago)".to_string(),
        ]
    );
    assert_eq!(
        reporter.of_kind(LineKind::Success),
        vec![
            "Your revisions: ".to_string(),
            "Run \"revctl activate --revision <revision>\" to set one of your revisions as current"
                .to_string(),
        ]
    );
    Ok(())
}

#[tokio::test]
async fn test_list_output_layout() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/revisions");
            then.status(200)
                .json_body(json!([revision_json("web:only", 2, false)]));
        })
        .await;

    let (adapter, reporter) = adapter_for(AdapterConfig::new(server.base_url(), "revisions"))?;
    adapter.list().await;

    let kinds: Vec<LineKind> = reporter.lines().into_iter().map(|(kind, _)| kind).collect();
    assert_eq!(
        kinds,
        vec![
            LineKind::Info,
            LineKind::Plain,
            LineKind::Success,
            LineKind::Plain,
            LineKind::Plain,
            LineKind::Success,
        ]
    );
    assert_eq!(
        reporter.texts()[0],
        format!("GET '{}/revisions' to get revisions", server.base_url())
    );
    Ok(())
}

#[tokio::test]
async fn test_list_truncates_to_default_manifest_size() -> Result<()> {
    let server = MockServer::start_async().await;
    let revisions: Vec<Value> = (0..15)
        .map(|i| revision_json(&format!("web:r{}", i), i + 1, false))
        .collect();
    server
        .mock_async(|when, then| {
            when.method(GET).path("/revisions");
            then.status(200).json_body(Value::Array(revisions));
        })
        .await;

    let (adapter, reporter) = adapter_for(AdapterConfig::new(server.base_url(), "revisions"))?;
    adapter.list().await;

    let lines = listing_lines(&reporter);
    assert_eq!(lines.len(), 10);
    assert!(lines[0].starts_with("1. web:r0 "));
    assert!(lines[9].starts_with("10. web:r9 "));
    Ok(())
}

#[tokio::test]
async fn test_list_respects_configured_manifest_size() -> Result<()> {
    let server = MockServer::start_async().await;
    let revisions: Vec<Value> = (0..6)
        .map(|i| revision_json(&format!("web:r{}", i), i + 1, false))
        .collect();
    server
        .mock_async(|when, then| {
            when.method(GET).path("/revisions");
            then.status(200).json_body(Value::Array(revisions));
        })
        .await;

    let config = AdapterConfig::new(server.base_url(), "revisions").with_manifest_size(3);
    let (adapter, reporter) = adapter_for(config)?;
    adapter.list().await;

    assert_eq!(listing_lines(&reporter).len(), 3);
    Ok(())
}

#[tokio::test]
async fn test_list_only_accepts_200() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/revisions");
            then.status(204);
        })
        .await;

    let (adapter, reporter) = adapter_for(AdapterConfig::new(server.base_url(), "revisions"))?;
    assert_eq!(adapter.list().await, Outcome::Failed);
    assert_eq!(
        reporter.of_kind(LineKind::Failure),
        vec!["Error: HTTP 204".to_string()]
    );
    assert!(reporter.of_kind(LineKind::Success).is_empty());
    Ok(())
}

#[tokio::test]
async fn test_list_error_body_is_reported() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/revisions");
            then.status(503).body("maintenance");
        })
        .await;

    let (adapter, reporter) = adapter_for(AdapterConfig::new(server.base_url(), "revisions"))?;
    assert_eq!(adapter.list().await, Outcome::Failed);
    assert_eq!(
        reporter.of_kind(LineKind::Failure),
        vec!["Error: maintenance".to_string()]
    );
    Ok(())
}

#[tokio::test]
async fn test_list_with_malformed_body_fails() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/revisions");
            then.status(200).json_body(json!({"revisions": []}));
        })
        .await;

    let (adapter, reporter) = adapter_for(AdapterConfig::new(server.base_url(), "revisions"))?;
    assert_eq!(adapter.list().await, Outcome::Failed);

    let failures = reporter.of_kind(LineKind::Failure);
    assert_eq!(failures.len(), 1);
    assert!(failures[0].starts_with("Error: Could not decode response"));
    Ok(())
}

#[tokio::test]
async fn test_list_tolerates_null_current_and_skips_broken_records() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/revisions");
            then.status(200).json_body(json!([
                {"id": "web:a", "created_at": (Utc::now() - Duration::hours(4)).to_rfc3339(), "current": null},
                {"id": "web:broken", "created_at": null},
                revision_json("web:b", 2, true),
            ]));
        })
        .await;

    let (adapter, reporter) = adapter_for(AdapterConfig::new(server.base_url(), "revisions"))?;
    assert_eq!(adapter.list().await, Outcome::Completed);
    assert_eq!(
        listing_lines(&reporter),
        vec![
            "1. web:b (2 hours ago) current".to_string(),
            "2. web:a (4 hours ago)".to_string(),
        ]
    );
    assert!(reporter.of_kind(LineKind::Failure).is_empty());
    Ok(())
}

#[tokio::test]
async fn test_list_empty_collection() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/apps/web/revisions");
            then.status(200).json_body(json!([]));
        })
        .await;

    let (adapter, reporter) =
        adapter_for(AdapterConfig::new(server.base_url(), "/apps/web/revisions/"))?;
    assert_eq!(adapter.list().await, Outcome::Completed);
    assert!(listing_lines(&reporter).is_empty());
    Ok(())
}
