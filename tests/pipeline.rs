use std::path::Path;

use faculty_rooms::{process::process_site, Config, Error, DEFAULT_USER_AGENT};
use httpmock::prelude::*;
use tempfile::TempDir;

const OVERVIEW_PATH: &str = "/personen/Seiten/uebersicht_en.aspx";
const FIXTURE: &str = include_str!("fixtures/overview_en.html");

fn config_for(server: &MockServer, output_dir: &Path) -> Config {
    Config {
        base_url: server.base_url(),
        overview_path: OVERVIEW_PATH.into(),
        output_path: output_dir.join("faculty_data.json"),
        ..Config::default()
    }
}

#[tokio::test]
async fn test_end_to_end_keeps_only_entries_with_rooms() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start_async().await;
    let page_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path(OVERVIEW_PATH)
                .header("user-agent", DEFAULT_USER_AGENT);
            then.status(200)
                .header("Content-Type", "text/html; charset=utf-8")
                .body(FIXTURE);
        })
        .await;

    let config = config_for(&server, temp_dir.path());
    let summary = process_site(&config).await.unwrap();

    page_mock.assert_async().await;
    assert_eq!(summary.candidates, 2);
    assert_eq!(summary.records, 1);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.output_path, config.output_path);

    let written = std::fs::read_to_string(&config.output_path).unwrap();
    assert_eq!(
        written,
        "[\n  {\n    \"name\": \"Jane Doe\",\n    \"room\": \"12.A.345\"\n  }\n]"
    );
}

#[tokio::test]
async fn test_titles_and_order_survive_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start_async().await;
    let html = r#"<html><body>
        <div class="FirstLastName">
          <a class="OverviewTitle">Jürgen Groß</a><a class="OverviewTitle">Prof. Dr.</a>
          <div id="toggleText_10">Room 03.E.021</div>
        </div>
        <div class="FirstLastName">
          <a class="OverviewTitle">No Room</a>
          <div id="toggleText_11">Room AB.123</div>
        </div>
        <div class="FirstLastName">
          <a class="OverviewTitle">Ada Lovelace</a>
          <div id="toggleText_12">Room 123.4.678</div>
        </div>
    </body></html>"#;
    server
        .mock_async(|when, then| {
            when.method(GET).path(OVERVIEW_PATH);
            then.status(200).body(html);
        })
        .await;

    let config = config_for(&server, temp_dir.path());
    process_site(&config).await.unwrap();

    let written = std::fs::read_to_string(&config.output_path).unwrap();
    let records: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(
        records,
        serde_json::json!([
            {"name": "Prof. Dr. Jürgen Groß", "room": "03.E.021"},
            {"name": "Ada Lovelace", "room": "123.4.678"}
        ])
    );
    assert!(written.contains("Jürgen Groß"));
}

#[tokio::test]
async fn test_same_page_gives_same_bytes() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start_async().await;
    let page_mock = server
        .mock_async(|when, then| {
            when.method(GET).path(OVERVIEW_PATH);
            then.status(200).body(FIXTURE);
        })
        .await;

    let config = config_for(&server, temp_dir.path());
    process_site(&config).await.unwrap();
    let first = std::fs::read(&config.output_path).unwrap();
    process_site(&config).await.unwrap();
    let second = std::fs::read(&config.output_path).unwrap();

    page_mock.assert_hits_async(2).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_http_error_leaves_output_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(OVERVIEW_PATH);
            then.status(403).body("Forbidden");
        })
        .await;

    let config = config_for(&server, temp_dir.path());
    std::fs::write(&config.output_path, "previous run").unwrap();

    let result = process_site(&config).await;

    match result {
        Err(Error::HttpStatus { status, .. }) => assert_eq!(status.as_u16(), 403),
        other => panic!("expected HttpStatus error, got {other:?}"),
    }
    assert_eq!(
        std::fs::read_to_string(&config.output_path).unwrap(),
        "previous run"
    );
}

#[tokio::test]
async fn test_unreachable_host_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config {
        base_url: "http://127.0.0.1:1".into(),
        output_path: temp_dir.path().join("faculty_data.json"),
        ..Config::default()
    };

    let result = process_site(&config).await;

    assert!(matches!(result, Err(Error::Reqwest(_))));
    assert!(!config.output_path.exists());
}

#[tokio::test]
async fn test_write_failure_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(OVERVIEW_PATH);
            then.status(200).body(FIXTURE);
        })
        .await;

    let config = Config {
        output_path: temp_dir.path().join("no_such_dir").join("faculty_data.json"),
        ..config_for(&server, temp_dir.path())
    };

    let result = process_site(&config).await;

    assert!(matches!(result, Err(Error::Io(_))));
}
