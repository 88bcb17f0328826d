//! Integration tests for the extraction pipeline
//!
//! These tests use wiremock to serve quote pages and run the full
//! read-fetch-parse-normalize-write cycle end-to-end.

use std::path::Path;
use std::time::Duration;
use tempfile::TempDir;
use web_extractor::config::{ExtractorConfig, HttpConfig, DEFAULT_USER_AGENT};
use web_extractor::extractor::{run_extraction, Pipeline, RunOutcome};
use web_extractor::output::read_csv;
use web_extractor::ExtractorError;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SINGLE_QUOTE_PAGE: &str = r#"<html><body>
    <div class="quote">
        <span class="text">“It is our choices that show what we truly are.”</span>
        <span>by <small class="author">J.K. Rowling</small></span>
        <div class="tags">
            Tags:
            <a class="tag" href="/tag/wisdom/">wisdom</a>
            <a class="tag" href="/tag/life/">life</a>
        </div>
    </div>
</body></html>"#;

const TWO_QUOTE_PAGE: &str = r#"<html><body>
    <div class="quote">
        <span class="text">  “Try not to become a man of success.”  </span>
        <small class="author">Albert Einstein</small>
        <div class="tags"><a class="tag">success</a></div>
    </div>
    <div class="quote">
        <small class="author">Anonymous</small>
    </div>
</body></html>"#;

fn test_config(timeout_secs: u64) -> ExtractorConfig {
    ExtractorConfig {
        http: HttpConfig {
            timeout_secs,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        },
    }
}

fn write_url_list(dir: &Path, urls: &[String]) -> std::path::PathBuf {
    let path = dir.join("raw_urls.txt");
    std::fs::write(&path, urls.join("\n")).expect("Failed to write URL list");
    path
}

async fn mount_page(server: &MockServer, route: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_duplicate_url_yields_single_row() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, "/a", SINGLE_QUOTE_PAGE).await;

    let dir = TempDir::new().unwrap();
    let url = format!("{}/a", mock_server.uri());
    let urls_file = write_url_list(dir.path(), &[url.clone(), url]);
    let output = dir.path().join("quotes.csv");

    let outcome = run_extraction(test_config(10), &urls_file, &output)
        .await
        .expect("Extraction failed");

    match outcome {
        RunOutcome::Written {
            rows, failed_urls, ..
        } => {
            assert_eq!(rows, 1);
            assert_eq!(failed_urls, 0);
        }
        other => panic!("Expected Written, got {:?}", other),
    }

    let table = read_csv(&output).unwrap();
    assert_eq!(table.len(), 1);

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
}

#[tokio::test]
async fn test_timeout_skips_output() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(SINGLE_QUOTE_PAGE)
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let urls_file = write_url_list(dir.path(), &[format!("{}/slow", mock_server.uri())]);
    let output = dir.path().join("out").join("quotes.csv");

    let outcome = run_extraction(test_config(1), &urls_file, &output)
        .await
        .expect("Extraction failed");

    assert_eq!(outcome, RunOutcome::NoRecords { failed_urls: 1 });
    assert!(!output.exists());
    assert!(!dir.path().join("out").exists());
}

#[tokio::test]
async fn test_timeout_is_classified() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&mock_server)
        .await;

    let pipeline = Pipeline::new(test_config(1)).unwrap();
    let extraction = pipeline.extract(&[format!("{}/", mock_server.uri())]).await;

    assert_eq!(extraction.failures.len(), 1);
    assert!(matches!(
        extraction.failures[0].error,
        ExtractorError::Timeout { .. }
    ));
}

#[tokio::test]
async fn test_tags_joined_in_output() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, "/page/1/", SINGLE_QUOTE_PAGE).await;

    let dir = TempDir::new().unwrap();
    let urls_file = write_url_list(dir.path(), &[format!("{}/page/1/", mock_server.uri())]);
    let output = dir.path().join("quotes.csv");

    run_extraction(test_config(10), &urls_file, &output)
        .await
        .unwrap();

    let table = read_csv(&output).unwrap();
    assert_eq!(table.columns(), &["text", "author", "tags"]);
    assert_eq!(table.cell(0, "tags"), Some("wisdom,life"));
    assert_eq!(table.cell(0, "author"), Some("J.K. Rowling"));
}

#[tokio::test]
async fn test_failed_url_does_not_stop_run() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;
    mount_page(&mock_server, "/good", TWO_QUOTE_PAGE).await;

    let dir = TempDir::new().unwrap();
    let urls_file = write_url_list(
        dir.path(),
        &[
            format!("{}/broken", mock_server.uri()),
            format!("{}/missing", mock_server.uri()),
            format!("{}/good", mock_server.uri()),
        ],
    );
    let output = dir.path().join("data").join("cleaned").join("quotes.csv");

    let outcome = run_extraction(test_config(10), &urls_file, &output)
        .await
        .unwrap();

    match outcome {
        RunOutcome::Written {
            path,
            rows,
            failed_urls,
        } => {
            assert!(path.is_absolute());
            assert_eq!(rows, 2);
            assert_eq!(failed_urls, 2);
        }
        other => panic!("Expected Written, got {:?}", other),
    }

    let table = read_csv(&output).unwrap();
    assert_eq!(
        table.cell(0, "text"),
        Some("“Try not to become a man of success.”")
    );
    assert_eq!(table.cell(1, "text"), Some(""));
    assert_eq!(table.cell(1, "author"), Some("Anonymous"));
    assert_eq!(table.cell(1, "tags"), Some(""));
}

#[tokio::test]
async fn test_status_error_is_classified() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&mock_server)
        .await;

    let pipeline = Pipeline::new(test_config(10)).unwrap();
    let extraction = pipeline
        .extract(&[format!("{}/private", mock_server.uri())])
        .await;

    assert!(matches!(
        extraction.failures[0].error,
        ExtractorError::Status { status: 403, .. }
    ));
}

#[tokio::test]
async fn test_sends_identifying_user_agent() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("user-agent", DEFAULT_USER_AGENT))
        .respond_with(ResponseTemplate::new(200).set_body_string(SINGLE_QUOTE_PAGE))
        .expect(1)
        .mount(&mock_server)
        .await;

    let pipeline = Pipeline::new(ExtractorConfig::default()).unwrap();
    let records = pipeline
        .process_url(&format!("{}/", mock_server.uri()))
        .await
        .expect("Request without the expected user agent");

    assert_eq!(records.len(), 1);
}

#[tokio::test]
async fn test_pages_without_quotes_yield_no_output() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, "/", "<html><body><p>No quotes</p></body></html>").await;

    let dir = TempDir::new().unwrap();
    let urls_file = write_url_list(dir.path(), &[format!("{}/", mock_server.uri())]);
    let output = dir.path().join("quotes.csv");

    let outcome = run_extraction(test_config(10), &urls_file, &output)
        .await
        .unwrap();

    assert_eq!(outcome, RunOutcome::NoRecords { failed_urls: 0 });
    assert!(!output.exists());
}

#[tokio::test]
async fn test_rerun_overwrites_output() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, "/two", TWO_QUOTE_PAGE).await;
    mount_page(&mock_server, "/one", SINGLE_QUOTE_PAGE).await;

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("quotes.csv");

    let first = write_url_list(dir.path(), &[format!("{}/two", mock_server.uri())]);
    run_extraction(test_config(10), &first, &output)
        .await
        .unwrap();
    assert_eq!(read_csv(&output).unwrap().len(), 2);

    let second = write_url_list(dir.path(), &[format!("{}/one", mock_server.uri())]);
    run_extraction(test_config(10), &second, &output)
        .await
        .unwrap();
    assert_eq!(read_csv(&output).unwrap().len(), 1);
}
