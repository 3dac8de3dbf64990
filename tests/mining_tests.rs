//! Integration tests for the mining pipeline
//!
//! These use wiremock for the HTTP side and tempfile for the disk side,
//! exercising fetch -> extract -> rank -> persist end to end.

use reelrank::config::Config;
use reelrank::miner::run_mining;
use reelrank::record::sort_by_score;
use reelrank::store::load_records;
use reelrank::viewer::Pager;
use reelrank::{Record, ReelError};
use std::path::Path;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Builds a config pointing at the mock server and a temp directory
fn test_config(server_uri: &str, dir: &TempDir) -> Config {
    let mut config = Config::default();
    config.source.url = format!("{}/guide/popular-movies/", server_uri);
    config.source.user_agent = "ReelrankTest/1.0".to_string();
    config.output.csv_path = dir
        .path()
        .join("popular_movies.csv")
        .to_string_lossy()
        .into_owned();
    config.output.json_path = dir
        .path()
        .join("popular_movies.json")
        .to_string_lossy()
        .into_owned();
    config
}

fn listing_html(entries: &[(&str, &str)]) -> String {
    let mut body = String::new();
    for (title, score) in entries {
        body.push_str(&format!(
            r##"<div class="row">
                 <h2 class="article_movie_title"><a href="#">{}</a></h2>
                 <span class="tMeterScore">{}</span>
               </div>"##,
            title, score
        ));
    }
    format!("<html><head></head><body>{}</body></html>", body)
}

#[tokio::test]
async fn test_full_mining_run() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let config = test_config(&server.uri(), &dir);

    Mock::given(method("GET"))
        .and(path("/guide/popular-movies/"))
        .and(header("user-agent", "ReelrankTest/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string(listing_html(&[
            ("Middling Movie", "55%"),
            ("Great Movie", "97%"),
            ("Bad Movie", "12%"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let report = run_mining(&config).await.unwrap();
    assert_eq!(report.records_mined, 3);
    assert!(report.files_written);

    // CSV holds the ranked order.
    let records = load_records(Path::new(&config.output.csv_path)).unwrap();
    assert_eq!(
        records,
        vec![
            Record::new("Great Movie", 97),
            Record::new("Middling Movie", 55),
            Record::new("Bad Movie", 12),
        ]
    );

    // JSON mirrors the same set with the same field names.
    let json = std::fs::read_to_string(&config.output.json_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    let array = parsed.as_array().unwrap();
    assert_eq!(array.len(), 3);
    assert_eq!(array[0]["Title"], "Great Movie");
    assert_eq!(array[0]["Score"], 97);
}

#[tokio::test]
async fn test_tied_scores_keep_document_order() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let config = test_config(&server.uri(), &dir);

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(listing_html(&[
            ("Earlier Tie", "80%"),
            ("Later Tie", "80%"),
            ("Winner", "90%"),
        ])))
        .mount(&server)
        .await;

    run_mining(&config).await.unwrap();

    let records = load_records(Path::new(&config.output.csv_path)).unwrap();
    let titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Winner", "Earlier Tie", "Later Tie"]);
}

#[tokio::test]
async fn test_non_success_status_body_is_still_mined() {
    // The fetcher deliberately ignores the status code; a listing served
    // with a 500 still produces records.
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let config = test_config(&server.uri(), &dir);

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_string(listing_html(&[("Served With Error", "66%")])),
        )
        .mount(&server)
        .await;

    let report = run_mining(&config).await.unwrap();
    assert_eq!(report.records_mined, 1);

    let records = load_records(Path::new(&config.output.csv_path)).unwrap();
    assert_eq!(records[0], Record::new("Served With Error", 66));
}

#[tokio::test]
async fn test_empty_extraction_skips_writing() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let config = test_config(&server.uri(), &dir);

    // A previous run's files must survive an empty result.
    std::fs::write(&config.output.csv_path, "Title,Score\nSurvivor,99\n").unwrap();
    std::fs::write(&config.output.json_path, "[]\n").unwrap();

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(404).set_body_string("<html><body>Not found</body></html>"),
        )
        .mount(&server)
        .await;

    let report = run_mining(&config).await.unwrap();
    assert_eq!(report.records_mined, 0);
    assert!(!report.files_written);

    let records = load_records(Path::new(&config.output.csv_path)).unwrap();
    assert_eq!(records, vec![Record::new("Survivor", 99)]);
}

#[tokio::test]
async fn test_connection_failure_is_an_http_error() {
    let dir = TempDir::new().unwrap();
    // Port 1 is essentially never listening.
    let mut config = test_config("http://127.0.0.1:1", &dir);
    config.source.url = "http://127.0.0.1:1/guide/popular-movies/".to_string();

    let result = run_mining(&config).await;
    assert!(matches!(result, Err(ReelError::Http { .. })));
    assert!(!Path::new(&config.output.csv_path).exists());
}

#[tokio::test]
async fn test_mined_set_pages_like_the_viewer() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let config = test_config(&server.uri(), &dir);

    let entries: Vec<(String, String)> = (0..23)
        .map(|i| (format!("Movie {}", i), format!("{}%", 100 - i)))
        .collect();
    let borrowed: Vec<(&str, &str)> = entries
        .iter()
        .map(|(t, s)| (t.as_str(), s.as_str()))
        .collect();

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(listing_html(&borrowed)))
        .mount(&server)
        .await;

    run_mining(&config).await.unwrap();

    let mut records = load_records(Path::new(&config.output.csv_path)).unwrap();
    sort_by_score(&mut records);

    let pager = Pager::new(records.len(), config.viewer.page_size);
    assert_eq!(pager.total_pages(), 3);
    assert_eq!(pager.page_range(), 0..10);
}
