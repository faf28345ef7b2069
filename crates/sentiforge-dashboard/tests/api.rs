//! HTTP tests for the dashboard API.

use std::io::Write;
use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use sentiforge_config::DashboardConfig;
use sentiforge_core::{Lexicon, LexiconEntry, Polarity, PolarityEstimator, Scorer};
use sentiforge_dashboard::{
    api::request_text, build_app, build_state, router, static_assets, AppState,
};
use serde_json::{json, Value};
use tower::ServiceExt;

struct FixedEstimator(f64);

impl PolarityEstimator for FixedEstimator {
    fn estimate(&self, _text: &str) -> Polarity {
        Polarity::new(self.0, 0.5)
    }
}

struct PanickingEstimator;

impl PolarityEstimator for PanickingEstimator {
    fn estimate(&self, _text: &str) -> Polarity {
        panic!("estimator failure")
    }
}

fn app(external: f64) -> Router {
    let lexicon = Lexicon::from_entries([
        LexiconEntry::new("gloomy", "negative", -0.6),
        LexiconEntry::new("happy", "positive", 0.7),
    ])
    .unwrap();
    let scorer = Scorer::with_estimator(lexicon, FixedEstimator(external));
    router(Arc::new(AppState::new(scorer)))
}

async fn post_analyze(app: Router, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/analyze")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_health() {
    let request = Request::builder()
        .uri("/api/health")
        .body(Body::empty())
        .unwrap();

    let response = app(0.0).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "healthy");
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_analyze_gloomy() {
    let (status, body) = post_analyze(app(0.0), r#"{"text": "gloomy"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["text"], "gloomy");
    assert_eq!(body["sentiment"], "negative");
    assert_eq!(body["polarity"], -0.57);
    assert_eq!(body["subjectivity"], 0.5);
    assert_eq!(body["word_count"], 1);
    assert_eq!(
        body["found_words"],
        json!([{"word": "gloomy", "sentiment": "negative", "score": -0.6}])
    );
    assert_eq!(body["analysis_details"]["lexicon_avg"], -0.6);
    assert_eq!(body["analysis_details"]["external_score"], 0.0);
}

#[tokio::test]
async fn test_analyze_trims_text() {
    let (status, body) = post_analyze(app(0.4), r#"{"text": "   happy  "}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["text"], "happy");
    assert_eq!(body["sentiment"], "positive");
    assert_eq!(body["analysis_details"]["final_score"], 0.685);
}

#[tokio::test]
async fn test_analyze_without_lexicon_words() {
    let (status, body) = post_analyze(app(0.05), r#"{"text": "plain words"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sentiment"], "slightly positive");
    assert_eq!(body["found_words"], json!([]));
    assert_eq!(body["analysis_details"]["lexicon_avg"], 0.0);
}

#[tokio::test]
async fn test_empty_text_is_bad_request() {
    let (status, body) = post_analyze(app(0.0), r#"{"text": ""}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No text provided");

    let (status, body) = post_analyze(app(0.0), r#"{"text": "   "}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No text provided");
}

#[tokio::test]
async fn test_missing_text_is_bad_request() {
    let (status, body) = post_analyze(app(0.0), r#"{"content": "gloomy"}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No text provided");

    let (status, _) = post_analyze(app(0.0), r#"{"text": null}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let (status, body) = post_analyze(app(0.0), "{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Invalid request body"));

    let (status, _) = post_analyze(app(0.0), r#"{"text": 42}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_estimator_panic_is_internal_error() {
    let scorer = Scorer::with_estimator(Lexicon::fallback(), PanickingEstimator);
    let app = router(Arc::new(AppState::new(scorer)));

    let (status, body) = post_analyze(app, r#"{"text": "happy"}"#).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].is_string());
    assert!(body["error"].as_str().unwrap().contains("estimator failure"));
}

#[test]
fn test_request_text_extraction() {
    assert_eq!(request_text(br#"{"text":" hi "}"#).unwrap(), "hi");
    assert!(request_text(b"").is_err());
    assert!(request_text(b"  \n").is_err());
}

#[tokio::test]
async fn test_build_state_falls_back_and_serves() {
    let config = DashboardConfig::new()
        .with_lexicon_path("/nonexistent/lexicon.csv")
        .with_static_dir(None);
    let state = build_state(&config);
    assert_eq!(state.scorer().lexicon().len(), 4);

    let app = build_app(&config, Arc::new(state));
    let (status, body) = post_analyze(app, r#"{"text": "I am displeased"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["found_words"][0]["word"], "displeased");
    assert_eq!(body["sentiment"], "negative");
}

#[tokio::test]
async fn test_build_state_reads_configured_lexicon() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"word,sentiment,score\nirritated,negative,-0.55\n")
        .unwrap();

    let config = DashboardConfig::new()
        .with_lexicon_path(file.path())
        .with_static_dir(None);
    let state = build_state(&config);
    assert_eq!(state.scorer().lexicon().len(), 1);

    let (status, body) = post_analyze(
        build_app(&config, Arc::new(state)),
        r#"{"text": "Irritated!"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["found_words"][0]["score"], -0.55);
}

#[tokio::test]
async fn test_cors_headers_present() {
    let config = DashboardConfig::new().with_static_dir(None);
    let state = AppState::new(Scorer::new(Lexicon::fallback()));
    let app = build_app(&config, Arc::new(state));

    let request = Request::builder()
        .uri("/api/health")
        .header(header::ORIGIN, "http://example.com")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[test]
fn test_static_assets_report_presence() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<html></html>").unwrap();
    std::fs::write(dir.path().join("style.css"), "body {}").unwrap();

    let assets = static_assets(dir.path());
    let report: Vec<(String, bool)> = assets
        .iter()
        .map(|a| {
            let name = a.path.file_name().unwrap().to_string_lossy().into_owned();
            (name, a.present)
        })
        .collect();
    assert_eq!(
        report,
        vec![
            ("index.html".to_string(), true),
            ("style.css".to_string(), true),
            ("script.js".to_string(), false),
        ]
    );
}

#[tokio::test]
async fn test_build_state_with_missing_static_dir() {
    let dir = tempfile::tempdir().unwrap();
    let config = DashboardConfig::new()
        .with_lexicon_path("/nonexistent/lexicon.csv")
        .with_static_dir(Some(dir.path().join("absent")));

    assert!(static_assets(&dir.path().join("absent"))
        .iter()
        .all(|a| !a.present));
    let state = build_state(&config);
    assert_eq!(state.scorer().lexicon().len(), 4);
}
