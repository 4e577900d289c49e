//! Exercises `ServiceClient` against an in-process mock of the backend.

use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use client::{
    Action, ClientConfig, ClientError, RephraseRequest, RephraseStyle, RiskColor, ServiceClient,
    NETWORK_ERROR_MESSAGE, TIMEOUT_MESSAGE,
};
use serde_json::{json, Value};

const LONG_TEXT: &str = "The quick brown fox jumps over the lazy dog near the river bank today.";

async fn analyze_ok(Json(body): Json<Value>) -> Json<Value> {
    let words = body["text"].as_str().unwrap_or_default().split_whitespace().count();
    Json(json!({
        "plagiarism_score": 35.0,
        "plagiarism_level": "Low",
        "risk_color": "info",
        "text_analysis": {"total_words": words, "unique_words": words},
        "issues": ["Repeated phrasing"],
        "common_phrases": ["the quick brown"]
    }))
}

async fn rephrase_ok(Json(body): Json<Value>) -> Json<Value> {
    let text = body["text"].as_str().unwrap_or_default().to_string();
    Json(json!({
        "original_text": text,
        "rephrased_text": text.replace("quick", "swift"),
        "words_changed": 1,
        "changes_made": [
            {"original": "quick", "replacement": "swift", "position": 1},
            {"original": "sentence_start"},
        ],
        "style": body["style"],
        "creativity": body["creativity"]
    }))
}

async fn rephrase_rejects() -> (StatusCode, Json<Value>) {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({"error": "Text must be provided and cannot be empty"})),
    )
}

async fn analyze_crashes() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "<html>boom</html>")
}

async fn rephrase_slow() -> Json<Value> {
    tokio::time::sleep(Duration::from_secs(5)).await;
    Json(json!({"rephrased_text": "late"}))
}

async fn rephrase_garbage() -> &'static str {
    "not json"
}

async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn client_for(base_url: String) -> ServiceClient {
    ServiceClient::new(ClientConfig {
        base_url,
        rephrase_timeout_ms: 300,
        ..Default::default()
    })
    .unwrap()
}

#[tokio::test]
async fn analyze_and_rephrase_succeed() {
    let base = spawn(
        Router::new()
            .route("/analyze", post(analyze_ok))
            .route("/rephrase", post(rephrase_ok)),
    )
    .await;
    let client = client_for(base);

    let analysis = client.analyze(LONG_TEXT).await.unwrap();
    assert_eq!(analysis.risk_color, RiskColor::Info);
    assert_eq!(analysis.text_analysis.total_words, 14);
    assert_eq!(analysis.common_phrases, vec!["the quick brown"]);

    let resp = client
        .rephrase(RephraseRequest::new(LONG_TEXT).with_style(RephraseStyle::Formal))
        .await
        .unwrap();
    assert!(resp.rephrased_text.contains("swift"));
    assert_eq!(resp.words_changed, 1);
    // The entry without a replacement is dropped.
    assert_eq!(resp.changes_made.len(), 1);
    assert_eq!(resp.style.as_deref(), Some("formal"));
}

#[tokio::test]
async fn service_error_body_is_surfaced() {
    let base = spawn(
        Router::new()
            .route("/rephrase", post(rephrase_rejects))
            .route("/analyze", post(analyze_crashes)),
    )
    .await;
    let client = client_for(base);

    let err = client
        .rephrase(RephraseRequest::new(LONG_TEXT))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ClientError::Service {
            status: 400,
            message: "Text must be provided and cannot be empty".into()
        }
    );

    let err = client.analyze(LONG_TEXT).await.unwrap_err();
    assert_eq!(err.user_message(), Action::Analyze.default_error());
}

#[tokio::test]
async fn slow_service_hits_deadline() {
    let base = spawn(Router::new().route("/rephrase", post(rephrase_slow))).await;
    let client = client_for(base);

    let err = client
        .rephrase(RephraseRequest::new(LONG_TEXT))
        .await
        .unwrap_err();
    assert_eq!(err, ClientError::Timeout);
    assert_eq!(err.user_message(), TIMEOUT_MESSAGE);
}

#[tokio::test]
async fn undecodable_success_body_maps_to_network_message() {
    let base = spawn(Router::new().route("/rephrase", post(rephrase_garbage))).await;
    let client = client_for(base);

    let err = client
        .rephrase(RephraseRequest::new(LONG_TEXT))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)));
    assert_eq!(err.user_message(), NETWORK_ERROR_MESSAGE);
}

#[tokio::test]
async fn unreachable_service_is_network_error() {
    // Bind then drop to get a port nobody listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client_for(format!("http://{addr}"));
    let err = client
        .rephrase(RephraseRequest::new(LONG_TEXT))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Network(_)), "got {err:?}");
}

#[tokio::test]
async fn validation_happens_before_any_request() {
    // Nothing listens here; a request would fail with a network error.
    let client = client_for("http://127.0.0.1:9".into());

    let err = client.analyze("short").await.unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));

    let err = client
        .rephrase(RephraseRequest::new("   "))
        .await
        .unwrap_err();
    assert_eq!(err.user_message(), "Please enter some text to rephrase.");
}
