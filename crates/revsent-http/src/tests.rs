//! Tests for the analysis HTTP client

use insta::assert_snapshot;
use reqwest::StatusCode;

use crate::{
    interpret_analysis_response, AnalysisRequest, AnalysisService, Error, HttpAnalysisClient,
    ServerConfig,
};
use revsent_core::DEFAULT_FAILURE_MESSAGE;

fn client(base: &str) -> HttpAnalysisClient {
    HttpAnalysisClient::new(ServerConfig::new(base).unwrap()).unwrap()
}

fn body_text(request: &reqwest::Request) -> String {
    let bytes = request.body().and_then(|b| b.as_bytes()).unwrap_or_default();
    String::from_utf8_lossy(bytes).into_owned()
}

#[test]
fn test_analyze_request_is_form_encoded_post() {
    let client = client("http://localhost:5004");
    let request = client
        .build_analyze_request(&AnalysisRequest::new("https://www.amazon.com/dp/B0TEST?th=1"))
        .unwrap();

    assert_eq!(request.method(), reqwest::Method::POST);
    assert_eq!(request.url().as_str(), "http://localhost:5004/analyze");
    assert_eq!(
        request.headers()["content-type"],
        "application/x-www-form-urlencoded"
    );
    assert_snapshot!(body_text(&request), @"product_url=https%3A%2F%2Fwww.amazon.com%2Fdp%2FB0TEST%3Fth%3D1");
}

#[test]
fn test_empty_url_is_still_encoded() {
    let client = client("http://localhost:5004");
    let request = client.build_analyze_request(&AnalysisRequest::new("")).unwrap();
    assert_eq!(body_text(&request), "product_url=");
}

#[test]
fn test_failure_status_uses_error_field() {
    let err = interpret_analysis_response(
        StatusCode::BAD_REQUEST,
        r#"{"error": "Invalid URL"}"#,
    )
    .unwrap_err();

    assert!(matches!(err, Error::Request { status: 400, .. }));
    assert_eq!(err.to_string(), "Invalid URL");
}

#[test]
fn test_failure_status_without_error_field() {
    let err = interpret_analysis_response(StatusCode::INTERNAL_SERVER_ERROR, r#"{}"#).unwrap_err();
    assert_eq!(err.to_string(), DEFAULT_FAILURE_MESSAGE);

    let err = interpret_analysis_response(StatusCode::BAD_GATEWAY, "<html>Bad Gateway</html>")
        .unwrap_err();
    assert_eq!(err.to_string(), DEFAULT_FAILURE_MESSAGE);
}

#[test]
fn test_success_status_parses_result() {
    let body = r#"{
        "overall_summary": "Solid kettle.",
        "overall_sentiment_score": 80,
        "overall_sentiment": "Positive",
        "sentiment_distribution": {"Positive": 4, "Negative": 0, "Neutral": 1},
        "product_related": 5,
        "non_product_related": 0,
        "detailed_analysis": [
            {"rating": 4, "sentiment": "Positive", "product_related": true, "summary": "Boils fast"}
        ]
    }"#;

    let result = interpret_analysis_response(StatusCode::OK, body).unwrap();
    assert_eq!(result.overall_sentiment_score, Some(80.0));
    assert_eq!(result.detailed_analysis.len(), 1);
}

#[test]
fn test_success_status_with_wrong_shape_is_malformed() {
    let err = interpret_analysis_response(StatusCode::OK, r#"{"overall_summary": "x"}"#)
        .unwrap_err();
    assert!(matches!(err, Error::MalformedResponse(_)));
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let client = client("http://127.0.0.1:1");

    let err = client
        .analyze(&AnalysisRequest::new("https://www.walmart.com/ip/123"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Network(_)));

    let err = client.status().await.unwrap_err();
    assert!(matches!(err, Error::Network(_)));
}
