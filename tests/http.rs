//! End-to-end tests driving the router in-process.

use std::sync::{Arc, OnceLock};

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use rul_predictor::adapters::{SvrParams, SyntheticDataset};
use rul_predictor::application::InferenceService;
use rul_predictor::web::dashboard::PROMPT;
use rul_predictor::web::{self, SharedService};

fn service() -> SharedService {
    static SERVICE: OnceLock<SharedService> = OnceLock::new();
    SERVICE
        .get_or_init(|| {
            let svc = InferenceService::train(&SyntheticDataset::new(42, 60), &SvrParams::default())
                .expect("Should train");
            Arc::new(svc)
        })
        .clone()
}

fn app() -> Router {
    web::router(service())
}

async fn send(request: Request<Body>) -> (StatusCode, Option<String>, String) {
    let response = app().oneshot(request).await.expect("Request should complete");
    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Body should collect")
        .to_bytes();
    (status, location, String::from_utf8_lossy(&bytes).into_owned())
}

async fn post_json(body: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::post("/predict")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .expect("Valid request");
    let (status, _, text) = send(request).await;
    let json = serde_json::from_str(&text).unwrap_or(serde_json::Value::Null);
    (status, json)
}

async fn post_form(body: &str) -> (StatusCode, String) {
    let request = Request::post("/dashboard/")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_owned()))
        .expect("Valid request");
    let (status, _, text) = send(request).await;
    (status, text)
}

fn predicted(json: &serde_json::Value) -> f64 {
    json.get("predicted_rul")
        .and_then(serde_json::Value::as_f64)
        .expect("predicted_rul should be a number")
}

#[tokio::test]
async fn test_predict_returns_single_numeric_field() {
    let (status, json) = post_json(r#"{"param1": 72.0, "param2": 0.45, "param3": 31.0}"#).await;

    assert_eq!(status, StatusCode::OK);
    let object = json.as_object().expect("Response should be an object");
    assert_eq!(object.len(), 1);
    assert!(predicted(&json).is_finite());
}

#[tokio::test]
async fn test_predict_is_deterministic() {
    let body = r#"{"param1": 65, "param2": 0.7, "param3": 25}"#;
    let (_, a) = post_json(body).await;
    let (_, b) = post_json(body).await;
    assert_eq!(predicted(&a).to_bits(), predicted(&b).to_bits());
}

#[tokio::test]
async fn test_api_and_dashboard_agree() {
    let (_, json) = post_json(r#"{"param1": 81.5, "param2": 0.33, "param3": 27.25}"#).await;
    let expected = format!("{:.2} hours", predicted(&json));

    let (status, html) = post_form("param1=81.5&param2=0.33&param3=27.25").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(&expected), "dashboard should show {expected}");
    assert!(html.contains("<svg"));
}

#[tokio::test]
async fn test_mean_point_matches_baseline() {
    let svc = service();
    let mean = svc.standardization().mean_point();
    let baseline = svc.predict_standardized(&[0.0; 3]);

    let body = serde_json::json!({
        "param1": mean.param1,
        "param2": mean.param2,
        "param3": mean.param3,
    })
    .to_string();
    let (status, json) = post_json(&body).await;

    assert_eq!(status, StatusCode::OK);
    assert!((predicted(&json) - baseline).abs() < 1e-9);
}

#[tokio::test]
async fn test_missing_field_is_rejected() {
    let (status, json) = post_json(r#"{"param1": 70.0, "param2": 0.5}"#).await;

    assert_ne!(status, StatusCode::OK);
    assert!(status.is_client_error());
    assert!(json.get("error").is_some());
}

#[tokio::test]
async fn test_non_numeric_field_is_rejected() {
    let (status, _) = post_json(r#"{"param1": "hot", "param2": 0.5, "param3": 30}"#).await;
    assert_ne!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let (status, _) = post_json("{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_root_redirects_to_dashboard() {
    let request = Request::get("/").body(Body::empty()).expect("Valid request");
    let (status, location, _) = send(request).await;

    assert!(status.is_redirection());
    assert_eq!(location.as_deref(), Some("/dashboard/"));
}

#[tokio::test]
async fn test_dashboard_without_slash_redirects() {
    let request = Request::get("/dashboard").body(Body::empty()).expect("Valid request");
    let (status, location, _) = send(request).await;

    assert!(status.is_redirection());
    assert_eq!(location.as_deref(), Some("/dashboard/"));
}

#[tokio::test]
async fn test_dashboard_has_no_chart_before_submit() {
    let request = Request::get("/dashboard/").body(Body::empty()).expect("Valid request");
    let (status, _, html) = send(request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(PROMPT));
    assert!(!html.contains("<svg"));
}

#[tokio::test]
async fn test_dashboard_blank_submit_shows_prompt() {
    let (status, html) = post_form("param1=70&param2=&param3=30").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(PROMPT));
    assert!(!html.contains("<svg"));
}

#[tokio::test]
async fn test_dashboard_non_numeric_shows_error() {
    let (status, html) = post_form("param1=70&param2=abc&param3=30").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("param2 must be a number"));
    assert!(!html.contains("<svg"));
}

#[tokio::test]
async fn test_health_reports_training_summary() {
    let request = Request::get("/health").body(Body::empty()).expect("Valid request");
    let (status, _, text) = send(request).await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&text).expect("Health should be JSON");
    assert_eq!(json["n_samples"], 60);
    assert!(json["n_support_vectors"].as_u64().unwrap_or(0) > 0);
}
