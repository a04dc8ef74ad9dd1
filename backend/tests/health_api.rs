use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use portfolio_backend::{
    app, config::app_config::AppConfig, repositories::contact_store::MemoryContactStore, AppState,
};

#[tokio::test]
async fn health_reports_ok_with_timestamp() {
    let config = AppConfig::from_lookup(|_| None).unwrap();
    let router = app(Arc::new(AppState::new(Arc::new(MemoryContactStore::new()))), &config);

    let response = router
        .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ok");
    let timestamp = body["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
}
