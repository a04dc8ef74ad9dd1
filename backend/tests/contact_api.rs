use std::collections::HashSet;
use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use portfolio_backend::{
    api_router, app,
    config::app_config::AppConfig,
    models::contact_models::StoredContact,
    repositories::contact_store::{AcknowledgeOnly, ContactStore, MemoryContactStore, StoreError},
    AppState,
};

struct FailingStore;

impl ContactStore for FailingStore {
    fn kind(&self) -> &'static str {
        "failing"
    }

    fn save(&self, _contact: &StoredContact) -> Result<(), StoreError> {
        Err(StoreError::Migration("database offline".to_string()))
    }
}

struct PanickingStore;

impl ContactStore for PanickingStore {
    fn kind(&self) -> &'static str {
        "panicking"
    }

    fn save(&self, _contact: &StoredContact) -> Result<(), StoreError> {
        panic!("store exploded");
    }
}

fn router_with(store: Arc<dyn ContactStore>) -> Router {
    api_router(Arc::new(AppState::new(store)))
}

async fn send(router: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, HeaderMap, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };
    let response = router.oneshot(request.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, headers, value)
}

fn valid_payload() -> Value {
    json!({
        "name": "Al",
        "email": "al@x.com",
        "message": "Hello there, this is long enough."
    })
}

#[tokio::test]
async fn accepts_valid_message_and_stores_it() {
    let store = Arc::new(MemoryContactStore::new());
    let (status, _, body) = send(
        router_with(store.clone()),
        Method::POST,
        "/api/contact",
        Some(valid_payload()),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Message sent successfully");
    let id = Uuid::parse_str(body["id"].as_str().unwrap()).unwrap();
    assert!(body.get("data").is_none());

    let stored = store.messages();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, id);
    assert_eq!(stored[0].message.email, "al@x.com");
}

#[tokio::test]
async fn rejects_three_bad_fields() {
    let store = Arc::new(MemoryContactStore::new());
    let (status, _, body) = send(
        router_with(store.clone()),
        Method::POST,
        "/api/contact",
        Some(json!({"name": "A", "email": "bad", "message": "short"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    let errors = body["errors"].as_array().unwrap();
    let fields: Vec<&str> = errors.iter().map(|e| e["field"].as_str().unwrap()).collect();
    assert_eq!(fields, vec!["name", "email", "message"]);
    assert_eq!(errors[1]["code"], "invalid_email");
    assert!(store.is_empty());
}

#[tokio::test]
async fn names_only_the_offending_field() {
    let (status, _, body) = send(
        router_with(Arc::new(MemoryContactStore::new())),
        Method::POST,
        "/api/contact",
        Some(json!({"name": "Al", "email": "al@x.com", "message": "too short"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["field"], "message");
    assert_eq!(errors[0]["message"], "Message must be at least 10 characters");
}

#[tokio::test]
async fn empty_object_reports_required_fields() {
    let (status, _, body) = send(
        router_with(Arc::new(MemoryContactStore::new())),
        Method::POST,
        "/api/contact",
        Some(json!({})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 3);
    assert!(errors.iter().all(|e| e["code"] == "required"));
}

#[tokio::test]
async fn malformed_json_is_a_body_error() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/contact")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = router_with(Arc::new(MemoryContactStore::new()))
        .oneshot(request)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["errors"][0]["field"], "body");
    assert_eq!(body["errors"][0]["code"], "invalid_body");
}

#[tokio::test]
async fn wrongly_typed_field_is_a_field_error() {
    let store = Arc::new(MemoryContactStore::new());
    let (status, _, body) = send(
        router_with(store.clone()),
        Method::POST,
        "/api/contact",
        Some(json!({"name": 123, "email": "al@x.com", "message": "Hello there, this is long enough."})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["field"], "name");
    assert_eq!(errors[0]["code"], "invalid_type");
    assert!(store.is_empty());
}

#[tokio::test]
async fn array_body_is_a_body_error() {
    let (status, _, body) = send(
        router_with(Arc::new(MemoryContactStore::new())),
        Method::POST,
        "/api/contact",
        Some(json!([valid_payload()])),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["field"], "body");
    assert_eq!(body["errors"][0]["code"], "invalid_body");
}

#[tokio::test]
async fn email_without_tld_is_rejected() {
    let (status, _, body) = send(
        router_with(Arc::new(MemoryContactStore::new())),
        Method::POST,
        "/api/contact",
        Some(json!({"name": "Al", "email": "al@x", "message": "Hello there, this is long enough."})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["field"], "email");
    assert_eq!(body["errors"][0]["message"], "Invalid email address");
}

#[tokio::test]
async fn every_accepted_message_gets_a_fresh_id() {
    let store = Arc::new(MemoryContactStore::new());
    let router = router_with(store.clone());
    let mut seen = HashSet::new();
    for _ in 0..20 {
        let (status, _, body) = send(router.clone(), Method::POST, "/api/contact", Some(valid_payload())).await;
        assert_eq!(status, StatusCode::OK);
        assert!(seen.insert(body["id"].as_str().unwrap().to_string()));
    }
    assert_eq!(store.len(), 20);
}

#[tokio::test]
async fn other_methods_get_405_with_allow_header() {
    for method in [Method::GET, Method::PUT, Method::DELETE] {
        let (status, headers, body) = send(
            router_with(Arc::new(MemoryContactStore::new())),
            method,
            "/api/contact",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(headers.get(header::ALLOW).unwrap(), "POST");
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Method not allowed");
    }
}

#[tokio::test]
async fn acknowledge_mode_echoes_payload() {
    let (status, _, body) = send(
        router_with(Arc::new(AcknowledgeOnly)),
        Method::POST,
        "/api/contact",
        Some(valid_payload()),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Message received");
    assert_eq!(body["data"]["name"], "Al");
    assert!(Uuid::parse_str(body["id"].as_str().unwrap()).is_ok());
}

#[tokio::test]
async fn store_failure_is_an_opaque_500() {
    let (status, _, body) = send(
        router_with(Arc::new(FailingStore)),
        Method::POST,
        "/api/contact",
        Some(valid_payload()),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Failed to send message");
    assert!(!body.to_string().contains("offline"));
}

#[tokio::test]
async fn panicking_store_is_an_opaque_500() {
    let config = AppConfig::from_lookup(|_| None).unwrap();
    let router = app(Arc::new(AppState::new(Arc::new(PanickingStore))), &config);
    let (status, _, body) = send(router, Method::POST, "/api/contact", Some(valid_payload())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Failed to send message");
}
