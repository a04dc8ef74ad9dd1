use axum::Json;
use chrono::{SecondsFormat, Utc};
use portfolio_shared::HealthResponse;

/// `GET /api/health`
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::ok(
        Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    ))
}
