use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use portfolio_shared::{ContactAccepted, ContactPayload, FailureResponse, FieldError};
use uuid::Uuid;

use crate::{error::AppError, models::contact_models::StoredContact, AppState};

/// `POST /api/contact`
pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ContactPayload>, JsonRejection>,
) -> Result<Json<ContactAccepted>, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::debug!("Rejected contact body: {}", rejection.body_text());
        AppError::Validation(vec![FieldError::invalid_body(rejection.body_text())])
    })?;

    let message = payload.into_message().map_err(|errors| {
        tracing::info!("Contact submission failed validation on {} field(s)", errors.len());
        AppError::Validation(errors)
    })?;

    let store = state.contact_store.clone();
    let contact = StoredContact::new(Uuid::new_v4(), message);

    // diesel is blocking, keep it off the async workers
    let contact = tokio::task::spawn_blocking(move || {
        store.save(&contact).map(|_| contact)
    })
    .await
    .map_err(|e| AppError::Unexpected(format!("contact store task failed: {}", e)))??;

    tracing::info!(
        "Accepted contact message {} via {} store",
        contact.id,
        state.contact_store.kind()
    );

    let mut body = ContactAccepted::new(contact.id, state.contact_store.receipt_message());
    if state.contact_store.echoes_payload() {
        body = body.with_data(contact.message);
    }
    Ok(Json(body))
}

/// Every method other than POST on `/api/contact`.
pub async fn contact_method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, "POST")],
        Json(FailureResponse::new("Method not allowed")),
    )
        .into_response()
}
