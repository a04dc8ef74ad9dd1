use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub mod config {
    pub mod app_config;
}
pub mod handlers {
    pub mod contact_handlers;
    pub mod health_handlers;
}
pub mod models {
    pub mod contact_models;
}
pub mod repositories {
    pub mod contact_repository;
    pub mod contact_store;
}
pub mod error;
pub mod schema;

use config::app_config::{AppConfig, StoreKind};
use handlers::{contact_handlers, health_handlers};
use repositories::contact_repository::ContactRepository;
use repositories::contact_store::{AcknowledgeOnly, ContactStore, MemoryContactStore, StoreError};

pub struct AppState {
    pub contact_store: Arc<dyn ContactStore>,
}

impl AppState {
    pub fn new(contact_store: Arc<dyn ContactStore>) -> Self {
        Self { contact_store }
    }
}

/// Builds the store the config asks for. The sqlite store runs its migrations here.
pub fn build_contact_store(config: &AppConfig) -> Result<Arc<dyn ContactStore>, StoreError> {
    let store: Arc<dyn ContactStore> = match config.contact_store {
        StoreKind::Memory => Arc::new(MemoryContactStore::new()),
        StoreKind::Acknowledge => Arc::new(AcknowledgeOnly),
        StoreKind::Sqlite => Arc::new(ContactRepository::connect(&config.database_url)?),
    };
    tracing::info!("Using {} contact store", store.kind());
    Ok(store)
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .expose_headers([header::CONTENT_TYPE]);

    if config.is_development() {
        return cors.allow_origin(Any);
    }
    match config
        .frontend_url
        .as_deref()
        .and_then(|url| url.parse::<HeaderValue>().ok())
    {
        Some(origin) => cors.allow_origin(origin),
        // same-origin only
        None => cors,
    }
}

/// API routes without the outer layers, handy for tests.
pub fn api_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health_handlers::health_check))
        .route(
            "/api/contact",
            post(contact_handlers::submit_contact)
                .fallback(contact_handlers::contact_method_not_allowed),
        )
        .with_state(state)
}

pub fn app(state: Arc<AppState>, config: &AppConfig) -> Router {
    let mut router = api_router(state);

    if let Some(dir) = &config.static_dir {
        tracing::info!("Serving frontend from {}", dir.display());
        let index = dir.join("index.html");
        router = router.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(index)));
    }

    router
        .layer(CatchPanicLayer::custom(error::handle_panic))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors_layer(config))
}
