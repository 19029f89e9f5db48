use std::sync::Arc;

use axum::{
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;

use crate::catalog::Catalog;

pub mod pages;
pub mod recommendations;

/// Shared application state: the catalog built at startup.
///
/// The catalog is never written after startup, so handlers share it through
/// a plain `Arc` with no locking.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}

/// Creates the application router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Selection form and its result page
        .route("/", get(pages::index))
        .route("/recommend", post(pages::recommend))
        .nest("/api/v1", api_routes())
        .with_state(state)
}

/// JSON API under /api/v1
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/movies", get(recommendations::list_movies))
        .route("/recommendations", post(recommendations::recommend))
        .layer(CorsLayer::permissive())
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
