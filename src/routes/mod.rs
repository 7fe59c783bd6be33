use axum::{
    http::StatusCode,
    middleware as axum_middleware,
    routing::{delete, get},
    Json, Router,
};
use serde_json::{json, Value};
use std::{collections::HashMap, sync::Arc};
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::{
    db::RecommendationCache,
    middleware::identity,
    models::WizardState,
    services::{images::ImageAssigner, providers::RecommendationEngine},
};

pub mod quiz;
pub mod results;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Per-user wizard sessions, created on a user's first submission
    pub sessions: Arc<RwLock<HashMap<String, WizardState>>>,
    pub cache: Arc<dyn RecommendationCache>,
    pub engine: Arc<dyn RecommendationEngine>,
    pub images: Arc<ImageAssigner>,
}

impl AppState {
    pub fn new(
        cache: Arc<dyn RecommendationCache>,
        engine: Arc<dyn RecommendationEngine>,
        images: Arc<ImageAssigner>,
    ) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            cache,
            engine,
            images,
        }
    }
}

/// Creates the application router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", api_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(axum_middleware::from_fn(identity::request_id_middleware))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(identity::make_span_with_request_id),
                ),
        )
}

/// API routes under /api/v1
fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/quiz/:step", get(quiz::show_step).post(quiz::submit_step))
        .route("/quiz", delete(quiz::reset))
        .route("/results", get(results::results))
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
