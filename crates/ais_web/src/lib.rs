use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub mod delivery;
pub mod dispatch;
pub mod handlers;
pub mod state;

pub use delivery::{CallbackDelivery, DeliveryOutcome};
pub use state::AppState;

pub async fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/analyze", post(handlers::analyze_sentiment))
        .route("/generate-title", post(handlers::generate_title))
        .route("/summarize", post(handlers::summarize))
        .route("/generate-embedding", post(handlers::generate_embedding))
        .route("/health", get(handlers::health))
        .layer(cors)
        .with_state(Arc::new(state))
}

pub mod prelude {
    pub use crate::{create_app, AppState};
    pub use ais_core::{Error, InferenceRequest, Result, TaskPayload};
}
