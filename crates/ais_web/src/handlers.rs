use std::future::Future;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use ais_core::{Acknowledgment, InferenceRequest, TaskPayload};

use crate::dispatch;
use crate::AppState;

/// Run the computation inline and answer with its payload, or, when a
/// callback target is supplied, push the whole computation plus delivery
/// onto a background task and acknowledge immediately.
async fn defer_or_respond<F>(
    state: Arc<AppState>,
    callback_url: Option<String>,
    message: &'static str,
    compute: F,
) -> Response
where
    F: Future<Output = TaskPayload> + Send + 'static,
{
    match callback_url.filter(|url| !url.is_empty()) {
        Some(url) => {
            let delivery = state.delivery.clone();
            tokio::spawn(async move {
                let payload = compute.await;
                delivery.deliver(&url, &payload).await;
            });
            (
                StatusCode::ACCEPTED,
                Json(Acknowledgment::processing(message)),
            )
                .into_response()
        }
        None => Json(compute.await).into_response(),
    }
}

pub async fn analyze_sentiment(
    State(state): State<Arc<AppState>>,
    Json(request): Json<InferenceRequest>,
) -> Response {
    let pipeline = state.registry.sentiment.clone();
    let text = request.text;
    defer_or_respond(
        state,
        request.callback_url,
        "Sentiment analysis in progress",
        async move { TaskPayload::Sentiment(dispatch::sentiment(pipeline.as_ref(), &text).await) },
    )
    .await
}

pub async fn generate_title(
    State(state): State<Arc<AppState>>,
    Json(request): Json<InferenceRequest>,
) -> Response {
    let pipeline = state.registry.title.clone();
    let text = request.text;
    defer_or_respond(
        state,
        request.callback_url,
        "Title generation in progress",
        async move { TaskPayload::Title(dispatch::title(pipeline.as_ref(), &text).await) },
    )
    .await
}

pub async fn summarize(
    State(state): State<Arc<AppState>>,
    Json(request): Json<InferenceRequest>,
) -> Response {
    let pipeline = state.registry.summary.clone();
    let text = request.text;
    defer_or_respond(
        state,
        request.callback_url,
        "Summarization in progress",
        async move { TaskPayload::Summary(dispatch::summary(pipeline.as_ref(), &text).await) },
    )
    .await
}

pub async fn generate_embedding(
    State(state): State<Arc<AppState>>,
    Json(request): Json<InferenceRequest>,
) -> Response {
    // The only unmasked error: rejected before any pipeline or deferral.
    if let Err(e) = dispatch::ensure_embedding_input(&request.text) {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": e.to_string() })),
        )
            .into_response();
    }
    let pipeline = state.registry.embedding.clone();
    let text = request.text;
    defer_or_respond(
        state,
        request.callback_url,
        "Embedding generation in progress",
        async move { TaskPayload::Embedding(dispatch::embedding(pipeline.as_ref(), &text).await) },
    )
    .await
}

pub async fn health(State(state): State<Arc<AppState>>) -> Response {
    Json(json!({
        "status": "ok",
        "model": state.registry.sentiment.name(),
    }))
    .into_response()
}
