use axum::{extract::State, Json};
use serde_json::json;

use om_common::chat::CHAT_DOMAIN;

use crate::error::ApiError;
use crate::SharedState;

pub async fn health(State(state): State<SharedState>) -> Json<serde_json::Value> {
    let profiles = state.engine.read().await.len();

    Json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "domain": CHAT_DOMAIN,
        "version": env!("CARGO_PKG_VERSION"),
        "profiles": profiles,
        "features": {
            "projectCatalog": true,
            "campaigns": true,
            "chat": true,
            "collaboratorMatching": true,
            "matchingAnalytics": true,
        },
    }))
}

pub async fn livez() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn readyz(State(state): State<SharedState>) -> Result<Json<serde_json::Value>, ApiError> {
    if !state.readiness.load(std::sync::atomic::Ordering::SeqCst) {
        return Err(ApiError::ServiceUnavailable("shutting_down".into()));
    }

    Ok(Json(json!({
        "status": "ok",
        "application": env!("CARGO_PKG_NAME"),
    })))
}
