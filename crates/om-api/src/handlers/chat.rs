use axum::Json;
use serde::Deserialize;
use tracing::info;

use om_common::chat::{self, ChatReply};

use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

pub async fn chat(Json(request): Json<ChatRequest>) -> Result<Json<ChatReply>, ApiError> {
    if request.message.trim().is_empty() {
        return Err(ApiError::BadRequest("message is required".into()));
    }

    let reply = chat::respond(&request.message);
    info!(intent = ?reply.intent, projects = reply.projects.len(), "chat reply");

    Ok(Json(reply))
}
