use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use om_common::{CandidateProfile, NewProfile};

use crate::error::ApiError;
use crate::SharedState;

pub async fn create_profile(
    State(state): State<SharedState>,
    Json(data): Json<NewProfile>,
) -> Result<(StatusCode, Json<CandidateProfile>), ApiError> {
    if data.user_name.trim().is_empty() {
        return Err(ApiError::BadRequest("userName is required".into()));
    }

    let profile = state.engine.write().await.add_skill_profile(data);
    Ok((StatusCode::CREATED, Json(profile)))
}

pub async fn get_profile(
    State(state): State<SharedState>,
    Path(profile_id): Path<String>,
) -> Result<Json<CandidateProfile>, ApiError> {
    state
        .engine
        .read()
        .await
        .profile(&profile_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("profile {profile_id} not found")))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeRequest {
    pub project_id: String,
    pub match_score: i64,
    #[serde(default)]
    pub joined: bool,
}

pub async fn record_outcome(
    State(state): State<SharedState>,
    Path(profile_id): Path<String>,
    Json(request): Json<OutcomeRequest>,
) -> Result<StatusCode, ApiError> {
    let score = u8::try_from(request.match_score)
        .ok()
        .filter(|score| *score <= 100)
        .ok_or_else(|| ApiError::BadRequest("matchScore must be between 0 and 100".into()))?;

    state.engine.write().await.record_match_outcome(
        &profile_id,
        &request.project_id,
        score,
        request.joined,
    );

    Ok(StatusCode::NO_CONTENT)
}
