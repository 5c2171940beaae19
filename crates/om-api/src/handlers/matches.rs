use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use om_common::catalog;
use om_common::matching::{MatchResult, MatchingAnalytics};
use om_common::ProjectRequirements;

use crate::error::ApiError;
use crate::SharedState;

const MAX_MATCH_LIMIT: usize = 200;

#[derive(Debug, Default, Deserialize)]
pub struct MatchQuery {
    pub limit: Option<usize>,
}

impl MatchQuery {
    fn apply(&self, mut matches: Vec<MatchResult>) -> Vec<MatchResult> {
        if let Some(limit) = self.limit {
            matches.truncate(limit.clamp(1, MAX_MATCH_LIMIT));
        }
        matches
    }
}

pub async fn find_matches(
    State(state): State<SharedState>,
    Query(query): Query<MatchQuery>,
    Json(requirements): Json<ProjectRequirements>,
) -> Result<Json<Vec<MatchResult>>, ApiError> {
    let matches = state.engine.read().await.find_matches(&requirements);
    Ok(Json(query.apply(matches)))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollaboratorsResponse {
    pub project_id: String,
    pub total: usize,
    pub matches: Vec<MatchResult>,
}

pub async fn project_collaborators(
    State(state): State<SharedState>,
    Path(project_id): Path<String>,
    Query(query): Query<MatchQuery>,
) -> Result<Json<CollaboratorsResponse>, ApiError> {
    let requirements = catalog::find_project(&project_id)?.requirements();
    let matches = query.apply(state.engine.read().await.find_matches(&requirements));

    Ok(Json(CollaboratorsResponse {
        project_id,
        total: matches.len(),
        matches,
    }))
}

pub async fn analytics(State(state): State<SharedState>) -> Json<MatchingAnalytics> {
    Json(state.engine.read().await.matching_analytics())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_state;

    #[tokio::test]
    async fn unknown_project_is_not_found() {
        let result = project_collaborators(
            State(test_state()),
            Path("org_999".into()),
            Query(MatchQuery::default()),
        )
        .await;

        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn empty_requirements_rank_seeded_pool() {
        let Json(matches) = find_matches(
            State(test_state()),
            Query(MatchQuery { limit: Some(0) }),
            Json(ProjectRequirements::default()),
        )
        .await
        .unwrap();

        // limit is clamped to at least one
        assert_eq!(matches.len(), 1);
    }

    #[tokio::test]
    async fn analytics_cover_seeded_pool() {
        let Json(summary) = analytics(State(test_state())).await;

        assert_eq!(summary.total_profiles, 5);
        assert!(!summary.top_skills.is_empty());
    }
}
