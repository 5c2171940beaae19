use axum::{extract::Query, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;

use om_common::catalog::{
    self, Campaign, ProjectFilter, ProjectListing, FEATURED_CAMPAIGNS, PROJECT_CATEGORIES,
};
use om_common::ProficiencyLevel;

const NEXT_STEPS: &[&str] = &[
    "Connect with project organizers",
    "Join community meetings",
    "Start with volunteer roles",
    "Build organizing skills through practice",
];

#[derive(Debug, Serialize)]
pub struct ProjectListResponse {
    pub projects: Vec<ProjectListing>,
    pub total: usize,
    pub categories: &'static [&'static str],
    pub message: String,
}

pub async fn list_projects(Query(filter): Query<ProjectFilter>) -> Json<ProjectListResponse> {
    let projects: Vec<ProjectListing> = catalog::list_projects(&filter)
        .into_iter()
        .cloned()
        .collect();

    Json(ProjectListResponse {
        total: projects.len(),
        message: format!(
            "Found {} real community organizing projects",
            projects.len()
        ),
        projects,
        categories: PROJECT_CATEGORIES,
    })
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecommendationRequest {
    pub user_id: Option<String>,
    pub interests: Vec<String>,
    pub skill_level: Option<ProficiencyLevel>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponse {
    pub projects: Vec<ProjectListing>,
    pub campaigns: Vec<Campaign>,
    pub message: String,
    pub next_steps: &'static [&'static str],
}

pub async fn recommended_projects(
    Json(request): Json<RecommendationRequest>,
) -> Json<RecommendationResponse> {
    let skill_level = request.skill_level.unwrap_or(ProficiencyLevel::Beginner);

    debug!(
        user_id = request.user_id.as_deref().unwrap_or(""),
        interests = request.interests.len(),
        skill_level = skill_level.as_str(),
        "recommending projects"
    );

    let projects: Vec<ProjectListing> = catalog::recommended_projects(skill_level)
        .into_iter()
        .cloned()
        .collect();

    Json(RecommendationResponse {
        message: format!(
            "Found {} real organizing opportunities from our database!",
            projects.len()
        ),
        projects,
        campaigns: catalog::list_campaigns()
            .iter()
            .take(FEATURED_CAMPAIGNS)
            .cloned()
            .collect(),
        next_steps: NEXT_STEPS,
    })
}

pub async fn list_campaigns() -> Json<Vec<Campaign>> {
    Json(catalog::list_campaigns().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use om_common::Priority;

    #[tokio::test]
    async fn lists_all_projects_with_categories() {
        let Json(body) = list_projects(Query(ProjectFilter::default())).await;

        assert_eq!(body.total, 3);
        assert_eq!(body.categories.len(), 5);
        assert_eq!(body.message, "Found 3 real community organizing projects");
    }

    #[tokio::test]
    async fn urgency_filter_narrows_listing() {
        let filter = ProjectFilter {
            category: None,
            urgency: Some(Priority::Critical),
        };
        let Json(body) = list_projects(Query(filter)).await;

        assert_eq!(body.total, 1);
        assert_eq!(body.projects[0].id, "org_002");
    }

    #[tokio::test]
    async fn recommendations_default_to_beginner() {
        let Json(body) = recommended_projects(Json(RecommendationRequest::default())).await;

        assert_eq!(body.projects.len(), 2);
        assert!(body
            .projects
            .iter()
            .all(|project| project.urgency != Priority::Critical));
        assert_eq!(body.campaigns.len(), 2);
        assert_eq!(body.next_steps.len(), 4);
    }
}
