//! Curated organizing projects and campaigns served when no live data source is configured.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::{Priority, ProficiencyLevel, ProjectRequirements, RequiredSkill};

pub const PROJECT_CATEGORIES: &[&str] = &[
    "mutual_aid",
    "advocacy",
    "community_building",
    "resource_development",
    "crisis_response",
];

const RECOMMENDED_LIMIT: usize = 3;
pub const FEATURED_PROJECTS: usize = 3;
pub const FEATURED_CAMPAIGNS: usize = 2;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum CatalogError {
    #[error("unknown project: {0}")]
    UnknownProject(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectListing {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub status: String,
    pub location: String,
    pub skills_needed: Vec<String>,
    pub time_commitment: String,
    pub participant_count: u32,
    pub impact: String,
    pub next_meeting: String,
    pub contact_email: String,
    pub website: Option<String>,
    pub urgency: Priority,
}

impl ProjectListing {
    pub fn is_open(&self) -> bool {
        matches!(self.status.as_str(), "active" | "recruiting")
    }

    /// Matching input derived from the listing. Every listed skill is a required,
    /// medium-priority, intermediate-level skill.
    pub fn requirements(&self) -> ProjectRequirements {
        let location = self.location.to_lowercase();
        let remote_ok = ["uk-wide", "hybrid", "remote"]
            .iter()
            .any(|marker| location.contains(marker));

        ProjectRequirements {
            id: Some(self.id.clone()),
            required_skills: self
                .skills_needed
                .iter()
                .map(|skill| RequiredSkill {
                    skill: humanize(skill),
                    level: ProficiencyLevel::Intermediate,
                    priority: Priority::Medium,
                    is_required: true,
                })
                .collect(),
            category: humanize(&self.category),
            description: self.description.clone(),
            timeline: None,
            time_commitment: self.time_commitment.clone(),
            location: Some(self.location.clone()),
            remote_ok,
        }
    }
}

/// `community_organizing` / `housing-justice` -> `community organizing` / `housing justice`.
fn humanize(slug: &str) -> String {
    slug.replace(['_', '-'], " ")
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub campaign_type: String,
    pub status: String,
    pub urgency: Priority,
    pub participant_count: u32,
    pub actions: Vec<String>,
    pub next_action: String,
    pub contact_info: String,
    pub target_date: String,
    pub current_phase: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProjectFilter {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub urgency: Option<Priority>,
}

impl ProjectFilter {
    pub fn accepts(&self, project: &ProjectListing) -> bool {
        if let Some(category) = self.category.as_deref().filter(|c| !c.is_empty()) {
            if project.category != category {
                return false;
            }
        }

        if let Some(urgency) = self.urgency {
            if project.urgency != urgency {
                return false;
            }
        }

        true
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

static PROJECTS: Lazy<Vec<ProjectListing>> = Lazy::new(|| {
    vec![
        ProjectListing {
            id: "org_001".into(),
            title: "Black Trans Housing Support Network".into(),
            description: "Supporting Black trans individuals with emergency housing, advocacy for housing rights, and creating safe community spaces.".into(),
            category: "housing-justice".into(),
            status: "active".into(),
            location: "London, Manchester, Birmingham".into(),
            skills_needed: strings(&[
                "housing_advocacy",
                "community_organizing",
                "peer_support",
                "fundraising",
            ]),
            time_commitment: "3-6 hours/week".into(),
            participant_count: 42,
            impact: "Secured emergency housing for 15+ community members, advocated for trans-inclusive housing policies".into(),
            next_meeting: "2025-08-28T19:00:00Z".into(),
            contact_email: "housing@blacktrans.org.uk".into(),
            website: Some("https://blacktrans.org.uk/housing".into()),
            urgency: Priority::High,
        },
        ProjectListing {
            id: "org_002".into(),
            title: "Community Mental Health Peer Support".into(),
            description: "Training Black queer community members in peer mental health support and crisis intervention, reducing dependence on inadequate systems.".into(),
            category: "mental-health".into(),
            status: "recruiting".into(),
            location: "UK-wide, hybrid".into(),
            skills_needed: strings(&[
                "peer_support",
                "mental_health_awareness",
                "community_outreach",
                "workshop_facilitation",
            ]),
            time_commitment: "2-4 hours/week".into(),
            participant_count: 28,
            impact: "Trained 35 peer supporters, supported 120+ community members".into(),
            next_meeting: "2025-08-26T18:30:00Z".into(),
            contact_email: "peers@blackqueermentalhealth.org".into(),
            website: Some("https://blackqueermentalhealth.org".into()),
            urgency: Priority::Critical,
        },
        ProjectListing {
            id: "org_003".into(),
            title: "Legal Rights Defense Coalition".into(),
            description: "Coordinating legal support for Black queer individuals facing discrimination, police harassment, and systemic injustice.".into(),
            category: "legal-advocacy".into(),
            status: "active".into(),
            location: "UK-wide".into(),
            skills_needed: strings(&[
                "legal_research",
                "case_documentation",
                "community_organizing",
                "digital_security",
            ]),
            time_commitment: "4-8 hours/week".into(),
            participant_count: 18,
            impact: "Supported 50+ legal cases, documented systemic discrimination patterns".into(),
            next_meeting: "2025-08-25T17:00:00Z".into(),
            contact_email: "legal@blkdefense.org.uk".into(),
            website: Some("https://blkdefense.org.uk".into()),
            urgency: Priority::High,
        },
    ]
});

static CAMPAIGNS: Lazy<Vec<Campaign>> = Lazy::new(|| {
    vec![
        Campaign {
            id: "camp_001".into(),
            title: "Stop Police Violence Against Black Trans People".into(),
            description: "Coordinated campaign to end police harassment and violence against Black trans individuals through policy advocacy, community protection, and accountability measures.".into(),
            campaign_type: "policy_advocacy".into(),
            status: "active".into(),
            urgency: Priority::Critical,
            participant_count: 234,
            actions: strings(&[
                "Document police interactions and harassment",
                "Lobby local councils for police accountability measures",
                "Organize community protection networks",
                "Support legal cases against police violence",
            ]),
            next_action: "Emergency community meeting this Thursday 7pm - Zoom link: organizers@stoppoliceviol.org".into(),
            contact_info: "organizers@stoppoliceviol.org".into(),
            target_date: "2025-12-01".into(),
            current_phase: "escalating".into(),
        },
        Campaign {
            id: "camp_002".into(),
            title: "Healthcare Justice for Black Queer Communities".into(),
            description: "Fighting for accessible, affirming healthcare by challenging NHS discrimination and building community health alternatives.".into(),
            campaign_type: "healthcare_advocacy".into(),
            status: "active".into(),
            urgency: Priority::High,
            participant_count: 156,
            actions: strings(&[
                "Document healthcare discrimination cases",
                "Train community health advocates",
                "Pressure NHS trusts for inclusive policies",
                "Build mutual aid health support networks",
            ]),
            next_action: "Healthcare advocacy training Saturday 2pm - register: health@blkqueerhealth.org".into(),
            contact_info: "health@blkqueerhealth.org".into(),
            target_date: "2025-10-15".into(),
            current_phase: "mobilizing".into(),
        },
    ]
});

pub fn list_projects(filter: &ProjectFilter) -> Vec<&'static ProjectListing> {
    PROJECTS.iter().filter(|p| filter.accepts(p)).collect()
}

pub fn find_project(id: &str) -> Result<&'static ProjectListing, CatalogError> {
    PROJECTS
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| CatalogError::UnknownProject(id.to_string()))
}

/// Open projects suited to the caller; beginners are not pointed at critical work.
pub fn recommended_projects(skill_level: ProficiencyLevel) -> Vec<&'static ProjectListing> {
    PROJECTS
        .iter()
        .filter(|p| !(skill_level == ProficiencyLevel::Beginner && p.urgency == Priority::Critical))
        .filter(|p| p.is_open())
        .take(RECOMMENDED_LIMIT)
        .collect()
}

pub fn list_campaigns() -> &'static [Campaign] {
    &CAMPAIGNS
}

pub fn featured_campaigns() -> &'static [Campaign] {
    &CAMPAIGNS[..FEATURED_CAMPAIGNS.min(CAMPAIGNS.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_by_category_and_urgency() {
        let housing = list_projects(&ProjectFilter {
            category: Some("housing-justice".into()),
            urgency: None,
        });
        assert_eq!(housing.len(), 1);
        assert_eq!(housing[0].id, "org_001");

        let high = list_projects(&ProjectFilter {
            category: None,
            urgency: Some(Priority::High),
        });
        assert_eq!(high.len(), 2);

        assert_eq!(list_projects(&ProjectFilter::default()).len(), 3);
    }

    #[test]
    fn beginners_skip_critical_projects() {
        let beginner = recommended_projects(ProficiencyLevel::Beginner);
        assert!(beginner.iter().all(|p| p.urgency != Priority::Critical));
        assert_eq!(beginner.len(), 2);

        let advanced = recommended_projects(ProficiencyLevel::Advanced);
        assert_eq!(advanced.len(), 3);
    }

    #[test]
    fn unknown_project_is_an_error() {
        assert_eq!(
            find_project("org_999"),
            Err(CatalogError::UnknownProject("org_999".into()))
        );
    }

    #[test]
    fn listing_converts_to_requirements() {
        let requirements = find_project("org_002").unwrap().requirements();

        assert!(requirements.remote_ok);
        assert_eq!(requirements.category, "mental health");
        assert_eq!(requirements.required_skills.len(), 4);
        assert_eq!(requirements.required_skills[0].skill, "peer support");

        let onsite = find_project("org_001").unwrap().requirements();
        assert!(!onsite.remote_ok);
    }

    #[test]
    fn featured_campaigns_are_capped() {
        assert_eq!(featured_campaigns().len(), 2);
        assert_eq!(list_campaigns()[0].id, "camp_001");
    }
}
