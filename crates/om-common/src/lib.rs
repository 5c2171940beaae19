pub mod catalog;
pub mod chat;
pub mod logging;
pub mod matching;
pub mod profile_id;
pub mod seed;

use serde::{Deserialize, Serialize};

/// Self-reported proficiency for a skill, ordered from least to most experienced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProficiencyLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl ProficiencyLevel {
    /// Ordinal used by the skill scorer (beginner=1 .. expert=4).
    pub fn value(self) -> u8 {
        match self {
            ProficiencyLevel::Beginner => 1,
            ProficiencyLevel::Intermediate => 2,
            ProficiencyLevel::Advanced => 3,
            ProficiencyLevel::Expert => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ProficiencyLevel::Beginner => "beginner",
            ProficiencyLevel::Intermediate => "intermediate",
            ProficiencyLevel::Advanced => "advanced",
            ProficiencyLevel::Expert => "expert",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    pub fn multiplier(self) -> f64 {
        match self {
            Priority::Low => 1.0,
            Priority::Medium => 1.5,
            Priority::High => 2.0,
            Priority::Critical => 3.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSkill {
    pub skill: String,
    pub level: ProficiencyLevel,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub verified: bool,
}

/// One past matching outcome. Entries are only ever appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchOutcome {
    pub project_id: String,
    pub match_score: u8,
    pub joined: bool,
}

/// A community member available for matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateProfile {
    pub id: String,
    pub user_name: String,
    pub user_email: Option<String>,
    pub skills: Vec<ProfileSkill>,
    pub interests: Vec<String>,
    pub availability: String,
    pub preferred_commitment: String,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub is_active: bool,
    pub match_history: Vec<MatchOutcome>,
}

impl CandidateProfile {
    pub fn from_new(id: String, data: NewProfile) -> Self {
        Self {
            id,
            user_name: data.user_name,
            user_email: data.user_email,
            skills: data.skills,
            interests: data.interests,
            availability: data.availability,
            preferred_commitment: data.preferred_commitment,
            location: data.location,
            bio: data.bio,
            is_active: data.is_active,
            match_history: Vec::new(),
        }
    }

    pub fn verified_skill_count(&self) -> usize {
        self.skills.iter().filter(|s| s.verified).count()
    }
}

/// Profile data as submitted by a caller, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProfile {
    pub user_name: String,
    #[serde(default)]
    pub user_email: Option<String>,
    #[serde(default)]
    pub skills: Vec<ProfileSkill>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub availability: String,
    #[serde(default)]
    pub preferred_commitment: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

const fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequiredSkill {
    pub skill: String,
    pub level: ProficiencyLevel,
    pub priority: Priority,
    #[serde(default)]
    pub is_required: bool,
}

/// Matching input for one project. Not stored by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectRequirements {
    pub id: Option<String>,
    pub required_skills: Vec<RequiredSkill>,
    pub category: String,
    pub description: String,
    pub timeline: Option<String>,
    pub time_commitment: String,
    pub location: Option<String>,
    pub remote_ok: bool,
}

impl Default for ProjectRequirements {
    fn default() -> Self {
        Self {
            id: None,
            required_skills: Vec::new(),
            category: String::new(),
            description: String::new(),
            timeline: None,
            time_commitment: String::new(),
            location: None,
            remote_ok: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proficiency_levels_are_ordered() {
        assert!(ProficiencyLevel::Expert > ProficiencyLevel::Advanced);
        assert!(ProficiencyLevel::Beginner < ProficiencyLevel::Intermediate);
        assert_eq!(ProficiencyLevel::Expert.value(), 4);
    }

    #[test]
    fn requirements_deserialize_with_remote_default() {
        let json = r#"{"category":"housing","requiredSkills":[{"skill":"Grant Writing","level":"advanced","priority":"critical","isRequired":true}]}"#;
        let req: ProjectRequirements = serde_json::from_str(json).unwrap();

        assert!(req.remote_ok);
        assert_eq!(req.required_skills[0].priority, Priority::Critical);
        assert_eq!(req.required_skills[0].level, ProficiencyLevel::Advanced);
        assert!(req.description.is_empty());
    }

    #[test]
    fn new_profile_defaults_to_active() {
        let data: NewProfile = serde_json::from_str(r#"{"userName":"Sam"}"#).unwrap();
        assert!(data.is_active);

        let profile = CandidateProfile::from_new("profile-x".into(), data);
        assert!(profile.match_history.is_empty());
        assert_eq!(profile.id, "profile-x");
    }
}
