use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, info};

use super::scoring::{score_profile, MatchResult};
use crate::{profile_id, CandidateProfile, MatchOutcome, NewProfile, ProjectRequirements};

/// Matches scoring below this are never returned.
pub const MATCH_THRESHOLD: u8 = 60;

const TOP_SKILLS_LIMIT: usize = 10;
const MAX_OUTCOME_SCORE: u8 = 100;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillFrequency {
    pub skill: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchingAnalytics {
    pub total_profiles: usize,
    pub active_profiles: usize,
    pub top_skills: Vec<SkillFrequency>,
    pub average_skills_per_profile: f64,
    pub verification_rate: f64,
}

/// Owns the candidate pool. Profiles are kept in insertion order and never removed.
#[derive(Debug, Default)]
pub struct MatchingEngine {
    profiles: Vec<CandidateProfile>,
    index: HashMap<String, usize>,
}

impl MatchingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine pre-populated with the given profiles, each assigned a fresh id.
    pub fn with_profiles(profiles: impl IntoIterator<Item = NewProfile>) -> Self {
        let mut engine = Self::new();
        for data in profiles {
            engine.add_skill_profile(data);
        }
        engine
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn profiles(&self) -> &[CandidateProfile] {
        &self.profiles
    }

    pub fn profile(&self, id: &str) -> Option<&CandidateProfile> {
        self.index.get(id).map(|&pos| &self.profiles[pos])
    }

    /// Ranked matches for `requirements`: active profiles only, at or above
    /// [`MATCH_THRESHOLD`], best first. Equal scores keep pool order.
    pub fn find_matches(&self, requirements: &ProjectRequirements) -> Vec<MatchResult> {
        let mut matches: Vec<MatchResult> = self
            .profiles
            .iter()
            .filter(|profile| profile.is_active)
            .map(|profile| score_profile(profile, requirements))
            .filter(|result| result.match_score >= MATCH_THRESHOLD)
            .collect();

        matches.sort_by(|a, b| b.match_score.cmp(&a.match_score));

        debug!(
            project_id = requirements.id.as_deref().unwrap_or(""),
            pool = self.profiles.len(),
            matched = matches.len(),
            "collaborator matches computed"
        );

        matches
    }

    pub fn add_skill_profile(&mut self, data: NewProfile) -> CandidateProfile {
        let mut id = profile_id::generate();
        while self.index.contains_key(&id) {
            id = profile_id::generate();
        }

        let profile = CandidateProfile::from_new(id, data);
        self.index.insert(profile.id.clone(), self.profiles.len());
        self.profiles.push(profile.clone());

        info!(
            profile_id = %profile.id,
            skills = profile.skills.len(),
            active = profile.is_active,
            "skill profile added"
        );

        profile
    }

    /// Appends an outcome to a profile's history. Unknown ids are ignored.
    /// Scores above 100 are stored as 100.
    pub fn record_match_outcome(
        &mut self,
        profile_id: &str,
        project_id: &str,
        score: u8,
        joined: bool,
    ) {
        let score = score.min(MAX_OUTCOME_SCORE);

        let Some(&pos) = self.index.get(profile_id) else {
            debug!(profile_id, project_id, "match outcome for unknown profile ignored");
            return;
        };

        self.profiles[pos].match_history.push(MatchOutcome {
            project_id: project_id.to_string(),
            match_score: score,
            joined,
        });

        info!(profile_id, project_id, score, joined, "match outcome recorded");
    }

    pub fn matching_analytics(&self) -> MatchingAnalytics {
        let total_profiles = self.profiles.len();
        let active_profiles = self.profiles.iter().filter(|p| p.is_active).count();

        // first-seen order breaks frequency ties
        let mut top_skills: Vec<SkillFrequency> = Vec::new();
        let mut positions: HashMap<&str, usize> = HashMap::new();
        let mut skill_entries = 0usize;
        let mut verified_entries = 0usize;

        for skill in self.profiles.iter().flat_map(|p| p.skills.iter()) {
            skill_entries += 1;
            if skill.verified {
                verified_entries += 1;
            }

            match positions.get(skill.skill.as_str()) {
                Some(&pos) => top_skills[pos].count += 1,
                None => {
                    positions.insert(skill.skill.as_str(), top_skills.len());
                    top_skills.push(SkillFrequency {
                        skill: skill.skill.clone(),
                        count: 1,
                    });
                }
            }
        }

        top_skills.sort_by(|a, b| b.count.cmp(&a.count));
        top_skills.truncate(TOP_SKILLS_LIMIT);

        let average_skills_per_profile = if total_profiles == 0 {
            0.0
        } else {
            skill_entries as f64 / total_profiles as f64
        };

        let verification_rate = if skill_entries == 0 {
            0.0
        } else {
            verified_entries as f64 / skill_entries as f64
        };

        MatchingAnalytics {
            total_profiles,
            active_profiles,
            top_skills,
            average_skills_per_profile,
            verification_rate,
        }
    }
}
