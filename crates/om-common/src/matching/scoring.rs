use serde::Serialize;

use super::{
    availability::check_availability_match,
    interests::calculate_interest_alignment,
    location::check_location_match,
    skills::{calculate_skill_match, SkillMatch, SkillMatchResult},
    weights::{Weights, MATCH_WEIGHTS},
};
use crate::{CandidateProfile, MatchOutcome, ProjectRequirements};

/// Experience bonus for someone who has never been matched.
pub const NO_HISTORY_BONUS: u8 = 50;

const MAX_REASONS: usize = 3;
const STRONG_SKILL_CONTRIBUTION: u32 = 90;
const STRONG_INTEREST_ALIGNMENT: u8 = 80;
const CONFIDENT_SKILL_SCORE: u8 = 80;
const CONFIDENT_INTEREST_ALIGNMENT: u8 = 70;
const CONFIDENT_BIO_CHARS: usize = 50;
const ENGAGED_BIO_CHARS: usize = 100;

/// One profile scored against one set of requirements. Computed on demand, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub profile: CandidateProfile,
    pub match_score: u8,
    pub skill_matches: Vec<SkillMatch>,
    pub interest_alignment: u8,
    pub availability_match: bool,
    pub location_match: bool,
    pub confidence_score: u8,
    pub recommendation_reasons: Vec<String>,
}

/// Raw factor values before weighting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorScores {
    pub skills: u8,
    pub interests: u8,
    pub availability: bool,
    pub location: bool,
    pub experience: u8,
}

impl FactorScores {
    pub fn weighted_total(&self, weights: &Weights) -> u8 {
        let availability = if self.availability { 100.0 } else { 50.0 };
        let location = if self.location { 100.0 } else { 60.0 };

        let total = f64::from(self.skills) * weights.skills
            + f64::from(self.interests) * weights.interests
            + availability * weights.availability
            + location * weights.location
            + f64::from(self.experience) * weights.experience;

        total.round().clamp(0.0, 100.0) as u8
    }
}

/// Past-success signal: half from the join rate, half from the average historical score.
pub fn calculate_experience_bonus(history: &[MatchOutcome]) -> u8 {
    if history.is_empty() {
        return NO_HISTORY_BONUS;
    }

    let total = history.len() as f64;
    let joined = history.iter().filter(|h| h.joined).count() as f64;
    let average = history
        .iter()
        .map(|h| f64::from(h.match_score))
        .sum::<f64>()
        / total;

    (joined / total * 50.0 + average * 0.5)
        .round()
        .clamp(0.0, 100.0) as u8
}

fn bio_chars(profile: &CandidateProfile) -> usize {
    profile
        .bio
        .as_deref()
        .map(|bio| bio.chars().count())
        .unwrap_or(0)
}

pub fn calculate_confidence_score(
    skill_match: &SkillMatchResult,
    interest_alignment: u8,
    profile: &CandidateProfile,
) -> u8 {
    let mut confidence = 50.0;

    if !profile.skills.is_empty() {
        confidence +=
            profile.verified_skill_count() as f64 / profile.skills.len() as f64 * 20.0;
    }

    if skill_match.overall_score >= CONFIDENT_SKILL_SCORE {
        confidence += 15.0;
    }

    if interest_alignment >= CONFIDENT_INTEREST_ALIGNMENT {
        confidence += 10.0;
    }

    if profile.is_active && bio_chars(profile) > CONFIDENT_BIO_CHARS {
        confidence += 5.0;
    }

    f64::min(100.0, confidence).round() as u8
}

/// Up to three explanations, taken in a fixed order of precedence.
pub fn generate_recommendation_reasons(
    skill_match: &SkillMatchResult,
    interest_alignment: u8,
    availability_match: bool,
    location_match: bool,
    profile: &CandidateProfile,
) -> Vec<String> {
    let mut reasons = Vec::new();

    if let Some(strong) = skill_match
        .matches
        .iter()
        .find(|m| m.score_contribution >= STRONG_SKILL_CONTRIBUTION)
    {
        reasons.push(format!("Expert-level match in {}", strong.skill));
    }

    let verified = profile.verified_skill_count();
    if verified >= 2 {
        reasons.push(format!("{verified} verified skills"));
    }

    if interest_alignment >= STRONG_INTEREST_ALIGNMENT {
        reasons.push("Strong passion alignment with project goals".to_string());
    }

    if profile
        .skills
        .iter()
        .any(|s| s.experience.to_lowercase().contains("years"))
    {
        reasons.push("Extensive hands-on experience".to_string());
    }

    if availability_match {
        reasons.push("Schedule availability matches project needs".to_string());
    }

    if location_match {
        reasons.push("Local community member".to_string());
    }

    if bio_chars(profile) > ENGAGED_BIO_CHARS {
        reasons.push("Active and engaged community member".to_string());
    }

    reasons.truncate(MAX_REASONS);
    reasons
}

/// Full scoring of one profile. Deterministic and side-effect free.
pub fn score_profile(
    profile: &CandidateProfile,
    requirements: &ProjectRequirements,
) -> MatchResult {
    let skill_match = calculate_skill_match(&profile.skills, &requirements.required_skills);
    let interest_alignment = calculate_interest_alignment(
        &profile.interests,
        &requirements.category,
        &requirements.description,
    );
    let availability_match =
        check_availability_match(&profile.availability, &requirements.time_commitment);
    let location_match = check_location_match(
        profile.location.as_deref(),
        requirements.location.as_deref(),
        requirements.remote_ok,
    );

    let factors = FactorScores {
        skills: skill_match.overall_score,
        interests: interest_alignment,
        availability: availability_match,
        location: location_match,
        experience: calculate_experience_bonus(&profile.match_history),
    };
    let match_score = factors.weighted_total(&MATCH_WEIGHTS);

    let confidence_score = calculate_confidence_score(&skill_match, interest_alignment, profile);
    let recommendation_reasons = generate_recommendation_reasons(
        &skill_match,
        interest_alignment,
        availability_match,
        location_match,
        profile,
    );

    MatchResult {
        profile: profile.clone(),
        match_score,
        skill_matches: skill_match.matches,
        interest_alignment,
        availability_match,
        location_match,
        confidence_score,
        recommendation_reasons,
    }
}
