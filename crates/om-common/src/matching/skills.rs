use serde::Serialize;

use crate::{ProficiencyLevel, ProfileSkill, RequiredSkill};

/// Skill score used when a project lists no skills at all.
pub const NO_REQUIREMENTS_SCORE: u8 = 75;

const MISSING_REQUIRED_SCORE: f64 = 10.0;
const EXCEED_BONUS_PER_LEVEL: f64 = 5.0;
const EXCEED_BONUS_CAP: f64 = 20.0;
const PARTIAL_CREDIT_SCALE: f64 = 80.0;
const PARTIAL_CREDIT_FLOOR: f64 = 30.0;
const VERIFIED_MULTIPLIER: f64 = 1.1;

/// Canonical skill name -> topic keywords that count as the same skill family.
///
/// A profile skill and a required skill are related when one of them mentions a
/// keyword of a family and one of them mentions the family's canonical name. Both
/// mentions may come from the same side, so a skill such as "Event Planning"
/// relates to every required skill.
pub static RELATED_SKILLS: &[(&str, &[&str])] = &[
    ("community organizing", &["organizing", "activism", "advocacy", "campaign", "mobilization"]),
    ("web development", &["programming", "coding", "javascript", "react", "frontend", "backend"]),
    ("graphic design", &["design", "visual", "branding", "illustration", "creative"]),
    ("event planning", &["events", "coordination", "logistics", "planning"]),
    ("grant writing", &["fundraising", "grants", "funding", "proposals"]),
    ("project management", &["management", "coordination", "planning", "leadership"]),
    ("social media", &["marketing", "communications", "outreach", "digital"]),
    ("mental health", &["counseling", "therapy", "wellness", "healing", "support"]),
];

/// Per required skill breakdown. `profile_level` is `None` when a required skill is missing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillMatch {
    pub skill: String,
    pub profile_level: Option<ProficiencyLevel>,
    pub required_level: ProficiencyLevel,
    pub score_contribution: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillMatchResult {
    pub overall_score: u8,
    pub matches: Vec<SkillMatch>,
}

/// Fuzzy skill relation: substring containment either way, or a shared family in
/// [`RELATED_SKILLS`]. An empty name is contained in everything.
pub fn is_skill_related(profile_skill: &str, required_skill: &str) -> bool {
    let profile = profile_skill.trim().to_lowercase();
    let required = required_skill.trim().to_lowercase();

    if profile.contains(&required) || required.contains(&profile) {
        return true;
    }

    RELATED_SKILLS.iter().any(|(canonical, keywords)| {
        let keyword_hit = keywords
            .iter()
            .any(|keyword| profile.contains(keyword) || required.contains(keyword));
        keyword_hit && (profile.contains(canonical) || required.contains(canonical))
    })
}

/// Exact (case-insensitive) name match wins over a fuzzy one anywhere in the list.
fn find_profile_skill<'a>(
    profile_skills: &'a [ProfileSkill],
    required: &RequiredSkill,
) -> Option<&'a ProfileSkill> {
    let wanted = required.skill.trim().to_lowercase();

    profile_skills
        .iter()
        .find(|s| s.skill.trim().to_lowercase() == wanted)
        .or_else(|| {
            profile_skills
                .iter()
                .find(|s| is_skill_related(&s.skill, &required.skill))
        })
}

/// Unweighted contribution of one matched skill, before the priority multiplier.
pub fn skill_contribution(profile_skill: &ProfileSkill, required_level: ProficiencyLevel) -> f64 {
    let have = f64::from(profile_skill.level.value());
    let need = f64::from(required_level.value());

    let base = if have >= need {
        100.0 + EXCEED_BONUS_CAP.min((have - need) * EXCEED_BONUS_PER_LEVEL)
    } else {
        PARTIAL_CREDIT_FLOOR.max(have / need * PARTIAL_CREDIT_SCALE)
    };

    if profile_skill.verified {
        base * VERIFIED_MULTIPLIER
    } else {
        base
    }
}

pub fn calculate_skill_match(
    profile_skills: &[ProfileSkill],
    required_skills: &[RequiredSkill],
) -> SkillMatchResult {
    if required_skills.is_empty() {
        return SkillMatchResult {
            overall_score: NO_REQUIREMENTS_SCORE,
            matches: vec![],
        };
    }

    let mut possible = 0.0;
    let mut achieved = 0.0;
    let mut matches = Vec::with_capacity(required_skills.len());

    for required in required_skills {
        let multiplier = required.priority.multiplier();

        match find_profile_skill(profile_skills, required) {
            Some(found) => {
                let contribution = skill_contribution(found, required.level);
                achieved += contribution * multiplier;
                possible += 100.0 * multiplier;
                matches.push(SkillMatch {
                    skill: required.skill.clone(),
                    profile_level: Some(found.level),
                    required_level: required.level,
                    score_contribution: contribution.round() as u32,
                });
            }
            None if required.is_required => {
                achieved += MISSING_REQUIRED_SCORE * multiplier;
                possible += 100.0 * multiplier;
                matches.push(SkillMatch {
                    skill: required.skill.clone(),
                    profile_level: None,
                    required_level: required.level,
                    score_contribution: 0,
                });
            }
            // optional and missing: neither rewarded nor counted
            None => {}
        }
    }

    if possible <= 0.0 {
        return SkillMatchResult {
            overall_score: NO_REQUIREMENTS_SCORE,
            matches,
        };
    }

    let overall = (achieved / possible * 100.0).round().min(100.0);

    SkillMatchResult {
        overall_score: overall as u8,
        matches,
    }
}
