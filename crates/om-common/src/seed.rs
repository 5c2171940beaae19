//! Sample community members used to seed a fresh matching pool.

use crate::{NewProfile, ProficiencyLevel, ProfileSkill};

fn skill(name: &str, level: ProficiencyLevel, experience: &str, verified: bool) -> ProfileSkill {
    ProfileSkill {
        skill: name.to_string(),
        level,
        experience: experience.to_string(),
        verified,
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub fn community_profiles() -> Vec<NewProfile> {
    use ProficiencyLevel::{Advanced, Expert, Intermediate};

    vec![
        NewProfile {
            user_name: "Alex Rivera".into(),
            user_email: Some("alex.rivera@community.org".into()),
            skills: vec![
                skill(
                    "Community Organizing",
                    Expert,
                    "8 years organizing housing justice campaigns",
                    true,
                ),
                skill("Event Planning", Advanced, "5 years coordinating community events", true),
                skill("Grant Writing", Intermediate, "Secured $50K+ in community grants", false),
            ],
            interests: strings(&["Housing Justice", "Racial Equity", "Community Development"]),
            availability: "10-15 hours/week".into(),
            preferred_commitment: "3-6 months".into(),
            location: Some("Oakland, CA".into()),
            bio: Some(
                "Experienced community organizer passionate about housing justice and equitable development.".into(),
            ),
            is_active: true,
        },
        NewProfile {
            user_name: "Jordan Kim".into(),
            user_email: Some("jordan@techforgood.net".into()),
            skills: vec![
                skill("Web Development", Advanced, "6 years full-stack development", true),
                skill("UI/UX Design", Intermediate, "3 years designing community platforms", true),
                skill("Data Analysis", Advanced, "Analytics for 10+ social impact projects", false),
            ],
            interests: strings(&["Digital Equity", "Community Tech", "Data Justice"]),
            availability: "5-10 hours/week".into(),
            preferred_commitment: "2-4 months".into(),
            location: Some("Remote".into()),
            bio: Some(
                "Tech professional dedicated to building digital tools that serve community needs.".into(),
            ),
            is_active: true,
        },
        NewProfile {
            user_name: "Maya Patel".into(),
            user_email: Some("maya.patel@wellness.coop".into()),
            skills: vec![
                skill("Mental Health Counseling", Expert, "12 years trauma-informed therapy", true),
                skill(
                    "Workshop Facilitation",
                    Advanced,
                    "Led 100+ community healing circles",
                    true,
                ),
                skill(
                    "Curriculum Development",
                    Intermediate,
                    "Developed culturally responsive programs",
                    false,
                ),
            ],
            interests: strings(&["Mental Health", "Healing Justice", "Wellness Initiatives"]),
            availability: "8-12 hours/week".into(),
            preferred_commitment: "6+ months".into(),
            location: Some("Chicago, IL".into()),
            bio: Some(
                "Licensed therapist specializing in community-based mental health and healing justice.".into(),
            ),
            is_active: true,
        },
        NewProfile {
            user_name: "Carlos Mendoza".into(),
            user_email: Some("carlos.mendoza@cooperativa.mx".into()),
            skills: vec![
                skill(
                    "Financial Planning",
                    Advanced,
                    "7 years cooperative business development",
                    true,
                ),
                skill(
                    "Project Management",
                    Expert,
                    "Managed 20+ community infrastructure projects",
                    true,
                ),
                skill("Spanish Translation", Expert, "Native bilingual speaker", true),
            ],
            interests: strings(&[
                "Economic Justice",
                "Cooperative Development",
                "Immigrant Rights",
            ]),
            availability: "15-20 hours/week".into(),
            preferred_commitment: "6+ months".into(),
            location: Some("Phoenix, AZ".into()),
            bio: Some(
                "Cooperative development specialist focused on building community wealth and economic democracy.".into(),
            ),
            is_active: true,
        },
        NewProfile {
            user_name: "Zara Johnson".into(),
            user_email: Some("zara@artivism.collective".into()),
            skills: vec![
                skill("Graphic Design", Advanced, "5 years movement visual identity", true),
                skill("Social Media Strategy", Intermediate, "Grew campaign reach 300%", false),
                skill("Photography", Intermediate, "Documented 50+ community actions", false),
            ],
            interests: strings(&["Visual Storytelling", "Cultural Arts", "Movement Media"]),
            availability: "6-10 hours/week".into(),
            preferred_commitment: "2-6 months".into(),
            location: Some("Atlanta, GA".into()),
            bio: Some(
                "Visual artist and communications strategist amplifying community voices through design.".into(),
            ),
            is_active: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::MatchingEngine;
    use crate::{Priority, ProjectRequirements, RequiredSkill};

    #[test]
    fn seeds_five_active_profiles() {
        let profiles = community_profiles();
        assert_eq!(profiles.len(), 5);
        assert!(profiles.iter().all(|p| p.is_active && p.skills.len() == 3));
    }

    #[test]
    fn seeded_pool_finds_the_organizer_for_housing_work() {
        let engine = MatchingEngine::with_profiles(community_profiles());
        let requirements = ProjectRequirements {
            required_skills: vec![RequiredSkill {
                skill: "Community Organizing".into(),
                level: ProficiencyLevel::Advanced,
                priority: Priority::Critical,
                is_required: true,
            }],
            category: "Housing Justice".into(),
            description: "Tenant organizing against gentrification and displacement".into(),
            time_commitment: "10-12 hours/week".into(),
            location: Some("Oakland".into()),
            remote_ok: false,
            ..ProjectRequirements::default()
        };

        let matches = engine.find_matches(&requirements);

        assert_eq!(matches[0].profile.user_name, "Alex Rivera");
        assert!(matches[0].location_match);
    }
}
