/// Interest alignment when a profile lists no interests.
pub const NO_INTERESTS_SCORE: u8 = 50;

const CATEGORY_OVERLAP_POINTS: u32 = 40;
const DESCRIPTION_MENTION_POINTS: u32 = 20;
const THEMATIC_KEYWORD_POINTS: u32 = 10;
const THEMATIC_CAP: u32 = 30;

/// Named interests and the project vocabulary that signals them.
pub static THEMATIC_KEYWORDS: &[(&str, &[&str])] = &[
    ("housing justice", &["housing", "tenant", "affordable", "gentrification", "displacement"]),
    ("mental health", &["wellness", "healing", "trauma", "therapy", "support"]),
    ("digital equity", &["technology", "digital", "internet", "access", "literacy"]),
    ("economic justice", &["economic", "wealth", "financial", "cooperative", "jobs"]),
    ("racial equity", &["racial", "justice", "equality", "discrimination", "bias"]),
    ("environmental justice", &["environment", "climate", "sustainability", "green", "pollution"]),
];

/// Bonus for a named interest whose theme shows up in the project text, capped per interest.
pub fn thematic_alignment(interest: &str, category: &str, description: &str) -> u32 {
    let interest = interest.trim().to_lowercase();
    let Some((_, keywords)) = THEMATIC_KEYWORDS
        .iter()
        .find(|(name, _)| *name == interest)
    else {
        return 0;
    };

    let combined = format!("{category} {description}").to_lowercase();
    let hits = keywords
        .iter()
        .filter(|keyword| combined.contains(*keyword))
        .count() as u32;

    (hits * THEMATIC_KEYWORD_POINTS).min(THEMATIC_CAP)
}

/// Overlap is a case-insensitive substring test in either direction, so an empty
/// category overlaps every interest.
pub fn calculate_interest_alignment(
    interests: &[String],
    category: &str,
    description: &str,
) -> u8 {
    if interests.is_empty() {
        return NO_INTERESTS_SCORE;
    }

    let category_lower = category.trim().to_lowercase();
    let description_lower = description.to_lowercase();
    let mut score = 0u32;

    for interest in interests {
        let interest_lower = interest.trim().to_lowercase();

        if category_lower.contains(&interest_lower) || interest_lower.contains(&category_lower) {
            score += CATEGORY_OVERLAP_POINTS;
        }

        if description_lower.contains(&interest_lower) {
            score += DESCRIPTION_MENTION_POINTS;
        }

        score += thematic_alignment(interest, category, description);
    }

    score.min(100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interests(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn no_interests_is_neutral() {
        assert_eq!(calculate_interest_alignment(&[], "housing", "anything"), 50);
    }

    #[test]
    fn category_and_description_overlap_score() {
        let score = calculate_interest_alignment(
            &interests(&["Community Development"]),
            "community development",
            "Long-running community development effort",
        );
        assert_eq!(score, 60);
    }

    #[test]
    fn thematic_keywords_are_capped_per_interest() {
        let bonus = thematic_alignment(
            "Housing Justice",
            "housing",
            "tenant organizing against gentrification and displacement",
        );
        assert_eq!(bonus, 30);

        let single = thematic_alignment("Digital Equity", "tech", "internet for all");
        assert_eq!(single, 10);

        assert_eq!(thematic_alignment("Cultural Arts", "housing", "tenant"), 0);
    }

    #[test]
    fn total_alignment_caps_at_one_hundred() {
        let score = calculate_interest_alignment(
            &interests(&["Housing Justice", "Racial Equity", "housing"]),
            "housing justice",
            "housing justice campaign on tenant displacement and racial discrimination",
        );
        assert_eq!(score, 100);
    }

    #[test]
    fn empty_category_overlaps_every_interest() {
        let score = calculate_interest_alignment(&interests(&["Cultural Arts"]), "", "");
        assert_eq!(score, 40);

        let organizer = interests(&["Housing Justice", "Racial Equity", "Community Development"]);
        assert_eq!(calculate_interest_alignment(&organizer, "", ""), 100);
    }
}
