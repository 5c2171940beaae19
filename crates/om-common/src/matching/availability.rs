use once_cell::sync::Lazy;
use regex::Regex;

static RE_HOURS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)-?(\d+)?").unwrap());

/// Share of the requested hours a volunteer must be able to give.
const COVERAGE_RATIO: f64 = 0.7;

/// Upper bound of the first `N` or `N-M` range in free text ("10-15 hours/week" -> 15).
///
/// Text without digits, or digits that do not fit a `u32`, yields 0.
pub fn extract_hours(text: &str) -> u32 {
    let Some(caps) = RE_HOURS.captures(text) else {
        return 0;
    };

    caps.get(2)
        .or_else(|| caps.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .unwrap_or(0)
}

pub fn check_availability_match(profile_availability: &str, required_commitment: &str) -> bool {
    let offered = f64::from(extract_hours(profile_availability));
    let needed = f64::from(extract_hours(required_commitment));

    offered >= needed * COVERAGE_RATIO
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_upper_bound_of_range() {
        assert_eq!(extract_hours("10-15 hours/week"), 15);
        assert_eq!(extract_hours("about 8 hours"), 8);
        assert_eq!(extract_hours("6+ months"), 6);
        assert_eq!(extract_hours("flexible"), 0);
    }

    #[test]
    fn overflowing_numbers_fall_back_to_zero() {
        assert_eq!(extract_hours("99999999999999999999 hours"), 0);
    }

    #[test]
    fn seventy_percent_coverage_is_enough() {
        assert!(check_availability_match("5-8 hours/week", "6-10 hours/week"));
        assert!(!check_availability_match("2-4 hours/week", "6-10 hours/week"));
        assert!(check_availability_match("", ""));
        assert!(check_availability_match("3 hours", "no fixed commitment"));
    }
}
