/// City part of a free-text location: text before the first comma, trimmed and lowercased.
fn city_of(location: &str) -> Option<String> {
    let city = location.split(',').next().unwrap_or_default().trim();
    if city.is_empty() {
        None
    } else {
        Some(city.to_lowercase())
    }
}

/// Remote-friendly projects match anyone; otherwise both cities must be known and equal.
pub fn check_location_match(
    profile_location: Option<&str>,
    project_location: Option<&str>,
    remote_ok: bool,
) -> bool {
    if remote_ok {
        return true;
    }

    match (
        profile_location.and_then(city_of),
        project_location.and_then(city_of),
    ) {
        (Some(profile_city), Some(project_city)) => profile_city == project_city,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_ok_always_matches() {
        assert!(check_location_match(None, None, true));
        assert!(check_location_match(Some("Oakland, CA"), Some("London, UK"), true));
        assert!(check_location_match(Some(""), Some(""), true));
    }

    #[test]
    fn compares_city_before_first_comma() {
        assert!(check_location_match(Some("Oakland, CA"), Some(" oakland ,California"), false));
        assert!(!check_location_match(Some("Oakland, CA"), Some("Berkeley, CA"), false));
    }

    #[test]
    fn missing_location_fails_when_onsite() {
        assert!(!check_location_match(None, Some("London, UK"), false));
        assert!(!check_location_match(Some("London"), Some("  "), false));
    }
}
