//! Identifiers for profiles and process runs.
//!
//! Both are ULIDs: 26 characters, URL-safe and time-ordered. Profile ids carry a
//! `profile-` prefix so they are recognisable in logs and payloads.

use once_cell::sync::Lazy;
use ulid::Ulid;

pub const PROFILE_PREFIX: &str = "profile-";

static RUN_ID: Lazy<String> = Lazy::new(|| Ulid::new().to_string());

/// Process-level run id, generated once at first access.
#[inline]
pub fn run_id() -> &'static str {
    &RUN_ID
}

/// A fresh profile id. Uniqueness within a collection is enforced by the engine.
#[inline]
pub fn generate() -> String {
    format!("{PROFILE_PREFIX}{}", Ulid::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_id_is_stable() {
        assert_eq!(run_id(), run_id());
        assert_eq!(run_id().len(), 26);
    }

    #[test]
    fn generated_ids_are_prefixed_and_unique() {
        let a = generate();
        let b = generate();
        assert_ne!(a, b);
        assert!(a.starts_with(PROFILE_PREFIX));
        assert_eq!(a.len(), PROFILE_PREFIX.len() + 26);
    }
}
