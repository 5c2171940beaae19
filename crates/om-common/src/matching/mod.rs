//! Collaborator matching: scores community profiles against a project's needs.
//!
//! The final score is a weighted blend of five factors (see [`weights`]):
//! skills, interest alignment, availability, location and past-match experience.

pub mod availability;
pub mod engine;
pub mod interests;
pub mod location;
pub mod scoring;
pub mod skills;
pub mod weights;

pub use engine::{MatchingAnalytics, MatchingEngine, SkillFrequency, MATCH_THRESHOLD};
pub use scoring::{score_profile, MatchResult};
