use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::catalog::{self, Campaign, ProjectFilter, ProjectListing, FEATURED_PROJECTS};

pub const CHAT_DOMAIN: &str = "organizing";

const ORGANIZING_KEYWORDS: &[&str] = &["project", "organizing", "activism", "campaign"];
const SUPPORT_KEYWORDS: &[&str] = &["help", "support", "resource"];

const SUPPORT_PROMPT: &str = "I can connect you with organizing projects and community resources! What specific support are you looking for?";
const GENERAL_PROMPT: &str = "I can help you find organizing projects, activism opportunities, and community resources! What issues matter most to you?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatIntent {
    Organizing,
    Support,
    General,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    pub response: String,
    pub domain: &'static str,
    pub intent: ChatIntent,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub projects: Vec<ProjectListing>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub campaigns: Vec<Campaign>,
    pub timestamp: DateTime<Utc>,
}

/// First matching keyword group wins; organizing takes precedence over support.
pub fn detect_intent(message: &str) -> ChatIntent {
    let lower = message.to_lowercase();
    let mentions = |keywords: &[&str]| keywords.iter().any(|k| lower.contains(k));

    if mentions(ORGANIZING_KEYWORDS) {
        ChatIntent::Organizing
    } else if mentions(SUPPORT_KEYWORDS) {
        ChatIntent::Support
    } else {
        ChatIntent::General
    }
}

fn organizing_text(projects: &[ProjectListing], campaigns: &[Campaign]) -> String {
    let mut text = String::from(
        "Here are real organizing opportunities from our community:\n\n**ACTIVE PROJECTS:**\n",
    );

    for project in projects {
        let _ = write!(
            text,
            "\n**{}**\n{}\n- {}\n- Contact: {}\n",
            project.title, project.description, project.time_commitment, project.contact_email
        );
    }

    if !campaigns.is_empty() {
        text.push_str("\n**URGENT CAMPAIGNS:**\n");
        for campaign in campaigns {
            let _ = write!(
                text,
                "\n**{}**\n{}\n- Status: {}\n- Contact: {}\n",
                campaign.title, campaign.description, campaign.current_phase, campaign.contact_info
            );
        }
    }

    text.push_str("\nThese are real community needs. Every contribution matters!");
    text
}

pub fn respond(message: &str) -> ChatReply {
    respond_at(message, Utc::now())
}

pub fn respond_at(message: &str, now: DateTime<Utc>) -> ChatReply {
    let intent = detect_intent(message);

    let (response, projects, campaigns) = match intent {
        ChatIntent::Organizing => {
            let projects: Vec<ProjectListing> = catalog::list_projects(&ProjectFilter::default())
                .into_iter()
                .take(FEATURED_PROJECTS)
                .cloned()
                .collect();
            let campaigns = catalog::featured_campaigns().to_vec();
            (organizing_text(&projects, &campaigns), projects, campaigns)
        }
        ChatIntent::Support => (SUPPORT_PROMPT.to_string(), vec![], vec![]),
        ChatIntent::General => (GENERAL_PROMPT.to_string(), vec![], vec![]),
    };

    ChatReply {
        response,
        domain: CHAT_DOMAIN,
        intent,
        projects,
        campaigns,
        timestamp: now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_intents_case_insensitively() {
        assert_eq!(detect_intent("Any ACTIVISM near me?"), ChatIntent::Organizing);
        assert_eq!(detect_intent("I need help with rent"), ChatIntent::Support);
        assert_eq!(detect_intent("hello there"), ChatIntent::General);
        // organizing wins when both groups appear
        assert_eq!(detect_intent("support a campaign"), ChatIntent::Organizing);
    }

    #[test]
    fn organizing_reply_lists_projects_and_campaigns() {
        let reply = respond("show me organizing projects");

        assert_eq!(reply.domain, "organizing");
        assert_eq!(reply.projects.len(), 3);
        assert_eq!(reply.campaigns.len(), 2);
        assert!(reply.response.contains("**ACTIVE PROJECTS:**"));
        assert!(reply.response.contains("Black Trans Housing Support Network"));
        assert!(reply.response.contains("**URGENT CAMPAIGNS:**"));
        assert!(reply.response.contains("Status: escalating"));
    }

    #[test]
    fn other_replies_are_prompts_without_listings() {
        let support = respond("where can I find a resource");
        assert_eq!(support.intent, ChatIntent::Support);
        assert!(support.projects.is_empty());
        assert!(support.response.contains("specific support"));

        let general = respond("hi");
        assert_eq!(general.intent, ChatIntent::General);
        assert!(general.response.contains("What issues matter most"));
    }
}
