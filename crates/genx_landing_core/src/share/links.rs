//! Share-intent URL builders.
//!
//! # Invariants
//! - Builders are pure functions of `ProjectInfo`.
//! - Query values are percent-encoded; endpoint constants are never touched.

use crate::model::project::ProjectInfo;
use urlencoding::encode;

/// Primary X intent endpoint.
pub const X_INTENT_ENDPOINT: &str = "https://x.com/intent/post";
/// Legacy intent endpoint, used when the primary navigation is blocked.
pub const X_LEGACY_INTENT_ENDPOINT: &str = "https://twitter.com/intent/tweet";
/// LinkedIn offsite share endpoint.
pub const LINKEDIN_SHARE_ENDPOINT: &str = "https://www.linkedin.com/sharing/share-offsite/";
/// Reddit submission endpoint.
pub const REDDIT_SUBMIT_ENDPOINT: &str = "https://www.reddit.com/submit";

/// Social platform a link-based share targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SharePlatform {
    X,
    LinkedIn,
    Reddit,
}

impl SharePlatform {
    /// Stable string id used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::LinkedIn => "linkedin",
            Self::Reddit => "reddit",
        }
    }

    /// Primary share-intent URL for this platform.
    pub fn intent_url(self, project: &ProjectInfo) -> String {
        match self {
            Self::X => x_intent_url(X_INTENT_ENDPOINT, project),
            Self::LinkedIn => linkedin_share_url(project),
            Self::Reddit => reddit_submit_url(project),
        }
    }

    /// Secondary endpoint tried when the primary navigation is blocked.
    ///
    /// Only X has one (the legacy domain).
    pub fn fallback_intent_url(self, project: &ProjectInfo) -> Option<String> {
        match self {
            Self::X => Some(x_intent_url(X_LEGACY_INTENT_ENDPOINT, project)),
            Self::LinkedIn | Self::Reddit => None,
        }
    }

    /// Success notification text after the share surface opened.
    pub fn opened_message(self) -> &'static str {
        match self {
            Self::X => "Opened share composer.",
            Self::LinkedIn => "Opened LinkedIn share dialog.",
            Self::Reddit => "Opened Reddit submission page.",
        }
    }
}

/// Composer text for X: `<name> — <tagline>`.
pub fn x_share_text(project: &ProjectInfo) -> String {
    format!("{} — {}", project.name, project.tagline)
}

fn x_intent_url(endpoint: &str, project: &ProjectInfo) -> String {
    format!(
        "{endpoint}?text={}&url={}",
        encode(&x_share_text(project)),
        encode(&project.url)
    )
}

fn linkedin_share_url(project: &ProjectInfo) -> String {
    format!("{LINKEDIN_SHARE_ENDPOINT}?url={}", encode(&project.url))
}

fn reddit_submit_url(project: &ProjectInfo) -> String {
    format!(
        "{REDDIT_SUBMIT_ENDPOINT}?url={}&title={}",
        encode(&project.url),
        encode(&project.name)
    )
}
