//! Project record and share-URL resolution.
//!
//! # Responsibility
//! - Normalize deploy-config text fields into the canonical project record.
//! - Decide which URL share actions use for the current serving context.
//!
//! # Invariants
//! - All `ProjectInfo` fields are trimmed and free of interior whitespace runs.
//! - `url` prefers a network-served page location over the canonical URL.
//!
//! # See also
//! - docs/architecture/interaction-model.md

use crate::config::PageConfig;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use url::Url;

static WHITESPACE_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Collapses interior whitespace runs to single spaces and trims the ends.
///
/// Absent values are handled by callers passing an empty string; the result
/// for those stays empty.
pub fn normalize_text(value: &str) -> String {
    WHITESPACE_RUN_RE.replace_all(value.trim(), " ").into_owned()
}

/// Address under which the page/process is currently being served, when known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLocation {
    /// Full current address, e.g. `https://gss1147.github.io/Genesis_X/`.
    pub href: String,
}

impl PageLocation {
    pub fn new(href: impl Into<String>) -> Self {
        Self { href: href.into() }
    }

    /// Returns the lowercase URL scheme, when `href` parses as an absolute URL.
    pub fn scheme(&self) -> Option<String> {
        Url::parse(self.href.trim())
            .ok()
            .map(|url| url.scheme().to_ascii_lowercase())
    }

    /// Returns whether this location is served over a network protocol.
    ///
    /// Only `http` and `https` qualify; `file`, `about` and unparseable
    /// addresses do not.
    pub fn is_network(&self) -> bool {
        matches!(self.scheme().as_deref(), Some("http") | Some("https"))
    }
}

/// Immutable project record backing every action handler.
///
/// Resolved once at dispatcher construction and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectInfo {
    /// Product display name.
    pub name: String,
    /// One-line product tagline.
    pub tagline: String,
    /// URL share actions point at; see [`ProjectInfo::resolve`].
    pub url: String,
    /// Source repository URL for the open-repository action.
    pub repository_url: String,
}

impl ProjectInfo {
    /// Resolves the project record from deploy config and serving context.
    ///
    /// URL policy: a location served over `http`/`https` wins; anything else
    /// (local file, unknown context) falls back to the canonical URL. This
    /// step cannot fail for a validated `PageConfig`.
    pub fn resolve(config: &PageConfig, location: Option<&PageLocation>) -> Self {
        let url = match location {
            Some(location) if location.is_network() => {
                let href = normalize_text(&location.href);
                if href.is_empty() {
                    normalize_text(&config.canonical_url)
                } else {
                    href
                }
            }
            _ => normalize_text(&config.canonical_url),
        };

        Self {
            name: normalize_text(&config.name),
            tagline: normalize_text(&config.tagline),
            url,
            repository_url: normalize_text(&config.repository_url),
        }
    }
}
