//! Deploy configuration and override loading.
//!
//! # Responsibility
//! - Carry the deploy-time constants the landing page ships with.
//! - Apply optional JSON/environment overrides before validation.
//!
//! # Invariants
//! - A validated config has non-empty name/tagline and parseable
//!   `http`/`https` canonical and repository URLs.
//! - Validation runs on the normalized field values, so whitespace-only
//!   input is rejected as empty.

use crate::model::project::{normalize_text, PageLocation};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use url::Url;

/// Default product display name.
pub const DEFAULT_NAME: &str = "Genesis-X: GPU-Free LLM Injection";
/// Default one-line tagline.
pub const DEFAULT_TAGLINE: &str =
    "Instant, permanent LLM knowledge injection on CPU via analytic steering (framework + architecture).";
/// Default canonical page URL used when no network location is available.
pub const DEFAULT_CANONICAL_URL: &str = "https://gss1147.github.io/Genesis_X/";
/// Default source repository URL.
pub const DEFAULT_REPOSITORY_URL: &str = "https://github.com/gss1147/Genesis_X";
/// Default banner auto-hide delay in milliseconds.
pub const DEFAULT_NOTIFICATION_MS: u64 = 3000;
/// Default download-control re-arm delay in milliseconds.
pub const DEFAULT_REARM_DELAY_MS: u64 = 350;

/// Environment variable naming a JSON overrides file.
pub const CONFIG_FILE_ENV: &str = "GENX_CONFIG";
/// Environment variable carrying the current page address.
pub const PAGE_URL_ENV: &str = "GENX_PAGE_URL";

/// Deploy-time configuration for one landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageConfig {
    /// Product display name.
    pub name: String,
    /// One-line product tagline.
    pub tagline: String,
    /// Page URL used when the serving context is not a network protocol.
    pub canonical_url: String,
    /// Source repository URL.
    pub repository_url: String,
    /// Banner auto-hide delay in milliseconds.
    pub notification_ms: u64,
    /// Download-control re-arm delay in milliseconds.
    pub rearm_delay_ms: u64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self::genesis_x()
    }
}

impl PageConfig {
    /// Returns the Genesis-X deployment defaults.
    pub fn genesis_x() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            tagline: DEFAULT_TAGLINE.to_string(),
            canonical_url: DEFAULT_CANONICAL_URL.to_string(),
            repository_url: DEFAULT_REPOSITORY_URL.to_string(),
            notification_ms: DEFAULT_NOTIFICATION_MS,
            rearm_delay_ms: DEFAULT_REARM_DELAY_MS,
        }
    }

    /// Validates declaration-level config invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_text("name", &self.name)?;
        require_text("tagline", &self.tagline)?;
        require_network_url("canonical_url", &self.canonical_url)?;
        require_network_url("repository_url", &self.repository_url)?;

        if self.notification_ms == 0 {
            return Err(ConfigError::ZeroDelay("notification_ms"));
        }
        if self.rearm_delay_ms == 0 {
            return Err(ConfigError::ZeroDelay("rearm_delay_ms"));
        }
        Ok(())
    }

    /// Returns a copy with the provided override fields applied.
    ///
    /// Fields absent from `overrides` keep their current value; the result
    /// still needs `validate()` before use.
    pub fn with_overrides(&self, overrides: &ConfigOverrides) -> Self {
        let mut config = self.clone();
        if let Some(name) = &overrides.name {
            config.name = name.clone();
        }
        if let Some(tagline) = &overrides.tagline {
            config.tagline = tagline.clone();
        }
        if let Some(canonical_url) = &overrides.canonical_url {
            config.canonical_url = canonical_url.clone();
        }
        if let Some(repository_url) = &overrides.repository_url {
            config.repository_url = repository_url.clone();
        }
        if let Some(notification_ms) = overrides.notification_ms {
            config.notification_ms = notification_ms;
        }
        if let Some(rearm_delay_ms) = overrides.rearm_delay_ms {
            config.rearm_delay_ms = rearm_delay_ms;
        }
        config
    }

    /// Loads the effective config: defaults, then `$GENX_CONFIG` overrides.
    ///
    /// # Errors
    /// - Returns an error when the overrides file cannot be read or parsed.
    /// - Returns an error when the merged config fails validation.
    pub fn load_from_env() -> Result<Self, ConfigError> {
        let mut config = Self::genesis_x();
        if let Ok(path) = std::env::var(CONFIG_FILE_ENV) {
            let raw = std::fs::read_to_string(path.trim()).map_err(|err| {
                ConfigError::OverridesUnreadable {
                    path: path.clone(),
                    detail: err.to_string(),
                }
            })?;
            let overrides = parse_overrides(&raw)?;
            config = config.with_overrides(&overrides);
        }
        config.validate()?;
        Ok(config)
    }
}

/// Partial config override set, typically loaded from a JSON file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigOverrides {
    pub name: Option<String>,
    pub tagline: Option<String>,
    pub canonical_url: Option<String>,
    pub repository_url: Option<String>,
    pub notification_ms: Option<u64>,
    pub rearm_delay_ms: Option<u64>,
}

/// Parses one JSON override document.
pub fn parse_overrides(raw: &str) -> Result<ConfigOverrides, ConfigError> {
    serde_json::from_str(raw).map_err(|err| ConfigError::OverridesInvalid(err.to_string()))
}

/// Reads the current page address from `$GENX_PAGE_URL`, when set.
pub fn page_location_from_env() -> Option<PageLocation> {
    let href = std::env::var(PAGE_URL_ENV).ok()?;
    let href = normalize_text(&href);
    if href.is_empty() {
        return None;
    }
    Some(PageLocation::new(href))
}

fn require_text(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if normalize_text(value).is_empty() {
        return Err(ConfigError::EmptyField(field));
    }
    Ok(())
}

fn require_network_url(field: &'static str, value: &str) -> Result<(), ConfigError> {
    require_text(field, value)?;
    let parsed = Url::parse(value.trim()).map_err(|_| ConfigError::InvalidUrl {
        field,
        value: value.to_string(),
    })?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(ConfigError::InvalidUrl {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Config loading and validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Required text field is empty after normalization.
    EmptyField(&'static str),
    /// URL field is unparseable or not `http`/`https`.
    InvalidUrl { field: &'static str, value: String },
    /// Delay field must be non-zero.
    ZeroDelay(&'static str),
    /// Overrides file named by `$GENX_CONFIG` cannot be read.
    OverridesUnreadable { path: String, detail: String },
    /// Overrides file is not a valid override document.
    OverridesInvalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField(field) => write!(f, "config field `{field}` must not be empty"),
            Self::InvalidUrl { field, value } => {
                write!(f, "config field `{field}` is not an http(s) URL: `{value}`")
            }
            Self::ZeroDelay(field) => write!(f, "config field `{field}` must be non-zero"),
            Self::OverridesUnreadable { path, detail } => {
                write!(f, "cannot read overrides file `{path}`: {detail}")
            }
            Self::OverridesInvalid(detail) => write!(f, "invalid overrides document: {detail}"),
        }
    }
}

impl Error for ConfigError {}
