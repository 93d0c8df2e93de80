//! Action identifiers and the handler registry.
//!
//! # Invariants
//! - Identifier strings are stable; parsing rejects anything else.
//! - The registry holds at most one handler per action.

use crate::model::project::ProjectInfo;
use crate::notify::notifier::Notifier;
use crate::packet::{ActionControl, PendingRearm};
use crate::platform::capability::{ArtifactSink, Clipboard, ShareSheet, UrlOpener};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Identifier string for the share-to-X action.
pub const ACTION_SHARE_X: &str = "share-x";
/// Identifier string for the share-to-LinkedIn action.
pub const ACTION_SHARE_LINKEDIN: &str = "share-linkedin";
/// Identifier string for the share-to-Reddit action.
pub const ACTION_SHARE_REDDIT: &str = "share-reddit";
/// Identifier string for the open-repository action.
pub const ACTION_OPEN_REPOSITORY: &str = "open-repository";
/// Identifier string for the copy-link action.
pub const ACTION_COPY_LINK: &str = "copy-link";
/// Identifier string for the download-packet action.
pub const ACTION_DOWNLOAD_PACKET: &str = "download-packet";

const SUPPORTED_ACTION_IDS: &[&str] = &[
    ACTION_SHARE_X,
    ACTION_SHARE_LINKEDIN,
    ACTION_SHARE_REDDIT,
    ACTION_OPEN_REPOSITORY,
    ACTION_COPY_LINK,
    ACTION_DOWNLOAD_PACKET,
];

/// Returns the recognized action identifier strings.
pub fn supported_action_ids() -> &'static [&'static str] {
    SUPPORTED_ACTION_IDS
}

/// The closed set of page actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ActionId {
    ShareX,
    ShareLinkedIn,
    ShareReddit,
    OpenRepository,
    CopyLink,
    DownloadPacket,
}

impl ActionId {
    /// Stable string id as carried on page controls.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ShareX => ACTION_SHARE_X,
            Self::ShareLinkedIn => ACTION_SHARE_LINKEDIN,
            Self::ShareReddit => ACTION_SHARE_REDDIT,
            Self::OpenRepository => ACTION_OPEN_REPOSITORY,
            Self::CopyLink => ACTION_COPY_LINK,
            Self::DownloadPacket => ACTION_DOWNLOAD_PACKET,
        }
    }
}

impl Display for ActionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses one action identifier as carried on a page control.
pub fn parse_action_id(value: &str) -> Result<ActionId, ActionIdError> {
    let normalized = value.trim();
    if normalized.is_empty() {
        return Err(ActionIdError::Empty);
    }
    match normalized {
        ACTION_SHARE_X => Ok(ActionId::ShareX),
        ACTION_SHARE_LINKEDIN => Ok(ActionId::ShareLinkedIn),
        ACTION_SHARE_REDDIT => Ok(ActionId::ShareReddit),
        ACTION_OPEN_REPOSITORY => Ok(ActionId::OpenRepository),
        ACTION_COPY_LINK => Ok(ActionId::CopyLink),
        ACTION_DOWNLOAD_PACKET => Ok(ActionId::DownloadPacket),
        other => Err(ActionIdError::Unknown(other.to_string())),
    }
}

/// Action identifier parse errors.
///
/// These indicate a markup/config mismatch, not a runtime failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionIdError {
    Empty,
    Unknown(String),
}

impl Display for ActionIdError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "action identifier must not be empty"),
            Self::Unknown(value) => write!(f, "action identifier is unknown: `{value}`"),
        }
    }
}

impl Error for ActionIdError {}

/// Everything one action invocation may touch.
pub struct ActionContext<'a> {
    pub project: &'a ProjectInfo,
    pub notifier: &'a mut Notifier,
    pub opener: &'a mut dyn UrlOpener,
    pub clipboard: &'a mut dyn Clipboard,
    pub sheet: &'a mut dyn ShareSheet,
    pub artifacts: &'a mut dyn ArtifactSink,
    /// The activated control, when the binding layer exposes one.
    pub control: Option<Arc<dyn ActionControl>>,
    pub rearm_delay: Duration,
    pub now: Instant,
    /// Out-slot: a control re-arm the invocation scheduled.
    pub pending_rearm: Option<PendingRearm>,
}

/// One registered page action.
pub trait ActionHandler {
    /// The identifier this handler serves.
    fn action_id(&self) -> ActionId;

    /// Performs the action's side effect and notifies the outcome.
    ///
    /// Must not panic; every failure ends in a notification.
    fn invoke(&self, cx: &mut ActionContext<'_>);
}

/// Handler registration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    DuplicateAction(ActionId),
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateAction(action) => {
                write!(f, "action already registered: {action}")
            }
        }
    }
}

impl Error for RegistryError {}

/// Identifier-to-handler registry.
#[derive(Default)]
pub struct ActionRegistry {
    handlers: BTreeMap<ActionId, Arc<dyn ActionHandler>>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one handler under its own action id.
    pub fn register(&mut self, handler: Arc<dyn ActionHandler>) -> Result<(), RegistryError> {
        let action = handler.action_id();
        if self.handlers.contains_key(&action) {
            return Err(RegistryError::DuplicateAction(action));
        }
        self.handlers.insert(action, handler);
        Ok(())
    }

    /// Returns the handler for one action.
    pub fn get(&self, action: ActionId) -> Option<Arc<dyn ActionHandler>> {
        self.handlers.get(&action).cloned()
    }

    /// Returns registered action ids in stable order.
    pub fn action_ids(&self) -> Vec<ActionId> {
        self.handlers.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{
        parse_action_id, ActionContext, ActionHandler, ActionId, ActionIdError, ActionRegistry,
        RegistryError,
    };
    use std::sync::Arc;

    struct NoopHandler {
        action: ActionId,
    }

    impl ActionHandler for NoopHandler {
        fn action_id(&self) -> ActionId {
            self.action
        }

        fn invoke(&self, _cx: &mut ActionContext<'_>) {}
    }

    #[test]
    fn parses_every_supported_identifier() {
        for raw in super::supported_action_ids() {
            let action = parse_action_id(raw).expect("supported id should parse");
            assert_eq!(action.as_str(), *raw);
        }
    }

    #[test]
    fn parse_trims_and_rejects_empty_or_unknown() {
        assert_eq!(
            parse_action_id("  copy-link  ").expect("trimmed id should parse"),
            ActionId::CopyLink
        );
        assert_eq!(
            parse_action_id("   ").expect_err("blank id must fail"),
            ActionIdError::Empty
        );
        assert_eq!(
            parse_action_id("share-myspace").expect_err("unknown id must fail"),
            ActionIdError::Unknown("share-myspace".to_string())
        );
    }

    #[test]
    fn registry_rejects_duplicate_registration() {
        let mut registry = ActionRegistry::new();
        registry
            .register(Arc::new(NoopHandler {
                action: ActionId::CopyLink,
            }))
            .expect("first registration should succeed");

        let duplicate = registry.register(Arc::new(NoopHandler {
            action: ActionId::CopyLink,
        }));
        assert_eq!(
            duplicate.expect_err("duplicate must fail"),
            RegistryError::DuplicateAction(ActionId::CopyLink)
        );
        assert_eq!(registry.len(), 1);
    }
}
