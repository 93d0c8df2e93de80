//! Built-in handlers for the six page actions.
//!
//! # Responsibility
//! - Implement each action as one direct call into a platform capability
//!   plus an outcome notification.
//!
//! # Invariants
//! - Capability absence is reported as guidance, never as a panic.
//! - Exactly one notification settles each invocation.

use crate::dispatch::registry::{ActionContext, ActionHandler, ActionId, ActionRegistry};
use crate::notify::notifier::Severity;
use crate::packet::download_packet;
use crate::platform::capability::safe_navigate;
use crate::share::links::SharePlatform;
use crate::share::strategy::{share_via, ShareContext};
use log::debug;
use std::sync::Arc;

/// Shown after the repository opened.
pub const REPOSITORY_OPENED_MESSAGE: &str = "Opened GitHub repository.";
/// Guidance when opening the repository was blocked.
pub const REPOSITORY_BLOCKED_MESSAGE: &str = "Popup blocked. Copy the link instead.";
/// Guidance when no clipboard capability exists in this context.
pub const CLIPBOARD_UNAVAILABLE_MESSAGE: &str =
    "Clipboard not available here. Copy the URL from the address bar.";
/// Shown after the page URL was copied.
pub const LINK_COPIED_MESSAGE: &str = "Link copied to clipboard.";
/// Guidance when the clipboard write failed.
pub const COPY_FAILED_MESSAGE: &str = "Could not copy. Copy the URL from the address bar.";

/// Share action: native sheet first, then the platform link.
pub struct ShareAction {
    platform: SharePlatform,
}

impl ShareAction {
    pub fn new(platform: SharePlatform) -> Self {
        Self { platform }
    }
}

impl ActionHandler for ShareAction {
    fn action_id(&self) -> ActionId {
        match self.platform {
            SharePlatform::X => ActionId::ShareX,
            SharePlatform::LinkedIn => ActionId::ShareLinkedIn,
            SharePlatform::Reddit => ActionId::ShareReddit,
        }
    }

    fn invoke(&self, cx: &mut ActionContext<'_>) {
        let mut share_cx = ShareContext {
            project: cx.project,
            notifier: &mut *cx.notifier,
            opener: &mut *cx.opener,
            sheet: &mut *cx.sheet,
            now: cx.now,
        };
        share_via(self.platform, &mut share_cx);
    }
}

/// Opens the source repository in a new browsing context.
pub struct OpenRepositoryAction;

impl ActionHandler for OpenRepositoryAction {
    fn action_id(&self) -> ActionId {
        ActionId::OpenRepository
    }

    fn invoke(&self, cx: &mut ActionContext<'_>) {
        if safe_navigate(&mut *cx.opener, &cx.project.repository_url) {
            cx.notifier
                .show_at(REPOSITORY_OPENED_MESSAGE, Severity::Info, cx.now);
        } else {
            cx.notifier
                .show_at(REPOSITORY_BLOCKED_MESSAGE, Severity::Warning, cx.now);
        }
    }
}

/// Copies the page URL to the clipboard.
pub struct CopyLinkAction;

impl ActionHandler for CopyLinkAction {
    fn action_id(&self) -> ActionId {
        ActionId::CopyLink
    }

    fn invoke(&self, cx: &mut ActionContext<'_>) {
        if !cx.clipboard.supports_write() {
            cx.notifier
                .show_at(CLIPBOARD_UNAVAILABLE_MESSAGE, Severity::Warning, cx.now);
            return;
        }
        match cx.clipboard.write_text(&cx.project.url) {
            Ok(()) => {
                cx.notifier
                    .show_at(LINK_COPIED_MESSAGE, Severity::Info, cx.now);
            }
            Err(err) => {
                debug!("event=copy_link module=dispatch status=error detail={err}");
                cx.notifier
                    .show_at(COPY_FAILED_MESSAGE, Severity::Warning, cx.now);
            }
        }
    }
}

/// Generates and saves the architecture packet.
pub struct DownloadPacketAction;

impl ActionHandler for DownloadPacketAction {
    fn action_id(&self) -> ActionId {
        ActionId::DownloadPacket
    }

    fn invoke(&self, cx: &mut ActionContext<'_>) {
        cx.pending_rearm = download_packet(
            cx.project,
            &mut *cx.artifacts,
            &mut *cx.notifier,
            cx.control.clone(),
            cx.rearm_delay,
            cx.now,
        );
    }
}

/// Builds the registry with all six built-in actions.
pub fn builtin_registry() -> ActionRegistry {
    let mut registry = ActionRegistry::new();
    let handlers: [Arc<dyn ActionHandler>; 6] = [
        Arc::new(ShareAction::new(SharePlatform::X)),
        Arc::new(ShareAction::new(SharePlatform::LinkedIn)),
        Arc::new(ShareAction::new(SharePlatform::Reddit)),
        Arc::new(OpenRepositoryAction),
        Arc::new(CopyLinkAction),
        Arc::new(DownloadPacketAction),
    ];
    for handler in handlers {
        registry
            .register(handler)
            .expect("built-in actions are distinct");
    }
    registry
}
