//! Capability contracts consumed by action handlers.
//!
//! # Responsibility
//! - Define one trait per platform capability, each with semantic errors.
//! - Provide the blocked-navigation fallback chain as a helper.
//!
//! # Invariants
//! - `safe_navigate` never propagates an error to its caller.
//! - Unsupported capabilities report themselves instead of failing calls.

use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Outbound navigation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// Opening a new browsing context was refused (popup-blocker analog).
    Blocked(String),
    /// Redirecting the current context failed.
    RedirectFailed(String),
}

impl Display for NavigationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blocked(detail) => write!(f, "new browsing context blocked: {detail}"),
            Self::RedirectFailed(detail) => write!(f, "current-context redirect failed: {detail}"),
        }
    }
}

impl Error for NavigationError {}

/// Opens URLs in a browsing context.
///
/// Implementations must detach the opened context from the caller: the new
/// context gets no handle back to this process (reverse-tab-nabbing guard).
pub trait UrlOpener {
    /// Opens `url` in a new, detached browsing context.
    fn open_new(&mut self, url: &str) -> Result<(), NavigationError>;

    /// Navigates the current context to `url`.
    ///
    /// Fallback path used when `open_new` reports a block.
    fn redirect_current(&mut self, url: &str) -> Result<(), NavigationError>;
}

/// Navigates to `url`, falling back to the current context when blocked.
///
/// Returns whether any navigation succeeded. Performs at most one fallback
/// attempt and never propagates an error.
pub fn safe_navigate(opener: &mut dyn UrlOpener, url: &str) -> bool {
    let target = url.trim();
    match opener.open_new(target) {
        Ok(()) => true,
        Err(open_err) => {
            info!("event=navigation_fallback module=platform status=blocked detail={open_err}");
            match opener.redirect_current(target) {
                Ok(()) => true,
                Err(redirect_err) => {
                    info!(
                        "event=navigation_failed module=platform status=error detail={redirect_err}"
                    );
                    false
                }
            }
        }
    }
}

/// Clipboard write errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// No clipboard-write capability in the current context.
    Unavailable,
    /// The platform accepted the call but the write failed.
    WriteFailed(String),
}

impl Display for ClipboardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable => write!(f, "clipboard write is unavailable in this context"),
            Self::WriteFailed(detail) => write!(f, "clipboard write failed: {detail}"),
        }
    }
}

impl Error for ClipboardError {}

/// Writes text to the system clipboard.
pub trait Clipboard {
    /// Returns whether this context is trusted and can write the clipboard.
    ///
    /// Callers treat `false` as an expected branch and fall back to
    /// manual-copy guidance.
    fn supports_write(&self) -> bool;

    /// Writes `text` to the clipboard.
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Payload for one native share-sheet invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRequest {
    pub title: String,
    pub text: String,
    pub url: String,
}

/// Native share errors. Dismissal is an expected, silent outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareSheetError {
    /// The host exposes no share sheet.
    Unsupported,
    /// The user dismissed the sheet without sharing.
    Dismissed,
    /// The share invocation itself failed.
    Failed(String),
}

impl Display for ShareSheetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unsupported => write!(f, "native share sheet is unsupported"),
            Self::Dismissed => write!(f, "share sheet dismissed"),
            Self::Failed(detail) => write!(f, "share sheet invocation failed: {detail}"),
        }
    }
}

impl Error for ShareSheetError {}

/// Invokes the host's native share sheet.
pub trait ShareSheet {
    /// Returns whether a native share sheet exists on this host.
    fn is_supported(&self) -> bool;

    /// Presents the sheet with the given payload.
    fn present(&mut self, request: &ShareRequest) -> Result<(), ShareSheetError>;
}

/// Artifact persistence errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactError {
    /// Filename is empty or tries to escape the sink directory.
    InvalidFilename(String),
    /// The artifact could not be written.
    SaveFailed(String),
}

impl Display for ArtifactError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFilename(name) => write!(f, "invalid artifact filename: `{name}`"),
            Self::SaveFailed(detail) => write!(f, "artifact save failed: {detail}"),
        }
    }
}

impl Error for ArtifactError {}

/// Persists generated artifacts (the anchor-download analog).
pub trait ArtifactSink {
    /// Saves `contents` under `filename`, returning the final location.
    fn save(&mut self, filename: &str, contents: &[u8]) -> Result<PathBuf, ArtifactError>;
}

/// Logs a capability snapshot at startup; diagnostics only.
pub fn log_capability_snapshot(clipboard: &dyn Clipboard, sheet: &dyn ShareSheet) {
    debug!(
        "event=capability_snapshot module=platform clipboard={} share_sheet={}",
        clipboard.supports_write(),
        sheet.is_supported()
    );
}
