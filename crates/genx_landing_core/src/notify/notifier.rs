//! Banner notifier with superseding auto-hide.
//!
//! # Invariants
//! - At most one auto-hide is pending at any time.
//! - `show_at` always supersedes a pending hide; the superseded hide never
//!   fires.
//! - A missing banner makes every operation a safe no-op.

use log::debug;
use std::time::{Duration, Instant};

/// Severity of one user-visible notification.
///
/// The binding layer decides presentation (banner color, terminal styling);
/// the core only classifies intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Neutral status message.
    Info,
    /// Operation completed successfully.
    Success,
    /// Degraded outcome with guidance, normal operation continues.
    Warning,
    /// Internal defect surfaced to the user.
    Error,
}

impl Severity {
    /// Stable string id used in logs and terminal rendering.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// Presentation seam for the notification banner.
///
/// The page contract requires one banner element; a sink reporting
/// `is_available() == false` models that element being absent.
pub trait BannerSink {
    /// Returns whether a banner exists to render into.
    fn is_available(&self) -> bool {
        true
    }

    /// Replaces the banner content and makes it visible.
    fn display(&mut self, message: &str, severity: Severity);

    /// Hides the banner.
    fn hide(&mut self);
}

struct PendingHide {
    deadline: Instant,
}

/// Single-banner notifier owning the auto-hide timer state.
pub struct Notifier {
    sink: Box<dyn BannerSink>,
    delay: Duration,
    pending: Option<PendingHide>,
}

impl Notifier {
    /// Creates a notifier over one banner sink with a fixed auto-hide delay.
    pub fn new(sink: Box<dyn BannerSink>, delay: Duration) -> Self {
        Self {
            sink,
            delay,
            pending: None,
        }
    }

    /// Shows `message` and schedules its auto-hide at `now + delay`.
    ///
    /// A pending hide from an earlier message is cancelled first, so only
    /// the most recent message is ever visible and exactly one hide fires
    /// per settled message. No-op when the banner is absent.
    pub fn show_at(&mut self, message: &str, severity: Severity, now: Instant) {
        if !self.sink.is_available() {
            debug!("event=notify_skipped module=notify status=no_banner");
            return;
        }
        self.sink.display(message, severity);
        self.pending = Some(PendingHide {
            deadline: now + self.delay,
        });
    }

    /// Fires the pending hide when its deadline has elapsed.
    ///
    /// Returns whether a hide fired on this call.
    pub fn poll_at(&mut self, now: Instant) -> bool {
        match &self.pending {
            Some(pending) if pending.deadline <= now => {
                self.sink.hide();
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    /// Returns the pending auto-hide deadline, when one exists.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|pending| pending.deadline)
    }

    /// Returns the configured auto-hide delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}
