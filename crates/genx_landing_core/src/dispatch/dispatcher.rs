//! Per-page dispatcher instance.
//!
//! # Responsibility
//! - Resolve the project record once and route identifier strings to
//!   registered handlers.
//! - Drive the timed state: banner auto-hide and control re-arms.
//!
//! # Invariants
//! - Construction validates config; dispatch itself never fails.
//! - Every pending re-arm eventually fires, regardless of later dispatches.

use crate::config::{ConfigError, PageConfig};
use crate::dispatch::handlers::builtin_registry;
use crate::dispatch::registry::{parse_action_id, ActionContext, ActionId, ActionRegistry};
use crate::model::project::{PageLocation, ProjectInfo};
use crate::notify::notifier::{BannerSink, Notifier, Severity};
use crate::packet::{ActionControl, PendingRearm};
use crate::platform::capability::{
    log_capability_snapshot, ArtifactSink, Clipboard, ShareSheet, UrlOpener,
};
use log::{info, warn};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Shown when a control carries an unrecognized identifier.
pub const UNKNOWN_ACTION_MESSAGE: &str = "Unknown action.";
/// Shown once at startup.
pub const READY_MESSAGE: &str = "Ready.";

/// Capability handles one dispatcher instance runs over.
pub struct PlatformHandles {
    pub banner: Box<dyn BannerSink>,
    pub opener: Box<dyn UrlOpener>,
    pub clipboard: Box<dyn Clipboard>,
    pub sheet: Box<dyn ShareSheet>,
    pub artifacts: Box<dyn ArtifactSink>,
}

/// Result of one dispatch call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Exactly one handler ran.
    Handled(ActionId),
    /// The identifier was empty, unknown, or unregistered; an error
    /// notification was shown and nothing else happened.
    UnknownAction,
}

/// Routes page activations to action handlers.
pub struct Dispatcher {
    project: ProjectInfo,
    notifier: Notifier,
    opener: Box<dyn UrlOpener>,
    clipboard: Box<dyn Clipboard>,
    sheet: Box<dyn ShareSheet>,
    artifacts: Box<dyn ArtifactSink>,
    registry: ActionRegistry,
    rearm_delay: Duration,
    pending_rearms: Vec<PendingRearm>,
}

impl Dispatcher {
    /// Builds a dispatcher with the built-in action registry.
    ///
    /// # Errors
    /// - Returns the first `PageConfig::validate` failure; an invalid deploy
    ///   config never produces a partially working dispatcher.
    pub fn new(
        config: &PageConfig,
        location: Option<&PageLocation>,
        handles: PlatformHandles,
    ) -> Result<Self, ConfigError> {
        Self::with_registry(config, location, handles, builtin_registry())
    }

    /// Builds a dispatcher over a caller-provided registry.
    pub fn with_registry(
        config: &PageConfig,
        location: Option<&PageLocation>,
        handles: PlatformHandles,
        registry: ActionRegistry,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let project = ProjectInfo::resolve(config, location);
        log_capability_snapshot(handles.clipboard.as_ref(), handles.sheet.as_ref());
        info!(
            "event=dispatcher_init module=dispatch status=ok url={} actions={}",
            project.url,
            registry.len()
        );

        Ok(Self {
            project,
            notifier: Notifier::new(
                handles.banner,
                Duration::from_millis(config.notification_ms),
            ),
            opener: handles.opener,
            clipboard: handles.clipboard,
            sheet: handles.sheet,
            artifacts: handles.artifacts,
            registry,
            rearm_delay: Duration::from_millis(config.rearm_delay_ms),
            pending_rearms: Vec::new(),
        })
    }

    /// Resolved project record this dispatcher serves.
    pub fn project(&self) -> &ProjectInfo {
        &self.project
    }

    /// Shows the startup notification.
    pub fn announce_ready_at(&mut self, now: Instant) {
        self.notifier.show_at(READY_MESSAGE, Severity::Info, now);
    }

    /// Routes one activation to its handler.
    ///
    /// `control` is the activated page control, when the binding layer can
    /// expose one (used by download-packet's duplicate-activation guard).
    pub fn dispatch_at(
        &mut self,
        raw_identifier: &str,
        control: Option<Arc<dyn ActionControl>>,
        now: Instant,
    ) -> DispatchOutcome {
        let action = match parse_action_id(raw_identifier) {
            Ok(action) => action,
            Err(err) => {
                warn!("event=action_dispatch module=dispatch status=unknown detail={err}");
                self.notifier
                    .show_at(UNKNOWN_ACTION_MESSAGE, Severity::Error, now);
                return DispatchOutcome::UnknownAction;
            }
        };
        let Some(handler) = self.registry.get(action) else {
            warn!("event=action_dispatch module=dispatch status=unregistered action={action}");
            self.notifier
                .show_at(UNKNOWN_ACTION_MESSAGE, Severity::Error, now);
            return DispatchOutcome::UnknownAction;
        };

        let mut cx = ActionContext {
            project: &self.project,
            notifier: &mut self.notifier,
            opener: self.opener.as_mut(),
            clipboard: self.clipboard.as_mut(),
            sheet: self.sheet.as_mut(),
            artifacts: self.artifacts.as_mut(),
            control,
            rearm_delay: self.rearm_delay,
            now,
            pending_rearm: None,
        };
        handler.invoke(&mut cx);
        let scheduled = cx.pending_rearm;
        if let Some(rearm) = scheduled {
            self.pending_rearms.push(rearm);
        }

        info!("event=action_dispatch module=dispatch status=ok action={action}");
        DispatchOutcome::Handled(action)
    }

    /// Fires every timer whose deadline has elapsed.
    pub fn poll_timers_at(&mut self, now: Instant) {
        self.notifier.poll_at(now);
        self.pending_rearms.retain(|rearm| !rearm.poll_at(now));
    }

    /// Earliest pending timer deadline, for binding-layer sleep scheduling.
    pub fn next_deadline(&self) -> Option<Instant> {
        let rearm = self
            .pending_rearms
            .iter()
            .map(PendingRearm::deadline)
            .min();
        match (self.notifier.next_deadline(), rearm) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (deadline, None) => deadline,
            (None, deadline) => deadline,
        }
    }
}
