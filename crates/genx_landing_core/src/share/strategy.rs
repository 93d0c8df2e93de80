//! Ordered share strategies.
//!
//! # Responsibility
//! - Model the share fallback chain explicitly: native sheet first, then a
//!   platform link.
//!
//! # Invariants
//! - Strategies are tried in order; the first `Handled` stops the chain.
//! - A link strategy is terminal: it always reports `Handled`.

use crate::model::project::ProjectInfo;
use crate::notify::notifier::{Notifier, Severity};
use crate::platform::capability::{safe_navigate, ShareRequest, ShareSheet, UrlOpener};
use crate::share::links::SharePlatform;
use log::{debug, info};
use std::time::Instant;

/// Guidance shown when every navigation attempt was blocked.
pub const SHARE_BLOCKED_MESSAGE: &str = "Share blocked. Try Copy Link.";
/// Shown after the native sheet opened.
pub const SHARE_SHEET_OPENED_MESSAGE: &str = "Opened system share sheet.";

/// Result of one strategy attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyOutcome {
    /// The share is settled; later strategies must not run.
    Handled,
    /// This strategy could not take the share; try the next one.
    NotHandled,
}

/// Everything one share attempt may touch.
pub struct ShareContext<'a> {
    pub project: &'a ProjectInfo,
    pub notifier: &'a mut Notifier,
    pub opener: &'a mut dyn UrlOpener,
    pub sheet: &'a mut dyn ShareSheet,
    pub now: Instant,
}

/// One step of the share fallback chain.
pub trait ShareStrategy {
    /// Stable id used in logs.
    fn strategy_id(&self) -> &'static str;

    fn attempt(&self, cx: &mut ShareContext<'_>) -> StrategyOutcome;
}

/// Preferred strategy: the host's native share sheet.
///
/// Absence, failure and user dismissal all fall through silently so a
/// link-based strategy can take over.
pub struct NativeShareStrategy;

impl ShareStrategy for NativeShareStrategy {
    fn strategy_id(&self) -> &'static str {
        "native_sheet"
    }

    fn attempt(&self, cx: &mut ShareContext<'_>) -> StrategyOutcome {
        if !cx.sheet.is_supported() {
            return StrategyOutcome::NotHandled;
        }
        let request = ShareRequest {
            title: cx.project.name.clone(),
            text: cx.project.tagline.clone(),
            url: cx.project.url.clone(),
        };
        match cx.sheet.present(&request) {
            Ok(()) => {
                cx.notifier
                    .show_at(SHARE_SHEET_OPENED_MESSAGE, Severity::Info, cx.now);
                StrategyOutcome::Handled
            }
            Err(err) => {
                debug!("event=native_share module=share status=fell_through detail={err}");
                StrategyOutcome::NotHandled
            }
        }
    }
}

/// Terminal strategy: open the platform's share-intent link.
pub struct LinkShareStrategy {
    platform: SharePlatform,
}

impl LinkShareStrategy {
    pub fn new(platform: SharePlatform) -> Self {
        Self { platform }
    }
}

impl ShareStrategy for LinkShareStrategy {
    fn strategy_id(&self) -> &'static str {
        "platform_link"
    }

    fn attempt(&self, cx: &mut ShareContext<'_>) -> StrategyOutcome {
        let primary = self.platform.intent_url(cx.project);
        let mut opened = safe_navigate(cx.opener, &primary);

        if !opened {
            if let Some(legacy) = self.platform.fallback_intent_url(cx.project) {
                info!(
                    "event=share_link_retry module=share platform={} endpoint=legacy",
                    self.platform.as_str()
                );
                opened = safe_navigate(cx.opener, &legacy);
            }
        }

        if opened {
            cx.notifier
                .show_at(self.platform.opened_message(), Severity::Info, cx.now);
        } else {
            cx.notifier
                .show_at(SHARE_BLOCKED_MESSAGE, Severity::Warning, cx.now);
        }
        StrategyOutcome::Handled
    }
}

/// Runs `chain` in order, stopping at the first `Handled`.
///
/// Returns the id of the handling strategy, or `None` when every strategy
/// fell through (an empty or fully declining chain).
pub fn run_share_chain(
    chain: &[&dyn ShareStrategy],
    cx: &mut ShareContext<'_>,
) -> Option<&'static str> {
    for strategy in chain {
        if strategy.attempt(cx) == StrategyOutcome::Handled {
            info!(
                "event=share_handled module=share strategy={}",
                strategy.strategy_id()
            );
            return Some(strategy.strategy_id());
        }
    }
    None
}

/// Runs the default chain for `platform`: native sheet, then platform link.
pub fn share_via(platform: SharePlatform, cx: &mut ShareContext<'_>) -> Option<&'static str> {
    let native = NativeShareStrategy;
    let link = LinkShareStrategy::new(platform);
    run_share_chain(&[&native, &link], cx)
}
