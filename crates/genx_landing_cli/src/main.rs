//! Terminal binding layer for the landing interaction core.
//!
//! # Responsibility
//! - Extract action identifiers from process arguments and hand them to the
//!   dispatcher; the core owns all action semantics.
//! - Render banner notifications as terminal status lines.
//!
//! # Invariants
//! - Unknown actions are notified, never fatal; only binding-layer misuse
//!   (unusable config) exits non-zero.

use genx_landing_core::platform::desktop::{
    DesktopClipboard, DesktopShareSheet, DesktopUrlOpener, DirArtifactSink,
};
use genx_landing_core::{
    core_version, default_log_level, init_logging, page_location_from_env, supported_action_ids,
    BannerSink, Dispatcher, PageConfig, PlatformHandles, Severity,
};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Environment variable overriding where downloaded artifacts land.
const DOWNLOAD_DIR_ENV: &str = "GENX_DOWNLOAD_DIR";
/// Environment variable enabling file logging into the named directory.
const LOG_DIR_ENV: &str = "GENX_LOG_DIR";

const EXIT_USAGE: i32 = 2;

/// Renders banner messages as severity-tagged terminal lines.
struct TerminalBanner;

impl BannerSink for TerminalBanner {
    fn display(&mut self, message: &str, severity: Severity) {
        eprintln!("[{}] {message}", severity.as_str());
    }

    fn hide(&mut self) {
        // Terminal lines scroll away on their own; nothing to clear.
    }
}

fn usage() {
    println!("genx-landing {}", core_version());
    println!("usage: genx-landing <action-id>...");
    println!("actions:");
    for action in supported_action_ids() {
        println!("  {action}");
    }
}

fn download_dir() -> PathBuf {
    std::env::var(DOWNLOAD_DIR_ENV)
        .ok()
        .filter(|dir| !dir.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

fn init_logging_from_env() {
    let Some(log_dir) = std::env::var(LOG_DIR_ENV)
        .ok()
        .filter(|dir| !dir.trim().is_empty())
    else {
        return;
    };
    if let Err(err) = init_logging(default_log_level(), Path::new(log_dir.trim())) {
        eprintln!("logging disabled: {err}");
    }
}

fn main() {
    init_logging_from_env();

    let actions: Vec<String> = std::env::args().skip(1).collect();
    if actions.is_empty() {
        usage();
        return;
    }
    log::info!(
        "event=cli_start module=cli version={} actions={}",
        core_version(),
        actions.len()
    );

    let config = match PageConfig::load_from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("unusable config: {err}");
            std::process::exit(EXIT_USAGE);
        }
    };
    let location = page_location_from_env();

    let handles = PlatformHandles {
        banner: Box::new(TerminalBanner),
        opener: Box::new(DesktopUrlOpener::from_env()),
        clipboard: Box::new(DesktopClipboard::probe()),
        sheet: Box::new(DesktopShareSheet::from_env()),
        artifacts: Box::new(DirArtifactSink::new(download_dir())),
    };
    let mut dispatcher = match Dispatcher::new(&config, location.as_ref(), handles) {
        Ok(dispatcher) => dispatcher,
        Err(err) => {
            eprintln!("unusable config: {err}");
            std::process::exit(EXIT_USAGE);
        }
    };

    dispatcher.announce_ready_at(Instant::now());
    for action in &actions {
        dispatcher.dispatch_at(action, None, Instant::now());
    }

    // Let the auto-hide and any control re-arm settle before exiting, the
    // same way the page keeps its event loop alive.
    while let Some(deadline) = dispatcher.next_deadline() {
        let now = Instant::now();
        if deadline > now {
            std::thread::sleep(deadline - now);
        }
        dispatcher.poll_timers_at(Instant::now());
    }
}
