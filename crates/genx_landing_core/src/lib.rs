//! Core interaction logic for the Genesis-X landing page.
//! This crate is the single source of truth for action semantics.

pub mod config;
pub mod dispatch;
pub mod logging;
pub mod model;
pub mod notify;
pub mod packet;
pub mod platform;
pub mod share;

pub use config::{page_location_from_env, ConfigError, ConfigOverrides, PageConfig};
pub use dispatch::dispatcher::{
    DispatchOutcome, Dispatcher, PlatformHandles, READY_MESSAGE, UNKNOWN_ACTION_MESSAGE,
};
pub use dispatch::registry::{
    parse_action_id, supported_action_ids, ActionContext, ActionHandler, ActionId, ActionIdError,
    ActionRegistry, RegistryError,
};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::project::{normalize_text, PageLocation, ProjectInfo};
pub use notify::notifier::{BannerSink, Notifier, Severity};
pub use packet::{
    build_architecture_packet, ActionControl, ARCHITECTURE_PACKET_FILENAME,
    ARCHITECTURE_PACKET_MEDIA_TYPE,
};
pub use platform::capability::{
    safe_navigate, ArtifactError, ArtifactSink, Clipboard, ClipboardError, NavigationError,
    ShareRequest, ShareSheet, ShareSheetError, UrlOpener,
};
pub use share::links::SharePlatform;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
