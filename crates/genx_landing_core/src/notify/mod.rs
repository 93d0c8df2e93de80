//! Transient banner notifications.
//!
//! # Responsibility
//! - Route severity-tagged status messages to the page banner.
//! - Own the auto-hide timing so at most one hide is ever pending.
//!
//! # See also
//! - docs/architecture/interaction-model.md

pub mod notifier;
