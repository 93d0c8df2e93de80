//! Action dispatch: identifier parsing, handler registry, dispatcher.
//!
//! # Responsibility
//! - Map action identifiers extracted by the UI binding layer onto exactly
//!   one handler.
//! - Own the per-page interaction state: project record, notifier, pending
//!   control re-arms.
//!
//! # Invariants
//! - Unknown identifiers notify an error and cause no other side effect.
//! - No handler error propagates past the dispatcher.
//!
//! # See also
//! - docs/architecture/interaction-model.md

pub mod dispatcher;
pub mod handlers;
pub mod registry;
