//! Social share flows.
//!
//! # Responsibility
//! - Build deterministic share-intent URLs per platform.
//! - Run the native-sheet-first fallback chain for every share action.
//!
//! # Invariants
//! - Link building is pure: identical `ProjectInfo` yields identical bytes.
//! - The chain stops at the first strategy reporting `Handled`.

pub mod links;
pub mod strategy;
