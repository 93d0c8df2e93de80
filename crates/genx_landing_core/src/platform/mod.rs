//! Platform capability seams and their desktop implementations.
//!
//! # Responsibility
//! - Define the contracts for every platform capability the actions consume:
//!   outbound navigation, clipboard write, native share sheet, artifact save.
//! - Keep handler code independent of how a given host provides them.
//!
//! # Invariants
//! - Capability absence is an expected branch, never a panic.
//! - `safe_navigate` performs at most one fallback attempt per call.

pub mod capability;
pub mod desktop;
