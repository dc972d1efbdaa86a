//! Domain model for widget projections.
//!
//! # Responsibility
//! - Define the typed note summary shape decoded from snapshot payloads.
//!
//! # Invariants
//! - Model values are immutable once decoded; refresh replaces, never mutates.

pub mod note;
