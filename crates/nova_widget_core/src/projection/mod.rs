//! Snapshot-to-list projection pipeline.
//!
//! # Responsibility
//! - Decode snapshot payloads into typed note lists.
//! - Hold the decoded list behind the pull-based adapter the host drives.
//!
//! # Invariants
//! - A projection is always a full successfully-decoded list or empty,
//!   never a partial parse.

pub mod adapter;
pub mod decoder;
