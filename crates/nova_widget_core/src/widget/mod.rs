//! Widget variants and their render templates.
//!
//! # Responsibility
//! - Define the widget kinds the host can instantiate.
//! - Map projection/counter state into host-paintable view structures.
//!
//! # Invariants
//! - Rendering is a pure pull; it never writes through the snapshot store.

pub mod kind;
pub mod render;
