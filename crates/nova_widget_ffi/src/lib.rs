//! FFI surface crate for Nova home-screen widgets.
//!
//! The host shell's widget process drives `nova_widget_core` exclusively
//! through the synchronous functions in [`api`].

pub mod api;
