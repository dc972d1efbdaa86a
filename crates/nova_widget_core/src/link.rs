//! Deep-link payload shaping for widget interactions.
//!
//! # Responsibility
//! - Build the navigation payload the host dispatches when a rendered unit
//!   is activated.
//!
//! # Invariants
//! - Payload shaping only; the host performs the actual navigation.

use serde::{Deserialize, Serialize};

/// Navigation payload attached to a renderable unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum DeepLink {
    /// Reopen the application at a specific note.
    OpenNote { note_id: String },
    /// Reopen the application at its default screen.
    OpenApp,
}

impl DeepLink {
    /// Route for a tapped note row.
    pub fn open_note(note_id: impl Into<String>) -> Self {
        Self::OpenNote {
            note_id: note_id.into(),
        }
    }

    /// Route for a whole-widget tap.
    pub fn open_app() -> Self {
        Self::OpenApp
    }

    /// The targeted note id, when this link targets one.
    pub fn note_id(&self) -> Option<&str> {
        match self {
            Self::OpenNote { note_id } => Some(note_id),
            Self::OpenApp => None,
        }
    }
}
