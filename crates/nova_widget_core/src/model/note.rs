//! Note summary model.
//!
//! # Responsibility
//! - Define the row-level projection decoded from the shared snapshot.
//!
//! # Invariants
//! - `id` is non-empty for every decoded summary.
//! - Summaries are owned by the adapter that decoded them and are dropped
//!   wholesale on re-synchronization or teardown.

use serde::{Deserialize, Serialize};

/// Fallback title applied when the snapshot omits one.
pub const DEFAULT_TITLE: &str = "Untitled";

/// One note row as projected into a widget.
///
/// This is a read-only summary of a note owned by the main application; the
/// widget core never holds the full note body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteSummary {
    /// Opaque note identifier assigned by the main application.
    ///
    /// Used verbatim as the deep-link target; never parsed or generated here.
    pub id: String,
    /// Display title, already defaulted at decode time.
    pub title: String,
    /// Short body excerpt, empty when the snapshot carries none.
    pub preview: String,
}

impl NoteSummary {
    /// Creates a summary from already-validated parts.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        preview: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            preview: preview.into(),
        }
    }
}
