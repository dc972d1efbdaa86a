//! Widget kind enumeration and launch-configuration mapping.

use crate::store::{KEY_NOTE_COUNT, KEY_PINNED_NOTES, KEY_RECENT_NOTES};
use serde::{Deserialize, Serialize};

/// Variant of a home-screen widget instance.
///
/// Fixed at instance creation from the host's launch configuration; a widget
/// never changes kind over its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
    /// Scrollable list of recently edited notes.
    RecentList,
    /// Scrollable list of pinned notes.
    PinnedList,
    /// Single-line note counter.
    QuickCounter,
}

impl WidgetKind {
    /// Maps the host-provided launch configuration string to a kind.
    ///
    /// Absent or unrecognized values fall back to [`WidgetKind::RecentList`],
    /// matching the host's historical default for untagged instances.
    pub fn from_launch_config(value: Option<&str>) -> Self {
        match value {
            Some("pinned") => Self::PinnedList,
            Some("counter") => Self::QuickCounter,
            _ => Self::RecentList,
        }
    }

    /// Snapshot key this kind reads.
    pub fn store_key(self) -> &'static str {
        match self {
            Self::RecentList => KEY_RECENT_NOTES,
            Self::PinnedList => KEY_PINNED_NOTES,
            Self::QuickCounter => KEY_NOTE_COUNT,
        }
    }

    /// Stable label used in launch configuration and diagnostics.
    pub fn label(self) -> &'static str {
        match self {
            Self::RecentList => "recent",
            Self::PinnedList => "pinned",
            Self::QuickCounter => "counter",
        }
    }

    /// Whether this kind renders through the list projection adapter.
    pub fn is_list(self) -> bool {
        matches!(self, Self::RecentList | Self::PinnedList)
    }
}
