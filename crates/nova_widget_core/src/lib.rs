//! Widget data-projection core for Nova home-screen widgets.
//! This crate is the single source of truth for the widget read-path:
//! snapshot reads, note-list decoding, and the pull-based list contract
//! the host shell drives.

pub mod link;
pub mod logging;
pub mod model;
pub mod projection;
pub mod store;
pub mod widget;

pub use link::DeepLink;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::NoteSummary;
pub use projection::adapter::NoteListAdapter;
pub use projection::decoder::{decode_note_list, try_decode_note_list, NoteListDecodeError};
pub use store::{
    read_int, read_string, EmptySnapshotStore, MemorySnapshotStore, SnapshotStore,
    SqliteSnapshotStore, StoreError, KEY_NOTE_COUNT, KEY_PINNED_NOTES, KEY_RECENT_NOTES,
};
pub use widget::kind::WidgetKind;
pub use widget::render::{
    CounterView, CounterWidgetRenderer, ListWidgetRenderer, RowView,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
