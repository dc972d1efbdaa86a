//! Snapshot store access.
//!
//! # Responsibility
//! - Define the read-only key-value contract over the shared snapshot the
//!   main application writes for its widgets.
//! - Apply fail-closed defaults so callers never observe a read error.
//!
//! # Invariants
//! - This core never writes through a [`SnapshotStore`].
//! - A missing key, missing store, and failing read are indistinguishable to
//!   callers of [`read_string`] / [`read_int`].

use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory;
mod sqlite;

pub use memory::MemorySnapshotStore;
pub use sqlite::SqliteSnapshotStore;

/// Snapshot key holding the recent-notes JSON array.
pub const KEY_RECENT_NOTES: &str = "recent_notes";
/// Snapshot key holding the pinned-notes JSON array.
pub const KEY_PINNED_NOTES: &str = "pinned_notes";
/// Snapshot key holding the total note count.
pub const KEY_NOTE_COUNT: &str = "note_count";

/// Default payload for absent list entries, decoding to an empty list.
pub const EMPTY_LIST_PAYLOAD: &str = "[]";

/// Result type for store bootstrap operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Error raised while opening the shared snapshot database.
///
/// Read paths never surface this type; it exists so open failures stay
/// auditable before the caller falls back to [`EmptySnapshotStore`].
#[derive(Debug)]
pub enum StoreError {
    Sqlite(rusqlite::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Read-only view over the shared widget snapshot.
///
/// Implementations answer `None` for any key they cannot produce, including
/// internal read failures; distinguishing "absent" from "unreadable" is
/// deliberately impossible at this seam.
pub trait SnapshotStore {
    /// Returns the string value stored under `key`, if any.
    fn string_value(&self, key: &str) -> Option<String>;

    /// Returns the integer value stored under `key`, if any.
    fn int_value(&self, key: &str) -> Option<i64>;
}

impl<T: SnapshotStore + ?Sized> SnapshotStore for Box<T> {
    fn string_value(&self, key: &str) -> Option<String> {
        (**self).string_value(key)
    }

    fn int_value(&self, key: &str) -> Option<i64> {
        (**self).int_value(key)
    }
}

impl<T: SnapshotStore + ?Sized> SnapshotStore for std::sync::Arc<T> {
    fn string_value(&self, key: &str) -> Option<String> {
        (**self).string_value(key)
    }

    fn int_value(&self, key: &str) -> Option<i64> {
        (**self).int_value(key)
    }
}

/// Store with no entries.
///
/// Stands in when the shared snapshot database cannot be opened, which is the
/// normal state before the main application's first write.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptySnapshotStore;

impl SnapshotStore for EmptySnapshotStore {
    fn string_value(&self, _key: &str) -> Option<String> {
        None
    }

    fn int_value(&self, _key: &str) -> Option<i64> {
        None
    }
}

/// Reads a string entry, defaulting to the empty-list payload.
///
/// Absence is the steady state before the main app's first snapshot write and
/// is never an error.
pub fn read_string(store: &impl SnapshotStore, key: &str) -> String {
    match store.string_value(key) {
        Some(value) => value,
        None => {
            debug!("event=store_read module=store status=default key={key} kind=string");
            EMPTY_LIST_PAYLOAD.to_string()
        }
    }
}

/// Reads an integer entry, defaulting to `0`.
pub fn read_int(store: &impl SnapshotStore, key: &str) -> i64 {
    match store.int_value(key) {
        Some(value) => value,
        None => {
            debug!("event=store_read module=store status=default key={key} kind=int");
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{read_int, read_string, EmptySnapshotStore, MemorySnapshotStore, KEY_NOTE_COUNT};

    #[test]
    fn empty_store_yields_defaults() {
        let store = EmptySnapshotStore;
        assert_eq!(read_string(&store, "recent_notes"), "[]");
        assert_eq!(read_int(&store, KEY_NOTE_COUNT), 0);
    }

    #[test]
    fn memory_store_round_trips_values() {
        let store = MemorySnapshotStore::new();
        store.set_string("recent_notes", "[{\"id\":\"a\"}]");
        store.set_int(KEY_NOTE_COUNT, 3);

        assert_eq!(read_string(&store, "recent_notes"), "[{\"id\":\"a\"}]");
        assert_eq!(read_int(&store, KEY_NOTE_COUNT), 3);
        assert_eq!(read_int(&store, "missing"), 0);
    }

    #[test]
    fn boxed_store_delegates() {
        let store = MemorySnapshotStore::new();
        store.set_int(KEY_NOTE_COUNT, 7);
        let boxed: Box<dyn super::SnapshotStore> = Box::new(store);
        assert_eq!(read_int(&boxed, KEY_NOTE_COUNT), 7);
    }
}
