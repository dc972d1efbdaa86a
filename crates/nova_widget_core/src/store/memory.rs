//! In-memory snapshot store for tests and local smoke runs.

use super::SnapshotStore;
use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

#[derive(Debug, Default)]
struct Entries {
    strings: BTreeMap<String, String>,
    ints: BTreeMap<String, i64>,
}

/// Writable in-process store mirroring the shared snapshot schema.
///
/// The write surface exists only so tests and the CLI demo can stand in for
/// the external snapshot writer; production widget code reads exclusively.
/// Writes go through `&self` so a cloned [`std::sync::Arc`] handle can keep
/// writing after an adapter takes ownership of another handle, the same way
/// the main application writes the store other processes read.
#[derive(Debug, Default)]
pub struct MemorySnapshotStore {
    entries: RwLock<Entries>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets or replaces a string entry.
    pub fn set_string(&self, key: impl Into<String>, value: impl Into<String>) {
        self.write_entries().strings.insert(key.into(), value.into());
    }

    /// Sets or replaces an integer entry.
    pub fn set_int(&self, key: impl Into<String>, value: i64) {
        self.write_entries().ints.insert(key.into(), value);
    }

    /// Removes an entry of either kind.
    pub fn remove(&self, key: &str) {
        let mut entries = self.write_entries();
        entries.strings.remove(key);
        entries.ints.remove(key);
    }

    fn write_entries(&self) -> std::sync::RwLockWriteGuard<'_, Entries> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn read_entries(&self) -> std::sync::RwLockReadGuard<'_, Entries> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn string_value(&self, key: &str) -> Option<String> {
        self.read_entries().strings.get(key).cloned()
    }

    fn int_value(&self, key: &str) -> Option<i64> {
        self.read_entries().ints.get(key).copied()
    }
}
