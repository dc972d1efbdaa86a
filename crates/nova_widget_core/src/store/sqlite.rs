//! SQLite-backed snapshot store.
//!
//! # Responsibility
//! - Open the shared snapshot database read-only and serve key lookups.
//!
//! # Invariants
//! - The connection is opened with `SQLITE_OPEN_READ_ONLY`; schema ownership
//!   stays with the external snapshot writer.
//! - Query failures (missing table included) surface as absent keys.

use super::{SnapshotStore, StoreResult};
use log::{debug, info, warn};
use rusqlite::{Connection, OpenFlags};
use std::path::Path;
use std::time::{Duration, Instant};

const ENTRY_SELECT_SQL: &str = "SELECT string_value, int_value
FROM snapshot_entries
WHERE key = ?1";

/// Read-only store over the snapshot database the main application maintains.
pub struct SqliteSnapshotStore {
    conn: Connection,
}

impl SqliteSnapshotStore {
    /// Opens the snapshot database at `path` read-only.
    ///
    /// # Side effects
    /// - Emits `store_open` logging events with duration and status.
    ///
    /// # Errors
    /// - Returns an error when the file is absent or not openable; callers
    ///   fall back to [`super::EmptySnapshotStore`] in that case.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let started_at = Instant::now();
        debug!("event=store_open module=store status=start mode=read_only");

        let conn = match Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        ) {
            Ok(conn) => conn,
            Err(err) => {
                info!(
                    "event=store_open module=store status=absent duration_ms={} detail={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(err.into());
            }
        };
        conn.busy_timeout(Duration::from_secs(5))?;

        debug!(
            "event=store_open module=store status=ok duration_ms={}",
            started_at.elapsed().as_millis()
        );
        Ok(Self { conn })
    }

    fn entry(&self, key: &str) -> Option<(Option<String>, Option<i64>)> {
        let mut stmt = match self.conn.prepare(ENTRY_SELECT_SQL) {
            Ok(stmt) => stmt,
            Err(err) => {
                // A snapshot written by an older app build may not have the
                // table yet; absent and unreadable are equivalent here.
                warn!("event=store_read module=store status=unreadable key={key} detail={err}");
                return None;
            }
        };

        let mut rows = match stmt.query([key]) {
            Ok(rows) => rows,
            Err(err) => {
                warn!("event=store_read module=store status=unreadable key={key} detail={err}");
                return None;
            }
        };

        match rows.next() {
            Ok(Some(row)) => {
                let string_value = row.get::<_, Option<String>>(0).ok().flatten();
                let int_value = row.get::<_, Option<i64>>(1).ok().flatten();
                Some((string_value, int_value))
            }
            Ok(None) => None,
            Err(err) => {
                warn!("event=store_read module=store status=unreadable key={key} detail={err}");
                None
            }
        }
    }
}

impl SnapshotStore for SqliteSnapshotStore {
    fn string_value(&self, key: &str) -> Option<String> {
        self.entry(key).and_then(|(string_value, _)| string_value)
    }

    fn int_value(&self, key: &str) -> Option<i64> {
        self.entry(key).and_then(|(_, int_value)| int_value)
    }
}
