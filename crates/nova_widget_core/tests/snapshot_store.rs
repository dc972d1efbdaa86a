use nova_widget_core::{
    read_int, read_string, EmptySnapshotStore, NoteListAdapter, SqliteSnapshotStore,
    KEY_NOTE_COUNT, KEY_RECENT_NOTES,
};
use rusqlite::{params, Connection};
use std::path::Path;

// Stand-in for the external snapshot writer: creates the shared schema the
// main application maintains and fills it with the given entries.
fn write_snapshot(path: &Path, entries: &[(&str, Option<&str>, Option<i64>)]) {
    let conn = Connection::open(path).unwrap();
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS snapshot_entries (
            key TEXT PRIMARY KEY,
            string_value TEXT,
            int_value INTEGER
        );",
    )
    .unwrap();
    for (key, string_value, int_value) in entries {
        conn.execute(
            "INSERT OR REPLACE INTO snapshot_entries (key, string_value, int_value)
             VALUES (?1, ?2, ?3);",
            params![key, string_value, int_value],
        )
        .unwrap();
    }
}

#[test]
fn reads_entries_written_by_the_external_writer() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("snapshot.sqlite3");
    write_snapshot(
        &db_path,
        &[
            (KEY_RECENT_NOTES, Some(r#"[{"id":"1","title":"T"}]"#), None),
            (KEY_NOTE_COUNT, None, Some(12)),
        ],
    );

    let store = SqliteSnapshotStore::open(&db_path).unwrap();
    assert_eq!(read_string(&store, KEY_RECENT_NOTES), r#"[{"id":"1","title":"T"}]"#);
    assert_eq!(read_int(&store, KEY_NOTE_COUNT), 12);
}

#[test]
fn missing_keys_resolve_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("snapshot.sqlite3");
    write_snapshot(&db_path, &[]);

    let store = SqliteSnapshotStore::open(&db_path).unwrap();
    assert_eq!(read_string(&store, KEY_RECENT_NOTES), "[]");
    assert_eq!(read_int(&store, KEY_NOTE_COUNT), 0);
}

#[test]
fn missing_table_resolves_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("snapshot.sqlite3");
    // A database the writer created but never populated with the schema.
    Connection::open(&db_path).unwrap();

    let store = SqliteSnapshotStore::open(&db_path).unwrap();
    assert_eq!(read_string(&store, KEY_RECENT_NOTES), "[]");
    assert_eq!(read_int(&store, KEY_NOTE_COUNT), 0);
}

#[test]
fn missing_file_fails_open_and_empty_store_stands_in() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("never_written.sqlite3");

    assert!(SqliteSnapshotStore::open(&db_path).is_err());

    let fallback = EmptySnapshotStore;
    assert_eq!(read_string(&fallback, KEY_RECENT_NOTES), "[]");
    assert_eq!(read_int(&fallback, KEY_NOTE_COUNT), 0);
}

#[test]
fn adapter_projects_a_file_backed_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("snapshot.sqlite3");
    write_snapshot(
        &db_path,
        &[(
            KEY_RECENT_NOTES,
            Some(r#"[{"id":"1","title":"T","preview":"P"}]"#),
            None,
        )],
    );

    let store = SqliteSnapshotStore::open(&db_path).unwrap();
    let mut adapter = NoteListAdapter::new(store, KEY_RECENT_NOTES);
    adapter.attach();

    assert_eq!(adapter.count(), 1);
    let item = adapter.item_at(0).unwrap();
    assert_eq!(item.id, "1");
    assert_eq!(item.title, "T");
    assert_eq!(item.preview, "P");

    // Writer updates the file; the host then signals invalidation.
    write_snapshot(&db_path, &[(KEY_RECENT_NOTES, Some(r#"[{"id":"2"}]"#), None)]);
    adapter.on_invalidate();

    assert_eq!(adapter.count(), 1);
    assert_eq!(adapter.item_at(0).unwrap().id, "2");
}
