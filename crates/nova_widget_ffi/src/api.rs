//! FFI use-case API for the host shell's widget process.
//!
//! # Responsibility
//! - Expose the widget lifecycle and pull contract to the host via FRB.
//! - Keep one adapter instance per host-assigned widget id.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Failures degrade to neutral views or failure envelopes, never errors.

use log::info;
use nova_widget_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    CounterWidgetRenderer, DeepLink, EmptySnapshotStore, ListWidgetRenderer, SnapshotStore,
    SqliteSnapshotStore, WidgetKind,
};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock, PoisonError};

const STORE_DB_FILE_NAME: &str = "nova_widget_snapshot.sqlite3";
static STORE_DB_PATH: OnceLock<PathBuf> = OnceLock::new();

type WidgetInstance = ListWidgetRenderer<Box<dyn SnapshotStore + Send>>;
static ADAPTERS: OnceLock<Mutex<HashMap<i64, WidgetInstance>>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes widget-core logging once per process.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Idempotent for the same `level + log_dir`; reconfiguration returns error.
/// - Never panics; returns empty string on success, error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Result envelope for widget lifecycle calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetSyncResponse {
    /// Whether the lifecycle call applied to a known widget instance.
    pub ok: bool,
    /// Rows currently served for this instance.
    pub row_count: u32,
    /// Human-readable message for diagnostics.
    pub message: String,
}

/// One paintable row as handed to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetRowView {
    pub title: String,
    pub preview: String,
    /// Serialized deep link for the row tap; `None` on the neutral row.
    pub click_payload: Option<String>,
}

/// Quick-counter view as handed to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetCounterView {
    pub text: String,
    /// Serialized deep link for the whole-widget tap.
    pub click_payload: String,
}

/// Creates and attaches the adapter for one widget instance.
///
/// `launch_config` is the host's widget-type string; absent or unknown values
/// fall back to the recent-notes kind. Re-attaching an existing id replaces
/// its instance.
///
/// # FFI contract
/// - Sync call, local store read only.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn widget_attach(widget_id: i64, launch_config: Option<String>) -> WidgetSyncResponse {
    let kind = WidgetKind::from_launch_config(launch_config.as_deref());
    let mut renderer = ListWidgetRenderer::new(open_snapshot_store(), kind);
    renderer.attach();
    let row_count = renderer.row_count();

    with_adapters(|adapters| {
        if adapters.insert(widget_id, renderer).is_some() {
            info!("event=widget_ffi_attach module=ffi status=replaced widget_id={widget_id}");
        }
    });

    WidgetSyncResponse {
        ok: true,
        row_count: clamp_count(row_count),
        message: format!("Attached {} widget.", kind.label()),
    }
}

/// Re-synchronizes one widget instance from the current snapshot.
///
/// # FFI contract
/// - Sync call, local store read only.
/// - Never panics; unknown ids return a failure envelope.
#[flutter_rust_bridge::frb(sync)]
pub fn widget_invalidate(widget_id: i64) -> WidgetSyncResponse {
    with_adapters(|adapters| match adapters.get_mut(&widget_id) {
        Some(renderer) => {
            renderer.on_invalidate();
            WidgetSyncResponse {
                ok: true,
                row_count: clamp_count(renderer.row_count()),
                message: "Re-synchronized.".to_string(),
            }
        }
        None => unknown_widget_response(widget_id),
    })
}

/// Detaches and discards one widget instance.
///
/// # FFI contract
/// - Sync call.
/// - Never panics; unknown ids return a failure envelope.
#[flutter_rust_bridge::frb(sync)]
pub fn widget_detach(widget_id: i64) -> WidgetSyncResponse {
    with_adapters(|adapters| match adapters.remove(&widget_id) {
        Some(mut renderer) => {
            renderer.detach();
            WidgetSyncResponse {
                ok: true,
                row_count: 0,
                message: "Detached.".to_string(),
            }
        }
        None => unknown_widget_response(widget_id),
    })
}

/// Rows currently served for a widget instance; `0` for unknown ids.
///
/// # FFI contract
/// - Sync call, memory read only.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn widget_row_count(widget_id: i64) -> u32 {
    with_adapters(|adapters| {
        adapters
            .get(&widget_id)
            .map(|renderer| clamp_count(renderer.row_count()))
            .unwrap_or(0)
    })
}

/// Renders one row for the host.
///
/// Unknown ids and out-of-range positions yield the neutral empty row; the
/// host races its count query against row queries during repaints.
///
/// # FFI contract
/// - Sync call, memory read only.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn widget_row_at(widget_id: i64, position: u32) -> WidgetRowView {
    with_adapters(|adapters| match adapters.get(&widget_id) {
        Some(renderer) => {
            let row = renderer.row_at(position as usize);
            WidgetRowView {
                title: row.title,
                preview: row.preview,
                click_payload: row.on_click.as_ref().map(serialize_link),
            }
        }
        None => WidgetRowView {
            title: String::new(),
            preview: String::new(),
            click_payload: None,
        },
    })
}

/// Stable row identity: the position itself.
///
/// # FFI contract
/// - Sync call, pure.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn widget_stable_id(_widget_id: i64, position: u32) -> i64 {
    i64::from(position)
}

/// Number of row templates the host should allocate.
#[flutter_rust_bridge::frb(sync)]
pub fn widget_view_type_count() -> u32 {
    1
}

/// Whether stable ids are meaningful to the host list differ.
#[flutter_rust_bridge::frb(sync)]
pub fn widget_has_stable_ids() -> bool {
    true
}

/// Renders the quick-note counter from the current snapshot.
///
/// # FFI contract
/// - Sync call, local store read only.
/// - Never panics; an absent snapshot renders `"0 notes"`.
#[flutter_rust_bridge::frb(sync)]
pub fn widget_counter_view() -> WidgetCounterView {
    let view = CounterWidgetRenderer::new(open_snapshot_store()).render();
    WidgetCounterView {
        text: view.text,
        click_payload: serialize_link(&view.on_click),
    }
}

fn unknown_widget_response(widget_id: i64) -> WidgetSyncResponse {
    WidgetSyncResponse {
        ok: false,
        row_count: 0,
        message: format!("Unknown widget id {widget_id}."),
    }
}

fn clamp_count(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}

fn serialize_link(link: &DeepLink) -> String {
    serde_json::to_string(link).unwrap_or_default()
}

fn resolve_store_db_path() -> PathBuf {
    STORE_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("NOVA_WIDGET_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(STORE_DB_FILE_NAME)
        })
        .clone()
}

fn open_snapshot_store() -> Box<dyn SnapshotStore + Send> {
    match SqliteSnapshotStore::open(resolve_store_db_path()) {
        Ok(store) => Box::new(store),
        Err(err) => {
            // Normal before the main app's first snapshot write.
            info!("event=store_open module=ffi status=fallback_empty detail={err}");
            Box::new(EmptySnapshotStore)
        }
    }
}

fn with_adapters<T>(f: impl FnOnce(&mut HashMap<i64, WidgetInstance>) -> T) -> T {
    let mut adapters = ADAPTERS
        .get_or_init(|| Mutex::new(HashMap::new()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    f(&mut adapters)
}
