//! Pull-based list projection adapter.
//!
//! # Responsibility
//! - Hold the decoded note list for one widget instance.
//! - Serve the host-driven pull contract: count, per-position item, stable id.
//! - Re-synchronize from the snapshot store on host invalidation.
//!
//! # Invariants
//! - Lifecycle is `Uninitialized -> Attached -> Detached`, driven solely by
//!   discrete host calls; the adapter owns no timers or background work.
//! - Refresh replaces the item list in a single assignment; a reader observes
//!   either the old or the new list, never a half-updated one.
//! - Out-of-range queries are tolerated and answer `None`; the host races
//!   `count()` against `item_at()` during repaints.

use crate::model::note::NoteSummary;
use crate::projection::decoder::decode_note_list;
use crate::store::{read_string, SnapshotStore};
use crate::widget::kind::WidgetKind;
use log::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Phase {
    Uninitialized,
    Attached { items: Vec<NoteSummary> },
    Detached,
}

/// Host-invalidated in-memory view over one decoded note list.
///
/// One adapter serves one widget instance and reads exactly one store key,
/// fixed at construction.
pub struct NoteListAdapter<S: SnapshotStore> {
    store: S,
    source_key: String,
    phase: Phase,
}

impl<S: SnapshotStore> NoteListAdapter<S> {
    /// Creates a detachable adapter over `source_key` in `store`.
    pub fn new(store: S, source_key: impl Into<String>) -> Self {
        Self {
            store,
            source_key: source_key.into(),
            phase: Phase::Uninitialized,
        }
    }

    /// Creates an adapter bound to the store key of a list widget kind.
    pub fn for_kind(store: S, kind: WidgetKind) -> Self {
        Self::new(store, kind.store_key())
    }

    /// Begins serving: reads and decodes the current snapshot.
    ///
    /// Attaching an already-attached adapter re-synchronizes it; the host may
    /// deliver a redundant "begin" after process restore.
    pub fn attach(&mut self) {
        let items = self.load_items();
        info!(
            "event=widget_attach module=projection status=ok key={} rows={}",
            self.source_key,
            items.len()
        );
        self.phase = Phase::Attached { items };
    }

    /// Re-reads the snapshot and swaps the held list in one assignment.
    ///
    /// Ignored outside the attached state.
    pub fn on_invalidate(&mut self) {
        if !self.is_attached() {
            debug!(
                "event=widget_invalidate module=projection status=ignored key={}",
                self.source_key
            );
            return;
        }

        let next = self.load_items();
        debug!(
            "event=widget_invalidate module=projection status=ok key={} rows={}",
            self.source_key,
            next.len()
        );
        if let Phase::Attached { items } = &mut self.phase {
            *items = next;
        }
    }

    /// Stops serving and drops the held list.
    ///
    /// The adapter may be re-attached afterward.
    pub fn detach(&mut self) {
        info!(
            "event=widget_detach module=projection status=ok key={}",
            self.source_key
        );
        self.phase = Phase::Detached;
    }

    /// Number of rows currently held; `0` outside the attached state.
    pub fn count(&self) -> usize {
        match &self.phase {
            Phase::Attached { items } => items.len(),
            _ => 0,
        }
    }

    /// Row at `position`, or `None` when out of range or not attached.
    pub fn item_at(&self, position: usize) -> Option<&NoteSummary> {
        match &self.phase {
            Phase::Attached { items } => items.get(position),
            _ => None,
        }
    }

    /// Stable identity for `position`.
    ///
    /// Identity is the position itself; snapshot rows carry no cross-refresh
    /// identity, so ids shift when the list reorders between refreshes.
    pub fn stable_id(&self, position: usize) -> i64 {
        position as i64
    }

    /// Number of row templates; the host renders a single template.
    pub fn view_type_count(&self) -> usize {
        1
    }

    /// Whether [`Self::stable_id`] values are meaningful to the host.
    pub fn has_stable_ids(&self) -> bool {
        true
    }

    /// Whether the adapter is currently serving rows.
    pub fn is_attached(&self) -> bool {
        matches!(self.phase, Phase::Attached { .. })
    }

    /// The snapshot key this adapter projects.
    pub fn source_key(&self) -> &str {
        &self.source_key
    }

    fn load_items(&self) -> Vec<NoteSummary> {
        decode_note_list(&read_string(&self.store, &self.source_key))
    }
}
