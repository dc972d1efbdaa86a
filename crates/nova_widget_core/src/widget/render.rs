//! Per-kind widget renderers.
//!
//! # Responsibility
//! - Map adapter/counter state into the row and counter views the host
//!   paints, with interaction payloads attached.
//!
//! # Invariants
//! - Out-of-range row requests render the neutral empty row, never an error.
//! - Render calls read only; the snapshot store is never written.

use crate::link::DeepLink;
use crate::projection::adapter::NoteListAdapter;
use crate::store::{read_int, SnapshotStore, KEY_NOTE_COUNT};
use crate::widget::kind::WidgetKind;
use serde::Serialize;

/// One paintable list row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowView {
    pub title: String,
    pub preview: String,
    /// Row tap payload; absent on the neutral fallback row.
    pub on_click: Option<DeepLink>,
}

impl RowView {
    /// Empty row rendered for positions the projection cannot serve.
    pub fn neutral() -> Self {
        Self {
            title: String::new(),
            preview: String::new(),
            on_click: None,
        }
    }
}

/// Single-line counter view for the quick-note widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CounterView {
    pub text: String,
    pub on_click: DeepLink,
}

/// Renderer for the scrollable list kinds.
///
/// `RecentList` and `PinnedList` share this template; the kind only selects
/// which snapshot key feeds the projection.
pub struct ListWidgetRenderer<S: SnapshotStore> {
    kind: WidgetKind,
    adapter: NoteListAdapter<S>,
}

impl<S: SnapshotStore> ListWidgetRenderer<S> {
    /// Creates a renderer for a list kind over `store`.
    pub fn new(store: S, kind: WidgetKind) -> Self {
        Self {
            kind,
            adapter: NoteListAdapter::for_kind(store, kind),
        }
    }

    pub fn kind(&self) -> WidgetKind {
        self.kind
    }

    /// Host "begin serving" signal.
    pub fn attach(&mut self) {
        self.adapter.attach();
    }

    /// Host "data invalidated, re-synchronize" signal.
    pub fn on_invalidate(&mut self) {
        self.adapter.on_invalidate();
    }

    /// Host teardown signal.
    pub fn detach(&mut self) {
        self.adapter.detach();
    }

    pub fn row_count(&self) -> usize {
        self.adapter.count()
    }

    /// Renders the row at `position`.
    ///
    /// In-range rows carry an open-note payload for the decoded id;
    /// everything else renders the neutral row with no payload.
    pub fn row_at(&self, position: usize) -> RowView {
        match self.adapter.item_at(position) {
            Some(note) => RowView {
                title: note.title.clone(),
                preview: note.preview.clone(),
                on_click: Some(DeepLink::open_note(note.id.clone())),
            },
            None => RowView::neutral(),
        }
    }

    pub fn stable_id(&self, position: usize) -> i64 {
        self.adapter.stable_id(position)
    }

    pub fn view_type_count(&self) -> usize {
        self.adapter.view_type_count()
    }

    pub fn has_stable_ids(&self) -> bool {
        self.adapter.has_stable_ids()
    }

    /// Whole-widget tap payload, applied by the host as the row template
    /// fallback outside individual rows.
    pub fn on_click_template(&self) -> DeepLink {
        DeepLink::open_app()
    }
}

/// Renderer for the quick-note counter widget.
pub struct CounterWidgetRenderer<S: SnapshotStore> {
    store: S,
}

impl<S: SnapshotStore> CounterWidgetRenderer<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Renders the counter line from the current snapshot.
    ///
    /// An absent count renders as `"0 notes"`.
    pub fn render(&self) -> CounterView {
        let count = read_int(&self.store, KEY_NOTE_COUNT);
        CounterView {
            text: format!("{count} notes"),
            on_click: DeepLink::open_app(),
        }
    }
}
