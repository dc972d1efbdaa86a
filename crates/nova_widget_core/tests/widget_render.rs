use nova_widget_core::{
    CounterWidgetRenderer, DeepLink, ListWidgetRenderer, MemorySnapshotStore, RowView, WidgetKind,
    KEY_NOTE_COUNT, KEY_PINNED_NOTES,
};

#[test]
fn list_rows_carry_open_note_payloads_in_order() {
    let store = MemorySnapshotStore::new();
    store.set_string(
        KEY_PINNED_NOTES,
        r#"[{"id":"a","title":"Alpha","preview":"first"},{"id":"b","title":"Beta"}]"#,
    );

    let mut renderer = ListWidgetRenderer::new(store, WidgetKind::PinnedList);
    renderer.attach();

    assert_eq!(renderer.row_count(), 2);

    let first = renderer.row_at(0);
    assert_eq!(first.title, "Alpha");
    assert_eq!(first.preview, "first");
    assert_eq!(first.on_click, Some(DeepLink::open_note("a")));

    let second = renderer.row_at(1);
    assert_eq!(second.title, "Beta");
    assert_eq!(second.preview, "");
    assert_eq!(second.on_click, Some(DeepLink::open_note("b")));
}

#[test]
fn out_of_range_row_is_neutral_with_no_payload() {
    let store = MemorySnapshotStore::new();
    store.set_string(KEY_PINNED_NOTES, r#"[{"id":"a"}]"#);

    let mut renderer = ListWidgetRenderer::new(store, WidgetKind::PinnedList);
    renderer.attach();

    let row = renderer.row_at(renderer.row_count());
    assert_eq!(row, RowView::neutral());
    assert!(row.on_click.is_none());
}

#[test]
fn detached_renderer_serves_only_neutral_rows() {
    let store = MemorySnapshotStore::new();
    store.set_string(KEY_PINNED_NOTES, r#"[{"id":"a"}]"#);

    let mut renderer = ListWidgetRenderer::new(store, WidgetKind::PinnedList);
    renderer.attach();
    renderer.detach();

    assert_eq!(renderer.row_count(), 0);
    assert_eq!(renderer.row_at(0), RowView::neutral());
}

#[test]
fn list_widget_template_opens_the_app() {
    let renderer = ListWidgetRenderer::new(MemorySnapshotStore::new(), WidgetKind::RecentList);
    assert_eq!(renderer.on_click_template(), DeepLink::open_app());
    assert_eq!(renderer.view_type_count(), 1);
    assert!(renderer.has_stable_ids());
}

#[test]
fn counter_renders_count_from_snapshot() {
    let store = MemorySnapshotStore::new();
    store.set_int(KEY_NOTE_COUNT, 5);

    let view = CounterWidgetRenderer::new(store).render();
    assert_eq!(view.text, "5 notes");
    assert_eq!(view.on_click, DeepLink::open_app());
}

#[test]
fn counter_with_absent_count_renders_zero() {
    let view = CounterWidgetRenderer::new(MemorySnapshotStore::new()).render();
    assert_eq!(view.text, "0 notes");
}
