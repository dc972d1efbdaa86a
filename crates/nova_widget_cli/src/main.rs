//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `nova_widget_core` linkage.
//! - Dump a widget's rendered state from a snapshot database for local
//!   inspection without a host shell.

use nova_widget_core::{
    CounterWidgetRenderer, EmptySnapshotStore, ListWidgetRenderer, SnapshotStore,
    SqliteSnapshotStore, WidgetKind,
};

fn main() {
    println!("nova_widget_core ping={}", nova_widget_core::ping());
    println!(
        "nova_widget_core version={}",
        nova_widget_core::core_version()
    );

    let mut args = std::env::args().skip(1);
    let Some(db_path) = args.next() else {
        return;
    };
    let kind = WidgetKind::from_launch_config(args.next().as_deref());

    let store: Box<dyn SnapshotStore> = match SqliteSnapshotStore::open(&db_path) {
        Ok(store) => Box::new(store),
        Err(err) => {
            println!("snapshot store unreadable ({err}); rendering empty state");
            Box::new(EmptySnapshotStore)
        }
    };

    if kind.is_list() {
        let mut renderer = ListWidgetRenderer::new(store, kind);
        renderer.attach();
        println!("widget kind={} rows={}", kind.label(), renderer.row_count());
        for position in 0..renderer.row_count() {
            let row = renderer.row_at(position);
            println!(
                "  [{position}] title={:?} preview={:?} note_id={:?}",
                row.title,
                row.preview,
                row.on_click.as_ref().and_then(|link| link.note_id())
            );
        }
    } else {
        let view = CounterWidgetRenderer::new(store).render();
        println!("widget kind={} text={:?}", kind.label(), view.text);
    }
}
