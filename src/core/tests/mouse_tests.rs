use crate::core::mouse::{MouseBindingTable, MouseButton, MouseCallback, MouseEventKind};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn counter() -> (MouseCallback, Arc<AtomicUsize>) {
    let count = Arc::new(AtomicUsize::new(0));
    let cloned = Arc::clone(&count);
    let callback: MouseCallback = Arc::new(move |_x, _y| {
        cloned.fetch_add(1, Ordering::SeqCst);
    });
    (callback, count)
}

#[test]
fn test_lookup_hits_only_the_bound_pair() {
    let mut table = MouseBindingTable::new();
    let (callback, _) = counter();

    table.register(MouseButton::Left, MouseEventKind::MouseDown, callback, true);

    assert!(table
        .lookup(MouseButton::Left, MouseEventKind::MouseDown)
        .is_some());
    assert!(table
        .lookup(MouseButton::Right, MouseEventKind::MouseDown)
        .is_none());
    assert!(table
        .lookup(MouseButton::Left, MouseEventKind::MouseUp)
        .is_none());
}

#[test]
fn test_reregistration_replaces_binding() {
    let mut table = MouseBindingTable::new();
    let (first, first_count) = counter();
    let (second, second_count) = counter();

    table.register(MouseButton::Left, MouseEventKind::MouseDown, first, true);
    table.register(MouseButton::Left, MouseEventKind::MouseDown, second, false);

    assert_eq!(table.len(), 1);

    let (callback, handled) = table
        .lookup(MouseButton::Left, MouseEventKind::MouseDown)
        .unwrap();
    assert!(!handled);

    callback(0, 0);
    assert_eq!(first_count.load(Ordering::SeqCst), 0);
    assert_eq!(second_count.load(Ordering::SeqCst), 1);
}

#[test]
fn test_unregister() {
    let mut table = MouseBindingTable::new();
    let (callback, _) = counter();

    table.register(MouseButton::Middle, MouseEventKind::DoubleClick, callback, false);

    assert!(table.unregister(MouseButton::Middle, MouseEventKind::DoubleClick));
    assert!(!table.unregister(MouseButton::Middle, MouseEventKind::DoubleClick));
    assert!(table.is_empty());
}

#[test]
fn test_clear() {
    let mut table = MouseBindingTable::new();
    let (first, _) = counter();
    let (second, _) = counter();

    table.register(MouseButton::Left, MouseEventKind::MouseDown, first, true);
    table.register(MouseButton::None, MouseEventKind::MouseWheel, second, false);

    table.clear();
    assert!(table.is_empty());
}
