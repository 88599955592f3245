use super::*;
use crate::consts::MAX_HISTORY;
use crate::surface::Rgba;

fn marked_surface(mark: u8) -> Surface {
    let mut surface = Surface::new(16, 12);
    surface.set_pixel(3, 3, Rgba::opaque(mark, 0, 0));
    surface
}

fn snapshot_of(mark: u8) -> Snapshot {
    Snapshot::capture(&marked_surface(mark)).unwrap()
}

// =============================================================
// Snapshot encode/decode
// =============================================================

#[test]
fn capture_restore_roundtrips_exact_pixels() {
    let original = marked_surface(200);
    let snapshot = Snapshot::capture(&original).unwrap();
    let mut target = Surface::new(16, 12);
    assert_ne!(target.pixels(), original.pixels());
    snapshot.restore_into(&mut target).unwrap();
    assert_eq!(target.pixels(), original.pixels());
}

#[test]
fn snapshot_records_dimensions() {
    let snapshot = snapshot_of(1);
    assert_eq!(snapshot.width(), 16);
    assert_eq!(snapshot.height(), 12);
    assert!(snapshot.encoded_len() > 0);
}

#[test]
fn restore_into_wrong_size_surface_fails() {
    let snapshot = snapshot_of(1);
    let mut target = Surface::new(8, 8);
    let err = snapshot.restore_into(&mut target).unwrap_err();
    assert!(matches!(err, SnapshotError::SizeMismatch { .. }));
}

// =============================================================
// Cursor movement
// =============================================================

#[test]
fn new_history_has_one_entry_and_no_moves() {
    let history = History::new(snapshot_of(0));
    assert_eq!(history.len(), 1);
    assert_eq!(history.cursor(), 0);
    assert!(!history.can_undo());
    assert!(!history.can_redo());
    assert!(!history.is_empty());
}

#[test]
fn push_advances_cursor_to_newest() {
    let mut history = History::new(snapshot_of(0));
    history.push(snapshot_of(1));
    history.push(snapshot_of(2));
    assert_eq!(history.len(), 3);
    assert_eq!(history.cursor(), 2);
    assert!(history.can_undo());
    assert!(!history.can_redo());
}

#[test]
fn undo_walks_back_redo_walks_forward() {
    let mut history = History::new(snapshot_of(0));
    history.push(snapshot_of(1));
    history.push(snapshot_of(2));

    assert!(history.undo().is_some());
    assert_eq!(history.cursor(), 1);
    assert!(history.can_redo());

    assert!(history.undo().is_some());
    assert_eq!(history.cursor(), 0);
    assert!(history.undo().is_none());

    assert!(history.redo().is_some());
    assert_eq!(history.cursor(), 1);
    assert!(history.redo().is_some());
    assert!(history.redo().is_none());
}

#[test]
fn current_tracks_the_cursor() {
    let original = marked_surface(7);
    let mut history = History::new(Snapshot::capture(&Surface::new(16, 12)).unwrap());
    history.push(Snapshot::capture(&original).unwrap());
    history.undo();
    history.redo();
    let mut target = Surface::new(16, 12);
    history.current().restore_into(&mut target).unwrap();
    assert_eq!(target.pixels(), original.pixels());
}

// =============================================================
// Truncation on new edits
// =============================================================

#[test]
fn push_after_undo_discards_forward_entries() {
    let mut history = History::new(snapshot_of(0));
    history.push(snapshot_of(1));
    history.push(snapshot_of(2));
    history.undo();
    history.undo();
    assert_eq!(history.cursor(), 0);

    history.push(snapshot_of(9));
    assert_eq!(history.len(), 2);
    assert_eq!(history.cursor(), 1);
    assert!(!history.can_redo());
}

// =============================================================
// Capacity cap
// =============================================================

#[test]
fn history_never_exceeds_cap() {
    let mut history = History::new(snapshot_of(0));
    for i in 0..(MAX_HISTORY + 10) {
        #[allow(clippy::cast_possible_truncation)]
        history.push(snapshot_of(i as u8));
    }
    assert_eq!(history.len(), MAX_HISTORY);
    assert_eq!(history.cursor(), MAX_HISTORY - 1);
    assert!(history.can_undo());
    assert!(!history.can_redo());
}
