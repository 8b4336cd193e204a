//! Round-trip, pruning and terminal laws of the snapshot history,
//! checked against real documents.

use storyline_editor::{ActionType, Document, EditMode, History};

/// A history with `pushes` recorded documents, each a distinct edit
fn recorded(pushes: usize) -> History<Document> {
    let mut history = History::new(Document::new());
    for step in 0..pushes {
        let current = history.present().clone();
        let (next, action) = match step % 3 {
            0 => (current.add_panel(0, 0), ActionType::CreatePanel),
            1 => (
                current.set_panel_text(0, 0, 0, format!("text {}", step)),
                ActionType::UpdatePanelText,
            ),
            _ => (current.add_chapter(), ActionType::CreateChapter),
        };
        history.record(next, action, EditMode::Normal);
    }
    history
}

#[test]
fn test_undo_n_then_redo_n_restores_present() {
    for pushes in 1..=8 {
        for n in 0..=pushes {
            let mut history = recorded(pushes);
            let before = history.present().clone();

            for _ in 0..n {
                assert!(history.undo());
            }
            for _ in 0..n {
                assert!(history.redo());
            }

            assert_eq!(history.present(), &before, "pushes={} n={}", pushes, n);
            assert_eq!(history.undo_levels(), pushes);
            assert_eq!(history.redo_levels(), 0);
        }
    }
}

#[test]
fn test_redo_then_undo_restores_present() {
    let mut history = recorded(5);
    history.undo();
    history.undo();
    let before = history.present().clone();

    history.redo();
    history.undo();
    assert_eq!(history.present(), &before);
}

#[test]
fn test_record_after_undo_prunes_future() {
    let mut history = recorded(4);
    history.undo();
    history.undo();

    let next = history.present().rename_chapter(0, "Fork");
    history.record(next.clone(), ActionType::RenameChapter, EditMode::Normal);

    assert_eq!(history.redo_levels(), 0);
    assert!(!history.redo());
    assert_eq!(history.present(), &next);
}

#[test]
fn test_terminal_transitions_leave_container_unchanged() {
    let mut fresh = History::new(Document::new());
    let snapshot = fresh.clone();
    assert!(!fresh.undo());
    assert_eq!(fresh, snapshot);

    let mut full = recorded(3);
    let snapshot = full.clone();
    assert!(!full.redo());
    assert_eq!(full, snapshot);
}

#[test]
fn test_every_snapshot_is_well_formed() {
    let mut history = recorded(12);
    while history.undo() {
        assert!(history.present().is_well_formed());
    }
    while history.redo() {
        assert!(history.present().is_well_formed());
    }
    assert!(history.past().all(|snapshot| snapshot.state.is_well_formed()));
}
