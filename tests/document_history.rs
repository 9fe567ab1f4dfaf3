use sketchpad::element::{Drawable, Element, factory};
use sketchpad::{Command, Document, SketchState};
use egui::{Color32, Pos2};

fn stroke(n: usize) -> Drawable {
    let start = Pos2::new(n as f32, n as f32);
    factory::create_stroke(start, 2.0, Color32::BLACK)
}

fn ids(drawables: &[Drawable]) -> Vec<sketchpad::id_generator::DrawableId> {
    drawables.iter().map(Element::id).collect()
}

#[test]
fn test_undo_counts_for_all_prefixes() {
    for n in 0..6 {
        for u in 0..=n {
            let mut doc = Document::new();
            for i in 0..n {
                doc.commit(stroke(i));
            }
            for _ in 0..u {
                assert!(doc.undo());
            }
            assert_eq!(doc.committed().len(), n - u);
            assert_eq!(doc.redo_buffer().len(), u);
        }
    }
}

#[test]
fn test_undo_then_redo_restores_same_instances() {
    let mut doc = Document::new();
    for i in 0..3 {
        doc.commit(stroke(i));
    }
    let before = doc.committed().to_vec();

    assert!(doc.undo());
    assert!(doc.redo());

    assert_eq!(doc.committed(), before.as_slice());
    assert_eq!(ids(doc.committed()), ids(&before));
    assert!(doc.redo_buffer().is_empty());
}

#[test]
fn test_new_commit_after_undo_discards_redo() {
    let mut doc = Document::new();
    for i in 0..3 {
        doc.commit(stroke(i));
    }
    doc.undo();
    doc.undo();
    assert_eq!((doc.committed().len(), doc.redo_buffer().len()), (1, 2));

    doc.commit(stroke(9));
    assert_eq!((doc.committed().len(), doc.redo_buffer().len()), (2, 0));
    assert!(!doc.redo());
    assert_eq!(doc.committed().len(), 2);
}

#[test]
fn test_committed_and_redo_never_share_a_drawable() {
    let mut doc = Document::new();
    for i in 0..4 {
        doc.commit(stroke(i));
    }
    for step in 0..10 {
        if step % 3 == 0 {
            doc.redo();
        } else {
            doc.undo();
        }
        let committed = ids(doc.committed());
        assert!(ids(doc.redo_buffer()).iter().all(|id| !committed.contains(id)));
        assert_eq!(committed.len() + doc.redo_buffer().len(), 4);
    }
}

#[test]
fn test_clear_always_empties_everything() {
    let mut state = SketchState::default();
    for i in 0..3 {
        state.document_mut().commit(stroke(i));
    }
    let _ = state.execute(Command::Undo);
    let _ = state.execute(Command::Clear);
    assert!(state.document().committed().is_empty());
    assert!(state.document().redo_buffer().is_empty());

    // Clearing an empty document is still fine.
    assert!(!state.execute(Command::Clear).is_needed());
    assert!(state.document().is_empty());
}

#[test]
fn test_undo_redo_commands_on_empty_document_are_noops() {
    let mut state = SketchState::default();
    assert!(!state.execute(Command::Undo).is_needed());
    assert!(!state.execute(Command::Redo).is_needed());
    assert!(state.document().is_empty());
}
