use crate::element::{Drawable, Element};

/// The drawing: committed drawables in z-order plus the redo buffer.
///
/// A drawable lives in at most one of the two collections. Committing a new
/// drawable discards the redo buffer, so redo only ever replays an
/// unbranched timeline.
#[derive(Debug, Default)]
pub struct Document {
    committed: Vec<Drawable>,
    redo_buffer: Vec<Drawable>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed drawables, earliest (bottom) first.
    pub fn committed(&self) -> &[Drawable] {
        &self.committed
    }

    /// Undone drawables, most recently undone last.
    pub fn redo_buffer(&self) -> &[Drawable] {
        &self.redo_buffer
    }

    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_buffer.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.committed.is_empty() && self.redo_buffer.is_empty()
    }

    /// Append a finished drawable on top and drop any redo history.
    pub fn commit(&mut self, drawable: Drawable) {
        log::info!(
            "Committed {} {} (discarding {} redoable)",
            drawable.element_type(),
            drawable.id(),
            self.redo_buffer.len()
        );
        self.committed.push(drawable);
        self.redo_buffer.clear();
    }

    /// Move the top drawable to the redo buffer. Returns false if there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.committed.pop() {
            Some(drawable) => {
                log::info!("Undo {} {}", drawable.element_type(), drawable.id());
                self.redo_buffer.push(drawable);
                true
            }
            None => false,
        }
    }

    /// Move the most recently undone drawable back on top. Returns false if there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.redo_buffer.pop() {
            Some(drawable) => {
                log::info!("Redo {} {}", drawable.element_type(), drawable.id());
                self.committed.push(drawable);
                true
            }
            None => false,
        }
    }

    /// Discard everything, including redo history. Returns false if the document was already empty.
    pub fn clear(&mut self) -> bool {
        let had_content = !self.is_empty();
        log::info!(
            "Clear ({} committed, {} redoable)",
            self.committed.len(),
            self.redo_buffer.len()
        );
        self.committed.clear();
        self.redo_buffer.clear();
        had_content
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::factory;
    use egui::{Color32, Pos2};

    fn stroke_at(x: f32) -> Drawable {
        factory::create_stroke(Pos2::new(x, x), 2.0, Color32::BLACK)
    }

    #[test]
    fn test_undo_redo_on_empty_are_noops() {
        let mut doc = Document::new();
        assert!(!doc.undo());
        assert!(!doc.redo());
        assert!(doc.is_empty());
    }

    #[test]
    fn test_undo_moves_tail_to_redo_buffer() {
        let mut doc = Document::new();
        let (a, b, c) = (stroke_at(1.0), stroke_at(2.0), stroke_at(3.0));
        let ids = [a.id(), b.id(), c.id()];
        doc.commit(a);
        doc.commit(b);
        doc.commit(c);

        assert!(doc.undo());
        assert!(doc.undo());
        let committed: Vec<_> = doc.committed().iter().map(Element::id).collect();
        let redo: Vec<_> = doc.redo_buffer().iter().map(Element::id).collect();
        assert_eq!(committed, vec![ids[0]]);
        assert_eq!(redo, vec![ids[2], ids[1]]);

        assert!(doc.redo());
        let committed: Vec<_> = doc.committed().iter().map(Element::id).collect();
        let redo: Vec<_> = doc.redo_buffer().iter().map(Element::id).collect();
        assert_eq!(committed, vec![ids[0], ids[1]]);
        assert_eq!(redo, vec![ids[2]]);
    }

    #[test]
    fn test_commit_discards_redo_buffer() {
        let mut doc = Document::new();
        for i in 0..3 {
            doc.commit(stroke_at(i as f32));
        }
        doc.undo();
        doc.undo();
        assert_eq!(doc.redo_buffer().len(), 2);

        doc.commit(stroke_at(10.0));
        assert_eq!(doc.committed().len(), 2);
        assert!(doc.redo_buffer().is_empty());
        assert!(!doc.redo());
    }

    #[test]
    fn test_clear_empties_both_collections() {
        let mut doc = Document::new();
        doc.commit(stroke_at(1.0));
        doc.commit(stroke_at(2.0));
        doc.undo();
        assert!(doc.clear());
        assert!(doc.committed().is_empty());
        assert!(doc.redo_buffer().is_empty());
        assert!(!doc.clear());
    }
}
