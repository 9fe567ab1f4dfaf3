use crate::document::Document;
use crate::element::{Drawable, Element};
use crate::surface::Surface;
use crate::tool::Preview;

/// Transient content drawn above the committed drawing.
#[derive(Debug, Clone, PartialEq)]
pub enum Overlay<'a> {
    None,
    /// The drawable of the gesture in progress.
    Active(&'a Drawable),
    /// The armed tool at the pointer position.
    Preview(Preview),
}

/// Whether a state change has to be reflected on the surface.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redraw {
    Needed,
    NotNeeded,
}

impl Redraw {
    pub fn from_changed(changed: bool) -> Self {
        if changed { Redraw::Needed } else { Redraw::NotNeeded }
    }

    pub fn is_needed(self) -> bool {
        self == Redraw::Needed
    }

    pub fn or(self, other: Redraw) -> Redraw {
        Redraw::from_changed(self.is_needed() || other.is_needed())
    }
}

/// Repaint the whole surface from scratch.
///
/// The surface is cleared, every committed drawable is replayed in order, and
/// the overlay (if any) goes on top. The output depends only on the inputs,
/// never on what the surface showed before.
pub fn render(surface: &mut dyn Surface, document: &Document, overlay: &Overlay<'_>) {
    surface.clear();
    replay(surface, document.committed());
    match overlay {
        Overlay::None => {}
        Overlay::Active(drawable) => drawable.render(surface),
        Overlay::Preview(preview) => preview.render(surface),
    }
}

/// Replay drawables in z-order without clearing first.
pub fn replay(surface: &mut dyn Surface, drawables: &[Drawable]) {
    for drawable in drawables {
        drawable.render(surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::factory;
    use crate::surface::{RecordingSurface, SurfaceOp};
    use egui::{Color32, Pos2, Vec2};

    #[test]
    fn test_render_clears_first_then_replays_in_order() {
        let mut doc = Document::new();
        doc.commit(factory::create_stroke(Pos2::new(1.0, 1.0), 2.0, Color32::BLACK));
        doc.commit(factory::create_sticker("⭐", Pos2::new(9.0, 9.0), 32.0));

        let mut surface = RecordingSurface::new(Vec2::splat(64.0));
        render(&mut surface, &doc, &Overlay::None);

        let ops = surface.ops();
        assert_eq!(ops.first(), Some(&SurfaceOp::Clear));
        let stroke_at = ops.iter().position(|op| matches!(op, SurfaceOp::StrokePath(_)));
        let text_at = ops.iter().position(|op| matches!(op, SurfaceOp::FillText { .. }));
        assert!(stroke_at.unwrap() < text_at.unwrap());
    }

    #[test]
    fn test_overlay_is_drawn_last() {
        let doc = Document::new();
        let preview = Preview::Marker {
            center: Pos2::new(3.0, 3.0),
            radius: 2.0,
            color: Color32::RED,
            alpha: 0.3,
        };
        let mut surface = RecordingSurface::new(Vec2::splat(64.0));
        render(&mut surface, &doc, &Overlay::Preview(preview));
        assert_eq!(
            surface.ops().last(),
            Some(&SurfaceOp::FillCircle {
                center: Pos2::new(3.0, 3.0),
                radius: 2.0
            })
        );
    }

    #[test]
    fn test_redraw_combination() {
        assert!(Redraw::NotNeeded.or(Redraw::Needed).is_needed());
        assert!(!Redraw::NotNeeded.or(Redraw::NotNeeded).is_needed());
    }
}
