use egui::Pos2;

use crate::id_generator::DrawableId;
use crate::surface::Surface;

pub(crate) mod common;
mod sticker;
mod stroke;

pub use sticker::{STICKER_COLOR, Sticker};
pub use stroke::StrokeLine;

/// Common trait that all drawables implement
pub trait Element {
    /// Get the unique identifier for this element
    fn id(&self) -> DrawableId;

    /// Get the element type as a string
    fn element_type(&self) -> &'static str;

    /// Grow the element while its gesture is still active
    fn extend(&mut self, point: Pos2);

    /// Replay the element onto a surface.
    ///
    /// Sets every pen property it relies on first, so replaying is
    /// idempotent regardless of what was drawn before.
    fn render(&self, surface: &mut dyn Surface);
}

/// A committed or in-progress unit of drawing
#[derive(Debug, Clone, PartialEq)]
pub enum Drawable {
    Stroke(StrokeLine),
    Sticker(Sticker),
}

impl Drawable {
    pub fn as_stroke(&self) -> Option<&StrokeLine> {
        match self {
            Drawable::Stroke(stroke) => Some(stroke),
            Drawable::Sticker(_) => None,
        }
    }

    pub fn as_sticker(&self) -> Option<&Sticker> {
        match self {
            Drawable::Sticker(sticker) => Some(sticker),
            Drawable::Stroke(_) => None,
        }
    }
}

impl Element for Drawable {
    fn id(&self) -> DrawableId {
        match self {
            Drawable::Stroke(s) => s.id(),
            Drawable::Sticker(s) => s.id(),
        }
    }

    fn element_type(&self) -> &'static str {
        match self {
            Drawable::Stroke(s) => s.element_type(),
            Drawable::Sticker(s) => s.element_type(),
        }
    }

    fn extend(&mut self, point: Pos2) {
        match self {
            Drawable::Stroke(s) => s.extend(point),
            Drawable::Sticker(s) => s.extend(point),
        }
    }

    fn render(&self, surface: &mut dyn Surface) {
        match self {
            Drawable::Stroke(s) => s.render(surface),
            Drawable::Sticker(s) => s.render(surface),
        }
    }
}

/// Factory functions for creating drawables
pub mod factory {
    use super::*;
    use crate::id_generator::generate_id;
    use egui::Color32;

    /// Begin a stroke at `start`. Width and color stay fixed for its lifetime.
    pub fn create_stroke(start: Pos2, width: f32, color: Color32) -> Drawable {
        Drawable::Stroke(StrokeLine::new(generate_id(), start, width, color))
    }

    /// Stamp `glyph` at `start`, drawn at `size` pixels.
    pub fn create_sticker(glyph: impl Into<String>, start: Pos2, size: f32) -> Drawable {
        Drawable::Sticker(Sticker::new(generate_id(), glyph.into(), start, size))
    }
}
