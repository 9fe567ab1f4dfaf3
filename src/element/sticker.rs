use egui::{Color32, Pos2};

use super::Element;
use crate::id_generator::DrawableId;
use crate::surface::Surface;

/// Stickers are always drawn opaque in this color.
pub const STICKER_COLOR: Color32 = Color32::BLACK;

/// A glyph stamped at an anchor point.
#[derive(Debug, Clone, PartialEq)]
pub struct Sticker {
    id: DrawableId,
    glyph: String,
    anchor: Pos2,
    size: f32,
}

impl Sticker {
    pub(crate) fn new(id: DrawableId, glyph: String, anchor: Pos2, size: f32) -> Self {
        Self {
            id,
            glyph,
            anchor,
            size,
        }
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn anchor(&self) -> Pos2 {
        self.anchor
    }

    pub fn size(&self) -> f32 {
        self.size
    }
}

impl Element for Sticker {
    fn id(&self) -> DrawableId {
        self.id
    }

    fn element_type(&self) -> &'static str {
        "sticker"
    }

    /// Moves the anchor; the glyph never changes.
    fn extend(&mut self, point: Pos2) {
        self.anchor = point;
    }

    fn render(&self, surface: &mut dyn Surface) {
        surface.set_alpha(1.0);
        surface.set_color(STICKER_COLOR);
        surface.set_font_size(self.size);
        surface.fill_text(&self.glyph, self.anchor);
    }
}
