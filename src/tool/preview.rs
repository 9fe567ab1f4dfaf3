use egui::{Color32, Pos2};

use crate::element::STICKER_COLOR;
use crate::surface::Surface;

/// Advisory rendering of the armed tool at the pointer. Never committed.
#[derive(Debug, Clone, PartialEq)]
pub enum Preview {
    /// Translucent dot showing the marker footprint.
    Marker {
        center: Pos2,
        radius: f32,
        color: Color32,
        alpha: f32,
    },
    /// Translucent copy of the armed sticker.
    Sticker {
        glyph: String,
        center: Pos2,
        size: f32,
        alpha: f32,
    },
}

impl Preview {
    pub fn render(&self, surface: &mut dyn Surface) {
        match self {
            Preview::Marker {
                center,
                radius,
                color,
                alpha,
            } => {
                surface.set_alpha(*alpha);
                surface.set_color(*color);
                surface.fill_circle(*center, *radius);
            }
            Preview::Sticker {
                glyph,
                center,
                size,
                alpha,
            } => {
                surface.set_alpha(*alpha);
                surface.set_color(STICKER_COLOR);
                surface.set_font_size(*size);
                surface.fill_text(glyph, *center);
            }
        }
    }
}
