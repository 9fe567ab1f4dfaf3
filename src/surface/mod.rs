//! Drawing targets that drawables replay onto.
//!
//! A [`Surface`] behaves like an HTML canvas context: it carries a current
//! pen (line width, color, alpha, font size) that drawing calls consume.
//! Callers set every pen field they depend on before drawing and must not
//! assume the pen is restored afterwards.

use egui::{Color32, Pos2, Vec2};

mod painter;
mod raster;
mod recording;

pub use painter::PainterSurface;
pub use raster::RasterSurface;
pub use recording::{RecordingSurface, SurfaceOp};

/// Mutable drawing state shared by all calls on a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PenState {
    pub line_width: f32,
    pub color: Color32,
    pub alpha: f32,
    pub font_size: f32,
}

impl Default for PenState {
    fn default() -> Self {
        Self {
            line_width: 1.0,
            color: Color32::BLACK,
            alpha: 1.0,
            font_size: 16.0,
        }
    }
}

impl PenState {
    /// The pen color with the global alpha applied.
    pub fn paint_color(&self) -> Color32 {
        self.color.gamma_multiply(self.alpha.clamp(0.0, 1.0))
    }
}

pub trait Surface {
    /// Logical size in surface pixels, independent of any device scale.
    fn size(&self) -> Vec2;

    /// Erase everything drawn so far.
    fn clear(&mut self);

    fn set_line_width(&mut self, width: f32);

    fn set_color(&mut self, color: Color32);

    /// Global opacity multiplier in `0.0..=1.0`.
    fn set_alpha(&mut self, alpha: f32);

    fn set_font_size(&mut self, size: f32);

    /// Stroke a polyline through `points` with the current width and color.
    /// A single point draws a dot of the current width.
    fn stroke_path(&mut self, points: &[Pos2]);

    fn fill_circle(&mut self, center: Pos2, radius: f32);

    /// Draw `text` centered on `center` at the current font size.
    fn fill_text(&mut self, text: &str, center: Pos2);
}
