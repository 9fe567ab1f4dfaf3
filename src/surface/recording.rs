use egui::{Color32, Pos2, Vec2};

use super::Surface;

/// One call made against a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    Clear,
    LineWidth(f32),
    Color(Color32),
    Alpha(f32),
    FontSize(f32),
    StrokePath(Vec<Pos2>),
    FillCircle { center: Pos2, radius: f32 },
    FillText { text: String, center: Pos2 },
}

/// Surface that records every call instead of drawing, used to inspect
/// exactly what a render pass emitted.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    size: Vec2,
    ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn clear(&mut self) {
        self.ops.push(SurfaceOp::Clear);
    }

    fn set_line_width(&mut self, width: f32) {
        self.ops.push(SurfaceOp::LineWidth(width));
    }

    fn set_color(&mut self, color: Color32) {
        self.ops.push(SurfaceOp::Color(color));
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.ops.push(SurfaceOp::Alpha(alpha));
    }

    fn set_font_size(&mut self, size: f32) {
        self.ops.push(SurfaceOp::FontSize(size));
    }

    fn stroke_path(&mut self, points: &[Pos2]) {
        self.ops.push(SurfaceOp::StrokePath(points.to_vec()));
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32) {
        self.ops.push(SurfaceOp::FillCircle { center, radius });
    }

    fn fill_text(&mut self, text: &str, center: Pos2) {
        self.ops.push(SurfaceOp::FillText {
            text: text.to_owned(),
            center,
        });
    }
}
