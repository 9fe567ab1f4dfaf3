use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Shape, Stroke, Vec2};

use super::{PenState, Surface};

/// Live on-screen surface drawing through an egui painter.
///
/// Surface coordinates are mapped into `rect`, scaled so the logical
/// canvas fills it.
pub struct PainterSurface {
    painter: Painter,
    rect: Rect,
    canvas_size: Vec2,
    background: Color32,
    pen: PenState,
}

impl PainterSurface {
    pub fn new(painter: &Painter, rect: Rect, canvas_size: Vec2, background: Color32) -> Self {
        Self {
            painter: painter.with_clip_rect(rect),
            rect,
            canvas_size,
            background,
            pen: PenState::default(),
        }
    }

    fn scale(&self) -> f32 {
        if self.canvas_size.x > 0.0 {
            self.rect.width() / self.canvas_size.x
        } else {
            1.0
        }
    }

    fn to_screen(&self, pos: Pos2) -> Pos2 {
        self.rect.min + pos.to_vec2() * self.scale()
    }
}

impl Surface for PainterSurface {
    fn size(&self) -> Vec2 {
        self.canvas_size
    }

    fn clear(&mut self) {
        self.painter.rect_filled(self.rect, 0.0, self.background);
    }

    fn set_line_width(&mut self, width: f32) {
        self.pen.line_width = width;
    }

    fn set_color(&mut self, color: Color32) {
        self.pen.color = color;
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.pen.alpha = alpha;
    }

    fn set_font_size(&mut self, size: f32) {
        self.pen.font_size = size;
    }

    fn stroke_path(&mut self, points: &[Pos2]) {
        let color = self.pen.paint_color();
        let width = self.pen.line_width * self.scale();
        match points {
            [] => {}
            [point] => {
                self.painter.circle_filled(self.to_screen(*point), width / 2.0, color);
            }
            _ => {
                let screen_points: Vec<Pos2> = points.iter().map(|p| self.to_screen(*p)).collect();
                self.painter.add(Shape::line(screen_points, Stroke::new(width, color)));
            }
        }
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32) {
        self.painter.circle_filled(
            self.to_screen(center),
            radius * self.scale(),
            self.pen.paint_color(),
        );
    }

    fn fill_text(&mut self, text: &str, center: Pos2) {
        self.painter.text(
            self.to_screen(center),
            Align2::CENTER_CENTER,
            text,
            FontId::proportional(self.pen.font_size * self.scale()),
            self.pen.paint_color(),
        );
    }
}
