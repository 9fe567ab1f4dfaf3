use egui::{Color32, Pos2};

use super::Element;
use crate::id_generator::DrawableId;
use crate::surface::Surface;

/// Freehand marker line. Width and color are fixed at creation; points are
/// append-only and kept in drawing order.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeLine {
    id: DrawableId,
    points: Vec<Pos2>,
    width: f32,
    color: Color32,
}

impl StrokeLine {
    pub(crate) fn new(id: DrawableId, start: Pos2, width: f32, color: Color32) -> Self {
        Self {
            id,
            points: vec![start],
            width,
            color,
        }
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn color(&self) -> Color32 {
        self.color
    }
}

impl Element for StrokeLine {
    fn id(&self) -> DrawableId {
        self.id
    }

    fn element_type(&self) -> &'static str {
        "stroke"
    }

    fn extend(&mut self, point: Pos2) {
        self.points.push(point);
    }

    fn render(&self, surface: &mut dyn Surface) {
        if self.points.is_empty() {
            return;
        }
        surface.set_alpha(1.0);
        surface.set_line_width(self.width);
        surface.set_color(self.color);
        surface.stroke_path(&self.points);
    }
}
