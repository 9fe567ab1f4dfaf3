use eframe::egui;

use crate::app::SketchApp;
use crate::renderer::Redraw;
use crate::surface::PainterSurface;

/// Paper color behind the drawing on screen. Exports stay transparent.
pub const CANVAS_BACKGROUND: egui::Color32 = egui::Color32::WHITE;

pub fn central_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let canvas_size = app.state().config().canvas_size();
        let (response, painter) = ui.allocate_painter(canvas_size, egui::Sense::drag());
        let rect = response.rect;
        app.input_mut().set_canvas(rect, painter.layer_id());

        // The sticker prompt is modal: the canvas ignores the pointer while it is open.
        if !app.is_prompt_open() {
            let events = app.input_mut().process_input(ctx);
            let mut redraw = Redraw::NotNeeded;
            for event in &events {
                redraw = redraw.or(app.state_mut().handle_input(event));
            }
            if redraw.is_needed() {
                ctx.request_repaint();
            }
        }

        let mut surface = PainterSurface::new(&painter, rect, canvas_size, CANVAS_BACKGROUND);
        app.state().render(&mut surface);

        // The tool preview stands in for the cursor over the canvas.
        if response.hovered() {
            ctx.set_cursor_icon(egui::CursorIcon::None);
        }
    });
}
