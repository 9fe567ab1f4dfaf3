use eframe::egui;

use crate::app::SketchApp;
use crate::command::Command;
use crate::components::ToolButton;
use crate::shortcuts;
use crate::tool::MarkerStyle;

pub fn tools_panel(app: &mut SketchApp, ctx: &egui::Context) {
    let mut commands = Vec::new();
    let mut open_prompt = false;

    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(180.0)
        .show(ctx, |ui| {
            let enabled = !app.is_prompt_open();
            ui.add_enabled_ui(enabled, |ui| {
                let state = app.state();
                let tools = state.tools();

                ui.heading("Sketchpad");
                ui.separator();

                ui.label("Markers");
                ui.horizontal(|ui| {
                    for (style, icon) in [(MarkerStyle::Thin, "✏"), (MarkerStyle::Thick, "🖊")] {
                        let selected = tools.selected_marker() == Some(style);
                        if ToolButton::new(icon, style.name(), selected).show(ui).clicked() {
                            commands.push(Command::SelectMarker(style));
                        }
                    }
                });

                ui.horizontal(|ui| {
                    ui.label("Color:");
                    let mut color = tools.color();
                    if egui::color_picker::color_edit_button_srgba(
                        ui,
                        &mut color,
                        egui::color_picker::Alpha::Opaque,
                    )
                    .changed()
                    {
                        commands.push(Command::SetColor(color));
                    }
                });

                ui.separator();
                ui.label("Stickers");
                ui.horizontal_wrapped(|ui| {
                    for (index, glyph) in tools.stickers().iter().enumerate() {
                        let selected = tools.armed_sticker() == Some(glyph);
                        if ToolButton::new(glyph, "Place sticker", selected).show(ui).clicked() {
                            commands.push(Command::ArmSticker(index));
                        }
                    }
                    if ToolButton::new("➕", "Add custom sticker", false).show(ui).clicked() {
                        open_prompt = true;
                    }
                });

                ui.separator();
                let document = state.document();
                ui.horizontal(|ui| {
                    action_button(ui, "Undo", document.can_undo(), Command::Undo, &mut commands);
                    action_button(ui, "Redo", document.can_redo(), Command::Redo, &mut commands);
                });
                ui.horizontal(|ui| {
                    let can_clear = !document.is_empty() || state.controller().is_drawing();
                    action_button(ui, "Clear", can_clear, Command::Clear, &mut commands);
                    action_button(ui, "Export", true, Command::Export, &mut commands);
                });

                ui.separator();
                ui.label(format!(
                    "Drawn: {}  Redoable: {}",
                    document.committed().len(),
                    document.redo_buffer().len()
                ));
                match state.last_export() {
                    Some(Ok(outcome)) => {
                        ui.label(format!(
                            "Saved {} ({}x{})",
                            outcome.location, outcome.width, outcome.height
                        ));
                    }
                    Some(Err(err)) => {
                        ui.colored_label(ui.visuals().error_fg_color, format!("Export failed: {err}"));
                    }
                    None => {}
                }
            });
        });

    if open_prompt {
        app.open_sticker_prompt();
    }
    for command in commands {
        app.apply(ctx, command);
    }
}

/// Button for a document action, with its keyboard shortcut on hover.
fn action_button(ui: &mut egui::Ui, label: &str, enabled: bool, command: Command, commands: &mut Vec<Command>) {
    let mut response = ui.add_enabled(enabled, egui::Button::new(label));
    if let Some(hint) = shortcuts::hint(ui.ctx(), &command) {
        response = response.on_hover_text(hint);
    }
    if response.clicked() {
        commands.push(command);
    }
}
