use egui::Color32;

use crate::renderer::Redraw;
use crate::state::SketchState;
use crate::tool::MarkerStyle;

/// Discrete user actions from the tool panel, action buttons, and shortcuts.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Undo,
    Redo,
    /// Discard the whole drawing including redo history
    Clear,
    /// Save the committed drawing as an upscaled PNG
    Export,
    SelectMarker(MarkerStyle),
    /// Arm the sticker at this index of the sticker set
    ArmSticker(usize),
    /// Append a user-supplied sticker and arm it
    AddCustomSticker(String),
    SetColor(Color32),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Undo => "Undo",
            Command::Redo => "Redo",
            Command::Clear => "Clear",
            Command::Export => "Export",
            Command::SelectMarker(_) => "SelectMarker",
            Command::ArmSticker(_) => "ArmSticker",
            Command::AddCustomSticker(_) => "AddCustomSticker",
            Command::SetColor(_) => "SetColor",
        }
    }

    /// Apply the command. Every command completes in one step or is a no-op.
    pub fn execute(self, state: &mut SketchState) -> Redraw {
        log::debug!("Executing command: {}", self.name());
        match self {
            Command::Undo => Redraw::from_changed(state.document_mut().undo()),
            Command::Redo => Redraw::from_changed(state.document_mut().redo()),
            Command::Clear => {
                let cancelled = state.controller_mut().cancel();
                let cleared = state.document_mut().clear();
                Redraw::from_changed(cancelled || cleared)
            }
            Command::Export => {
                state.export();
                Redraw::NotNeeded
            }
            Command::SelectMarker(style) => {
                state.tools_mut().select_marker(style);
                Redraw::Needed
            }
            Command::ArmSticker(index) => Redraw::from_changed(state.tools_mut().arm_sticker_at(index)),
            Command::AddCustomSticker(text) => {
                Redraw::from_changed(state.tools_mut().add_custom_sticker(&text))
            }
            Command::SetColor(color) => {
                state.tools_mut().set_color(color);
                Redraw::Needed
            }
        }
    }
}
