use crate::command::Command;
use crate::config::SketchConfig;
use crate::document::Document;
use crate::export::{ExportOutcome, Exporter};
use crate::input::{InputController, InputEvent};
use crate::renderer::{self, Overlay, Redraw};
use crate::surface::Surface;
use crate::tool::ToolState;

/// All mutable sketchpad state in one place: the drawing, the tool
/// selection, and the gesture in progress.
#[derive(Debug)]
pub struct SketchState {
    config: SketchConfig,
    document: Document,
    tools: ToolState,
    controller: InputController,
    exporter: Exporter,
    last_export: Option<Result<ExportOutcome, String>>,
}

impl Default for SketchState {
    fn default() -> Self {
        Self::new(SketchConfig::default())
    }
}

impl SketchState {
    pub fn new(config: SketchConfig) -> Self {
        Self {
            document: Document::new(),
            tools: ToolState::new(&config),
            controller: InputController::new(&config),
            exporter: Exporter::new(&config),
            last_export: None,
            config,
        }
    }

    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub fn tools_mut(&mut self) -> &mut ToolState {
        &mut self.tools
    }

    pub fn controller(&self) -> &InputController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut InputController {
        &mut self.controller
    }

    /// Outcome of the most recent export, if any.
    pub fn last_export(&self) -> Option<&Result<ExportOutcome, String>> {
        self.last_export.as_ref()
    }

    pub fn handle_input(&mut self, event: &InputEvent) -> Redraw {
        self.controller
            .handle_event(event, &mut self.document, &mut self.tools)
    }

    pub fn execute(&mut self, command: Command) -> Redraw {
        command.execute(self)
    }

    /// Export the committed drawing, remembering the outcome for the status line.
    pub fn export(&mut self) -> Option<&ExportOutcome> {
        let result = self.exporter.export(&self.document).map_err(|err| {
            log::error!("Export failed: {}", err);
            err.to_string()
        });
        self.last_export = Some(result);
        self.last_export.as_ref().and_then(|result| result.as_ref().ok())
    }

    pub fn overlay(&self) -> Overlay<'_> {
        self.controller.overlay(&self.tools)
    }

    /// Full repaint of the current drawing plus active gesture or preview.
    pub fn render(&self, surface: &mut dyn Surface) {
        renderer::render(surface, &self.document, &self.overlay());
    }
}
