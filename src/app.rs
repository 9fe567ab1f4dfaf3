use crate::command::Command;
use crate::config::SketchConfig;
use crate::error::SketchError;
use crate::input::InputHandler;
use crate::panels::{self, PromptOutcome, StickerPrompt};
use crate::shortcuts;
use crate::state::SketchState;

/// The eframe application: sketch state plus the egui glue around it.
pub struct SketchApp {
    state: SketchState,
    input: InputHandler,
    sticker_prompt: Option<StickerPrompt>,
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self, SketchError> {
        if cc.gl.is_none() {
            return Err(SketchError::SurfaceInit(
                "no OpenGL context available for the canvas".to_owned(),
            ));
        }
        Ok(Self::with_config(SketchConfig::load()))
    }

    pub fn with_config(config: SketchConfig) -> Self {
        log::info!(
            "Canvas {}x{}, export x{} to {}",
            config.canvas_width,
            config.canvas_height,
            config.export_scale,
            config.export_file_name
        );
        Self {
            input: InputHandler::new(config.canvas_size()),
            state: SketchState::new(config),
            sticker_prompt: None,
        }
    }

    pub fn state(&self) -> &SketchState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut SketchState {
        &mut self.state
    }

    pub(crate) fn input_mut(&mut self) -> &mut InputHandler {
        &mut self.input
    }

    pub fn is_prompt_open(&self) -> bool {
        self.sticker_prompt.is_some()
    }

    pub fn open_sticker_prompt(&mut self) {
        self.sticker_prompt = Some(StickerPrompt::new());
    }

    /// Run a command and schedule a repaint if it changed anything visible.
    pub fn apply(&mut self, ctx: &egui::Context, command: Command) {
        if self.state.execute(command).is_needed() {
            ctx.request_repaint();
        }
    }

    fn show_sticker_prompt(&mut self, ctx: &egui::Context) {
        let Some(prompt) = self.sticker_prompt.as_mut() else {
            return;
        };
        match prompt.show(ctx) {
            PromptOutcome::Pending => {}
            PromptOutcome::Submitted(text) => {
                self.sticker_prompt = None;
                self.apply(ctx, Command::AddCustomSticker(text));
            }
            PromptOutcome::Cancelled => {
                log::debug!("Custom sticker prompt cancelled");
                self.sticker_prompt = None;
            }
        }
    }
}

impl eframe::App for SketchApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.is_prompt_open() {
            for command in shortcuts::poll(ctx) {
                self.apply(ctx, command);
            }
        }

        panels::tools_panel(self, ctx);
        panels::central_panel(self, ctx);
        self.show_sticker_prompt(ctx);
    }
}
