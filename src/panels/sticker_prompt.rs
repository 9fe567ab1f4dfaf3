use eframe::egui;

/// Result of showing the custom sticker prompt for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    Pending,
    Submitted(String),
    Cancelled,
}

/// Modal one-line text prompt for a custom sticker.
#[derive(Debug, Default)]
pub struct StickerPrompt {
    text: String,
    focus_requested: bool,
}

impl StickerPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, ctx: &egui::Context) -> PromptOutcome {
        let mut outcome = PromptOutcome::Pending;

        egui::Window::new("Custom sticker")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("Type an emoji or some text:");
                let response = ui.text_edit_singleline(&mut self.text);
                if !self.focus_requested {
                    response.request_focus();
                    self.focus_requested = true;
                }
                let entered = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                ui.horizontal(|ui| {
                    if ui.button("Add").clicked() || entered {
                        outcome = PromptOutcome::Submitted(std::mem::take(&mut self.text));
                    }
                    if ui.button("Cancel").clicked() {
                        outcome = PromptOutcome::Cancelled;
                    }
                });
            });

        if outcome == PromptOutcome::Pending && ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            outcome = PromptOutcome::Cancelled;
        }
        outcome
    }
}
