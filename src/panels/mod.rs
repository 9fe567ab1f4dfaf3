mod central_panel;
mod sticker_prompt;
mod tools_panel;

pub use central_panel::{CANVAS_BACKGROUND, central_panel};
pub use sticker_prompt::{PromptOutcome, StickerPrompt};
pub use tools_panel::tools_panel;
