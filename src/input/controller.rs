use egui::Pos2;

use super::InputEvent;
use crate::config::SketchConfig;
use crate::document::Document;
use crate::element::{Drawable, Element, factory};
use crate::renderer::{Overlay, Redraw};
use crate::tool::ToolState;

/// Gesture state of the canvas.
#[derive(Debug, Default)]
pub enum Interaction {
    /// No button held
    #[default]
    Idle,
    /// A press is in progress; `active` is owned here until release commits it
    Drawing { active: Drawable },
}

/// Turns pointer events into document mutations and preview updates.
///
/// ```text
///            press (marker)
///   Idle ───────────────────► Drawing ──┐ move: extend
///    ▲ │                        │  ▲    │
///    │ │ press (sticker):       │  └────┘
///    │ │ place + commit         │
///    │ ▼                        │ release: commit
///   Idle ◄──────────────────────┘
/// ```
#[derive(Debug)]
pub struct InputController {
    interaction: Interaction,
    pointer: Option<Pos2>,
    end_stroke_on_leave: bool,
    sticker_drag_before_commit: bool,
}

impl Default for InputController {
    fn default() -> Self {
        Self::new(&SketchConfig::default())
    }
}

impl InputController {
    pub fn new(config: &SketchConfig) -> Self {
        Self {
            interaction: Interaction::Idle,
            pointer: None,
            end_stroke_on_leave: config.end_stroke_on_leave,
            sticker_drag_before_commit: config.sticker_drag_before_commit,
        }
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.interaction, Interaction::Drawing { .. })
    }

    /// The uncommitted drawable of the current gesture, if any.
    pub fn active(&self) -> Option<&Drawable> {
        match &self.interaction {
            Interaction::Drawing { active } => Some(active),
            Interaction::Idle => None,
        }
    }

    /// Last known pointer position on the canvas.
    pub fn pointer(&self) -> Option<Pos2> {
        self.pointer
    }

    pub fn handle_event(
        &mut self,
        event: &InputEvent,
        document: &mut Document,
        tools: &mut ToolState,
    ) -> Redraw {
        match *event {
            InputEvent::PointerDown { position } => self.pointer_down(position, document, tools),
            InputEvent::PointerMove { position } => self.pointer_move(position),
            InputEvent::PointerUp { position } => {
                if position.is_some() {
                    self.pointer = position;
                }
                Redraw::from_changed(self.finish(document))
            }
            InputEvent::PointerLeave => self.pointer_leave(document),
        }
    }

    fn pointer_down(&mut self, position: Pos2, document: &mut Document, tools: &mut ToolState) -> Redraw {
        self.pointer = Some(position);
        // A press without a matching release still owns a drawable.
        self.finish(document);

        let drawable = match tools.take_armed_sticker() {
            Some(glyph) => {
                let sticker = factory::create_sticker(glyph, position, tools.sticker_size());
                if !self.sticker_drag_before_commit {
                    document.commit(sticker);
                    return Redraw::Needed;
                }
                sticker
            }
            None => factory::create_stroke(position, tools.line_width(), tools.color()),
        };
        log::debug!("Started {} {}", drawable.element_type(), drawable.id());
        self.interaction = Interaction::Drawing { active: drawable };
        Redraw::Needed
    }

    fn pointer_move(&mut self, position: Pos2) -> Redraw {
        self.pointer = Some(position);
        if let Interaction::Drawing { active } = &mut self.interaction {
            active.extend(position);
        }
        Redraw::Needed
    }

    fn pointer_leave(&mut self, document: &mut Document) -> Redraw {
        if self.is_drawing() {
            if self.end_stroke_on_leave {
                return Redraw::from_changed(self.finish(document));
            }
            return Redraw::NotNeeded;
        }
        Redraw::from_changed(self.pointer.take().is_some())
    }

    /// Commit the active drawable, returning to Idle. Returns false if no gesture was active.
    fn finish(&mut self, document: &mut Document) -> bool {
        match std::mem::take(&mut self.interaction) {
            Interaction::Drawing { active } => {
                document.commit(active);
                true
            }
            Interaction::Idle => false,
        }
    }

    /// Abandon the active gesture without committing it.
    pub fn cancel(&mut self) -> bool {
        let was_drawing = self.is_drawing();
        if was_drawing {
            log::debug!("Cancelled active gesture");
        }
        self.interaction = Interaction::Idle;
        was_drawing
    }

    /// What to draw above the committed drawing: the active drawable while a
    /// gesture runs, otherwise the tool preview at the pointer.
    pub fn overlay(&self, tools: &ToolState) -> Overlay<'_> {
        match (&self.interaction, self.pointer) {
            (Interaction::Drawing { active }, _) => Overlay::Active(active),
            (Interaction::Idle, Some(pos)) => Overlay::Preview(tools.preview_at(pos)),
            (Interaction::Idle, None) => Overlay::None,
        }
    }
}
