use egui::{Context, LayerId, Pos2, Rect, Vec2};

mod controller;
pub use controller::InputController;

/// Pointer events in surface-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button was pressed over the canvas
    PointerDown { position: Pos2 },
    /// Pointer moved (with or without the button held)
    PointerMove { position: Pos2 },
    /// Primary button was released, wherever the pointer is. `None` if the
    /// pointer position is unknown.
    PointerUp { position: Option<Pos2> },
    /// Pointer left the canvas
    PointerLeave,
}

/// Handles converting raw egui input into canvas-local InputEvents
pub struct InputHandler {
    canvas_rect: Option<Rect>,
    canvas_layer: Option<LayerId>,
    canvas_size: Vec2,
    last_pointer_pos: Option<Pos2>,
    pointer_inside: bool,
    pressed: bool,
}

impl InputHandler {
    pub fn new(canvas_size: Vec2) -> Self {
        Self {
            canvas_rect: None,
            canvas_layer: None,
            canvas_size,
            last_pointer_pos: None,
            pointer_inside: false,
            pressed: false,
        }
    }

    /// Update the on-screen rectangle and layer the canvas occupies this frame
    pub fn set_canvas(&mut self, rect: Rect, layer: LayerId) {
        self.canvas_rect = Some(rect);
        self.canvas_layer = Some(layer);
    }

    /// Map a screen position into surface coordinates
    pub fn to_canvas(&self, pos: Pos2) -> Option<Pos2> {
        let rect = self.canvas_rect?;
        let scale = if rect.width() > 0.0 {
            self.canvas_size.x / rect.width()
        } else {
            1.0
        };
        Some(Pos2::ZERO + (pos - rect.min) * scale)
    }

    /// Process raw egui input and generate our InputEvents
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let (Some(rect), Some(layer)) = (self.canvas_rect, self.canvas_layer) else {
            return Vec::new();
        };

        let (latest, pressed, released) = ctx.input(|input| {
            (
                input.pointer.latest_pos(),
                input.pointer.primary_pressed(),
                input.pointer.primary_released(),
            )
        });
        // Popups and windows above the canvas (the color picker, for one) own
        // the pointer wherever they cover it.
        let inside = latest.is_some_and(|pos| {
            rect.contains(pos) && ctx.layer_id_at(pos).is_none_or(|top| top == layer)
        });
        self.translate(latest, inside, pressed, released)
    }

    /// Turn one frame of pointer state into events. `inside` is true when the
    /// pointer is over an uncovered part of the canvas.
    fn translate(
        &mut self,
        latest: Option<Pos2>,
        inside: bool,
        pressed: bool,
        released: bool,
    ) -> Vec<InputEvent> {
        let mut events = Vec::new();

        if let Some(pos) = latest {
            if Some(pos) != self.last_pointer_pos && (inside || self.pressed) {
                if let Some(position) = self.to_canvas(pos) {
                    events.push(InputEvent::PointerMove { position });
                }
            }
        }

        if self.pointer_inside && !inside {
            events.push(InputEvent::PointerLeave);
        }

        if pressed && inside {
            if let Some(position) = latest.and_then(|pos| self.to_canvas(pos)) {
                events.push(InputEvent::PointerDown { position });
                self.pressed = true;
            }
        }

        if released && self.pressed {
            let position = latest
                .or(self.last_pointer_pos)
                .and_then(|pos| self.to_canvas(pos));
            events.push(InputEvent::PointerUp { position });
            self.pressed = false;
        }

        if latest.is_some() {
            self.last_pointer_pos = latest;
        }
        self.pointer_inside = inside;

        for event in &events {
            log::debug!("Canvas input: {:?}", event);
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handler() -> (InputHandler, Rect) {
        let rect = Rect::from_min_size(Pos2::new(100.0, 50.0), Vec2::splat(256.0));
        let mut handler = InputHandler::new(Vec2::splat(256.0));
        handler.set_canvas(rect, LayerId::background());
        (handler, rect)
    }

    /// One frame with nothing drawn above the canvas.
    fn step(handler: &mut InputHandler, rect: Rect, pos: Pos2, pressed: bool, released: bool) -> Vec<InputEvent> {
        handler.translate(Some(pos), rect.contains(pos), pressed, released)
    }

    #[test]
    fn test_positions_are_canvas_local() {
        let (handler, _) = handler();
        assert_eq!(handler.to_canvas(Pos2::new(110.0, 70.0)), Some(Pos2::new(10.0, 20.0)));
    }

    #[test]
    fn test_press_drag_release_sequence() {
        let (mut handler, rect) = handler();
        let events = step(&mut handler, rect, Pos2::new(110.0, 60.0), true, false);
        assert_eq!(
            events,
            vec![
                InputEvent::PointerMove { position: Pos2::new(10.0, 10.0) },
                InputEvent::PointerDown { position: Pos2::new(10.0, 10.0) },
            ]
        );

        // Dragging outside the canvas keeps reporting moves and then a leave.
        let events = step(&mut handler, rect, Pos2::new(50.0, 60.0), false, false);
        assert_eq!(
            events,
            vec![
                InputEvent::PointerMove { position: Pos2::new(-50.0, 10.0) },
                InputEvent::PointerLeave,
            ]
        );

        let events = step(&mut handler, rect, Pos2::new(50.0, 60.0), false, true);
        assert_eq!(
            events,
            vec![InputEvent::PointerUp { position: Some(Pos2::new(-50.0, 10.0)) }]
        );
    }

    #[test]
    fn test_press_outside_canvas_is_ignored() {
        let (mut handler, rect) = handler();
        let events = step(&mut handler, rect, Pos2::new(10.0, 10.0), true, false);
        assert!(events.is_empty());
        let events = step(&mut handler, rect, Pos2::new(10.0, 10.0), false, true);
        assert!(events.is_empty());
    }

    #[test]
    fn test_press_on_covered_canvas_is_ignored() {
        let (mut handler, _) = handler();
        let events = handler.translate(Some(Pos2::new(150.0, 100.0)), false, true, false);
        assert!(events.is_empty());
        let events = handler.translate(Some(Pos2::new(150.0, 100.0)), false, false, true);
        assert!(events.is_empty());
    }

    #[test]
    fn test_release_without_known_position_has_no_position() {
        let (mut handler, rect) = handler();
        handler.pressed = true;
        let events = handler.translate(None, false, false, true);
        assert_eq!(events, vec![InputEvent::PointerUp { position: None }]);

        let events = step(&mut handler, rect, Pos2::new(10.0, 10.0), false, false);
        assert!(events.is_empty());
    }

    #[test]
    fn test_hover_outside_canvas_emits_nothing() {
        let (mut handler, rect) = handler();
        let events = step(&mut handler, rect, Pos2::new(5.0, 5.0), false, false);
        assert!(events.is_empty());
    }
}
