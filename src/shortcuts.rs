//! Keyboard shortcuts for the action surface.

use egui::{Context, Key, KeyboardShortcut, Modifiers};

use crate::command::Command;

/// A keyboard shortcut bound to a command.
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub shortcut: KeyboardShortcut,
    pub command: Command,
    pub description: &'static str,
}

impl Shortcut {
    pub fn new(modifiers: Modifiers, key: Key, command: Command, description: &'static str) -> Self {
        Self {
            shortcut: KeyboardShortcut::new(modifiers, key),
            command,
            description,
        }
    }
}

/// All bindings. Shift variants come first since a plain Ctrl+Z binding
/// would also match Ctrl+Shift+Z.
pub fn all() -> Vec<Shortcut> {
    vec![
        Shortcut::new(Modifiers::COMMAND.plus(Modifiers::SHIFT), Key::Z, Command::Redo, "Redo"),
        Shortcut::new(Modifiers::COMMAND, Key::Z, Command::Undo, "Undo"),
        Shortcut::new(Modifiers::COMMAND, Key::Y, Command::Redo, "Redo"),
        Shortcut::new(Modifiers::COMMAND, Key::E, Command::Export, "Export to PNG"),
    ]
}

/// Consume any pressed shortcuts this frame and return their commands.
pub fn poll(ctx: &Context) -> Vec<Command> {
    ctx.input_mut(|input| {
        all()
            .into_iter()
            .filter(|binding| input.consume_shortcut(&binding.shortcut))
            .map(|binding| binding.command)
            .collect()
    })
}

/// Hover text naming a command's shortcut, e.g. "Undo (Ctrl+Z)".
pub fn hint(ctx: &Context, command: &Command) -> Option<String> {
    all()
        .into_iter()
        .find(|binding| binding.command == *command)
        .map(|binding| format!("{} ({})", binding.description, ctx.format_shortcut(&binding.shortcut)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_variant_precedes_plain_undo() {
        let bindings = all();
        let redo = bindings
            .iter()
            .position(|b| b.shortcut.logical_key == Key::Z && b.command == Command::Redo)
            .unwrap();
        let undo = bindings.iter().position(|b| b.command == Command::Undo).unwrap();
        assert!(redo < undo);
    }

    #[test]
    fn test_hint_names_description_and_keys() {
        let ctx = Context::default();
        let undo = hint(&ctx, &Command::Undo).unwrap();
        assert!(undo.starts_with("Undo ("));
        assert!(undo.contains('Z'));
        assert!(hint(&ctx, &Command::Export).unwrap().starts_with("Export to PNG"));
        assert_eq!(hint(&ctx, &Command::Clear), None);
    }
}
