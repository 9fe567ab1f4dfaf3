use uuid::Uuid;

/// Stable identity of a drawable, preserved across undo/redo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DrawableId(Uuid);

impl std::fmt::Display for DrawableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

pub fn generate_id() -> DrawableId {
    DrawableId(Uuid::new_v4())
}
