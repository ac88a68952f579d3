//! Drag state of the shape widget.

use super::handles::HandleDirection;

/// The pointer interaction currently driving the shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// Translating the whole shape.
    Moving,
    /// Resizing from the given handle.
    Resizing(HandleDirection),
}

impl DragState {
    /// Check if a drag (move or resize) is in progress.
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// The handle being dragged, if resizing.
    pub fn resize_direction(&self) -> Option<HandleDirection> {
        match self {
            Self::Resizing(direction) => Some(*direction),
            _ => None,
        }
    }
}

/// Cursor affordance for a region of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    Default,
    Pointer,
    Move,
    Resize(HandleDirection),
}

impl Cursor {
    /// CSS cursor name.
    pub fn css_name(self) -> &'static str {
        match self {
            Cursor::Default => "default",
            Cursor::Pointer => "pointer",
            Cursor::Move => "move",
            Cursor::Resize(direction) => direction.cursor_name(),
        }
    }
}
