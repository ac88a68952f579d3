//! Input events consumed by the interaction controllers.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Pointer event type for unified mouse/touch handling.
///
/// Positions are client coordinates relative to the element that owns the
/// controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { position: Point },
    Move { position: Point },
    Up { position: Point },
    /// Pointer left the element (treated like a release by drag handles).
    Leave,
}

impl PointerEvent {
    /// The pointer position carried by the event, if any.
    pub fn position(&self) -> Option<Point> {
        match *self {
            PointerEvent::Down { position }
            | PointerEvent::Move { position }
            | PointerEvent::Up { position } => Some(position),
            PointerEvent::Leave => None,
        }
    }
}

/// Keys the controllers react to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Space,
    Escape,
    Other(String),
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom(key: &str) -> Self {
        match key {
            "ArrowLeft" | "Left" => Key::ArrowLeft,
            "ArrowRight" | "Right" => Key::ArrowRight,
            " " | "Space" | "Spacebar" => Key::Space,
            "Escape" | "Esc" => Key::Escape,
            other => Key::Other(other.to_string()),
        }
    }
}

/// What the host should do with an event after a controller saw it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventResponse {
    /// The controller acted on the event.
    pub handled: bool,
    /// The host must suppress the event's default action (e.g. Space scrolling).
    pub prevent_default: bool,
}

impl EventResponse {
    /// Event was not relevant.
    pub const IGNORED: EventResponse = EventResponse {
        handled: false,
        prevent_default: false,
    };

    /// Event was handled; default action may proceed.
    pub const HANDLED: EventResponse = EventResponse {
        handled: true,
        prevent_default: false,
    };

    /// Event was handled and its default action must be suppressed.
    pub const CONSUMED: EventResponse = EventResponse {
        handled: true,
        prevent_default: true,
    };

    /// Merge two responses from controllers that saw the same event.
    pub fn merge(self, other: EventResponse) -> EventResponse {
        EventResponse {
            handled: self.handled || other.handled,
            prevent_default: self.prevent_default || other.prevent_default,
        }
    }
}
