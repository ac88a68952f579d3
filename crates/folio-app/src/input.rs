//! Conversions between egui input and folio-core types.

use folio_core::{Cursor, HandleDirection, Key};

pub fn to_point(pos: egui::Pos2) -> kurbo::Point {
    kurbo::Point::new(f64::from(pos.x), f64::from(pos.y))
}

pub fn to_pos(point: kurbo::Point) -> egui::Pos2 {
    egui::Pos2::new(point.x as f32, point.y as f32)
}

pub fn to_kurbo_rect(rect: egui::Rect) -> kurbo::Rect {
    kurbo::Rect::new(
        f64::from(rect.min.x),
        f64::from(rect.min.y),
        f64::from(rect.max.x),
        f64::from(rect.max.y),
    )
}

pub fn to_egui_rect(rect: kurbo::Rect) -> egui::Rect {
    egui::Rect::from_min_max(
        to_pos(kurbo::Point::new(rect.x0, rect.y0)),
        to_pos(kurbo::Point::new(rect.x1, rect.y1)),
    )
}

/// Keys the controllers react to, in the order they are checked each frame.
pub const WATCHED_KEYS: [egui::Key; 4] = [
    egui::Key::ArrowLeft,
    egui::Key::ArrowRight,
    egui::Key::Space,
    egui::Key::Escape,
];

pub fn to_key(key: egui::Key) -> Key {
    match key {
        egui::Key::ArrowLeft => Key::ArrowLeft,
        egui::Key::ArrowRight => Key::ArrowRight,
        egui::Key::Space => Key::Space,
        egui::Key::Escape => Key::Escape,
        other => Key::Other(other.name().to_string()),
    }
}

pub fn cursor_icon(cursor: Cursor) -> egui::CursorIcon {
    match cursor {
        Cursor::Default => egui::CursorIcon::Default,
        Cursor::Pointer => egui::CursorIcon::PointingHand,
        Cursor::Move => egui::CursorIcon::Move,
        Cursor::Resize(direction) => match direction {
            HandleDirection::N => egui::CursorIcon::ResizeNorth,
            HandleDirection::NE => egui::CursorIcon::ResizeNorthEast,
            HandleDirection::E => egui::CursorIcon::ResizeEast,
            HandleDirection::SE => egui::CursorIcon::ResizeSouthEast,
            HandleDirection::S => egui::CursorIcon::ResizeSouth,
            HandleDirection::SW => egui::CursorIcon::ResizeSouthWest,
            HandleDirection::W => egui::CursorIcon::ResizeWest,
            HandleDirection::NW => egui::CursorIcon::ResizeNorthWest,
        },
    }
}
