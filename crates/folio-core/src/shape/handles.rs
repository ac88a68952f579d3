//! Resize handle definitions for the shape widget.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Compass direction of a resize handle on the shape's bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandleDirection {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl HandleDirection {
    /// All directions, in rendering order.
    pub const ALL: [HandleDirection; 8] = [
        HandleDirection::N,
        HandleDirection::NE,
        HandleDirection::E,
        HandleDirection::SE,
        HandleDirection::S,
        HandleDirection::SW,
        HandleDirection::W,
        HandleDirection::NW,
    ];

    /// Short lowercase name ("n", "ne", ...).
    pub fn as_str(self) -> &'static str {
        match self {
            HandleDirection::N => "n",
            HandleDirection::NE => "ne",
            HandleDirection::E => "e",
            HandleDirection::SE => "se",
            HandleDirection::S => "s",
            HandleDirection::SW => "sw",
            HandleDirection::W => "w",
            HandleDirection::NW => "nw",
        }
    }

    pub fn has_north(self) -> bool {
        matches!(self, HandleDirection::N | HandleDirection::NE | HandleDirection::NW)
    }

    pub fn has_south(self) -> bool {
        matches!(self, HandleDirection::S | HandleDirection::SE | HandleDirection::SW)
    }

    pub fn has_east(self) -> bool {
        matches!(self, HandleDirection::E | HandleDirection::NE | HandleDirection::SE)
    }

    pub fn has_west(self) -> bool {
        matches!(self, HandleDirection::W | HandleDirection::NW | HandleDirection::SW)
    }

    /// CSS cursor name for this handle.
    pub fn cursor_name(self) -> &'static str {
        match self {
            HandleDirection::N => "n-resize",
            HandleDirection::NE => "ne-resize",
            HandleDirection::E => "e-resize",
            HandleDirection::SE => "se-resize",
            HandleDirection::S => "s-resize",
            HandleDirection::SW => "sw-resize",
            HandleDirection::W => "w-resize",
            HandleDirection::NW => "nw-resize",
        }
    }

    /// The point on `bounds` this handle sits on.
    pub fn anchor(self, bounds: Rect) -> Point {
        let center = bounds.center();
        let x = if self.has_west() {
            bounds.x0
        } else if self.has_east() {
            bounds.x1
        } else {
            center.x
        };
        let y = if self.has_north() {
            bounds.y0
        } else if self.has_south() {
            bounds.y1
        } else {
            center.y
        };
        Point::new(x, y)
    }
}

/// A resize handle with its anchor point and hit target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Handle {
    /// Which edge/corner the handle resizes.
    pub direction: HandleDirection,
    /// Anchor point on the bounding box.
    pub position: Point,
    /// Square hit target centered on the anchor.
    pub hit_rect: Rect,
}

impl Handle {
    /// Create a handle centered on `position` with a square hit target of `size`.
    pub fn new(direction: HandleDirection, position: Point, size: f64) -> Self {
        let half = size / 2.0;
        Self {
            direction,
            position,
            hit_rect: Rect::new(
                position.x - half,
                position.y - half,
                position.x + half,
                position.y + half,
            ),
        }
    }

    /// Check if a point hits this handle.
    pub fn hit_test(&self, point: Point) -> bool {
        self.hit_rect.x0 <= point.x
            && point.x <= self.hit_rect.x1
            && self.hit_rect.y0 <= point.y
            && point.y <= self.hit_rect.y1
    }
}

/// The eight resize handles for a bounding box.
pub fn handles_for(bounds: Rect, handle_size: f64) -> [Handle; 8] {
    HandleDirection::ALL.map(|direction| Handle::new(direction, direction.anchor(bounds), handle_size))
}

/// Find which handle (if any) is hit at the given point.
pub fn hit_test_handles(bounds: Rect, handle_size: f64, point: Point) -> Option<HandleDirection> {
    handles_for(bounds, handle_size)
        .into_iter()
        .find(|handle| handle.hit_test(point))
        .map(|handle| handle.direction)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Rect {
        Rect::new(10.0, 20.0, 210.0, 220.0)
    }

    #[test]
    fn test_eight_handles_in_order() {
        let handles = handles_for(bounds(), 8.0);

        assert_eq!(handles.len(), 8);
        let directions: Vec<_> = handles.iter().map(|h| h.direction).collect();
        assert_eq!(directions, HandleDirection::ALL.to_vec());
    }

    #[test]
    fn test_handle_anchors() {
        let b = bounds();
        assert_eq!(HandleDirection::N.anchor(b), Point::new(110.0, 20.0));
        assert_eq!(HandleDirection::NE.anchor(b), Point::new(210.0, 20.0));
        assert_eq!(HandleDirection::E.anchor(b), Point::new(210.0, 120.0));
        assert_eq!(HandleDirection::SE.anchor(b), Point::new(210.0, 220.0));
        assert_eq!(HandleDirection::S.anchor(b), Point::new(110.0, 220.0));
        assert_eq!(HandleDirection::SW.anchor(b), Point::new(10.0, 220.0));
        assert_eq!(HandleDirection::W.anchor(b), Point::new(10.0, 120.0));
        assert_eq!(HandleDirection::NW.anchor(b), Point::new(10.0, 20.0));
    }

    #[test]
    fn test_hit_rect_offset() {
        let handle = Handle::new(HandleDirection::NW, Point::new(10.0, 20.0), 8.0);

        assert_eq!(handle.hit_rect.origin(), Point::new(6.0, 16.0));
        assert!(handle.hit_test(Point::new(13.0, 23.0)));
        assert!(!handle.hit_test(Point::new(15.0, 20.0)));
    }

    #[test]
    fn test_hit_test_handles() {
        let b = bounds();

        assert_eq!(
            hit_test_handles(b, 8.0, Point::new(211.0, 119.0)),
            Some(HandleDirection::E)
        );
        assert_eq!(hit_test_handles(b, 8.0, Point::new(110.0, 120.0)), None);
    }

    #[test]
    fn test_direction_axes() {
        assert!(HandleDirection::NE.has_north() && HandleDirection::NE.has_east());
        assert!(!HandleDirection::NE.has_west() && !HandleDirection::NE.has_south());
        assert!(HandleDirection::SW.has_south() && HandleDirection::SW.has_west());
        assert!(!HandleDirection::N.has_east() && !HandleDirection::N.has_west());
        assert_eq!(HandleDirection::SE.cursor_name(), "se-resize");
        assert_eq!(HandleDirection::NW.as_str(), "nw");
    }
}
