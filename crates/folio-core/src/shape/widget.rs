//! The draggable, resizable circle widget.

use kurbo::{Point, Rect, Vec2};

use super::handles::{Handle, HandleDirection, handles_for, hit_test_handles};
use super::state::{Cursor, DragState};
use crate::config::ShapeConfig;
use crate::listeners::{ListenerKind, ListenerSet};

/// Render description of the widget.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeView {
    /// Bounding box of the circle, relative to the container.
    pub bounds: Rect,
    pub selected: bool,
    /// Draw the dashed selection outline.
    pub show_outline: bool,
    /// Resize handles (empty unless selected).
    pub handles: Vec<Handle>,
    /// Cursor over the circle body.
    pub body_cursor: Cursor,
    pub drag: DragState,
}

/// Position and size state of a circle that can be selected, moved and resized.
///
/// The circle is described by its top-left `position` and its diameter
/// `size`. All pointer positions are in the container's coordinates.
#[derive(Debug, Clone)]
pub struct ShapeWidget {
    position: Point,
    size: f64,
    min_size: f64,
    handle_size: f64,
    selected: bool,
    drag: DragState,
    /// Pointer position at the previous drag sample.
    last_pointer: Point,
}

impl ShapeWidget {
    /// Create a widget with default config.
    pub fn new(position: Point, size: f64) -> Self {
        Self::with_config(position, size, &ShapeConfig::default())
    }

    /// Create a widget at the origin with the configured initial size.
    pub fn from_config(config: &ShapeConfig) -> Self {
        Self::with_config(Point::ZERO, config.initial_size, config)
    }

    /// Create a widget with explicit position, size and config.
    pub fn with_config(position: Point, size: f64, config: &ShapeConfig) -> Self {
        Self {
            position,
            size: size.max(config.min_size),
            min_size: config.min_size,
            handle_size: config.handle_size,
            selected: false,
            drag: DragState::Idle,
            last_pointer: Point::ZERO,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Diameter in pixels.
    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn min_size(&self) -> f64 {
        self.min_size
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Bounding box of the circle.
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.position, (self.size, self.size))
    }

    /// Check if a point lies on the circle itself.
    pub fn contains(&self, point: Point) -> bool {
        let radius = self.size / 2.0;
        (point - self.bounds().center()).hypot2() <= radius * radius
    }

    /// The eight resize handles for the current geometry.
    pub fn handles(&self) -> [Handle; 8] {
        handles_for(self.bounds(), self.handle_size)
    }

    /// Find the handle under a point. Handles only exist while selected.
    pub fn hit_test_handle(&self, point: Point) -> Option<HandleDirection> {
        if !self.selected {
            return None;
        }
        hit_test_handles(self.bounds(), self.handle_size, point)
    }

    /// Click on the circle: select it.
    pub fn click_shape(&mut self) {
        if !self.selected {
            log::debug!("shape selected");
        }
        self.selected = true;
    }

    /// Click on the background: deselect, unless a drag is in progress.
    ///
    /// Returns true if the selection was cleared.
    pub fn click_background(&mut self) -> bool {
        if self.drag.is_active() || !self.selected {
            return false;
        }
        log::debug!("shape deselected");
        self.selected = false;
        true
    }

    /// Route a click by position: handles and the circle select, anything
    /// else counts as a background click.
    pub fn click(&mut self, point: Point) {
        if self.contains(point) || self.hit_test_handle(point).is_some() {
            self.click_shape();
        } else {
            self.click_background();
        }
    }

    /// Pointer pressed on the circle body. Starts a move when selected.
    pub fn pointer_down_shape(&mut self, point: Point) -> bool {
        if !self.selected {
            return false;
        }
        self.begin_drag(DragState::Moving, point);
        true
    }

    /// Pointer pressed on a resize handle. Starts a resize when selected.
    pub fn pointer_down_handle(&mut self, direction: HandleDirection, point: Point) -> bool {
        if !self.selected {
            return false;
        }
        self.begin_drag(DragState::Resizing(direction), point);
        true
    }

    /// Pointer pressed anywhere: handles take priority over the body.
    pub fn pointer_down(&mut self, point: Point) -> bool {
        if let Some(direction) = self.hit_test_handle(point) {
            return self.pointer_down_handle(direction, point);
        }
        if self.contains(point) {
            return self.pointer_down_shape(point);
        }
        false
    }

    /// Pointer moved while a drag is active. Returns true if geometry changed.
    pub fn pointer_move(&mut self, point: Point) -> bool {
        let delta = point - self.last_pointer;
        self.last_pointer = point;

        match self.drag {
            DragState::Idle => false,
            DragState::Moving => {
                self.position += delta;
                delta != Vec2::ZERO
            }
            DragState::Resizing(direction) => {
                let before = (self.position, self.size);
                self.resize(direction, delta);
                before != (self.position, self.size)
            }
        }
    }

    /// Pointer released: the drag ends, selection is kept.
    pub fn pointer_up(&mut self) -> bool {
        if !self.drag.is_active() {
            return false;
        }
        log::debug!(
            "shape drag ended at ({:.1}, {:.1}) size {:.1}",
            self.position.x,
            self.position.y,
            self.size
        );
        self.drag = DragState::Idle;
        true
    }

    /// Global listeners needed in the current state.
    pub fn required_listeners(&self) -> ListenerSet {
        if self.drag.is_active() {
            ListenerSet::of(&[ListenerKind::PointerMove, ListenerKind::PointerUp])
        } else {
            ListenerSet::EMPTY
        }
    }

    /// Cursor to show at `point`.
    pub fn cursor_at(&self, point: Point) -> Cursor {
        if let DragState::Resizing(direction) = self.drag {
            return Cursor::Resize(direction);
        }
        if let Some(direction) = self.hit_test_handle(point) {
            return Cursor::Resize(direction);
        }
        if self.contains(point) {
            return self.body_cursor();
        }
        Cursor::Default
    }

    /// Pure projection of the current state.
    pub fn view(&self) -> ShapeView {
        ShapeView {
            bounds: self.bounds(),
            selected: self.selected,
            show_outline: self.selected,
            handles: if self.selected {
                self.handles().to_vec()
            } else {
                Vec::new()
            },
            body_cursor: self.body_cursor(),
            drag: self.drag,
        }
    }

    /// Drop any in-flight drag (component unmount).
    pub fn unmount(&mut self) {
        self.drag = DragState::Idle;
        self.selected = false;
    }

    fn body_cursor(&self) -> Cursor {
        if self.selected { Cursor::Move } else { Cursor::Pointer }
    }

    fn begin_drag(&mut self, drag: DragState, point: Point) {
        log::debug!("shape drag started: {drag:?}");
        self.drag = drag;
        self.last_pointer = point;
    }

    /// Apply one resize sample.
    ///
    /// The size is clamped first; west and north handles then shift the
    /// position by the change actually applied, so the opposite edge stays put
    /// even when the floor is hit.
    fn resize(&mut self, direction: HandleDirection, delta: Vec2) {
        if direction.has_east() {
            self.size = self.clamp_size(self.size + delta.x);
        } else if direction.has_west() {
            let old = self.size;
            self.size = self.clamp_size(old - delta.x);
            self.position.x += old - self.size;
        }

        if direction.has_south() {
            self.size = self.clamp_size(self.size + delta.y);
        } else if direction.has_north() {
            let old = self.size;
            self.size = self.clamp_size(old - delta.y);
            self.position.y += old - self.size;
        }
    }

    fn clamp_size(&self, size: f64) -> f64 {
        size.max(self.min_size)
    }
}

impl Default for ShapeWidget {
    fn default() -> Self {
        Self::from_config(&ShapeConfig::default())
    }
}
