//! The pull-down handle that reveals the control center.

use crate::config::OverlayConfig;

/// An in-progress drag on the handle.
#[derive(Debug, Clone, Copy, PartialEq)]
struct HandleDrag {
    start_y: f64,
    /// Downward distance shown as the handle's offset (never negative).
    distance: f64,
}

/// Result of feeding a drag sample to the handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleAction {
    None,
    /// The drag crossed the open threshold; the drag has already ended.
    Open,
}

/// Render description of the handle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleView {
    pub visible: bool,
    /// Vertical offset to apply while dragging.
    pub drag_offset: f64,
    pub dragging: bool,
}

/// Scroll-driven visibility and drag-to-open tracking for the handle.
#[derive(Debug, Clone)]
pub struct OverlayHandle {
    visible: bool,
    last_scroll_y: f64,
    /// Scroll position at the last upward movement (or mount).
    scroll_anchor: f64,
    drag: Option<HandleDrag>,
    hide_threshold: f64,
    open_threshold: f64,
}

impl OverlayHandle {
    pub fn new(config: &OverlayConfig) -> Self {
        Self {
            visible: true,
            last_scroll_y: 0.0,
            scroll_anchor: 0.0,
            drag: None,
            hide_threshold: config.scroll_hide_threshold,
            open_threshold: config.drag_open_threshold,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Current downward drag offset (zero when not dragging).
    pub fn drag_offset(&self) -> f64 {
        self.drag.map_or(0.0, |drag| drag.distance)
    }

    /// Feed a scroll sample. Returns true if visibility changed.
    ///
    /// Any upward movement shows the handle and resets the anchor; the handle
    /// hides once the page has scrolled down more than the threshold since
    /// that anchor.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        let was_visible = self.visible;

        if scroll_y < self.last_scroll_y {
            self.visible = true;
            self.scroll_anchor = scroll_y;
        } else if scroll_y - self.scroll_anchor > self.hide_threshold {
            self.visible = false;
        }
        self.last_scroll_y = scroll_y;

        if was_visible != self.visible {
            log::debug!("overlay handle visible: {}", self.visible);
        }
        was_visible != self.visible
    }

    /// Pointer or touch pressed on the handle.
    pub fn pointer_down(&mut self, y: f64) {
        self.drag = Some(HandleDrag {
            start_y: y,
            distance: 0.0,
        });
    }

    /// Pointer or touch moved while pressed on the handle.
    ///
    /// Upward movement is ignored rather than inverted. Crossing the open
    /// threshold ends the drag immediately.
    pub fn pointer_move(&mut self, y: f64) -> HandleAction {
        let Some(drag) = self.drag.as_mut() else {
            return HandleAction::None;
        };

        let distance = y - drag.start_y;
        if distance > 0.0 {
            drag.distance = distance;
        }
        if distance > self.open_threshold {
            log::debug!("overlay handle dragged {distance:.1}px, opening");
            self.drag = None;
            return HandleAction::Open;
        }
        HandleAction::None
    }

    /// Pointer released or left the handle.
    pub fn pointer_up(&mut self) {
        self.drag = None;
    }

    pub fn view(&self) -> HandleView {
        HandleView {
            visible: self.visible,
            drag_offset: self.drag_offset(),
            dragging: self.is_dragging(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle() -> OverlayHandle {
        OverlayHandle::new(&OverlayConfig::default())
    }

    #[test]
    fn test_hides_after_large_downward_scroll() {
        let mut handle = handle();

        assert!(!handle.on_scroll(20.0));
        assert!(handle.is_visible());
        assert!(handle.on_scroll(21.0));
        assert!(!handle.is_visible());
    }

    #[test]
    fn test_single_jump_hides() {
        let mut handle = handle();
        handle.on_scroll(100.0);
        assert!(!handle.is_visible());
    }

    #[test]
    fn test_small_steps_accumulate() {
        let mut handle = handle();
        for y in [5.0, 10.0, 15.0, 20.0] {
            handle.on_scroll(y);
            assert!(handle.is_visible());
        }
        handle.on_scroll(25.0);
        assert!(!handle.is_visible());
    }

    #[test]
    fn test_any_upward_scroll_shows() {
        let mut handle = handle();
        handle.on_scroll(300.0);
        assert!(!handle.is_visible());

        handle.on_scroll(299.0);
        assert!(handle.is_visible());

        // Anchor moved to 299; 20px more is not enough
        handle.on_scroll(319.0);
        assert!(handle.is_visible());
        handle.on_scroll(320.0);
        assert!(!handle.is_visible());
    }

    #[test]
    fn test_visibility_matches_cumulative_rule() {
        let samples = [0.0, 8.0, 3.0, 12.0, 30.0, 24.0, 44.0, 45.0, 60.0, 10.0, 31.0];
        let mut handle = handle();
        let mut anchor = 0.0;
        let mut last = 0.0;

        for y in samples {
            handle.on_scroll(y);
            if y < last {
                anchor = y;
            }
            last = y;
            assert_eq!(
                handle.is_visible(),
                !(y - anchor > 20.0),
                "visibility at {y} with anchor {anchor}"
            );
        }
    }

    #[test]
    fn test_drag_below_threshold_does_not_open() {
        let mut handle = handle();
        handle.pointer_down(10.0);

        assert_eq!(handle.pointer_move(59.0), HandleAction::None);
        assert!(handle.is_dragging());
        assert!((handle.drag_offset() - 49.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_drag_past_threshold_opens_and_ends_drag() {
        let mut handle = handle();
        handle.pointer_down(10.0);

        assert_eq!(handle.pointer_move(61.0), HandleAction::Open);
        assert!(!handle.is_dragging());
        assert!(handle.drag_offset().abs() < f64::EPSILON);
        // Later samples are ignored until the next press
        assert_eq!(handle.pointer_move(200.0), HandleAction::None);
    }

    #[test]
    fn test_upward_drag_is_ignored() {
        let mut handle = handle();
        handle.pointer_down(100.0);
        handle.pointer_move(130.0);
        handle.pointer_move(80.0);

        assert!((handle.drag_offset() - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_release_resets_offset() {
        let mut handle = handle();
        handle.pointer_down(0.0);
        handle.pointer_move(30.0);
        handle.pointer_up();

        let view = handle.view();
        assert!(!view.dragging);
        assert!(view.drag_offset.abs() < f64::EPSILON);
    }

    #[test]
    fn test_move_without_press_is_ignored() {
        let mut handle = handle();
        assert_eq!(handle.pointer_move(500.0), HandleAction::None);
    }
}
