//! Control-center controller: handle, panel transitions, viewport branching.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

use super::handle::{HandleAction, HandleView, OverlayHandle};
use super::panel::{PanelMode, PanelPhase, PanelTransition};
use crate::config::OverlayConfig;
use crate::input::{EventResponse, Key, PointerEvent};
use crate::listeners::{ListenerKind, ListenerSet};
use crate::timer::Timestamp;

/// Bounding rectangle of the handle, in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandlePosition {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
    pub width: f64,
    pub height: f64,
}

impl HandlePosition {
    pub fn from_rect(rect: Rect) -> Self {
        Self {
            top: rect.y0,
            bottom: rect.y1,
            left: rect.x0,
            right: rect.x1,
            width: rect.width(),
            height: rect.height(),
        }
    }
}

/// Where the docked panel is placed: its top edge, and the distance of its
/// right edge from the viewport's right edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelAnchor {
    pub top: f64,
    pub right: f64,
}

/// Render description of the panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelView {
    pub phase: PanelPhase,
    pub mode: PanelMode,
    /// At final opacity/transform (false during enter and exit transitions).
    pub visible: bool,
    /// Placement for the docked layout.
    pub anchor: PanelAnchor,
}

/// Render description of the whole overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayView {
    /// The pull-down handle; only offered on desktop-width viewports.
    pub handle: Option<HandleView>,
    /// The panel, while mounted.
    pub panel: Option<PanelView>,
    /// Narrow-viewport layout (bottom navigation instead of the handle).
    pub mobile: bool,
}

/// State of the control-center overlay.
#[derive(Debug, Clone)]
pub struct OverlayController {
    config: OverlayConfig,
    handle: OverlayHandle,
    panel: PanelTransition,
    viewport_width: f64,
    handle_position: Option<HandlePosition>,
    /// Last laid-out panel bounds, used for outside-click detection.
    panel_bounds: Option<Rect>,
}

impl OverlayController {
    pub fn new(config: OverlayConfig, viewport_width: f64) -> Self {
        Self {
            handle: OverlayHandle::new(&config),
            panel: PanelTransition::new(&config),
            config,
            viewport_width,
            handle_position: None,
            panel_bounds: None,
        }
    }

    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    /// Viewport narrower than the mobile breakpoint.
    pub fn is_mobile(&self) -> bool {
        self.viewport_width < self.config.mobile_breakpoint
    }

    pub fn phase(&self) -> PanelPhase {
        self.panel.phase()
    }

    pub fn is_open(&self) -> bool {
        self.panel.is_mounted()
    }

    pub fn is_fullscreen(&self) -> bool {
        self.panel.mode() == Some(PanelMode::Fullscreen)
    }

    pub fn handle(&self) -> &OverlayHandle {
        &self.handle
    }

    pub fn handle_position(&self) -> Option<HandlePosition> {
        self.handle_position
    }

    /// Pending timers of the panel transition.
    pub fn pending_timers(&self) -> usize {
        self.panel.pending_timers()
    }

    /// Earliest time the host must call [`tick`](Self::tick).
    pub fn next_deadline(&self) -> Option<Timestamp> {
        self.panel.next_deadline()
    }

    /// Viewport resized.
    pub fn resize_viewport(&mut self, width: f64) {
        if (width - self.viewport_width).abs() > f64::EPSILON {
            log::trace!("viewport width {width}");
        }
        self.viewport_width = width;
    }

    /// Handle element laid out (or re-laid out).
    pub fn update_handle_position(&mut self, position: HandlePosition) {
        self.handle_position = Some(position);
    }

    /// Panel element laid out; `None` when it is not rendered.
    pub fn set_panel_bounds(&mut self, bounds: Option<Rect>) {
        self.panel_bounds = bounds;
    }

    /// Placement of the docked panel beneath the handle.
    pub fn panel_anchor(&self) -> PanelAnchor {
        match self.handle_position {
            Some(handle) => PanelAnchor {
                top: handle.bottom,
                right: self.viewport_width - handle.right,
            },
            None => PanelAnchor {
                top: self.config.fallback_top,
                right: self.config.fallback_right,
            },
        }
    }

    /// Open the panel; narrow viewports get the fullscreen layout.
    pub fn open(&mut self, now: Timestamp) -> bool {
        let mode = if self.is_mobile() {
            PanelMode::Fullscreen
        } else {
            PanelMode::Docked
        };
        self.panel.open(now, mode)
    }

    /// Close the panel (either layout).
    pub fn close(&mut self, now: Timestamp) -> bool {
        self.panel.close(now)
    }

    /// Open when closed or closing, close otherwise.
    pub fn toggle(&mut self, now: Timestamp) -> bool {
        match self.panel.phase() {
            PanelPhase::Closed | PanelPhase::Closing => self.open(now),
            PanelPhase::Opening | PanelPhase::Open => self.close(now),
        }
    }

    /// Click on the handle.
    pub fn handle_click(&mut self, now: Timestamp) -> bool {
        self.open(now)
    }

    /// Pointer or touch pressed on the handle.
    pub fn handle_pointer_down(&mut self, y: f64) {
        self.handle.pointer_down(y);
    }

    /// Pointer or touch moved during a handle drag. Returns true if the drag
    /// opened the panel.
    pub fn handle_pointer_move(&mut self, y: f64, now: Timestamp) -> bool {
        match self.handle.pointer_move(y) {
            HandleAction::Open => self.open(now),
            HandleAction::None => false,
        }
    }

    /// Pointer released or left the handle.
    pub fn handle_pointer_up(&mut self) {
        self.handle.pointer_up();
    }

    /// Route a pointer event on the handle element.
    pub fn handle_pointer(&mut self, event: PointerEvent, now: Timestamp) -> bool {
        match event {
            PointerEvent::Down { position } => {
                self.handle_pointer_down(position.y);
                false
            }
            PointerEvent::Move { position } => self.handle_pointer_move(position.y, now),
            PointerEvent::Up { .. } | PointerEvent::Leave => {
                self.handle_pointer_up();
                false
            }
        }
    }

    /// Page scrolled to `scroll_y`.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        self.handle.on_scroll(scroll_y)
    }

    /// Pointer pressed anywhere in the document.
    ///
    /// Closes the docked panel when the press lands outside it. The
    /// fullscreen layout has no outside.
    pub fn pointer_down(&mut self, point: Point, now: Timestamp) -> bool {
        if !self.panel.is_mounted() || self.panel.mode() != Some(PanelMode::Docked) {
            return false;
        }
        match self.panel_bounds {
            Some(bounds) if !bounds.contains(point) => {
                log::debug!("pointer down outside panel");
                self.close(now)
            }
            _ => false,
        }
    }

    /// Key pressed anywhere in the document.
    pub fn key_down(&mut self, key: &Key, now: Timestamp) -> EventResponse {
        if *key == Key::Escape && self.panel.is_mounted() {
            self.close(now);
            return EventResponse::HANDLED;
        }
        EventResponse::IGNORED
    }

    /// Fire due transitions. Returns true if anything changed.
    pub fn tick(&mut self, now: Timestamp) -> bool {
        let changed = self.panel.tick(now);
        if !self.panel.is_mounted() {
            self.panel_bounds = None;
        }
        changed
    }

    /// Global listeners needed in the current state.
    pub fn required_listeners(&self) -> ListenerSet {
        let mut set = ListenerSet::of(&[ListenerKind::Scroll, ListenerKind::Resize, ListenerKind::KeyDown]);
        if self.panel.is_mounted() && self.panel.mode() == Some(PanelMode::Docked) {
            set.insert(ListenerKind::PointerDownOutside);
        }
        if self.handle.is_dragging() {
            set.insert(ListenerKind::PointerMove);
            set.insert(ListenerKind::PointerUp);
        }
        set
    }

    /// Pure projection of the current state.
    pub fn view(&self) -> OverlayView {
        let mobile = self.is_mobile();
        OverlayView {
            handle: (!mobile).then(|| self.handle.view()),
            panel: self.panel.mode().map(|mode| PanelView {
                phase: self.panel.phase(),
                mode,
                visible: self.panel.is_visible(),
                anchor: self.panel_anchor(),
            }),
            mobile,
        }
    }

    /// Drop all state tied to the mounted component.
    pub fn unmount(&mut self) {
        self.panel.reset();
        self.handle_pointer_up();
        self.panel_bounds = None;
    }
}
