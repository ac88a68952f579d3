//! Folio Core Library
//!
//! Host-independent interaction state for the Folio portfolio site: the
//! positionable shape widget, the control-center overlay and the slide
//! presentation, plus the tab strip and theme preference.
//!
//! Controllers never read a clock or register listeners themselves. Hosts pass
//! a [`Timestamp`] into every time-dependent call, poll `tick(now)` at the
//! deadlines the controllers report, and reconcile the listener sets the
//! controllers ask for through [`ListenerReconciler`].

pub mod config;
pub mod input;
pub mod listeners;
pub mod overlay;
pub mod presentation;
pub mod shape;
pub mod tabs;
pub mod theme;
pub mod timer;

pub use config::{ConfigError, InteractionConfig, OverlayConfig, PresentationConfig, ShapeConfig};
pub use input::{EventResponse, Key, PointerEvent};
pub use listeners::{ListenerHost, ListenerKind, ListenerReconciler, ListenerSet};
pub use overlay::{HandlePosition, OverlayController, OverlayView, PanelMode, PanelPhase, PanelView};
pub use presentation::{Direction, NavigationError, Presentation, Slide, SlideView};
pub use shape::{Cursor, DragState, HandleDirection, ShapeView, ShapeWidget};
pub use tabs::{ResumeTabs, SwitchDirection, Tab, TabError, TabStrip};
pub use theme::{MemoryThemeStore, Theme, ThemePreference, ThemeStore};
pub use timer::{Interval, Timer, Timestamp};
