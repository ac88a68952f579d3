//! Control-center overlay: a pull-down handle and a panel that opens docked
//! beneath it on desktop or fullscreen on narrow viewports.

mod controller;
mod handle;
mod panel;

pub use controller::{HandlePosition, OverlayController, OverlayView, PanelAnchor, PanelView};
pub use handle::{HandleAction, HandleView, OverlayHandle};
pub use panel::{PanelMode, PanelPhase, PanelTransition};
