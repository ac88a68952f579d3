//! egui widget components for the Folio demo host.
//!
//! - **Panel**: control-center frames, the pull-down handle pill
//! - **Buttons**: control tiles, text buttons, browser-style tabs
//! - **Selection**: dashed circle outline and resize handles
//! - **Layout**: section labels, separators, slide indicator dots

pub mod buttons;
pub mod layout;
pub mod panel;
pub mod selection;

pub use buttons::{ControlTile, TabButton, TabButtonResponse, TextButton};
pub use layout::{section_label, separator, slide_dots};
pub use panel::{fullscreen_frame, handle_pill, panel_frame};
pub use selection::{paint_resize_handle, paint_selection_outline};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Control tile size
    pub const TILE: f32 = 72.0;
    /// Tab height
    pub const TAB_HEIGHT: f32 = 40.0;
    /// Width of the docked panel
    pub const PANEL_WIDTH: f32 = 288.0;
    /// Pull-down handle pill size
    pub const HANDLE_WIDTH: f32 = 48.0;
    pub const HANDLE_HEIGHT: f32 = 6.0;
    /// Standard corner radius
    pub const CORNER_RADIUS: u8 = 4;
    /// Panel corner radius
    pub const PANEL_RADIUS: u8 = 16;
}

/// Colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub text: egui::Color32,
    pub text_muted: egui::Color32,
    pub border: egui::Color32,
    pub accent: egui::Color32,
    pub hover_bg: egui::Color32,
    pub tile_bg: egui::Color32,
    pub panel_bg: egui::Color32,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        text: egui::Color32::from_rgb(60, 60, 60),
        text_muted: egui::Color32::from_rgb(120, 120, 120),
        border: egui::Color32::from_rgb(220, 220, 220),
        accent: egui::Color32::from_rgb(59, 130, 246),
        hover_bg: egui::Color32::from_rgb(245, 245, 245),
        tile_bg: egui::Color32::from_rgb(235, 235, 240),
        panel_bg: egui::Color32::from_rgba_premultiplied(250, 250, 252, 240),
    };

    pub const DARK: Palette = Palette {
        text: egui::Color32::from_rgb(230, 230, 235),
        text_muted: egui::Color32::from_rgb(150, 150, 160),
        border: egui::Color32::from_rgb(60, 60, 70),
        accent: egui::Color32::from_rgb(96, 165, 250),
        hover_bg: egui::Color32::from_rgb(45, 45, 55),
        tile_bg: egui::Color32::from_rgb(40, 40, 48),
        panel_bg: egui::Color32::from_rgba_premultiplied(24, 24, 30, 240),
    };

    pub fn for_dark_mode(dark: bool) -> Palette {
        if dark { Palette::DARK } else { Palette::LIGHT }
    }
}

/// Convert an RGB triple (as stored on slides) to an egui color.
pub fn rgb(color: [u8; 3]) -> egui::Color32 {
    egui::Color32::from_rgb(color[0], color[1], color[2])
}
