//! Control-center frames and the pull-down handle.

use egui::{Color32, CornerRadius, Frame, Margin, Painter, Rect, Stroke};

use crate::{Palette, sizing};

/// Frame of the docked control-center panel.
///
/// `opacity` fades the panel during its enter and exit transitions.
pub fn panel_frame(palette: &Palette, opacity: f32) -> Frame {
    Frame::new()
        .fill(palette.panel_bg.gamma_multiply(opacity))
        .corner_radius(CornerRadius::same(sizing::PANEL_RADIUS))
        .stroke(Stroke::new(1.0, palette.border.gamma_multiply(opacity)))
        .shadow(egui::epaint::Shadow {
            spread: 0,
            blur: 16,
            offset: [0, 4],
            color: Color32::from_black_alpha(30).gamma_multiply(opacity),
        })
        .inner_margin(Margin::same(12))
}

/// Frame of the fullscreen sheet used on narrow viewports.
pub fn fullscreen_frame(palette: &Palette, opacity: f32) -> Frame {
    Frame::new()
        .fill(palette.panel_bg.gamma_multiply(opacity))
        .inner_margin(Margin::symmetric(16, 24))
}

/// Paint the handle pill centered in `rect`, shifted down by `drag_offset`.
pub fn handle_pill(painter: &Painter, rect: Rect, drag_offset: f32, palette: &Palette) {
    let center = rect.center() + egui::vec2(0.0, drag_offset);
    let pill = Rect::from_center_size(
        center,
        egui::vec2(sizing::HANDLE_WIDTH, sizing::HANDLE_HEIGHT),
    );
    painter.rect_filled(pill, CornerRadius::same(3), palette.text_muted);
}
