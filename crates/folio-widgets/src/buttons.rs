//! Button components: control-center tiles, text buttons, tabs.

use egui::{
    Align2, Color32, CornerRadius, CursorIcon, FontId, Pos2, Rect, Sense, Shape, Stroke, Ui, vec2,
};

use crate::{Palette, sizing};

/// A square control-center tile with a glyph and a caption.
/// Uses the accent fill when active.
pub struct ControlTile<'a> {
    glyph: &'a str,
    caption: &'a str,
    active: bool,
    palette: &'a Palette,
}

impl<'a> ControlTile<'a> {
    pub fn new(glyph: &'a str, caption: &'a str, palette: &'a Palette) -> Self {
        Self {
            glyph,
            caption,
            active: false,
            palette,
        }
    }

    /// Set whether the tile is active.
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Show the tile and return true if clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let (rect, response) =
            ui.allocate_exact_size(vec2(sizing::TILE, sizing::TILE), Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.active {
                self.palette.accent
            } else if response.hovered() {
                self.palette.hover_bg
            } else {
                self.palette.tile_bg
            };
            let text_color = if self.active {
                Color32::WHITE
            } else {
                self.palette.text
            };

            ui.painter()
                .rect_filled(rect, CornerRadius::same(12), bg_color);
            ui.painter().text(
                rect.center() - vec2(0.0, 8.0),
                Align2::CENTER_CENTER,
                self.glyph,
                FontId::proportional(22.0),
                text_color,
            );
            ui.painter().text(
                Pos2::new(rect.center().x, rect.bottom() - 12.0),
                Align2::CENTER_CENTER,
                self.caption,
                FontId::proportional(10.0),
                text_color,
            );
        }

        let clicked = response.clicked();
        response
            .on_hover_text(self.caption)
            .on_hover_cursor(CursorIcon::PointingHand);
        clicked
    }
}

/// A flat text button with an optional right-aligned hint.
pub struct TextButton<'a> {
    label: &'a str,
    hint: Option<&'a str>,
    palette: &'a Palette,
}

impl<'a> TextButton<'a> {
    pub fn new(label: &'a str, palette: &'a Palette) -> Self {
        Self {
            label,
            hint: None,
            palette,
        }
    }

    /// Add a hint (e.g. a key name).
    pub fn hint(mut self, hint: &'a str) -> Self {
        self.hint = Some(hint);
        self
    }

    /// Show the button and return true if clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let (rect, response) = ui.allocate_at_least(vec2(0.0, 24.0), Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if response.hovered() {
                self.palette.hover_bg
            } else {
                Color32::TRANSPARENT
            };
            ui.painter()
                .rect_filled(rect, CornerRadius::same(sizing::CORNER_RADIUS), bg_color);

            ui.painter().text(
                Pos2::new(rect.left() + 8.0, rect.center().y),
                Align2::LEFT_CENTER,
                self.label,
                FontId::proportional(12.0),
                self.palette.text,
            );
            if let Some(hint) = self.hint {
                ui.painter().text(
                    Pos2::new(rect.right() - 8.0, rect.center().y),
                    Align2::RIGHT_CENTER,
                    hint,
                    FontId::proportional(11.0),
                    self.palette.text_muted,
                );
            }
        }

        let clicked = response.clicked();
        response.on_hover_cursor(CursorIcon::PointingHand);
        clicked
    }
}

/// What happened to a tab this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TabButtonResponse {
    pub activated: bool,
    pub close_requested: bool,
}

/// A trapezoid browser-style tab with a close button.
///
/// Tabs after the first overlap their left neighbour; the caller paints them
/// in z-order so the active tab ends up on top.
pub struct TabButton<'a> {
    title: &'a str,
    icon: Option<&'a str>,
    active: bool,
    overlap: bool,
}

impl<'a> TabButton<'a> {
    pub fn new(title: &'a str, active: bool) -> Self {
        Self {
            title,
            icon: None,
            active,
            overlap: false,
        }
    }

    pub fn icon(mut self, icon: Option<&'a str>) -> Self {
        self.icon = icon;
        self
    }

    /// Draw under the previous tab's right edge.
    pub fn overlap(mut self, overlap: bool) -> Self {
        self.overlap = overlap;
        self
    }

    /// Width taken by a tab with this content.
    pub fn width(&self, ui: &Ui) -> f32 {
        let label = self.label();
        let galley = ui.painter().layout_no_wrap(
            label,
            FontId::proportional(13.0),
            Color32::PLACEHOLDER,
        );
        galley.size().x + 64.0
    }

    fn label(&self) -> String {
        match self.icon {
            Some(icon) => format!("{icon}  {}", self.title),
            None => self.title.to_string(),
        }
    }

    /// Paint the tab at `rect` and report clicks.
    pub fn show_at(self, ui: &mut Ui, rect: Rect, id: egui::Id) -> TabButtonResponse {
        let slant = 10.0;
        let (fill, text_color) = if self.active {
            (Color32::WHITE, Color32::from_gray(40))
        } else {
            (Color32::from_rgba_unmultiplied(229, 231, 235, 204), Color32::from_gray(70))
        };

        let outline = vec![
            Pos2::new(rect.left() + slant, rect.top()),
            Pos2::new(rect.right() - slant, rect.top()),
            rect.right_bottom(),
            rect.left_bottom(),
        ];
        ui.painter()
            .add(Shape::convex_polygon(outline, fill, Stroke::NONE));

        let text_left = rect.left() + if self.overlap { 24.0 } else { 16.0 };
        ui.painter().text(
            Pos2::new(text_left, rect.center().y),
            Align2::LEFT_CENTER,
            self.label(),
            FontId::proportional(13.0),
            text_color,
        );

        // Registered before the close button, which must be on top for hit testing
        let body = ui
            .interact(rect, id, Sense::click())
            .on_hover_cursor(CursorIcon::PointingHand);

        let close_rect = Rect::from_center_size(
            Pos2::new(rect.right() - 22.0, rect.center().y),
            vec2(20.0, 20.0),
        );
        let close = ui
            .interact(close_rect, id.with("close"), Sense::click())
            .on_hover_cursor(CursorIcon::PointingHand);
        if close.hovered() {
            ui.painter()
                .circle_filled(close_rect.center(), 10.0, Color32::from_black_alpha(20));
        }
        ui.painter().text(
            close_rect.center(),
            Align2::CENTER_CENTER,
            "✕",
            FontId::proportional(11.0),
            Color32::from_gray(110),
        );

        TabButtonResponse {
            activated: body.clicked(),
            close_requested: close.clicked(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Context, Event, Id, Modifiers, PointerButton, RawInput};

    fn input(time: f64, events: Vec<Event>) -> RawInput {
        RawInput {
            time: Some(time),
            events,
            ..Default::default()
        }
    }

    fn button(pos: Pos2, pressed: bool) -> Event {
        Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::NONE,
        }
    }

    /// Run frames over a single tab and return the response of the last one.
    fn click_tab_at(pos: Pos2) -> TabButtonResponse {
        let ctx = Context::default();
        let rect = Rect::from_min_size(Pos2::new(100.0, 100.0), vec2(160.0, 40.0));
        let frames = [
            vec![Event::PointerMoved(pos)],
            vec![button(pos, true)],
            vec![button(pos, false)],
        ];

        let mut last = TabButtonResponse::default();
        for (frame, events) in frames.into_iter().enumerate() {
            let _ = ctx.run(input(frame as f64 * 0.05, events), |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    last = TabButton::new("Settings", true).show_at(ui, rect, Id::new("tab"));
                });
            });
        }
        last
    }

    #[test]
    fn test_tab_close_button_requests_close() {
        let response = click_tab_at(Pos2::new(238.0, 120.0));
        assert!(response.close_requested);
        assert!(!response.activated);
    }

    #[test]
    fn test_tab_body_activates() {
        let response = click_tab_at(Pos2::new(140.0, 120.0));
        assert!(response.activated);
        assert!(!response.close_requested);
    }
}
