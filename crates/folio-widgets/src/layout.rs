//! Layout helpers: separators, section labels, slide indicator.

use egui::{Color32, CursorIcon, Pos2, Sense, Stroke, Ui, vec2};

use crate::Palette;

/// Draw a horizontal separator line.
pub fn separator(ui: &mut Ui, palette: &Palette) {
    let rect = ui.available_rect_before_wrap();
    let y = rect.top() + 4.0;
    ui.painter().line_segment(
        [Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)],
        Stroke::new(1.0, palette.border),
    );
    ui.add_space(8.0);
}

/// Draw a section label (small, muted text).
pub fn section_label(ui: &mut Ui, text: &str, palette: &Palette) {
    ui.label(egui::RichText::new(text).size(10.0).color(palette.text_muted));
}

/// Row of dots, one per slide, with the current one filled.
///
/// Returns the index of a clicked dot.
pub fn slide_dots(ui: &mut Ui, len: usize, current: usize) -> Option<usize> {
    let dot = 10.0;
    let gap = 8.0;
    let width = len as f32 * dot + len.saturating_sub(1) as f32 * gap;
    let (rect, _) = ui.allocate_exact_size(vec2(width, dot), Sense::hover());

    let mut clicked = None;
    for index in 0..len {
        let center = Pos2::new(
            rect.left() + dot / 2.0 + index as f32 * (dot + gap),
            rect.center().y,
        );
        let hit = egui::Rect::from_center_size(center, vec2(dot, dot));
        let response = ui
            .interact(hit, ui.id().with(("slide_dot", index)), Sense::click())
            .on_hover_cursor(CursorIcon::PointingHand);

        let color = if index == current {
            Color32::WHITE
        } else {
            Color32::from_white_alpha(110)
        };
        ui.painter().circle_filled(center, dot / 2.0, color);

        if response.clicked() {
            clicked = Some(index);
        }
    }
    clicked
}
