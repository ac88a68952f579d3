//! Selection chrome for the positionable shape.

use std::f32::consts::TAU;

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Shape, Stroke, StrokeKind};

/// Selection blue.
pub const SELECTION: Color32 = Color32::from_rgb(59, 130, 246);

/// Dashed circle inscribed in `bounds`.
pub fn paint_selection_outline(painter: &Painter, bounds: Rect) {
    let center = bounds.center();
    let radius = bounds.width().min(bounds.height()) / 2.0;
    let segments = 96;
    let points: Vec<Pos2> = (0..=segments)
        .map(|i| {
            let angle = i as f32 / segments as f32 * TAU;
            center + radius * egui::vec2(angle.cos(), angle.sin())
        })
        .collect();
    painter.extend(Shape::dashed_line(
        &points,
        Stroke::new(1.5, SELECTION),
        6.0,
        4.0,
    ));
}

/// Square handle: white fill with a blue border.
pub fn paint_resize_handle(painter: &Painter, rect: Rect, hovered: bool) {
    let fill = if hovered { SELECTION } else { Color32::WHITE };
    painter.rect_filled(rect, CornerRadius::same(1), fill);
    painter.rect_stroke(
        rect,
        CornerRadius::same(1),
        Stroke::new(1.5, SELECTION),
        StrokeKind::Middle,
    );
}
