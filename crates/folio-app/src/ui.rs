//! Rendering of the page, the control-center handle and the panel.
//!
//! Render functions only paint controller projections and report what the
//! user did as [`UiAction`]s; the app applies them to the controllers.

use egui::{Align2, Color32, Context, CornerRadius, FontId, Id, Pos2, Rect, Sense, Vec2, vec2};
use folio_core::overlay::{HandleView, PanelMode, PanelView};
use folio_core::{Presentation, ResumeTabs, ShapeWidget, TabStrip, Theme};
use folio_widgets::{
    ControlTile, Palette, TabButton, TextButton, fullscreen_frame, handle_pill,
    paint_resize_handle, paint_selection_outline, panel_frame, rgb, section_label, separator,
    sizing, slide_dots,
};

use crate::input::{cursor_icon, to_egui_rect, to_point};

/// Actions produced by the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    /// Click inside the shape stage, in stage coordinates.
    ShapeClicked(kurbo::Point),
    HandleClicked,
    OpenPanel,
    ClosePanel,
    ToggleTheme,
    ToggleAutoplay,
    NextSlide,
    PreviousSlide,
    GoToSlide(usize),
    ActivateTab(String),
    CloseTab(String),
    AddTab,
    SelectResumeTab(String),
}

/// Geometry of the last rendered frame, used to route raw pointer input.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageLayout {
    /// Top-left of the shape stage in screen coordinates.
    pub stage_origin: Option<Pos2>,
    pub handle_rect: Option<Rect>,
    pub panel_rect: Option<Rect>,
    pub scroll_y: f32,
}

/// Controller state the page renders.
pub struct PageContent<'a> {
    pub shape: &'a ShapeWidget,
    pub presentation: &'a Presentation,
    pub tabs: &'a TabStrip,
    pub resume: &'a ResumeTabs,
    pub palette: &'a Palette,
    pub mobile: bool,
}

const STAGE_HEIGHT: f32 = 420.0;
const SLIDE_HEIGHT: f32 = 320.0;
const TAB_OVERLAP: f32 = 20.0;

/// Render the scrolling page. Returns the stage origin and scroll offset.
pub fn render_page(ctx: &Context, content: &PageContent<'_>, actions: &mut Vec<UiAction>) -> PageLayout {
    let mut layout = PageLayout::default();

    egui::CentralPanel::default().show(ctx, |ui| {
        let output = egui::ScrollArea::vertical()
            .id_salt("page")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.add_space(48.0);
                ui.heading("Folio");
                ui.add_space(16.0);

                render_slides(ui, content.presentation, actions);
                ui.add_space(24.0);

                section_label(ui, "PLAYGROUND", content.palette);
                layout.stage_origin = Some(render_stage(ui, content.shape, content.palette, actions));
                ui.add_space(24.0);

                section_label(ui, "TABS", content.palette);
                render_tabs(ui, content.tabs, actions);
                ui.add_space(24.0);

                section_label(ui, "RESUME", content.palette);
                render_resume(ui, content.resume, content.palette, actions);

                // Room to scroll the handle out of view
                ui.add_space(if content.mobile { 120.0 } else { 480.0 });
            });
        layout.scroll_y = output.state.offset.y;
    });

    layout
}

fn render_slides(ui: &mut egui::Ui, presentation: &Presentation, actions: &mut Vec<UiAction>) {
    let view = presentation.view();
    let (rect, _) = ui.allocate_exact_size(vec2(ui.available_width(), SLIDE_HEIGHT), Sense::hover());
    let painter = ui.painter_at(rect);

    painter.rect_filled(rect, CornerRadius::same(16), rgb(view.slide.color));
    painter.text(
        rect.center() - vec2(0.0, 24.0),
        Align2::CENTER_CENTER,
        &view.slide.title,
        FontId::proportional(36.0),
        Color32::WHITE,
    );
    painter.text(
        Pos2::new(rect.right() - 16.0, rect.top() + 16.0),
        Align2::RIGHT_TOP,
        if view.autoplay { "autoplay" } else { "" },
        FontId::proportional(11.0),
        Color32::from_white_alpha(180),
    );

    let arrow = vec2(40.0, 40.0);
    let previous = Rect::from_center_size(Pos2::new(rect.left() + 32.0, rect.center().y), arrow);
    let next = Rect::from_center_size(Pos2::new(rect.right() - 32.0, rect.center().y), arrow);
    for (button, glyph, action, id) in [
        (previous, "‹", UiAction::PreviousSlide, "slide_previous"),
        (next, "›", UiAction::NextSlide, "slide_next"),
    ] {
        let response = ui
            .interact(button, ui.id().with(id), Sense::click())
            .on_hover_cursor(egui::CursorIcon::PointingHand);
        let alpha = if response.hovered() { 90 } else { 50 };
        painter.circle_filled(button.center(), 20.0, Color32::from_white_alpha(alpha));
        painter.text(
            button.center(),
            Align2::CENTER_CENTER,
            glyph,
            FontId::proportional(24.0),
            Color32::WHITE,
        );
        if response.clicked() {
            actions.push(action);
        }
    }

    let dots_rect = Rect::from_center_size(
        Pos2::new(rect.center().x, rect.bottom() - 24.0),
        vec2(rect.width(), 12.0),
    );
    let mut dots_ui = ui.new_child(
        egui::UiBuilder::new()
            .max_rect(dots_rect)
            .layout(egui::Layout::top_down(egui::Align::Center)),
    );
    if let Some(index) = slide_dots(&mut dots_ui, view.len, view.index) {
        actions.push(UiAction::GoToSlide(index));
    }
}

/// Paint the shape stage and report clicks. Returns the stage origin.
fn render_stage(
    ui: &mut egui::Ui,
    shape: &ShapeWidget,
    palette: &Palette,
    actions: &mut Vec<UiAction>,
) -> Pos2 {
    let (rect, response) =
        ui.allocate_exact_size(vec2(ui.available_width(), STAGE_HEIGHT), Sense::click());
    let origin = rect.min;
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, CornerRadius::same(12), palette.tile_bg);

    let view = shape.view();
    let bounds = to_egui_rect(view.bounds).translate(origin.to_vec2());
    painter.circle_filled(bounds.center(), bounds.width() / 2.0, palette.accent);
    if view.show_outline {
        paint_selection_outline(&painter, bounds.expand(2.0));
    }

    let hover = response.hover_pos().map(|pos| to_point((pos - origin).to_pos2()));
    for handle in &view.handles {
        let hit = to_egui_rect(handle.hit_rect).translate(origin.to_vec2());
        let hovered = hover.is_some_and(|point| handle.hit_test(point));
        paint_resize_handle(&painter, hit, hovered);
    }

    if let Some(point) = hover {
        ui.ctx().set_cursor_icon(cursor_icon(shape.cursor_at(point)));
    }
    if let Some(pos) = response.interact_pointer_pos().filter(|_| response.clicked()) {
        actions.push(UiAction::ShapeClicked(to_point((pos - origin).to_pos2())));
    }

    origin
}

fn render_tabs(ui: &mut egui::Ui, tabs: &TabStrip, actions: &mut Vec<UiAction>) {
    let buttons: Vec<TabButton<'_>> = tabs
        .tabs()
        .iter()
        .enumerate()
        .map(|(index, tab)| {
            TabButton::new(&tab.title, tabs.active_index() == index)
                .icon(tab.icon.as_deref())
                .overlap(index > 0)
        })
        .collect();
    let widths: Vec<f32> = buttons.iter().map(|button| button.width(ui)).collect();
    let total: f32 = widths.iter().sum::<f32>() - TAB_OVERLAP * widths.len().saturating_sub(1) as f32;

    let (strip, _) = ui.allocate_exact_size(vec2(total + 40.0, sizing::TAB_HEIGHT), Sense::hover());
    let mut rects = Vec::with_capacity(widths.len());
    let mut left = strip.left();
    for width in &widths {
        rects.push(Rect::from_min_size(Pos2::new(left, strip.top()), vec2(*width, strip.height())));
        left += width - TAB_OVERLAP;
    }

    // Paint in stacking order so the active tab ends up on top
    let mut order: Vec<usize> = (0..buttons.len()).collect();
    order.sort_by_key(|&index| tabs.z_order(index));
    let mut buttons: Vec<Option<TabButton<'_>>> = buttons.into_iter().map(Some).collect();
    for index in order {
        let Some(button) = buttons[index].take() else {
            continue;
        };
        let id = &tabs.tabs()[index].id;
        let response = button.show_at(ui, rects[index], ui.id().with(("tab", id)));
        if response.close_requested {
            actions.push(UiAction::CloseTab(id.clone()));
        } else if response.activated {
            actions.push(UiAction::ActivateTab(id.clone()));
        }
    }

    let add = Rect::from_min_size(Pos2::new(left + TAB_OVERLAP + 8.0, strip.top()), vec2(32.0, strip.height()));
    let response = ui
        .interact(add, ui.id().with("tab_add"), Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand);
    ui.painter().text(
        add.center(),
        Align2::CENTER_CENTER,
        "+",
        FontId::proportional(18.0),
        ui.visuals().text_color(),
    );
    if response.clicked() {
        actions.push(UiAction::AddTab);
    }

    let content = ui.allocate_exact_size(vec2(ui.available_width(), 120.0), Sense::hover()).0;
    ui.painter().rect_filled(content, CornerRadius::same(4), Color32::WHITE);
    ui.painter().text(
        content.left_top() + vec2(16.0, 16.0),
        Align2::LEFT_TOP,
        format!("{} Content", tabs.active().title),
        FontId::proportional(16.0),
        Color32::from_gray(40),
    );
}

/// Folder tabs: the active folder and the ones after it are raised.
fn render_resume(ui: &mut egui::Ui, resume: &ResumeTabs, palette: &Palette, actions: &mut Vec<UiAction>) {
    ui.horizontal(|ui| {
        for id in resume.order() {
            let raised = resume.is_after_active(id);
            let active = resume.active() == id.as_str();
            let (rect, response) = ui.allocate_exact_size(vec2(112.0, 32.0), Sense::click());
            let rect = if raised { rect } else { rect.translate(vec2(0.0, 4.0)) };
            let fill = if active { palette.accent } else { palette.tile_bg };
            ui.painter().rect_filled(rect, CornerRadius { nw: 8, ne: 8, sw: 0, se: 0 }, fill);
            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                id,
                FontId::proportional(13.0),
                if active { Color32::WHITE } else { palette.text },
            );
            if response.on_hover_cursor(egui::CursorIcon::PointingHand).clicked() {
                actions.push(UiAction::SelectResumeTab(id.clone()));
            }
        }
    });
}

/// Render the pull-down handle at the top right. Returns its rect.
pub fn render_handle(
    ctx: &Context,
    view: HandleView,
    palette: &Palette,
    actions: &mut Vec<UiAction>,
) -> Option<Rect> {
    if !view.visible {
        return None;
    }
    let area = egui::Area::new(Id::new("control_center_handle"))
        .anchor(Align2::RIGHT_TOP, Vec2::new(-16.0, 0.0))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            let (rect, response) = ui.allocate_exact_size(vec2(sizing::PANEL_WIDTH, 28.0), Sense::click());
            handle_pill(ui.painter(), rect, view.drag_offset as f32, palette);
            let response = response.on_hover_cursor(if view.dragging {
                egui::CursorIcon::Grabbing
            } else {
                egui::CursorIcon::Grab
            });
            if response.clicked() {
                actions.push(UiAction::HandleClicked);
            }
        });
    Some(area.response.rect)
}

/// Bottom navigation bar shown instead of the handle on narrow viewports.
pub fn render_mobile_nav(ctx: &Context, palette: &Palette, actions: &mut Vec<UiAction>) {
    egui::Area::new(Id::new("mobile_nav"))
        .anchor(Align2::CENTER_BOTTOM, Vec2::new(0.0, -16.0))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            panel_frame(palette, 1.0).show(ui, |ui| {
                if ControlTile::new("☰", "Control", palette).show(ui) {
                    actions.push(UiAction::OpenPanel);
                }
            });
        });
}

/// What the panel shows besides its own transition state.
pub struct PanelContent<'a> {
    pub palette: &'a Palette,
    pub theme: Theme,
    pub autoplay: bool,
}

/// Render the mounted panel. Returns its rect for outside-click detection.
pub fn render_panel(
    ctx: &Context,
    view: PanelView,
    content: &PanelContent<'_>,
    actions: &mut Vec<UiAction>,
) -> Rect {
    let opacity = ctx.animate_bool_with_time(Id::new("control_center_fade"), view.visible, 0.3);
    let viewport = ctx.input(|i| i.content_rect());

    match view.mode {
        PanelMode::Docked => {
            let left = viewport.right() - view.anchor.right as f32 - sizing::PANEL_WIDTH;
            let top = view.anchor.top as f32 - 8.0 * (1.0 - opacity);
            egui::Area::new(Id::new("control_center"))
                .fixed_pos(Pos2::new(left, top))
                .order(egui::Order::Foreground)
                .show(ctx, |ui| {
                    panel_frame(content.palette, opacity).show(ui, |ui| {
                        ui.set_width(sizing::PANEL_WIDTH - 24.0);
                        panel_controls(ui, content, actions);
                    });
                })
                .response
                .rect
        }
        PanelMode::Fullscreen => egui::Area::new(Id::new("control_center_fullscreen"))
            .fixed_pos(viewport.min + vec2(0.0, 24.0 * (1.0 - opacity)))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                ui.set_min_size(viewport.size());
                fullscreen_frame(content.palette, opacity).show(ui, |ui| {
                    ui.set_min_size(viewport.size() - vec2(32.0, 48.0));
                    ui.horizontal(|ui| {
                        ui.heading("Control Center");
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ControlTile::new("✕", "Close", content.palette).show(ui) {
                                actions.push(UiAction::ClosePanel);
                            }
                        });
                    });
                    panel_controls(ui, content, actions);
                });
            })
            .response
            .rect,
    }
}

fn panel_controls(ui: &mut egui::Ui, content: &PanelContent<'_>, actions: &mut Vec<UiAction>) {
    let palette = content.palette;
    section_label(ui, "CONTROL CENTER", palette);
    ui.add_space(4.0);

    ui.horizontal_wrapped(|ui| {
        let (glyph, caption) = match content.theme {
            Theme::Light => ("☾", "Dark"),
            Theme::Dark => ("☀", "Light"),
        };
        if ControlTile::new(glyph, caption, palette).show(ui) {
            actions.push(UiAction::ToggleTheme);
        }
        if ControlTile::new("⟳", "Autoplay", palette)
            .active(content.autoplay)
            .show(ui)
        {
            actions.push(UiAction::ToggleAutoplay);
        }
        if ControlTile::new("‹", "Previous", palette).show(ui) {
            actions.push(UiAction::PreviousSlide);
        }
        if ControlTile::new("›", "Next", palette).show(ui) {
            actions.push(UiAction::NextSlide);
        }
    });

    ui.add_space(4.0);
    separator(ui, palette);
    if TextButton::new("Close", palette).hint("Esc").show(ui) {
        actions.push(UiAction::ClosePanel);
    }
}
