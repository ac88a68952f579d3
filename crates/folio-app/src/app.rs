//! The eframe application mounting the interaction controllers.

use egui::{Context, Modifiers, Pos2};
use folio_core::timer::earliest;
use folio_core::{
    EventResponse, InteractionConfig, ResumeTabs, ListenerKind, OverlayController, PointerEvent, Presentation,
    ShapeWidget, TabStrip, Theme, ThemePreference, ThemeStore, Timestamp,
};
use folio_widgets::Palette;

use crate::clock::Clock;
use crate::host::ScopedListeners;
use crate::input::{WATCHED_KEYS, cursor_icon, to_kurbo_rect, to_key, to_point};
use crate::ui::{self, PageContent, PageLayout, PanelContent, UiAction};

/// Platform theme persistence.
pub type PlatformThemeStore = Box<dyn ThemeStore>;

/// Main application state.
pub struct FolioApp {
    shape: ShapeWidget,
    overlay: OverlayController,
    presentation: Presentation,
    tabs: TabStrip,
    resume: ResumeTabs,
    theme: ThemePreference<PlatformThemeStore>,
    clock: Clock,
    shape_listeners: ScopedListeners,
    overlay_listeners: ScopedListeners,
    presentation_listeners: ScopedListeners,
    /// Geometry of the previous frame.
    layout: PageLayout,
}

impl FolioApp {
    pub fn new(ctx: &Context, config: InteractionConfig) -> Self {
        let viewport_width = ctx.input(|i| i.content_rect().width());
        let prefers_dark = ctx.style().visuals.dark_mode;

        let mut app = Self {
            shape: ShapeWidget::from_config(&config.shape),
            overlay: OverlayController::new(config.overlay.clone(), f64::from(viewport_width)),
            presentation: Presentation::with_default_deck(&config.presentation),
            tabs: TabStrip::default(),
            resume: ResumeTabs::default(),
            theme: ThemePreference::load(platform_theme_store(), prefers_dark),
            clock: Clock::new(),
            shape_listeners: ScopedListeners::new("shape"),
            overlay_listeners: ScopedListeners::new("overlay"),
            presentation_listeners: ScopedListeners::new("presentation"),
            layout: PageLayout::default(),
        };
        app.apply_theme(ctx);
        app.sync_listeners();
        log::info!("mounted with {} slides", app.presentation.len());
        app
    }

    fn palette(&self) -> Palette {
        Palette::for_dark_mode(self.theme.theme().is_dark())
    }

    fn apply_theme(&self, ctx: &Context) {
        ctx.set_visuals(match self.theme.theme() {
            Theme::Light => egui::Visuals::light(),
            Theme::Dark => egui::Visuals::dark(),
        });
    }

    fn sync_listeners(&mut self) {
        self.shape_listeners.sync(self.shape.required_listeners());
        self.overlay_listeners.sync(self.overlay.required_listeners());
        self.presentation_listeners
            .sync(self.presentation.required_listeners());
    }

    fn tick(&mut self, now: Timestamp) {
        self.overlay.tick(now);
        let advanced = self.presentation.tick(now);
        if advanced > 0 {
            log::debug!("autoplay advanced {advanced} slide(s)");
        }
    }

    fn dispatch_keys(&mut self, ctx: &Context, now: Timestamp) {
        for egui_key in WATCHED_KEYS {
            if !ctx.input(|i| i.key_pressed(egui_key)) {
                continue;
            }
            let key = to_key(egui_key);
            let mut response = EventResponse::IGNORED;
            if self.overlay_listeners.routes(ListenerKind::KeyDown) {
                response = response.merge(self.overlay.key_down(&key, now));
            }
            if self.presentation_listeners.routes(ListenerKind::KeyDown) {
                response = response.merge(self.presentation.key_down(&key, now));
            }
            if response.prevent_default {
                ctx.input_mut(|i| i.consume_key(Modifiers::NONE, egui_key));
            }
        }
    }

    /// Forward raw pointer input to the controllers whose listeners are routed.
    fn dispatch_pointer(&mut self, ctx: &Context, now: Timestamp) {
        let (pressed, released, press_origin, latest) = ctx.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.press_origin(),
                i.pointer.latest_pos(),
            )
        });

        if let Some(pos) = press_origin.filter(|_| pressed) {
            if self.overlay_listeners.routes(ListenerKind::PointerDownOutside) {
                self.overlay.pointer_down(to_point(pos), now);
            }
            if self.layout.handle_rect.is_some_and(|rect| rect.contains(pos)) {
                self.overlay.handle_pointer(PointerEvent::Down { position: to_point(pos) }, now);
            } else if !self.over_overlay(pos) {
                if let Some(point) = self.stage_point(pos) {
                    self.shape.pointer_down(point);
                }
            }
        }

        if let Some(pos) = latest {
            if self.shape_listeners.routes(ListenerKind::PointerMove) {
                if let Some(point) = self.stage_point(pos) {
                    self.shape.pointer_move(point);
                }
            }
            if self.overlay_listeners.routes(ListenerKind::PointerMove) {
                self.overlay
                    .handle_pointer(PointerEvent::Move { position: to_point(pos) }, now);
            }
        }

        if released {
            if self.shape_listeners.routes(ListenerKind::PointerUp) {
                self.shape.pointer_up();
            }
            if self.overlay_listeners.routes(ListenerKind::PointerUp) {
                let event = match latest {
                    Some(pos) => PointerEvent::Up { position: to_point(pos) },
                    None => PointerEvent::Leave,
                };
                self.overlay.handle_pointer(event, now);
            }
        }
    }

    fn over_overlay(&self, pos: Pos2) -> bool {
        self.layout.panel_rect.is_some_and(|rect| rect.contains(pos))
    }

    fn stage_point(&self, pos: Pos2) -> Option<kurbo::Point> {
        self.layout
            .stage_origin
            .map(|origin| to_point((pos - origin).to_pos2()))
    }

    fn apply(&mut self, ctx: &Context, action: UiAction, now: Timestamp) {
        match action {
            UiAction::ShapeClicked(point) => self.shape.click(point),
            UiAction::HandleClicked => {
                self.overlay.handle_click(now);
            }
            UiAction::OpenPanel => {
                self.overlay.open(now);
            }
            UiAction::ClosePanel => {
                self.overlay.close(now);
            }
            UiAction::ToggleTheme => {
                self.theme.toggle();
                self.apply_theme(ctx);
            }
            UiAction::ToggleAutoplay => self.presentation.toggle_autoplay(now),
            UiAction::NextSlide => self.presentation.next(),
            UiAction::PreviousSlide => self.presentation.previous(),
            UiAction::GoToSlide(index) => {
                if let Err(err) = self.presentation.go_to(index) {
                    log::warn!("{err}");
                }
            }
            UiAction::ActivateTab(id) => {
                if let Err(err) = self.tabs.activate(&id) {
                    log::warn!("{err}");
                }
            }
            UiAction::CloseTab(id) => {
                if let Err(err) = self.tabs.close(&id) {
                    log::debug!("{err}");
                }
            }
            UiAction::AddTab => {
                self.tabs.add("New Tab");
            }
            UiAction::SelectResumeTab(id) => {
                if let Err(err) = self.resume.select(&id) {
                    log::warn!("{err}");
                }
            }
        }
    }

    fn request_repaint(&self, ctx: &Context, now: Timestamp) {
        if let Some(deadline) = earliest(
            self.overlay.next_deadline(),
            self.presentation.next_deadline(),
        ) {
            ctx.request_repaint_after(deadline.saturating_sub(now));
        }
    }

    /// Cancel timers and drop every listener route.
    pub fn unmount(&mut self) {
        self.shape.unmount();
        self.overlay.unmount();
        self.presentation.unmount();
        self.shape_listeners.release();
        self.overlay_listeners.release();
        self.presentation_listeners.release();
        log::info!("unmounted");
    }
}

impl eframe::App for FolioApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let now = self.clock.now();

        if self.overlay_listeners.routes(ListenerKind::Resize) {
            let width = ctx.input(|i| i.content_rect().width());
            self.overlay.resize_viewport(f64::from(width));
        }
        self.tick(now);
        self.dispatch_keys(ctx, now);
        self.dispatch_pointer(ctx, now);

        let palette = self.palette();
        let overlay_view = self.overlay.view();
        let mut actions = Vec::new();

        let mut layout = ui::render_page(
            ctx,
            &PageContent {
                shape: &self.shape,
                presentation: &self.presentation,
                tabs: &self.tabs,
                resume: &self.resume,
                palette: &palette,
                mobile: overlay_view.mobile,
            },
            &mut actions,
        );

        if self.overlay_listeners.routes(ListenerKind::Scroll) {
            self.overlay.on_scroll(f64::from(layout.scroll_y));
        }

        layout.handle_rect = match overlay_view.handle {
            Some(handle) => ui::render_handle(ctx, handle, &palette, &mut actions),
            None => {
                ui::render_mobile_nav(ctx, &palette, &mut actions);
                None
            }
        };
        if let Some(rect) = layout.handle_rect {
            self.overlay
                .update_handle_position(folio_core::HandlePosition::from_rect(to_kurbo_rect(rect)));
        }

        layout.panel_rect = overlay_view.panel.map(|panel| {
            ui::render_panel(
                ctx,
                panel,
                &PanelContent {
                    palette: &palette,
                    theme: self.theme.theme(),
                    autoplay: self.presentation.is_autoplay(),
                },
                &mut actions,
            )
        });
        self.overlay
            .set_panel_bounds(layout.panel_rect.map(to_kurbo_rect));
        self.layout = layout;

        for action in actions {
            self.apply(ctx, action, now);
        }

        if let Some(drag) = self.shape.drag_state().resize_direction() {
            ctx.set_cursor_icon(cursor_icon(folio_core::Cursor::Resize(drag)));
        } else if self.shape.drag_state().is_active() {
            ctx.set_cursor_icon(egui::CursorIcon::Move);
        }

        self.sync_listeners();
        self.request_repaint(ctx, now);
    }
}

impl Drop for FolioApp {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn platform_theme_store() -> PlatformThemeStore {
    Box::new(folio_core::MemoryThemeStore::new())
}

#[cfg(target_arch = "wasm32")]
fn platform_theme_store() -> PlatformThemeStore {
    Box::new(crate::web::LocalStorageThemeStore)
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Event, PointerButton, RawInput};
    use kurbo::Point;

    fn run_frame(ctx: &Context, time: f64, events: Vec<Event>, mut dispatch: impl FnMut(&Context)) {
        let input = RawInput {
            time: Some(time),
            events,
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| dispatch(ctx));
    }

    fn key_press(key: egui::Key) -> Event {
        Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: Modifiers::NONE,
        }
    }

    fn app(ctx: &Context) -> FolioApp {
        FolioApp::new(ctx, InteractionConfig::default())
    }

    #[test]
    fn test_keys_reach_presentation_only_while_routed() {
        let ctx = Context::default();
        let mut app = app(&ctx);
        let now = Timestamp::ZERO;

        run_frame(&ctx, 0.0, vec![key_press(egui::Key::ArrowRight)], |ctx| {
            app.dispatch_keys(ctx, now)
        });
        assert_eq!(app.presentation.current(), 1);

        app.presentation_listeners.release();
        run_frame(&ctx, 0.1, vec![key_press(egui::Key::ArrowRight)], |ctx| {
            app.dispatch_keys(ctx, now)
        });
        assert_eq!(app.presentation.current(), 1);
    }

    #[test]
    fn test_shape_drag_follows_routed_listeners() {
        let ctx = Context::default();
        let mut app = app(&ctx);
        let now = Timestamp::ZERO;
        app.layout.stage_origin = Some(Pos2::ZERO);
        app.shape.click_shape();

        let center = Pos2::new(100.0, 100.0);
        run_frame(
            &ctx,
            0.0,
            vec![
                Event::PointerMoved(center),
                Event::PointerButton {
                    pos: center,
                    button: PointerButton::Primary,
                    pressed: true,
                    modifiers: Modifiers::NONE,
                },
            ],
            |ctx| app.dispatch_pointer(ctx, now),
        );
        assert!(app.shape.drag_state().is_active());
        assert!(!app.shape_listeners.routes(ListenerKind::PointerMove));

        // Moves are forwarded once the drag listeners are attached
        app.sync_listeners();
        run_frame(&ctx, 0.1, vec![Event::PointerMoved(Pos2::new(130.0, 110.0))], |ctx| {
            app.dispatch_pointer(ctx, now)
        });
        assert_eq!(app.shape.position(), Point::new(30.0, 10.0));

        app.shape_listeners.release();
        run_frame(&ctx, 0.2, vec![Event::PointerMoved(Pos2::new(160.0, 110.0))], |ctx| {
            app.dispatch_pointer(ctx, now)
        });
        assert_eq!(app.shape.position(), Point::new(30.0, 10.0));
    }
}
