//! Folio Application
//!
//! eframe host for the Folio interaction controllers: translates egui input
//! into controller events, paints their projections and schedules repaints at
//! their timer deadlines.

mod app;
mod clock;
mod host;
mod input;
mod ui;

pub use app::{FolioApp, PlatformThemeStore};
pub use clock::Clock;
pub use ui::{PageLayout, UiAction};

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::run_wasm;
