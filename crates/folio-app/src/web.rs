//! WebAssembly entry point and platform-specific code.

use folio_core::ThemeStore;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Canvas element the app renders into.
const CANVAS_ID: &str = "folio_canvas";
/// localStorage key of the theme preference.
const THEME_KEY: &str = "theme";

/// Theme preference stored in `localStorage`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorageThemeStore;

impl LocalStorageThemeStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl ThemeStore for LocalStorageThemeStore {
    fn load(&self) -> Option<String> {
        Self::storage()?.get_item(THEME_KEY).ok().flatten()
    }

    fn save(&mut self, value: &str) {
        let Some(storage) = Self::storage() else {
            return;
        };
        if let Err(err) = storage.set_item(THEME_KEY, value) {
            log::warn!("failed to persist theme: {err:?}");
        }
    }
}

fn canvas() -> Option<web_sys::HtmlCanvasElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(CANVAS_ID)?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .ok()
}

/// Initialize and run the WASM application.
#[wasm_bindgen(start)]
pub async fn run_wasm() {
    // Set up panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::error_1(&format!("failed to initialize logger: {err}").into());
    }
    log::info!("Starting Folio (WASM)");

    let Some(canvas) = canvas() else {
        log::error!("no canvas with id {CANVAS_ID}");
        return;
    };

    let config = folio_core::InteractionConfig::default();
    let result = eframe::WebRunner::new()
        .start(
            canvas,
            eframe::WebOptions::default(),
            Box::new(move |cc| Ok(Box::new(crate::FolioApp::new(&cc.egui_ctx, config)))),
        )
        .await;
    if let Err(err) = result {
        log::error!("failed to start app: {err:?}");
    }
}
