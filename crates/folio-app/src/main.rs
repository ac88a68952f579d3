//! Main application entry point (native).

#[cfg(feature = "native")]
fn main() -> eframe::Result<()> {
    env_logger::init();
    log::info!("Starting Folio");

    let config_path = folio_core::config::config_path();
    let config = folio_core::InteractionConfig::load_or_default(&config_path);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Folio")
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([360.0, 480.0]),
        ..Default::default()
    };
    let result = eframe::run_native(
        "Folio",
        native_options,
        Box::new(move |cc| Ok(Box::new(folio_app::FolioApp::new(&cc.egui_ctx, config)))),
    );
    if let Err(err) = &result {
        log::error!("Folio exited with error: {err}");
    }
    result
}

#[cfg(not(feature = "native"))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}
