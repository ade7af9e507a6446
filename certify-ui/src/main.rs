// Desktop entry point for the certification portal
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use certify_ui::{AppConfig, CertifyApp};

    env_logger::init();

    let config = AppConfig::from_env()?;
    log::info!("Starting with config: {:?}", config);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size)
            .with_title(config.window_title.clone()),
        ..Default::default()
    };

    eframe::run_native(
        "Certification Portal",
        native_options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::new(CertifyApp::new(cc, config)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("eframe failed: {e}"))
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The browser build starts through `certify_ui::start`
}
