use std::sync::Arc;

use eframe::egui;
use flipwise::{
    api::ApiClient,
    core::tasks::TaskManager,
    gui::FlipwiseApp,
    persistence::LocalStorage,
    AppConfig,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::load();
    let storage = Arc::new(LocalStorage::open_default());
    let client = ApiClient::new(&config)?;
    log::info!("Talking to {}", client.base_url());

    let task_manager = TaskManager::new(client, storage)?;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Flipwise")
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Flipwise",
        native_options,
        Box::new(move |cc| Ok(Box::new(FlipwiseApp::new(cc, config, task_manager)))),
    )?;

    Ok(())
}
