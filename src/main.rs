mod app;
mod config;
mod danmu;
mod filter;
mod fuzzy;
mod storage;

use eframe::egui;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let store = storage::FileStore::new();
    let config = storage::load(&store);
    info!("configuration loaded (version {})", config.version);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([440.0, 640.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Danmu Settings",
        options,
        Box::new(move |_cc| Ok(Box::new(app::SettingsApp::new(store, config)))),
    )
}
