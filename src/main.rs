use team_portal::gui::PortalApp;
use team_portal::links::{LinkStore, LINKS_FILE};
use team_portal::logging;
use team_portal::news::{NewsStore, NEWS_FILE};
use team_portal::settings::{Settings, SETTINGS_FILE};

use eframe::egui;
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    let settings = Settings::load(SETTINGS_FILE).unwrap_or_else(|e| {
        eprintln!("failed to read {SETTINGS_FILE}: {e}; using defaults");
        Settings::default()
    });
    logging::init(
        settings.debug_logging,
        settings.log_file.as_deref().map(PathBuf::from),
    );

    let links = LinkStore::open(LINKS_FILE);
    let news = NewsStore::open(NEWS_FILE);
    tracing::info!(
        links = links.len(),
        news = news.len(),
        theme = %settings.theme,
        "starting portal"
    );

    let (width, height) = settings.window_size.unwrap_or((900, 640));
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width as f32, height as f32])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Team Portal",
        native_options,
        Box::new(move |_cc| Box::new(PortalApp::new(settings, links, news, SETTINGS_FILE))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
