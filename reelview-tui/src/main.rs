use reelview_core::BrowserConfig;

fn main() -> anyhow::Result<()> {
    let log_path = reelview_tui::logging::init()?;
    log::info!("[Main] Logging to {}", log_path.display());

    let config = BrowserConfig::from_environment();
    match &config {
        Ok(config) => log::info!("[Main] Backend: {}", config.backend_url()),
        Err(err) => log::error!("[Main] Invalid browser configuration: {}", err),
    }

    reelview_tui::app::run(config)
}
