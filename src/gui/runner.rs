//! GUI entry point

use anyhow::Result;
use tracing::info;

use crate::config::Settings;

use super::app::ChoreStarApp;

pub fn run_gui() -> Result<()> {
    let settings = Settings::load()?;
    info!(
        theme = %settings.theme,
        server = settings.has_server(),
        "starting dashboard"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([800.0, 500.0])
            .with_decorations(true)
            .with_resizable(true),
        centered: true,
        ..Default::default()
    };

    let app = ChoreStarApp::new(settings);

    eframe::run_native(
        "ChoreStar",
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run GUI: {}", e))?;

    Ok(())
}
