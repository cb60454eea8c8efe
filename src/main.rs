// Instello Timetable Application
// Main entry point

use anyhow::Result;
use instello_timetable::services::config::AppConfig;
use instello_timetable::ui_egui::{initialize_database, TimetableApp};

fn main() -> Result<()> {
    let config = AppConfig::load_default()?;

    // RUST_LOG wins over the configured filter
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.log_filter()))
        .init();

    log::info!("Starting Instello Timetable");

    let database = initialize_database(&config.resolve_database_path())?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Instello Timetable")
            .with_inner_size([1100.0, 520.0])
            .with_min_inner_size([640.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Instello Timetable",
        options,
        Box::new(move |cc| Ok(Box::new(TimetableApp::new(cc, database)))),
    )
    .map_err(|err| anyhow::anyhow!("failed to launch timetable window: {err}"))
}
