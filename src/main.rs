use eframe::egui;
use roster::{
    gui::{
        settings::{
            SettingsData,
            SETTINGS_FILE,
        },
        RosterApp,
    },
    persistence::load_json_or_default,
};
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings: SettingsData = load_json_or_default(SETTINGS_FILE);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Student Roster")
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([360.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Student Roster",
        options,
        Box::new(|cc| Ok(Box::new(RosterApp::new(cc, settings)))),
    )
}
