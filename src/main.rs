use egui::ViewportBuilder;

use gearforge_core::GearForgeApp;
use gearforge_core::platform::parameters::gui;

/// The main function is the entry point of the application.
///
/// It initializes the logger, sets up the native window options,
/// and runs the application using the `eframe` framework.
fn main() -> eframe::Result<()> {
    // Configure env_logger from RUST_LOG; egui_dock is noisy at debug
    env_logger::Builder::from_default_env()
        .filter_module("egui_dock", log::LevelFilter::Warn)
        .init();

    eframe::run_native(
        gui::APPLICATION_NAME,
        eframe::NativeOptions {
            viewport: ViewportBuilder::default().with_inner_size([gui::VIEWPORT_X, gui::VIEWPORT_Y]),
            ..Default::default()
        },
        Box::new(|_cc| Ok(Box::new(GearForgeApp::new()))),
    )
}
