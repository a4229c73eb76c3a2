use crate::platform::banner;
use egui_lens::ReactiveEventLogger;

/// Initialize and display application banner
pub fn initialize_and_show_banner(logger: &ReactiveEventLogger) {
    let mut app_banner = banner::Banner::new();
    app_banner.format();
    logger.log_info(&app_banner.message);
    log::info!("{}", app_banner.message);
}
