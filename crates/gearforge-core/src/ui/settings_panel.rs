use crate::GearForgeApp;
use crate::constants::LOG_TYPE_CONFIG;
use crate::shell::MAX_DRAWN_TEETH;
use egui_lens::{ReactiveEventLogger, ReactiveEventLoggerState, LogColors};
use egui_mobius_reactive::Dynamic;

pub fn show_settings_panel<'a>(
    ui: &mut egui::Ui,
    app: &'a mut GearForgeApp,
    logger_state: &'a Dynamic<ReactiveEventLoggerState>,
    log_colors: &'a Dynamic<LogColors>,
) {
    let logger = ReactiveEventLogger::with_colors(logger_state, log_colors);
    let draft = &mut app.draft_config;

    ui.heading("Dashboard Sliders");
    egui::Grid::new("slider_settings_grid")
        .num_columns(3)
        .spacing([8.0, 4.0])
        .show(ui, |ui| {
            ui.label("Teeth range:");
            ui.add(egui::DragValue::new(&mut draft.teeth_range[0]).range(1..=MAX_DRAWN_TEETH));
            ui.add(egui::DragValue::new(&mut draft.teeth_range[1]).range(1..=MAX_DRAWN_TEETH));
            ui.end_row();

            ui.label("Module range:");
            ui.add(egui::DragValue::new(&mut draft.module_range[0]).speed(0.1).suffix(" mm"));
            ui.add(egui::DragValue::new(&mut draft.module_range[1]).speed(0.1).suffix(" mm"));
            ui.end_row();

            ui.label("Module step:");
            ui.add(egui::DragValue::new(&mut draft.module_step).speed(0.01));
            ui.end_row();

            ui.label("Start at:");
            ui.add(egui::DragValue::new(&mut draft.default_teeth).suffix(" teeth"));
            ui.add(egui::DragValue::new(&mut draft.default_module).speed(0.1).suffix(" mm"));
            ui.end_row();
        });

    ui.separator();
    ui.heading("Event Log");
    ui.checkbox(&mut draft.show_timestamps, "Show timestamps (applies on restart)");

    ui.separator();
    ui.horizontal(|ui| {
        if ui.button("Apply & Save").clicked() {
            app.apply_settings(&logger);
        }
        if ui.button("Revert").clicked() {
            app.draft_config = app.config.clone();
            logger.log_custom(LOG_TYPE_CONFIG, "Discarded unsaved settings");
        }
    });
}
