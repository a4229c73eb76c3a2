use crate::GearForgeApp;
use crate::constants::{DASHBOARD_PLOT_ID, LOG_TYPE_CALCULATION, LOG_TYPE_INPUT};
use crate::render::PlotRenderer;
use egui_lens::{ReactiveEventLogger, ReactiveEventLoggerState, LogColors};
use egui_mobius_reactive::Dynamic;

const SIDEBAR_WIDTH: f32 = 220.0;

/// Slider dashboard: inputs in a sidebar, metrics and the figure side by side
pub fn show_dashboard_panel<'a>(
    ui: &mut egui::Ui,
    app: &'a mut GearForgeApp,
    logger_state: &'a Dynamic<ReactiveEventLoggerState>,
    log_colors: &'a Dynamic<LogColors>,
) {
    let logger = ReactiveEventLogger::with_colors(logger_state, log_colors);

    ui.horizontal_top(|ui| {
        ui.vertical(|ui| {
            ui.set_width(SIDEBAR_WIDTH);
            show_sidebar(ui, app, &logger);
        });

        ui.separator();

        ui.vertical(|ui| {
            ui.heading("⚙ Gear Design Calculator");
            ui.label("This app calculates gear parameters based on the number of teeth and module value.");
            ui.add_space(8.0);

            ui.columns(2, |columns| {
                columns[0].heading("📊 Gear Parameters");
                if let Some(error) = app.dashboard.error() {
                    columns[0].colored_label(
                        egui::Color32::from_rgb(255, 90, 90),
                        format!("Error: {}", error),
                    );
                } else {
                    for (label, value) in app.dashboard.metrics() {
                        columns[0].label(egui::RichText::new(label).small().weak());
                        columns[0].label(egui::RichText::new(value).size(24.0).strong());
                        columns[0].add_space(6.0);
                    }
                }

                columns[1].heading("🛠 Gear Visualization");
                let mut renderer = PlotRenderer::new(&mut columns[1], DASHBOARD_PLOT_ID);
                app.dashboard.present(&mut renderer);
            });
        });
    });
}

fn show_sidebar(ui: &mut egui::Ui, app: &mut GearForgeApp, logger: &ReactiveEventLogger) {
    let [teeth_min, teeth_max] = app.config.teeth_range;
    let [module_min, module_max] = app.config.module_range;

    ui.heading("Gear Input Parameters");
    ui.add_space(4.0);

    let mut teeth = app.dashboard.teeth();
    ui.label("Number of Teeth");
    ui.add(egui::Slider::new(&mut teeth, teeth_min..=teeth_max).step_by(1.0));

    let mut module = app.dashboard.module();
    ui.label("Module");
    ui.add(egui::Slider::new(&mut module, module_min..=module_max).step_by(app.config.module_step));

    if app.dashboard.set_inputs(teeth, module) {
        match app.dashboard.error() {
            None => logger.log_custom(
                LOG_TYPE_CALCULATION,
                &format!("Dashboard: {} teeth, module {:.1}", teeth, module),
            ),
            Some(error) => logger.log_custom(
                LOG_TYPE_INPUT,
                &format!("Dashboard input rejected ({}): {}", error.field, error.detail),
            ),
        }
    }

    ui.add_space(8.0);
    ui.label("🔹 Adjust the sliders to see real-time changes.");
}
