use crate::GearForgeApp;
use crate::constants::{FORM_PLOT_ID, LOG_TYPE_CALCULATION, LOG_TYPE_INPUT};
use crate::render::PlotRenderer;
use egui_lens::{ReactiveEventLogger, ReactiveEventLoggerState, LogColors};
use egui_mobius_reactive::Dynamic;

const FORM_PLOT_SIZE: f32 = 480.0;

/// Desktop form: two entries, a calculate button, the result label and the figure
pub fn show_form_panel<'a>(
    ui: &mut egui::Ui,
    app: &'a mut GearForgeApp,
    logger_state: &'a Dynamic<ReactiveEventLoggerState>,
    log_colors: &'a Dynamic<LogColors>,
) {
    let logger = ReactiveEventLogger::with_colors(logger_state, log_colors);

    ui.add_space(4.0);
    ui.label("Number of Teeth:");
    let teeth_response = ui.text_edit_singleline(&mut app.form.teeth_text);
    ui.label("Module:");
    let module_response = ui.text_edit_singleline(&mut app.form.module_text);

    let enter_pressed = (teeth_response.lost_focus() || module_response.lost_focus())
        && ui.input(|i| i.key_pressed(egui::Key::Enter));

    ui.add_space(4.0);
    if ui.button("Calculate & Visualize").clicked() || enter_pressed {
        match app.form.submit() {
            Ok(design) => {
                logger.log_custom(
                    LOG_TYPE_CALCULATION,
                    &format!(
                        "Form: {} teeth, module {} -> pitch diameter {:.2}",
                        design.inputs.teeth(),
                        design.inputs.module(),
                        design.parameters.pitch_diameter
                    ),
                );
            }
            Err(error) => {
                logger.log_custom(
                    LOG_TYPE_INPUT,
                    &format!("Form input rejected ({}): {}", error.field, error.detail),
                );
            }
        }
    }

    let result_text = app.form.result_text();
    if !result_text.is_empty() {
        ui.add_space(4.0);
        ui.label(egui::RichText::new(&result_text).monospace());
        if ui.small_button("📋 Copy results").clicked() {
            ui.ctx().copy_text(result_text);
            logger.log_info("Copied gear parameters to clipboard");
        }
    }

    ui.separator();
    let mut renderer = PlotRenderer::new(ui, FORM_PLOT_ID).with_max_size(FORM_PLOT_SIZE);
    app.form.present(&mut renderer);
}
