use std::{fs, path::{Path, PathBuf}};

use egui_dock::{DockArea, DockState, NodeIndex, Style};

/// egui_lens imports
use egui_lens::{ReactiveEventLogger, ReactiveEventLoggerState, LogColors};
use egui_mobius_reactive::*;

use crate::config::{self, GearForgeConfig};
use crate::constants::LOG_TYPE_CONFIG;
use crate::platform::parameters::gui::{APPLICATION_NAME, VERSION};
use crate::shell::{DashboardShell, FormShell};
use crate::ui::{self, Tab, TabKind, TabViewer, initialize_and_show_banner};

const DOCK_STATE_FILE_NAME: &str = "dock_state.json";

/// The main application struct
pub struct GearForgeApp {
    // Logger state and colors
    pub logger_state: Dynamic<ReactiveEventLoggerState>,
    pub log_colors: Dynamic<LogColors>,

    // The two presentation shells
    pub form: FormShell,
    pub dashboard: DashboardShell,

    // Settings in effect, and the copy being edited in the Settings tab
    pub config: GearForgeConfig,
    pub draft_config: GearForgeConfig,
    pub config_path: PathBuf,

    // Dock state
    dock_state: DockState<Tab>,

    // Modal states
    pub show_about_modal: bool,
}

impl Drop for GearForgeApp {
    fn drop(&mut self) {
        self.save_dock_state();
        if let Err(e) = self.config.save_to_dir(&self.config_path) {
            log::error!("Failed to save settings: {}", e);
        }
    }
}

impl GearForgeApp {
    pub fn new() -> Self {
        let config_path = config::default_config_dir();
        let config = GearForgeConfig::load_or_default(&config_path);

        let mut initial_logger_state = ReactiveEventLoggerState::new();
        initial_logger_state.show_timestamps = config.show_timestamps;
        let logger_state = Dynamic::new(initial_logger_state);
        let log_colors = Dynamic::new(LogColors::default());

        let dock_state = Self::load_dock_state(&config_path)
            .unwrap_or_else(Self::create_default_dock_state);

        let app = Self {
            logger_state,
            log_colors,
            form: FormShell::new(),
            dashboard: DashboardShell::new(config.default_teeth, config.default_module),
            draft_config: config.clone(),
            config,
            config_path,
            dock_state,
            show_about_modal: false,
        };

        let logger = ReactiveEventLogger::with_colors(&app.logger_state, &app.log_colors);
        initialize_and_show_banner(&logger);
        logger.log_custom(
            LOG_TYPE_CONFIG,
            &format!("Settings directory: {}", app.config_path.display()),
        );

        app
    }

    fn create_default_dock_state() -> DockState<Tab> {
        let form_tab = Tab::new(TabKind::Form);
        let dashboard_tab = Tab::new(TabKind::Dashboard);
        let log_tab = Tab::new(TabKind::EventLog);
        let settings_tab = Tab::new(TabKind::Settings);

        // Calculator and dashboard share the main area
        let mut dock_state = DockState::new(vec![form_tab, dashboard_tab]);
        let surface = dock_state.main_surface_mut();

        // Event log and settings along the bottom
        surface.split_below(
            NodeIndex::root(),
            0.75, // Top takes 75% of height
            vec![log_tab, settings_tab],
        );

        dock_state
    }

    /// Validate the draft settings, then make them current and persist them
    pub fn apply_settings(&mut self, logger: &ReactiveEventLogger) {
        if let Err(e) = self.draft_config.validate() {
            logger.log_error(&format!("Settings not applied: {}", e));
            return;
        }

        self.config = self.draft_config.clone();

        // Keep the dashboard inside the new slider ranges
        let [teeth_min, teeth_max] = self.config.teeth_range;
        let [module_min, module_max] = self.config.module_range;
        let teeth = self.dashboard.teeth().clamp(teeth_min, teeth_max);
        let module = self.dashboard.module().clamp(module_min, module_max);
        self.dashboard.set_inputs(teeth, module);

        match self.config.save_to_dir(&self.config_path) {
            Ok(()) => logger.log_custom(LOG_TYPE_CONFIG, "Settings applied and saved"),
            Err(e) => logger.log_error(&format!("Settings applied but not saved: {}", e)),
        }
    }

    fn save_dock_state(&self) {
        if let Err(e) = fs::create_dir_all(&self.config_path) {
            log::error!("Failed to create config directory: {}", e);
            return;
        }
        let dock_path = self.config_path.join(DOCK_STATE_FILE_NAME);
        match serde_json::to_string_pretty(&self.dock_state) {
            Ok(json) => {
                if let Err(e) = fs::write(&dock_path, json) {
                    log::error!("Failed to write dock state: {}", e);
                }
            }
            Err(e) => {
                log::error!("Failed to serialize dock state: {}", e);
            }
        }
    }

    fn load_dock_state(config_path: &Path) -> Option<DockState<Tab>> {
        let dock_path = config_path.join(DOCK_STATE_FILE_NAME);
        let json = fs::read_to_string(&dock_path).ok()?;
        match serde_json::from_str::<DockState<Tab>>(&json) {
            Ok(dock_state) => Some(dock_state),
            Err(e) => {
                log::warn!("Failed to deserialize dock state: {}", e);
                // Delete corrupted file
                fs::remove_file(dock_path).ok();
                None
            }
        }
    }

    fn show_input_error_modal(&mut self, ctx: &egui::Context) {
        let Some(message) = self.form.error().map(|e| e.to_string()) else {
            return;
        };

        egui::Window::new("Input Error")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(message);
                ui.add_space(10.0);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("OK").clicked() {
                        self.form.dismiss_error();
                    }
                });
            });
    }
}

impl Default for GearForgeApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Implement the eframe::App trait for GearForgeApp
///
/// Every frame draws the ribbon, the dock area with both shells, and any
/// open modal. Calculations only run when a shell's inputs change.
impl eframe::App for GearForgeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("app_ribbon").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(APPLICATION_NAME).strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .button(
                            egui::RichText::new(format!("GearForge v{}", VERSION))
                                .color(egui::Color32::from_rgb(180, 200, 255)),
                        )
                        .clicked()
                    {
                        self.show_about_modal = true;
                    }
                });
            });
        });

        // Main dock area below the ribbon
        let mut dock_state = self.dock_state.clone();
        let mut tab_viewer = TabViewer { app: self };
        let mut style = Style::from_egui(ctx.style().as_ref());
        style.dock_area_padding = None;
        style.tab_bar.fill_tab_bar = true;

        DockArea::new(&mut dock_state)
            .style(style)
            .show_add_buttons(false)
            .show_close_buttons(false)
            .show(ctx, &mut tab_viewer);

        self.dock_state = dock_state;

        self.show_input_error_modal(ctx);

        if self.show_about_modal {
            egui::Window::new("About GearForge")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .show(ctx, |ui| {
                    ui::AboutPanel::render(ui);

                    ui.add_space(20.0);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Close").clicked() {
                            self.show_about_modal = false;
                        }
                    });
                });
        }
    }
}
