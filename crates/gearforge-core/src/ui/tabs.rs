use crate::GearForgeApp;
use crate::ui;

use serde::{Serialize, Deserialize};

use egui_lens::ReactiveEventLogger;

/// Define the tabs for the DockArea
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum TabKind {
    Form,
    Dashboard,
    Settings,
    EventLog,
}

pub struct TabParams<'a> {
    pub app: &'a mut GearForgeApp,
}

/// Tab container struct for DockArea
#[derive(Clone, Serialize, Deserialize)]
pub struct Tab {
    pub kind: TabKind,
}

impl Tab {
    pub fn new(kind: TabKind) -> Self {
        Self { kind }
    }

    pub fn title(&self) -> String {
        match self.kind {
            TabKind::Form => "Calculator".to_string(),
            TabKind::Dashboard => "Dashboard".to_string(),
            TabKind::Settings => "Settings".to_string(),
            TabKind::EventLog => "Event Log".to_string(),
        }
    }

    pub fn content(&self, ui: &mut egui::Ui, params: &mut TabParams<'_>) {
        let logger_state_clone = params.app.logger_state.clone();
        let log_colors_clone = params.app.log_colors.clone();

        match self.kind {
            TabKind::Form => {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui::show_form_panel(ui, params.app, &logger_state_clone, &log_colors_clone);
                });
            }
            TabKind::Dashboard => {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui::show_dashboard_panel(ui, params.app, &logger_state_clone, &log_colors_clone);
                });
            }
            TabKind::Settings => {
                ui::show_settings_panel(ui, params.app, &logger_state_clone, &log_colors_clone);
            }
            TabKind::EventLog => {
                let logger = ReactiveEventLogger::with_colors(&logger_state_clone, &log_colors_clone);
                logger.show(ui);
            }
        }
    }
}

pub struct TabViewer<'a> {
    pub app: &'a mut GearForgeApp,
}

impl<'a> egui_dock::TabViewer for TabViewer<'a> {
    type Tab = Tab;

    fn title(&mut self, tab: &mut Self::Tab) -> egui::WidgetText {
        tab.title().into()
    }

    fn ui(&mut self, ui: &mut egui::Ui, tab: &mut Self::Tab) {
        let mut params = TabParams {
            app: self.app,
        };
        tab.content(ui, &mut params);
    }
}
