// Custom log types for different event categories
pub const LOG_TYPE_CALCULATION: &str = "calculation";
pub const LOG_TYPE_INPUT: &str = "input";
pub const LOG_TYPE_CONFIG: &str = "config";

// egui ids for the two plot surfaces
pub const FORM_PLOT_ID: &str = "form_gear_plot";
pub const DASHBOARD_PLOT_ID: &str = "dashboard_gear_plot";
