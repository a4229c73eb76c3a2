pub mod about_panel;
pub mod dashboard_panel;
pub mod form_panel;
pub mod selection;
pub mod settings_panel;
pub mod tabs;

// Re-export the show functions for each panel
pub use about_panel::AboutPanel;
pub use dashboard_panel::show_dashboard_panel;
pub use form_panel::show_form_panel;
pub use settings_panel::show_settings_panel;

// Re-export tab-related types
pub use tabs::{Tab, TabKind, TabViewer};

pub use selection::initialize_and_show_banner;
