use crate::platform::parameters::gui::{APPLICATION_NAME, VERSION};

pub struct AboutPanel;

impl AboutPanel {
    pub fn render(ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(10.0);
            ui.label(egui::RichText::new(APPLICATION_NAME).size(18.0).strong());
            ui.label(
                egui::RichText::new(format!("version {}", VERSION))
                    .color(egui::Color32::from_rgb(150, 150, 150))
                    .size(14.0)
                    .strong(),
            );
            ui.add_space(10.0);
            ui.label(
                egui::RichText::new("Spur gear parameters from tooth count and module")
                    .size(14.0)
                    .italics(),
            );
            ui.add_space(10.0);
            ui.label(
                egui::RichText::new("Teeth are drawn as radial marks, not involute profiles.")
                    .size(12.0)
                    .color(egui::Color32::from_rgb(150, 150, 150)),
            );
            ui.add_space(5.0);
            ui.horizontal(|ui| {
                ui.label("Built with");
                ui.hyperlink_to("egui", "https://github.com/emilk/egui");
                ui.label("and");
                ui.hyperlink_to("egui_plot", "https://github.com/emilk/egui_plot");
            });
        });
    }
}
