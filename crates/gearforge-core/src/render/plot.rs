use eframe::epaint::Color32;
use egui_plot::{Legend, Line, LineStyle, Plot, PlotBounds, PlotPoints};

use super::GearRenderer;
use crate::gear::{circle_points, GearOutline};

pub const PITCH_CIRCLE_SAMPLES: usize = 256;
pub const FIGURE_TITLE: &str = "Gear Visualization";

const PITCH_CIRCLE_COLOR: Color32 = Color32::from_rgb(40, 90, 220);
const TOOTH_COLOR: Color32 = Color32::from_rgb(220, 40, 40);

/// Draws a gear into an `egui_plot` figure inside the given `Ui`.
///
/// egui is immediate mode, so the figure is rebuilt every frame and never
/// keeps content from an earlier design.
pub struct PlotRenderer<'u> {
    ui: &'u mut egui::Ui,
    id_salt: &'static str,
    max_size: Option<f32>,
}

impl<'u> PlotRenderer<'u> {
    pub fn new(ui: &'u mut egui::Ui, id_salt: &'static str) -> Self {
        Self {
            ui,
            id_salt,
            max_size: None,
        }
    }

    /// Cap the square figure's edge length in points
    pub fn with_max_size(mut self, max_size: f32) -> Self {
        self.max_size = Some(max_size);
        self
    }
}

impl GearRenderer for PlotRenderer<'_> {
    fn render_gear(&mut self, outline: &GearOutline, pitch_radius: f64, viewport_bound: f64) {
        self.ui.label(egui::RichText::new(FIGURE_TITLE).strong().size(14.0));

        let pitch_circle: Vec<[f64; 2]> = circle_points(pitch_radius, PITCH_CIRCLE_SAMPLES)
            .iter()
            .map(|p| [p.x, p.y])
            .collect();

        let mut plot = Plot::new(self.id_salt)
            .data_aspect(1.0)
            .view_aspect(1.0)
            .legend(Legend::default())
            .show_grid(true)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .include_x(-viewport_bound)
            .include_x(viewport_bound)
            .include_y(-viewport_bound)
            .include_y(viewport_bound);
        if let Some(max_size) = self.max_size {
            plot = plot.width(max_size).height(max_size);
        }

        plot.show(self.ui, |plot_ui| {
            plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                [-viewport_bound, -viewport_bound],
                [viewport_bound, viewport_bound],
            ));

            plot_ui.line(
                Line::new("Pitch Circle", PlotPoints::from(pitch_circle))
                    .color(PITCH_CIRCLE_COLOR)
                    .style(LineStyle::dashed_dense())
                    .width(1.5),
            );

            // Same name on every tooth so the legend shows a single entry
            for segment in &outline.teeth_segments {
                let points = vec![[segment.start.x, segment.start.y], [segment.end.x, segment.end.y]];
                plot_ui.line(
                    Line::new("Teeth", PlotPoints::from(points))
                        .color(TOOTH_COLOR)
                        .width(2.0),
                );
            }
        });
    }
}
