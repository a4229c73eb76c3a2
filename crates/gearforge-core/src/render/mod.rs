pub mod plot;

pub use plot::PlotRenderer;

use crate::gear::GearOutline;

/// A surface that can draw a schematic gear.
///
/// Each call replaces whatever the surface showed before.
pub trait GearRenderer {
    fn render_gear(&mut self, outline: &GearOutline, pitch_radius: f64, viewport_bound: f64);
}

/// Hand a design's outline to a renderer
pub fn present(design: &crate::gear::GearDesign, renderer: &mut dyn GearRenderer) {
    let outline = &design.outline;
    renderer.render_gear(outline, outline.pitch_radius, outline.viewport_bound());
}
