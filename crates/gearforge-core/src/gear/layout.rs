use std::f64::consts::TAU;

use nalgebra::Point2;

use super::model::{GearInputs, GearParameters};

/// One schematic tooth: a radial segment from the pitch circle outwards by one module
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToothSegment {
    pub index: u32,
    /// Angle in radians, counter-clockwise from +X
    pub angle: f64,
    pub start: Point2<f64>,
    pub end: Point2<f64>,
}

impl ToothSegment {
    pub fn length(&self) -> f64 {
        nalgebra::distance(&self.start, &self.end)
    }
}

/// Geometry needed to draw a schematic gear
#[derive(Debug, Clone, PartialEq)]
pub struct GearOutline {
    pub pitch_radius: f64,
    pub module: f64,
    pub teeth_segments: Vec<ToothSegment>,
}

impl GearOutline {
    /// Build the outline, re-deriving the pitch diameter as `module * teeth`
    pub fn for_inputs(inputs: &GearInputs) -> Self {
        let pitch_diameter = inputs.module() * inputs.teeth() as f64;
        Self::build(inputs.teeth(), inputs.module(), pitch_diameter)
    }

    fn build(teeth: u32, module: f64, pitch_diameter: f64) -> Self {
        let pitch_radius = pitch_diameter / 2.0;
        let tip_radius = pitch_radius + module;

        // Angles come straight from the index so nothing accumulates
        let teeth_segments = (0..teeth)
            .map(|i| {
                let angle = (TAU * i as f64) / teeth as f64;
                let (sin, cos) = angle.sin_cos();
                ToothSegment {
                    index: i,
                    angle,
                    start: Point2::new(pitch_radius * cos, pitch_radius * sin),
                    end: Point2::new(tip_radius * cos, tip_radius * sin),
                }
            })
            .collect();

        Self {
            pitch_radius,
            module,
            teeth_segments,
        }
    }

    /// Half-width of a square view that frames the gear without clipping
    pub fn viewport_bound(&self) -> f64 {
        self.pitch_radius + self.module
    }
}

/// Closed polyline approximating a circle about the origin
pub fn circle_points(radius: f64, samples: usize) -> Vec<Point2<f64>> {
    let samples = samples.max(3);
    (0..=samples)
        .map(|i| {
            let angle = (TAU * i as f64) / samples as f64;
            Point2::new(radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}

/// Lay out the teeth of a validated gear
pub fn compute_outline(inputs: &GearInputs, parameters: &GearParameters) -> GearOutline {
    GearOutline::build(inputs.teeth(), inputs.module(), parameters.pitch_diameter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn outline(teeth: i64, module: f64) -> GearOutline {
        let inputs = GearInputs::new(teeth, module).unwrap();
        compute_outline(&inputs, &GearParameters::from_inputs(&inputs))
    }

    #[test]
    fn test_segment_count_and_length() {
        for (teeth, module) in [(5, 1.0), (20, 2.5), (73, 0.8), (100, 10.0)] {
            let outline = outline(teeth, module);
            assert_eq!(outline.teeth_segments.len(), teeth as usize);
            for segment in &outline.teeth_segments {
                assert_relative_eq!(segment.length(), module, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_segment_endpoints_on_circles() {
        let outline = outline(37, 1.5);
        let origin = Point2::origin();
        for segment in &outline.teeth_segments {
            assert_relative_eq!(nalgebra::distance(&origin, &segment.start), outline.pitch_radius, epsilon = 1e-9);
            assert_relative_eq!(nalgebra::distance(&origin, &segment.end), outline.pitch_radius + 1.5, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_segments_in_index_order() {
        let outline = outline(12, 2.0);
        for (i, segment) in outline.teeth_segments.iter().enumerate() {
            assert_eq!(segment.index as usize, i);
        }
        assert!(outline.teeth_segments.windows(2).all(|w| w[0].angle < w[1].angle));
    }

    #[test]
    fn test_five_teeth_angles() {
        let outline = outline(5, 1.0);
        let degrees: Vec<f64> = outline.teeth_segments.iter().map(|s| s.angle.to_degrees()).collect();
        for (actual, expected) in degrees.iter().zip([0.0, 72.0, 144.0, 216.0, 288.0]) {
            assert_relative_eq!(*actual, expected, epsilon = 1e-9);
        }
        assert_relative_eq!(outline.teeth_segments[0].start.x, 2.5);
        assert_relative_eq!(outline.teeth_segments[0].end.x, 3.5);
    }

    #[test]
    fn test_viewport_bound() {
        let outline = outline(20, 2.5);
        assert_relative_eq!(outline.pitch_radius, 25.0);
        assert_relative_eq!(outline.viewport_bound(), 27.5);
    }

    #[test]
    fn test_rederived_outline_matches() {
        let inputs = GearInputs::new(24, 1.75).unwrap();
        let from_params = compute_outline(&inputs, &GearParameters::from_inputs(&inputs));
        assert_eq!(GearOutline::for_inputs(&inputs), from_params);
    }

    #[test]
    fn test_pitch_circle_is_closed() {
        let points = circle_points(5.0, 64);
        assert_eq!(points.len(), 65);
        assert_relative_eq!(points[0].x, points[64].x, epsilon = 1e-9);
        assert_relative_eq!(points[0].y, points[64].y, epsilon = 1e-9);
        assert!(points.iter().all(|p| (nalgebra::distance(&Point2::origin(), p) - 5.0).abs() < 1e-9));
    }
}
