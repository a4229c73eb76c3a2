use crate::gear::{GearDesign, GearInputs, InvalidInputError};

use super::drawable_design;
use crate::render::{self, GearRenderer};

/// State behind the slider dashboard.
///
/// Unlike the form, a rejected input clears the displayed result.
#[derive(Debug)]
pub struct DashboardShell {
    teeth: u32,
    module: f64,
    outcome: Result<GearDesign, InvalidInputError>,
}

impl DashboardShell {
    pub fn new(teeth: u32, module: f64) -> Self {
        Self {
            teeth,
            module,
            outcome: Self::evaluate(teeth, module),
        }
    }

    fn evaluate(teeth: u32, module: f64) -> Result<GearDesign, InvalidInputError> {
        GearInputs::new(i64::from(teeth), module).and_then(drawable_design)
    }

    /// Recompute if either slider moved. Returns true when it did.
    pub fn set_inputs(&mut self, teeth: u32, module: f64) -> bool {
        if teeth == self.teeth && module == self.module {
            return false;
        }
        self.teeth = teeth;
        self.module = module;
        self.outcome = Self::evaluate(teeth, module);
        if let Err(error) = &self.outcome {
            log::warn!("Dashboard input rejected ({}): {}", error.field, error.detail);
        }
        true
    }

    pub fn teeth(&self) -> u32 {
        self.teeth
    }

    pub fn module(&self) -> f64 {
        self.module
    }

    pub fn design(&self) -> Option<&GearDesign> {
        self.outcome.as_ref().ok()
    }

    pub fn error(&self) -> Option<&InvalidInputError> {
        self.outcome.as_ref().err()
    }

    /// Label and two-decimal value for each metric card
    pub fn metrics(&self) -> Vec<(&'static str, String)> {
        self.design()
            .map(|design| {
                design
                    .parameters
                    .labeled()
                    .iter()
                    .map(|(label, value)| (*label, format!("{:.2}", value)))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn present(&self, renderer: &mut dyn GearRenderer) -> bool {
        match self.design() {
            Some(design) => {
                render::present(design, renderer);
                true
            }
            None => false,
        }
    }
}
