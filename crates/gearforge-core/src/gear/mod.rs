//! Gear parameter model and schematic tooth layout.
//!
//! Everything here is pure: the same inputs always give bit-identical results.

pub mod error;
pub mod layout;
pub mod model;

pub use error::{InputField, InvalidInputError};
pub use layout::{circle_points, compute_outline, GearOutline, ToothSegment};
pub use model::{compute_parameters, GearInputs, GearParameters, DEDENDUM_COEFFICIENT};

/// Everything one calculate cycle produces
#[derive(Debug, Clone, PartialEq)]
pub struct GearDesign {
    pub inputs: GearInputs,
    pub parameters: GearParameters,
    pub outline: GearOutline,
}

impl GearDesign {
    pub fn compute(inputs: GearInputs) -> Self {
        let parameters = GearParameters::from_inputs(&inputs);
        let outline = compute_outline(&inputs, &parameters);
        Self {
            inputs,
            parameters,
            outline,
        }
    }

    /// Parse and validate raw form text, then compute
    pub fn from_text(teeth_text: &str, module_text: &str) -> Result<Self, InvalidInputError> {
        GearInputs::parse(teeth_text, module_text).map(Self::compute)
    }
}
