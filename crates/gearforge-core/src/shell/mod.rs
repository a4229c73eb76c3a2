//! UI-free state of the two presentation shells
pub mod dashboard;
pub mod form;

pub use dashboard::DashboardShell;
pub use form::FormShell;

use crate::gear::{GearDesign, GearInputs, InputField, InvalidInputError};

/// Largest tooth count a shell will lay out and draw
pub const MAX_DRAWN_TEETH: u32 = 1000;

/// Compute a design, refusing tooth counts the plot cannot draw every frame
fn drawable_design(inputs: GearInputs) -> Result<GearDesign, InvalidInputError> {
    if inputs.teeth() > MAX_DRAWN_TEETH {
        return Err(InvalidInputError::new(
            InputField::Teeth,
            format!("{} teeth exceeds the limit of {}", inputs.teeth(), MAX_DRAWN_TEETH),
        ));
    }
    Ok(GearDesign::compute(inputs))
}
