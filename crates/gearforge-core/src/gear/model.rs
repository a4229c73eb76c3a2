use std::f64::consts::PI;

use super::error::{InputField, InvalidInputError};

/// Dedendum factor for full-depth teeth with clearance
pub const DEDENDUM_COEFFICIENT: f64 = 1.157;

/// Validated calculator inputs. Both values are strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GearInputs {
    teeth: u32,
    module: f64,
}

impl GearInputs {
    /// Validate a tooth count and module
    pub fn new(teeth: i64, module: f64) -> Result<Self, InvalidInputError> {
        if teeth <= 0 {
            return Err(InvalidInputError::new(
                InputField::Teeth,
                format!("{} teeth is not a positive count", teeth),
            ));
        }
        let teeth = u32::try_from(teeth).map_err(|_| {
            InvalidInputError::new(InputField::Teeth, format!("{} teeth is out of range", teeth))
        })?;

        // NaN fails every comparison, so check finiteness first
        if !module.is_finite() || module <= 0.0 {
            return Err(InvalidInputError::new(
                InputField::Module,
                format!("module {} is not a positive number", module),
            ));
        }

        let inputs = Self { teeth, module };
        if GearParameters::from_inputs(&inputs)
            .labeled()
            .iter()
            .any(|(_, value)| !value.is_finite())
        {
            return Err(InvalidInputError::new(
                InputField::Module,
                format!("module {} with {} teeth overflows the derived dimensions", module, teeth),
            ));
        }

        Ok(inputs)
    }

    /// Parse raw text as entered in a form field
    pub fn parse(teeth_text: &str, module_text: &str) -> Result<Self, InvalidInputError> {
        let teeth = teeth_text.trim().parse::<i64>().map_err(|_| {
            InvalidInputError::new(
                InputField::Teeth,
                format!("'{}' is not a whole number", teeth_text.trim()),
            )
        })?;
        let module = module_text.trim().parse::<f64>().map_err(|_| {
            InvalidInputError::new(
                InputField::Module,
                format!("'{}' is not a number", module_text.trim()),
            )
        })?;
        Self::new(teeth, module)
    }

    pub fn teeth(&self) -> u32 {
        self.teeth
    }

    pub fn module(&self) -> f64 {
        self.module
    }
}

/// The five named gear parameters derived from a [`GearInputs`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GearParameters {
    pub pitch_diameter: f64,
    pub addendum: f64,
    pub dedendum: f64,
    pub whole_depth: f64,
    pub circular_pitch: f64,
}

impl GearParameters {
    pub fn from_inputs(inputs: &GearInputs) -> Self {
        let module = inputs.module();
        let pitch_diameter = module * inputs.teeth() as f64;
        let addendum = module;
        let dedendum = DEDENDUM_COEFFICIENT * module;

        Self {
            pitch_diameter,
            addendum,
            dedendum,
            whole_depth: addendum + dedendum,
            circular_pitch: PI * module,
        }
    }

    /// Values in display order, paired with their labels
    pub fn labeled(&self) -> [(&'static str, f64); 5] {
        [
            ("Pitch Diameter", self.pitch_diameter),
            ("Addendum", self.addendum),
            ("Dedendum", self.dedendum),
            ("Whole Depth", self.whole_depth),
            ("Circular Pitch", self.circular_pitch),
        ]
    }

    /// One `Label: value` line per parameter, two decimals each
    pub fn format_parameters(&self) -> String {
        self.labeled()
            .iter()
            .map(|(label, value)| format!("{}: {:.2}", label, value))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Validate raw numbers and derive the gear parameters
pub fn compute_parameters(teeth: i64, module: f64) -> Result<GearParameters, InvalidInputError> {
    let inputs = GearInputs::new(teeth, module)?;
    Ok(GearParameters::from_inputs(&inputs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_closed_form_parameters() {
        for (teeth, module) in [(5, 0.5), (17, 1.25), (64, 3.0), (100, 10.0)] {
            let params = compute_parameters(teeth, module).unwrap();
            assert_relative_eq!(params.pitch_diameter, module * teeth as f64);
            assert_relative_eq!(params.addendum, module);
            assert_relative_eq!(params.dedendum, 1.157 * module);
            assert_relative_eq!(params.whole_depth, params.addendum + params.dedendum);
            assert_relative_eq!(params.circular_pitch, PI * module);
        }
    }

    #[test]
    fn test_all_parameters_positive() {
        let params = compute_parameters(1, 0.001).unwrap();
        assert!(params.labeled().iter().all(|(_, value)| *value > 0.0));
    }

    #[test]
    fn test_rejects_non_positive() {
        assert_eq!(compute_parameters(0, 2.0).unwrap_err().field, InputField::Teeth);
        assert_eq!(compute_parameters(-3, 2.0).unwrap_err().field, InputField::Teeth);
        assert_eq!(compute_parameters(10, -1.0).unwrap_err().field, InputField::Module);
        assert_eq!(compute_parameters(10, 0.0).unwrap_err().field, InputField::Module);
    }

    #[test]
    fn test_rejects_non_finite_module() {
        assert!(compute_parameters(10, f64::NAN).is_err());
        assert!(compute_parameters(10, f64::INFINITY).is_err());
    }

    #[test]
    fn test_rejects_teeth_beyond_u32() {
        assert!(GearInputs::new(i64::from(u32::MAX) + 1, 1.0).is_err());
    }

    #[test]
    fn test_rejects_overflowing_dimensions() {
        let err = GearInputs::parse("2", "1e308").unwrap_err();
        assert_eq!(err.field, InputField::Module);
        // 2m stays finite here but pi * m does not
        assert!(compute_parameters(1, 6e307).is_err());
        assert!(compute_parameters(1, 1e300).is_ok());
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let inputs = GearInputs::parse(" 20 ", "2.5\n").unwrap();
        assert_eq!(inputs.teeth(), 20);
        assert_eq!(inputs.module(), 2.5);
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert_eq!(GearInputs::parse("abc", "2.5").unwrap_err().field, InputField::Teeth);
        assert_eq!(GearInputs::parse("20.5", "2.5").unwrap_err().field, InputField::Teeth);
        assert_eq!(GearInputs::parse("", "2.5").unwrap_err().field, InputField::Teeth);
        assert_eq!(GearInputs::parse("20", "two").unwrap_err().field, InputField::Module);
        assert_eq!(GearInputs::parse("20", "nan").unwrap_err().field, InputField::Module);
    }

    #[test]
    fn test_format_parameters() {
        let params = compute_parameters(20, 2.5).unwrap();
        assert_eq!(
            params.format_parameters(),
            "Pitch Diameter: 50.00\nAddendum: 2.50\nDedendum: 2.89\nWhole Depth: 5.39\nCircular Pitch: 7.85"
        );
    }

    #[test]
    fn test_stored_values_keep_full_precision() {
        let params = compute_parameters(20, 2.5).unwrap();
        assert!(params.dedendum > 2.89);
        assert_relative_eq!(params.dedendum, 2.8925, epsilon = 1e-12);
    }
}
