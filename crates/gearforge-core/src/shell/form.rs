use crate::gear::{GearDesign, GearInputs, InvalidInputError};
use crate::render::{self, GearRenderer};

/// State behind the desktop form: two text entries and the last good result.
///
/// A rejected submit leaves the previous design on screen.
#[derive(Debug, Default)]
pub struct FormShell {
    pub teeth_text: String,
    pub module_text: String,
    design: Option<GearDesign>,
    error: Option<InvalidInputError>,
}

impl FormShell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the entries and recompute from scratch
    pub fn submit(&mut self) -> Result<&GearDesign, InvalidInputError> {
        match GearInputs::parse(&self.teeth_text, &self.module_text).and_then(super::drawable_design) {
            Ok(design) => {
                log::info!(
                    "Calculated gear: {} teeth, module {}",
                    design.inputs.teeth(),
                    design.inputs.module()
                );
                self.error = None;
                Ok(&*self.design.insert(design))
            }
            Err(error) => {
                log::warn!("Rejected form input ({}): {}", error.field, error.detail);
                self.error = Some(error.clone());
                Err(error)
            }
        }
    }

    pub fn design(&self) -> Option<&GearDesign> {
        self.design.as_ref()
    }

    /// The pending validation failure, until dismissed
    pub fn error(&self) -> Option<&InvalidInputError> {
        self.error.as_ref()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Text for the result label; empty before the first successful calculation
    pub fn result_text(&self) -> String {
        self.design
            .as_ref()
            .map(|design| design.parameters.format_parameters())
            .unwrap_or_default()
    }

    /// Draw the current design. Returns false when there is nothing to draw.
    pub fn present(&self, renderer: &mut dyn GearRenderer) -> bool {
        match &self.design {
            Some(design) => {
                render::present(design, renderer);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gear::InputField;
    use crate::shell::MAX_DRAWN_TEETH;

    fn filled(teeth: &str, module: &str) -> FormShell {
        let mut shell = FormShell::new();
        shell.teeth_text = teeth.to_string();
        shell.module_text = module.to_string();
        shell
    }

    #[test]
    fn test_submit_valid() {
        let mut shell = filled("40", "1.0");
        let design = shell.submit().unwrap();
        assert_eq!(design.outline.teeth_segments.len(), 40);
        assert_eq!(
            shell.result_text(),
            "Pitch Diameter: 40.00\nAddendum: 1.00\nDedendum: 1.16\nWhole Depth: 2.16\nCircular Pitch: 3.14"
        );
        assert!(shell.error().is_none());
    }

    #[test]
    fn test_failed_submit_keeps_previous_result() {
        let mut shell = filled("20", "2.5");
        shell.submit().unwrap();
        let before = shell.result_text();

        shell.module_text = "-1".to_string();
        assert!(shell.submit().is_err());
        assert_eq!(shell.result_text(), before);
        assert_eq!(
            shell.error().map(|e| e.to_string()).as_deref(),
            Some("Please enter valid positive numeric values.")
        );

        shell.dismiss_error();
        assert!(shell.error().is_none());
    }

    #[test]
    fn test_rejects_teeth_beyond_drawable_limit() {
        let mut shell = filled("4000000000", "1");
        assert_eq!(shell.submit().unwrap_err().field, InputField::Teeth);
        assert!(shell.design().is_none());

        shell.teeth_text = MAX_DRAWN_TEETH.to_string();
        assert!(shell.submit().is_ok());
    }

    #[test]
    fn test_overflowing_module_is_rejected() {
        let mut shell = filled("2", "1e308");
        assert_eq!(shell.submit().unwrap_err().field, InputField::Module);
        assert_eq!(shell.result_text(), "");
    }

    #[test]
    fn test_empty_form_has_no_result() {
        let mut shell = FormShell::new();
        assert!(shell.submit().is_err());
        assert_eq!(shell.result_text(), "");
        assert!(shell.design().is_none());
    }
}
