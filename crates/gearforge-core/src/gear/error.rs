use std::fmt;

/// The input a validation failure refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Teeth,
    Module,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InputField::Teeth => write!(f, "teeth"),
            InputField::Module => write!(f, "module"),
        }
    }
}

/// Raised when teeth or module fail parsing or the positivity check.
///
/// Every failure shows the user the same message. `field` and `detail`
/// exist for the event log only.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("Please enter valid positive numeric values.")]
pub struct InvalidInputError {
    pub field: InputField,
    pub detail: String,
}

impl InvalidInputError {
    pub fn new(field: InputField, detail: impl Into<String>) -> Self {
        Self {
            field,
            detail: detail.into(),
        }
    }
}
