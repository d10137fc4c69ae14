//! Client-side required-field check run before a form is submitted.
//!
//! When any required field is blank the submission is blocked and the user
//! is told through an error toast.

/// Message of the toast shown when required fields are blank.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all required fields";

/// Border colour put on a blank required input.
pub const INVALID_BORDER_COLOR: &str = "#f44336";

/// One input of a form, as seen by the check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldInput<'a> {
    /// `name` attribute (or any label the caller wants reported back).
    pub name: &'a str,
    /// Current value.
    pub value: &'a str,
    /// Whether the input carries the `required` attribute.
    pub required: bool,
}

impl FieldInput<'_> {
    /// A required field is blank when its value is empty after trimming.
    #[must_use]
    pub fn is_blank_required(&self) -> bool {
        self.required && self.value.trim().is_empty()
    }
}

/// Names of the required fields that are blank, in input order.
#[must_use]
pub fn missing_required_fields<'a>(fields: &[FieldInput<'a>]) -> Vec<&'a str> {
    fields
        .iter()
        .filter(|field| field.is_blank_required())
        .map(|field| field.name)
        .collect()
}
