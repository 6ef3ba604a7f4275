//! Structured outcome of validating one form submission.

use std::collections::HashMap;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Field-level validation outcome for a whole form.
///
/// Maps each field name to the ordered list of messages recorded against it;
/// a field with no entry is valid. Overall validity is derived, never stored:
/// the result is valid exactly when no field carries a message.
///
/// Serializes as `{"isValid": bool, "errors": {field: [message, ...]}}` so the
/// presentation layer can consume it directly.
///
/// # Examples
///
/// ```
/// use credforms::validation::ValidationResult;
///
/// let mut result = ValidationResult::new();
/// assert!(result.is_valid());
///
/// result.add_error("email", "Invalid email");
/// assert!(!result.is_valid());
/// assert_eq!(result.errors_for("email"), ["Invalid email"]);
/// assert!(result.errors_for("password").is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: HashMap<String, Vec<String>>,
}

impl ValidationResult {
    /// Create an empty (valid) result.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no field carries an error message.
    pub fn is_valid(&self) -> bool {
        self.errors.values().all(|messages| messages.is_empty())
    }

    /// Record an error message against a field.
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    /// Messages recorded against a field, in the order they were added.
    ///
    /// Returns an empty slice for a valid (or unknown) field.
    pub fn errors_for(&self, field: &str) -> &[String] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// First message recorded against a field, if any.
    pub fn first_error_for(&self, field: &str) -> Option<&str> {
        self.errors_for(field).first().map(String::as_str)
    }

    /// All field errors.
    pub fn field_errors(&self) -> &HashMap<String, Vec<String>> {
        &self.errors
    }

    /// Consume the result, yielding the field-error map.
    pub fn into_field_errors(self) -> HashMap<String, Vec<String>> {
        self.errors
    }
}

impl Serialize for ValidationResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("ValidationResult", 2)?;
        state.serialize_field("isValid", &self.is_valid())?;
        state.serialize_field("errors", &self.errors)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_result_is_valid() {
        let result = ValidationResult::new();
        assert!(result.is_valid());
        assert!(result.field_errors().is_empty());
        assert!(result.errors_for("email").is_empty());
        assert_eq!(result.first_error_for("email"), None);
    }

    #[test]
    fn test_add_error_invalidates() {
        let mut result = ValidationResult::new();
        result.add_error("email", "Invalid email");
        assert!(!result.is_valid());
        assert_eq!(result.errors_for("email"), ["Invalid email"]);
        assert_eq!(result.first_error_for("email"), Some("Invalid email"));
    }

    #[test]
    fn test_messages_keep_insertion_order() {
        let mut result = ValidationResult::new();
        result.add_error("password", "first");
        result.add_error("password", "second");
        assert_eq!(result.errors_for("password"), ["first", "second"]);
        assert_eq!(result.first_error_for("password"), Some("first"));
    }

    #[test]
    fn test_errors_scoped_per_field() {
        let mut result = ValidationResult::new();
        result.add_error("email", "Invalid email");
        assert!(result.errors_for("password").is_empty());
    }

    #[test]
    fn test_into_field_errors() {
        let mut result = ValidationResult::new();
        result.add_error("gender", "Select a gender");
        let errors = result.into_field_errors();
        assert_eq!(errors["gender"], ["Select a gender"]);
    }

    #[test]
    fn test_serialize_shape() {
        let mut result = ValidationResult::new();
        result.add_error("email", "Invalid email");

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["isValid"], serde_json::json!(false));
        assert_eq!(value["errors"]["email"][0], "Invalid email");
    }
}
