//! Form validation for the authentication screens.
//!
//! Each screen has one entry point that runs an ordered list of named rules
//! per field, recording at most the first failing rule's message against that
//! field, then evaluates any cross-field rules. The entry points are pure:
//! identical input always produces an identical [`ValidationResult`].

pub mod result;
pub mod rules;

use tracing::debug;

use crate::credentials::{LoginCredentials, PasswordResetRequest, RegistrationCredentials};
use rules::ValidationError;

pub use result::ValidationResult;

/// Field key for the email input.
pub const FIELD_EMAIL: &str = "email";
/// Field key for the password input.
pub const FIELD_PASSWORD: &str = "password";
/// Field key for the password confirmation input.
pub const FIELD_CONFIRM_PASSWORD: &str = "confirmPassword";
/// Field key for the date-of-birth input.
pub const FIELD_DATE_OF_BIRTH: &str = "dateOfBirth";
/// Field key for the phone input.
pub const FIELD_PHONE: &str = "phone";
/// Field key for the gender select.
pub const FIELD_GENDER: &str = "gender";
/// Field key for the address input.
pub const FIELD_ADDRESS: &str = "address";

/// A single-field rule: the value either passes or yields one error.
type FieldRule = fn(&str) -> Result<(), ValidationError>;

/// Run a field's rules in order, recording the first failure only.
fn apply_rules(result: &mut ValidationResult, field: &str, value: &str, schedule: &[FieldRule]) {
    for rule in schedule {
        if let Err(error) = rule(value) {
            result.add_error(field, error.to_string());
            break;
        }
    }
}

/// Log a failed submission. Field names only, never values.
fn trace_outcome(form: &str, result: &ValidationResult) {
    if !result.is_valid() {
        debug!(
            form,
            invalid_fields = result.field_errors().len(),
            "form failed validation"
        );
    }
}

/// Validate a login submission.
///
/// The email must match the generic address grammar and carry the Gmail
/// suffix; the password only has to meet the minimum length. There are no
/// cross-field rules on this screen.
///
/// # Examples
///
/// ```
/// use credforms::{validate_login, LoginCredentials};
///
/// let ok = validate_login(&LoginCredentials::new("jane@gmail.com", "secret1"));
/// assert!(ok.is_valid());
///
/// let bad = validate_login(&LoginCredentials::new("jane@example.com", "secret1"));
/// assert_eq!(bad.errors_for("email"), ["Email must be Gmail Address"]);
/// ```
pub fn validate_login(input: &LoginCredentials) -> ValidationResult {
    let mut result = ValidationResult::new();

    apply_rules(
        &mut result,
        FIELD_EMAIL,
        &input.email,
        &[rules::email_format, rules::email_domain],
    );
    apply_rules(
        &mut result,
        FIELD_PASSWORD,
        &input.password,
        &[rules::password_length],
    );

    trace_outcome("login", &result);
    result
}

/// Validate a registration submission.
///
/// Every field is checked independently, so one invalid field never masks
/// another. The confirmation cross-check runs after the password's own rules
/// and regardless of their outcome; its error is recorded against the
/// confirmation field.
pub fn validate_registration(input: &RegistrationCredentials) -> ValidationResult {
    let mut result = ValidationResult::new();

    apply_rules(
        &mut result,
        FIELD_EMAIL,
        &input.email,
        &[rules::email_format, rules::email_domain],
    );
    apply_rules(
        &mut result,
        FIELD_PASSWORD,
        &input.password,
        &[rules::password_length, rules::password_character_classes],
    );
    if let Err(error) = rules::confirm_password_matches(&input.password, &input.confirm_password) {
        result.add_error(FIELD_CONFIRM_PASSWORD, error.to_string());
    }
    apply_rules(
        &mut result,
        FIELD_DATE_OF_BIRTH,
        &input.date_of_birth,
        &[rules::date_of_birth_present],
    );
    apply_rules(
        &mut result,
        FIELD_PHONE,
        &input.phone,
        &[rules::phone_length],
    );
    apply_rules(
        &mut result,
        FIELD_GENDER,
        &input.gender,
        &[rules::gender_listed],
    );
    apply_rules(
        &mut result,
        FIELD_ADDRESS,
        &input.address,
        &[rules::address_length],
    );

    trace_outcome("registration", &result);
    result
}

/// Validate a password-reset request.
///
/// Only the generic email grammar is checked on this screen; the Gmail
/// suffix rule that login and registration apply is deliberately absent
/// here, matching the deployed behavior.
pub fn validate_password_reset_request(input: &PasswordResetRequest) -> ValidationResult {
    let mut result = ValidationResult::new();

    apply_rules(
        &mut result,
        FIELD_EMAIL,
        &input.email,
        &[rules::email_format],
    );

    trace_outcome("password_reset_request", &result);
    result
}
