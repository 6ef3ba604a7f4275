//! Named field rules for the credential forms.
//!
//! Each rule is a standalone predicate over a raw field value, returning the
//! first constraint it finds violated. The per-form entry points in the
//! parent module schedule these rules in order.

use thiserror::Error;
use validator::ValidateEmail;

use crate::credentials::Gender;

/// Minimum password length.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Minimum phone number length.
pub const MIN_PHONE_LENGTH: usize = 10;

/// Minimum address length.
pub const MIN_ADDRESS_LENGTH: usize = 5;

/// Symbols that count as a password special character.
pub const PASSWORD_SYMBOLS: &str = "@$!%*?&";

/// Domain suffix every account email must carry.
pub const REQUIRED_EMAIL_SUFFIX: &str = "@gmail.com";

/// Validation errors.
///
/// The `Display` text of each variant is the message the presentation layer
/// shows next to the offending field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Email does not match the generic address grammar.
    #[error("Invalid email")]
    EmailInvalidFormat,

    /// Email is well formed but not a Gmail address.
    #[error("Email must be Gmail Address")]
    EmailNotGmail,

    /// Password is too short.
    #[error("Password must be at least {MIN_PASSWORD_LENGTH} characters")]
    PasswordTooShort,

    /// Password is missing a required character class.
    #[error("Password must contain at least 1 uppercase letter, 1 lowercase letter, 1 number, and 1 special character")]
    PasswordMissingCharClasses,

    /// Confirmation does not match the password.
    #[error("Passwords do not match")]
    PasswordsDoNotMatch,

    /// Date of birth was left empty.
    #[error("Date of birth is required")]
    DateOfBirthRequired,

    /// Phone number is too short.
    #[error("Phone number must be at least {MIN_PHONE_LENGTH} digits")]
    PhoneTooShort,

    /// Gender is not one of the listed options.
    #[error("Select a gender")]
    GenderNotListed,

    /// Address is too short.
    #[error("Address is required")]
    AddressTooShort,
}

/// Check that an email matches a generic address grammar.
///
/// The grammar itself comes from the `validator` crate; this rule does not
/// care which provider the address belongs to.
///
/// # Examples
///
/// ```
/// use credforms::validation::rules::email_format;
///
/// assert!(email_format("jane.doe@example.com").is_ok());
/// assert!(email_format("not-an-email").is_err());
/// ```
pub fn email_format(email: &str) -> Result<(), ValidationError> {
    if !email.validate_email() {
        return Err(ValidationError::EmailInvalidFormat);
    }
    Ok(())
}

/// Check that an email ends with the required Gmail suffix.
///
/// Runs after [`email_format`]; on its own it accepts any string that happens
/// to end with the suffix.
pub fn email_domain(email: &str) -> Result<(), ValidationError> {
    if !email.ends_with(REQUIRED_EMAIL_SUFFIX) {
        return Err(ValidationError::EmailNotGmail);
    }
    Ok(())
}

/// Check the minimum password length.
///
/// Length is counted in characters, not bytes.
pub fn password_length(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

/// Check that a password contains one uppercase letter, one lowercase
/// letter, one digit, and one symbol from [`PASSWORD_SYMBOLS`].
pub fn password_character_classes(password: &str) -> Result<(), ValidationError> {
    let has_uppercase = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lowercase = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(|c| PASSWORD_SYMBOLS.contains(c));

    if !has_uppercase || !has_lowercase || !has_digit || !has_symbol {
        return Err(ValidationError::PasswordMissingCharClasses);
    }
    Ok(())
}

/// Check that the confirmation field repeats the password exactly.
///
/// Cross-field rule; the resulting error belongs to the confirmation field,
/// not to the password itself.
pub fn confirm_password_matches(
    password: &str,
    confirm_password: &str,
) -> Result<(), ValidationError> {
    if password != confirm_password {
        return Err(ValidationError::PasswordsDoNotMatch);
    }
    Ok(())
}

/// Check that a date of birth was entered.
///
/// Presence only; the date picker in the presentation layer is responsible
/// for producing a well-formed ISO date.
pub fn date_of_birth_present(date_of_birth: &str) -> Result<(), ValidationError> {
    if date_of_birth.is_empty() {
        return Err(ValidationError::DateOfBirthRequired);
    }
    Ok(())
}

/// Check the minimum phone number length.
///
/// Length only; the characters themselves are not restricted to digits.
pub fn phone_length(phone: &str) -> Result<(), ValidationError> {
    if phone.chars().count() < MIN_PHONE_LENGTH {
        return Err(ValidationError::PhoneTooShort);
    }
    Ok(())
}

/// Check that a gender value is one of the listed options.
///
/// # Examples
///
/// ```
/// use credforms::validation::rules::gender_listed;
///
/// assert!(gender_listed("male").is_ok());
/// assert!(gender_listed("unknown").is_err());
/// ```
pub fn gender_listed(gender: &str) -> Result<(), ValidationError> {
    if gender.parse::<Gender>().is_err() {
        return Err(ValidationError::GenderNotListed);
    }
    Ok(())
}

/// Check the minimum address length.
pub fn address_length(address: &str) -> Result<(), ValidationError> {
    if address.chars().count() < MIN_ADDRESS_LENGTH {
        return Err(ValidationError::AddressTooShort);
    }
    Ok(())
}
