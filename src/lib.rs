//! credforms - Credential form validation engine.
//!
//! Pure validation for the login, registration, and password-reset-request
//! screens of a web application: per-field rule checks, a cross-field
//! password confirmation, and a derived password-strength classification.
//! The presentation layer supplies raw field values and renders whatever
//! comes back; this crate holds no state of its own.

pub mod credentials;
pub mod logging;
pub mod strength;
pub mod validation;

pub use credentials::{
    Gender, GenderParseError, LoginCredentials, PasswordResetRequest, RegistrationCredentials,
};
pub use strength::{
    classify_password_strength, password_score, PasswordStrength, MAX_PASSWORD_SCORE,
};
pub use validation::rules::{
    ValidationError, MIN_ADDRESS_LENGTH, MIN_PASSWORD_LENGTH, MIN_PHONE_LENGTH, PASSWORD_SYMBOLS,
    REQUIRED_EMAIL_SUFFIX,
};
pub use validation::{
    validate_login, validate_password_reset_request, validate_registration, ValidationResult,
    FIELD_ADDRESS, FIELD_CONFIRM_PASSWORD, FIELD_DATE_OF_BIRTH, FIELD_EMAIL, FIELD_GENDER,
    FIELD_PASSWORD, FIELD_PHONE,
};
