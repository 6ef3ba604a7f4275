//! Raw form input for the authentication screens.
//!
//! These types are snapshots of what the user typed, taken at submit time
//! (or per keystroke for live feedback). Nothing here is validated yet; the
//! gender arrives as the raw select value and is only parsed into [`Gender`]
//! by the validation rules.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Login form input.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginCredentials {
    /// Email address.
    pub email: String,
    /// Password.
    pub password: String,
}

impl LoginCredentials {
    /// Create a login snapshot.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Registration form input.
///
/// Deserializes from the camelCase keys the registration screen submits
/// (`confirmPassword`, `dateOfBirth`, ...).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationCredentials {
    /// Email address.
    pub email: String,
    /// Password.
    pub password: String,
    /// Password confirmation.
    pub confirm_password: String,
    /// Date of birth as an ISO date string.
    #[serde(default)]
    pub date_of_birth: String,
    /// Phone number.
    #[serde(default)]
    pub phone: String,
    /// Gender select value; expected to be one of the [`Gender`] literals.
    #[serde(default)]
    pub gender: String,
    /// Postal address.
    #[serde(default)]
    pub address: String,
}

impl RegistrationCredentials {
    /// Create a registration snapshot from the credential fields.
    ///
    /// The profile fields start empty; fill them with the `with_*` setters.
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            confirm_password: confirm_password.into(),
            date_of_birth: String::new(),
            phone: String::new(),
            gender: String::new(),
            address: String::new(),
        }
    }

    /// Set the date of birth.
    pub fn with_date_of_birth(mut self, date_of_birth: impl Into<String>) -> Self {
        self.date_of_birth = date_of_birth.into();
        self
    }

    /// Set the phone number.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Set the gender select value.
    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = gender.into();
        self
    }

    /// Set the postal address.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }
}

/// Password-reset request form input.
#[derive(Debug, Clone, Deserialize)]
pub struct PasswordResetRequest {
    /// Email address to send the reset link to.
    pub email: String,
}

impl PasswordResetRequest {
    /// Create a reset-request snapshot.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

/// Gender options offered by the registration screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// The literal select values, in display order.
    pub const LITERALS: [&'static str; 3] = ["male", "female", "other"];

    /// The lowercase literal for this option.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of the gender literals.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized gender: {0:?}")]
pub struct GenderParseError(String);

impl FromStr for Gender {
    type Err = GenderParseError;

    /// Parse one of the exact lowercase literals.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            other => Err(GenderParseError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_builder() {
        let input = RegistrationCredentials::new("jane@gmail.com", "Abcde1!", "Abcde1!")
            .with_date_of_birth("1999-12-31")
            .with_phone("1234567890")
            .with_gender("female")
            .with_address("221B Baker Street");

        assert_eq!(input.email, "jane@gmail.com");
        assert_eq!(input.confirm_password, "Abcde1!");
        assert_eq!(input.date_of_birth, "1999-12-31");
        assert_eq!(input.gender, "female");
    }

    #[test]
    fn test_registration_deserializes_camel_case() {
        let json = r#"{
            "email": "jane@gmail.com",
            "password": "Abcde1!",
            "confirmPassword": "Abcde1!",
            "dateOfBirth": "1999-12-31",
            "phone": "1234567890",
            "gender": "female",
            "address": "221B Baker Street"
        }"#;

        let input: RegistrationCredentials = serde_json::from_str(json).unwrap();
        assert_eq!(input.confirm_password, "Abcde1!");
        assert_eq!(input.date_of_birth, "1999-12-31");
    }

    #[test]
    fn test_registration_profile_fields_default_empty() {
        let json = r#"{
            "email": "jane@gmail.com",
            "password": "Abcde1!",
            "confirmPassword": "Abcde1!"
        }"#;

        let input: RegistrationCredentials = serde_json::from_str(json).unwrap();
        assert!(input.date_of_birth.is_empty());
        assert!(input.gender.is_empty());
    }

    #[test]
    fn test_gender_parse() {
        assert_eq!("male".parse::<Gender>(), Ok(Gender::Male));
        assert_eq!("female".parse::<Gender>(), Ok(Gender::Female));
        assert_eq!("other".parse::<Gender>(), Ok(Gender::Other));
        assert!("unknown".parse::<Gender>().is_err());
        assert!("MALE".parse::<Gender>().is_err()); // exact literals only
        assert!("".parse::<Gender>().is_err());
    }

    #[test]
    fn test_gender_display_round_trips() {
        for literal in Gender::LITERALS {
            let gender: Gender = literal.parse().unwrap();
            assert_eq!(gender.to_string(), literal);
        }
    }

    #[test]
    fn test_gender_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Gender::Female).unwrap(), "\"female\"");
        let parsed: Gender = serde_json::from_str("\"other\"").unwrap();
        assert_eq!(parsed, Gender::Other);
    }

    #[test]
    fn test_gender_parse_error_display() {
        let err = "unknown".parse::<Gender>().unwrap_err();
        assert!(err.to_string().contains("unknown"));
    }
}
