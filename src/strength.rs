//! Derived password-strength feedback for the registration screen.
//!
//! Recomputed from scratch on every keystroke; nothing here is stored. The
//! classification is advisory only and independent of whether the password
//! passes registration validation: a password can fail the composition rule
//! and still score `medium`.

use std::fmt;

use serde::Serialize;

use crate::validation::rules::{MIN_PASSWORD_LENGTH, PASSWORD_SYMBOLS};

/// Number of independent scoring criteria.
pub const MAX_PASSWORD_SCORE: u8 = 5;

/// Strength label for the meter next to the password input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordStrength {
    /// Nothing typed yet.
    Absent,
    /// At most two criteria met.
    Weak,
    /// Three or four criteria met.
    Medium,
    /// All five criteria met.
    Strong,
}

impl PasswordStrength {
    /// The lowercase label for this classification.
    pub fn as_str(&self) -> &'static str {
        match self {
            PasswordStrength::Absent => "absent",
            PasswordStrength::Weak => "weak",
            PasswordStrength::Medium => "medium",
            PasswordStrength::Strong => "strong",
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Score a password by its satisfied criteria.
///
/// One point each for: minimum length, an uppercase letter, a lowercase
/// letter, a digit, and a symbol from [`PASSWORD_SYMBOLS`].
pub fn password_score(password: &str) -> u8 {
    let mut score = 0;
    if password.chars().count() >= MIN_PASSWORD_LENGTH {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|c| PASSWORD_SYMBOLS.contains(c)) {
        score += 1;
    }
    score
}

/// Classify a password for the strength meter.
///
/// # Examples
///
/// ```
/// use credforms::{classify_password_strength, PasswordStrength};
///
/// assert_eq!(classify_password_strength(""), PasswordStrength::Absent);
/// assert_eq!(classify_password_strength("abc"), PasswordStrength::Weak);
/// assert_eq!(classify_password_strength("Abcdef1"), PasswordStrength::Medium);
/// assert_eq!(classify_password_strength("Abcdef1!"), PasswordStrength::Strong);
/// ```
pub fn classify_password_strength(password: &str) -> PasswordStrength {
    if password.is_empty() {
        return PasswordStrength::Absent;
    }
    match password_score(password) {
        0..=2 => PasswordStrength::Weak,
        3 | 4 => PasswordStrength::Medium,
        _ => PasswordStrength::Strong,
    }
}
