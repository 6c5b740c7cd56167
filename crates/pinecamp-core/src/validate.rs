//! Field-level validation of booking form snapshots.
//!
//! Every rule runs independently, so a visitor sees all problems at once,
//! and errors always come back in the order name, phone, email, privacy.

use std::sync::LazyLock;

use regex::Regex;
use crate::snapshot::{FormSnapshot, FIELD_EMAIL, FIELD_NAME, FIELD_PHONE, FIELD_PRIVACY};

/// Korean mobile numbers with hyphens removed: `01X`, a 3-4 digit exchange,
/// then 4 trailing digits.
static MOBILE_PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^01[0-9][0-9]{3,4}[0-9]{4}$").expect("valid mobile phone regex")
});

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Why a single field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorKind {
    /// A required text field is blank.
    EmptyField,
    /// The value does not match the expected pattern.
    InvalidFormat,
    /// A required consent checkbox is unchecked.
    NotAccepted,
}

impl std::fmt::Display for FieldErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldErrorKind::EmptyField => write!(f, "empty_field"),
            FieldErrorKind::InvalidFormat => write!(f, "invalid_format"),
            FieldErrorKind::NotAccepted => write!(f, "not_accepted"),
        }
    }
}

/// One rejected field together with the message rendered under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub kind: FieldErrorKind,
    pub message: String,
}

impl FieldError {
    fn new(field: &str, kind: FieldErrorKind, message: &str) -> Self {
        Self {
            field: field.to_string(),
            kind,
            message: message.to_string(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Ordered field errors for one snapshot. Empty means the form is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: Vec<FieldError>,
}

impl ValidationResult {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Returns the error reported for `field`, if any.
    #[must_use]
    pub fn error_for(&self, field: &str) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }
}

pub const NAME_REQUIRED_MESSAGE: &str = "이름을 입력해주세요.";
pub const PHONE_INVALID_MESSAGE: &str = "올바른 연락처를 입력해주세요.";
pub const EMAIL_INVALID_MESSAGE: &str = "올바른 이메일 형식을 입력해주세요.";
pub const PRIVACY_REQUIRED_MESSAGE: &str = "개인정보 수집에 동의해주세요.";

/// Validates a snapshot. Pure and deterministic.
#[must_use]
pub fn validate(snapshot: &FormSnapshot) -> ValidationResult {
    let mut result = ValidationResult::default();

    if !is_valid_name(&snapshot.name) {
        result.push(FieldError::new(
            FIELD_NAME,
            FieldErrorKind::EmptyField,
            NAME_REQUIRED_MESSAGE,
        ));
    }

    if !is_valid_mobile_phone(&snapshot.phone) {
        result.push(FieldError::new(
            FIELD_PHONE,
            FieldErrorKind::InvalidFormat,
            PHONE_INVALID_MESSAGE,
        ));
    }

    if !snapshot.email.is_empty() && !is_valid_email(&snapshot.email) {
        result.push(FieldError::new(
            FIELD_EMAIL,
            FieldErrorKind::InvalidFormat,
            EMAIL_INVALID_MESSAGE,
        ));
    }

    if !snapshot.privacy_accepted {
        result.push(FieldError::new(
            FIELD_PRIVACY,
            FieldErrorKind::NotAccepted,
            PRIVACY_REQUIRED_MESSAGE,
        ));
    }

    result
}

/// A name is valid when anything but whitespace remains after trimming.
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    !name.trim().is_empty()
}

/// Checks a mobile number after removing `-` separators. No other
/// separators are tolerated.
#[must_use]
pub fn is_valid_mobile_phone(phone: &str) -> bool {
    let stripped = phone.replace('-', "");
    MOBILE_PHONE_RE.is_match(&stripped)
}

/// Loose `local@domain.tld` check. Whitespace and a second `@` are rejected.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[cfg(test)]
#[path = "validate_test.rs"]
mod tests;
