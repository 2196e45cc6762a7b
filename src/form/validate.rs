//! Field validators.
//!
//! Each validator is a pure function from the field's current value to a
//! [`ValidationResult`]. The caller decides what to do with the message.

use std::sync::LazyLock;

use regex::Regex;

use super::fields::{FieldId, FormValues};

pub const NAME_REQUIRED: &str = "Please enter your full name";
pub const NAME_TOO_SHORT: &str = "Name must be at least 3 characters long";
pub const EMAIL_REQUIRED: &str = "Please enter your email address";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const PHONE_INVALID: &str = "Please enter a valid Indian phone number";
pub const STATE_REQUIRED: &str = "Please select your state";
pub const INTERESTS_REQUIRED: &str = "Please select at least one way to contribute";
pub const CONSENT_REQUIRED: &str = "You must agree to the terms and conditions";

const NAME_MIN_CHARS: usize = 3;

// local@domain.tld, no whitespace and a single @.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

// Optional +91 / 0 / 91 prefix, then a 10-digit mobile number starting 7-9.
// ASCII digits only: `\d` would also take other scripts' digits.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\+91[-\s]?)?0?(91)?[789][0-9]{9}$").unwrap());

/// Outcome of validating one field (or one checkbox group).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub message: Option<String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            message: None,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: Some(message.into()),
        }
    }
}

pub fn validate_name(value: &str) -> ValidationResult {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return ValidationResult::invalid(NAME_REQUIRED);
    }
    if trimmed.chars().count() < NAME_MIN_CHARS {
        return ValidationResult::invalid(NAME_TOO_SHORT);
    }
    ValidationResult::valid()
}

pub fn validate_email(value: &str) -> ValidationResult {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return ValidationResult::invalid(EMAIL_REQUIRED);
    }
    if !EMAIL_RE.is_match(trimmed) {
        return ValidationResult::invalid(EMAIL_INVALID);
    }
    ValidationResult::valid()
}

/// Phone is optional: empty passes. Spaces and dashes are ignored.
pub fn validate_phone(value: &str) -> ValidationResult {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return ValidationResult::valid();
    }
    let compact: String = trimmed
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();
    if !PHONE_RE.is_match(&compact) {
        return ValidationResult::invalid(PHONE_INVALID);
    }
    ValidationResult::valid()
}

/// Required region select.
pub fn validate_state(value: &str) -> ValidationResult {
    if value.trim().is_empty() {
        ValidationResult::invalid(STATE_REQUIRED)
    } else {
        ValidationResult::valid()
    }
}

/// Validity of the whole interests group, not of any single checkbox.
pub fn validate_interests(checked: &[String]) -> ValidationResult {
    if checked.is_empty() {
        ValidationResult::invalid(INTERESTS_REQUIRED)
    } else {
        ValidationResult::valid()
    }
}

pub fn validate_consent(checked: bool) -> ValidationResult {
    if checked {
        ValidationResult::valid()
    } else {
        ValidationResult::invalid(CONSENT_REQUIRED)
    }
}

/// Run the validator bound to `field` against the current values.
///
/// Fields without a validator always pass.
pub fn validate_field(field: FieldId, values: &FormValues) -> ValidationResult {
    match field {
        FieldId::FullName => validate_name(&values.full_name),
        FieldId::Email => validate_email(&values.email),
        FieldId::Phone => validate_phone(&values.phone),
        FieldId::State => validate_state(&values.state),
        FieldId::Interests => validate_interests(&values.interests),
        FieldId::Consent => validate_consent(values.consent),
        _ => ValidationResult::valid(),
    }
}
