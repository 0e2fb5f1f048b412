//! Field validators for the feedback form.

use once_cell::sync::Lazy;
use regex::Regex;

/// `local@domain.tld`: no whitespace or extra `@` in any part.
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex"));

/// Optional leading `+` followed by 7 to 15 ASCII digits, nothing else.
static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9]{7,15}$").expect("Invalid phone regex"));

/// Check whether `value` is shaped like an email address.
///
/// No normalization is applied: surrounding whitespace makes the value invalid.
pub fn is_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Check whether `value` is a bare phone number.
///
/// Separators, spaces and parentheses are rejected.
pub fn is_phone(value: &str) -> bool {
    PHONE_REGEX.is_match(value)
}
