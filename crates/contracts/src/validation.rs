//! Field-level validation for dialog forms.
//!
//! Validation failures are recoverable: the dialog stays open and the
//! offending fields are flagged inline, so errors carry the field name
//! they belong to.

/// A single failed check, attached to the input it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Required-field check.
pub fn require(field: &'static str, value: &str) -> Option<FieldError> {
    if value.trim().is_empty() {
        Some(FieldError::new(field, "This field is required"))
    } else {
        None
    }
}

/// Required email with a format check on non-empty input.
pub fn require_email(field: &'static str, value: &str) -> Option<FieldError> {
    if let Some(err) = require(field, value) {
        return Some(err);
    }
    if !is_valid_email(value.trim()) {
        return Some(FieldError::new(
            field,
            "Please enter a valid email address",
        ));
    }
    None
}

/// Required positive number (amounts, prices).
pub fn require_positive_number(field: &'static str, value: &str) -> Option<FieldError> {
    if let Some(err) = require(field, value) {
        return Some(err);
    }
    match value.trim().parse::<f64>() {
        Ok(n) if n > 0.0 => None,
        _ => Some(FieldError::new(field, "Please enter a positive number")),
    }
}

/// Same shape the original login/settings forms enforced: one `@`,
/// something before it, and a dot somewhere in the domain part.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require() {
        assert!(require("name", "").is_some());
        assert!(require("name", "   ").is_some());
        assert!(require("name", "John Smith").is_none());
    }

    #[test]
    fn test_email_format() {
        assert!(is_valid_email("customer@example.com"));
        assert!(!is_valid_email("customer"));
        assert!(!is_valid_email("customer@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("customer@example"));
        assert!(!is_valid_email("cus tomer@example.com"));
        assert!(!is_valid_email("customer@.com"));
    }

    #[test]
    fn test_require_email_reports_field() {
        let err = require_email("email", "nope").unwrap();
        assert_eq!(err.field, "email");
        assert!(require_email("email", "a@b.co").is_none());
    }

    #[test]
    fn test_positive_number() {
        assert!(require_positive_number("amount", "2400").is_none());
        assert!(require_positive_number("amount", "2400.50").is_none());
        assert!(require_positive_number("amount", "0").is_some());
        assert!(require_positive_number("amount", "-5").is_some());
        assert!(require_positive_number("amount", "abc").is_some());
        assert!(require_positive_number("amount", "").is_some());
    }
}
