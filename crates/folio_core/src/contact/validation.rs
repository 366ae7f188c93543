//! Contact form validation rules.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Enter a valid email";
pub const MESSAGE_REQUIRED: &str = "Please write a message";

/// Input fields of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Name,
    Email,
    Message,
    /// Hidden honeypot input. Humans leave it empty.
    Company,
}

/// Raw form input as typed by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactFormValues {
    pub name: String,
    pub email: String,
    pub message: String,
    pub company: String,
}

impl ContactFormValues {
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
            ContactField::Company => &self.company,
        }
    }

    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
            ContactField::Company => self.company = value,
        }
    }
}

/// Outcome of [`validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub valid: bool,
    /// User-facing messages keyed by field. Never contains `Company`.
    pub field_errors: BTreeMap<ContactField, String>,
    suspected_bot: bool,
}

impl ValidationReport {
    /// Returns whether the honeypot field was filled in.
    pub fn is_suspected_bot(&self) -> bool {
        self.suspected_bot
    }

    pub fn error_for(&self, field: ContactField) -> Option<&str> {
        self.field_errors.get(&field).map(String::as_str)
    }
}

/// Returns whether `email` has a `local@domain.tld` shape.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Validates contact form input.
///
/// Rules:
/// - `name` and `message` must be non-blank.
/// - `email` must be non-blank and match `local@domain.tld`.
/// - a non-empty honeypot fails validation silently.
pub fn validate(values: &ContactFormValues) -> ValidationReport {
    let mut field_errors = BTreeMap::new();

    if values.name.trim().is_empty() {
        field_errors.insert(ContactField::Name, NAME_REQUIRED.to_string());
    }
    if values.email.trim().is_empty() {
        field_errors.insert(ContactField::Email, EMAIL_REQUIRED.to_string());
    } else if !is_valid_email(&values.email) {
        field_errors.insert(ContactField::Email, EMAIL_INVALID.to_string());
    }
    if values.message.trim().is_empty() {
        field_errors.insert(ContactField::Message, MESSAGE_REQUIRED.to_string());
    }

    let suspected_bot = !values.company.is_empty();
    ValidationReport {
        valid: field_errors.is_empty() && !suspected_bot,
        field_errors,
        suspected_bot,
    }
}

#[cfg(test)]
mod tests {
    use super::{is_valid_email, validate, ContactField, ContactFormValues, EMAIL_INVALID};

    #[test]
    fn email_shape_requires_local_domain_and_tld() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@@b.com"));
    }

    #[test]
    fn padded_email_is_rejected_as_invalid_not_missing() {
        let values = ContactFormValues {
            name: "A".to_string(),
            email: " a@b.com".to_string(),
            message: "hi".to_string(),
            company: String::new(),
        };
        let report = validate(&values);
        assert_eq!(report.error_for(ContactField::Email), Some(EMAIL_INVALID));
    }

    #[test]
    fn whitespace_honeypot_still_counts_as_filled() {
        let values = ContactFormValues {
            name: "A".to_string(),
            email: "a@b.com".to_string(),
            message: "hi".to_string(),
            company: " ".to_string(),
        };
        let report = validate(&values);
        assert!(!report.valid);
        assert!(report.is_suspected_bot());
    }

    #[test]
    fn set_field_round_trips_through_field() {
        let mut values = ContactFormValues::default();
        values.set_field(ContactField::Message, "hello");
        assert_eq!(values.field(ContactField::Message), "hello");
        assert_eq!(values.field(ContactField::Company), "");
    }
}
