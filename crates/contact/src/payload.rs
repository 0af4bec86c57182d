use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// The contact form payload, camelCase on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPayload {
    pub full_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

/// Form fields, for inline error placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContactField {
    FullName,
    Email,
    Phone,
    Subject,
    Message,
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContactField::FullName => "fullName",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        };
        f.write_str(name)
    }
}

/// A per-field validation error, surfaced inline next to the field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: ContactField,
    pub message: String,
}

impl FieldError {
    fn new(field: ContactField, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }
}

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex is valid")
});

impl ContactPayload {
    /// Validate locally before any network request. Returns every failing
    /// field so the form can show all inline errors at once.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.full_name.trim().is_empty() {
            errors.push(FieldError::new(ContactField::FullName, "Name is required"));
        }
        if !EMAIL_RE.is_match(self.email.trim()) {
            errors.push(FieldError::new(
                ContactField::Email,
                "Enter a valid email address",
            ));
        }
        // An empty phone counts as absent; a present one must be 10 digits.
        if let Some(phone) = self.phone.as_deref().filter(|p| !p.is_empty()) {
            if phone.chars().count() != 10 {
                errors.push(FieldError::new(
                    ContactField::Phone,
                    "Phone no. must be contain 10 digits",
                ));
            }
        }
        if self.subject.trim().is_empty() {
            errors.push(FieldError::new(ContactField::Subject, "Subject is required"));
        }
        if self.message.trim().is_empty() {
            errors.push(FieldError::new(ContactField::Message, "Message is required"));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
