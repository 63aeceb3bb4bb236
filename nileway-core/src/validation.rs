//! Form input validation.
//!
//! Both site forms are validated client-side only: fields must be non-empty
//! after trimming, and the contact form's email must look like a plausible
//! address. Nothing here talks to a server.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Local-part@domain shape with quoted local parts and bracketed IPv4
/// literals allowed. Checks syntax only; no DNS or mailbox verification.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z0-9-]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .expect("email pattern compiles")
});

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing field")]
    MissingField,
    #[error("invalid email")]
    InvalidEmail,
}

/// A contact-form submission, whitespace-trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    #[must_use]
    pub fn trimmed(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    /// All fields present, then the email shape check.
    ///
    /// # Errors
    /// `MissingField` when any field is empty after trimming, `InvalidEmail`
    /// when the email fails the syntax check.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() || self.email.is_empty() || self.message.is_empty() {
            return Err(ValidationError::MissingField);
        }
        if !email_is_valid(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }
}

/// A testimonial-form submission, whitespace-trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestimonialEntry {
    pub name: String,
    pub country: String,
    pub message: String,
}

impl TestimonialEntry {
    #[must_use]
    pub fn trimmed(name: &str, country: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            country: country.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    /// Testimonials only require every field to be present.
    ///
    /// # Errors
    /// `MissingField` when any field is empty after trimming.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() || self.country.is_empty() || self.message.is_empty() {
            return Err(ValidationError::MissingField);
        }
        Ok(())
    }
}

#[must_use]
pub fn email_is_valid(email: &str) -> bool {
    EMAIL_RE.is_match(&email.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(email_is_valid("a@b.com"));
        assert!(email_is_valid("first.last@sub.example.org"));
        assert!(email_is_valid("User+Tag@Example.COM"));
        assert!(email_is_valid("ops@[192.168.0.1]"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!email_is_valid("abc@"));
        assert!(!email_is_valid("abc"));
        assert!(!email_is_valid("@example.com"));
        assert!(!email_is_valid("a b@example.com"));
        assert!(!email_is_valid("a@example"));
        assert!(!email_is_valid("a@example..com"));
    }

    #[test]
    fn contact_requires_every_field() {
        let msg = ContactMessage::trimmed("  ", "a@b.com", "hi");
        assert_eq!(msg.validate(), Err(ValidationError::MissingField));
        let msg = ContactMessage::trimmed("Name", "a@b.com", "\t\n");
        assert_eq!(msg.validate(), Err(ValidationError::MissingField));
    }

    #[test]
    fn contact_checks_email_after_presence() {
        let msg = ContactMessage::trimmed("Name", "abc@", "hi");
        assert_eq!(msg.validate(), Err(ValidationError::InvalidEmail));
        let msg = ContactMessage::trimmed("Name", "a@b.com", "hi");
        assert_eq!(msg.validate(), Ok(()));
    }

    #[test]
    fn contact_trims_surrounding_whitespace() {
        let msg = ContactMessage::trimmed(" Name ", " a@b.com ", " hi ");
        assert_eq!(msg.name, "Name");
        assert_eq!(msg.email, "a@b.com");
        assert_eq!(msg.message, "hi");
        assert_eq!(msg.validate(), Ok(()));
    }

    #[test]
    fn testimonial_requires_every_field() {
        let entry = TestimonialEntry::trimmed("Ana", "", "Great trip");
        assert_eq!(entry.validate(), Err(ValidationError::MissingField));
        let entry = TestimonialEntry::trimmed("Ana", "Romania", "Great trip");
        assert_eq!(entry.validate(), Ok(()));
    }
}
