//! Contact form input validation and submission status

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::ValidationError;

const MAX_NAME_LEN: usize = 200;
const MAX_EMAIL_LEN: usize = 320;
const MAX_SUBJECT_LEN: usize = 500;
const MAX_MESSAGE_LEN: usize = 10_000;

/// Structural email check only: something@something.tld. Deliverability
/// is not our problem.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("invalid email regex"));

/// Lifecycle status of a contact submission. No transitions are
/// implemented; every stored submission is `new`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    #[default]
    New,
    Read,
    Replied,
}

impl ContactStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Read => "read",
            Self::Replied => "replied",
        }
    }

    /// Parse a stored status value, defaulting unknown values to `new`.
    pub fn parse(s: &str) -> Self {
        match s {
            "read" => Self::Read,
            "replied" => Self::Replied,
            _ => Self::New,
        }
    }
}

/// A validated contact-form payload.
///
/// All four fields are required and non-empty after trimming.
#[derive(Debug, Clone)]
pub struct NewContactSubmission {
    name: String,
    email: String,
    subject: String,
    message: String,
}

impl NewContactSubmission {
    pub fn new(
        name: &str,
        email: &str,
        subject: &str,
        message: &str,
    ) -> Result<Self, ValidationError> {
        let name = required("name", name, MAX_NAME_LEN)?;
        let email = required("email", email, MAX_EMAIL_LEN)?;
        let subject = required("subject", subject, MAX_SUBJECT_LEN)?;
        let message = required("message", message, MAX_MESSAGE_LEN)?;

        if !EMAIL_RE.is_match(&email) {
            return Err(ValidationError::InvalidFormat {
                field: "email",
                reason: "must look like an email address",
            });
        }

        Ok(Self {
            name,
            email,
            subject,
            message,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

fn required(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    if trimmed.len() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(trimmed.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_submission() {
        let s = NewContactSubmission::new("A", "a@x.com", "S", "M").unwrap();
        assert_eq!(s.name(), "A");
        assert_eq!(s.email(), "a@x.com");
        assert_eq!(s.subject(), "S");
        assert_eq!(s.message(), "M");
    }

    #[test]
    fn trims_whitespace() {
        let s = NewContactSubmission::new("  A  ", "a@x.com", "S", " M ").unwrap();
        assert_eq!(s.name(), "A");
        assert_eq!(s.message(), "M");
    }

    #[test]
    fn rejects_empty_fields() {
        for (name, email, subject, message) in [
            ("", "a@x.com", "S", "M"),
            ("A", "", "S", "M"),
            ("A", "a@x.com", "", "M"),
            ("A", "a@x.com", "S", "   "),
        ] {
            let err = NewContactSubmission::new(name, email, subject, message).unwrap_err();
            assert!(matches!(err, ValidationError::Empty { .. }));
        }
    }

    #[test]
    fn rejects_malformed_email() {
        let err = NewContactSubmission::new("A", "not-an-email", "S", "M").unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidFormat { field: "email", .. }
        ));

        let err = NewContactSubmission::new("A", "a@b", "S", "M").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));
    }

    #[test]
    fn rejects_overlong_message() {
        let long = "x".repeat(MAX_MESSAGE_LEN + 1);
        let err = NewContactSubmission::new("A", "a@x.com", "S", &long).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::TooLong {
                field: "message",
                ..
            }
        ));
    }

    #[test]
    fn status_round_trip() {
        assert_eq!(ContactStatus::parse("new"), ContactStatus::New);
        assert_eq!(ContactStatus::parse("read"), ContactStatus::Read);
        assert_eq!(ContactStatus::parse("replied"), ContactStatus::Replied);
        assert_eq!(ContactStatus::parse("garbage"), ContactStatus::New);
        assert_eq!(ContactStatus::default().as_str(), "new");
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&ContactStatus::New).unwrap();
        assert_eq!(json, r#""new""#);
    }
}
