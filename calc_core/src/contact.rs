//! # Contact Form
//!
//! Validates contact form submissions and hands accepted ones to a
//! [`ContactSink`]. Delivery (e-mail, ticketing) lives behind the sink.
//!
//! ```rust
//! use calc_core::contact::{ContactForm, ContactSink, MemoryContactSink};
//!
//! let form = ContactForm {
//!     name: "Ada".to_string(),
//!     email: "ada@example.com".to_string(),
//!     subject: None,
//!     message: "The loan calculator is great.".to_string(),
//!     locale: None,
//! };
//! let sink = MemoryContactSink::default();
//! let submission = form.into_submission().unwrap();
//! sink.deliver(&submission).unwrap();
//! assert_eq!(sink.len(), 1);
//! ```

use std::sync::Mutex;

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::{CalcError, CalcResult};
use crate::i18n::Locale;

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 100;
pub const SUBJECT_MAX_CHARS: usize = 200;
pub const MESSAGE_MIN_CHARS: usize = 10;
pub const MESSAGE_MAX_CHARS: usize = 5000;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}$")
        .unwrap_or_else(|e| panic!("invalid e-mail pattern: {e}"))
});

/// Form fields as posted by the site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: Option<String>,
    pub message: String,
    /// Locale of the page the form was sent from
    #[serde(default)]
    pub locale: Option<String>,
}

fn check_length(field: &str, value: &str, min: usize, max: usize) -> CalcResult<()> {
    let chars = value.chars().count();
    if chars < min || chars > max {
        return Err(CalcError::invalid_input(
            field,
            chars.to_string(),
            format!("Must be between {} and {} characters", min, max),
        ));
    }
    Ok(())
}

impl ContactForm {
    /// Check every field; the first failing field is reported.
    pub fn validate(&self) -> CalcResult<()> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CalcError::missing_field("name"));
        }
        check_length("name", name, NAME_MIN_CHARS, NAME_MAX_CHARS)?;

        let email = self.email.trim();
        if email.is_empty() {
            return Err(CalcError::missing_field("email"));
        }
        if !EMAIL_RE.is_match(email) {
            return Err(CalcError::invalid_input("email", email, "Not a valid e-mail address"));
        }

        if let Some(subject) = &self.subject {
            check_length("subject", subject.trim(), 0, SUBJECT_MAX_CHARS)?;
        }

        let message = self.message.trim();
        if message.is_empty() {
            return Err(CalcError::missing_field("message"));
        }
        check_length("message", message, MESSAGE_MIN_CHARS, MESSAGE_MAX_CHARS)
    }

    /// Validate and stamp the form with an id and receive time.
    pub fn into_submission(self) -> CalcResult<ContactSubmission> {
        self.validate()?;
        let locale = self
            .locale
            .as_deref()
            .map(Locale::resolve)
            .unwrap_or_default();
        Ok(ContactSubmission {
            id: Uuid::new_v4(),
            received_at: Utc::now(),
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self
                .subject
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            message: self.message.trim().to_string(),
            locale,
        })
    }
}

/// An accepted contact form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub id: Uuid,
    pub received_at: DateTime<Utc>,
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
    pub locale: Locale,
}

/// Destination for accepted submissions.
pub trait ContactSink: Send + Sync {
    fn deliver(&self, submission: &ContactSubmission) -> CalcResult<()>;
}

/// Writes submissions to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingContactSink;

impl ContactSink for TracingContactSink {
    fn deliver(&self, submission: &ContactSubmission) -> CalcResult<()> {
        info!(
            id = %submission.id,
            locale = %submission.locale,
            email = %submission.email,
            subject = submission.subject.as_deref().unwrap_or(""),
            message_chars = submission.message.chars().count(),
            "Contact form received"
        );
        Ok(())
    }
}

/// Keeps submissions in memory.
#[derive(Debug, Default)]
pub struct MemoryContactSink {
    submissions: Mutex<Vec<ContactSubmission>>,
}

impl MemoryContactSink {
    pub fn submissions(&self) -> Vec<ContactSubmission> {
        self.submissions
            .lock()
            .map(|list| list.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.submissions.lock().map(|list| list.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ContactSink for MemoryContactSink {
    fn deliver(&self, submission: &ContactSubmission) -> CalcResult<()> {
        let mut list = self
            .submissions
            .lock()
            .map_err(|_| CalcError::internal("contact sink lock poisoned"))?;
        list.push(submission.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ContactForm {
        ContactForm {
            name: "Jane Doe".to_string(),
            email: "jane.doe@example.co.uk".to_string(),
            subject: Some("  Feedback ".to_string()),
            message: "Please add a tile calculator.".to_string(),
            locale: Some("pl".to_string()),
        }
    }

    #[test]
    fn test_valid_form_becomes_submission() {
        let submission = form().into_submission().unwrap();
        assert_eq!(submission.subject.as_deref(), Some("Feedback"));
        assert_eq!(submission.locale, Locale::Pl);
        assert_eq!(submission.id.get_version_num(), 4);
    }

    #[test]
    fn test_email_rejected() {
        for bad in ["jane", "jane@", "@example.com", "jane@example", "ja ne@example.com"] {
            let err = ContactForm { email: bad.to_string(), ..form() }.validate().unwrap_err();
            assert_eq!(err.field(), Some("email"), "{bad}");
        }
    }

    #[test]
    fn test_length_limits() {
        let short = ContactForm { message: "Too short".to_string(), ..form() };
        assert_eq!(short.validate().unwrap_err().error_code(), "INVALID_INPUT");

        let long_name = ContactForm { name: "x".repeat(101), ..form() };
        assert_eq!(long_name.validate().unwrap_err().field(), Some("name"));

        let long_subject = ContactForm { subject: Some("s".repeat(201)), ..form() };
        assert_eq!(long_subject.validate().unwrap_err().field(), Some("subject"));
    }

    #[test]
    fn test_blank_fields_are_missing() {
        let err = ContactForm { name: "   ".to_string(), ..form() }.validate().unwrap_err();
        assert_eq!(err.error_code(), "MISSING_FIELD");
    }

    #[test]
    fn test_unknown_locale_defaults() {
        let submission = ContactForm { locale: Some("xx".to_string()), ..form() }
            .into_submission()
            .unwrap();
        assert_eq!(submission.locale, Locale::En);
    }

    #[test]
    fn test_memory_sink_collects() {
        let sink = MemoryContactSink::default();
        sink.deliver(&form().into_submission().unwrap()).unwrap();
        assert_eq!(sink.submissions()[0].name, "Jane Doe");
    }
}
