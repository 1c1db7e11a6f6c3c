//! Contact form state.
//!
//! The form owns its field values, the focused field and the submission
//! status. Submission itself happens elsewhere: `begin_submit` hands out the
//! validated message, `finish_submit` takes the outcome back. Every method
//! that depends on time takes `now` from the caller.

use std::time::{Duration, Instant};

use folio_types::ContactMessage;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// How long a status notice stays up once it was set
pub const NOTICE_TTL: Duration = Duration::from_secs(4);

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Your Name",
            ContactField::Email => "Your Email",
            ContactField::Subject => "Subject",
            ContactField::Message => "Message",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            ContactField::Name => "John Doe",
            ContactField::Email => "john@example.com",
            ContactField::Subject => "Project Inquiry",
            ContactField::Message => "Tell me about your project...",
        }
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldProblem {
    Missing,
    InvalidEmail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: ContactField,
    pub problem: FieldProblem,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.problem {
            FieldProblem::Missing => write!(f, "{} is required", self.field.label()),
            FieldProblem::InvalidEmail => write!(f, "{} is not a valid address", self.field.label()),
        }
    }
}

/// Check a message before it is sent. Empty (or whitespace-only) fields
/// are missing; the e-mail must look like `local@domain.tld`.
pub fn validate(message: &ContactMessage) -> Vec<FieldError> {
    let mut errors = Vec::new();
    for field in ContactField::ALL {
        let value = field_value(message, field);
        if value.trim().is_empty() {
            errors.push(FieldError {
                field,
                problem: FieldProblem::Missing,
            });
        } else if field == ContactField::Email && !EMAIL_RE.is_match(value.trim()) {
            errors.push(FieldError {
                field,
                problem: FieldProblem::InvalidEmail,
            });
        }
    }
    errors
}

fn field_value(message: &ContactMessage, field: ContactField) -> &str {
    match field {
        ContactField::Name => &message.name,
        ContactField::Email => &message.email,
        ContactField::Subject => &message.subject,
        ContactField::Message => &message.message,
    }
}

fn field_value_mut(message: &mut ContactMessage, field: ContactField) -> &mut String {
    match field {
        ContactField::Name => &mut message.name,
        ContactField::Email => &mut message.email,
        ContactField::Subject => &mut message.subject,
        ContactField::Message => &mut message.message,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "lowercase")]
pub enum FormStatus {
    Idle,
    Sending,
    Sent,
    /// Carries the underlying reason, for logs
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Loading,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    message: ContactMessage,
    focus: ContactField,
    status: FormStatus,
    errors: Vec<FieldError>,
    /// When the current status notice expires
    clear_at: Option<Instant>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            message: ContactMessage::default(),
            focus: ContactField::Name,
            status: FormStatus::Idle,
            errors: Vec::new(),
            clear_at: None,
        }
    }

    pub fn message(&self) -> &ContactMessage {
        &self.message
    }

    pub fn value(&self, field: ContactField) -> &str {
        field_value(&self.message, field)
    }

    pub fn focus(&self) -> ContactField {
        self.focus
    }

    pub fn set_focus(&mut self, field: ContactField) {
        self.focus = field;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn is_sending(&self) -> bool {
        self.status == FormStatus::Sending
    }

    /// Validation problems from the last submit attempt
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn set_value(&mut self, field: ContactField, value: impl Into<String>) {
        *field_value_mut(&mut self.message, field) = value.into();
        self.errors.retain(|e| e.field != field);
    }

    /// Type into the focused field. Ignored while a submission is in flight.
    pub fn push_char(&mut self, c: char) {
        if self.is_sending() {
            return;
        }
        let field = self.focus;
        field_value_mut(&mut self.message, field).push(c);
        self.errors.retain(|e| e.field != field);
    }

    pub fn backspace(&mut self) {
        if self.is_sending() {
            return;
        }
        field_value_mut(&mut self.message, self.focus).pop();
    }

    /// Validate and move to `Sending`.
    ///
    /// Returns the message to send, or the validation errors (the status is
    /// left unchanged). A second submit while sending is rejected with no
    /// errors.
    pub fn begin_submit(&mut self) -> Result<ContactMessage, Vec<FieldError>> {
        if self.is_sending() {
            return Err(Vec::new());
        }
        let errors = validate(&self.message);
        if !errors.is_empty() {
            self.errors = errors.clone();
            return Err(errors);
        }
        self.errors.clear();
        self.status = FormStatus::Sending;
        self.clear_at = None;
        Ok(self.message.clone())
    }

    /// Record the submission outcome. Success clears every field.
    pub fn finish_submit(&mut self, result: Result<(), String>, now: Instant) {
        match result {
            Ok(()) => {
                self.status = FormStatus::Sent;
                self.message = ContactMessage::default();
                self.focus = ContactField::Name;
            }
            Err(reason) => {
                self.status = FormStatus::Failed(reason);
            }
        }
        self.clear_at = Some(now + NOTICE_TTL);
    }

    /// Expire the status notice. Returns whether anything changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.clear_at {
            Some(at) if now >= at => {
                self.status = FormStatus::Idle;
                self.clear_at = None;
                true
            }
            _ => false,
        }
    }

    pub fn notice(&self) -> Option<(NoticeKind, &'static str)> {
        match self.status {
            FormStatus::Idle => None,
            FormStatus::Sending => Some((NoticeKind::Loading, "Sending message...")),
            FormStatus::Sent => Some((
                NoticeKind::Success,
                "Thank you! Your message has been sent.",
            )),
            FormStatus::Failed(_) => Some((
                NoticeKind::Error,
                "Failed to send message. Please try again later.",
            )),
        }
    }
}
