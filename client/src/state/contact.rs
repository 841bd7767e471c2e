//! Contact form fields, validation, and submission status.
//!
//! DESIGN
//! ======
//! Validation is pure so the rules and their messages can be tested without
//! a browser. The component owns one `RwSignal<ContactForm>` and asks this
//! module what to show.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use serde::Serialize;

/// How long the "sent" banner stays up after a successful submission.
pub const SENT_BANNER_MS: u32 = 5_000;

/// One input of the contact form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

/// Per-field validation messages; `None` means the field is fine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Message => self.message,
        }
    }

    pub fn clear(&mut self, field: Field) {
        match field {
            Field::Name => self.name = None,
            Field::Email => self.email = None,
            Field::Message => self.message = None,
        }
    }
}

/// Where the form is in its submit cycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ContactStatus {
    #[default]
    Editing,
    Submitting,
    Sent,
    Failed(String),
}

/// Contact form state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub errors: FieldErrors,
    pub status: ContactStatus,
}

/// Fields sent to the mail template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub user_name: String,
    pub user_email: String,
    pub message: String,
}

impl ContactForm {
    /// Store typed input and clear that field's error.
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
        self.errors.clear(field);
    }

    /// Check every field.
    pub fn validate(&self) -> FieldErrors {
        let email = self.email.trim();
        FieldErrors {
            name: self.name.trim().is_empty().then_some("Name is required"),
            email: if email.is_empty() {
                Some("Email is required")
            } else if !is_valid_email(&self.email) {
                Some("Please enter a valid email")
            } else {
                None
            },
            message: self.message.trim().is_empty().then_some("Message is required"),
        }
    }

    /// Validate and, when clean, mark the form as submitting and return the
    /// payload to send. Errors are stored on the form either way.
    pub fn begin_submit(&mut self) -> Option<ContactPayload> {
        if self.status == ContactStatus::Submitting {
            return None;
        }
        self.errors = self.validate();
        if !self.errors.is_empty() {
            return None;
        }
        self.status = ContactStatus::Submitting;
        Some(ContactPayload {
            user_name: self.name.trim().to_owned(),
            user_email: self.email.trim().to_owned(),
            message: self.message.trim().to_owned(),
        })
    }

    /// Delivery succeeded: clear the inputs and show the banner.
    pub fn finish_sent(&mut self) {
        *self = Self { status: ContactStatus::Sent, ..Self::default() };
    }

    /// Delivery failed: keep the inputs so the visitor can retry.
    pub fn finish_failed(&mut self, reason: String) {
        self.status = ContactStatus::Failed(reason);
    }

    /// Banner timed out.
    pub fn dismiss_sent(&mut self) {
        if self.status == ContactStatus::Sent {
            self.status = ContactStatus::Editing;
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.status == ContactStatus::Submitting
    }

    pub fn failure(&self) -> Option<&str> {
        match &self.status {
            ContactStatus::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}

/// Loose address check: no whitespace, something before an `@`, and a dot
/// with text on both sides somewhere after it.
pub fn is_valid_email(value: &str) -> bool {
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some(at) = value.char_indices().skip(1).find(|(_, c)| *c == '@').map(|(i, _)| i) else {
        return false;
    };
    let Some(dot) = value.rfind('.') else {
        return false;
    };
    dot > at + 1 && dot + 1 < value.len()
}
