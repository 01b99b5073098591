// SPDX-License-Identifier: MPL-2.0
//! Contact form validation and simulated submission.
//!
//! Submission never leaves the process: a valid form enters
//! [`SubmitState::Submitting`] for a fixed delay and then resets.

use regex::Regex;
use std::sync::LazyLock;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Simulated network latency for a submission.
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(2000);

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Returns whether `email` looks like `local@domain.tld`.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Why a submission was refused. Deliberately coarse: no per-field detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("all fields are required")]
    MissingFields,
    #[error("email address is invalid")]
    InvalidEmail,
}

impl ValidationError {
    /// Returns the i18n message key for this error.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            ValidationError::MissingFields => "notification-contact-missing-fields",
            ValidationError::InvalidEmail => "notification-contact-invalid-email",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    /// Checks required fields first, then the email format.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() || self.email.is_empty() || self.message.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting { until: Instant },
}

/// Result of pressing the submit button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; the form is left as is.
    Rejected(ValidationError),
    /// The simulated submission started.
    Started,
    /// A submission is already in flight; this press was ignored.
    Busy,
}

#[derive(Debug, Clone)]
pub struct Submission {
    form: ContactForm,
    state: SubmitState,
    delay: Duration,
}

impl Default for Submission {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_DELAY)
    }
}

impl Submission {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            form: ContactForm::default(),
            state: SubmitState::Idle,
            delay,
        }
    }

    #[must_use]
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    /// Edits a field. Edits are ignored while submitting.
    pub fn edit(&mut self, field: Field, value: String) {
        if !self.is_submitting() {
            self.form.set(field, value);
        }
    }

    pub fn submit(&mut self, now: Instant) -> SubmitOutcome {
        if self.is_submitting() {
            return SubmitOutcome::Busy;
        }
        match self.form.validate() {
            Ok(()) => {
                self.state = SubmitState::Submitting {
                    until: now + self.delay,
                };
                SubmitOutcome::Started
            }
            Err(error) => SubmitOutcome::Rejected(error),
        }
    }

    /// Completes a due submission. Returns `true` when one just finished.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.state {
            SubmitState::Submitting { until } if now >= until => {
                self.form.clear();
                self.state = SubmitState::Idle;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn state(&self) -> SubmitState {
        self.state
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self.state, SubmitState::Submitting { .. })
    }
}
