//! Sending the contact form to a static form host.
//!
//! [`ContactSubmitter`] validates, then posts through a [`FormTransport`], refusing to
//! start a second request while one is outstanding. [`ContactSession`] layers the visible
//! form state on top: field edits, per-field errors and the timed success banner.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use crate::{
    contact::form::{ContactForm, Field, FieldErrors},
    foundation::error::{StarbrightError, StarbrightResult},
};

pub const SUCCESS_MESSAGE: &str =
    "Message transmission successful! We'll respond to your signal soon.";
pub const TRANSMISSION_ERROR: &str = "Transmission error! Please try again or contact us directly.";

/// How long the success state lasts before the form returns to idle.
pub const SUCCESS_RESET: Duration = Duration::from_secs(5);

/// Delivers URL-encoded form fields; returns the HTTP status code.
pub trait FormTransport {
    fn post_form(&self, path: &str, fields: &[(&'static str, String)]) -> StarbrightResult<u16>;
}

/// Blocking HTTP transport posting `application/x-www-form-urlencoded` bodies.
pub struct HttpTransport {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl HttpTransport {
    const TIMEOUT: Duration = Duration::from_secs(15);

    pub fn new(base_url: impl Into<String>) -> StarbrightResult<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Self::TIMEOUT)
            .build()
            .map_err(|e| StarbrightError::transport(format!("build http client: {e}")))?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl FormTransport for HttpTransport {
    fn post_form(&self, path: &str, fields: &[(&'static str, String)]) -> StarbrightResult<u16> {
        let url = format!("{}{path}", self.base_url);
        let resp = self
            .http
            .post(&url)
            .form(fields)
            .send()
            .map_err(|e| StarbrightError::transport(format!("POST {url}: {e}")))?;
        Ok(resp.status().as_u16())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The host accepted the form (2xx).
    Sent,
    /// Validation failed; nothing was sent.
    Invalid(FieldErrors),
    /// Another submission is still in flight; nothing was sent.
    Busy,
    /// Non-2xx status or transport failure.
    Failed,
}

struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

pub struct ContactSubmitter<T> {
    transport: T,
    in_flight: AtomicBool,
}

impl<T: FormTransport> ContactSubmitter<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Validate and post `form` to `/`. No retries.
    #[tracing::instrument(skip_all)]
    pub fn submit(&self, form: &ContactForm) -> SubmitOutcome {
        let errors = form.validate();
        if !errors.is_empty() {
            tracing::debug!(errors = errors.len(), "contact form invalid");
            return SubmitOutcome::Invalid(errors);
        }
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!("contact submission already in flight");
            return SubmitOutcome::Busy;
        }
        let _guard = InFlight(&self.in_flight);

        match self.transport.post_form("/", &form.to_pairs()) {
            Ok(status) if (200..300).contains(&status) => {
                tracing::debug!(status, "contact form sent");
                SubmitOutcome::Sent
            }
            Ok(status) => {
                tracing::debug!(status, "contact form rejected by host");
                SubmitOutcome::Failed
            }
            Err(err) => {
                tracing::debug!(%err, "contact form transport failed");
                SubmitOutcome::Failed
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

/// What a contact form shows between edits and submissions.
#[derive(Debug, Default)]
pub struct ContactSession {
    form: ContactForm,
    errors: FieldErrors,
    state: FormState,
    success_at: Option<Instant>,
}

impl ContactSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    /// Banner text for the current state, if any.
    pub fn status_message(&self) -> Option<&'static str> {
        match self.state {
            FormState::Success => Some(SUCCESS_MESSAGE),
            FormState::Error => Some(TRANSMISSION_ERROR),
            FormState::Idle | FormState::Submitting => None,
        }
    }

    /// Update a field; any error shown for it goes away.
    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value);
        self.errors.clear(field);
    }

    pub fn submit<T: FormTransport>(
        &mut self,
        submitter: &ContactSubmitter<T>,
        now: Instant,
    ) -> SubmitOutcome {
        if self.state == FormState::Submitting {
            return SubmitOutcome::Busy;
        }
        self.state = FormState::Submitting;
        let outcome = submitter.submit(&self.form);
        match &outcome {
            SubmitOutcome::Sent => {
                self.form.clear();
                self.errors = FieldErrors::default();
                self.state = FormState::Success;
                self.success_at = Some(now);
            }
            SubmitOutcome::Invalid(errors) => {
                self.errors = errors.clone();
                self.state = FormState::Idle;
            }
            SubmitOutcome::Busy => self.state = FormState::Idle,
            SubmitOutcome::Failed => self.state = FormState::Error,
        }
        outcome
    }

    /// Return to idle once the success state has lasted [`SUCCESS_RESET`].
    pub fn poll(&mut self, now: Instant) {
        if self.state == FormState::Success
            && let Some(at) = self.success_at
            && now.saturating_duration_since(at) >= SUCCESS_RESET
        {
            self.state = FormState::Idle;
            self.success_at = None;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/contact/submit.rs"]
mod tests;
