//! Contact form draft and submission state machine.
//!
//! ```text
//! Idle ──begin_submit()──▶ Submitting ──finish_submit(Ok)──▶ Idle (cleared)
//!                                      ├─finish_submit(Err)─▶ Idle (values kept)
//!                                      └─abandon_submit()───▶ Idle (values kept)
//! ```
//!
//! A second `begin_submit()` while `Submitting` is rejected so a draft
//! is never sent twice. The send itself sits behind [`ContactSender`];
//! the site ships with [`SimulatedSender`], which only waits.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::error::{FormError, SendError};

/// The four required contact fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Subject,
        FormField::Message,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Subject => "Subject",
            FormField::Message => "Message",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::Name => "Your name",
            FormField::Email => "your@email.com",
            FormField::Subject => "What's this about?",
            FormField::Message => "Tell us about your idea or inquiry...",
        }
    }

    /// HTML input type.
    pub fn input_type(&self) -> &'static str {
        match self {
            FormField::Email => "email",
            _ => "text",
        }
    }
}

/// Field values as typed so far.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactFormDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFormDraft {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    fn slot(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Subject => &mut self.subject,
            FormField::Message => &mut self.message,
        }
    }

    /// Required fields that are empty or whitespace-only.
    pub fn missing_fields(&self) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|f| self.get(*f).trim().is_empty())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    pub fn is_blank(&self) -> bool {
        FormField::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

/// A complete draft handed to the sender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl From<&ContactFormDraft> for ContactSubmission {
    fn from(draft: &ContactFormDraft) -> Self {
        Self {
            name: draft.name.clone(),
            email: draft.email.clone(),
            subject: draft.subject.clone(),
            message: draft.message.clone(),
        }
    }
}

/// Result of a finished submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    Failed(SendError),
}

impl SubmitOutcome {
    /// Short notification text.
    pub fn message(&self) -> String {
        match self {
            SubmitOutcome::Sent => {
                "Message sent successfully! We'll get back to you soon.".to_string()
            }
            SubmitOutcome::Failed(e) if e.is_retryable() => {
                format!("Couldn't send your message ({e}). Your text is kept, please try again.")
            }
            SubmitOutcome::Failed(e) => format!("Couldn't send your message: {e}"),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Sent)
    }
}

/// Draft plus the in-flight flag.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    draft: ContactFormDraft,
    submitting: bool,
    last_error: Option<SendError>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update exactly one field.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        *self.draft.slot(field) = value.into();
    }

    pub fn field(&self, field: FormField) -> &str {
        self.draft.get(field)
    }

    pub fn draft(&self) -> &ContactFormDraft {
        &self.draft
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn missing_fields(&self) -> Vec<FormField> {
        self.draft.missing_fields()
    }

    pub fn last_error(&self) -> Option<&SendError> {
        self.last_error.as_ref()
    }

    /// Validate and enter `Submitting`, returning what to send.
    pub fn begin_submit(&mut self) -> Result<ContactSubmission, FormError> {
        if self.submitting {
            tracing::warn!("rejecting submit while a send is in flight");
            return Err(FormError::AlreadySubmitting);
        }
        let missing = self.draft.missing_fields();
        if !missing.is_empty() {
            return Err(FormError::MissingFields(missing));
        }
        self.submitting = true;
        self.last_error = None;
        tracing::info!(subject = %self.draft.subject, "contact submission started");
        Ok(ContactSubmission::from(&self.draft))
    }

    /// Leave `Submitting` without a result; the draft is kept.
    pub fn abandon_submit(&mut self) {
        if self.submitting {
            self.submitting = false;
            tracing::warn!("contact submission abandoned before the send settled");
        }
    }

    /// Leave `Submitting`. Success clears every field; failure keeps the
    /// values so the visitor can retry.
    pub fn finish_submit(&mut self, result: Result<(), SendError>) -> SubmitOutcome {
        self.submitting = false;
        match result {
            Ok(()) => {
                self.draft = ContactFormDraft::default();
                tracing::info!("contact submission sent");
                SubmitOutcome::Sent
            }
            Err(e) => {
                tracing::warn!(error = %e, "contact submission failed");
                self.last_error = Some(e.clone());
                SubmitOutcome::Failed(e)
            }
        }
    }
}

/// Delivers a contact submission somewhere.
pub trait ContactSender: Send + Sync {
    fn send(
        &self,
        submission: &ContactSubmission,
    ) -> impl Future<Output = Result<(), SendError>> + Send;
}

/// Waits a fixed latency, then reports success. No network involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedSender {
    latency: Duration,
}

impl SimulatedSender {
    pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1000);

    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

impl Default for SimulatedSender {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LATENCY)
    }
}

impl ContactSender for SimulatedSender {
    async fn send(&self, submission: &ContactSubmission) -> Result<(), SendError> {
        tracing::debug!(
            from = %submission.email,
            latency_ms = self.latency.as_millis() as u64,
            "simulating send"
        );
        tokio::time::sleep(self.latency).await;
        Ok(())
    }
}

/// Headless controller: shared [`FormState`] plus a sender.
///
/// Cloning shares the same state, so concurrent submits see each
/// other's in-flight flag. The page drives it in two steps
/// ([`begin`](Self::begin), then [`PendingSubmit::send`]) so it can
/// render the `Submitting` state in between; [`submit`](Self::submit)
/// runs both.
#[derive(Debug)]
pub struct ContactForm<S> {
    state: Arc<Mutex<FormState>>,
    sender: Arc<S>,
}

impl<S> Clone for ContactForm<S> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            sender: Arc::clone(&self.sender),
        }
    }
}

impl<S: ContactSender> ContactForm<S> {
    pub fn new(sender: S) -> Self {
        Self {
            state: Arc::new(Mutex::new(FormState::new())),
            sender: Arc::new(sender),
        }
    }

    pub fn set_field(&self, field: FormField, value: impl Into<String>) {
        self.state.lock().set_field(field, value);
    }

    pub fn snapshot(&self) -> FormState {
        self.state.lock().clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.state.lock().is_submitting()
    }

    /// Validate and enter `Submitting`. The returned handle owns the
    /// in-flight send.
    pub fn begin(&self) -> Result<PendingSubmit<S>, FormError> {
        let submission = self.state.lock().begin_submit()?;
        Ok(PendingSubmit {
            state: Arc::clone(&self.state),
            sender: Arc::clone(&self.sender),
            submission,
            settled: false,
        })
    }

    /// Validate, send, then settle the state. The lock is never held
    /// across the send.
    pub async fn submit(&self) -> Result<(), FormError> {
        match self.begin()?.send().await {
            SubmitOutcome::Sent => Ok(()),
            SubmitOutcome::Failed(e) => Err(FormError::Send(e)),
        }
    }
}

/// A submission that has left `Idle` but not been sent yet.
///
/// Dropping it unsent (or dropping the [`send`](Self::send) future
/// mid-flight) returns the form to `Idle` with the draft intact.
#[derive(Debug)]
pub struct PendingSubmit<S> {
    state: Arc<Mutex<FormState>>,
    sender: Arc<S>,
    submission: ContactSubmission,
    settled: bool,
}

impl<S: ContactSender> PendingSubmit<S> {
    pub fn submission(&self) -> &ContactSubmission {
        &self.submission
    }

    /// Hand the submission to the sender and settle the form.
    pub async fn send(mut self) -> SubmitOutcome {
        let result = self.sender.send(&self.submission).await;
        let outcome = self.state.lock().finish_submit(result);
        self.settled = true;
        outcome
    }
}

impl<S> Drop for PendingSubmit<S> {
    fn drop(&mut self) {
        if !self.settled {
            self.state.lock().abandon_submit();
        }
    }
}
