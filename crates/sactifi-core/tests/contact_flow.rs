//! Contact form submission tests
//!
//! Runs the form controller on tokio's paused clock so the simulated
//! one-second send is deterministic.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use sactifi_core::{
    ContactForm, ContactSender, ContactSubmission, FormError, FormField, SendError,
    SimulatedSender,
};

/// Sender that counts calls and fails with a fixed error
#[derive(Debug, Clone, Default)]
struct FlakySender {
    calls: Arc<AtomicUsize>,
    fail_first: usize,
}

impl ContactSender for FlakySender {
    async fn send(&self, _submission: &ContactSubmission) -> Result<(), SendError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(200)).await;
        if n < self.fail_first {
            Err(SendError::Network("connection reset".into()))
        } else {
            Ok(())
        }
    }
}

fn fill<S: ContactSender>(form: &ContactForm<S>) {
    form.set_field(FormField::Name, "Asha");
    form.set_field(FormField::Email, "asha@example.com");
    form.set_field(FormField::Subject, "Hello");
    form.set_field(FormField::Message, "Interested in partnering");
}

#[tokio::test(start_paused = true)]
async fn submit_clears_fields_after_simulated_delay() {
    let form = ContactForm::new(SimulatedSender::default());
    fill(&form);

    let task = tokio::spawn({
        let form = form.clone();
        async move { form.submit().await }
    });

    // Let the submit task start and park on its timer.
    tokio::time::sleep(Duration::from_millis(10)).await;
    assert!(form.is_submitting());
    assert_eq!(form.snapshot().field(FormField::Name), "Asha");

    task.await.unwrap().unwrap();

    let state = form.snapshot();
    assert!(!state.is_submitting());
    for field in FormField::ALL {
        assert_eq!(state.field(field), "", "{} not cleared", field.label());
    }
}

#[tokio::test(start_paused = true)]
async fn rapid_double_submit_sends_once() {
    let sender = FlakySender::default();
    let calls = Arc::clone(&sender.calls);
    let form = ContactForm::new(sender);
    fill(&form);

    let (first, second) = futures::join!(form.submit(), form.submit());

    assert_eq!(first, Ok(()));
    assert_eq!(second, Err(FormError::AlreadySubmitting));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(form.snapshot().draft().is_blank());
}

#[tokio::test(start_paused = true)]
async fn second_submit_after_clear_is_rejected_as_incomplete() {
    let form = ContactForm::new(SimulatedSender::new(Duration::from_millis(50)));
    fill(&form);
    form.submit().await.unwrap();

    let err = form.submit().await.unwrap_err();
    assert_eq!(err, FormError::MissingFields(FormField::ALL.to_vec()));
}

#[tokio::test(start_paused = true)]
async fn failed_send_keeps_values_and_allows_retry() {
    let sender = FlakySender {
        fail_first: 1,
        ..Default::default()
    };
    let calls = Arc::clone(&sender.calls);
    let form = ContactForm::new(sender);
    fill(&form);

    let err = form.submit().await.unwrap_err();
    assert_eq!(err, FormError::Send(SendError::Network("connection reset".into())));

    let state = form.snapshot();
    assert!(!state.is_submitting());
    assert_eq!(state.field(FormField::Message), "Interested in partnering");
    assert!(state.last_error().is_some());

    form.submit().await.unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert!(form.snapshot().draft().is_blank());
}

#[tokio::test(start_paused = true)]
async fn incomplete_draft_never_reaches_sender() {
    let sender = FlakySender::default();
    let calls = Arc::clone(&sender.calls);
    let form = ContactForm::new(sender);
    form.set_field(FormField::Name, "Asha");

    let err = form.submit().await.unwrap_err();
    assert!(matches!(err, FormError::MissingFields(ref f) if f.len() == 3));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert!(!form.is_submitting());
}

#[tokio::test(start_paused = true)]
async fn staged_submit_is_in_flight_until_sent() {
    let form = ContactForm::new(SimulatedSender::default());
    fill(&form);

    let pending = form.begin().unwrap();
    assert!(form.snapshot().is_submitting());
    assert_eq!(pending.submission().email, "asha@example.com");
    assert_eq!(form.begin().unwrap_err(), FormError::AlreadySubmitting);

    let outcome = pending.send().await;
    assert!(outcome.is_success());
    let state = form.snapshot();
    assert!(!state.is_submitting());
    assert!(state.draft().is_blank());
}

#[tokio::test(start_paused = true)]
async fn cancelled_send_returns_form_to_idle() {
    let form = ContactForm::new(SimulatedSender::default());
    fill(&form);

    let timed_out = tokio::time::timeout(Duration::from_millis(100), form.submit()).await;
    assert!(timed_out.is_err());

    let state = form.snapshot();
    assert!(!state.is_submitting());
    assert_eq!(state.field(FormField::Subject), "Hello");

    form.submit().await.unwrap();
    assert!(form.snapshot().draft().is_blank());
}
