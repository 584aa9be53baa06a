use std::rc::Rc;

use futures::future::LocalBoxFuture;
use futures::FutureExt;
use gloo_timers::future::TimeoutFuture;
use log::debug;
use thiserror::Error;

use super::form::ContactFormData;
use crate::config;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("transport error: {0}")]
    Transport(String),
}

/// Delivers a contact request somewhere.
///
/// Futures run on the browser's single thread, hence `LocalBoxFuture`.
pub trait SubmissionTransport {
    fn attempt_submit(&self, data: ContactFormData) -> LocalBoxFuture<'static, Result<(), SubmitError>>;
}

/// Waits a fixed time and reports success. Nothing leaves the browser.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedTransport {
    pub delay_ms: u32,
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self { delay_ms: config::SUBMIT_DELAY_MS }
    }
}

impl SubmissionTransport for SimulatedTransport {
    fn attempt_submit(&self, data: ContactFormData) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
        let delay_ms = self.delay_ms;
        async move {
            if cfg!(debug_assertions) {
                match serde_json::to_string(&data) {
                    Ok(payload) => gloo_console::log!("Simulating contact submission:", payload),
                    Err(e) => debug!("Could not serialize contact payload: {}", e),
                }
            }
            TimeoutFuture::new(delay_ms).await;
            Ok(())
        }
        .boxed_local()
    }
}

/// Shared handle so the transport can be passed as a component prop.
#[derive(Clone)]
pub struct TransportHandle(pub Rc<dyn SubmissionTransport>);

impl TransportHandle {
    pub fn new(transport: impl SubmissionTransport + 'static) -> Self {
        Self(Rc::new(transport))
    }

    pub fn attempt_submit(&self, data: ContactFormData) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
        self.0.attempt_submit(data)
    }
}

impl Default for TransportHandle {
    fn default() -> Self {
        Self::new(SimulatedTransport::default())
    }
}

impl PartialEq for TransportHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::form::{ContactFormState, FormField, SubmissionStatus};
    use futures::executor::block_on;
    use std::cell::RefCell;

    /// Resolves immediately and remembers what it was handed.
    #[derive(Default)]
    struct RecordingTransport {
        sent: RefCell<Vec<ContactFormData>>,
    }

    impl SubmissionTransport for Rc<RecordingTransport> {
        fn attempt_submit(&self, data: ContactFormData) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
            self.sent.borrow_mut().push(data);
            futures::future::ready(Ok(())).boxed_local()
        }
    }

    struct FailingTransport;

    impl SubmissionTransport for FailingTransport {
        fn attempt_submit(&self, _data: ContactFormData) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
            futures::future::ready(Err(SubmitError::Transport("connection refused".to_string()))).boxed_local()
        }
    }

    fn submit_through(form: &mut ContactFormState, transport: &TransportHandle) {
        if let Some(data) = form.begin_submit() {
            let result = block_on(transport.attempt_submit(data));
            form.finish_submit(result);
        }
    }

    #[test]
    fn jane_doe_submission_succeeds_and_clears_the_form() {
        let recorder = Rc::new(RecordingTransport::default());
        let transport = TransportHandle::new(recorder.clone());

        let mut form = ContactFormState::new();
        form.update_field(FormField::Name, "Jane Doe".to_string());
        form.update_field(FormField::Email, "jane@x.com".to_string());
        form.update_field(FormField::Company, String::new());
        form.update_field(FormField::Message, "Hello".to_string());

        submit_through(&mut form, &transport);

        assert_eq!(form.status(), SubmissionStatus::Success);
        assert!(!form.is_in_flight());
        for field in [FormField::Name, FormField::Email, FormField::Company, FormField::Message] {
            assert_eq!(form.value(field), "");
        }
        assert!(form
            .status()
            .notice()
            .unwrap()
            .starts_with("Thank you! Your message has been sent"));

        let sent = recorder.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].name, "Jane Doe");
        assert_eq!(sent[0].email, "jane@x.com");
        assert_eq!(sent[0].company, "");
        assert_eq!(sent[0].message, "Hello");
    }

    #[test]
    fn transport_failure_keeps_input_for_retry() {
        let transport = TransportHandle::new(FailingTransport);
        let mut form = ContactFormState::new();
        form.update_field(FormField::Name, "Jane Doe".to_string());
        form.update_field(FormField::Message, "Hello".to_string());

        submit_through(&mut form, &transport);

        assert_eq!(form.status(), SubmissionStatus::Failure);
        assert_eq!(form.value(FormField::Name), "Jane Doe");
        assert_eq!(form.value(FormField::Message), "Hello");
        assert!(!form.is_in_flight());
    }

    #[test]
    fn error_message_names_the_transport() {
        let err = SubmitError::Transport("connection refused".to_string());
        assert_eq!(err.to_string(), "transport error: connection refused");
    }

    #[test]
    fn handles_compare_by_identity() {
        let a = TransportHandle::new(FailingTransport);
        let b = a.clone();
        let c = TransportHandle::new(FailingTransport);
        assert!(a == b);
        assert!(a != c);
    }

    #[test]
    fn simulated_transport_defaults_to_configured_delay() {
        assert_eq!(SimulatedTransport::default().delay_ms, config::SUBMIT_DELAY_MS);
    }
}
