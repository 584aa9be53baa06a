use log::{debug, error, info};
use serde::Serialize;

use super::transport::SubmitError;
use crate::config;

#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormData {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Company,
    Message,
}

impl FormField {
    /// The `name`/`id` attribute used for the field's input element.
    pub fn key(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Company => "company",
            FormField::Message => "message",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, FormField::Company)
    }
}

impl ContactFormData {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Company => &self.company,
            FormField::Message => &self.message,
        }
    }

    fn slot(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Company => &mut self.company,
            FormField::Message => &mut self.message,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Success,
    Failure,
}

impl SubmissionStatus {
    /// Inline notice shown under the submit button, if any.
    pub fn notice(self) -> Option<String> {
        match self {
            SubmissionStatus::Idle => None,
            SubmissionStatus::Success => Some(
                "Thank you! Your message has been sent. We'll get back to you within 24 hours.".to_string(),
            ),
            SubmissionStatus::Failure => Some(format!(
                "Failed to send message. Please email us directly at {}",
                config::CONTACT_EMAIL
            )),
        }
    }
}

/// Field values plus the submit lifecycle of the contact form.
///
/// `in_flight` is true from `begin_submit` until the matching
/// `finish_submit`; a second `begin_submit` in that window does nothing.
/// Field values only get cleared when a submission succeeds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormState {
    data: ContactFormData,
    in_flight: bool,
    status: SubmissionStatus,
}

impl ContactFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: FormField) -> &str {
        self.data.get(field)
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn update_field(&mut self, field: FormField, value: String) {
        *self.data.slot(field) = value;
    }

    /// Starts a submission and returns the payload for the transport.
    pub fn begin_submit(&mut self) -> Option<ContactFormData> {
        if self.in_flight {
            debug!("Submit ignored, a submission is already in flight");
            return None;
        }
        self.in_flight = true;
        self.status = SubmissionStatus::Idle;
        Some(self.data.clone())
    }

    pub fn finish_submit(&mut self, result: Result<(), SubmitError>) {
        match result {
            Ok(()) => {
                info!("Contact form submitted");
                self.status = SubmissionStatus::Success;
                self.reset();
            }
            Err(e) => {
                error!("Error submitting form: {}", e);
                self.status = SubmissionStatus::Failure;
            }
        }
        self.in_flight = false;
    }

    pub fn reset(&mut self) {
        self.data = ContactFormData::default();
    }
}
