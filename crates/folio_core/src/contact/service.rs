//! Contact submission service.
//!
//! # Responsibility
//! - Hold form input, field errors and the transient notification.
//! - Validate, then hand the payload to a `MessageTransport`.
//!
//! # Invariants
//! - Successful sends reset the form; failed sends keep it for resubmission.
//! - At most one notification is open at a time.

use crate::config::EmailServiceConfig;
use crate::contact::validation::{validate, ContactField, ContactFormValues};
use log::{debug, error, info, warn};
use serde::Serialize;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const SEND_SUCCESS_MESSAGE: &str = "Thanks! Your message has been sent.";
pub const SEND_FAILURE_MESSAGE: &str = "Could not send message. Please try again later.";

/// Validated message handed to the email collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
}

impl ContactPayload {
    fn from_values(values: &ContactFormValues) -> Self {
        Self {
            from_name: values.name.clone(),
            from_email: values.email.clone(),
            message: values.message.clone(),
        }
    }
}

/// Transport-layer failure reported by the email collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Service answered with a non-success status.
    Rejected { status: u16, message: String },
    /// Service could not be reached.
    Unavailable(String),
    /// Service identifiers are missing or still placeholders.
    NotConfigured,
}

impl Display for TransportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rejected { status, message } => {
                write!(f, "email service rejected message ({status}): {message}")
            }
            Self::Unavailable(message) => write!(f, "email service unavailable: {message}"),
            Self::NotConfigured => write!(f, "email service is not configured"),
        }
    }
}

impl Error for TransportError {}

/// External email-delivery collaborator.
pub trait MessageTransport {
    fn send(
        &self,
        config: &EmailServiceConfig,
        payload: &ContactPayload,
    ) -> Result<(), TransportError>;
}

/// Severity of a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// Toast shown after a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: &'static str,
}

/// Result of one [`ContactService::submit`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent.
    Invalid,
    Sent,
    Failed(TransportError),
}

/// Contact form view model over a transport implementation.
pub struct ContactService<T: MessageTransport> {
    transport: T,
    config: EmailServiceConfig,
    values: ContactFormValues,
    field_errors: BTreeMap<ContactField, String>,
    notification: Option<Notification>,
}

impl<T: MessageTransport> ContactService<T> {
    /// Creates a service with an empty form.
    pub fn new(transport: T, config: EmailServiceConfig) -> Self {
        Self {
            transport,
            config,
            values: ContactFormValues::default(),
            field_errors: BTreeMap::new(),
            notification: None,
        }
    }

    pub fn values(&self) -> &ContactFormValues {
        &self.values
    }

    pub fn field_errors(&self) -> &BTreeMap<ContactField, String> {
        &self.field_errors
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Replaces one field value. Existing errors stay until the next submit.
    pub fn update_field(&mut self, field: ContactField, value: impl Into<String>) {
        self.values.set_field(field, value);
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    /// Validates and sends the current form.
    ///
    /// Placeholder service identifiers fail with `NotConfigured` before the
    /// transport is reached.
    pub fn submit(&mut self) -> SubmitOutcome {
        let report = validate(&self.values);
        self.field_errors = report.field_errors.clone();
        if !report.valid {
            if report.is_suspected_bot() {
                warn!("event=contact_submit module=contact status=rejected reason=honeypot");
            } else {
                debug!(
                    "event=contact_submit module=contact status=invalid fields={}",
                    report.field_errors.len()
                );
            }
            return SubmitOutcome::Invalid;
        }

        if self.config.has_placeholders() {
            error!("event=contact_submit module=contact status=error error=not_configured");
            return self.fail(TransportError::NotConfigured);
        }

        let payload = ContactPayload::from_values(&self.values);
        match self.transport.send(&self.config, &payload) {
            Ok(()) => {
                info!("event=contact_submit module=contact status=ok");
                self.values = ContactFormValues::default();
                self.notification = Some(Notification {
                    kind: NotificationKind::Success,
                    message: SEND_SUCCESS_MESSAGE,
                });
                SubmitOutcome::Sent
            }
            Err(err) => {
                error!("event=contact_submit module=contact status=error error={err}");
                self.fail(err)
            }
        }
    }

    fn fail(&mut self, err: TransportError) -> SubmitOutcome {
        self.notification = Some(Notification {
            kind: NotificationKind::Error,
            message: SEND_FAILURE_MESSAGE,
        });
        SubmitOutcome::Failed(err)
    }
}
