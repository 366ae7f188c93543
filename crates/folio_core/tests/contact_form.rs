use folio_core::{
    validate, ContactField, ContactFormValues, ContactPayload, ContactService,
    EmailServiceConfig, MessageTransport, NotificationKind, SubmitOutcome, TransportError,
};
use std::cell::RefCell;

fn values(name: &str, email: &str, message: &str, company: &str) -> ContactFormValues {
    ContactFormValues {
        name: name.to_string(),
        email: email.to_string(),
        message: message.to_string(),
        company: company.to_string(),
    }
}

/// Transport double recording every payload it receives.
struct RecordingTransport {
    fail_with: Option<TransportError>,
    sent: RefCell<Vec<ContactPayload>>,
}

impl RecordingTransport {
    fn succeeding() -> Self {
        Self {
            fail_with: None,
            sent: RefCell::new(Vec::new()),
        }
    }

    fn failing(err: TransportError) -> Self {
        Self {
            fail_with: Some(err),
            sent: RefCell::new(Vec::new()),
        }
    }
}

impl MessageTransport for RecordingTransport {
    fn send(
        &self,
        _config: &EmailServiceConfig,
        payload: &ContactPayload,
    ) -> Result<(), TransportError> {
        self.sent.borrow_mut().push(payload.clone());
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

fn configured() -> EmailServiceConfig {
    EmailServiceConfig {
        service_id: "service_portfolio".to_string(),
        template_id: "template_contact".to_string(),
        public_key: "pk_live".to_string(),
    }
}

fn fill(service: &mut ContactService<RecordingTransport>, form: &ContactFormValues) {
    service.update_field(ContactField::Name, form.name.clone());
    service.update_field(ContactField::Email, form.email.clone());
    service.update_field(ContactField::Message, form.message.clone());
    service.update_field(ContactField::Company, form.company.clone());
}

#[test]
fn missing_name_reports_single_field_error() {
    let report = validate(&values("", "a@b.com", "hi", ""));
    assert!(!report.valid);
    assert_eq!(report.field_errors.len(), 1);
    assert_eq!(report.error_for(ContactField::Name), Some("Name is required"));
}

#[test]
fn honeypot_fails_without_user_facing_message() {
    let report = validate(&values("A", "a@b.com", "hi", "spamco"));
    assert!(!report.valid);
    assert!(report.field_errors.is_empty());
    assert!(report.is_suspected_bot());
}

#[test]
fn every_required_field_has_its_own_message() {
    let report = validate(&values("  ", "", "\n", ""));
    assert_eq!(report.error_for(ContactField::Name), Some("Name is required"));
    assert_eq!(report.error_for(ContactField::Email), Some("Email is required"));
    assert_eq!(
        report.error_for(ContactField::Message),
        Some("Please write a message")
    );

    let report = validate(&values("A", "a@b", "hi", ""));
    assert_eq!(report.error_for(ContactField::Email), Some("Enter a valid email"));
}

#[test]
fn valid_form_passes() {
    let report = validate(&values("Ada", "ada@example.com", "Hello there", ""));
    assert!(report.valid);
    assert!(report.field_errors.is_empty());
    assert!(!report.is_suspected_bot());
}

#[test]
fn successful_submit_sends_payload_and_resets_form() {
    let mut service =
        ContactService::new(RecordingTransport::succeeding(), configured());
    fill(&mut service, &values("Ada", "ada@example.com", "Hello", ""));

    assert_eq!(service.submit(), SubmitOutcome::Sent);
    assert_eq!(
        service.transport().sent.borrow().as_slice(),
        &[ContactPayload {
            from_name: "Ada".to_string(),
            from_email: "ada@example.com".to_string(),
            message: "Hello".to_string(),
        }]
    );
    assert_eq!(service.values(), &ContactFormValues::default());

    let notification = service.notification().expect("success toast");
    assert_eq!(notification.kind, NotificationKind::Success);
    assert_eq!(notification.message, "Thanks! Your message has been sent.");

    service.dismiss_notification();
    assert!(service.notification().is_none());
}

#[test]
fn failed_submit_keeps_values_for_resubmission() {
    let err = TransportError::Unavailable("timeout".to_string());
    let mut service = ContactService::new(
        RecordingTransport::failing(err.clone()),
        configured(),
    );
    let form = values("Ada", "ada@example.com", "Hello", "");
    fill(&mut service, &form);

    assert_eq!(service.submit(), SubmitOutcome::Failed(err));
    assert_eq!(service.values(), &form);
    let notification = service.notification().expect("error toast");
    assert_eq!(notification.kind, NotificationKind::Error);
    assert_eq!(
        notification.message,
        "Could not send message. Please try again later."
    );

    assert!(matches!(service.submit(), SubmitOutcome::Failed(_)));
    assert_eq!(service.transport().sent.borrow().len(), 2);
}

#[test]
fn honeypot_submit_never_reaches_transport() {
    let mut service =
        ContactService::new(RecordingTransport::succeeding(), configured());
    fill(&mut service, &values("Ada", "ada@example.com", "Hello", "spamco"));

    assert_eq!(service.submit(), SubmitOutcome::Invalid);
    assert!(service.field_errors().is_empty());
    assert!(service.notification().is_none());
    assert!(service.transport().sent.borrow().is_empty());
}

#[test]
fn field_errors_clear_after_corrected_submit() {
    let mut service =
        ContactService::new(RecordingTransport::succeeding(), configured());
    fill(&mut service, &values("", "ada@example.com", "Hello", ""));
    assert_eq!(service.submit(), SubmitOutcome::Invalid);
    assert_eq!(service.field_errors().len(), 1);

    service.update_field(ContactField::Name, "Ada");
    assert_eq!(service.field_errors().len(), 1);
    assert_eq!(service.submit(), SubmitOutcome::Sent);
    assert!(service.field_errors().is_empty());
}

#[test]
fn payload_serializes_with_template_field_names() {
    let payload = ContactPayload {
        from_name: "Ada".to_string(),
        from_email: "ada@example.com".to_string(),
        message: "Hello".to_string(),
    };
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json["from_name"], "Ada");
    assert_eq!(json["from_email"], "ada@example.com");
    assert_eq!(json["message"], "Hello");
}

#[test]
fn placeholder_service_ids_block_sending() {
    let mut service =
        ContactService::new(RecordingTransport::succeeding(), EmailServiceConfig::default());
    let form = values("Ada", "ada@example.com", "Hello", "");
    fill(&mut service, &form);

    assert_eq!(
        service.submit(),
        SubmitOutcome::Failed(TransportError::NotConfigured)
    );
    assert!(service.transport().sent.borrow().is_empty());
    assert_eq!(service.values(), &form);
    assert_eq!(
        service.notification().map(|toast| toast.kind),
        Some(NotificationKind::Error)
    );
}
