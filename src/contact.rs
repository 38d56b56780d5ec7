use std::{fmt, future::Future, sync::LazyLock, time::Duration};

use regex::Regex;
use thiserror::Error;

/// How long the simulated transport takes to "send" a message.
pub const SIMULATED_DELAY: Duration = Duration::from_millis(1000);

pub const SUCCESS_MESSAGE: &str = "Message sent successfully!";
pub const ERROR_MESSAGE: &str = "Failed to send message. Please try again.";

// The "valid e-mail address" production browsers use for `type=email` inputs.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern should compile")
});

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(Field),
    #[error("Email is not a valid address")]
    InvalidEmail,
    #[error("A message is already being sent")]
    AlreadyPending,
    #[error("Couldn't deliver message: {0}")]
    Delivery(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Pending,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Delivers a validated contact message.
pub trait Transport {
    fn deliver(&self, message: &Message) -> impl Future<Output = Result<(), ContactError>>;
}

/// Pretends to send: waits [`SIMULATED_DELAY`] and always succeeds.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedTransport {
    delay: Duration,
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self {
            delay: SIMULATED_DELAY,
        }
    }
}

impl Transport for SimulatedTransport {
    fn deliver(&self, message: &Message) -> impl Future<Output = Result<(), ContactError>> {
        log::debug!("simulating delivery of {:?}", message.subject);
        let delay = self.delay;
        async move {
            pause(delay).await;
            Ok(())
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn pause(delay: Duration) {
    gloo_timers::future::sleep(delay).await;
}

// Forms are only submitted in the browser.
#[cfg(not(target_arch = "wasm32"))]
async fn pause(_delay: Duration) {}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    name: String,
    email: String,
    subject: String,
    message: String,
    status: SubmissionStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_pending(&self) -> bool {
        self.status == SubmissionStatus::Pending
    }

    /// Checks the fields the way the browser's constraint validation checks
    /// the rendered inputs: `required` on every field, `type=email` on email.
    pub fn validate(&self) -> Result<Message, ContactError> {
        for field in Field::ALL {
            if self.field(field).is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ContactError::MissingField(Field::Email));
        }
        if !is_valid_email(email) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(Message {
            name: self.name.clone(),
            email: email.to_string(),
            subject: self.subject.clone(),
            message: self.message.clone(),
        })
    }

    /// Moves to `Pending` and hands back the message to deliver. Leaves the
    /// form untouched when it's invalid or already sending.
    pub fn begin_submit(&mut self) -> Result<Message, ContactError> {
        if self.is_pending() {
            return Err(ContactError::AlreadyPending);
        }
        let message = self.validate()?;
        self.status = SubmissionStatus::Pending;
        Ok(message)
    }

    pub fn complete(&mut self, outcome: Result<(), ContactError>) {
        if !self.is_pending() {
            log::warn!("ignoring delivery outcome while {:?}", self.status);
            return;
        }
        match outcome {
            Ok(()) => {
                *self = Self {
                    status: SubmissionStatus::Success,
                    ..Self::default()
                };
            }
            Err(err) => {
                log::error!("{err}");
                self.status = SubmissionStatus::Error;
            }
        }
    }

    pub fn status_text(&self) -> Option<&'static str> {
        match self.status {
            SubmissionStatus::Success => Some(SUCCESS_MESSAGE),
            SubmissionStatus::Error => Some(ERROR_MESSAGE),
            SubmissionStatus::Idle | SubmissionStatus::Pending => None,
        }
    }
}

/// Runs a whole submission against `transport`.
pub async fn submit<T: Transport>(
    form: &mut ContactForm,
    transport: &T,
) -> Result<(), ContactError> {
    let message = form.begin_submit()?;
    let outcome = transport.deliver(&message).await;
    form.complete(outcome.clone());
    outcome
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::executor::block_on;

    use super::*;

    struct FailingTransport;

    impl Transport for FailingTransport {
        async fn deliver(&self, _message: &Message) -> Result<(), ContactError> {
            Err(ContactError::Delivery("connection refused".to_string()))
        }
    }

    #[derive(Default)]
    struct RecordingTransport {
        sent: RefCell<Vec<Message>>,
    }

    impl Transport for RecordingTransport {
        async fn deliver(&self, message: &Message) -> Result<(), ContactError> {
            self.sent.borrow_mut().push(message.clone());
            Ok(())
        }
    }

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set(Field::Name, "Ada");
        form.set(Field::Email, "ada@example.com");
        form.set(Field::Subject, "Hello");
        form.set(Field::Message, "Nice site!");
        form
    }

    #[test]
    fn successful_submit_clears_fields() {
        let mut form = filled();
        assert_eq!(form.status(), SubmissionStatus::Idle);

        let message = form.begin_submit().expect("valid form");
        assert_eq!(form.status(), SubmissionStatus::Pending);
        assert_eq!(message.name, "Ada");

        form.complete(Ok(()));
        assert_eq!(form.status(), SubmissionStatus::Success);
        for field in Field::ALL {
            assert_eq!(form.field(field), "", "{field} should be cleared");
        }
        assert_eq!(form.status_text(), Some(SUCCESS_MESSAGE));
    }

    #[test]
    fn simulated_transport_succeeds() {
        let mut form = filled();
        let res = block_on(submit(&mut form, &SimulatedTransport::default()));
        assert_eq!(res, Ok(()));
        assert_eq!(form.status(), SubmissionStatus::Success);
        assert_eq!(form, ContactForm { status: SubmissionStatus::Success, ..ContactForm::new() });
    }

    #[test]
    fn transport_receives_trimmed_email() {
        let mut form = filled();
        form.set(Field::Email, "  ada@example.com ");
        let transport = RecordingTransport::default();
        block_on(submit(&mut form, &transport)).expect("delivered");
        let sent = transport.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].email, "ada@example.com");
        assert_eq!(sent[0].message, "Nice site!");
    }

    #[test]
    fn empty_field_stays_idle() {
        for missing in Field::ALL {
            let mut form = filled();
            form.set(missing, "");
            assert_eq!(
                form.begin_submit(),
                Err(ContactError::MissingField(missing))
            );
            assert_eq!(form.status(), SubmissionStatus::Idle);
        }
    }

    #[test]
    fn whitespace_email_counts_as_missing() {
        let mut form = filled();
        form.set(Field::Email, "   ");
        assert_eq!(
            form.begin_submit(),
            Err(ContactError::MissingField(Field::Email))
        );
    }

    #[test]
    fn malformed_email_is_rejected() {
        for email in ["ada", "ada@", "@example.com", "ada@@example.com", "a da@example.com"] {
            let mut form = filled();
            form.set(Field::Email, email);
            assert_eq!(form.begin_submit(), Err(ContactError::InvalidEmail), "{email}");
            assert_eq!(form.status(), SubmissionStatus::Idle);
        }
    }

    #[test]
    fn accepts_addresses_browsers_accept() {
        for email in ["ada@example.com", "a.b+tag@sub.example.org", "x@localhost"] {
            assert!(is_valid_email(email), "{email}");
        }
    }

    #[test]
    fn delivery_failure_keeps_input() {
        let mut form = filled();
        let res = block_on(submit(&mut form, &FailingTransport));
        assert!(matches!(res, Err(ContactError::Delivery(_))));
        assert_eq!(form.status(), SubmissionStatus::Error);
        assert_eq!(form.field(Field::Subject), "Hello");
        assert_eq!(form.status_text(), Some(ERROR_MESSAGE));

        // resubmitting from the error state goes through again
        let res = block_on(submit(&mut form, &SimulatedTransport::default()));
        assert_eq!(res, Ok(()));
        assert_eq!(form.status(), SubmissionStatus::Success);
    }

    #[test]
    fn cannot_submit_while_pending() {
        let mut form = filled();
        form.begin_submit().expect("valid form");
        assert_eq!(form.begin_submit(), Err(ContactError::AlreadyPending));
        assert!(form.is_pending());
    }

    #[test]
    fn outcome_outside_pending_is_ignored() {
        let mut form = filled();
        form.complete(Ok(()));
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert_eq!(form.field(Field::Name), "Ada");
    }
}
