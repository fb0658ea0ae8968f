// Core types for the quote-request workflow - no dioxus imports needed here
use crate::services::email::{EmailAck, EmailError};

use super::validation::{format_phone_number, validate};

/// Fields of the quote-request form. Owned exclusively by [`QuoteFormState`]
/// and cleared after a successful submission or an explicit reset.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuoteFormData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl QuoteFormData {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.email.is_empty()
            && self.phone.is_empty()
            && self.message.is_empty()
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum QuoteField {
    Name,
    Email,
    Phone,
    Message,
}

/// Validation status of a single field. `None` is the pristine state before
/// any validation pass has looked at the field.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum FieldValidation {
    #[default]
    None,
    Valid,
    Required,
    Invalid,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ValidationStates {
    pub name: FieldValidation,
    pub email: FieldValidation,
    pub phone: FieldValidation,
    pub message: FieldValidation,
}

impl ValidationStates {
    pub fn is_valid(&self) -> bool {
        [self.name, self.email, self.phone, self.message]
            .iter()
            .all(|v| *v == FieldValidation::Valid)
    }

    pub fn get(&self, field: QuoteField) -> FieldValidation {
        match field {
            QuoteField::Name => self.name,
            QuoteField::Email => self.email,
            QuoteField::Phone => self.phone,
            QuoteField::Message => self.message,
        }
    }

    fn clear(&mut self, field: QuoteField) {
        match field {
            QuoteField::Name => self.name = FieldValidation::None,
            QuoteField::Email => self.email = FieldValidation::None,
            QuoteField::Phone => self.phone = FieldValidation::None,
            QuoteField::Message => self.message = FieldValidation::None,
        }
    }
}

/// Lifecycle of one submission attempt. `Validating` only exists inside the
/// synchronous front half of the submit sequence; `Failed` returns to `Idle`
/// on the next user edit or an explicit retry, and `Success` is terminal
/// until the form is reset.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating,
    Submitting,
    Success,
    Failed,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NoticeKind {
    Success,
    Error,
    VerificationRequired,
}

/// The single banner surface of the form. At most one notice is shown at a
/// time; error notices carry a user-safe message, never raw provider output.
#[derive(Clone, PartialEq, Debug)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success() -> Self {
        Self {
            kind: NoticeKind::Success,
            message: "Thanks! Your quote request has been sent. We'll get back to you soon."
                .to_string(),
        }
    }

    pub fn error(message: &str) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.to_string(),
        }
    }

    pub fn verification_required() -> Self {
        Self {
            kind: NoticeKind::VerificationRequired,
            message: "Please confirm you're not a robot before sending your request.".to_string(),
        }
    }
}

// Action enum for state mutations
#[derive(Clone, Debug)]
pub enum QuoteAction {
    SetName(String),
    SetEmail(String),
    SetPhone(String),
    SetMessage(String),
    FormatPhone,
    SetRecaptchaVerified(bool),
    DismissNotice,
    ExpireSuccessNotice,
    SubmissionCompleted(Result<EmailAck, EmailError>),
    Reset,
}

/// The quote-form controller: form data, per-field validation, submission
/// state machine and the banner surface, independent of any renderer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuoteFormState {
    pub form: QuoteFormData,
    pub validations: ValidationStates,
    pub submission: SubmissionState,
    /// Set exclusively by the external CAPTCHA widget callbacks.
    pub recaptcha_verified: bool,
    pub notice: Option<Notice>,
}

impl QuoteFormState {
    /// Reduces the state in place based on an action (preserves Dioxus
    /// Signal reactivity when called through `with_mut`).
    pub fn reduce_in_place(&mut self, action: QuoteAction) {
        match action {
            QuoteAction::SetName(value) => self.update_field(QuoteField::Name, value),
            QuoteAction::SetEmail(value) => self.update_field(QuoteField::Email, value),
            QuoteAction::SetPhone(value) => self.update_field(QuoteField::Phone, value),
            QuoteAction::SetMessage(value) => self.update_field(QuoteField::Message, value),
            QuoteAction::FormatPhone => self.format_phone(),
            QuoteAction::SetRecaptchaVerified(verified) => {
                self.recaptcha_verified = verified;
            }
            QuoteAction::DismissNotice => {
                self.notice = None;
            }
            QuoteAction::ExpireSuccessNotice => {
                if matches!(
                    self.notice,
                    Some(Notice {
                        kind: NoticeKind::Success,
                        ..
                    })
                ) {
                    self.notice = None;
                }
            }
            QuoteAction::SubmissionCompleted(result) => self.apply_submit_result(result),
            QuoteAction::Reset => self.reset(),
        }
    }

    /// Sets a field, clears that field's validation state and any banner;
    /// editing after a failure returns the form to `Idle`.
    pub fn update_field(&mut self, field: QuoteField, value: String) {
        match field {
            QuoteField::Name => self.form.name = value,
            QuoteField::Email => self.form.email = value,
            QuoteField::Phone => self.form.phone = value,
            QuoteField::Message => self.form.message = value,
        }
        self.validations.clear(field);
        self.notice = None;
        if self.submission == SubmissionState::Failed {
            self.submission = SubmissionState::Idle;
        }
    }

    /// Best-effort phone normalization: exactly 10 digits are rewritten as
    /// `(XXX) XXX-XXXX`, anything else is left alone for validation to catch.
    pub fn format_phone(&mut self) {
        self.form.phone = format_phone_number(&self.form.phone);
    }

    /// The guarded front half of the submit sequence. On success the state
    /// is `Submitting` and the returned snapshot is what goes on the wire;
    /// later field edits cannot affect the in-flight request.
    pub fn begin_submit(&mut self) -> Result<QuoteFormData, SubmitBlocked> {
        match self.submission {
            SubmissionState::Submitting => return Err(SubmitBlocked::InFlight),
            SubmissionState::Success => return Err(SubmitBlocked::AlreadySent),
            _ => {}
        }

        if !self.recaptcha_verified {
            self.notice = Some(Notice::verification_required());
            return Err(SubmitBlocked::VerificationRequired);
        }

        self.submission = SubmissionState::Validating;
        self.format_phone();
        let report = validate(&self.form);
        self.validations = report;
        if !report.is_valid() {
            self.submission = SubmissionState::Idle;
            return Err(SubmitBlocked::InvalidFields);
        }

        self.notice = None;
        self.submission = SubmissionState::Submitting;
        Ok(self.form.clone())
    }

    /// The back half of the submit sequence. A result arriving when the
    /// form is no longer `Submitting` (reset, stale response) is discarded.
    pub fn apply_submit_result(&mut self, result: Result<EmailAck, EmailError>) {
        if self.submission != SubmissionState::Submitting {
            tracing::debug!("discarding stale submission result");
            return;
        }
        match result {
            Ok(ack) => {
                tracing::info!(status = ack.status, "quote request delivered");
                self.submission = SubmissionState::Success;
                self.form = QuoteFormData::default();
                self.validations = ValidationStates::default();
                self.notice = Some(Notice::success());
            }
            Err(error) => {
                tracing::error!(%error, "quote request delivery failed");
                self.submission = SubmissionState::Failed;
                self.notice = Some(Notice::error(error.user_message()));
            }
        }
    }

    /// The only exit from `Success`: empty form, pristine validations. The
    /// verification signal belongs to the widget and is left untouched.
    pub fn reset(&mut self) {
        self.form = QuoteFormData::default();
        self.validations = ValidationStates::default();
        self.submission = SubmissionState::Idle;
        self.notice = None;
    }

    pub fn is_submitting(&self) -> bool {
        self.submission == SubmissionState::Submitting
    }
}

/// Why `begin_submit` refused to start a submission.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SubmitBlocked {
    VerificationRequired,
    InvalidFields,
    InFlight,
    AlreadySent,
}
