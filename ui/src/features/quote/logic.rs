//! Client-side delivery workflow for quote requests: maps a validated form
//! snapshot onto the provider contract and drives one submission attempt.

use crate::services::email::QuoteMessage;

use super::types::QuoteFormData;

#[cfg(feature = "web")]
use dioxus::prelude::*;

#[cfg(feature = "web")]
use crate::services::config::SiteConfig;
#[cfg(feature = "web")]
use crate::services::email::{EmailClient, QuoteSender};
#[cfg(feature = "web")]
use crate::{console_error, console_info};

#[cfg(feature = "web")]
use super::types::QuoteAction;

/// How long the success banner stays up before auto-dismissing.
#[cfg(feature = "web")]
const SUCCESS_NOTICE_MS: u32 = 6_000;

/// Maps a normalized form snapshot into the provider's template parameters.
/// The recipient is the fixed business address, never user input.
pub fn to_quote_message(snapshot: &QuoteFormData, to_email: &str) -> QuoteMessage {
    QuoteMessage {
        from_name: snapshot.name.clone(),
        from_email: snapshot.email.clone(),
        phone: snapshot.phone.clone(),
        message: snapshot.message.clone(),
        to_email: to_email.to_string(),
    }
}

/// Drives one delivery attempt for a snapshot returned by `begin_submit`.
///
/// The outcome is dispatched back into the form state, where it is applied
/// only if the submission is still in flight; if the component unmounts the
/// surrounding task is dropped and the response is discarded. Failures are
/// surfaced as a generic notice while the cause goes to the console.
#[cfg(feature = "web")]
pub async fn deliver_quote_request(snapshot: QuoteFormData, dispatch: EventHandler<QuoteAction>) {
    console_info!("[Quote] Sending quote request for {}", snapshot.name);

    let config = SiteConfig::from_env();
    let client = EmailClient::new(config.email.clone());
    let message = to_quote_message(&snapshot, &config.email.to_email);

    let result = client.send_quote(&message).await;
    match &result {
        Ok(ack) => {
            console_info!("[Quote] Provider accepted request with status {}", ack.status)
        }
        Err(error) => console_error!("[Quote] Delivery failed: {}", error),
    }

    let succeeded = result.is_ok();
    dispatch.call(QuoteAction::SubmissionCompleted(result));

    if succeeded {
        gloo_timers::future::TimeoutFuture::new(SUCCESS_NOTICE_MS).await;
        dispatch.call(QuoteAction::ExpireSuccessNotice);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use async_trait::async_trait;

    use super::*;
    use crate::features::quote::{
        FieldValidation, NoticeKind, QuoteField, QuoteFormState, SubmissionState, SubmitBlocked,
    };
    use crate::services::email::{EmailAck, EmailError, QuoteSender};

    const BUSINESS_EMAIL: &str = "shop@example.com";

    struct StubSender {
        calls: Cell<u32>,
        fail: bool,
    }

    impl StubSender {
        fn new(fail: bool) -> Self {
            Self {
                calls: Cell::new(0),
                fail,
            }
        }
    }

    #[async_trait(?Send)]
    impl QuoteSender for StubSender {
        async fn send_quote(&self, _message: &QuoteMessage) -> Result<EmailAck, EmailError> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                Err(EmailError::Network {
                    message: "connection reset by peer".to_string(),
                })
            } else {
                Ok(EmailAck {
                    status: 200,
                    text: "OK".to_string(),
                })
            }
        }
    }

    fn verified_state() -> QuoteFormState {
        let mut state = QuoteFormState::default();
        state.recaptcha_verified = true;
        state.form = QuoteFormData {
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            phone: "(123) 456-7890".to_string(),
            message: "Test message".to_string(),
        };
        state
    }

    #[test]
    fn test_message_mapping_uses_fixed_recipient() {
        let state = verified_state();
        let message = to_quote_message(&state.form, BUSINESS_EMAIL);
        assert_eq!(message.from_name, "Test User");
        assert_eq!(message.from_email, "test@example.com");
        assert_eq!(message.phone, "(123) 456-7890");
        assert_eq!(message.to_email, BUSINESS_EMAIL);
    }

    #[test]
    fn test_begin_submit_requires_verification() {
        let mut state = verified_state();
        state.recaptcha_verified = false;

        assert_eq!(
            state.begin_submit(),
            Err(SubmitBlocked::VerificationRequired)
        );
        assert_eq!(state.submission, SubmissionState::Idle);
        let notice = state.notice.expect("verification notice");
        assert_eq!(notice.kind, NoticeKind::VerificationRequired);
    }

    #[test]
    fn test_begin_submit_rejects_invalid_fields() {
        let mut state = verified_state();
        state.form.name = String::new();

        assert_eq!(state.begin_submit(), Err(SubmitBlocked::InvalidFields));
        assert_eq!(state.submission, SubmissionState::Idle);
        assert_eq!(state.validations.name, FieldValidation::Required);
        assert_eq!(state.validations.email, FieldValidation::Valid);
    }

    #[test]
    fn test_begin_submit_normalizes_phone_into_snapshot() {
        let mut state = verified_state();
        state.form.phone = "1234567890".to_string();

        let snapshot = state.begin_submit().expect("submit should start");
        assert_eq!(snapshot.phone, "(123) 456-7890");
        assert_eq!(state.form.phone, "(123) 456-7890");
        assert_eq!(state.submission, SubmissionState::Submitting);
    }

    #[test]
    fn test_reentrant_submit_is_a_noop() {
        let mut state = verified_state();
        state.begin_submit().expect("first submit");
        assert_eq!(state.begin_submit(), Err(SubmitBlocked::InFlight));
        assert_eq!(state.submission, SubmissionState::Submitting);
    }

    #[test]
    fn test_edits_during_flight_do_not_touch_the_snapshot() {
        let mut state = verified_state();
        let snapshot = state.begin_submit().expect("submit");
        state.update_field(QuoteField::Message, "changed my mind".to_string());
        assert_eq!(snapshot.message, "Test message");
        // still in flight: the edit must not abort the submission
        assert_eq!(state.submission, SubmissionState::Submitting);
    }

    #[tokio::test]
    async fn test_blocked_submission_never_reaches_the_sender() {
        let mut state = verified_state();
        state.recaptcha_verified = false;
        let sender = StubSender::new(false);

        if let Ok(snapshot) = state.begin_submit() {
            let message = to_quote_message(&snapshot, BUSINESS_EMAIL);
            let _ = sender.send_quote(&message).await;
        }

        assert_eq!(sender.calls.get(), 0);
    }

    #[tokio::test]
    async fn test_successful_delivery_clears_the_form() {
        let mut state = verified_state();
        let sender = StubSender::new(false);

        let snapshot = state.begin_submit().expect("submit");
        let message = to_quote_message(&snapshot, BUSINESS_EMAIL);
        state.apply_submit_result(sender.send_quote(&message).await);

        assert_eq!(sender.calls.get(), 1);
        assert_eq!(state.submission, SubmissionState::Success);
        assert!(state.form.is_empty());
        assert_eq!(
            state.notice.as_ref().map(|n| n.kind),
            Some(NoticeKind::Success)
        );
    }

    #[tokio::test]
    async fn test_failed_delivery_keeps_the_form_for_correction() {
        let mut state = verified_state();
        let sender = StubSender::new(true);

        let snapshot = state.begin_submit().expect("submit");
        let message = to_quote_message(&snapshot, BUSINESS_EMAIL);
        state.apply_submit_result(sender.send_quote(&message).await);

        assert_eq!(state.submission, SubmissionState::Failed);
        assert_eq!(state.form.name, "Test User");
        let notice = state.notice.expect("error notice");
        assert_eq!(notice.kind, NoticeKind::Error);
        // the raw cause stays in the logs, not in the banner
        assert!(!notice.message.contains("connection reset"));
    }

    #[tokio::test]
    async fn test_single_flight_guard_prevents_duplicate_sends() {
        let mut state = verified_state();
        let sender = StubSender::new(false);

        for _ in 0..3 {
            if let Ok(snapshot) = state.begin_submit() {
                let message = to_quote_message(&snapshot, BUSINESS_EMAIL);
                let _ = sender.send_quote(&message).await;
                // result not yet applied: the form is still in flight
            }
        }

        assert_eq!(sender.calls.get(), 1);
    }

    #[test]
    fn test_stale_result_after_reset_is_discarded() {
        let mut state = verified_state();
        state.begin_submit().expect("submit");
        state.reset();

        state.apply_submit_result(Ok(EmailAck {
            status: 200,
            text: "OK".to_string(),
        }));

        assert_eq!(state.submission, SubmissionState::Idle);
        assert!(state.notice.is_none());
    }

    #[test]
    fn test_edit_after_failure_returns_to_idle() {
        let mut state = verified_state();
        state.begin_submit().expect("submit");
        state.apply_submit_result(Err(EmailError::Rejected {
            status: 500,
            body: "internal error".to_string(),
        }));
        assert_eq!(state.submission, SubmissionState::Failed);

        state.update_field(QuoteField::Email, "corrected@example.com".to_string());
        assert_eq!(state.submission, SubmissionState::Idle);
        assert_eq!(state.validations.email, FieldValidation::None);
        assert!(state.notice.is_none());
    }

    #[test]
    fn test_success_is_terminal_until_reset() {
        let mut state = verified_state();
        state.begin_submit().expect("submit");
        state.apply_submit_result(Ok(EmailAck {
            status: 200,
            text: "OK".to_string(),
        }));

        assert_eq!(state.begin_submit(), Err(SubmitBlocked::AlreadySent));

        state.reset();
        assert_eq!(state.submission, SubmissionState::Idle);
        // a fresh, valid form can go out again after the reset
        state.form = verified_state().form;
        assert!(state.begin_submit().is_ok());
    }
}
