use dioxus::prelude::*;

use crate::components::display::StatusBanner;
use crate::components::input::{
    FieldValidationFeedback, InputType, ValidatedInput, ValidatedTextarea,
};
use crate::console_warn;
use crate::features::quote::{
    deliver_quote_request, QuoteAction, QuoteFormState, SubmissionState,
};
use crate::utils::{validation_class, validation_style};

use super::recaptcha::RecaptchaWidget;

#[derive(Props, PartialEq, Clone)]
pub struct QuoteFormProps {
    pub state: Signal<QuoteFormState>,
    pub dispatch: EventHandler<QuoteAction>,
}

#[component]
pub fn QuoteForm(props: QuoteFormProps) -> Element {
    let mut state = props.state;
    let dispatch = props.dispatch;

    rsx! {
        section {
            class: "quote-section",
            id: "quote",

            h2 {
                class: "form-title",
                "Request a Free Quote"
            }
            p {
                class: "form-subtitle",
                "Tell us what's wrong and we'll get back to you with an estimate."
            }

            div {
                class: "input-section",
                label {
                    class: "input-label",
                    "Name:"
                }
                ValidatedInput {
                    value: state().form.name,
                    placeholder: "Your name".to_string(),
                    input_type: InputType::Text,
                    input_class: validation_class(state().validations.name).to_string(),
                    input_style: validation_style(state().validations.name).to_string(),
                    disabled: state().is_submitting(),
                    on_change: move |value: String| {
                        dispatch.call(QuoteAction::SetName(value));
                    },
                    on_blur: move |_| {}
                }
                FieldValidationFeedback {
                    validation: state().validations.name,
                    required_hint: "Please enter your name".to_string(),
                    invalid_hint: "Please enter your name".to_string(),
                }
            }

            div {
                class: "input-section",
                label {
                    class: "input-label",
                    "Email:"
                }
                ValidatedInput {
                    value: state().form.email,
                    placeholder: "you@example.com".to_string(),
                    input_type: InputType::Email,
                    input_class: validation_class(state().validations.email).to_string(),
                    input_style: validation_style(state().validations.email).to_string(),
                    disabled: state().is_submitting(),
                    on_change: move |value: String| {
                        dispatch.call(QuoteAction::SetEmail(value));
                    },
                    on_blur: move |_| {}
                }
                FieldValidationFeedback {
                    validation: state().validations.email,
                    required_hint: "Please enter your email address".to_string(),
                    invalid_hint: "Please enter a valid email address".to_string(),
                }
            }

            div {
                class: "input-section",
                label {
                    class: "input-label",
                    "Phone:"
                }
                ValidatedInput {
                    value: state().form.phone,
                    placeholder: "(555) 123-4567".to_string(),
                    input_type: InputType::Tel,
                    input_class: validation_class(state().validations.phone).to_string(),
                    input_style: validation_style(state().validations.phone).to_string(),
                    disabled: state().is_submitting(),
                    on_change: move |value: String| {
                        dispatch.call(QuoteAction::SetPhone(value));
                    },
                    // best-effort normalization happens when the field
                    // loses focus; validation stays strict at submit time
                    on_blur: move |_| {
                        dispatch.call(QuoteAction::FormatPhone);
                    }
                }
                FieldValidationFeedback {
                    validation: state().validations.phone,
                    required_hint: "Please enter your phone number".to_string(),
                    invalid_hint: "Please enter a 10-digit phone number".to_string(),
                }
            }

            div {
                class: "input-section",
                label {
                    class: "input-label",
                    "How can we help?"
                }
                ValidatedTextarea {
                    value: state().form.message,
                    placeholder: "Describe the equipment and the problem".to_string(),
                    rows: 5,
                    input_class: validation_class(state().validations.message).to_string(),
                    input_style: validation_style(state().validations.message).to_string(),
                    disabled: state().is_submitting(),
                    on_change: move |value: String| {
                        dispatch.call(QuoteAction::SetMessage(value));
                    }
                }
                FieldValidationFeedback {
                    validation: state().validations.message,
                    required_hint: "Please tell us what you need".to_string(),
                    invalid_hint: "Please tell us what you need".to_string(),
                }
            }

            RecaptchaWidget {
                on_verified: move |verified: bool| {
                    dispatch.call(QuoteAction::SetRecaptchaVerified(verified));
                }
            }

            div {
                class: "button-section",
                button {
                    class: "submit-button",
                    disabled: state().is_submitting(),
                    onclick: move |_| {
                        let outcome = state.with_mut(|s| s.begin_submit());
                        match outcome {
                            Ok(snapshot) => {
                                spawn(async move {
                                    deliver_quote_request(snapshot, dispatch).await;
                                });
                            }
                            Err(blocked) => {
                                console_warn!("[QuoteForm] Submission blocked: {:?}", blocked);
                            }
                        }
                    },
                    if state().is_submitting() {
                        "Sending…"
                    } else if state().submission == SubmissionState::Success {
                        "Request Sent ✓"
                    } else {
                        "Send Quote Request"
                    }
                }
                if state().submission == SubmissionState::Success {
                    button {
                        class: "reset-button",
                        onclick: move |_| dispatch.call(QuoteAction::Reset),
                        "Send another request"
                    }
                }
            }

            if let Some(notice) = state().notice {
                StatusBanner {
                    notice: notice,
                    on_dismiss: move |_| dispatch.call(QuoteAction::DismissNotice),
                }
            }
        }
    }
}
