use dioxus::prelude::*;

use crate::features::quote::FieldValidation;

#[derive(Props, PartialEq, Clone)]
pub struct FieldValidationFeedbackProps {
    pub validation: FieldValidation,
    /// Hint shown when the field is empty.
    pub required_hint: String,
    /// Hint shown when the field is filled but malformed.
    pub invalid_hint: String,
}

/// Inline hint below an input. Field-level problems are recovered locally
/// and never reach the network layer.
#[component]
pub fn FieldValidationFeedback(props: FieldValidationFeedbackProps) -> Element {
    match props.validation {
        FieldValidation::Required => rsx! {
            div {
                class: "validation-feedback invalid",
                "⚠ {props.required_hint}"
            }
        },
        FieldValidation::Invalid => rsx! {
            div {
                class: "validation-feedback invalid",
                "⚠ {props.invalid_hint}"
            }
        },
        _ => rsx! { div {} },
    }
}
