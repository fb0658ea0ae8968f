use dioxus::prelude::*;

#[derive(PartialEq, Clone, Debug)]
pub enum InputType {
    Text,
    Email,
    Tel,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Email => "email",
            InputType::Tel => "tel",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ValidatedInputProps {
    pub value: String,
    pub placeholder: String,
    pub input_type: InputType,
    pub input_class: String,
    pub input_style: String,
    pub disabled: bool,
    pub on_change: EventHandler<String>,
    /// Fired when the input loses focus; the phone field hooks its
    /// best-effort formatting here.
    pub on_blur: EventHandler<()>,
}

#[component]
pub fn ValidatedInput(props: ValidatedInputProps) -> Element {
    rsx! {
        input {
            class: "{props.input_class}",
            style: "{props.input_style}",
            r#type: "{props.input_type.as_str()}",
            value: "{props.value}",
            placeholder: "{props.placeholder}",
            disabled: props.disabled,
            oninput: move |event| props.on_change.call(event.value()),
            onblur: move |_| props.on_blur.call(())
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ValidatedTextareaProps {
    pub value: String,
    pub placeholder: String,
    pub rows: u32,
    pub input_class: String,
    pub input_style: String,
    pub disabled: bool,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn ValidatedTextarea(props: ValidatedTextareaProps) -> Element {
    rsx! {
        textarea {
            class: "{props.input_class}",
            style: "{props.input_style}",
            rows: "{props.rows}",
            value: "{props.value}",
            placeholder: "{props.placeholder}",
            disabled: props.disabled,
            oninput: move |event| props.on_change.call(event.value())
        }
    }
}
