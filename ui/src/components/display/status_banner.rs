use dioxus::prelude::*;

use crate::features::quote::{Notice, NoticeKind};

#[derive(Props, PartialEq, Clone)]
pub struct StatusBannerProps {
    pub notice: Notice,
    pub on_dismiss: EventHandler<()>,
}

/// The form's single banner surface: success, delivery error, or the
/// verification-required prompt.
#[component]
pub fn StatusBanner(props: StatusBannerProps) -> Element {
    let (class, prefix) = match props.notice.kind {
        NoticeKind::Success => ("status-banner success", "✓"),
        NoticeKind::Error => ("status-banner error", "✗"),
        NoticeKind::VerificationRequired => ("status-banner verification", "⚠"),
    };

    rsx! {
        div {
            class: "{class}",
            span {
                class: "banner-message",
                "{prefix} {props.notice.message}"
            }
            button {
                class: "banner-dismiss",
                onclick: move |_| props.on_dismiss.call(()),
                "×"
            }
        }
    }
}
