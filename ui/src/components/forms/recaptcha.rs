use dioxus::prelude::*;
use wasm_bindgen::prelude::*;

use crate::services::config::RecaptchaConfig;

const RECAPTCHA_SCRIPT: &str = "https://www.google.com/recaptcha/api.js";

/// Window-level hooks the widget script invokes.
const VERIFIED_CALLBACK: &str = "onQuoteCaptchaVerified";
const EXPIRED_CALLBACK: &str = "onQuoteCaptchaExpired";

#[derive(Props, PartialEq, Clone)]
pub struct RecaptchaWidgetProps {
    pub on_verified: EventHandler<bool>,
}

/// Container for the external CAPTCHA widget.
///
/// The widget script calls back into the window-level hooks registered here;
/// they forward the verification signal into the form state. The controller
/// only ever reads the resulting boolean.
#[component]
pub fn RecaptchaWidget(props: RecaptchaWidgetProps) -> Element {
    let on_verified = props.on_verified;
    let site_key = RecaptchaConfig::from_env().site_key;

    use_effect(move || {
        let Some(window) = web_sys::window() else {
            return;
        };
        let verified = Closure::<dyn FnMut(JsValue)>::new(move |_token: JsValue| {
            on_verified.call(true);
        });
        let expired = Closure::<dyn FnMut()>::new(move || {
            on_verified.call(false);
        });
        let _ = js_sys::Reflect::set(
            &window,
            &JsValue::from_str(VERIFIED_CALLBACK),
            verified.as_ref(),
        );
        let _ = js_sys::Reflect::set(
            &window,
            &JsValue::from_str(EXPIRED_CALLBACK),
            expired.as_ref(),
        );
        // The widget keeps calling back for the page lifetime.
        verified.forget();
        expired.forget();
    });

    rsx! {
        document::Script { src: RECAPTCHA_SCRIPT.to_string() }
        div {
            class: "g-recaptcha recaptcha-section",
            "data-sitekey": "{site_key}",
            "data-callback": VERIFIED_CALLBACK,
            "data-expired-callback": EXPIRED_CALLBACK,
        }
    }
}
