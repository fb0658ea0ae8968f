//! The quote-request form and its CAPTCHA gate.

#[cfg(feature = "web")]
pub mod quote_form;
#[cfg(feature = "web")]
pub mod recaptcha;

#[cfg(feature = "web")]
pub use quote_form::QuoteForm;
#[cfg(feature = "web")]
pub use recaptcha::RecaptchaWidget;
