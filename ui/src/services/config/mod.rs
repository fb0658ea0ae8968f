//! Site configuration.
//!
//! Provider identifiers and widget keys are injected at build time through
//! the environment (`option_env!`), the WASM equivalent of process-level
//! configuration. The form controller treats them as opaque constants.

/// Identifiers for the transactional email provider.
#[derive(Debug, Clone, PartialEq)]
pub struct EmailConfig {
    /// Public API key; safe to embed in the bundle.
    pub public_key: String,
    pub service_id: String,
    pub template_id: String,
    /// Fixed business recipient for every quote request.
    pub to_email: String,
}

impl EmailConfig {
    pub fn from_env() -> Self {
        Self {
            public_key: option_env!("EMAILJS_PUBLIC_KEY").unwrap_or("").to_string(),
            service_id: option_env!("EMAILJS_SERVICE_ID").unwrap_or("").to_string(),
            template_id: option_env!("EMAILJS_TEMPLATE_ID").unwrap_or("").to_string(),
            to_email: option_env!("QUOTE_TO_EMAIL")
                .unwrap_or("cambizz10@gmail.com")
                .to_string(),
        }
    }
}

/// CAPTCHA widget configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RecaptchaConfig {
    pub site_key: String,
}

impl RecaptchaConfig {
    pub fn from_env() -> Self {
        Self {
            // Fallback is Google's public test key; the real key is injected
            // at build time.
            site_key: option_env!("RECAPTCHA_SITE_KEY")
                .unwrap_or("6LeIxAcTAAAAAJcZVRqyHh71UMIEGNQ_MXjiZKhI")
                .to_string(),
        }
    }
}

/// Everything the site needs at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub email: EmailConfig,
    pub recaptcha: RecaptchaConfig,
}

impl SiteConfig {
    pub fn from_env() -> Self {
        Self {
            email: EmailConfig::from_env(),
            recaptcha: RecaptchaConfig::from_env(),
        }
    }

    /// Flags blank identifiers so a misconfigured build complains at
    /// startup instead of failing on the first submission.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.email.public_key.is_empty() {
            errors.push("EMAILJS_PUBLIC_KEY is not set".to_string());
        }
        if self.email.service_id.is_empty() {
            errors.push("EMAILJS_SERVICE_ID is not set".to_string());
        }
        if self.email.template_id.is_empty() {
            errors.push("EMAILJS_TEMPLATE_ID is not set".to_string());
        }
        if self.email.to_email.is_empty() {
            errors.push("Quote recipient address is not set".to_string());
        }
        if self.recaptcha.site_key.is_empty() {
            errors.push("RECAPTCHA_SITE_KEY is not set".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
