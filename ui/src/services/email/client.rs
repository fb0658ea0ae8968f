use async_trait::async_trait;
use reqwest::Client;
use tracing::{error, info, instrument};

use crate::services::config::EmailConfig;

use super::errors::EmailError;
use super::types::{EmailAck, QuoteMessage, SendEmailRequest};

/// REST endpoint of the transactional email provider.
const SEND_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// The delivery capability consumed by the quote-form workflow. WASM-first:
/// no Send/Sync bounds, the browser runtime is single-threaded.
#[async_trait(?Send)]
pub trait QuoteSender {
    async fn send_quote(&self, message: &QuoteMessage) -> Result<EmailAck, EmailError>;
}

/// Client for the provider's send endpoint.
#[derive(Clone)]
pub struct EmailClient {
    http_client: Client,
    config: EmailConfig,
}

impl EmailClient {
    pub fn new(config: EmailConfig) -> Self {
        Self {
            http_client: Client::builder()
                .user_agent("southern-sons-site/1.0")
                .build()
                .expect("Failed to create HTTP client"),
            config,
        }
    }

    fn build_request(&self, message: &QuoteMessage) -> SendEmailRequest {
        SendEmailRequest {
            service_id: self.config.service_id.clone(),
            template_id: self.config.template_id.clone(),
            user_id: self.config.public_key.clone(),
            template_params: message.clone(),
        }
    }
}

#[async_trait(?Send)]
impl QuoteSender for EmailClient {
    /// One POST per call; any non-2xx status or transport failure is an
    /// error. Retry is left to the user, there is no queueing.
    #[instrument(skip(self, message), err)]
    async fn send_quote(&self, message: &QuoteMessage) -> Result<EmailAck, EmailError> {
        let request = self.build_request(message);

        let response = self
            .http_client
            .post(SEND_ENDPOINT)
            .json(&request)
            .send()
            .await
            .map_err(|e| EmailError::Network {
                message: e.to_string(),
            })?;

        let status = response.status();
        let text = response.text().await.unwrap_or_default();

        if status.is_success() {
            info!(
                status = status.as_u16(),
                "email provider accepted quote request"
            );
            Ok(EmailAck {
                status: status.as_u16(),
                text,
            })
        } else {
            error!(
                status = status.as_u16(),
                body = %text,
                "email provider rejected quote request"
            );
            Err(EmailError::Rejected {
                status: status.as_u16(),
                body: text,
            })
        }
    }
}
