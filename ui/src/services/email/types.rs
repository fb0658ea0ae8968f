use serde::{Deserialize, Serialize};

/// Template parameters for the quote-request email. This is the minimum
/// contract the business template expects; `to_email` is the fixed business
/// address, never user-supplied.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct QuoteMessage {
    pub from_name: String,
    pub from_email: String,
    pub phone: String,
    pub message: String,
    pub to_email: String,
}

/// Wire request for the provider's send endpoint.
#[derive(Serialize, Debug, Clone)]
pub struct SendEmailRequest {
    pub service_id: String,
    pub template_id: String,
    pub user_id: String,
    pub template_params: QuoteMessage,
}

/// Provider acknowledgement for an accepted message.
#[derive(Debug, Clone, PartialEq)]
pub struct EmailAck {
    pub status: u16,
    pub text: String,
}
