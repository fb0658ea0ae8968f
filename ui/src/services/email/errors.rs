use thiserror::Error;

/// Errors from the transactional email delivery service.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EmailError {
    #[error("email request failed: {message}")]
    Network { message: String },

    #[error("email provider rejected the message with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

impl EmailError {
    /// Text safe to show in the UI. The specific cause goes to the logs,
    /// never to the banner.
    pub fn user_message(&self) -> &'static str {
        "We couldn't send your request right now. Please try again in a moment, \
         or give us a call instead."
    }
}

/// Result type for email delivery operations.
pub type EmailResult<T> = Result<T, EmailError>;
