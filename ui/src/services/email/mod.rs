// Delivery client for the quote-request email
//
// This module wraps the third-party transactional email provider behind a
// small capability trait so the form workflow can be exercised against a
// stub in tests. One request per user action; no retry, no queueing.

pub mod client;
pub mod errors;
pub mod types;

pub use client::{EmailClient, QuoteSender};
pub use errors::{EmailError, EmailResult};
pub use types::{EmailAck, QuoteMessage, SendEmailRequest};
