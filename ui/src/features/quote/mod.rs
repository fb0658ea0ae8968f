//! The quote-request feature: form state machine, validation rules, phone
//! normalization and the delivery workflow, kept independent of the
//! rendering layer so the whole flow is testable without a browser.

pub mod logic;
pub mod types;
pub mod validation;

#[cfg(feature = "web")]
pub use logic::deliver_quote_request;
pub use logic::to_quote_message;
pub use types::*;
pub use validation::{format_phone_number, is_email_shaped, is_formatted_phone, validate};
