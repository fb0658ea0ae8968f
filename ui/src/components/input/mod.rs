//! Validated input fields and inline feedback for the quote form.

pub mod validated_input;
pub mod validation_feedback;

pub use validated_input::{InputType, ValidatedInput, ValidatedTextarea};
pub use validation_feedback::FieldValidationFeedback;
