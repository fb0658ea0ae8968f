//! User interface components.
//!
//! - **display**: hero, service listing and the status banner
//! - **forms**: the quote-request form and CAPTCHA widget
//! - **input**: validated input fields and inline feedback
//!
//! All components bind state owned by `features::quote`; none of them hold
//! form data of their own.

pub mod display;
pub mod forms;
pub mod input;
