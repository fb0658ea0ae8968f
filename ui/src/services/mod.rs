//! Infrastructure services.
//!
//! - **email**: delivery client for the quote-request email, wrapped behind
//!   a capability trait for testing
//! - **config**: build-time configuration for provider identifiers and the
//!   CAPTCHA widget
//!
//! Services are WASM-first: async traits carry no Send/Sync bounds and all
//! I/O goes through browser-compatible clients.

pub mod config;
pub mod email;
