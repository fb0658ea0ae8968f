//! Utility functions and cross-cutting concerns.
//!
//! - **console_macros**: WASM-compatible logging macros for browser console
//!   output
//! - **validation**: class/style mapping from field validation states to the
//!   stylesheet

pub mod console_macros;
pub mod validation;

pub use validation::*;
