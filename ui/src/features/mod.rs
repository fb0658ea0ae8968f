//! Feature modules. Each feature owns its state, validation and workflow
//! logic; components only bind these to the DOM.

pub mod quote;
