//! Per-route renderers.
//!
//! Doctors and Token Panel have working views; every other route shows a
//! placeholder.

pub mod directory;
pub mod placeholder;
pub mod token_panel;
