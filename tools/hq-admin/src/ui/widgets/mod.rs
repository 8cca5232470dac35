//! Reusable UI widgets.

mod help_overlay;
mod modal;

pub use help_overlay::render_help_overlay;
pub use modal::{centered_rect, render_confirm_modal, render_form_modal};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner frame for the given tick.
pub fn spinner(ticks: u64) -> &'static str {
    SPINNER[(ticks % SPINNER.len() as u64) as usize]
}
