//! UI module - TUI rendering components.
//!
//! - `layout.rs`: Main layout orchestration and overlays
//! - `sidebar.rs`: Route list (collapsible)
//! - `main_panel.rs`: Dispatches to the active route's view
//! - `views/`: Per-route renderers
//! - `widgets/`: Reusable UI components

mod layout;
mod main_panel;
mod sidebar;

pub mod views;
pub mod widgets;

pub use layout::render;
