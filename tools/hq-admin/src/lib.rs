//! HQ-Admin: hospital queue admin console.
//!
//! A TUI for managing the doctor roster and advancing each doctor's
//! "now serving" token through the hospital service.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  HQ-ADMIN                                  ✔ Doctor added       │
//! ├──────────────┬──────────────────────────────────────────────────┤
//! │  MENU        │  DOCTORS / TOKEN PANEL / placeholder             │
//! │  [1] ...     │                                                  │
//! └──────────────┴──────────────────────────────────────────────────┘
//!
//!  key ──→ App::handle_key ──→ Command ──→ Dispatcher (tokio task)
//!                                               │
//!  render ←── App::apply ←── Completion ←───────┘ (mpsc)
//! ```
//!
//! Views validate and set their guards synchronously; only the service
//! call runs on a task. Responses carry the ticket they were issued with,
//! so a view discards anything that belongs to an earlier request.

pub mod config;
pub mod domain;
pub mod runtime;
pub mod ui;

pub use config::{AdminConfig, ConfigError};
pub use domain::{App, AppState, Command, Completion, Notice, NoticeLevel, Route};
pub use runtime::Dispatcher;
