//! Domain models for the hospital queue console.

mod app;
mod command;
mod directory;
mod error;
mod navigation;
mod notice;
mod roster;
mod sequence;
mod token_panel;

pub use app::{App, AppState, DEFAULT_NOTICE_TTL};
pub use command::{execute, Command, Completion, ViewId};
pub use directory::{CreateForm, DirectoryView, FormField, DELETE_CONFIRMATION};
pub use error::ActionError;
pub use navigation::{Route, Sidebar, COLLAPSED_WIDTH, EXPANDED_WIDTH};
pub use notice::{Notice, NoticeBoard, NoticeLevel};
pub use roster::{FetchOutcome, Roster};
pub use sequence::{RequestSeq, Ticket};
pub use token_panel::TokenPanel;
