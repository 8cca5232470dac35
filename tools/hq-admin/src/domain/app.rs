//! Application state management.

use std::time::{Duration, Instant};

use crossterm::event::KeyCode;
use tracing::debug;

use super::{
    ActionError, Command, Completion, DirectoryView, Notice, NoticeBoard, Route, Sidebar,
    TokenPanel, ViewId,
};

/// Default lifetime of a notice.
pub const DEFAULT_NOTICE_TTL: Duration = Duration::from_secs(4);

/// Application state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    /// Normal navigation.
    #[default]
    Normal,
    /// Help overlay.
    Help,
    /// Quitting.
    Quit,
}

/// Main application model.
///
/// Key handling and response application are synchronous. Anything that
/// needs the hospital service is returned as a [`Command`] for the runtime
/// to execute.
pub struct App {
    /// Current application state.
    pub state: AppState,
    pub sidebar: Sidebar,
    pub directory: DirectoryView,
    pub token_panel: TokenPanel,
    pub notices: NoticeBoard,
    /// Time of the last successful roster fetch.
    pub last_refresh: Option<chrono::DateTime<chrono::Utc>>,
    /// Service location shown in the header.
    pub endpoint: String,
    /// Frame counter for spinners.
    pub ticks: u64,
}

impl Default for App {
    fn default() -> Self {
        Self::new("in-memory", true, DEFAULT_NOTICE_TTL)
    }
}

impl App {
    pub fn new(endpoint: impl Into<String>, sidebar_expanded: bool, notice_ttl: Duration) -> Self {
        Self {
            state: AppState::Normal,
            sidebar: Sidebar::new(sidebar_expanded),
            directory: DirectoryView::new(),
            token_panel: TokenPanel::new(),
            notices: NoticeBoard::new(notice_ttl),
            last_refresh: None,
            endpoint: endpoint.into(),
            ticks: 0,
        }
    }

    /// Requests issued when the console first shows its initial route.
    pub fn startup_commands(&mut self) -> Vec<Command> {
        self.mount(self.sidebar.current()).into_iter().collect()
    }

    pub fn should_quit(&self) -> bool {
        self.state == AppState::Quit
    }

    /// Switch routes. Entering a view fetches its roster.
    pub fn navigate(&mut self, route: Route) -> Vec<Command> {
        let previous = self.sidebar.current();
        if previous == route {
            return Vec::new();
        }
        debug!(from = previous.path(), to = route.path(), "navigate");
        if previous == Route::TokenPanel {
            self.token_panel.close_detail_view();
        }
        if previous == Route::Doctors {
            self.directory.close_form();
            self.directory.cancel_delete();
        }
        self.sidebar.navigate(route);
        self.mount(route).into_iter().collect()
    }

    /// Refetch the active view's roster.
    pub fn refresh_active(&mut self) -> Vec<Command> {
        self.mount(self.sidebar.current()).into_iter().collect()
    }

    fn mount(&mut self, route: Route) -> Option<Command> {
        match route {
            Route::Doctors => Some(self.directory.begin_list()),
            Route::TokenPanel => Some(self.token_panel.begin_list()),
            _ => None,
        }
    }

    /// Handle keyboard input. Returns the requests to issue.
    pub fn handle_key(&mut self, key: KeyCode) -> Vec<Command> {
        match self.state {
            AppState::Help => {
                // Any key closes help
                self.state = AppState::Normal;
                Vec::new()
            }
            AppState::Quit => Vec::new(),
            AppState::Normal => self.handle_normal_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyCode) -> Vec<Command> {
        let route = self.sidebar.current();

        if route == Route::Doctors && self.directory.form().is_some() {
            return self.handle_form_key(key);
        }
        if route == Route::Doctors && self.directory.pending_delete().is_some() {
            return self.handle_confirm_key(key);
        }
        if route == Route::TokenPanel && self.token_panel.is_detail_open() {
            if let Some(commands) = self.handle_detail_key(key) {
                return commands;
            }
        }

        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.state = AppState::Quit;
                Vec::new()
            }
            KeyCode::Char('?') => {
                self.state = AppState::Help;
                Vec::new()
            }
            KeyCode::Char('b') | KeyCode::Char('B') => {
                self.sidebar.toggle();
                Vec::new()
            }
            KeyCode::Char('r') | KeyCode::Char('R') => self.refresh_active(),
            KeyCode::Tab => {
                let mut next = self.sidebar.clone();
                next.next();
                self.navigate(next.current())
            }
            KeyCode::BackTab => {
                let mut prev = self.sidebar.clone();
                prev.prev();
                self.navigate(prev.current())
            }
            KeyCode::Char(c) if Route::from_hotkey(c).is_some() => match Route::from_hotkey(c) {
                Some(target) => self.navigate(target),
                None => Vec::new(),
            },
            _ => match route {
                Route::Doctors => self.handle_directory_key(key),
                Route::TokenPanel => self.handle_token_key(key),
                _ => Vec::new(),
            },
        }
    }

    fn handle_form_key(&mut self, key: KeyCode) -> Vec<Command> {
        match key {
            KeyCode::Esc => self.directory.close_form(),
            KeyCode::Enter => match self.directory.submit_form() {
                Ok(command) => return vec![command],
                Err(e) => self.reject(e),
            },
            other => {
                if let Some(form) = self.directory.form_mut() {
                    match other {
                        KeyCode::Tab | KeyCode::Down | KeyCode::Up => form.focus_next(),
                        KeyCode::Backspace => form.backspace(),
                        KeyCode::Char(c) => form.input(c),
                        _ => {}
                    }
                }
            }
        }
        Vec::new()
    }

    fn handle_confirm_key(&mut self, key: KeyCode) -> Vec<Command> {
        match key {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                self.directory.confirm_delete().into_iter().collect()
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.directory.cancel_delete();
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    /// Keys captured by the token detail view. `None` falls through.
    fn handle_detail_key(&mut self, key: KeyCode) -> Option<Vec<Command>> {
        match key {
            KeyCode::Char('i') | KeyCode::Char('I') | KeyCode::Enter => Some(self.increment()),
            KeyCode::Esc | KeyCode::Char('x') => {
                self.token_panel.close_detail_view();
                Some(Vec::new())
            }
            KeyCode::Char('q') | KeyCode::Char('?') => None,
            _ => Some(Vec::new()),
        }
    }

    fn handle_directory_key(&mut self, key: KeyCode) -> Vec<Command> {
        match key {
            KeyCode::Up | KeyCode::Char('k') => self.directory.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.directory.select_next(),
            KeyCode::Char('a') | KeyCode::Char('A') => self.directory.open_form(),
            KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Delete => {
                let target = self.directory.selected().map(|d| d.id.clone());
                let result = target
                    .ok_or(ActionError::NoDoctorSelected)
                    .and_then(|id| self.directory.request_delete(id));
                if let Err(e) = result {
                    self.reject(e);
                }
            }
            _ => {}
        }
        Vec::new()
    }

    fn handle_token_key(&mut self, key: KeyCode) -> Vec<Command> {
        match key {
            KeyCode::Up | KeyCode::Char('k') => self.token_panel.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.token_panel.select_next(),
            KeyCode::Enter => {
                self.token_panel.select_at_cursor();
            }
            KeyCode::Char('m') | KeyCode::Char('M') => {
                if let Err(e) = self.token_panel.open_detail_view() {
                    self.reject(e);
                }
            }
            KeyCode::Char('i') | KeyCode::Char('I') => return self.increment(),
            _ => {}
        }
        Vec::new()
    }

    fn increment(&mut self) -> Vec<Command> {
        match self.token_panel.begin_increment() {
            Ok(command) => vec![command],
            Err(e) => {
                self.reject(e);
                Vec::new()
            }
        }
    }

    fn reject(&mut self, error: ActionError) {
        debug!(%error, "action rejected");
        self.notices.post(Notice::from(error), Instant::now());
    }

    /// Route a service response to its view and post the resulting notice.
    pub fn apply(&mut self, completion: Completion) {
        let refreshes = self.refreshes();

        let for_token_panel = match &completion {
            Completion::DoctorsListed { view, .. } => *view == ViewId::TokenPanel,
            Completion::TokenIncremented { .. } => true,
            Completion::DoctorCreated { .. } | Completion::DoctorDeleted { .. } => false,
        };
        let notice = if for_token_panel {
            self.token_panel.apply(completion)
        } else {
            self.directory.apply(completion)
        };

        if self.refreshes() != refreshes {
            self.last_refresh = Some(chrono::Utc::now());
        }
        if let Some(notice) = notice {
            self.notices.post(notice, Instant::now());
        }
    }

    fn refreshes(&self) -> u64 {
        self.directory.roster().refreshes() + self.token_panel.roster().refreshes()
    }

    /// Advance animations and expire notices.
    pub fn tick(&mut self, now: Instant) {
        self.ticks = self.ticks.wrapping_add(1);
        self.notices.prune(now);
    }

    /// Notice to show in the header, if any.
    pub fn current_notice(&self) -> Option<&Notice> {
        self.notices.current(Instant::now())
    }
}
