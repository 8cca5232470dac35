//! Sidebar navigation.

/// Console routes, mirroring the admin panel's link list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    Home,
    Dashboard,
    #[default]
    Doctors,
    TokenBooking,
    TokenPanel,
    Login,
}

impl Route {
    /// Menu entries in display order. `Home` sits in the sidebar footer.
    pub const MENU: [Route; 5] = [
        Route::Dashboard,
        Route::Doctors,
        Route::TokenBooking,
        Route::TokenPanel,
        Route::Login,
    ];

    /// Every route in navigation order (menu, then footer).
    pub const ALL: [Route; 6] = [
        Route::Dashboard,
        Route::Doctors,
        Route::TokenBooking,
        Route::TokenPanel,
        Route::Login,
        Route::Home,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Dashboard => "/dashboard",
            Route::Doctors => "/doctors",
            Route::TokenBooking => "/tokens",
            Route::TokenPanel => "/token-panel",
            Route::Login => "/login",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Dashboard => "Dashboard",
            Route::Doctors => "Doctors",
            Route::TokenBooking => "Token Booking",
            Route::TokenPanel => "Token Panel",
            Route::Login => "Login",
        }
    }

    /// Short icon shown when the sidebar is collapsed.
    pub fn icon(&self) -> &'static str {
        match self {
            Route::Home => "⌂",
            Route::Dashboard => "▦",
            Route::Doctors => "✚",
            Route::TokenBooking => "▤",
            Route::TokenPanel => "◉",
            Route::Login => "→",
        }
    }

    pub fn hotkey(&self) -> char {
        match self {
            Route::Dashboard => '1',
            Route::Doctors => '2',
            Route::TokenBooking => '3',
            Route::TokenPanel => '4',
            Route::Login => '5',
            Route::Home => '0',
        }
    }

    pub fn from_hotkey(key: char) -> Option<Route> {
        Route::ALL.into_iter().find(|route| route.hotkey() == key)
    }

    /// Whether this console has a working view for the route.
    pub fn has_view(&self) -> bool {
        matches!(self, Route::Doctors | Route::TokenPanel)
    }
}

/// Sidebar width in columns.
pub const EXPANDED_WIDTH: u16 = 24;
pub const COLLAPSED_WIDTH: u16 = 7;

/// Collapsed/expanded state and the current route.
#[derive(Debug, Clone)]
pub struct Sidebar {
    expanded: bool,
    current: Route,
}

impl Default for Sidebar {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Sidebar {
    pub fn new(expanded: bool) -> Self {
        Self {
            expanded,
            current: Route::default(),
        }
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn width(&self) -> u16 {
        if self.expanded {
            EXPANDED_WIDTH
        } else {
            COLLAPSED_WIDTH
        }
    }

    pub fn current(&self) -> Route {
        self.current
    }

    pub fn navigate(&mut self, route: Route) {
        self.current = route;
    }

    /// Whether `route` is highlighted.
    pub fn is_active(&self, route: Route) -> bool {
        self.current == route
    }

    pub fn next(&mut self) {
        let idx = Self::index_of(self.current);
        self.current = Route::ALL[(idx + 1) % Route::ALL.len()];
    }

    pub fn prev(&mut self) {
        let idx = Self::index_of(self.current);
        let new_idx = if idx == 0 { Route::ALL.len() - 1 } else { idx - 1 };
        self.current = Route::ALL[new_idx];
    }

    fn index_of(route: Route) -> usize {
        Route::ALL.iter().position(|&r| r == route).unwrap_or(0)
    }
}
