use crate::core::records::{FetchError, Record};

/// Outcome of one dashboard fetch.
pub type FetchResult = Result<Vec<Record>, FetchError>;

/// Events flowing through the Elm-architecture event loop.
#[derive(Debug)]
pub enum AppEvent {
    /// Periodic tick for notification TTLs.
    Tick,
    /// Raw terminal input (keyboard/mouse).
    Input(crossterm::event::Event),
    /// A dashboard fetch finished. `mount` names the dashboard instance that
    /// started it; results for any other instance are dropped.
    RecordsLoaded { mount: u64, result: FetchResult },
}

/// High-level actions dispatched by screens, the sidebar or global keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Navigate(Route),
    Logout,
    OpenLink(NavLink),
    ToggleSidebar,
    FocusSidebar,
    ShowHelp,
    CloseHelp,
    Quit,
}

/// Reachable screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Dashboard,
}

impl Route {
    pub fn label(self) -> &'static str {
        match self {
            Route::Login => "Login",
            Route::Dashboard => "Dashboard",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Dashboard => "/dashboard",
        }
    }
}

/// Sidebar entries. Only `Dashboard` has a screen behind it; the others are
/// placeholder links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavLink {
    Dashboard,
    Settings,
    Profile,
}

impl NavLink {
    pub const ALL: [NavLink; 3] = [NavLink::Dashboard, NavLink::Settings, NavLink::Profile];

    pub fn label(self) -> &'static str {
        match self {
            NavLink::Dashboard => "Dashboard",
            NavLink::Settings => "Settings",
            NavLink::Profile => "Profile",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            NavLink::Dashboard => "▤",
            NavLink::Settings => "⚙",
            NavLink::Profile => "☺",
        }
    }

    /// Screen behind the link, if any.
    pub fn route(self) -> Option<Route> {
        match self {
            NavLink::Dashboard => Some(Route::Dashboard),
            NavLink::Settings | NavLink::Profile => None,
        }
    }
}

/// Whether the sidebar or the main screen has input focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AreaFocus {
    Sidebar,
    Main,
}

/// Notification level for the overlay system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

/// A timed notification shown in the overlay.
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    /// Ticks remaining before auto-dismiss.
    pub ttl_ticks: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_dashboard_link_has_route() {
        assert_eq!(NavLink::Dashboard.route(), Some(Route::Dashboard));
        assert_eq!(NavLink::Settings.route(), None);
        assert_eq!(NavLink::Profile.route(), None);
    }

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Login.path(), "/login");
        assert_eq!(Route::Dashboard.path(), "/dashboard");
    }
}
