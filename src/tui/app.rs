use std::io;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};
use tokio::sync::mpsc;

use super::events::{
    Action, AppEvent, AreaFocus, FetchResult, NavLink, Notification, NotificationLevel, Route,
};
use super::layout::AppLayout;
use super::services::Services;
use super::sidebar::SidebarState;
use super::theme;
use super::views::dashboard::{DashboardInputMode, DashboardResult, DashboardState};
use super::views::login::{LoginResult, LoginState};
use crate::core::session::GateDecision;

/// Maximum notifications shown at once.
const MAX_NOTIFICATIONS: usize = 3;
/// Notification lifetime in ticks.
const NOTIFICATION_TTL_TICKS: u32 = 100;

/// The mounted screen. Leaving a screen drops its state; a fetch it started
/// still reports back but no longer matches a mounted dashboard.
pub enum Screen {
    Login(LoginState),
    Dashboard(DashboardState),
}

impl Screen {
    pub fn route(&self) -> Route {
        match self {
            Screen::Login(_) => Route::Login,
            Screen::Dashboard(_) => Route::Dashboard,
        }
    }
}

/// Central application state (Elm architecture).
pub struct AppState {
    /// Whether the app is still running.
    pub running: bool,
    /// Currently mounted screen.
    pub screen: Screen,
    /// Whether sidebar or main content has input focus.
    pub area_focus: AreaFocus,
    /// Sidebar navigation state.
    pub sidebar: SidebarState,
    /// Active notifications (max 3 visible).
    pub notifications: Vec<Notification>,
    /// Id handed to the most recently mounted dashboard.
    mount_counter: u64,
    /// Whether the help modal is open.
    pub show_help: bool,
    /// Receiver for events produced by background tasks.
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
    /// Sender cloned into background tasks such as dashboard fetches.
    event_tx: mpsc::UnboundedSender<AppEvent>,
    /// Backend services handle.
    services: Services,
}

impl AppState {
    pub fn new(
        event_rx: mpsc::UnboundedReceiver<AppEvent>,
        event_tx: mpsc::UnboundedSender<AppEvent>,
        services: Services,
    ) -> Self {
        Self {
            running: true,
            screen: Screen::Login(LoginState::new()),
            area_focus: AreaFocus::Main,
            sidebar: SidebarState::new(),
            notifications: Vec::new(),
            mount_counter: 0,
            show_help: false,
            event_rx,
            event_tx,
            services,
        }
    }

    pub fn route(&self) -> Route {
        self.screen.route()
    }

    pub fn services(&self) -> &Services {
        &self.services
    }

    pub fn dashboard(&self) -> Option<&DashboardState> {
        match self.screen {
            Screen::Dashboard(ref dashboard) => Some(dashboard),
            Screen::Login(_) => None,
        }
    }

    pub fn login(&self) -> Option<&LoginState> {
        match self.screen {
            Screen::Login(ref login) => Some(login),
            Screen::Dashboard(_) => None,
        }
    }

    /// Initial navigation. The dashboard is the landing route; the gate
    /// decides whether it actually mounts.
    pub fn start(&mut self) {
        self.navigate(Route::Dashboard);
    }

    // ── Elm event loop ──────────────────────────────────────────────────

    /// Main event loop: render → select → update → loop.
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        tick_rate: Duration,
    ) -> io::Result<()> {
        let mut tick_interval = tokio::time::interval(tick_rate);
        let mut event_stream = EventStream::new();

        self.start();

        while self.running {
            terminal.draw(|frame| self.render(frame))?;

            tokio::select! {
                _ = tick_interval.tick() => {
                    self.on_tick();
                }
                Some(event) = self.event_rx.recv() => {
                    self.handle_event(event);
                }
                Some(Ok(crossterm_event)) = event_stream.next() => {
                    self.handle_event(AppEvent::Input(crossterm_event));
                }
            }

            // Apply anything else already queued before the next draw
            self.drain_events();
        }

        Ok(())
    }

    /// Handle every event already queued on the internal channel.
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
        }
    }

    // ── Event handling ──────────────────────────────────────────────────

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Input(crossterm_event) => self.handle_input(crossterm_event),
            AppEvent::Tick => self.on_tick(),
            AppEvent::RecordsLoaded { mount, result } => self.on_records_loaded(mount, result),
        }
    }

    /// Hand a finished fetch to the dashboard that started it. Results for a
    /// dashboard that is no longer mounted are dropped.
    fn on_records_loaded(&mut self, mount: u64, result: FetchResult) {
        let Screen::Dashboard(ref mut dashboard) = self.screen else {
            log::debug!("Fetch for dashboard {} finished after it was left", mount);
            return;
        };
        if dashboard.mount_id() != mount {
            log::debug!(
                "Fetch for dashboard {} dropped, dashboard {} is mounted",
                mount,
                dashboard.mount_id()
            );
            return;
        }

        let failure = result.as_ref().err().map(|e| e.to_string());
        dashboard.apply_fetch(result);
        if let Some(detail) = failure {
            self.push_notification(detail, NotificationLevel::Error);
        }
    }

    fn handle_input(&mut self, event: Event) {
        // Priority 1: Help modal
        if self.show_help {
            if let Some(action) = self.map_help_input(&event) {
                self.handle_action(action);
            }
            return;
        }

        // Priority 2: Sidebar input (when focused)
        if self.area_focus == AreaFocus::Sidebar
            && self.route() == Route::Dashboard
            && self.handle_sidebar_input(&event)
        {
            return;
        }

        // Priority 3: Mounted screen
        if self.dispatch_screen_input(&event) {
            return;
        }

        // Priority 4: Global keybindings
        if let Some(action) = self.map_input_to_action(event) {
            self.handle_action(action);
        }
    }

    /// Dispatch input to the mounted screen. Returns true if consumed.
    fn dispatch_screen_input(&mut self, event: &Event) -> bool {
        match self.screen {
            Screen::Login(ref mut login) => match login.handle_input(event, &self.services) {
                Some(LoginResult::Consumed) => true,
                Some(LoginResult::Navigate(route)) => {
                    self.handle_action(Action::Navigate(route));
                    if self.route() == route {
                        self.push_notification("Signed in".to_string(), NotificationLevel::Success);
                    }
                    true
                }
                None => false,
            },
            Screen::Dashboard(ref mut dashboard) => match dashboard.handle_input(event) {
                Some(DashboardResult::Consumed) => true,
                Some(DashboardResult::Logout) => {
                    self.handle_action(Action::Logout);
                    true
                }
                None => false,
            },
        }
    }

    /// Handle sidebar-specific input. Returns true if consumed.
    fn handle_sidebar_input(&mut self, event: &Event) -> bool {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return false;
        };

        match (*modifiers, *code) {
            (KeyModifiers::NONE, KeyCode::Char('j')) | (KeyModifiers::NONE, KeyCode::Down) => {
                self.sidebar.select_next();
                true
            }
            (KeyModifiers::NONE, KeyCode::Char('k')) | (KeyModifiers::NONE, KeyCode::Up) => {
                self.sidebar.select_prev();
                true
            }
            (KeyModifiers::NONE, KeyCode::Enter) | (KeyModifiers::NONE, KeyCode::Char('l')) => {
                let link = self.sidebar.selected_link();
                self.area_focus = AreaFocus::Main;
                self.handle_action(Action::OpenLink(link));
                true
            }
            (KeyModifiers::NONE, KeyCode::Char('h')) => {
                self.sidebar.user_collapsed = true;
                self.area_focus = AreaFocus::Main;
                true
            }
            (KeyModifiers::NONE, KeyCode::Esc) | (KeyModifiers::NONE, KeyCode::Tab) => {
                self.area_focus = AreaFocus::Main;
                true
            }
            _ => false,
        }
    }

    // ── Input mapping ───────────────────────────────────────────────────

    /// Map help modal input to action.
    fn map_help_input(&self, event: &Event) -> Option<Action> {
        let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return None;
        };
        match code {
            KeyCode::Esc | KeyCode::Char('?') => Some(Action::CloseHelp),
            _ => None,
        }
    }

    fn map_input_to_action(&self, event: Event) -> Option<Action> {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return None;
        };

        // Ctrl+C quits from anywhere
        if modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        // The login form types every printable key, so only Ctrl+C reaches here
        if self.route() == Route::Login {
            return None;
        }

        match (modifiers, code) {
            // Ctrl+B → toggle sidebar
            (KeyModifiers::CONTROL, KeyCode::Char('b')) => Some(Action::ToggleSidebar),
            (KeyModifiers::NONE | KeyModifiers::SHIFT, _) => match code {
                KeyCode::Char('q') => Some(Action::Quit),
                KeyCode::Char('?') => Some(Action::ShowHelp),
                KeyCode::Tab => Some(Action::FocusSidebar),
                _ => None,
            },
            _ => None,
        }
    }

    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,
            Action::Navigate(route) => self.navigate(route),
            Action::Logout => {
                self.services.gate.logout();
                self.navigate(Route::Login);
                self.push_notification("Signed out".to_string(), NotificationLevel::Success);
            }
            Action::OpenLink(link) => self.open_link(link),
            Action::ToggleSidebar => {
                self.sidebar.toggle_collapse();
                // If expanding, hand focus to the sidebar
                if !self.sidebar.user_collapsed {
                    self.area_focus = AreaFocus::Sidebar;
                }
            }
            Action::FocusSidebar => {
                self.sidebar.user_collapsed = false;
                self.area_focus = AreaFocus::Sidebar;
            }
            Action::ShowHelp => self.show_help = true,
            Action::CloseHelp => self.show_help = false,
        }
    }

    /// Switch screens. Entering the dashboard runs the session gate first;
    /// only a granted check mounts it (and starts its fetch).
    pub fn navigate(&mut self, route: Route) {
        self.area_focus = AreaFocus::Main;
        self.show_help = false;

        match route {
            Route::Login => {
                self.screen = Screen::Login(LoginState::new());
            }
            Route::Dashboard => match self.services.gate.check_session() {
                GateDecision::Granted => {
                    self.mount_counter += 1;
                    let mut dashboard = DashboardState::new(self.mount_counter);
                    dashboard.mount(&self.services, &self.event_tx);
                    self.screen = Screen::Dashboard(dashboard);
                }
                GateDecision::Denied => {
                    log::info!("No session token, redirecting to {}", Route::Login.path());
                    self.screen = Screen::Login(LoginState::new());
                }
            },
        }
        tracing::debug!(route = self.route().path(), "Screen mounted");
    }

    fn open_link(&mut self, link: NavLink) {
        match link.route() {
            // Already there: no remount
            Some(route) if route == self.route() => {}
            Some(route) => self.navigate(route),
            None => self.push_notification(
                format!("{} is not available yet", link.label()),
                NotificationLevel::Info,
            ),
        }
    }

    // ── Notifications ───────────────────────────────────────────────────

    /// Push a notification (dedup by message, max 3).
    pub fn push_notification(&mut self, message: String, level: NotificationLevel) {
        if self.notifications.iter().any(|n| n.message == message) {
            return;
        }

        self.notifications.push(Notification {
            message,
            level,
            ttl_ticks: NOTIFICATION_TTL_TICKS,
        });

        while self.notifications.len() > MAX_NOTIFICATIONS {
            self.notifications.remove(0);
        }
    }

    /// Tick: decrement notification TTLs and dismiss expired ones.
    pub fn on_tick(&mut self) {
        for n in &mut self.notifications {
            n.ttl_ticks = n.ttl_ticks.saturating_sub(1);
        }
        self.notifications.retain(|n| n.ttl_ticks > 0);
    }

    // ── Rendering ───────────────────────────────────────────────────────

    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        match self.screen {
            Screen::Login(ref login) => {
                let layout = AppLayout::bare(area);
                login.render(frame, layout.main);
                self.render_status_bar(frame, layout.status);
            }
            Screen::Dashboard(ref dashboard) => {
                let (layout, visibility) = AppLayout::compute(area, self.sidebar.user_collapsed);
                if let Some(header) = layout.header {
                    self.render_header(frame, header);
                }
                if let Some(sidebar_area) = layout.sidebar {
                    self.sidebar
                        .render(frame, sidebar_area, visibility, self.area_focus);
                }
                dashboard.render(frame, layout.main);
                self.render_status_bar(frame, layout.status);
            }
        }

        // Overlays
        self.render_notifications(frame, area);

        if self.show_help {
            self.render_help_modal(frame, area);
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(theme::border_default())
            .style(theme::header());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let cols = Layout::horizontal([Constraint::Min(1), Constraint::Length(14)]).split(inner);
        frame.render_widget(
            Paragraph::new(Span::styled(" Dashboard", theme::header())),
            cols[0],
        );
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("L", theme::key_hint()),
                Span::raw(" "),
                Span::styled(" Logout ", theme::destructive()),
            ]))
            .alignment(Alignment::Right),
            cols[1],
        );
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let mode_indicator = match self.screen {
            Screen::Dashboard(ref dashboard)
                if dashboard.input_mode() == DashboardInputMode::Search =>
            {
                Span::styled(" SEARCH ", theme::insert_badge())
            }
            _ => Span::raw(""),
        };

        let mut spans = vec![
            Span::styled(" POSTBOARD ", theme::brand_badge()),
            Span::raw(" "),
            mode_indicator,
            Span::raw(" "),
            Span::styled(
                self.route().label(),
                Style::default()
                    .fg(theme::PRIMARY_LIGHT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" │ "),
        ];

        let hints: &[(&str, &str)] = match self.route() {
            Route::Login => &[("Tab", ":field "), ("Enter", ":login "), ("Ctrl+C", ":quit")],
            Route::Dashboard => &[
                ("/", ":search "),
                ("←/→", ":page "),
                ("Ctrl+B", ":sidebar "),
                ("L", ":logout "),
                ("?", ":help "),
                ("q", ":quit"),
            ],
        };
        for (key, desc) in hints {
            spans.push(Span::styled(*key, theme::key_hint()));
            spans.push(Span::raw(*desc));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_notifications(&self, frame: &mut Frame, area: Rect) {
        if self.notifications.is_empty() {
            return;
        }

        let max_width = 50.min(area.width.saturating_sub(2));
        let height = (self.notifications.len() as u16).min(area.height);
        let x = area.width.saturating_sub(max_width + 1);
        let y = 1.min(area.height.saturating_sub(height));

        let notification_area = Rect::new(x, y, max_width, height);

        let lines: Vec<Line> = self
            .notifications
            .iter()
            .map(|n| {
                let (prefix, color) = match n.level {
                    NotificationLevel::Info => ("ℹ", theme::INFO),
                    NotificationLevel::Success => ("✓", theme::SUCCESS),
                    NotificationLevel::Error => ("✗", theme::ERROR),
                };
                Line::from(vec![
                    Span::styled(format!(" {prefix} "), Style::default().fg(color).bold()),
                    Span::raw(&n.message),
                ])
            })
            .collect();

        frame.render_widget(Clear, notification_area);
        frame.render_widget(Paragraph::new(lines), notification_area);
    }

    fn render_help_modal(&self, frame: &mut Frame, area: Rect) {
        let modal = centered_rect(60, 80, area);

        let keybindings = [
            ("Global:", ""),
            ("q", "Quit application"),
            ("?", "Toggle this help"),
            ("Ctrl+B", "Toggle sidebar collapse/expand"),
            ("Tab", "Focus sidebar"),
            ("Ctrl+C", "Force quit"),
            ("", ""),
            ("Sidebar (when focused):", ""),
            ("j/k", "Navigate up/down"),
            ("Enter / l", "Open link"),
            ("h", "Collapse sidebar"),
            ("Esc", "Focus main content"),
            ("", ""),
            ("Dashboard:", ""),
            ("/ or i", "Search by title or ID"),
            ("Esc / Enter", "Leave search"),
            ("← → / h l", "Previous / next page"),
            ("g / G", "First / last page"),
            ("1-9", "Jump to page"),
            ("L", "Logout"),
        ];

        let mut lines = vec![
            Line::raw(""),
            Line::from(Span::styled(" Keybindings", theme::heading())),
            Line::raw(""),
        ];

        for (key, desc) in &keybindings {
            if key.is_empty() {
                lines.push(Line::raw(""));
            } else if desc.is_empty() {
                lines.push(Line::from(Span::styled(format!("  {key}"), theme::heading())));
            } else {
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(
                        format!("{:<16}", key),
                        Style::default().fg(theme::PRIMARY_LIGHT).bold(),
                    ),
                    Span::raw(*desc),
                ]));
            }
        }

        lines.push(Line::raw(""));
        lines.push(Line::from(vec![
            Span::raw("  Press "),
            Span::styled("?", Style::default().fg(theme::PRIMARY_LIGHT).bold()),
            Span::raw(" or "),
            Span::styled("Esc", Style::default().fg(theme::PRIMARY_LIGHT).bold()),
            Span::raw(" to close"),
        ]));

        let block = Block::default()
            .title(" Help ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(theme::border_focused());

        frame.render_widget(Clear, modal);
        frame.render_widget(Paragraph::new(lines).block(block), modal);
    }
}

/// Calculate a centered rect using percentage of parent area.
pub(super) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(area);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}
