//! Root layout computation: header bar, sidebar + main content, status bar.

use ratatui::layout::{Constraint, Layout, Rect};

/// Height of the dashboard header bar.
pub const HEADER_HEIGHT: u16 = 3;
/// Width of the expanded sidebar (icon + label).
pub const SIDEBAR_EXPANDED_WIDTH: u16 = 18;
/// Width of the collapsed sidebar (single-char icons).
pub const SIDEBAR_COLLAPSED_WIDTH: u16 = 3;
/// Auto-collapse sidebar below this terminal width.
pub const AUTO_COLLAPSE_THRESHOLD: u16 = 60;
/// Hide sidebar entirely below this terminal width.
pub const HIDE_SIDEBAR_THRESHOLD: u16 = 20;

/// Computed layout regions for a single frame.
pub struct AppLayout {
    /// Header bar (None on the login screen).
    pub header: Option<Rect>,
    /// Sidebar area (None if hidden).
    pub sidebar: Option<Rect>,
    /// Main content area.
    pub main: Rect,
    /// Status bar (bottom row).
    pub status: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarVisibility {
    Expanded,
    Collapsed,
    Hidden,
}

impl AppLayout {
    /// Dashboard layout: header on top, sidebar left of main, status at the bottom.
    ///
    /// `user_collapsed`: user has toggled collapse with Ctrl+B.
    pub fn compute(area: Rect, user_collapsed: bool) -> (Self, SidebarVisibility) {
        let visibility = if area.width < HIDE_SIDEBAR_THRESHOLD {
            SidebarVisibility::Hidden
        } else if user_collapsed || area.width < AUTO_COLLAPSE_THRESHOLD {
            SidebarVisibility::Collapsed
        } else {
            SidebarVisibility::Expanded
        };

        let rows = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

        let header = rows[0];
        let content_area = rows[1];
        let status = rows[2];

        let sidebar_width = match visibility {
            SidebarVisibility::Hidden => None,
            SidebarVisibility::Collapsed => Some(SIDEBAR_COLLAPSED_WIDTH),
            SidebarVisibility::Expanded => Some(SIDEBAR_EXPANDED_WIDTH),
        };

        let (sidebar, main) = match sidebar_width {
            None => (None, content_area),
            Some(width) => {
                let cols = Layout::horizontal([Constraint::Length(width), Constraint::Min(1)])
                    .split(content_area);
                (Some(cols[0]), cols[1])
            }
        };

        (
            AppLayout {
                header: Some(header),
                sidebar,
                main,
                status,
            },
            visibility,
        )
    }

    /// Login layout: the whole screen except the status bar.
    pub fn bare(area: Rect) -> Self {
        let rows = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(area);
        AppLayout {
            header: None,
            sidebar: None,
            main: rows[0],
            status: rows[1],
        }
    }
}
