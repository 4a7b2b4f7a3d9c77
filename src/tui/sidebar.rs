//! Collapsible left sidebar with the dashboard's navigation links.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::events::{AreaFocus, NavLink};
use super::layout::SidebarVisibility;
use super::theme;

/// Sidebar navigation state.
pub struct SidebarState {
    /// Whether the user has toggled collapse (Ctrl+B).
    pub user_collapsed: bool,
    /// Currently highlighted item index (into NavLink::ALL).
    pub selected: usize,
}

impl Default for SidebarState {
    fn default() -> Self {
        Self::new()
    }
}

impl SidebarState {
    pub fn new() -> Self {
        Self {
            user_collapsed: false,
            selected: 0,
        }
    }

    pub fn toggle_collapse(&mut self) {
        self.user_collapsed = !self.user_collapsed;
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % NavLink::ALL.len();
    }

    pub fn select_prev(&mut self) {
        self.selected = (self.selected + NavLink::ALL.len() - 1) % NavLink::ALL.len();
    }

    pub fn selected_link(&self) -> NavLink {
        NavLink::ALL[self.selected]
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        visibility: SidebarVisibility,
        area_focus: AreaFocus,
    ) {
        let sidebar_focused = area_focus == AreaFocus::Sidebar;
        let mut lines: Vec<Line> = Vec::new();

        if visibility == SidebarVisibility::Expanded {
            lines.push(Line::raw(""));
        }

        for (idx, link) in NavLink::ALL.into_iter().enumerate() {
            if lines.len() >= area.height as usize {
                break;
            }

            let is_current = link == NavLink::Dashboard;
            let is_selected = sidebar_focused && idx == self.selected;

            let style = if is_selected {
                Style::default()
                    .fg(theme::TEXT)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else if is_current {
                Style::default()
                    .fg(theme::PRIMARY_LIGHT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme::TEXT_MUTED)
            };

            let text = match visibility {
                SidebarVisibility::Hidden => continue,
                SidebarVisibility::Collapsed => format!(" {}", link.icon()),
                SidebarVisibility::Expanded => {
                    let prefix = if is_selected { "▸ " } else { "  " };
                    let label = format!("{prefix}{} {}", link.icon(), link.label());
                    format!("{:<width$}", label, width = area.width as usize)
                }
            };
            lines.push(Line::from(Span::styled(text, style)));
        }

        frame.render_widget(
            Paragraph::new(lines).style(Style::default().bg(theme::BG_SURFACE)),
            area,
        );
    }
}
