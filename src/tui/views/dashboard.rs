//! Dashboard: searchable, paginated table of posts.
//!
//! Each mounted `DashboardState` fetches the record list exactly once. The
//! result comes back to the app loop as `AppEvent::RecordsLoaded`, tagged
//! with the mount id of the instance that started it. The app hands it back
//! only while that same instance is on screen.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};
use tokio::sync::mpsc;

use super::super::events::{AppEvent, FetchResult};
use super::super::theme;
use super::super::widgets::input_buffer::InputBuffer;
use crate::core::browser::{derive, BrowserState, ListView, Phase};
use crate::tui::services::Services;

/// Placeholder shown in the empty search box.
pub const SEARCH_PLACEHOLDER: &str = "Search by title or ID";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardInputMode {
    Normal,
    Search,
}

/// What the app should do after dashboard input was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardResult {
    Consumed,
    Logout,
}

pub struct DashboardState {
    mount_id: u64,
    browser: BrowserState,
    search: InputBuffer,
    input_mode: DashboardInputMode,
}

impl DashboardState {
    pub fn new(mount_id: u64) -> Self {
        Self {
            mount_id,
            browser: BrowserState::new(),
            search: InputBuffer::new(),
            input_mode: DashboardInputMode::Normal,
        }
    }

    pub fn mount_id(&self) -> u64 {
        self.mount_id
    }

    pub fn browser(&self) -> &BrowserState {
        &self.browser
    }

    pub fn input_mode(&self) -> DashboardInputMode {
        self.input_mode
    }

    /// Fresh derivation of the visible page.
    pub fn view(&self) -> ListView<'_> {
        derive(&self.browser)
    }

    /// Start the one fetch this mount performs. Calling it again is a no-op.
    pub fn mount(&mut self, services: &Services, events: &mpsc::UnboundedSender<AppEvent>) {
        if self.browser.phase() != Phase::Idle {
            return;
        }
        self.browser = std::mem::take(&mut self.browser).begin_fetch();

        let tx = events.clone();
        let mount = self.mount_id;
        let source = services.source.clone();
        tokio::spawn(async move {
            let result = source.fetch_all().await;
            if tx.send(AppEvent::RecordsLoaded { mount, result }).is_err() {
                log::debug!("Event loop gone before fetch completed, result dropped");
            }
        });
    }

    /// Apply the result of this instance's fetch.
    pub fn apply_fetch(&mut self, result: FetchResult) {
        let browser = std::mem::take(&mut self.browser);
        self.browser = match result {
            Ok(records) => browser.fetch_succeeded(records),
            Err(e) => {
                log::warn!("Record fetch failed: {}", e);
                browser.fetch_failed()
            }
        };
    }

    fn sync_query(&mut self) {
        self.browser = std::mem::take(&mut self.browser).with_query(self.search.text());
    }

    /// Select page `n` if a button for it is on screen.
    pub fn set_page(&mut self, n: usize) -> bool {
        if !self.browser.is_selectable_page(n) {
            return false;
        }
        self.browser = std::mem::take(&mut self.browser).with_page(n);
        true
    }

    /// Returns `None` for input left to the app's global keys.
    pub fn handle_input(&mut self, event: &Event) -> Option<DashboardResult> {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return None;
        };

        match self.input_mode {
            DashboardInputMode::Search => self.handle_search_key(*modifiers, *code),
            DashboardInputMode::Normal => self.handle_normal_key(*modifiers, *code),
        }
    }

    fn handle_search_key(
        &mut self,
        modifiers: KeyModifiers,
        code: KeyCode,
    ) -> Option<DashboardResult> {
        match (modifiers, code) {
            (_, KeyCode::Esc) | (_, KeyCode::Enter) => {
                self.input_mode = DashboardInputMode::Normal;
            }
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
                self.search.insert_char(c);
                self.sync_query();
            }
            (_, KeyCode::Backspace) => {
                self.search.backspace();
                self.sync_query();
            }
            (_, KeyCode::Delete) => {
                self.search.delete();
                self.sync_query();
            }
            (_, KeyCode::Left) => self.search.move_left(),
            (_, KeyCode::Right) => self.search.move_right(),
            (_, KeyCode::Home) => self.search.move_home(),
            (_, KeyCode::End) => self.search.move_end(),
            // Ctrl+C and friends still reach the global handler
            (KeyModifiers::CONTROL, _) => return None,
            _ => {}
        }
        Some(DashboardResult::Consumed)
    }

    fn handle_normal_key(
        &mut self,
        modifiers: KeyModifiers,
        code: KeyCode,
    ) -> Option<DashboardResult> {
        match (modifiers, code) {
            (KeyModifiers::NONE, KeyCode::Char('/') | KeyCode::Char('i')) => {
                self.input_mode = DashboardInputMode::Search;
            }
            (KeyModifiers::NONE, KeyCode::Left | KeyCode::Char('h')) => {
                let page = self.browser.page();
                if page > 1 {
                    self.set_page(page - 1);
                }
            }
            (KeyModifiers::NONE, KeyCode::Right | KeyCode::Char('l')) => {
                self.set_page(self.browser.page() + 1);
            }
            (KeyModifiers::NONE, KeyCode::Char('g')) => {
                self.set_page(1);
            }
            (KeyModifiers::SHIFT, KeyCode::Char('G')) | (KeyModifiers::NONE, KeyCode::End) => {
                let last = self.view().total_pages;
                self.set_page(last);
            }
            (KeyModifiers::NONE, KeyCode::Char(c @ '1'..='9')) => {
                let n = c.to_digit(10).unwrap_or(0) as usize;
                self.set_page(n);
            }
            (KeyModifiers::SHIFT, KeyCode::Char('L')) => return Some(DashboardResult::Logout),
            _ => return None,
        }
        Some(DashboardResult::Consumed)
    }

    // ── Rendering ───────────────────────────────────────────────────────

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let view = self.view();

        let chunks = Layout::vertical([
            Constraint::Length(1), // heading
            Constraint::Length(3), // search
            Constraint::Length(1), // loading / error
            Constraint::Min(3),    // table
            Constraint::Length(1), // page buttons
        ])
        .split(area);

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(" Posts", theme::heading()),
                Span::styled(
                    format!("  {} matching", view.filtered_count),
                    theme::muted(),
                ),
            ])),
            chunks[0],
        );

        self.render_search(frame, chunks[1]);
        self.render_status_line(frame, chunks[2], &view);
        if view.show_table {
            self.render_table(frame, chunks[3], &view);
        }
        self.render_page_buttons(frame, chunks[4], &view);
    }

    fn render_search(&self, frame: &mut Frame, area: Rect) {
        let searching = self.input_mode == DashboardInputMode::Search;
        let block = if searching {
            theme::block_focused("Search")
        } else {
            theme::block_default("Search [/]")
        };

        let content = if self.search.text().is_empty() && !searching {
            Span::styled(SEARCH_PLACEHOLDER, theme::dim())
        } else {
            Span::styled(self.search.text(), Style::default().fg(theme::TEXT))
        };
        frame.render_widget(Paragraph::new(Line::from(content)).block(block), area);

        if searching {
            let x = area.x + 1 + self.search.cursor_column() as u16;
            if x < area.x + area.width.saturating_sub(1) {
                frame.set_cursor_position(Position::new(x, area.y + 1));
            }
        }
    }

    fn render_status_line(&self, frame: &mut Frame, area: Rect, view: &ListView<'_>) {
        let line = if view.loading {
            Line::from(Span::styled(" Loading...", theme::muted()))
        } else if let Some(message) = view.error_message {
            Line::from(Span::styled(format!(" {message}"), theme::error()))
        } else if view.page_out_of_range() {
            Line::from(Span::styled(
                format!(
                    " Page {} is past the last page ({}); pick a page below",
                    view.current_page, view.total_pages
                ),
                theme::dim(),
            ))
        } else {
            Line::raw("")
        };
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_table(&self, frame: &mut Frame, area: Rect, view: &ListView<'_>) {
        let header = Row::new(vec![
            Cell::from("ID"),
            Cell::from("Title"),
            Cell::from("Body"),
        ])
        .style(theme::table_header());

        let rows: Vec<Row> = view
            .rows
            .iter()
            .map(|record| {
                Row::new(vec![
                    Cell::from(record.id.to_string()),
                    Cell::from(single_line(&record.title)),
                    Cell::from(single_line(&record.body)),
                ])
                .style(Style::default().fg(theme::TEXT))
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(5),
                Constraint::Percentage(35),
                Constraint::Fill(1),
            ],
        )
        .header(header)
        .column_spacing(2)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::border_default()),
        );

        frame.render_widget(table, area);
    }

    fn render_page_buttons(&self, frame: &mut Frame, area: Rect, view: &ListView<'_>) {
        let mut spans = Vec::with_capacity(view.page_buttons.len() * 2);
        for button in &view.page_buttons {
            let style = if button.active {
                theme::button_active()
            } else {
                theme::button_outline()
            };
            spans.push(Span::styled(format!(" {} ", button.number), style));
            spans.push(Span::raw(" "));
        }
        frame.render_widget(
            Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
            area,
        );
    }
}

/// Bodies from the reference source contain newlines; a table cell shows one line.
fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
