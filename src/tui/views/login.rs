//! Login screen: email + password form in front of the session gate.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::super::app::centered_rect;
use super::super::events::Route;
use super::super::theme;
use super::super::widgets::input_buffer::InputBuffer;
use crate::core::session::LoginOutcome;
use crate::tui::services::Services;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
}

impl LoginField {
    fn toggle(self) -> Self {
        match self {
            LoginField::Email => LoginField::Password,
            LoginField::Password => LoginField::Email,
        }
    }
}

/// What the app should do after login input was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginResult {
    Consumed,
    Navigate(Route),
}

pub struct LoginState {
    email: InputBuffer,
    password: InputBuffer,
    field: LoginField,
    error: Option<String>,
}

impl Default for LoginState {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginState {
    pub fn new() -> Self {
        Self {
            email: InputBuffer::new(),
            password: InputBuffer::new(),
            field: LoginField::Email,
            error: None,
        }
    }

    pub fn field(&self) -> LoginField {
        self.field
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn email(&self) -> &str {
        self.email.text()
    }

    fn focused_mut(&mut self) -> &mut InputBuffer {
        match self.field {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        }
    }

    /// Run the form through the gate. The inline error is replaced on every
    /// attempt and cleared on success.
    pub fn submit(&mut self, services: &Services) -> LoginResult {
        match services
            .gate
            .submit_credentials(self.email.text(), self.password.text())
        {
            Ok(LoginOutcome::Accepted(_)) => {
                self.error = None;
                LoginResult::Navigate(Route::Dashboard)
            }
            Ok(LoginOutcome::Rejected(rejection)) => {
                self.error = Some(rejection.to_string());
                LoginResult::Consumed
            }
            Err(e) => {
                log::error!("Login could not be completed: {}", e);
                self.error = Some(e.to_string());
                LoginResult::Consumed
            }
        }
    }

    /// Returns `None` for input the form does not use (left to global keys).
    pub fn handle_input(&mut self, event: &Event, services: &Services) -> Option<LoginResult> {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return None;
        };

        match (*modifiers, *code) {
            (_, KeyCode::Enter) => Some(self.submit(services)),
            (_, KeyCode::Tab) | (_, KeyCode::BackTab) | (_, KeyCode::Up) | (_, KeyCode::Down) => {
                self.field = self.field.toggle();
                Some(LoginResult::Consumed)
            }
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
                self.focused_mut().insert_char(c);
                Some(LoginResult::Consumed)
            }
            (_, KeyCode::Backspace) => {
                self.focused_mut().backspace();
                Some(LoginResult::Consumed)
            }
            (_, KeyCode::Delete) => {
                self.focused_mut().delete();
                Some(LoginResult::Consumed)
            }
            (_, KeyCode::Left) => {
                self.focused_mut().move_left();
                Some(LoginResult::Consumed)
            }
            (_, KeyCode::Right) => {
                self.focused_mut().move_right();
                Some(LoginResult::Consumed)
            }
            (_, KeyCode::Home) => {
                self.focused_mut().move_home();
                Some(LoginResult::Consumed)
            }
            (_, KeyCode::End) => {
                self.focused_mut().move_end();
                Some(LoginResult::Consumed)
            }
            _ => None,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let card = centered_rect(50, 60, area);
        let block = Block::default()
            .title(Span::styled(" Login ", theme::heading()))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(theme::border_focused());
        let inner = block.inner(card);
        frame.render_widget(Clear, card);
        frame.render_widget(block, card);

        let rows = Layout::vertical([
            Constraint::Length(1), // spacer
            Constraint::Length(1), // error
            Constraint::Length(3), // email
            Constraint::Length(3), // password
            Constraint::Length(1), // button
            Constraint::Min(0),
            Constraint::Length(1), // hints
        ])
        .split(inner);

        if let Some(ref error) = self.error {
            frame.render_widget(
                Paragraph::new(Span::styled(format!(" {error}"), theme::error())),
                rows[1],
            );
        }

        let email_text = if self.email.text().is_empty() {
            Span::styled("Email", theme::dim())
        } else {
            Span::raw(self.email.text())
        };
        self.render_field(frame, rows[2], "Email", email_text, LoginField::Email);

        let password_text = if self.password.text().is_empty() {
            Span::styled("Password", theme::dim())
        } else {
            Span::raw(self.password.masked())
        };
        self.render_field(frame, rows[3], "Password", password_text, LoginField::Password);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled("  Login  ", theme::button_active())))
                .alignment(Alignment::Center),
            rows[4],
        );

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("Tab", theme::key_hint()),
                Span::styled(":field  ", theme::muted()),
                Span::styled("Enter", theme::key_hint()),
                Span::styled(":login  ", theme::muted()),
                Span::styled("Ctrl+C", theme::key_hint()),
                Span::styled(":quit", theme::muted()),
            ]))
            .alignment(Alignment::Center),
            rows[6],
        );

        let (buffer, row) = match self.field {
            LoginField::Email => (&self.email, rows[2]),
            LoginField::Password => (&self.password, rows[3]),
        };
        let x = row.x + 1 + buffer.cursor_column() as u16;
        if x < row.x + row.width.saturating_sub(1) {
            frame.set_cursor_position(Position::new(x, row.y + 1));
        }
    }

    fn render_field(
        &self,
        frame: &mut Frame,
        area: Rect,
        title: &str,
        content: Span<'_>,
        field: LoginField,
    ) {
        let block = if self.field == field {
            theme::block_focused(title)
        } else {
            theme::block_default(title)
        };
        frame.render_widget(
            Paragraph::new(Line::from(content))
                .style(Style::default().fg(theme::TEXT))
                .block(block),
            area,
        );
    }
}
