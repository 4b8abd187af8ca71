// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Sign-in screen.
//!
//! Accepts a display name and hands a mock user to the router. There is no
//! credential check.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{
    actions::events::{AppEvent, AppEventProcessor},
    model::User,
    render::Render,
    router::Page,
    theme::Theme,
};

#[derive(Debug, Default)]
pub(crate) struct LoginView {
    input: Input,
    error: Option<String>,
}

impl LoginView {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reset(&mut self) {
        self.input.reset();
        self.error = None;
    }
}

impl AppEventProcessor for LoginView {
    fn process_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> Result<bool> {
        let Event::Key(key_event) = event else {
            return Ok(false);
        };

        match key_event.code {
            KeyCode::Esc => event_tx.send(AppEvent::Navigate(Page::Home))?,
            KeyCode::Enter => {
                let name = self.input.value().trim();
                if name.is_empty() {
                    self.error = Some("Please enter your name".to_string());
                } else {
                    event_tx.send(AppEvent::LoggedIn(User::mock(name)))?;
                }
            }
            _ => {
                self.input.handle_event(event);
            }
        }

        Ok(true)
    }
}

impl Render for LoginView {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(3), Constraint::Length(1), Constraint::Min(0)])
            .horizontal_margin(2)
            .split(area);

        f.render_widget(
            Paragraph::new(vec![
                Line::from("Welcome back").bold().fg(theme.text_fg),
                Line::from("Sign in to continue your learning journey").fg(theme.muted_fg),
            ]),
            chunks[0],
        );

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent_colour))
            .title(" Name ");
        let inner = block.inner(chunks[1]);
        f.render_widget(Paragraph::new(self.input.value()).fg(theme.text_fg).block(block), chunks[1]);
        f.set_cursor_position((inner.x + self.input.visual_cursor() as u16, inner.y));

        let status = match &self.error {
            Some(error) => Line::from(error.as_str()).fg(theme.error_colour),
            None => Line::from("Enter: sign in \u{2022} Esc: back to home").fg(theme.muted_fg),
        };
        f.render_widget(Paragraph::new(status), chunks[2]);
    }
}
