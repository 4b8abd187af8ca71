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

//! Render the navigation header.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{App, router::Page};

const NAV_PAGES: [(char, Page); 5] = [
    ('1', Page::Home),
    ('2', Page::Courses),
    ('3', Page::Dashboard),
    ('4', Page::Playlist),
    ('5', Page::Profile),
];

pub(crate) fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let current = app.router.page();

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(theme.border_colour))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(32)])
        .split(inner);

    let mut spans = vec![Span::styled(
        "lectio  ",
        Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD),
    )];
    for (key, page) in NAV_PAGES {
        let style = if page == current {
            Style::default().fg(theme.text_fg).add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(theme.muted_fg)
        };
        spans.push(Span::styled(format!("{} {}", key, page.label()), style));
        spans.push(Span::raw("  "));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), chunks[0]);

    let account = match app.router.user() {
        Some(user) => format!("{} \u{2022} l: sign out", user.name),
        None => "l: sign in".to_string(),
    };
    f.render_widget(
        Paragraph::new(account)
            .style(Style::default().fg(theme.muted_fg))
            .alignment(Alignment::Right),
        chunks[1],
    );
}
