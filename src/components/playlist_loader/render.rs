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

//! UI rendering logic for the playlist URL entry.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{
    components::{PlaylistLoaderView, playlist_loader::EXAMPLE_URLS},
    render::Render,
    theme::Theme,
};

impl Render for PlaylistLoaderView {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(2),
                Constraint::Min(0),
            ])
            .horizontal_margin(2)
            .split(area);

        f.render_widget(
            Paragraph::new(vec![
                Line::from("Load Your Playlist").bold().fg(theme.text_fg),
                Line::from("Paste a YouTube playlist URL to start learning distraction-free")
                    .fg(theme.muted_fg),
            ]),
            chunks[0],
        );

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent_colour))
            .title(" YouTube Playlist URL ");
        let inner = block.inner(chunks[1]);

        let width = inner.width.max(1) as usize;
        let scroll = self.input.visual_scroll(width);
        f.render_widget(
            Paragraph::new(self.input.value())
                .fg(theme.text_fg)
                .scroll((0, scroll as u16))
                .block(block),
            chunks[1],
        );

        if !self.loading {
            let x = self.input.visual_cursor().saturating_sub(scroll) as u16;
            f.set_cursor_position((inner.x + x, inner.y));
        }

        let status = if self.loading {
            Line::from("Loading Playlist...").fg(theme.accent_colour)
        } else if let Some(error) = &self.error {
            Line::from(error.as_str()).fg(theme.error_colour)
        } else {
            Line::from("Enter: load playlist \u{2022} Esc: back to home").fg(theme.muted_fg)
        };
        f.render_widget(Paragraph::new(status), chunks[2]);

        let mut examples = vec![Line::from("Example URLs:").fg(theme.text_fg)];
        examples.extend(
            EXAMPLE_URLS
                .iter()
                .map(|url| Line::from(format!("\u{2022} {}", url)).fg(theme.muted_fg)),
        );
        f.render_widget(
            Paragraph::new(examples).block(Block::default().padding(Padding::vertical(1))),
            chunks[3],
        );
    }
}
