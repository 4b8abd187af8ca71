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

//! UI rendering logic for the player view.
//!
//! The screen is split into a main column (title bar, video details and
//! controls, progress, notes) and an optional playlist sidebar.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Padding, Paragraph, Wrap},
};

use crate::{
    components::PlayerView,
    render::{
        Render,
        icons::{ICON_HIGHLIGHT, ICON_NEXT, ICON_NOTES, ICON_PLAY, ICON_PREV, ICON_WATCHED},
    },
    theme::Theme,
    util::format::{embed_url, format_char_count, format_percent, format_progress},
};

const SIDEBAR_WIDTH: u16 = 40;

impl Render for PlayerView {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let columns = if self.show_playlist {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Min(0), Constraint::Length(SIDEBAR_WIDTH)])
                .split(area)
        } else {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Min(0)])
                .split(area)
        };

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(7),
                Constraint::Length(4),
                Constraint::Length(5),
            ])
            .split(columns[0]);

        self.draw_title_bar(f, rows[0], theme);
        self.draw_details(f, rows[1], theme);
        self.draw_progress(f, rows[2], theme);
        self.draw_notes(f, rows[3], theme);

        if self.show_playlist {
            self.draw_sidebar(f, columns[1], theme);
        }
    }
}

impl PlayerView {
    fn draw_title_bar(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border_colour))
            .padding(Padding::horizontal(1));

        let autoplay = if self.autoplay { "Auto-play ON" } else { "Auto-play OFF" };

        let lines = vec![
            Line::from(vec![
                Span::styled(self.session.title(), Style::default().add_modifier(Modifier::BOLD))
                    .fg(theme.text_fg),
                Span::raw("  "),
                Span::styled(format!("[{}]", autoplay), Style::default().fg(theme.accent_colour)),
            ]),
            Line::from(format!(
                "Video {} of {}",
                self.session.current_index() + 1,
                self.session.len()
            ))
            .fg(theme.muted_fg),
        ];

        f.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn draw_details(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let video = self.session.current();

        let mut meta = vec![
            Span::raw(video.duration.clone().unwrap_or_default()),
            Span::raw(" \u{2022} "),
            Span::raw(format!("Position {}", video.position)),
        ];
        if video.watched {
            meta.push(Span::raw(" \u{2022} "));
            meta.push(Span::styled(format!("{} Watched", ICON_WATCHED), Style::default().fg(theme.watched_fg)));
        }

        let embed = match &video.media_ref {
            Some(media_ref) => embed_url(media_ref, self.autoplay),
            None => "No embeddable media".to_string(),
        };

        let prev_style = if self.session.is_first() { theme.border_colour } else { theme.text_fg };
        let next_style = if self.session.is_last() { theme.border_colour } else { theme.text_fg };
        let watched_label = if video.watched { "Watched" } else { "Mark Watched (w)" };

        let lines = vec![
            Line::from(Span::styled(
                format!("{} {}", ICON_PLAY, video.title),
                Style::default().add_modifier(Modifier::BOLD).fg(theme.text_fg),
            )),
            Line::from(video.description.as_str()).fg(theme.muted_fg),
            Line::from(meta).fg(theme.muted_fg),
            Line::from(""),
            Line::from(embed).fg(theme.accent_colour),
            Line::from(""),
            Line::from(vec![
                Span::styled(format!("{} prev (p)", ICON_PREV), Style::default().fg(prev_style)),
                Span::raw("   "),
                Span::styled(
                    watched_label,
                    Style::default().fg(if video.watched { theme.watched_fg } else { theme.text_fg }),
                ),
                Span::raw("   "),
                Span::styled(format!("next (n) {}", ICON_NEXT), Style::default().fg(next_style)),
            ]),
        ];

        let block = Block::default().padding(Padding::horizontal(1));
        f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }).block(block), area);
    }

    fn draw_progress(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let progress = self.session.progress();

        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(theme.border_colour))
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(inner);

        let labels = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(5)])
            .split(rows[0]);

        f.render_widget(Paragraph::new(format_progress(&progress)).fg(theme.muted_fg), labels[0]);
        f.render_widget(
            Paragraph::new(format_percent(progress.percent))
                .alignment(ratatui::layout::Alignment::Right)
                .fg(theme.muted_fg),
            labels[1],
        );

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(theme.accent_colour).bg(theme.gauge_track_colour))
            .ratio(progress.ratio().clamp(0.0, 1.0))
            .label("")
            .use_unicode(true);
        f.render_widget(gauge, rows[1]);
    }

    fn draw_notes(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let border = if self.notes.focused() { theme.accent_colour } else { theme.border_colour };

        let title = Line::from(vec![
            Span::raw(" Your Notes "),
            Span::styled(
                format!("({}) ", format_char_count(self.notes.value())),
                Style::default().fg(theme.muted_fg),
            ),
        ]);

        let hint = if self.notes.focused() { " Esc to finish " } else { " Tab to edit " };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(title)
            .title_bottom(Line::from(hint).fg(theme.muted_fg));
        let inner = block.inner(area);

        let width = inner.width.max(1) as usize;
        let scroll = self.notes.visual_scroll(width);

        let text = if self.notes.value().is_empty() && !self.notes.focused() {
            Paragraph::new("Take notes while watching this video...").fg(theme.muted_fg)
        } else {
            Paragraph::new(self.notes.value())
                .fg(theme.text_fg)
                .scroll((0, scroll as u16))
        };

        f.render_widget(text.block(block), area);

        if self.notes.focused() {
            let x = self.notes.visual_cursor().saturating_sub(scroll) as u16;
            f.set_cursor_position((inner.x + x, inner.y));
        }
    }

    fn draw_sidebar(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let current = self.session.current_index();

        let items: Vec<ListItem> = self
            .session
            .videos()
            .iter()
            .enumerate()
            .map(|(index, video)| {
                let marker = if video.watched {
                    Span::styled(format!(" {} ", ICON_WATCHED), Style::default().fg(theme.watched_fg))
                } else {
                    Span::styled(format!("{:>2} ", index + 1), Style::default().fg(theme.muted_fg))
                };

                let title_style = if index == current {
                    Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.text_fg)
                };

                let mut detail = vec![
                    Span::raw("   "),
                    Span::styled(
                        video.duration.clone().unwrap_or_default(),
                        Style::default().fg(theme.muted_fg),
                    ),
                ];
                if video.has_notes() {
                    detail.push(Span::styled(
                        format!("  {} Has notes", ICON_NOTES),
                        Style::default().fg(theme.notes_fg),
                    ));
                }

                ListItem::new(vec![
                    Line::from(vec![marker, Span::styled(video.title.as_str(), title_style)]),
                    Line::from(detail),
                ])
            })
            .collect();

        let title = format!(" Playlist \u{2022} {} videos ", self.session.len());
        let block = Block::default()
            .borders(Borders::LEFT)
            .border_style(Style::default().fg(theme.border_colour))
            .title(title);

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(theme.highlight_bg))
            .highlight_symbol(ICON_HIGHLIGHT);

        f.render_stateful_widget(list, area, &mut self.sidebar_state);
    }
}
