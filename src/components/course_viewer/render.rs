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

//! UI rendering logic for the course detail view.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Padding, Paragraph, Wrap},
};

use crate::{
    components::CourseViewer,
    render::{Render, icons::{ICON_HIGHLIGHT, ICON_NOTES, ICON_WATCHED}},
    theme::Theme,
    util::format::format_percent,
};

impl Render for CourseViewer {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        let course = &self.course;
        let header = Paragraph::new(vec![
            Line::from(course.title.as_str()).bold().fg(theme.text_fg),
            Line::from(course.description.as_str()).fg(theme.muted_fg),
            Line::from(format!(
                "{} \u{2022} {} \u{2022} {} lessons \u{2022} {}",
                course.instructor,
                course.duration,
                course.lessons,
                course.difficulty.label()
            ))
            .fg(theme.muted_fg),
        ])
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(theme.border_colour))
                .padding(Padding::horizontal(1)),
        );
        f.render_widget(header, chunks[0]);

        let total = course.videos.len();
        let completed = self.completed();
        let percent = if total == 0 { 0.0 } else { completed as f64 / total as f64 * 100.0 };

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(theme.accent_colour).bg(theme.gauge_track_colour))
            .ratio((percent / 100.0).clamp(0.0, 1.0))
            .label(format!("{} of {} completed ({})", completed, total, format_percent(percent)))
            .use_unicode(true);
        f.render_widget(gauge, chunks[1]);

        let items: Vec<ListItem> = course
            .videos
            .iter()
            .map(|video| {
                let mark = if video.watched {
                    Span::styled(format!("{} ", ICON_WATCHED), Style::default().fg(theme.watched_fg))
                } else {
                    Span::styled(format!("{} ", video.position), Style::default().fg(theme.muted_fg))
                };
                let mut line = vec![
                    mark,
                    Span::styled(video.title.as_str(), Style::default().fg(theme.text_fg)),
                    Span::styled(
                        format!("  {}", video.duration.as_deref().unwrap_or_default()),
                        Style::default().fg(theme.muted_fg),
                    ),
                ];
                if video.has_notes() {
                    line.push(Span::styled(format!("  {}", ICON_NOTES), Style::default().fg(theme.notes_fg)));
                }
                ListItem::new(Line::from(line))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .padding(Padding::horizontal(1))
                    .title_bottom(Line::from(" Enter: focus mode \u{2022} Esc: back ").fg(theme.muted_fg)),
            )
            .highlight_style(Style::default().bg(theme.highlight_bg))
            .highlight_symbol(ICON_HIGHLIGHT);

        f.render_stateful_widget(list, chunks[2], &mut self.list_state);
    }
}
