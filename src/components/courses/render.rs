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

//! UI rendering logic for the course browser.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
};

use crate::{
    components::CoursesView,
    render::{Render, icons::{ICON_HIGHLIGHT, ICON_STAR}},
    theme::Theme,
};

impl Render for CoursesView {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        let category = self.filter.category.map_or("All Categories", |c| c.label());
        let difficulty = self.filter.difficulty.map_or("all", |d| d.label());

        let header = Paragraph::new(vec![
            Line::from("Browse Courses").bold().fg(theme.text_fg),
            Line::from(vec![
                Span::raw("Category (c): "),
                Span::styled(category, Style::default().fg(theme.accent_colour)),
                Span::raw("   Difficulty (d): "),
                Span::styled(difficulty, Style::default().fg(theme.accent_colour)),
            ])
            .fg(theme.muted_fg),
        ])
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(theme.border_colour))
                .padding(Padding::horizontal(1)),
        );
        f.render_widget(header, chunks[0]);

        let courses = self.filter.apply(self.catalog.courses());
        if courses.is_empty() {
            f.render_widget(
                Paragraph::new("No courses match the selected filters")
                    .fg(theme.muted_fg)
                    .block(Block::default().padding(Padding::uniform(1))),
                chunks[1],
            );
            return;
        }

        let items: Vec<ListItem> = courses
            .iter()
            .map(|course| {
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(course.title.as_str(), Style::default().add_modifier(Modifier::BOLD).fg(theme.text_fg)),
                        Span::styled(
                            format!("  {} \u{2022} {}", course.category.label(), course.difficulty.label()),
                            Style::default().fg(theme.muted_fg),
                        ),
                    ]),
                    Line::from(course.description.as_str()).fg(theme.muted_fg),
                    Line::from(format!(
                        "{} \u{2022} {} \u{2022} {} lessons \u{2022} {} {:.1} \u{2022} {} students",
                        course.instructor, course.duration, course.lessons, ICON_STAR, course.rating, course.students
                    ))
                    .fg(theme.muted_fg),
                    Line::from(""),
                ])
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().padding(Padding::horizontal(1)))
            .highlight_style(Style::default().bg(theme.highlight_bg))
            .highlight_symbol(ICON_HIGHLIGHT);

        f.render_stateful_widget(list, chunks[1], &mut self.list_state);
    }
}
