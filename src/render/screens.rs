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

//! Render the static screens: home and dashboard.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::{App, model::LearnerStats, render::icons::ICON_STAR, theme::Theme};

pub(crate) fn draw_home(f: &mut Frame, area: Rect, theme: &Theme) {
    let lines = vec![
        Line::from("Learn without distractions").bold().fg(theme.text_fg),
        Line::from(""),
        Line::from("Browse curated courses, or load a YouTube playlist and watch it in a focused")
            .fg(theme.muted_fg),
        Line::from("player with per-video notes and progress tracking.").fg(theme.muted_fg),
        Line::from(""),
        hint("2", "browse courses", theme),
        hint("4", "load a playlist", theme),
        hint("l", "sign in", theme),
        hint(":", "command line", theme),
        hint("q", "quit", theme),
    ];

    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().padding(Padding::uniform(1))),
        area,
    );
}

pub(crate) fn draw_dashboard(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let Some(user) = app.router.user() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(4), Constraint::Min(0)])
        .split(area);

    f.render_widget(
        Paragraph::new(vec![
            Line::from(format!("Welcome back, {}!", user.name)).bold().fg(theme.text_fg),
            Line::from("Ready to continue your learning journey?").fg(theme.muted_fg),
        ])
        .block(Block::default().padding(Padding::horizontal(1))),
        chunks[0],
    );

    draw_stats_grid(f, chunks[1], &app.stats, theme);

    let mut lines = Vec::new();
    for course in app.courses_view.catalog().recommended() {
        lines.push(Line::from(vec![
            Span::styled(course.title.as_str(), Style::default().fg(theme.text_fg).bold()),
            Span::styled(
                format!("  {} {:.1} \u{2022} {}", ICON_STAR, course.rating, course.instructor),
                Style::default().fg(theme.muted_fg),
            ),
        ]));
        lines.push(Line::from(course.description.as_str()).fg(theme.muted_fg));
        lines.push(Line::from(""));
    }

    f.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(theme.border_colour))
                .title(" Recommended for you ")
                .padding(Padding::horizontal(1)),
        ),
        chunks[2],
    );
}

fn draw_stats_grid(f: &mut Frame, area: Rect, stats: &LearnerStats, theme: &Theme) {
    let cards = [
        ("Total Courses", stats.total_courses),
        ("Completed", stats.completed_courses),
        ("Hours Learned", stats.total_hours),
        ("Day Streak", stats.current_streak),
    ];

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for ((label, value), cell) in cards.into_iter().zip(cells.iter()) {
        f.render_widget(
            Paragraph::new(vec![
                Line::from(label).fg(theme.muted_fg),
                Line::from(value.to_string()).bold().fg(theme.text_fg),
            ])
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.border_colour))
                    .padding(Padding::horizontal(1)),
            ),
            *cell,
        );
    }
}

fn hint<'a>(key: &'a str, action: &'a str, theme: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{:>3}  ", key), Style::default().fg(theme.accent_colour)),
        Span::styled(action, Style::default().fg(theme.text_fg)),
    ])
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::{config::AppConfig, model::User};

    #[test]
    fn dashboard_shows_stats_grid() {
        let (command_tx, _command_rx) = mpsc::channel();
        let mut app = App::new(AppConfig::default(), command_tx);
        app.router.login(User::mock("Ada"));

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                draw_dashboard(f, area, &app);
            })
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("Welcome back, Ada!"));
        assert!(text.contains("Hours Learned"));
        assert!(text.contains("156"));
        assert!(text.contains("Day Streak"));
    }
}
