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

//! UI rendering logic for the profile page.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};
use tui_input::Input;

use crate::{
    components::profile::{Field, ProfileView},
    model::{LearnerStats, User},
    theme::Theme,
};

impl ProfileView {
    pub(crate) fn draw(
        &mut self,
        f: &mut Frame,
        area: Rect,
        user: &User,
        stats: &LearnerStats,
        theme: &Theme,
    ) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(30)])
            .split(area);

        if self.editing {
            self.draw_form(f, columns[0], theme);
        } else {
            self.draw_details(f, columns[0], user, theme);
        }

        draw_stats(f, columns[1], user, stats, theme);
    }

    fn draw_details(&self, f: &mut Frame, area: Rect, user: &User, theme: &Theme) {
        let mut lines = vec![
            field("Name", &user.name, theme),
            field("Email", &user.email, theme),
            field("Member id", &user.id, theme),
            field("Plan", user.plan.label(), theme),
            Line::from(""),
            Line::from("e: edit profile \u{2022} u: upgrade plan \u{2022} Esc: dashboard")
                .fg(theme.muted_fg),
        ];
        if let Some(error) = &self.error {
            lines.push(Line::from(error.as_str()).fg(theme.error_colour));
        }

        f.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .title(" Profile Settings ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.border_colour))
                    .padding(Padding::uniform(1)),
            ),
            area,
        );
    }

    fn draw_form(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        let name = draw_input(f, chunks[0], " Name ", &self.name, self.field == Field::Name, theme);
        let email = draw_input(
            f,
            chunks[1],
            " Email ",
            &self.email,
            self.field == Field::Email,
            theme,
        );
        f.set_cursor_position(match self.field {
            Field::Name => name,
            Field::Email => email,
        });

        let status = match &self.error {
            Some(error) => Line::from(error.as_str()).fg(theme.error_colour),
            None => Line::from("Tab: switch field \u{2022} Enter: save \u{2022} Esc: cancel")
                .fg(theme.muted_fg),
        };
        f.render_widget(Paragraph::new(status), chunks[2]);
    }
}

/// Draws one form field, returning where its cursor sits.
fn draw_input(
    f: &mut Frame,
    area: Rect,
    title: &str,
    input: &Input,
    focused: bool,
    theme: &Theme,
) -> (u16, u16) {
    let border = if focused {
        theme.accent_colour
    } else {
        theme.border_colour
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(title);
    let inner = block.inner(area);

    let scroll = input.visual_scroll(inner.width.saturating_sub(1) as usize);
    f.render_widget(
        Paragraph::new(input.value())
            .fg(theme.text_fg)
            .scroll((0, scroll as u16))
            .block(block),
        area,
    );

    let cursor = input.visual_cursor().saturating_sub(scroll);
    (inner.x + cursor as u16, inner.y)
}

fn draw_stats(f: &mut Frame, area: Rect, user: &User, stats: &LearnerStats, theme: &Theme) {
    let lines = vec![
        Line::from(user.name.as_str()).bold().fg(theme.text_fg),
        Line::from(user.email.as_str()).fg(theme.muted_fg),
        Line::from(""),
        stat("Total Courses", stats.total_courses, theme),
        stat("Completed", stats.completed_courses, theme),
        stat("Hours Learned", stats.total_hours, theme),
        stat("Day Streak", stats.current_streak, theme),
        stat("Certificates", stats.certificates, theme),
    ];

    f.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title(" Stats ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border_colour))
                .padding(Padding::horizontal(1)),
        ),
        area,
    );
}

fn field<'a>(label: &'a str, value: &'a str, theme: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{:<12}", label), Style::default().fg(theme.muted_fg)),
        Span::styled(value, Style::default().fg(theme.text_fg)),
    ])
}

fn stat<'a>(label: &'a str, value: u32, theme: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{:<16}", label), Style::default().fg(theme.muted_fg)),
        Span::styled(value.to_string(), Style::default().fg(theme.text_fg).bold()),
    ])
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;

    fn render(view: &mut ProfileView, user: &User) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                view.draw(f, area, user, &LearnerStats::mock(), &Theme::default());
            })
            .unwrap();

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn details_show_plan_and_stats() {
        let user = User::mock("Ada");
        let text = render(&mut ProfileView::new(), &user);

        assert!(text.contains("ada@example.com"));
        assert!(text.contains("Free"));
        assert!(text.contains("Certificates"));
        assert!(text.contains("Hours Learned"));
    }

    #[test]
    fn form_replaces_details_while_editing() {
        let user = User::mock("Ada");
        let mut view = ProfileView::new();
        view.begin_edit(&user);

        let text = render(&mut view, &user);

        assert!(text.contains("Enter: save"));
        assert!(!text.contains("Member id"));
        assert!(text.contains("Certificates"));
    }
}
