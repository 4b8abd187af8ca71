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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every processed event to provide a reactive user interface.

mod commander;
mod header;
pub(crate) mod icons;
mod screens;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::{
    App,
    render::{commander::draw_commander, header::draw_header},
    router::Page,
    theme::Theme,
};

pub(crate) trait Render {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme);
}

/// Renders the user interface to the terminal frame.
///
/// The frame is split into a navigation header, the active page, and a
/// single-line command/status bar. The header is hidden on the sign-in page.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();
    let page = app.router.page();

    let header_height = if page == Page::Login { 0 } else { 2 };

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    if header_height > 0 {
        draw_header(f, outer[0], app);
    }

    let theme = app.theme;
    let main = outer[1];

    match page {
        Page::Home => screens::draw_home(f, main, &theme),
        Page::Login => app.login_view.draw(f, main, &theme),
        Page::Dashboard => screens::draw_dashboard(f, main, app),
        Page::Courses => app.courses_view.draw(f, main, &theme),
        Page::Course => {
            if let Some(viewer) = app.router.course_mut() {
                viewer.draw(f, main, &theme);
            }
        }
        Page::Profile => {
            if let Some(user) = app.router.user() {
                app.profile_view.draw(f, main, user, &app.stats, &theme);
            }
        }
        Page::Playlist => app.loader_view.draw(f, main, &theme),
        Page::Player => {
            if let Some(player) = app.router.player_mut() {
                player.draw(f, main, &theme);
            }
        }
    }

    draw_commander(f, outer[2], app);
}
