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

//! Interactive screen components.
//!
//! Each component owns the transient view state of one page (list highlight,
//! text input, focus) and implements
//! [`AppEventProcessor`](crate::actions::events::AppEventProcessor) to turn
//! key presses into state changes or [`AppEvent`](crate::actions::events::AppEvent)s.

mod course_viewer;
mod courses;
mod login;
mod notes;
mod player;
mod playlist_loader;
mod profile;

use ratatui::widgets::ListState;

pub(crate) use course_viewer::CourseViewer;
pub(crate) use courses::CoursesView;
pub(crate) use login::LoginView;
pub(crate) use notes::NotesEditor;
pub(crate) use player::PlayerView;
pub(crate) use playlist_loader::PlaylistLoaderView;
pub(crate) use profile::ProfileView;

/// Moves a list highlight down, wrapping to the top.
pub(crate) fn goto_next(state: &mut ListState, len: usize) {
    if len == 0 {
        state.select(None);
        return;
    }
    let i = match state.selected() {
        Some(i) if i + 1 < len => i + 1,
        _ => 0,
    };
    state.select(Some(i));
}

/// Moves a list highlight up, wrapping to the bottom.
pub(crate) fn goto_previous(state: &mut ListState, len: usize) {
    if len == 0 {
        state.select(None);
        return;
    }
    let i = match state.selected() {
        Some(0) | None => len - 1,
        Some(i) => (i - 1).min(len - 1),
    };
    state.select(Some(i));
}
