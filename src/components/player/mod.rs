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

//! Distraction-free player.
//!
//! This module wraps a [`PlaylistSession`] with the view state of the player
//! screen: the sidebar highlight, the notes editor and the display toggles.
//! Every cursor move goes through here so the notes editor and the sidebar
//! are re-synced with the session in one place.

mod event;
mod render;

use ratatui::widgets::ListState;

use crate::{
    components::{NotesEditor, goto_next, goto_previous},
    model::session::{PlaylistSession, SessionError},
};

pub(crate) struct PlayerView {
    session: PlaylistSession,
    notes: NotesEditor,
    sidebar_state: ListState,
    pub(crate) show_playlist: bool,
    pub(crate) autoplay: bool,
}

impl PlayerView {
    pub(crate) fn new(session: PlaylistSession, show_playlist: bool, autoplay: bool) -> Self {
        let notes = NotesEditor::new(&session);
        let sidebar_state = ListState::default().with_selected(Some(session.current_index()));

        Self {
            session,
            notes,
            sidebar_state,
            show_playlist,
            autoplay,
        }
    }

    pub(crate) fn session(&self) -> &PlaylistSession {
        &self.session
    }

    pub(crate) fn notes_focused(&self) -> bool {
        self.notes.focused()
    }

    pub(crate) fn next(&mut self) -> bool {
        let moved = self.session.next();
        self.cursor_moved();
        moved
    }

    pub(crate) fn previous(&mut self) -> bool {
        let moved = self.session.previous();
        self.cursor_moved();
        moved
    }

    pub(crate) fn select(&mut self, index: usize) -> Result<(), SessionError> {
        self.session.select_index(index)?;
        self.cursor_moved();
        Ok(())
    }

    pub(crate) fn mark_watched(&mut self) {
        self.session.mark_watched();
    }

    pub(crate) fn highlighted(&self) -> Option<usize> {
        self.sidebar_state.selected()
    }

    fn highlight_next(&mut self) {
        goto_next(&mut self.sidebar_state, self.session.len());
    }

    fn highlight_previous(&mut self) {
        goto_previous(&mut self.sidebar_state, self.session.len());
    }

    /// Selects the highlighted sidebar entry.
    fn select_highlighted(&mut self) -> Result<(), SessionError> {
        match self.highlighted() {
            Some(index) => self.select(index),
            None => Ok(()),
        }
    }

    // Notes are already on the record, only the editor buffer and the sidebar
    // need to follow the cursor.
    fn cursor_moved(&mut self) {
        self.notes.seed(&self.session);
        self.sidebar_state.select(Some(self.session.current_index()));
    }
}
