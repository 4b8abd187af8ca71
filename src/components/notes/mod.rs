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

//! Per-video note editing.
//!
//! The editor keeps a text input seeded from the current video's notes. Every
//! edit that changes the text is written straight back to the session, so the
//! record is always current and nothing is lost when the cursor moves.

use crossterm::event::Event;
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::model::session::PlaylistSession;

#[derive(Debug, Default)]
pub(crate) struct NotesEditor {
    input: Input,
    focused: bool,
}

impl NotesEditor {
    pub(crate) fn new(session: &PlaylistSession) -> Self {
        let mut editor = Self::default();
        editor.seed(session);
        editor
    }

    /// Reloads the buffer from the video under the session cursor.
    pub(crate) fn seed(&mut self, session: &PlaylistSession) {
        self.input = Input::new(session.current().notes.clone());
    }

    pub(crate) fn value(&self) -> &str {
        self.input.value()
    }

    pub(crate) fn visual_cursor(&self) -> usize {
        self.input.visual_cursor()
    }

    pub(crate) fn visual_scroll(&self, width: usize) -> usize {
        self.input.visual_scroll(width)
    }

    pub(crate) fn focused(&self) -> bool {
        self.focused
    }

    pub(crate) fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Applies an edit, returning `true` if the input consumed the event.
    pub(crate) fn handle_event(&mut self, event: &Event, session: &mut PlaylistSession) -> bool {
        match self.input.handle_event(event) {
            Some(changed) => {
                if changed.value {
                    session.set_notes(self.input.value());
                }
                true
            }
            None => false,
        }
    }
}
