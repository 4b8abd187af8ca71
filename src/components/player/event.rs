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

//! Event routing for the player view.
//!
//! While the notes editor has focus every key except Esc goes to it, so
//! typing never triggers navigation. Otherwise keys drive the playlist.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};

use crate::{
    actions::events::{AppEvent, AppEventProcessor},
    components::PlayerView,
    router::Page,
};

impl AppEventProcessor for PlayerView {
    fn process_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> Result<bool> {
        let Event::Key(key_event) = event else {
            return Ok(false);
        };

        if self.notes.focused() {
            if key_event.code == KeyCode::Esc {
                self.notes.set_focused(false);
            } else {
                self.notes.handle_event(event, &mut self.session);
            }
            return Ok(true);
        }

        match key_event.code {
            KeyCode::Char('n') | KeyCode::Right => {
                self.next();
            }
            KeyCode::Char('p') | KeyCode::Left => {
                self.previous();
            }

            KeyCode::Char('j') | KeyCode::Down => self.highlight_next(),
            KeyCode::Char('k') | KeyCode::Up => self.highlight_previous(),
            KeyCode::Enter => {
                if let Err(e) = self.select_highlighted() {
                    event_tx.send(AppEvent::Error(e.to_string()))?;
                }
            }

            KeyCode::Char('w') => self.mark_watched(),
            KeyCode::Tab => self.notes.set_focused(true),

            KeyCode::Char('b') => {
                self.show_playlist = !self.show_playlist;
                event_tx.send(self.settings_changed())?;
            }
            KeyCode::Char('a') => {
                self.autoplay = !self.autoplay;
                event_tx.send(self.settings_changed())?;
            }

            KeyCode::Esc => event_tx.send(AppEvent::Navigate(Page::Home))?,

            _ => return Ok(false),
        }

        Ok(true)
    }
}

impl PlayerView {
    fn settings_changed(&self) -> AppEvent {
        AppEvent::PlayerSettingsChanged {
            autoplay: self.autoplay,
            show_playlist: self.show_playlist,
        }
    }
}
