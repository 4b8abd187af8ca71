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

//! Event routing for the playlist URL entry.
//!
//! The URL field owns the keyboard on this page, Enter submits it and Esc
//! returns home.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tui_input::backend::crossterm::EventHandler;

use crate::{
    actions::events::{AppEvent, AppEventProcessor},
    components::PlaylistLoaderView,
    router::Page,
};

impl AppEventProcessor for PlaylistLoaderView {
    fn process_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> Result<bool> {
        let Event::Key(key_event) = event else {
            return Ok(false);
        };

        match key_event.code {
            KeyCode::Esc => event_tx.send(AppEvent::Navigate(Page::Home))?,
            KeyCode::Enter => {
                // One request at a time.
                if !self.loading {
                    event_tx.send(AppEvent::RequestPlaylist(self.input.value().to_string()))?;
                }
            }
            _ => {
                if self.input.handle_event(event).is_some() {
                    self.error = None;
                }
            }
        }

        Ok(true)
    }
}
