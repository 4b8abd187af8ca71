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

//! Command-line input logic and state management.
//!
//! This module implements a vi-style command line: `:` opens it, typed text
//! goes to a text input, Enter parses the line into an [`AppCommand`] and Esc
//! closes it.

use std::sync::mpsc::Sender;

use crossterm::event::{Event, KeyCode};
use thiserror::Error;
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{actions::commands::AppCommand, router::Page};

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum CommandError {
    #[error("unknown command '{0}'")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),
}

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
    pub(crate) error: Option<String>,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
            error: None,
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// Handles a key event, returning `true` if the command line consumed it.
    pub(crate) fn handle_event(&mut self, event: &Event, command_tx: &Sender<AppCommand>) -> bool {
        let Event::Key(key_event) = event else {
            return false;
        };

        if !self.active {
            if key_event.code == KeyCode::Char(':') {
                self.active = true;
                self.error = None;
                return true;
            }
            return false;
        }

        match key_event.code {
            KeyCode::Esc => self.close(),

            KeyCode::Enter => {
                let buffer = self.input.value().trim().to_string();
                self.close();

                if !buffer.is_empty() {
                    match parse_command(&buffer) {
                        Ok(command) => {
                            log::debug!("Running command {:?}", command);
                            if command_tx.send(command).is_err() {
                                self.error = Some("command worker is not running".to_string());
                            }
                        }
                        Err(e) => self.error = Some(e.to_string()),
                    }
                }
            }

            _ => {
                // Delegate all other key events to the managed input component.
                self.input.handle_event(event);
            }
        }

        true
    }

    fn close(&mut self) {
        self.active = false;
        self.input.reset();
    }
}

/// Parses a command line into an application command.
pub(crate) fn parse_command(buffer: &str) -> Result<AppCommand, CommandError> {
    let parts: Vec<&str> = buffer.split_whitespace().collect();

    let command = match parts.as_slice() {
        ["q"] | ["quit"] => AppCommand::ExitApplication,

        ["home"] => AppCommand::Navigate(Page::Home),
        ["courses"] => AppCommand::Navigate(Page::Courses),
        ["dash"] => AppCommand::Navigate(Page::Dashboard),
        ["profile"] => AppCommand::Navigate(Page::Profile),
        ["playlist"] => AppCommand::Navigate(Page::Playlist),
        ["login"] => AppCommand::Navigate(Page::Login),
        ["logout"] => AppCommand::Logout,

        ["load", url] => AppCommand::RequestPlaylist(url.to_string()),
        ["load", ..] => return Err(CommandError::Usage("load <playlist url>")),

        ["n"] => AppCommand::PlayerNext,
        ["p"] => AppCommand::PlayerPrevious,
        ["w"] => AppCommand::PlayerMarkWatched,

        ["go", position] => match position.parse::<usize>() {
            Ok(n) if n >= 1 => AppCommand::PlayerSelect(n - 1),
            _ => return Err(CommandError::Usage("go <video number, from 1>")),
        },
        ["go", ..] => return Err(CommandError::Usage("go <video number, from 1>")),

        [cmd, ..] => return Err(CommandError::Unknown(cmd.to_string())),
        [] => return Err(CommandError::Unknown(String::new())),
    };

    Ok(command)
}
