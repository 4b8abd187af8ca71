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

//! Background application command processing.
//!
//! This module implements the command pattern used to keep potentially slow
//! work, such as resolving a playlist URL, off the main UI thread. A dedicated
//! worker translates [`AppCommand`] requests into results and broadcasts them
//! back to the application as [`AppEvent`]s.
//!
//! Commands that touch the playlist session are echoed back as events, the
//! session itself only ever lives on the UI thread.

use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
};

use anyhow::Result;

use crate::{actions::events::AppEvent, loader::PlaylistLoader, router::Page};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum AppCommand {
    Navigate(Page),
    /// Ask the UI to start a load for this URL.
    RequestPlaylist(String),
    LoadPlaylist { request: u64, url: String },
    PlayerNext,
    PlayerPrevious,
    PlayerSelect(usize),
    PlayerMarkWatched,
    Logout,
    ExitApplication,
}

/// Spawns a background thread to process application commands.
///
/// # Arguments
///
/// * `loader` - The playlist loader used for [`AppCommand::LoadPlaylist`].
/// * `command_rx` - The receiving end of the command channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_command_worker(
    loader: Box<dyn PlaylistLoader>,
    command_rx: Receiver<AppCommand>,
    event_tx: Sender<AppEvent>,
) {
    thread::spawn(move || {
        while let Ok(command) = command_rx.recv() {
            if let Err(e) = handle_command(loader.as_ref(), command, &event_tx) {
                log::error!("Command failed: {:#}", e);
                let _ = event_tx.send(AppEvent::Error(e.to_string()));
            }
        }
        log::debug!("Command channel closed, worker exiting");
    });
}

/// Executes a single command and sends the result back through the
/// application event channel.
pub(crate) fn handle_command(
    loader: &dyn PlaylistLoader,
    command: AppCommand,
    event_tx: &Sender<AppEvent>,
) -> Result<()> {
    match command {
        AppCommand::Navigate(page) => event_tx.send(AppEvent::Navigate(page))?,
        AppCommand::RequestPlaylist(url) => event_tx.send(AppEvent::RequestPlaylist(url))?,
        AppCommand::LoadPlaylist { request, url } => {
            log::info!("Loading playlist {} from '{}'", request, url);
            match loader.load(&url) {
                Ok(playlist) => {
                    log::info!(
                        "Loaded playlist '{}' ({}) with {} videos",
                        playlist.title,
                        playlist.id,
                        playlist.videos.len()
                    );
                    event_tx.send(AppEvent::PlaylistLoaded { request, playlist })?;
                }
                Err(error) => {
                    log::warn!("Playlist load failed: {}", error);
                    event_tx.send(AppEvent::PlaylistLoadFailed { request, error })?;
                }
            }
        }
        AppCommand::PlayerNext => event_tx.send(AppEvent::PlayerNext)?,
        AppCommand::PlayerPrevious => event_tx.send(AppEvent::PlayerPrevious)?,
        AppCommand::PlayerSelect(index) => event_tx.send(AppEvent::PlayerSelect(index))?,
        AppCommand::PlayerMarkWatched => event_tx.send(AppEvent::PlayerMarkWatched)?,
        AppCommand::Logout => event_tx.send(AppEvent::Logout)?,
        AppCommand::ExitApplication => event_tx.send(AppEvent::ExitApplication)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use assert_matches::assert_matches;

    use super::*;
    use crate::loader::{DemoPlaylistLoader, LoadError};

    #[test]
    fn load_playlist_reports_loaded_playlist() {
        let (tx, rx) = mpsc::channel();
        handle_command(
            &DemoPlaylistLoader,
            AppCommand::LoadPlaylist {
                request: 3,
                url: "https://www.youtube.com/playlist?list=PL1".into(),
            },
            &tx,
        )
        .unwrap();

        assert_matches!(
            rx.try_recv(),
            Ok(AppEvent::PlaylistLoaded { request: 3, playlist }) if playlist.videos.len() == 4
        );
    }

    #[test]
    fn load_playlist_reports_failure() {
        let (tx, rx) = mpsc::channel();
        let command = AppCommand::LoadPlaylist {
            request: 1,
            url: "nope".into(),
        };
        handle_command(&DemoPlaylistLoader, command, &tx).unwrap();

        assert_matches!(
            rx.try_recv(),
            Ok(AppEvent::PlaylistLoadFailed {
                request: 1,
                error: LoadError::InvalidUrl
            })
        );
    }

    #[test]
    fn player_commands_are_echoed() {
        let (tx, rx) = mpsc::channel();
        handle_command(&DemoPlaylistLoader, AppCommand::PlayerSelect(2), &tx).unwrap();
        handle_command(&DemoPlaylistLoader, AppCommand::Navigate(Page::Courses), &tx).unwrap();
        handle_command(&DemoPlaylistLoader, AppCommand::RequestPlaylist("u".into()), &tx).unwrap();

        assert_matches!(rx.try_recv(), Ok(AppEvent::PlayerSelect(2)));
        assert_matches!(rx.try_recv(), Ok(AppEvent::Navigate(Page::Courses)));
        assert_matches!(rx.try_recv(), Ok(AppEvent::RequestPlaylist(url)) if url == "u");
    }

    #[test]
    fn closed_channel_is_an_error() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        assert!(handle_command(&DemoPlaylistLoader, AppCommand::PlayerNext, &tx).is_err());
    }
}
