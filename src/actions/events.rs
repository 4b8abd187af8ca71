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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the application,
//! bridging user input (keyboard), background worker results (playlist
//! loading) and the UI rendering pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through a
//!    channel.
//! 2. **Process**: [`apply_event`] updates the [`App`] state, routes keys to
//!    the active page, and sends commands to the background worker.
//! 3. **Render**: After each event is processed, the UI is re-drawn using the
//!    `ratatui` terminal.
//!
//! The playlist session is only ever touched from here, on the UI thread.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};

use crate::{
    App,
    actions::commands::AppCommand,
    config,
    loader::{LoadError, LoadedPlaylist},
    model::{Course, User, session::PlaylistSession},
    render::draw,
    router::Page,
    util::term::Tui,
};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Tick,

    Navigate(Page),

    RequestPlaylist(String),
    PlaylistLoaded { request: u64, playlist: LoadedPlaylist },
    PlaylistLoadFailed { request: u64, error: LoadError },

    SelectCourse(Course),
    StartCourseSession(usize),

    LoggedIn(User),
    UserUpdated(User),
    Logout,

    PlayerNext,
    PlayerPrevious,
    PlayerSelect(usize),
    PlayerMarkWatched,
    PlayerSettingsChanged { autoplay: bool, show_playlist: bool },

    ExitApplication,

    Error(String),
}

pub(crate) trait AppEventProcessor {
    /// Handles a terminal event, returning `true` if it was consumed.
    fn process_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> Result<bool>;
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until an exit event is received or the event channel
/// is closed.
pub(crate) fn process_events(terminal: &mut Tui, app: &mut App) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        if !apply_event(app, event)? {
            break;
        }

        // Render after every event processed
        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

/// Applies a single event to the application state.
///
/// Returns `false` when the application should exit.
pub(crate) fn apply_event(app: &mut App, event: AppEvent) -> Result<bool> {
    match event {
        AppEvent::ExitApplication => return Ok(false),

        AppEvent::Key(key) => process_key_event(app, key)?,
        AppEvent::Tick => {}

        AppEvent::Navigate(page) => app.navigate(page),

        AppEvent::RequestPlaylist(url) => {
            if app.router.page() != Page::Playlist {
                app.navigate(Page::Playlist);
            }
            let request = app.loader_view.begin_loading();
            app.command_tx.send(AppCommand::LoadPlaylist { request, url })?;
        }
        AppEvent::PlaylistLoaded { request, .. } | AppEvent::PlaylistLoadFailed { request, .. }
            if !app.loader_view.is_pending(request) =>
        {
            log::debug!("Ignoring result of abandoned playlist request {}", request);
        }
        AppEvent::PlaylistLoaded { playlist, .. } => {
            match PlaylistSession::new(playlist.title, playlist.videos) {
                Ok(session) => {
                    app.loader_view.finish_loading(None);
                    app.open_player(session);
                }
                Err(e) => {
                    log::warn!("Refusing to open playlist: {}", e);
                    app.loader_view.finish_loading(Some(e.to_string()));
                }
            }
        }
        AppEvent::PlaylistLoadFailed { error, .. } => {
            app.loader_view.finish_loading(Some(error.to_string()))
        }

        AppEvent::SelectCourse(course) => {
            log::info!("Selected course {} '{}'", course.id, course.title);
            app.router.select_course(course);
        }
        AppEvent::StartCourseSession(index) => start_course_session(app, index),

        AppEvent::LoggedIn(user) => {
            log::info!("Signed in as {}", user.email);
            app.login_view.reset();
            app.router.login(user);
        }
        AppEvent::UserUpdated(user) => {
            log::info!("Updated profile for {}", user.id);
            app.router.update_user(user);
        }
        AppEvent::Logout => {
            log::info!("Signed out");
            app.profile_view.cancel_edit();
            app.router.logout();
        }

        AppEvent::PlayerNext => {
            if let Some(player) = app.router.player_mut() {
                player.next();
            }
        }
        AppEvent::PlayerPrevious => {
            if let Some(player) = app.router.player_mut() {
                player.previous();
            }
        }
        AppEvent::PlayerSelect(index) => {
            if let Some(player) = app.router.player_mut() {
                if let Err(e) = player.select(index) {
                    app.status = Some(e.to_string());
                }
            }
        }
        AppEvent::PlayerMarkWatched => {
            if let Some(player) = app.router.player_mut() {
                player.mark_watched();
            }
        }
        AppEvent::PlayerSettingsChanged {
            autoplay,
            show_playlist,
        } => {
            app.config.autoplay = autoplay;
            app.config.show_playlist = show_playlist;
            if let Err(e) = config::save_config(&app.config) {
                log::warn!("Failed to save configuration: {}", e);
            }
        }

        AppEvent::Error(message) => {
            log::error!("{}", message);
            app.status = Some(message);
        }
    }

    Ok(true)
}

fn start_course_session(app: &mut App, index: usize) {
    let Some(viewer) = app.router.course() else {
        return;
    };
    let course = viewer.course();

    let session = PlaylistSession::new(course.title.clone(), course.videos.clone())
        .and_then(|mut session| session.select_index(index).map(|_| session));

    match session {
        Ok(session) => app.open_player(session),
        Err(e) => app.status = Some(e.to_string()),
    }
}

/// Routes a key press to the commander, then the active page, then the global
/// key bindings, stopping at the first that consumes it.
fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    let event = Event::Key(key);

    if (app.commander.active() || !app.captures_text())
        && app.commander.handle_event(&event, &app.command_tx)
    {
        return Ok(());
    }

    if process_page_event(app, &event)? {
        return Ok(());
    }

    process_global_key_event(app, key)
}

fn process_page_event(app: &mut App, event: &Event) -> Result<bool> {
    let event_tx = &app.event_tx;

    match app.router.page() {
        Page::Courses => app.courses_view.process_event(event, event_tx),
        Page::Course => match app.router.course_mut() {
            Some(viewer) => viewer.process_event(event, event_tx),
            None => Ok(false),
        },
        Page::Player => match app.router.player_mut() {
            Some(player) => player.process_event(event, event_tx),
            None => Ok(false),
        },
        Page::Playlist => app.loader_view.process_event(event, event_tx),
        Page::Login => app.login_view.process_event(event, event_tx),
        Page::Profile => match app.router.user() {
            Some(user) => app.profile_view.process_event(event, user, event_tx),
            None => Ok(false),
        },
        Page::Home | Page::Dashboard => Ok(false),
    }
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') => app.event_tx.send(AppEvent::ExitApplication)?,

        KeyCode::Char('1') => app.navigate(Page::Home),
        KeyCode::Char('2') => app.navigate(Page::Courses),
        KeyCode::Char('3') => app.navigate(Page::Dashboard),
        KeyCode::Char('4') => app.navigate(Page::Playlist),
        KeyCode::Char('5') => app.navigate(Page::Profile),

        KeyCode::Char('l') => {
            if app.router.user().is_some() {
                app.event_tx.send(AppEvent::Logout)?;
            } else {
                app.navigate(Page::Login);
            }
        }

        _ => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc::{self, Receiver};

    use assert_matches::assert_matches;
    use crossterm::event::KeyModifiers;

    use super::*;
    use crate::{config::AppConfig, loader::DemoPlaylistLoader, loader::PlaylistLoader};

    fn app() -> (App, Receiver<AppCommand>) {
        let (command_tx, command_rx) = mpsc::channel();
        let app = App::new(AppConfig::default(), command_tx);
        (app, command_rx)
    }

    fn key(app: &mut App, code: KeyCode) {
        let event = AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE));
        assert!(apply_event(app, event).unwrap());
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            key(app, KeyCode::Char(c));
        }
    }

    const DEMO_URL: &str = "https://www.youtube.com/playlist?list=PLdemo";

    fn demo_playlist() -> LoadedPlaylist {
        DemoPlaylistLoader.load(DEMO_URL).unwrap()
    }

    /// Requests the demo playlist and delivers its result, as the worker would.
    fn open_demo(app: &mut App, rx: &Receiver<AppCommand>) {
        apply_event(app, AppEvent::RequestPlaylist(DEMO_URL.to_string())).unwrap();
        let Ok(AppCommand::LoadPlaylist { request, .. }) = rx.try_recv() else {
            panic!("expected a load command");
        };
        let playlist = demo_playlist();
        apply_event(app, AppEvent::PlaylistLoaded { request, playlist }).unwrap();
    }

    #[test]
    fn loaded_playlist_opens_player() {
        let (mut app, rx) = app();
        app.navigate(Page::Playlist);

        open_demo(&mut app, &rx);

        assert_eq!(app.router.page(), Page::Player);
        let player = app.router.player().unwrap();
        assert_eq!(player.session().len(), 4);
        assert_eq!(player.session().current_index(), 0);
    }

    #[test]
    fn empty_playlist_stays_on_loader_with_error() {
        let (mut app, _rx) = app();
        app.navigate(Page::Playlist);

        let request = app.loader_view.begin_loading();
        let playlist = LoadedPlaylist {
            id: "PLempty".into(),
            title: "Nothing".into(),
            videos: vec![],
        };
        apply_event(&mut app, AppEvent::PlaylistLoaded { request, playlist }).unwrap();

        assert_eq!(app.router.page(), Page::Playlist);
        assert!(app.router.player().is_none());
        assert_eq!(app.loader_view.error(), Some("playlist has no videos"));
    }

    #[test]
    fn leaving_the_player_discards_the_session() {
        let (mut app, rx) = app();
        open_demo(&mut app, &rx);
        key(&mut app, KeyCode::Char('n'));

        key(&mut app, KeyCode::Esc);
        let event = app.event_rx.try_recv().unwrap();
        assert_matches!(event, AppEvent::Navigate(Page::Home));
        apply_event(&mut app, event).unwrap();

        assert_eq!(app.router.page(), Page::Home);
        assert!(app.router.player().is_none());

        // Asking for the player again falls back to the loader.
        app.navigate(Page::Player);
        assert_eq!(app.router.page(), Page::Playlist);
    }

    #[test]
    fn loader_input_accepts_colons_and_submits() {
        let (mut app, rx) = app();
        app.navigate(Page::Playlist);

        let url = "https://www.youtube.com/playlist?list=PL1";
        type_text(&mut app, url);
        assert!(!app.commander.active());

        key(&mut app, KeyCode::Enter);
        let event = app.event_rx.try_recv().unwrap();
        assert_matches!(&event, AppEvent::RequestPlaylist(u) if u == url);

        apply_event(&mut app, event).unwrap();
        assert!(app.loader_view.is_loading());
        assert_matches!(rx.try_recv(), Ok(AppCommand::LoadPlaylist { url: u, .. }) if u == url);
    }

    #[test]
    fn result_arriving_after_leaving_loader_is_ignored() {
        let (mut app, rx) = app();
        app.navigate(Page::Playlist);
        apply_event(&mut app, AppEvent::RequestPlaylist(DEMO_URL.to_string())).unwrap();
        let Ok(AppCommand::LoadPlaylist { request, .. }) = rx.try_recv() else {
            panic!("expected a load command");
        };

        app.navigate(Page::Courses);
        assert!(!app.loader_view.is_loading());

        let playlist = demo_playlist();
        apply_event(&mut app, AppEvent::PlaylistLoaded { request, playlist }).unwrap();

        assert_eq!(app.router.page(), Page::Courses);
        assert!(app.router.player().is_none());
    }

    #[test]
    fn only_latest_request_opens_player() {
        let (mut app, rx) = app();
        app.navigate(Page::Playlist);

        apply_event(&mut app, AppEvent::RequestPlaylist(DEMO_URL.to_string())).unwrap();
        apply_event(&mut app, AppEvent::RequestPlaylist(DEMO_URL.to_string())).unwrap();
        let Ok(AppCommand::LoadPlaylist { request: first, .. }) = rx.try_recv() else {
            panic!("expected a load command");
        };
        let Ok(AppCommand::LoadPlaylist { request: second, .. }) = rx.try_recv() else {
            panic!("expected a load command");
        };

        let error = LoadError::InvalidUrl;
        apply_event(&mut app, AppEvent::PlaylistLoadFailed { request: first, error }).unwrap();
        assert_eq!(app.loader_view.error(), None);
        assert!(app.loader_view.is_loading());

        let playlist = demo_playlist();
        apply_event(&mut app, AppEvent::PlaylistLoaded { request: second, playlist }).unwrap();
        assert_eq!(app.router.page(), Page::Player);
    }

    #[test]
    fn commander_load_starts_request_from_any_page() {
        let (mut app, rx) = app();
        app.navigate(Page::Courses);

        key(&mut app, KeyCode::Char(':'));
        type_text(&mut app, "load https://www.youtube.com/playlist?list=PL9");
        key(&mut app, KeyCode::Enter);

        let Ok(AppCommand::RequestPlaylist(url)) = rx.try_recv() else {
            panic!("expected a playlist request");
        };
        apply_event(&mut app, AppEvent::RequestPlaylist(url)).unwrap();

        assert_eq!(app.router.page(), Page::Playlist);
        assert!(app.loader_view.is_loading());
        assert_matches!(rx.try_recv(), Ok(AppCommand::LoadPlaylist { url, .. }) if url.ends_with("PL9"));
    }

    #[test]
    fn profile_edit_saves_and_cancels() {
        let (mut app, _rx) = app();
        apply_event(&mut app, AppEvent::LoggedIn(User::mock("Ada"))).unwrap();
        key(&mut app, KeyCode::Char('5'));
        assert_eq!(app.router.page(), Page::Profile);

        key(&mut app, KeyCode::Char('e'));
        assert!(app.captures_text());
        type_text(&mut app, " L");
        key(&mut app, KeyCode::Enter);
        let event = app.event_rx.try_recv().unwrap();
        assert_matches!(&event, AppEvent::UserUpdated(u) if u.name == "Ada L");
        apply_event(&mut app, event).unwrap();
        assert_eq!(app.router.user().unwrap().name, "Ada L");

        // Typing into a cancelled form leaves the user untouched, including
        // keys that would otherwise navigate.
        key(&mut app, KeyCode::Char('e'));
        type_text(&mut app, "12");
        key(&mut app, KeyCode::Esc);
        assert!(app.event_rx.try_recv().is_err());
        assert_eq!(app.router.page(), Page::Profile);
        assert_eq!(app.router.user().unwrap().name, "Ada L");
        assert!(!app.captures_text());
    }

    #[test]
    fn leaving_profile_closes_form() {
        let (mut app, _rx) = app();
        apply_event(&mut app, AppEvent::LoggedIn(User::mock("Ada"))).unwrap();
        app.navigate(Page::Profile);
        key(&mut app, KeyCode::Char('e'));
        assert!(app.profile_view.is_editing());

        apply_event(&mut app, AppEvent::Logout).unwrap();

        assert!(!app.profile_view.is_editing());
    }

    #[test]
    fn commander_go_selects_video() {
        let (mut app, rx) = app();
        open_demo(&mut app, &rx);

        key(&mut app, KeyCode::Char(':'));
        assert!(app.commander.active());
        type_text(&mut app, "go 3");
        key(&mut app, KeyCode::Enter);

        assert_eq!(rx.try_recv(), Ok(AppCommand::PlayerSelect(2)));

        apply_event(&mut app, AppEvent::PlayerSelect(2)).unwrap();
        assert_eq!(app.router.player().unwrap().session().current_index(), 2);
    }

    #[test]
    fn out_of_range_select_reports_status() {
        let (mut app, rx) = app();
        open_demo(&mut app, &rx);

        apply_event(&mut app, AppEvent::PlayerSelect(9)).unwrap();

        assert_eq!(app.router.player().unwrap().session().current_index(), 0);
        assert!(app.status.as_deref().unwrap().contains("out of range"));
    }

    #[test]
    fn notes_typed_in_player_are_written_eagerly() {
        let (mut app, rx) = app();
        open_demo(&mut app, &rx);

        key(&mut app, KeyCode::Tab);
        type_text(&mut app, "hello");
        assert_eq!(app.router.player().unwrap().session().current().notes, "hello");

        // Global keys are suppressed while editing notes.
        type_text(&mut app, "q1");
        assert_eq!(app.router.page(), Page::Player);
        assert_eq!(app.router.player().unwrap().session().current().notes, "helloq1");
    }

    #[test]
    fn course_session_starts_on_highlighted_video() {
        let (mut app, _rx) = app();
        let course = app.courses_view.catalog().courses()[0].clone();
        apply_event(&mut app, AppEvent::SelectCourse(course)).unwrap();
        assert_eq!(app.router.page(), Page::Course);

        key(&mut app, KeyCode::Char('j'));
        key(&mut app, KeyCode::Char('j'));
        key(&mut app, KeyCode::Enter);

        let event = app.event_rx.try_recv().unwrap();
        assert_matches!(event, AppEvent::StartCourseSession(2));
        apply_event(&mut app, event).unwrap();

        let player = app.router.player().unwrap();
        assert_eq!(player.session().current_index(), 2);
        assert_eq!(player.session().title(), "React Fundamentals");
        assert_eq!(player.session().progress().completed, 1);
    }

    #[test]
    fn login_then_logout() {
        let (mut app, _rx) = app();
        key(&mut app, KeyCode::Char('3'));
        assert_eq!(app.router.page(), Page::Login);

        type_text(&mut app, "Ada");
        key(&mut app, KeyCode::Enter);
        let event = app.event_rx.try_recv().unwrap();
        apply_event(&mut app, event).unwrap();
        assert_eq!(app.router.page(), Page::Dashboard);

        key(&mut app, KeyCode::Char('l'));
        let event = app.event_rx.try_recv().unwrap();
        assert_matches!(event, AppEvent::Logout);
        apply_event(&mut app, event).unwrap();
        assert_eq!(app.router.page(), Page::Home);
        assert!(app.router.user().is_none());
    }

    #[test]
    fn quit_key_requests_exit() {
        let (mut app, _rx) = app();
        key(&mut app, KeyCode::Char('q'));
        let event = app.event_rx.try_recv().unwrap();
        assert!(!apply_event(&mut app, event).unwrap());
    }
}
