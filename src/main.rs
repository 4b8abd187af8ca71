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

//! # Distraction-free learning TUI.
//!
//! A terminal front end for browsing mock courses and watching a playlist
//! with per-video notes and progress tracking.
//!
//! This application coordinates a TUI frontend built with `ratatui` and a
//! background command worker.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle, UI rendering, and
//!   owns the playlist session.
//! * A **Background Worker** resolves playlist URLs and relays commands via
//!   command processing.
//! * **Event Loops** capture user input and system ticks to drive the UI
//!   state.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern so the
//! terminal state is restored even when the event loop fails. Communication
//! between the UI and the worker is handled via `std::sync::mpsc` channels.

mod actions;
mod commander;
mod components;
mod config;
mod loader;
mod model;
mod render;
mod router;
mod theme;
mod util;

use std::{
    fs::{self, File},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};

use anyhow::{Context, Result};
use crossterm::event;

use crate::{
    actions::{
        commands::AppCommand,
        events::{AppEvent, process_events},
    },
    commander::Commander,
    components::{CoursesView, LoginView, PlayerView, PlaylistLoaderView, ProfileView},
    config::AppConfig,
    loader::DemoPlaylistLoader,
    model::{LearnerStats, session::PlaylistSession},
    router::{Page, Router},
    theme::Theme,
    util::term::{self, Tui},
};

const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// Application state.
pub(crate) struct App {
    pub config: AppConfig,
    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub command_tx: Sender<AppCommand>,

    pub router: Router,
    pub commander: Commander,

    pub courses_view: CoursesView,
    pub loader_view: PlaylistLoaderView,
    pub login_view: LoginView,
    pub profile_view: ProfileView,

    pub stats: LearnerStats,

    /// Last error reported to the user, cleared on navigation.
    pub status: Option<String>,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig, command_tx: Sender<AppCommand>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        Self {
            config,
            theme: Theme::default(),
            event_tx,
            event_rx,
            command_tx,
            router: Router::new(),
            commander: Commander::new(),
            courses_view: CoursesView::new(),
            loader_view: PlaylistLoaderView::new(),
            login_view: LoginView::new(),
            profile_view: ProfileView::new(),
            stats: LearnerStats::mock(),
            status: None,
        }
    }

    /// Shows `page`, abandoning a pending playlist load or an open profile
    /// form when leaving their pages.
    pub fn navigate(&mut self, page: Page) {
        self.status = None;
        if page != Page::Playlist {
            self.loader_view.cancel_loading();
        }
        if page != Page::Profile {
            self.profile_view.cancel_edit();
        }
        self.router.navigate(page);
    }

    /// Hands a freshly created session to a new player and shows it.
    pub fn open_player(&mut self, session: PlaylistSession) {
        log::info!(
            "Opening player for '{}' with {} videos",
            session.title(),
            session.len()
        );
        self.status = None;
        let view = PlayerView::new(session, self.config.show_playlist, self.config.autoplay);
        self.router.open_player(view);
    }

    /// Whether the active page is taking free text, in which case global key
    /// bindings and the command line are suspended.
    pub fn captures_text(&self) -> bool {
        match self.router.page() {
            Page::Playlist | Page::Login => true,
            Page::Profile => self.profile_view.is_editing(),
            Page::Player => self.router.player().is_some_and(|p| p.notes_focused()),
            _ => false,
        }
    }
}

/// The entry point of the application.
///
/// Sets up logging and the communication channels, initializes the
/// application state, manages the terminal lifecycle, and returns an error if
/// any part of the execution fails.
fn main() -> Result<()> {
    let config = config::load_config();

    init_logging(&config).context("Failed to initialise logging")?;
    log::info!("Starting lectio {}", env!("CARGO_PKG_VERSION"));

    let (command_tx, command_rx) = mpsc::channel();

    let mut app = App::new(config, command_tx);

    let background = Theme::to_hex(app.theme.background_colour);
    let mut terminal = term::setup_terminal(background.as_deref())?;
    let res = run(&mut terminal, &mut app, command_rx);
    term::restore_terminal(&mut terminal);

    if let Err(e) = &res {
        log::error!("Application error: {:#}", e);
    }
    log::info!("Exiting");

    res.context("Application error occurred")
}

/// Sends log output to a file, the terminal itself belongs to the UI.
fn init_logging(config: &AppConfig) -> Result<()> {
    let path = config.log_path();
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    }

    let file = File::create(&path).with_context(|| format!("Failed to open {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();

    Ok(())
}

/// Starts the application's background workers and enters the main event loop.
///
/// This function spawns several long-running background threads:
/// * A command worker to process [`AppCommand`]s.
/// * An input thread to poll for terminal key events.
/// * A tick thread to trigger periodic UI refreshes.
///
/// After spawning the workers, it hands control to [`process_events`].
fn run(terminal: &mut Tui, app: &mut App, command_rx: Receiver<AppCommand>) -> Result<()> {
    let command_event_tx = app.event_tx.clone();
    actions::commands::spawn_command_worker(
        Box::new(DemoPlaylistLoader),
        command_rx,
        command_event_tx,
    );

    // Translate raw key events to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(event::Event::Key(key)) => {
                    if tx_keys.send(AppEvent::Key(key)).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    let _ = tx_keys.send(AppEvent::Error(format!("Input error: {}", e)));
                    break;
                }
            }
        }
    });

    // Periodic tick, effectively the minimum "frame rate" for rendering.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(TICK_INTERVAL);
        }
    });

    process_events(terminal, app)
}
