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

//! Playlist URL entry.
//!
//! Holds the URL being typed, whether a load is in flight, and the last load
//! error to show beneath the input.
//!
//! Each load is tagged with a request id. Only the result for the latest
//! request, while it is still pending, is accepted.

mod event;
mod render;

use tui_input::Input;

pub(crate) const EXAMPLE_URLS: [&str; 2] = [
    "https://www.youtube.com/playlist?list=PL0vfts4VzfNiI1BsIK5u7LpNYIDxeWmUu",
    "https://www.youtube.com/watch?v=...&list=PL0vfts4VzfNiI1BsIK5u7LpNYIDxeWmUu",
];

#[derive(Debug, Default)]
pub(crate) struct PlaylistLoaderView {
    input: Input,
    loading: bool,
    request: u64,
    error: Option<String>,
}

impl PlaylistLoaderView {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn is_loading(&self) -> bool {
        self.loading
    }

    pub(crate) fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Starts a new load, superseding any pending one, and returns its id.
    pub(crate) fn begin_loading(&mut self) -> u64 {
        self.request += 1;
        self.loading = true;
        self.error = None;
        self.request
    }

    /// Whether a result for `request` should still be applied.
    pub(crate) fn is_pending(&self, request: u64) -> bool {
        self.loading && self.request == request
    }

    /// Abandons the pending load, its result will be ignored.
    pub(crate) fn cancel_loading(&mut self) {
        if self.loading {
            log::info!("Cancelling playlist request {}", self.request);
            self.loading = false;
        }
    }

    pub(crate) fn finish_loading(&mut self, error: Option<String>) {
        self.loading = false;
        if error.is_none() {
            self.input.reset();
        }
        self.error = error;
    }
}
