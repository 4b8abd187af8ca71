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

//! Display formatting for the player and course screens.

use crate::model::session::Progress;

const EMBED_BASE_URL: &str = "https://www.youtube.com/embed";

/// Rounds a completion percentage to the nearest whole number for display.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_percent(33.333), "33%");
/// assert_eq!(format_percent(66.666), "67%");
/// ```
pub(crate) fn format_percent(percent: f64) -> String {
    format!("{}%", percent.round() as u32)
}

pub(crate) fn format_progress(progress: &Progress) -> String {
    format!(
        "Progress: {} of {} completed",
        progress.completed, progress.total
    )
}

/// Builds the embeddable player URL for a media reference.
pub(crate) fn embed_url(media_ref: &str, autoplay: bool) -> String {
    format!(
        "{}/{}?autoplay={}&rel=0&modestbranding=1",
        EMBED_BASE_URL,
        media_ref,
        u8::from(autoplay)
    )
}

/// Counts characters rather than bytes, matching what the user typed.
pub(crate) fn format_char_count(text: &str) -> String {
    format!("{} characters", text.chars().count())
}
