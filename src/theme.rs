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

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the application's color palette and converts colors to
//! the hexadecimal form used when styling the terminal emulator itself.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) gauge_track_colour: Color,
    pub(crate) commander_colour: Color,
    pub(crate) error_colour: Color,

    pub(crate) text_fg: Color,
    pub(crate) muted_fg: Color,
    pub(crate) watched_fg: Color,
    pub(crate) notes_fg: Color,
    pub(crate) highlight_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(17, 24, 39),
            accent_colour: Color::Rgb(59, 130, 246),
            border_colour: Color::Rgb(55, 65, 81),
            gauge_track_colour: Color::Rgb(31, 41, 55),
            commander_colour: Color::Rgb(229, 231, 235),
            error_colour: Color::Rgb(248, 113, 113),

            text_fg: Color::Rgb(255, 255, 255),
            muted_fg: Color::Rgb(156, 163, 175),
            watched_fg: Color::Rgb(74, 222, 128),
            notes_fg: Color::Rgb(96, 165, 250),
            highlight_bg: Color::Rgb(30, 58, 138),
        }
    }

    /// Converts an RGB [`Color`] into a CSS-style hexadecimal string.
    ///
    /// Returns `None` for non-RGB colours, which have no fixed value.
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_to_hex() {
        assert_eq!(Theme::to_hex(Color::Rgb(17, 24, 39)).as_deref(), Some("#111827"));
        assert_eq!(Theme::to_hex(Color::Red), None);
    }
}
