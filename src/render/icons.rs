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

//! Unicode symbols for the TUI.
//!
//! Text-style variants (Variation Selector-15, `\u{FE0E}`) force terminals to
//! render monochrome glyphs that respect the theme colours.

pub(crate) const ICON_PREV: &str = "\u{23EE}\u{FE0E}";
pub(crate) const ICON_NEXT: &str = "\u{23ED}\u{FE0E}";
pub(crate) const ICON_PLAY: &str = "\u{25B6}";

pub(crate) const ICON_WATCHED: &str = "\u{2713}";
pub(crate) const ICON_HIGHLIGHT: &str = "\u{203A} ";
pub(crate) const ICON_NOTES: &str = "\u{270E}";
pub(crate) const ICON_STAR: &str = "\u{2605}";
