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

//! Playlist loading.
//!
//! This module turns a user-supplied playlist URL into a named, ordered list
//! of videos. The only loader currently provided recognises YouTube playlist
//! URLs and answers with a canned demo playlist, no network requests are
//! made.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::model::Video;

static PLAYLIST_URL_PATTERNS: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(r"youtube\.com/playlist\?list=([a-zA-Z0-9_-]+)").expect("valid regex"),
        Regex::new(r"youtube\.com/watch\?.*list=([a-zA-Z0-9_-]+)").expect("valid regex"),
    ]
});

const DEMO_PLAYLIST_TITLE: &str = "React Hooks Tutorial Series";
const DEMO_MEDIA_REF: &str = "dQw4w9WgXcQ";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub(crate) enum LoadError {
    #[error("Please enter a YouTube playlist URL")]
    MissingUrl,

    #[error("Invalid YouTube playlist URL")]
    InvalidUrl,
}

#[derive(Debug, Clone)]
pub(crate) struct LoadedPlaylist {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) videos: Vec<Video>,
}

pub(crate) trait PlaylistLoader: Send {
    fn load(&self, url: &str) -> Result<LoadedPlaylist, LoadError>;
}

/// Extracts the playlist id from a YouTube playlist or watch URL.
pub(crate) fn extract_playlist_id(url: &str) -> Option<String> {
    PLAYLIST_URL_PATTERNS
        .iter()
        .find_map(|re| re.captures(url))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Loader that validates the URL and returns a fixed demo playlist.
#[derive(Debug, Default)]
pub(crate) struct DemoPlaylistLoader;

impl PlaylistLoader for DemoPlaylistLoader {
    fn load(&self, url: &str) -> Result<LoadedPlaylist, LoadError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(LoadError::MissingUrl);
        }

        let id = extract_playlist_id(url).ok_or(LoadError::InvalidUrl)?;

        Ok(LoadedPlaylist {
            id,
            title: DEMO_PLAYLIST_TITLE.to_string(),
            videos: demo_videos(),
        })
    }
}

fn demo_videos() -> Vec<Video> {
    [
        (
            "Introduction to React Hooks",
            "Learn the basics of React Hooks and how to use them effectively",
            "15:30",
        ),
        (
            "useState Hook Deep Dive",
            "Understanding useState hook with practical examples",
            "22:15",
        ),
        (
            "useEffect Hook Explained",
            "Master the useEffect hook for side effects",
            "18:45",
        ),
        (
            "Custom Hooks Creation",
            "Learn how to create your own custom hooks",
            "25:10",
        ),
    ]
    .into_iter()
    .zip(1u32..)
    .map(|((title, description, duration), position)| {
        Video::new(position.to_string(), title, position)
            .with_description(description)
            .with_duration(duration)
            .with_media_ref(DEMO_MEDIA_REF)
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn extracts_id_from_playlist_url() {
        let id = extract_playlist_id(
            "https://www.youtube.com/playlist?list=PL0vfts4VzfNiI1BsIK5u7LpNYIDxeWmUu",
        );
        assert_eq!(id.as_deref(), Some("PL0vfts4VzfNiI1BsIK5u7LpNYIDxeWmUu"));
    }

    #[test]
    fn extracts_id_from_watch_url() {
        let id = extract_playlist_id("https://www.youtube.com/watch?v=abc123&list=PL_x-9");
        assert_eq!(id.as_deref(), Some("PL_x-9"));
    }

    #[test]
    fn rejects_urls_without_a_list() {
        assert_eq!(extract_playlist_id("https://www.youtube.com/watch?v=abc123"), None);
        assert_eq!(extract_playlist_id("https://example.com/playlist?list=PL1"), None);
        assert_eq!(extract_playlist_id("not a url"), None);
    }

    #[test]
    fn blank_url_is_missing() {
        assert_matches!(DemoPlaylistLoader.load("   "), Err(LoadError::MissingUrl));
    }

    #[test]
    fn bad_url_is_invalid() {
        assert_matches!(
            DemoPlaylistLoader.load("https://vimeo.com/123"),
            Err(LoadError::InvalidUrl)
        );
    }

    #[test]
    fn demo_playlist_is_ordered_and_unwatched() {
        let playlist = DemoPlaylistLoader
            .load("https://www.youtube.com/playlist?list=PLdemo")
            .unwrap();

        assert_eq!(playlist.id, "PLdemo");
        assert_eq!(playlist.title, "React Hooks Tutorial Series");
        assert_eq!(playlist.videos.len(), 4);

        let positions: Vec<_> = playlist.videos.iter().map(|v| v.position).collect();
        assert_eq!(positions, [1, 2, 3, 4]);
        assert!(playlist.videos.iter().all(|v| !v.watched && v.notes.is_empty()));
        assert_eq!(playlist.videos[3].duration.as_deref(), Some("25:10"));
        assert_eq!(playlist.videos[0].media_ref.as_deref(), Some("dQw4w9WgXcQ"));
    }
}
