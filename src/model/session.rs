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

//! Playlist playback state.
//!
//! A [`PlaylistSession`] owns an ordered, fixed-length sequence of videos and
//! a cursor into it. The cursor is the only piece of machine state, it always
//! points at a valid item and moves with [`PlaylistSession::next`],
//! [`PlaylistSession::previous`] and [`PlaylistSession::select_index`].
//!
//! Notes and the watched flag are written straight onto the record under the
//! cursor, there is no deferred save step. Views read live data back through
//! the session accessors rather than keeping their own copies.

use std::collections::HashSet;

use thiserror::Error;

use crate::model::Video;

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum SessionError {
    #[error("playlist has no videos")]
    EmptyPlaylist,

    #[error("index {index} is out of range for a playlist of {len} videos")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("duplicate video id '{0}' in playlist")]
    DuplicateVideo(String),
}

/// Derived completion figures, recomputed on every read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Progress {
    pub(crate) completed: usize,
    pub(crate) total: usize,
    pub(crate) percent: f64,
}

impl Progress {
    /// Completion as a ratio in `[0, 1]`, suitable for a gauge.
    pub(crate) fn ratio(&self) -> f64 {
        self.percent / 100.0
    }
}

#[derive(Debug)]
pub(crate) struct PlaylistSession {
    title: String,
    videos: Vec<Video>,
    current_index: usize,
}

impl PlaylistSession {
    /// Creates a session positioned on the first video.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::EmptyPlaylist`] if `videos` is empty and
    /// [`SessionError::DuplicateVideo`] if two videos share an id.
    pub(crate) fn new(title: impl Into<String>, videos: Vec<Video>) -> Result<Self, SessionError> {
        if videos.is_empty() {
            return Err(SessionError::EmptyPlaylist);
        }

        let mut seen = HashSet::with_capacity(videos.len());
        if let Some(dup) = videos.iter().find(|v| !seen.insert(v.id.as_str())) {
            return Err(SessionError::DuplicateVideo(dup.id.clone()));
        }

        Ok(Self {
            title: title.into(),
            videos,
            current_index: 0,
        })
    }

    pub(crate) fn title(&self) -> &str {
        &self.title
    }

    pub(crate) fn videos(&self) -> &[Video] {
        &self.videos
    }

    pub(crate) fn len(&self) -> usize {
        self.videos.len()
    }

    pub(crate) fn current_index(&self) -> usize {
        self.current_index
    }

    pub(crate) fn is_first(&self) -> bool {
        self.current_index == 0
    }

    pub(crate) fn is_last(&self) -> bool {
        self.current_index == self.videos.len() - 1
    }

    pub(crate) fn current(&self) -> &Video {
        &self.videos[self.current_index]
    }

    /// Moves to the next video, returning `false` if already on the last one.
    pub(crate) fn next(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.current_index += 1;
        true
    }

    /// Moves to the previous video, returning `false` if already on the first.
    pub(crate) fn previous(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.current_index -= 1;
        true
    }

    /// Jumps directly to `index`, leaving the cursor untouched on error.
    pub(crate) fn select_index(&mut self, index: usize) -> Result<(), SessionError> {
        if index >= self.videos.len() {
            return Err(SessionError::IndexOutOfRange {
                index,
                len: self.videos.len(),
            });
        }
        self.current_index = index;
        Ok(())
    }

    pub(crate) fn set_notes(&mut self, text: impl Into<String>) {
        self.videos[self.current_index].notes = text.into();
    }

    pub(crate) fn mark_watched(&mut self) {
        self.videos[self.current_index].watched = true;
    }

    pub(crate) fn progress(&self) -> Progress {
        let completed = self.videos.iter().filter(|v| v.watched).count();
        let total = self.videos.len();
        let percent = if total == 0 {
            0.0
        } else {
            completed as f64 / total as f64 * 100.0
        };

        Progress {
            completed,
            total,
            percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn videos(count: usize) -> Vec<Video> {
        (1..=count)
            .map(|n| Video::new(n.to_string(), format!("Video {}", n), n as u32))
            .collect()
    }

    fn session(count: usize) -> PlaylistSession {
        PlaylistSession::new("Test Playlist", videos(count)).unwrap()
    }

    #[test]
    fn new_session_starts_at_first_video() {
        let s = session(3);
        assert_eq!(s.current_index(), 0);
        assert_eq!(s.current().id, "1");
        assert_eq!(s.title(), "Test Playlist");
    }

    #[test]
    fn empty_playlist_is_rejected() {
        assert_matches!(PlaylistSession::new("Empty", vec![]), Err(SessionError::EmptyPlaylist));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut items = videos(3);
        items.push(Video::new("2", "Again", 4));

        assert_matches!(
            PlaylistSession::new("Dupes", items),
            Err(SessionError::DuplicateVideo(id)) if id == "2"
        );
    }

    #[test]
    fn next_and_previous_round_trip() {
        let mut s = session(4);

        assert!(s.next());
        assert!(s.next());
        assert!(s.next());
        assert_eq!(s.current_index(), 3);

        assert!(!s.next());
        assert_eq!(s.current_index(), 3);

        assert!(s.previous());
        assert!(s.previous());
        assert!(s.previous());
        assert_eq!(s.current_index(), 0);
    }

    #[test]
    fn previous_at_first_is_a_no_op() {
        let mut s = session(2);
        assert!(!s.previous());
        assert_eq!(s.current_index(), 0);
    }

    #[test]
    fn single_video_cannot_move() {
        let mut s = session(1);
        assert!(s.is_first() && s.is_last());
        assert!(!s.next());
        assert!(!s.previous());
        assert_eq!(s.current_index(), 0);
    }

    #[test]
    fn select_index_in_range_moves_cursor() {
        let mut s = session(5);
        s.select_index(4).unwrap();
        assert_eq!(s.current_index(), 4);
        s.select_index(2).unwrap();
        assert_eq!(s.current().id, "3");
    }

    #[test]
    fn select_index_out_of_range_leaves_state() {
        let mut s = session(3);
        s.select_index(1).unwrap();

        assert_matches!(
            s.select_index(3),
            Err(SessionError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(s.current_index(), 1);
    }

    #[test]
    fn cursor_stays_in_range_under_long_walks() {
        let mut s = session(4);
        for step in 0..200usize {
            match step % 7 {
                0 | 1 | 2 => {
                    s.next();
                }
                3 | 4 => {
                    s.previous();
                }
                5 => {
                    let _ = s.select_index(step % 6);
                }
                _ => {
                    let _ = s.select_index(step);
                }
            }
            assert!(s.current_index() < s.len());
        }
    }

    #[test]
    fn set_notes_writes_current_video() {
        let mut s = session(3);
        s.next();
        s.set_notes("remember this");
        assert_eq!(s.current().notes, "remember this");

        s.set_notes("");
        assert_eq!(s.current().notes, "");
        assert_eq!(s.videos()[0].notes, "");
    }

    #[test]
    fn notes_survive_navigation() {
        let mut s = session(3);
        s.set_notes("hello");
        s.select_index(1).unwrap();
        s.select_index(0).unwrap();
        assert_eq!(s.current().notes, "hello");
    }

    #[test]
    fn mark_watched_is_idempotent() {
        let mut s = session(2);
        s.mark_watched();
        assert_eq!(s.progress().completed, 1);

        s.mark_watched();
        assert!(s.current().watched);
        assert_eq!(s.progress().completed, 1);
    }

    #[test]
    fn progress_tracks_watched_videos() {
        let mut s = session(3);
        assert_eq!(s.progress().completed, 0);
        assert_eq!(s.progress().percent, 0.0);

        s.mark_watched();
        let p = s.progress();
        assert_eq!((p.completed, p.total), (1, 3));
        assert!((p.percent - 100.0 / 3.0).abs() < 1e-9);

        s.select_index(2).unwrap();
        s.mark_watched();
        let p = s.progress();
        assert_eq!((p.completed, p.total), (2, 3));
        assert!((p.percent - 200.0 / 3.0).abs() < 1e-9);
        assert!((p.ratio() - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn progress_counts_prewatched_videos() {
        let items = vec![
            Video::new("a", "A", 1).watched(),
            Video::new("b", "B", 2),
        ];
        let s = PlaylistSession::new("Mixed", items).unwrap();
        assert_eq!(s.progress().completed, 1);
        assert_eq!(s.progress().percent, 50.0);
    }
}
