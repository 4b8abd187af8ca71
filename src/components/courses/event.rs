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

//! Event routing for the course browser.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};

use crate::{
    actions::events::{AppEvent, AppEventProcessor},
    components::CoursesView,
};

impl AppEventProcessor for CoursesView {
    fn process_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> Result<bool> {
        let Event::Key(key_event) = event else {
            return Ok(false);
        };

        match key_event.code {
            KeyCode::Char('j') | KeyCode::Down => self.next(),
            KeyCode::Char('k') | KeyCode::Up => self.previous(),
            KeyCode::Char('c') => self.cycle_category(),
            KeyCode::Char('d') => self.cycle_difficulty(),
            KeyCode::Enter => {
                if let Some(course) = self.highlighted() {
                    event_tx.send(AppEvent::SelectCourse(course.clone()))?;
                }
            }
            _ => return Ok(false),
        }

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use assert_matches::assert_matches;
    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn enter_selects_highlighted_course() {
        let (tx, rx) = mpsc::channel();
        let mut view = CoursesView::new();

        view.process_event(&press(KeyCode::Char('k')), &tx).unwrap();
        view.process_event(&press(KeyCode::Enter), &tx).unwrap();

        assert_matches!(rx.try_recv(), Ok(AppEvent::SelectCourse(c)) if c.id == "6");
    }

    #[test]
    fn enter_with_no_match_sends_nothing() {
        let (tx, rx) = mpsc::channel();
        let mut view = CoursesView::new();

        // Design, then advanced: no such course.
        view.process_event(&press(KeyCode::Char('c')), &tx).unwrap();
        view.process_event(&press(KeyCode::Char('c')), &tx).unwrap();
        for _ in 0..3 {
            view.process_event(&press(KeyCode::Char('d')), &tx).unwrap();
        }
        view.process_event(&press(KeyCode::Enter), &tx).unwrap();

        assert!(rx.try_recv().is_err());
    }
}
