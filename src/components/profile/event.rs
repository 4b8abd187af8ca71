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

//! Event routing for the profile page.
//!
//! Outside the form only `e`, `u` and Esc are taken, every other key falls
//! through to the global bindings. While the form is open it owns the
//! keyboard.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tui_input::backend::crossterm::EventHandler;

use crate::{actions::events::AppEvent, components::ProfileView, model::User, router::Page};

impl ProfileView {
    /// Handles a key press for the signed-in `user`, returning `true` if it
    /// was consumed.
    pub(crate) fn process_event(
        &mut self,
        event: &Event,
        user: &User,
        event_tx: &Sender<AppEvent>,
    ) -> Result<bool> {
        let Event::Key(key_event) = event else {
            return Ok(false);
        };

        if !self.editing {
            match key_event.code {
                KeyCode::Char('e') => self.begin_edit(user),
                KeyCode::Char('u') => match user.plan.upgrade() {
                    Some(plan) => {
                        self.error = None;
                        event_tx.send(AppEvent::UserUpdated(User {
                            plan,
                            ..user.clone()
                        }))?;
                    }
                    None => self.error = Some("Already on the top plan".to_string()),
                },
                KeyCode::Esc => event_tx.send(AppEvent::Navigate(Page::Dashboard))?,
                _ => return Ok(false),
            }
            return Ok(true);
        }

        match key_event.code {
            KeyCode::Esc => self.cancel_edit(),
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => self.toggle_field(),
            KeyCode::Enter => match self.edited(user) {
                Ok(updated) => {
                    self.cancel_edit();
                    event_tx.send(AppEvent::UserUpdated(updated))?;
                }
                Err(e) => self.error = Some(e),
            },
            _ => {
                if self.active_input_mut().handle_event(event).is_some() {
                    self.error = None;
                }
            }
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
    use crate::model::Plan;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(view: &mut ProfileView, user: &User, tx: &Sender<AppEvent>, text: &str) {
        for c in text.chars() {
            view.process_event(&press(KeyCode::Char(c)), user, tx).unwrap();
        }
    }

    #[test]
    fn other_keys_fall_through_until_editing() {
        let (tx, rx) = mpsc::channel();
        let user = User::mock("Ada");
        let mut view = ProfileView::new();

        assert!(!view.process_event(&press(KeyCode::Char('q')), &user, &tx).unwrap());
        assert!(view.process_event(&press(KeyCode::Char('e')), &user, &tx).unwrap());
        assert!(view.is_editing());
        assert!(view.process_event(&press(KeyCode::Char('q')), &user, &tx).unwrap());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn save_sends_updated_user() {
        let (tx, rx) = mpsc::channel();
        let user = User::mock("Ada");
        let mut view = ProfileView::new();

        view.process_event(&press(KeyCode::Char('e')), &user, &tx).unwrap();
        type_text(&mut view, &user, &tx, " King");
        view.process_event(&press(KeyCode::Tab), &user, &tx).unwrap();
        for _ in 0.."ada@example.com".len() {
            view.process_event(&press(KeyCode::Backspace), &user, &tx).unwrap();
        }
        type_text(&mut view, &user, &tx, "ada@analytical.org");
        view.process_event(&press(KeyCode::Enter), &user, &tx).unwrap();

        assert!(!view.is_editing());
        assert_matches!(
            rx.try_recv(),
            Ok(AppEvent::UserUpdated(updated))
                if updated.name == "Ada King"
                    && updated.email == "ada@analytical.org"
                    && updated.id == user.id
                    && updated.plan == Plan::Free
        );
    }

    #[test]
    fn cancel_discards_draft() {
        let (tx, rx) = mpsc::channel();
        let user = User::mock("Ada");
        let mut view = ProfileView::new();

        view.process_event(&press(KeyCode::Char('e')), &user, &tx).unwrap();
        type_text(&mut view, &user, &tx, "xyz");
        view.process_event(&press(KeyCode::Esc), &user, &tx).unwrap();

        assert!(!view.is_editing());
        assert!(rx.try_recv().is_err());

        // Reopening starts again from the stored user.
        view.process_event(&press(KeyCode::Char('e')), &user, &tx).unwrap();
        assert_eq!(view.name.value(), "Ada");
    }

    #[test]
    fn blank_name_is_rejected() {
        let (tx, rx) = mpsc::channel();
        let user = User::mock("Al");
        let mut view = ProfileView::new();

        view.process_event(&press(KeyCode::Char('e')), &user, &tx).unwrap();
        view.process_event(&press(KeyCode::Backspace), &user, &tx).unwrap();
        view.process_event(&press(KeyCode::Backspace), &user, &tx).unwrap();
        view.process_event(&press(KeyCode::Enter), &user, &tx).unwrap();

        assert!(view.is_editing());
        assert_eq!(view.error(), Some("Name cannot be empty"));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn upgrade_moves_to_next_plan() {
        let (tx, rx) = mpsc::channel();
        let mut view = ProfileView::new();

        let user = User::mock("Ada");
        view.process_event(&press(KeyCode::Char('u')), &user, &tx).unwrap();
        assert_matches!(rx.try_recv(), Ok(AppEvent::UserUpdated(u)) if u.plan == Plan::Pro);

        let top = User {
            plan: Plan::Enterprise,
            ..user
        };
        view.process_event(&press(KeyCode::Char('u')), &top, &tx).unwrap();
        assert!(rx.try_recv().is_err());
        assert_eq!(view.error(), Some("Already on the top plan"));
    }
}
