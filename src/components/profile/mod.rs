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

//! Profile settings.
//!
//! Shows the signed-in user alongside their learning stats, and holds the
//! name and email form while it is open. Saving hands an updated [`User`] to
//! the router, cancelling throws the draft away.

mod event;
mod render;

use tui_input::Input;

use crate::model::User;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Field {
    #[default]
    Name,
    Email,
}

#[derive(Debug, Default)]
pub(crate) struct ProfileView {
    name: Input,
    email: Input,
    field: Field,
    editing: bool,
    error: Option<String>,
}

impl ProfileView {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn is_editing(&self) -> bool {
        self.editing
    }

    pub(crate) fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Opens the form seeded from `user`.
    pub(crate) fn begin_edit(&mut self, user: &User) {
        self.name = Input::new(user.name.clone());
        self.email = Input::new(user.email.clone());
        self.field = Field::Name;
        self.editing = true;
        self.error = None;
    }

    pub(crate) fn cancel_edit(&mut self) {
        self.editing = false;
        self.error = None;
        self.name.reset();
        self.email.reset();
    }

    fn toggle_field(&mut self) {
        self.field = match self.field {
            Field::Name => Field::Email,
            Field::Email => Field::Name,
        };
    }

    fn active_input_mut(&mut self) -> &mut Input {
        match self.field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
        }
    }

    /// Applies the draft to `user`, keeping its id and plan.
    fn edited(&self, user: &User) -> Result<User, String> {
        let name = self.name.value().trim();
        let email = self.email.value().trim();

        if name.is_empty() {
            return Err("Name cannot be empty".to_string());
        }
        if !email.contains('@') {
            return Err("Please enter a valid email address".to_string());
        }

        Ok(User {
            name: name.to_string(),
            email: email.to_string(),
            ..user.clone()
        })
    }
}
