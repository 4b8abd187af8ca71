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

//! Course detail view.
//!
//! Shows one course's lessons and lets the user start a focus session over
//! them, beginning at the highlighted lesson.

mod event;
mod render;

use ratatui::widgets::ListState;

use crate::{
    components::{goto_next, goto_previous},
    model::Course,
};

pub(crate) struct CourseViewer {
    course: Course,
    list_state: ListState,
}

impl CourseViewer {
    pub(crate) fn new(course: Course) -> Self {
        let selected = if course.videos.is_empty() { None } else { Some(0) };
        Self {
            course,
            list_state: ListState::default().with_selected(selected),
        }
    }

    pub(crate) fn course(&self) -> &Course {
        &self.course
    }

    pub(crate) fn completed(&self) -> usize {
        self.course.videos.iter().filter(|v| v.watched).count()
    }

    fn next(&mut self) {
        goto_next(&mut self.list_state, self.course.videos.len());
    }

    fn previous(&mut self) {
        goto_previous(&mut self.list_state, self.course.videos.len());
    }
}
