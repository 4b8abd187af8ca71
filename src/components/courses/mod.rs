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

//! Course browser state.
//!
//! This module holds the mock catalog, the active category and difficulty
//! filter, and the highlight within the filtered list.

mod event;
mod render;

use ratatui::widgets::ListState;

use crate::{
    components::{goto_next, goto_previous},
    model::{
        Course,
        catalog::{Catalog, CourseFilter},
    },
};

pub(crate) struct CoursesView {
    catalog: Catalog,
    filter: CourseFilter,
    list_state: ListState,
}

impl CoursesView {
    pub(crate) fn new() -> Self {
        Self {
            catalog: Catalog::new(),
            filter: CourseFilter::default(),
            list_state: ListState::default().with_selected(Some(0)),
        }
    }

    pub(crate) fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub(crate) fn filtered(&self) -> Vec<&Course> {
        self.filter.apply(self.catalog.courses())
    }

    pub(crate) fn highlighted(&self) -> Option<&Course> {
        let index = self.list_state.selected()?;
        self.filtered().get(index).copied()
    }

    fn next(&mut self) {
        let len = self.filtered().len();
        goto_next(&mut self.list_state, len);
    }

    fn previous(&mut self) {
        let len = self.filtered().len();
        goto_previous(&mut self.list_state, len);
    }

    fn cycle_category(&mut self) {
        self.filter.cycle_category();
        self.reset_highlight();
    }

    fn cycle_difficulty(&mut self) {
        self.filter.cycle_difficulty();
        self.reset_highlight();
    }

    fn reset_highlight(&mut self) {
        let selected = if self.filtered().is_empty() { None } else { Some(0) };
        self.list_state.select(selected);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Difficulty};

    #[test]
    fn filter_changes_reset_highlight() {
        let mut view = CoursesView::new();
        view.next();
        view.next();
        assert_eq!(view.highlighted().unwrap().id, "3");

        view.cycle_category();
        assert_eq!(view.filter.category, Some(Category::Programming));
        assert_eq!(view.highlighted().unwrap().id, "1");
    }

    #[test]
    fn empty_filter_result_has_no_highlight() {
        let mut view = CoursesView::new();
        view.filter.category = Some(Category::Design);
        view.filter.difficulty = None;
        view.cycle_difficulty();
        view.cycle_difficulty();
        view.cycle_difficulty();
        assert_eq!(view.filter.difficulty, Some(Difficulty::Advanced));
        assert!(view.highlighted().is_none());
    }
}
