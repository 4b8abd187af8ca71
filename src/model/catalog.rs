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

//! Mock course catalog.
//!
//! This module provides the static set of courses shown on the dashboard and
//! course browser, along with the category and difficulty filter applied to
//! them.

use crate::model::{Category, Course, Difficulty, Video};

/// Filter over the catalog, `None` matches every value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct CourseFilter {
    pub(crate) category: Option<Category>,
    pub(crate) difficulty: Option<Difficulty>,
}

impl CourseFilter {
    pub(crate) fn matches(&self, course: &Course) -> bool {
        let category_match = self.category.is_none_or(|c| c == course.category);
        let difficulty_match = self.difficulty.is_none_or(|d| d == course.difficulty);
        category_match && difficulty_match
    }

    /// Advances the category filter: all, then each category, then all again.
    pub(crate) fn cycle_category(&mut self) {
        self.category = cycle(&Category::ALL, self.category);
    }

    pub(crate) fn cycle_difficulty(&mut self) {
        self.difficulty = cycle(&Difficulty::ALL, self.difficulty);
    }

    pub(crate) fn apply<'a>(&self, courses: &'a [Course]) -> Vec<&'a Course> {
        courses.iter().filter(|c| self.matches(c)).collect()
    }
}

fn cycle<T: Copy + PartialEq>(values: &[T], current: Option<T>) -> Option<T> {
    match current {
        None => values.first().copied(),
        Some(value) => values
            .iter()
            .position(|v| *v == value)
            .and_then(|i| values.get(i + 1))
            .copied(),
    }
}

pub(crate) struct Catalog {
    courses: Vec<Course>,
}

impl Catalog {
    pub(crate) fn new() -> Self {
        Self {
            courses: mock_courses(),
        }
    }

    pub(crate) fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub(crate) fn recommended(&self) -> &[Course] {
        &self.courses[..self.courses.len().min(3)]
    }
}

// Every mock course shares the same four-lesson outline, the first lesson
// already watched and annotated.
fn course_videos() -> Vec<Video> {
    vec![
        Video::new("1", "Introduction to React", 1)
            .with_description("Learn the basics of React and its core concepts")
            .with_duration("15:30")
            .watched()
            .with_notes("React is a JavaScript library for building user interfaces"),
        Video::new("2", "Components and Props", 2)
            .with_description("Understanding React components and how to pass data")
            .with_duration("22:15"),
        Video::new("3", "State and Lifecycle", 3)
            .with_description("Managing component state and lifecycle methods")
            .with_duration("18:45"),
        Video::new("4", "Hooks in React", 4)
            .with_description("Using modern React hooks for state management")
            .with_duration("25:10"),
    ]
}

fn mock_courses() -> Vec<Course> {
    vec![
        Course {
            id: "1".to_string(),
            title: "React Fundamentals".to_string(),
            description: "Learn the basics of React development with hands-on projects".to_string(),
            category: Category::Programming,
            instructor: "Sarah Johnson".to_string(),
            duration: "8 hours".to_string(),
            lessons: 24,
            videos: course_videos(),
            difficulty: Difficulty::Beginner,
            rating: 4.8,
            students: 1240,
        },
        Course {
            id: "2".to_string(),
            title: "Advanced JavaScript".to_string(),
            description: "Master modern JavaScript concepts and ES6+ features".to_string(),
            category: Category::Programming,
            instructor: "Mike Chen".to_string(),
            duration: "12 hours".to_string(),
            lessons: 36,
            videos: course_videos(),
            difficulty: Difficulty::Intermediate,
            rating: 4.9,
            students: 890,
        },
        Course {
            id: "3".to_string(),
            title: "UI/UX Design Principles".to_string(),
            description: "Create beautiful and functional user interfaces".to_string(),
            category: Category::Design,
            instructor: "Emma Davis".to_string(),
            duration: "6 hours".to_string(),
            lessons: 18,
            videos: course_videos(),
            difficulty: Difficulty::Beginner,
            rating: 4.7,
            students: 2100,
        },
        Course {
            id: "4".to_string(),
            title: "Digital Marketing Strategy".to_string(),
            description: "Develop comprehensive digital marketing campaigns".to_string(),
            category: Category::Marketing,
            instructor: "Alex Rodriguez".to_string(),
            duration: "10 hours".to_string(),
            lessons: 30,
            videos: course_videos(),
            difficulty: Difficulty::Intermediate,
            rating: 4.6,
            students: 1560,
        },
        Course {
            id: "5".to_string(),
            title: "Data Science Fundamentals".to_string(),
            description: "Introduction to data analysis and machine learning".to_string(),
            category: Category::DataScience,
            instructor: "Dr. Lisa Wang".to_string(),
            duration: "15 hours".to_string(),
            lessons: 42,
            videos: course_videos(),
            difficulty: Difficulty::Advanced,
            rating: 4.9,
            students: 720,
        },
        Course {
            id: "6".to_string(),
            title: "Business Strategy & Growth".to_string(),
            description: "Strategic planning and business development techniques".to_string(),
            category: Category::Business,
            instructor: "James Wilson".to_string(),
            duration: "9 hours".to_string(),
            lessons: 27,
            videos: course_videos(),
            difficulty: Difficulty::Intermediate,
            rating: 4.5,
            students: 980,
        },
    ]
}
