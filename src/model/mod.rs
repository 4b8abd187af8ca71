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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application, such as
//! videos, courses and the signed-in user, along with the playlist session
//! that drives the distraction-free player.

pub(crate) mod catalog;
pub(crate) mod session;

/// One playable item of a playlist or course.
///
/// Equality is by `id` only, two records with the same identity compare equal
/// even when their notes or watched flag differ.
#[derive(Debug, Clone)]
pub(crate) struct Video {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) description: String,
    /// Ordinal within the originating playlist, for display only.
    pub(crate) position: u32,
    pub(crate) duration: Option<String>,
    pub(crate) watched: bool,
    pub(crate) notes: String,
    /// External platform identifier, only read by the rendering layer.
    pub(crate) media_ref: Option<String>,
}

impl Video {
    pub(crate) fn new(id: impl Into<String>, title: impl Into<String>, position: u32) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            position,
            duration: None,
            watched: false,
            notes: String::new(),
            media_ref: None,
        }
    }

    pub(crate) fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub(crate) fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    pub(crate) fn with_media_ref(mut self, media_ref: impl Into<String>) -> Self {
        self.media_ref = Some(media_ref.into());
        self
    }

    pub(crate) fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub(crate) fn watched(mut self) -> Self {
        self.watched = true;
        self
    }

    pub(crate) fn has_notes(&self) -> bool {
        !self.notes.is_empty()
    }
}

impl PartialEq for Video {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Video {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Plan {
    Free,
    Pro,
    Enterprise,
}

impl Plan {
    pub(crate) fn label(&self) -> &'static str {
        match self {
            Plan::Free => "Free",
            Plan::Pro => "Pro",
            Plan::Enterprise => "Enterprise",
        }
    }

    /// The next plan up, `None` once on the top plan.
    pub(crate) fn upgrade(&self) -> Option<Plan> {
        match self {
            Plan::Free => Some(Plan::Pro),
            Plan::Pro => Some(Plan::Enterprise),
            Plan::Enterprise => None,
        }
    }
}

/// The signed-in user, accepted as-is from the login screen.
#[derive(Debug, Clone)]
pub(crate) struct User {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) plan: Plan,
}

impl User {
    /// Builds a mock user for the given display name.
    pub(crate) fn mock(name: &str) -> Self {
        let name = name.trim();
        let handle: String = name
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(".")
            .to_lowercase();

        Self {
            id: format!("user-{}", handle),
            name: name.to_string(),
            email: format!("{}@example.com", handle),
            plan: Plan::Free,
        }
    }
}

/// Learning statistics shown on the dashboard and profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LearnerStats {
    pub(crate) total_courses: u32,
    pub(crate) completed_courses: u32,
    pub(crate) total_hours: u32,
    pub(crate) current_streak: u32,
    pub(crate) certificates: u32,
}

impl LearnerStats {
    /// Fixed figures, there is no learning history behind them.
    pub(crate) fn mock() -> Self {
        Self {
            total_courses: 12,
            completed_courses: 8,
            total_hours: 156,
            current_streak: 7,
            certificates: 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub(crate) const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    pub(crate) fn label(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Category {
    Programming,
    Design,
    Business,
    Marketing,
    DataScience,
}

impl Category {
    pub(crate) const ALL: [Category; 5] = [
        Category::Programming,
        Category::Design,
        Category::Business,
        Category::Marketing,
        Category::DataScience,
    ];

    pub(crate) fn label(&self) -> &'static str {
        match self {
            Category::Programming => "Programming",
            Category::Design => "Design",
            Category::Business => "Business",
            Category::Marketing => "Marketing",
            Category::DataScience => "Data Science",
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Course {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) category: Category,
    pub(crate) instructor: String,
    pub(crate) duration: String,
    pub(crate) lessons: u32,
    pub(crate) videos: Vec<Video>,
    pub(crate) difficulty: Difficulty,
    pub(crate) rating: f32,
    pub(crate) students: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_equality_is_by_id() {
        let a = Video::new("1", "Intro", 1);
        let b = Video::new("1", "Renamed", 7).watched().with_notes("x");
        let c = Video::new("2", "Intro", 1);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn mock_user_derives_email_from_name() {
        let user = User::mock("  Ada Lovelace ");
        assert_eq!(user.name, "Ada Lovelace");
        assert_eq!(user.email, "ada.lovelace@example.com");
        assert_eq!(user.plan, Plan::Free);
    }

    #[test]
    fn plan_upgrades_stop_at_enterprise() {
        assert_eq!(Plan::Free.upgrade(), Some(Plan::Pro));
        assert_eq!(Plan::Pro.upgrade(), Some(Plan::Enterprise));
        assert_eq!(Plan::Enterprise.upgrade(), None);
    }
}
