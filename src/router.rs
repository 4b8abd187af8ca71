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

//! Page selection.
//!
//! The router records which screen the user asked for together with the
//! context that screen needs (signed-in user, selected course, live player),
//! and resolves the screen actually shown when that context is missing.
//!
//! The player, and with it the playlist session, is owned here. Navigating to
//! any other page drops it, a later visit to the player never resumes an old
//! session.

use crate::{
    components::{CourseViewer, PlayerView},
    model::{Course, User},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Page {
    Home,
    Login,
    Dashboard,
    Courses,
    Course,
    Profile,
    Playlist,
    Player,
}

impl Page {
    pub(crate) fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Login => "Sign in",
            Page::Dashboard => "Dashboard",
            Page::Courses => "Courses",
            Page::Course => "Course",
            Page::Profile => "Profile",
            Page::Playlist => "Playlist",
            Page::Player => "Player",
        }
    }
}

pub(crate) struct Router {
    page: Page,
    user: Option<User>,
    course: Option<CourseViewer>,
    player: Option<PlayerView>,
}

impl Router {
    pub(crate) fn new() -> Self {
        Self {
            page: Page::Home,
            user: None,
            course: None,
            player: None,
        }
    }

    /// The page to display, after applying the context guards.
    pub(crate) fn page(&self) -> Page {
        match self.page {
            Page::Dashboard | Page::Profile if self.user.is_none() => Page::Login,
            Page::Course if self.course.is_none() => {
                if self.user.is_some() {
                    Page::Dashboard
                } else {
                    Page::Login
                }
            }
            Page::Player if self.player.is_none() => Page::Playlist,
            page => page,
        }
    }

    pub(crate) fn navigate(&mut self, page: Page) {
        if page != Page::Player && self.player.take().is_some() {
            log::info!("Discarding playlist session");
        }
        log::debug!("Navigating to {:?}", page);
        self.page = page;
    }

    pub(crate) fn login(&mut self, user: User) {
        self.user = Some(user);
        self.navigate(Page::Dashboard);
    }

    pub(crate) fn logout(&mut self) {
        self.user = None;
        self.course = None;
        self.navigate(Page::Home);
    }

    /// Replaces the signed-in user's record, ignored when nobody is signed in.
    pub(crate) fn update_user(&mut self, user: User) {
        if self.user.is_some() {
            self.user = Some(user);
        }
    }

    pub(crate) fn select_course(&mut self, course: Course) {
        self.course = Some(CourseViewer::new(course));
        self.navigate(Page::Course);
    }

    /// Installs a new player, replacing any previous one, and shows it.
    pub(crate) fn open_player(&mut self, player: PlayerView) {
        self.player = Some(player);
        self.page = Page::Player;
    }

    pub(crate) fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub(crate) fn course(&self) -> Option<&CourseViewer> {
        self.course.as_ref()
    }

    pub(crate) fn course_mut(&mut self) -> Option<&mut CourseViewer> {
        self.course.as_mut()
    }

    pub(crate) fn player(&self) -> Option<&PlayerView> {
        self.player.as_ref()
    }

    pub(crate) fn player_mut(&mut self) -> Option<&mut PlayerView> {
        self.player.as_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Video, catalog::Catalog, session::PlaylistSession};

    fn player() -> PlayerView {
        let videos = vec![Video::new("a", "A", 1), Video::new("b", "B", 2)];
        PlayerView::new(PlaylistSession::new("Demo", videos).unwrap(), true, true)
    }

    #[test]
    fn starts_at_home() {
        assert_eq!(Router::new().page(), Page::Home);
    }

    #[test]
    fn user_pages_require_login() {
        let mut router = Router::new();
        router.navigate(Page::Dashboard);
        assert_eq!(router.page(), Page::Login);
        router.navigate(Page::Profile);
        assert_eq!(router.page(), Page::Login);

        router.login(User::mock("Grace"));
        assert_eq!(router.page(), Page::Dashboard);
        router.navigate(Page::Profile);
        assert_eq!(router.page(), Page::Profile);
    }

    #[test]
    fn course_page_requires_selection() {
        let mut router = Router::new();
        router.navigate(Page::Course);
        assert_eq!(router.page(), Page::Login);

        router.login(User::mock("Grace"));
        router.navigate(Page::Course);
        assert_eq!(router.page(), Page::Dashboard);

        let course = Catalog::new().courses()[1].clone();
        router.select_course(course);
        assert_eq!(router.page(), Page::Course);
        assert_eq!(router.course().unwrap().course().title, "Advanced JavaScript");
    }

    #[test]
    fn logout_clears_context() {
        let mut router = Router::new();
        router.login(User::mock("Grace"));
        router.select_course(Catalog::new().courses()[0].clone());

        router.logout();

        assert_eq!(router.page(), Page::Home);
        assert!(router.user().is_none());
        assert!(router.course().is_none());
    }

    #[test]
    fn update_user_replaces_signed_in_record() {
        let mut router = Router::new();
        router.update_user(User::mock("Nobody"));
        assert!(router.user().is_none());

        router.login(User::mock("Grace"));
        router.navigate(Page::Profile);
        let mut updated = User::mock("Grace Hopper");
        updated.email = "grace@navy.mil".to_string();
        router.update_user(updated);

        assert_eq!(router.page(), Page::Profile);
        assert_eq!(router.user().unwrap().name, "Grace Hopper");
        assert_eq!(router.user().unwrap().email, "grace@navy.mil");
    }

    #[test]
    fn player_is_discarded_when_leaving() {
        let mut router = Router::new();
        router.open_player(player());
        assert_eq!(router.page(), Page::Player);

        router.player_mut().unwrap().next();
        router.navigate(Page::Courses);
        assert!(router.player().is_none());

        router.navigate(Page::Player);
        assert_eq!(router.page(), Page::Playlist);
    }

    #[test]
    fn navigating_to_player_keeps_live_session() {
        let mut router = Router::new();
        router.open_player(player());
        router.player_mut().unwrap().next();

        router.navigate(Page::Player);

        assert_eq!(router.player().unwrap().session().current_index(), 1);
    }
}
