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

//! Application configuration.
//!
//! This module manages the application configuration file and the log file
//! location derived from it.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "lectio";

const LOG_FILE_NAME: &str = "lectio.log";

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AppConfig {
    pub version: u32,
    /// Whether embedded videos should start playing when selected.
    pub autoplay: bool,
    /// Whether the player shows the playlist sidebar on entry.
    pub show_playlist: bool,
    pub log_file: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            autoplay: true,
            show_playlist: true,
            log_file: None,
        }
    }
}

impl AppConfig {
    /// Resolves the log file path, placing it beside the configuration file
    /// unless one is configured explicitly.
    pub fn log_path(&self) -> PathBuf {
        if let Some(path) = &self.log_file {
            return PathBuf::from(path);
        }

        confy::get_configuration_file_path(CONFIG_NAME, None)
            .ok()
            .and_then(|p| p.parent().map(|dir| dir.join(LOG_FILE_NAME)))
            .unwrap_or_else(|| PathBuf::from(LOG_FILE_NAME))
    }
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

pub fn save_config(cfg: &AppConfig) -> Result<(), confy::ConfyError> {
    confy::store(CONFIG_NAME, None, cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_log_file_wins() {
        let cfg = AppConfig {
            log_file: Some("/tmp/lectio-test.log".to_string()),
            ..AppConfig::default()
        };
        assert_eq!(cfg.log_path(), PathBuf::from("/tmp/lectio-test.log"));
    }

    #[test]
    fn defaults_show_sidebar_and_autoplay() {
        let cfg = AppConfig::default();
        assert!(cfg.autoplay);
        assert!(cfg.show_playlist);
        assert!(cfg.log_path().ends_with("lectio.log"));
    }
}
