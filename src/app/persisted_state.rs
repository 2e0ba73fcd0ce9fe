// SPDX-License-Identifier: MPL-2.0
//! Gallery state persistence using CBOR format.
//!
//! This is the gallery's durable storage: small pieces of UI state that
//! survive restarts but are not user preferences (those live in
//! `settings.toml`). Today it holds one flag, whether the lightbox
//! controls footer is shown.
//!
//! # Path Resolution
//!
//! 1. `load_from()`/`save_to()` with an explicit directory
//! 2. `ICED_GALLERY_DATA_DIR` environment variable
//! 3. Platform-specific data directory

use super::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// State file name within the app data directory.
const STATE_FILE: &str = "state.cbor";

/// Gallery state that persists across sessions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    /// Whether the lightbox controls footer is visible.
    #[serde(default = "default_controls_visible")]
    pub controls_visible: bool,
}

fn default_controls_visible() -> bool {
    true
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            controls_visible: default_controls_visible(),
        }
    }
}

impl AppState {
    /// Loads state from the default location.
    ///
    /// Returns `(state, warning_key)`. A missing file yields the defaults
    /// silently; an unreadable or corrupt one yields the defaults and a
    /// warning key.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        match fs::File::open(&path) {
            Ok(file) => match ciborium::from_reader(BufReader::new(file)) {
                Ok(state) => (state, None),
                Err(_) => (
                    Self::default(),
                    Some("notification-state-parse-error".to_string()),
                ),
            },
            Err(_) => (
                Self::default(),
                Some("notification-state-read-error".to_string()),
            ),
        }
    }

    /// Saves state to the default location, returning a warning key on failure.
    pub fn save(&self) -> Option<String> {
        self.save_to(None)
    }

    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return Some("notification-state-path-error".to_string());
        };

        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return Some("notification-state-dir-error".to_string());
            }
        }

        match fs::File::create(&path) {
            Ok(file) => {
                if ciborium::into_writer(self, BufWriter::new(file)).is_err() {
                    return Some("notification-state-write-error".to_string());
                }
                None
            }
            Err(_) => Some("notification-state-create-error".to_string()),
        }
    }

    fn state_file_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(STATE_FILE);
            path
        })
    }
}

/// Where the gallery state is read from and written to.
///
/// `None` follows the standard resolution; `Some` pins a directory, which
/// is how tests and `--data-dir` keep sessions isolated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateStore {
    base_dir: Option<PathBuf>,
}

impl StateStore {
    #[must_use]
    pub fn new(base_dir: Option<PathBuf>) -> Self {
        Self { base_dir }
    }

    pub fn load(&self) -> (AppState, Option<String>) {
        AppState::load_from(self.base_dir.clone())
    }

    pub fn save(&self, state: &AppState) -> Option<String> {
        state.save_to(self.base_dir.clone())
    }
}
