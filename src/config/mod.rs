// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[display]` - Lightbox zoom step and fit margin
//! - `[interaction]` - Click debounce, lens hold and drag threshold
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_GALLERY_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_gallery::config;
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("fr".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Lightbox display settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Zoom increment for the `+` / `-` keys (0.1 = 10%).
    #[serde(default = "default_zoom_step", skip_serializing_if = "Option::is_none")]
    pub zoom_step: Option<f32>,

    /// Share of the viewport a fitted image may occupy.
    #[serde(default = "default_fit_margin", skip_serializing_if = "Option::is_none")]
    pub fit_margin: Option<f32>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            zoom_step: default_zoom_step(),
            fit_margin: default_fit_margin(),
        }
    }
}

/// Pointer interaction settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InteractionConfig {
    /// Double-click window for thumbnails, in milliseconds.
    #[serde(
        default = "default_double_click_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub double_click_ms: Option<u64>,

    /// Press duration before the lens engages, in milliseconds.
    #[serde(
        default = "default_lens_hold_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub lens_hold_ms: Option<u64>,

    /// Whether press-and-hold lens zoom is available.
    #[serde(
        default = "default_lens_enabled",
        skip_serializing_if = "Option::is_none"
    )]
    pub lens_enabled: Option<bool>,

    /// Pointer travel that turns a press into a drag, in pixels.
    #[serde(
        default = "default_drag_threshold_px",
        skip_serializing_if = "Option::is_none"
    )]
    pub drag_threshold_px: Option<f32>,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            double_click_ms: default_double_click_ms(),
            lens_hold_ms: default_lens_hold_ms(),
            lens_enabled: default_lens_enabled(),
            drag_threshold_px: default_drag_threshold_px(),
        }
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub interaction: InteractionConfig,
}

/// Validated interaction tuning handed to the gallery controller.
///
/// Every field is clamped into its supported range, so a hand-edited
/// `settings.toml` can never request a nonsensical value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tuning {
    pub zoom_step: f32,
    pub fit_margin: f32,
    pub double_click: Duration,
    pub lens_hold: Duration,
    pub lens_enabled: bool,
    pub drag_threshold_px: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl Tuning {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let display = &config.display;
        let interaction = &config.interaction;

        Self {
            zoom_step: display
                .zoom_step
                .unwrap_or(DEFAULT_ZOOM_STEP)
                .clamp(MIN_ZOOM_STEP, MAX_ZOOM_STEP),
            fit_margin: display
                .fit_margin
                .unwrap_or(DEFAULT_FIT_MARGIN)
                .clamp(MIN_FIT_MARGIN, MAX_FIT_MARGIN),
            double_click: Duration::from_millis(
                interaction
                    .double_click_ms
                    .unwrap_or(DEFAULT_DOUBLE_CLICK_MS)
                    .clamp(MIN_DOUBLE_CLICK_MS, MAX_DOUBLE_CLICK_MS),
            ),
            lens_hold: Duration::from_millis(
                interaction
                    .lens_hold_ms
                    .unwrap_or(DEFAULT_LENS_HOLD_MS)
                    .clamp(MIN_LENS_HOLD_MS, MAX_LENS_HOLD_MS),
            ),
            lens_enabled: interaction.lens_enabled.unwrap_or(true),
            drag_threshold_px: interaction
                .drag_threshold_px
                .unwrap_or(DEFAULT_DRAG_THRESHOLD_PX)
                .clamp(0.0, MAX_DRAG_THRESHOLD_PX),
        }
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_zoom_step() -> Option<f32> {
    Some(DEFAULT_ZOOM_STEP)
}

fn default_fit_margin() -> Option<f32> {
    Some(DEFAULT_FIT_MARGIN)
}

fn default_double_click_ms() -> Option<u64> {
    Some(DEFAULT_DOUBLE_CLICK_MS)
}

fn default_lens_hold_ms() -> Option<u64> {
    Some(DEFAULT_LENS_HOLD_MS)
}

fn default_lens_enabled() -> Option<bool> {
    Some(true)
}

fn default_drag_threshold_px() -> Option<f32> {
    Some(DEFAULT_DRAG_THRESHOLD_PX)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load / Save
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(_) => {
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}
