// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[scroll]` - Scroll thresholds and rate limiting
//! - `[toast]` - Notification timings
//! - `[typewriter]` - Hero heading timings
//! - `[contact]` - Contact form submission delay
//!
//! Every field is optional. Missing fields take the values in [`defaults`];
//! out-of-range values are clamped when turned into runtime [`Settings`].
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `FOLIO_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use folio::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("zh-CN".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::scroll::ScrollThresholds;
use crate::domain::typewriter::TypewriterTiming;
use crate::effects::Settings;
use crate::error::{Error, Result};
use crate::ui::notifications::Timing;
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
    /// UI language code (e.g., "en-US", "zh-CN").
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

/// Scroll reactor settings, in logical pixels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScrollConfig {
    #[serde(
        default = "default_navbar_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub navbar_threshold: Option<u32>,

    #[serde(
        default = "default_back_to_top_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub back_to_top_threshold: Option<u32>,

    /// How far above a section's top its activation range starts.
    #[serde(
        default = "default_section_activation_offset",
        skip_serializing_if = "Option::is_none"
    )]
    pub section_activation_offset: Option<u32>,

    /// Navbar height subtracted from anchor scroll targets.
    #[serde(
        default = "default_anchor_offset",
        skip_serializing_if = "Option::is_none"
    )]
    pub anchor_offset: Option<u32>,

    /// Minimum spacing between processed scroll notifications.
    #[serde(
        default = "default_rate_limit_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub rate_limit_ms: Option<u64>,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            navbar_threshold: default_navbar_threshold(),
            back_to_top_threshold: default_back_to_top_threshold(),
            section_activation_offset: default_section_activation_offset(),
            anchor_offset: default_anchor_offset(),
            rate_limit_ms: default_rate_limit_ms(),
        }
    }
}

/// Toast notification timings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToastConfig {
    #[serde(
        default = "default_toast_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration_ms: Option<u64>,

    #[serde(
        default = "default_toast_slide_in_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub slide_in_delay_ms: Option<u64>,

    #[serde(
        default = "default_toast_slide_out_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub slide_out_ms: Option<u64>,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_toast_duration_ms(),
            slide_in_delay_ms: default_toast_slide_in_delay_ms(),
            slide_out_ms: default_toast_slide_out_ms(),
        }
    }
}

/// Hero typewriter timings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TypewriterConfig {
    #[serde(
        default = "default_typewriter_start_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_delay_ms: Option<u64>,

    #[serde(
        default = "default_typewriter_char_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub char_interval_ms: Option<u64>,

    #[serde(
        default = "default_typewriter_cursor_linger_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub cursor_linger_ms: Option<u64>,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            start_delay_ms: default_typewriter_start_delay_ms(),
            char_interval_ms: default_typewriter_char_interval_ms(),
            cursor_linger_ms: default_typewriter_cursor_linger_ms(),
        }
    }
}

/// Contact form settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactConfig {
    /// Simulated submission latency.
    #[serde(
        default = "default_submit_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub submit_delay_ms: Option<u64>,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: default_submit_delay_ms(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub scroll: ScrollConfig,

    #[serde(default)]
    pub toast: ToastConfig,

    #[serde(default)]
    pub typewriter: TypewriterConfig,

    #[serde(default)]
    pub contact: ContactConfig,
}

impl Config {
    /// Scroll thresholds, clamped to their bounds.
    #[must_use]
    pub fn thresholds(&self) -> ScrollThresholds {
        let px = |value: Option<u32>, default: u32| {
            value.unwrap_or(default).min(MAX_SCROLL_THRESHOLD)
        };
        ScrollThresholds {
            navbar_scrolled: px(self.scroll.navbar_threshold, DEFAULT_NAVBAR_THRESHOLD),
            back_to_top: px(self.scroll.back_to_top_threshold, DEFAULT_BACK_TO_TOP_THRESHOLD),
            section_activation: px(
                self.scroll.section_activation_offset,
                DEFAULT_SECTION_ACTIVATION_OFFSET,
            ),
            anchor: px(self.scroll.anchor_offset, DEFAULT_ANCHOR_OFFSET),
        }
    }

    #[must_use]
    pub fn rate_limit(&self) -> Duration {
        millis(
            self.scroll.rate_limit_ms,
            DEFAULT_RATE_LIMIT_MS,
            MIN_RATE_LIMIT_MS,
            MAX_RATE_LIMIT_MS,
        )
    }

    #[must_use]
    pub fn toast_timing(&self) -> Timing {
        Timing {
            slide_in_delay: millis(
                self.toast.slide_in_delay_ms,
                DEFAULT_TOAST_SLIDE_IN_DELAY_MS,
                0,
                MAX_TOAST_TRANSITION_MS,
            ),
            display: millis(
                self.toast.duration_ms,
                DEFAULT_TOAST_DURATION_MS,
                MIN_TOAST_DURATION_MS,
                MAX_TOAST_DURATION_MS,
            ),
            slide: millis(
                self.toast.slide_out_ms,
                DEFAULT_TOAST_SLIDE_OUT_MS,
                0,
                MAX_TOAST_TRANSITION_MS,
            ),
        }
    }

    #[must_use]
    pub fn typewriter_timing(&self) -> TypewriterTiming {
        TypewriterTiming {
            start_delay: millis(
                self.typewriter.start_delay_ms,
                DEFAULT_TYPEWRITER_START_DELAY_MS,
                0,
                MAX_TYPEWRITER_DELAY_MS,
            ),
            char_interval: millis(
                self.typewriter.char_interval_ms,
                DEFAULT_TYPEWRITER_CHAR_INTERVAL_MS,
                MIN_TYPEWRITER_CHAR_INTERVAL_MS,
                MAX_TYPEWRITER_CHAR_INTERVAL_MS,
            ),
            cursor_linger: millis(
                self.typewriter.cursor_linger_ms,
                DEFAULT_TYPEWRITER_CURSOR_LINGER_MS,
                0,
                MAX_TYPEWRITER_DELAY_MS,
            ),
        }
    }

    #[must_use]
    pub fn submit_delay(&self) -> Duration {
        millis(
            self.contact.submit_delay_ms,
            DEFAULT_SUBMIT_DELAY_MS,
            0,
            MAX_SUBMIT_DELAY_MS,
        )
    }

    /// Runtime settings for the effects controller.
    #[must_use]
    pub fn effects_settings(&self) -> Settings {
        Settings {
            thresholds: self.thresholds(),
            rate_limit: self.rate_limit(),
            toast: self.toast_timing(),
            typewriter: self.typewriter_timing(),
            submit_delay: self.submit_delay(),
        }
    }
}

fn millis(value: Option<u64>, default: u64, min: u64, max: u64) -> Duration {
    Duration::from_millis(value.unwrap_or(default).clamp(min, max))
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_navbar_threshold() -> Option<u32> {
    Some(DEFAULT_NAVBAR_THRESHOLD)
}

fn default_back_to_top_threshold() -> Option<u32> {
    Some(DEFAULT_BACK_TO_TOP_THRESHOLD)
}

fn default_section_activation_offset() -> Option<u32> {
    Some(DEFAULT_SECTION_ACTIVATION_OFFSET)
}

fn default_anchor_offset() -> Option<u32> {
    Some(DEFAULT_ANCHOR_OFFSET)
}

fn default_rate_limit_ms() -> Option<u64> {
    Some(DEFAULT_RATE_LIMIT_MS)
}

fn default_toast_duration_ms() -> Option<u64> {
    Some(DEFAULT_TOAST_DURATION_MS)
}

fn default_toast_slide_in_delay_ms() -> Option<u64> {
    Some(DEFAULT_TOAST_SLIDE_IN_DELAY_MS)
}

fn default_toast_slide_out_ms() -> Option<u64> {
    Some(DEFAULT_TOAST_SLIDE_OUT_MS)
}

fn default_typewriter_start_delay_ms() -> Option<u64> {
    Some(DEFAULT_TYPEWRITER_START_DELAY_MS)
}

fn default_typewriter_char_interval_ms() -> Option<u64> {
    Some(DEFAULT_TYPEWRITER_CHAR_INTERVAL_MS)
}

fn default_typewriter_cursor_linger_ms() -> Option<u64> {
    Some(DEFAULT_TYPEWRITER_CURSOR_LINGER_MS)
}

fn default_submit_delay_ms() -> Option<u64> {
    Some(DEFAULT_SUBMIT_DELAY_MS)
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

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning to show.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(error) => {
                    tracing::warn!(
                        path = %path.display(),
                        %error,
                        "falling back to default settings"
                    );
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

// =============================================================================
// Save Functions
// =============================================================================

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

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("zh-CN".to_string()),
                theme_mode: ThemeMode::Light,
            },
            scroll: ScrollConfig {
                navbar_threshold: Some(80),
                rate_limit_ms: Some(32),
                ..ScrollConfig::default()
            },
            toast: ToastConfig {
                duration_ms: Some(3000),
                ..ToastConfig::default()
            },
            ..Config::default()
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(!message.is_empty()),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn partial_file_fills_missing_fields_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[scroll]\nnavbar_threshold = 120\n").expect("write file");

        let loaded = load_from_path(&config_path).expect("partial config should load");
        assert_eq!(loaded.scroll.navbar_threshold, Some(120));
        assert_eq!(
            loaded.scroll.back_to_top_threshold,
            Some(DEFAULT_BACK_TO_TOP_THRESHOLD)
        );
        assert_eq!(loaded.toast, ToastConfig::default());
        assert_eq!(loaded.general.theme_mode, ThemeMode::System);
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let result: std::result::Result<Config, _> =
            toml::from_str("[general]\ntheme_mode = \"sepia\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config =
            toml::from_str("[general]\ntheme_mode = \"Dark\"\n").expect("valid config");
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn default_settings_match_component_defaults() {
        let settings = Config::default().effects_settings();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = Config {
            scroll: ScrollConfig {
                rate_limit_ms: Some(0),
                anchor_offset: Some(u32::MAX),
                ..ScrollConfig::default()
            },
            typewriter: TypewriterConfig {
                char_interval_ms: Some(5_000),
                ..TypewriterConfig::default()
            },
            ..Config::default()
        };

        assert_eq!(config.rate_limit(), Duration::from_millis(MIN_RATE_LIMIT_MS));
        assert_eq!(config.thresholds().anchor, MAX_SCROLL_THRESHOLD);
        assert_eq!(
            config.typewriter_timing().char_interval,
            Duration::from_millis(MAX_TYPEWRITER_CHAR_INTERVAL_MS)
        );
    }

    #[test]
    fn missing_values_fall_back_to_defaults() {
        let config = Config {
            contact: ContactConfig {
                submit_delay_ms: None,
            },
            ..Config::default()
        };
        assert_eq!(
            config.submit_delay(),
            Duration::from_millis(DEFAULT_SUBMIT_DELAY_MS)
        );
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let config = Config {
            general: GeneralConfig {
                language: Some("en-US".to_string()),
                theme_mode: ThemeMode::Dark,
            },
            contact: ContactConfig {
                submit_delay_ms: Some(500),
            },
            ..Config::default()
        };

        save_with_override(&config, Some(base_dir.clone())).expect("save should succeed");

        let expected_path = base_dir.join("settings.toml");
        assert!(expected_path.exists(), "config file should exist");

        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none(), "load should succeed without warning");
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
        assert_eq!(loaded.contact.submit_delay_ms, Some(500));
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join("settings.toml"), "not = valid = toml").expect("write file");

        let (config, warning) = load_with_override(Some(base_dir));
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
        assert_eq!(config, Config::default());
    }
}
