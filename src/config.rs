//! TOML-based application settings.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveTime};
use chrono::format::{Item, StrftimeItems};
use serde::Deserialize;

use crate::domain::Region;
use crate::error::ConfigError;

/// Top-level settings parsed from TOML.
///
/// All fields have defaults, so an empty file (or no file at all) yields
/// [`AppConfig::default`]. Load with [`AppConfig::from_toml_file`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Where the appliance catalog lives.
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Settings for newly created scenarios.
    #[serde(default)]
    pub scenario: ScenarioDefaults,
    /// Input formats and defaults for the edit flow's time window.
    #[serde(default)]
    pub time_window: TimeWindowConfig,
    /// Evaluation settings.
    #[serde(default)]
    pub report: ReportConfig,
}

/// Appliance catalog location.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// Path to the catalog JSON file.
    pub path: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./appliances.json"),
        }
    }
}

/// Settings for `create_scenario`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScenarioDefaults {
    /// Prefix of generated names; the scenario count is appended (`scenario-3`).
    pub name_prefix: String,
    /// Region of the placeholder household.
    pub placeholder_region: Region,
}

impl Default for ScenarioDefaults {
    fn default() -> Self {
        Self {
            name_prefix: "scenario".to_string(),
            placeholder_region: Region::Asia,
        }
    }
}

/// Time window prompt settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimeWindowConfig {
    /// Default start time, written in `time_format`.
    pub default_start_time: String,
    /// Default end time, written in `time_format`.
    pub default_end_time: String,
    /// strftime pattern for date input.
    pub date_format: String,
    /// strftime pattern for time input.
    pub time_format: String,
}

impl Default for TimeWindowConfig {
    fn default() -> Self {
        Self {
            default_start_time: "00:00".to_string(),
            default_end_time: "23:59".to_string(),
            date_format: "%Y-%m-%d".to_string(),
            time_format: "%H:%M".to_string(),
        }
    }
}

/// Evaluation settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Fixed RNG seed; evaluations draw from OS entropy when unset.
    pub seed: Option<u64>,
}

impl AppConfig {
    /// Parses settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "config".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses settings from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.catalog.path.as_os_str().is_empty() {
            errors.push(ConfigError {
                field: "catalog.path".into(),
                message: "must not be empty".into(),
            });
        }

        if self.scenario.name_prefix.trim().is_empty() {
            errors.push(ConfigError {
                field: "scenario.name_prefix".into(),
                message: "must not be empty".into(),
            });
        }

        let tw = &self.time_window;
        for (field, pattern) in [
            ("time_window.date_format", &tw.date_format),
            ("time_window.time_format", &tw.time_format),
        ] {
            if !is_valid_pattern(pattern) {
                errors.push(ConfigError {
                    field: field.into(),
                    message: format!("\"{pattern}\" is not a valid strftime pattern"),
                });
            }
        }

        if is_valid_pattern(&tw.date_format) && !date_round_trips(&tw.date_format) {
            errors.push(ConfigError {
                field: "time_window.date_format".into(),
                message: format!(
                    "\"{}\" cannot read back the dates it renders (needs day, month and year)",
                    tw.date_format
                ),
            });
        }

        if is_valid_pattern(&tw.time_format) {
            for (field, value) in [
                ("time_window.default_start_time", &tw.default_start_time),
                ("time_window.default_end_time", &tw.default_end_time),
            ] {
                if NaiveTime::parse_from_str(value, &tw.time_format).is_err() {
                    errors.push(ConfigError {
                        field: field.into(),
                        message: format!(
                            "\"{value}\" does not match time_format \"{}\"",
                            tw.time_format
                        ),
                    });
                }
            }
        }

        errors
    }
}

fn is_valid_pattern(pattern: &str) -> bool {
    !pattern.is_empty() && !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}

/// Edit prompts offer today's date rendered with `pattern` as the default,
/// so the pattern must parse its own output back to the same date.
fn date_round_trips(pattern: &str) -> bool {
    let Some(sample) = NaiveDate::from_ymd_opt(2024, 6, 1) else {
        return false;
    };
    let mut rendered = String::new();
    if write!(rendered, "{}", sample.format(pattern)).is_err() {
        return false;
    }
    NaiveDate::parse_from_str(&rendered, pattern).is_ok_and(|date| date == sample)
}
