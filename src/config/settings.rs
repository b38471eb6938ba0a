//! User settings for Dolla
//!
//! Display and report preferences: currency, feed length, chart window and
//! budget alert thresholds.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

use super::paths::DollaPaths;
use crate::error::DollaError;
use crate::models::Currency;
use crate::reports::ChartRange;
use crate::services::AlertThresholds;

/// User settings for Dolla
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency used when formatting totals
    #[serde(default)]
    pub currency: Currency,

    /// Number of rows in the recent transactions feed
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,

    /// Window shown by the cash flow chart
    #[serde(default)]
    pub chart_range: ChartRange,

    /// Budget alert bands
    #[serde(default)]
    pub thresholds: AlertThresholds,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_recent_limit() -> usize {
    10
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency: Currency::default(),
            recent_limit: default_recent_limit(),
            chart_range: ChartRange::default(),
            thresholds: AlertThresholds::default(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &DollaPaths) -> Result<Self, DollaError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| DollaError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                DollaError::Config(format!("Failed to parse settings file: {}", e))
            })?;
            settings.validate()?;

            tracing::debug!(path = %settings_path.display(), "loaded settings");
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &DollaPaths) -> Result<(), DollaError> {
        self.validate()?;
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| DollaError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| DollaError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    pub fn validate(&self) -> Result<(), DollaError> {
        if self.recent_limit == 0 {
            return Err(DollaError::Config("recent_limit must be at least 1".into()));
        }
        self.validate_date_format()?;
        self.thresholds.validate().map_err(DollaError::Config)
    }

    fn validate_date_format(&self) -> Result<(), DollaError> {
        let sample = NaiveDate::from_ymd_opt(2000, 1, 31).unwrap_or(NaiveDate::MIN);
        let mut rendered = String::new();
        write!(rendered, "{}", sample.format(&self.date_format)).map_err(|_| {
            DollaError::Config(format!(
                "date_format: '{}' is not a valid strftime pattern",
                self.date_format
            ))
        })
    }

    /// Update one setting by key, as typed on the command line
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), DollaError> {
        let invalid = |reason: String| DollaError::Config(format!("{}: {}", key, reason));
        match key {
            "currency" => self.currency = value.parse().map_err(invalid)?,
            "recent_limit" => {
                self.recent_limit = value
                    .parse()
                    .map_err(|_| invalid(format!("'{}' is not a whole number", value)))?
            }
            "chart_range" => self.chart_range = value.parse().map_err(invalid)?,
            "warning_threshold" => {
                self.thresholds.warning = value
                    .parse()
                    .map_err(|_| invalid(format!("'{}' is not a number", value)))?
            }
            "on_track_threshold" => {
                self.thresholds.on_track = value
                    .parse()
                    .map_err(|_| invalid(format!("'{}' is not a number", value)))?
            }
            "date_format" => self.date_format = value.to_string(),
            _ => return Err(DollaError::Config(format!("Unknown setting: {}", key))),
        }
        self.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency, Currency::Kes);
        assert_eq!(settings.recent_limit, 10);
        assert_eq!(settings.chart_range, ChartRange::Days90);
        assert_eq!(settings.thresholds.warning, 80.0);
        assert_eq!(settings.thresholds.on_track, 60.0);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DollaPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.set("currency", "usd").unwrap();
        settings.set("recent_limit", "5").unwrap();
        settings.set("chart_range", "7d").unwrap();
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
        assert_eq!(loaded.currency, Currency::Usd);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DollaPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"currency": "EUR"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency, Currency::Eur);
        assert_eq!(loaded.recent_limit, 10);
        assert_eq!(loaded.thresholds, AlertThresholds::default());
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut settings = Settings::default();
        assert!(settings.set("recent_limit", "ten").is_err());
        assert!(settings.set("chart_range", "1y").is_err());
        assert!(settings.set("colour", "blue").is_err());
        assert!(settings.set("on_track_threshold", "95").is_err());
    }

    #[test]
    fn test_date_format_is_checked() {
        let mut settings = Settings::default();
        settings.set("date_format", "%d %b %Y").unwrap();
        assert_eq!(settings.date_format, "%d %b %Y");

        let err = settings.set("date_format", "%Q").unwrap_err();
        assert!(err.to_string().contains("not a valid strftime pattern"));
    }

    #[test]
    fn test_bad_date_format_on_disk_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DollaPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"date_format": "%Y-%Q"}"#).unwrap();

        assert!(Settings::load_or_create(&paths).is_err());
    }
}
