use anyhow::Result;
use chrono::Weekday;
use chrono_tz::Tz;
use config::Config;
use serde::Deserialize;

use crate::catalog::LocaleCatalog;
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub formatting: FormattingConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormattingConfig {
    /// Literal date format, bypassing the catalog lookup when set.
    pub date_format_override: Option<String>,
    /// Literal time format ("24" or "12"), bypassing the catalog lookup when set.
    pub time_format_override: Option<String>,
    /// "monday" or "sunday"; falls back to the catalog, then "monday".
    pub first_day_of_week: Option<String>,
    /// IANA timezone name used when encoding microformat timestamps.
    pub timezone: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
        }
    }
}

impl Settings {
    /// ## Summary
    /// Loads configuration from `.env` file, environment variables, and
    /// `config.toml`. Environment variables take precedence over `.env`
    /// file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Config::builder()
            .set_default("logging.level", "debug")?
            // Env file
            .add_source(
                config::Environment::default()
                    .convert_case(config::Case::Snake)
                    .separator("_")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            .build()?
            .try_deserialize::<Settings>()?)
    }

    /// ## Summary
    /// Returns the active date format: the override when set, else the
    /// localized `Calendar.DATEFORMAT` value, else `"mdy"`.
    #[must_use]
    pub fn date_format(&self, catalog: &dyn LocaleCatalog) -> String {
        match &self.formatting.date_format_override {
            Some(format) => format.clone(),
            None => catalog.translate("Calendar.DATEFORMAT", "mdy"),
        }
    }

    /// ## Summary
    /// Returns the active time format: the override when set, else the
    /// localized `Calendar.TIMEFORMAT` value, else `"24"`.
    #[must_use]
    pub fn time_format(&self, catalog: &dyn LocaleCatalog) -> String {
        match &self.formatting.time_format_override {
            Some(format) => format.clone(),
            None => catalog.translate("Calendar.TIMEFORMAT", "24"),
        }
    }

    /// ## Summary
    /// Returns the first day of the week. Anything other than "sunday"
    /// (case-insensitive) resolves to Monday.
    #[must_use]
    pub fn first_day_of_week(&self, catalog: &dyn LocaleCatalog) -> Weekday {
        let value = match &self.formatting.first_day_of_week {
            Some(day) => day.clone(),
            None => catalog.translate("Calendar.FIRSTDAYOFWEEK", "monday"),
        };
        if value.trim().eq_ignore_ascii_case("sunday") {
            Weekday::Sun
        } else {
            Weekday::Mon
        }
    }

    /// ## Summary
    /// Parses the configured IANA timezone name, if any.
    ///
    /// ## Errors
    /// Returns `CoreError::ConfigError` if the name is not a known zone.
    pub fn timezone(&self) -> CoreResult<Option<Tz>> {
        self.formatting
            .timezone
            .as_deref()
            .map(|name| {
                name.parse::<Tz>()
                    .map_err(|_| CoreError::ConfigError(format!("unknown timezone: {name}")))
            })
            .transpose()
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
