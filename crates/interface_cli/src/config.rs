//! CLI configuration

use std::collections::HashMap;
use std::path::PathBuf;

use clap::ValueEnum;
use serde::Deserialize;

use core_kernel::Timezone;

/// How reports are written to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable tables
    #[default]
    Text,
    /// The calculation records as JSON
    Json,
}

/// CLI configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level or filter directive
    pub log_level: String,
    /// Calendar the sheets are written in
    pub timezone: Timezone,
    /// Directory holding the monthly rent sheets
    pub sheets_dir: PathBuf,
    /// Report format
    pub format: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            timezone: Timezone::default(),
            sheets_dir: PathBuf::from("."),
            format: OutputFormat::Text,
        }
    }
}

impl CliConfig {
    /// Loads configuration from `RENT_`-prefixed environment variables
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::load(config::Environment::with_prefix("RENT"))
    }

    /// Loads configuration from the given variables instead of the process
    /// environment
    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self, config::ConfigError> {
        Self::load(config::Environment::with_prefix("RENT").source(Some(vars)))
    }

    fn load(environment: config::Environment) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(environment)
            .build()?
            .try_deserialize()
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = CliConfig::from_vars(HashMap::new()).unwrap();

        assert_eq!(config.log_level, "info");
        assert_eq!(config.timezone.name(), "UTC");
        assert_eq!(config.sheets_dir, PathBuf::from("."));
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn test_prefixed_variables_override_defaults() {
        let config = CliConfig::from_vars(vars(&[
            ("RENT_TIMEZONE", "America/Los_Angeles"),
            ("RENT_SHEETS_DIR", "/srv/rent"),
            ("RENT_FORMAT", "json"),
        ]))
        .unwrap();

        assert_eq!(config.timezone.name(), "America/Los_Angeles");
        assert_eq!(config.sheets_dir, PathBuf::from("/srv/rent"));
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_unknown_timezone_is_an_error() {
        let result = CliConfig::from_vars(vars(&[("RENT_TIMEZONE", "Mars/Olympus")]));
        assert!(result.is_err());
    }
}
