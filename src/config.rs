//! Configuration management for the `TravelOS` application
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::TravelOsError;
use crate::planner::PlannerSettings;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `TravelOS` application
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TravelOsConfig {
    /// Planner defaults and tunables
    #[serde(default)]
    pub planner: PlannerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
}

/// Planner defaults and tunables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Route preselected when none is given
    #[serde(default = "default_route")]
    pub default_route: String,
    /// Budget in EUR used when none is given
    #[serde(default = "default_budget")]
    pub default_budget: f64,
    /// Days per city used when none is given
    #[serde(default = "default_days_per_city")]
    pub default_days_per_city: u8,
    /// Distance between two consecutive cities in km
    #[serde(default = "default_segment_length")]
    pub segment_length_km: f64,
    /// Lower clamp for budgets in EUR
    #[serde(default = "default_budget_min")]
    pub budget_min: f64,
    /// Upper clamp for budgets in EUR
    #[serde(default = "default_budget_max")]
    pub budget_max: f64,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

// Default value functions
fn default_route() -> String {
    "Balkan Core".to_string()
}

fn default_budget() -> f64 {
    3500.0
}

fn default_days_per_city() -> u8 {
    3
}

fn default_segment_length() -> f64 {
    crate::catalog::DEFAULT_SEGMENT_LENGTH_KM
}

fn default_budget_min() -> f64 {
    500.0
}

fn default_budget_max() -> f64 {
    20_000.0
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            default_route: default_route(),
            default_budget: default_budget(),
            default_days_per_city: default_days_per_city(),
            segment_length_km: default_segment_length(),
            budget_min: default_budget_min(),
            budget_max: default_budget_max(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl PlannerConfig {
    /// Engine settings derived from this configuration
    #[must_use]
    pub fn settings(&self) -> PlannerSettings {
        PlannerSettings {
            segment_length_km: self.segment_length_km,
            budget_min: self.budget_min,
            budget_max: self.budget_max,
        }
    }
}

impl TravelOsConfig {
    /// Load configuration from the default file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Environment overrides, e.g. TRAVELOS_PLANNER__DEFAULT_BUDGET=5000
        builder = builder.add_source(
            Environment::with_prefix("TRAVELOS")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: TravelOsConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        // Apply defaults for missing values
        config.apply_defaults();

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("travelos").join("config.toml"))
    }

    /// Apply default values to empty or zeroed configuration fields
    pub fn apply_defaults(&mut self) {
        if self.planner.default_route.trim().is_empty() {
            self.planner.default_route = default_route();
        }
        if self.planner.default_budget == 0.0 {
            self.planner.default_budget = default_budget();
        }
        if self.planner.default_days_per_city == 0 {
            self.planner.default_days_per_city = default_days_per_city();
        }
        if self.planner.segment_length_km == 0.0 {
            self.planner.segment_length_km = default_segment_length();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
        if self.server.host.is_empty() {
            self.server.host = default_host();
        }
        if self.server.port == 0 {
            self.server.port = default_port();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        let planner = &self.planner;

        if !(planner.budget_min > 0.0 && planner.budget_min.is_finite()) {
            return Err(TravelOsError::config("Minimum budget must be a positive amount").into());
        }

        if !(planner.budget_max >= planner.budget_min && planner.budget_max.is_finite()) {
            return Err(TravelOsError::config(
                "Maximum budget must be at least the minimum budget",
            )
            .into());
        }

        if !(planner.budget_min..=planner.budget_max).contains(&planner.default_budget) {
            return Err(TravelOsError::config(format!(
                "Default budget must be between {} and {} EUR",
                planner.budget_min, planner.budget_max
            ))
            .into());
        }

        if !(1..=7).contains(&planner.default_days_per_city) {
            return Err(TravelOsError::config("Default days per city must be between 1 and 7").into());
        }

        if !(planner.segment_length_km > 0.0 && planner.segment_length_km <= 5000.0) {
            return Err(TravelOsError::config(
                "Segment length must be greater than 0 and cannot exceed 5000 km",
            )
            .into());
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(TravelOsError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(TravelOsError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        if crate::catalog::Catalog::builtin()
            .route(&self.planner.default_route)
            .is_err()
        {
            return Err(TravelOsError::config(format!(
                "Unknown default route '{}'",
                self.planner.default_route
            ))
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = TravelOsConfig::default();
        assert_eq!(config.planner.default_route, "Balkan Core");
        assert_eq!(config.planner.default_budget, 3500.0);
        assert_eq!(config.planner.default_days_per_city, 3);
        assert_eq!(config.planner.segment_length_km, 300.0);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.server.port, 8080);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = TravelOsConfig::default();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_numeric_ranges() {
        let mut config = TravelOsConfig::default();
        config.planner.default_days_per_city = 9;
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("days per city"));

        let mut config = TravelOsConfig::default();
        config.planner.budget_max = 100.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_unknown_route() {
        let mut config = TravelOsConfig::default();
        config.planner.default_route = "Atlantis".to_string();
        assert!(config.validate().unwrap_err().to_string().contains("Atlantis"));
    }

    #[test]
    fn test_apply_defaults_fills_zeroes() {
        let mut config = TravelOsConfig::default();
        config.planner.segment_length_km = 0.0;
        config.server.port = 0;
        config.logging.format = String::new();
        config.apply_defaults();
        assert_eq!(config.planner.segment_length_km, 300.0);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_load_from_toml_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[planner]\ndefault_route = \"Grand Explorer\"\nsegment_length_km = 250.0\n\n[server]\nport = 9000"
        )
        .unwrap();

        let config = TravelOsConfig::load_from_path(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.planner.default_route, "Grand Explorer");
        assert_eq!(config.planner.segment_length_km, 250.0);
        assert_eq!(config.planner.default_days_per_city, 3);
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.planner.settings().segment_length_km, 250.0);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config =
            TravelOsConfig::load_from_path(Some(PathBuf::from("does/not/exist.toml"))).unwrap();
        assert_eq!(config.planner.default_budget, 3500.0);
    }

    #[test]
    fn test_config_path_generation() {
        if let Some(path) = TravelOsConfig::get_config_path() {
            assert!(path.to_string_lossy().contains("travelos"));
            assert!(path.to_string_lossy().contains("config.toml"));
        }
    }
}
