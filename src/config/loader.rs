//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the dashboard
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{DashboardError, DashboardResult};

use super::types::DashboardConfig;

/// Loads and validates the dashboard configuration.
///
/// # Example
///
/// ```no_run
/// use hr_dashboard::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/dashboard.yaml")?;
/// println!("Dataset: {}", loader.config().dataset_path.display());
/// # Ok::<(), hr_dashboard::error::DashboardError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: DashboardConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML or unknown value types (`ConfigParseError`)
    /// - The values are inconsistent (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> DashboardResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| DashboardError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = Self::from_yaml(&content).map_err(|err| match err {
            DashboardError::ConfigParseError { message, .. } => DashboardError::ConfigParseError {
                path: path_str.clone(),
                message,
            },
            other => other,
        })?;

        info!(path = %path_str, "Loaded configuration");
        Ok(config)
    }

    /// Parses and validates configuration from YAML text.
    pub fn from_yaml(content: &str) -> DashboardResult<Self> {
        let config: DashboardConfig =
            serde_yaml::from_str(content).map_err(|e| DashboardError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?;

        Self::validate(&config)?;
        Ok(Self { config })
    }

    fn validate(config: &DashboardConfig) -> DashboardResult<()> {
        if config.age_bounds.min > config.age_bounds.max {
            return Err(DashboardError::InvalidConfig {
                field: "age_bounds".to_string(),
                message: format!(
                    "min ({}) must not exceed max ({})",
                    config.age_bounds.min, config.age_bounds.max
                ),
            });
        }

        if config.histogram_bins == 0 {
            return Err(DashboardError::InvalidConfig {
                field: "histogram_bins".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }

        Ok(())
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> DashboardConfig {
        self.config
    }
}
