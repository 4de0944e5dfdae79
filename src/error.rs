//! Error types for the HR Dashboard engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the fatal conditions that can occur while loading configuration and
//! preparing the dataset. Per-row data problems are not errors; they are
//! recorded as dropped rows by the preparer.

use thiserror::Error;

/// The main error type for the HR Dashboard engine.
///
/// # Example
///
/// ```
/// use hr_dashboard::error::DashboardError;
///
/// let error = DashboardError::DatasetNotFound {
///     path: "/missing/HRDataset_v14.csv".to_string(),
/// };
/// assert_eq!(error.to_string(), "Dataset file not found: /missing/HRDataset_v14.csv");
/// ```
#[derive(Debug, Error)]
pub enum DashboardError {
    /// The dataset file was not found at the specified path.
    #[error("Dataset file not found: {path}")]
    DatasetNotFound {
        /// The path that was not found.
        path: String,
    },

    /// The dataset is missing one or more required columns.
    #[error("Dataset is missing required columns: {}", columns.join(", "))]
    MissingColumns {
        /// The names of the missing columns, in schema order.
        columns: Vec<String>,
    },

    /// The dataset could not be read.
    #[error("Failed to read dataset: {message}")]
    DatasetReadError {
        /// A description of the read failure.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds inconsistent values.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// No chart matches the requested identifier.
    #[error("Chart not found: {id}")]
    ChartNotFound {
        /// The identifier that did not match any chart.
        id: String,
    },
}

/// A type alias for Results that return DashboardError.
pub type DashboardResult<T> = Result<T, DashboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_not_found_displays_path() {
        let error = DashboardError::DatasetNotFound {
            path: "/data/missing.csv".to_string(),
        };
        assert_eq!(error.to_string(), "Dataset file not found: /data/missing.csv");
    }

    #[test]
    fn test_missing_columns_lists_every_column() {
        let error = DashboardError::MissingColumns {
            columns: vec!["DOB".to_string(), "Termd".to_string()],
        };
        assert_eq!(
            error.to_string(),
            "Dataset is missing required columns: DOB, Termd"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = DashboardError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_config_displays_field_and_message() {
        let error = DashboardError::InvalidConfig {
            field: "histogram_bins".to_string(),
            message: "must be greater than zero".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration field 'histogram_bins': must be greater than zero"
        );
    }

    #[test]
    fn test_chart_not_found_displays_id() {
        let error = DashboardError::ChartNotFound {
            id: "pie-of-doom".to_string(),
        };
        assert_eq!(error.to_string(), "Chart not found: pie-of-doom");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<DashboardError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_dataset_not_found() -> DashboardResult<()> {
            Err(DashboardError::DatasetNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> DashboardResult<()> {
            returns_dataset_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
