//! Configuration types for the dashboard.
//!
//! This module contains the strongly-typed configuration structure that is
//! deserialized from the dashboard YAML file.

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::aggregation::DEFAULT_HISTOGRAM_BINS;
use crate::charts::ChartOptions;
use crate::preparation::AgeBounds;

fn default_title() -> String {
    "HRDataset Dashboard".to_string()
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from("./data/HRDataset_v14.csv")
}

fn default_bind_address() -> String {
    "127.0.0.1:8050".to_string()
}

fn default_histogram_bins() -> usize {
    DEFAULT_HISTOGRAM_BINS
}

/// Dashboard configuration.
///
/// Every field has a default, so an empty YAML mapping is a valid
/// configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DashboardConfig {
    /// Page title shown above the charts.
    #[serde(default = "default_title")]
    pub title: String,
    /// Path to the HR CSV export.
    #[serde(default = "default_dataset_path")]
    pub dataset_path: PathBuf,
    /// Address the HTTP server binds to.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// Fixed reference date for derived fields; today when absent.
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
    /// Inclusive age bounds for kept records.
    #[serde(default)]
    pub age_bounds: AgeBounds,
    /// Number of bins for histogram charts.
    #[serde(default = "default_histogram_bins")]
    pub histogram_bins: usize,
}

impl DashboardConfig {
    /// Returns the chart options derived from this configuration.
    pub fn chart_options(&self) -> ChartOptions {
        ChartOptions {
            histogram_bins: self.histogram_bins,
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            dataset_path: default_dataset_path(),
            bind_address: default_bind_address(),
            as_of: None,
            age_bounds: AgeBounds::default(),
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
        }
    }
}
