//! Application state for the dashboard API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::charts::ChartOptions;
use crate::config::DashboardConfig;
use crate::models::Dataset;
use crate::preparation::{DroppedRow, Preparation};

/// Shared application state.
///
/// Holds the prepared dataset read-only; every request derives its charts
/// from it afresh.
#[derive(Clone)]
pub struct AppState {
    /// The prepared dataset.
    dataset: Arc<Dataset>,
    /// Rows filtered out during preparation.
    dropped: Arc<[DroppedRow]>,
    /// Dashboard page title.
    title: Arc<str>,
    /// Chart shaping options.
    options: ChartOptions,
}

impl AppState {
    /// Creates application state from a preparation and its configuration.
    pub fn new(config: &DashboardConfig, preparation: Preparation) -> Self {
        let (dataset, dropped) = preparation.into_parts();
        Self {
            dataset: Arc::new(dataset),
            dropped: dropped.into(),
            title: config.title.as_str().into(),
            options: config.chart_options(),
        }
    }

    /// Returns the prepared dataset.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Returns the rows dropped during preparation.
    pub fn dropped(&self) -> &[DroppedRow] {
        &self.dropped
    }

    /// Returns the dashboard title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the chart options.
    pub fn options(&self) -> &ChartOptions {
        &self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_app_state_exposes_preparation() {
        let as_of = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let preparation = Preparation {
            dataset: Dataset::new(as_of, vec![]),
            dropped: vec![],
        };

        let state = AppState::new(&DashboardConfig::default(), preparation);
        assert_eq!(state.title(), "HRDataset Dashboard");
        assert_eq!(state.dataset().as_of(), as_of);
        assert!(state.dropped().is_empty());
        assert_eq!(state.options().histogram_bins, 30);
    }
}
