//! Chart catalogue for the HR Dashboard.
//!
//! This module names the ten dashboard charts, attaches each one's title and
//! commentary, builds chart data from the prepared dataset, and assembles
//! the fixed dashboard layout. Rendering is left to the consumer of the
//! serialized [`Chart`] and [`Dashboard`] values.
//!
//! # Example
//!
//! ```
//! use hr_dashboard::charts::{build_dashboard, ChartOptions};
//! use hr_dashboard::models::Dataset;
//! use chrono::NaiveDate;
//!
//! let dataset = Dataset::new(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(), vec![]);
//! let dashboard = build_dashboard("HRDataset Dashboard", &dataset, &[], &ChartOptions::default());
//! assert_eq!(dashboard.charts().count(), 10);
//! ```

mod builder;
mod chart_id;
mod dashboard;
mod data;
mod descriptions;

pub use builder::{ChartOptions, PIE_HOLE, build_chart};
pub use chart_id::ChartId;
pub use dashboard::{
    DASHBOARD_LAYOUT, Dashboard, DashboardRow, DashboardSection, build_dashboard,
};
pub use data::{
    Chart, ChartData, DateBin, DateHistogramSeries, DateRug, PointHover, ScatterPoint,
    ScatterSeries,
};
pub use descriptions::description;
