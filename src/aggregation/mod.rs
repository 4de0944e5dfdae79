//! Aggregations over the prepared dataset.
//!
//! This module contains the grouping and summary operations behind every
//! dashboard chart: mean satisfaction by recruitment source, termination
//! counts by department, box statistics, histograms, category shares,
//! cross counts, and the least squares trendline. Each operation borrows the
//! dataset immutably and returns a fresh result; an empty dataset always
//! yields an empty result rather than an error.

mod distribution;
mod grouping;
mod regression;
mod satisfaction;
mod shares;
mod statistics;
mod terminations;

#[cfg(test)]
pub(crate) mod test_support;

pub use distribution::{
    DEFAULT_HISTOGRAM_BINS, HistogramBin, HistogramSeries, histogram, histogram_by_group,
};
pub use grouping::{Group, group_by};
pub use regression::{Trendline, ordinary_least_squares};
pub use satisfaction::mean_satisfaction_by_source;
pub use shares::{CategoryShare, CountSeries, CrossCount, category_shares, cross_count};
pub use statistics::{BoxStats, GroupBox, box_stats_by};
pub use terminations::terminations_by_department;
