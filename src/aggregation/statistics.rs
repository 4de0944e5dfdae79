//! Descriptive statistics for box plots.

use serde::{Deserialize, Serialize};

use crate::models::{Dataset, Record};

use super::grouping::group_by;

/// Five-number summary with whisker fences and the raw points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxStats {
    /// Number of values.
    pub count: usize,
    /// Smallest value.
    pub min: f64,
    /// First quartile.
    pub q1: f64,
    /// Median.
    pub median: f64,
    /// Third quartile.
    pub q3: f64,
    /// Largest value.
    pub max: f64,
    /// Arithmetic mean.
    pub mean: f64,
    /// Smallest value within 1.5 IQR below q1.
    pub lower_fence: f64,
    /// Largest value within 1.5 IQR above q3.
    pub upper_fence: f64,
    /// Values outside the fences, in input order.
    pub outliers: Vec<f64>,
    /// Every value, in input order.
    pub points: Vec<f64>,
}

impl BoxStats {
    /// Computes box statistics, or `None` for an empty input.
    ///
    /// Quartiles use linear interpolation between closest ranks.
    ///
    /// # Examples
    ///
    /// ```
    /// use hr_dashboard::aggregation::BoxStats;
    ///
    /// let stats = BoxStats::from_values(&[1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(stats.median, 2.5);
    /// assert_eq!(stats.q1, 1.75);
    /// assert_eq!(stats.q3, 3.25);
    /// assert!(BoxStats::from_values(&[]).is_none());
    /// ```
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));

        let q1 = quantile(&sorted, 0.25);
        let median = quantile(&sorted, 0.5);
        let q3 = quantile(&sorted, 0.75);
        let iqr = q3 - q1;
        let low_limit = q1 - 1.5 * iqr;
        let high_limit = q3 + 1.5 * iqr;

        let lower_fence = sorted
            .iter()
            .copied()
            .find(|v| *v >= low_limit)
            .unwrap_or(sorted[0]);
        let upper_fence = sorted
            .iter()
            .rev()
            .copied()
            .find(|v| *v <= high_limit)
            .unwrap_or(sorted[sorted.len() - 1]);

        Some(Self {
            count: values.len(),
            min: sorted[0],
            q1,
            median,
            q3,
            max: sorted[sorted.len() - 1],
            mean: values.iter().sum::<f64>() / values.len() as f64,
            lower_fence,
            upper_fence,
            outliers: values
                .iter()
                .copied()
                .filter(|v| *v < low_limit || *v > high_limit)
                .collect(),
            points: values.to_vec(),
        })
    }
}

/// Linear-interpolated quantile of an ascending, non-empty slice.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;
    sorted[lower] + fraction * (sorted[upper] - sorted[lower])
}

/// Box statistics for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupBox {
    /// The category value.
    pub key: String,
    /// Statistics over the category's values.
    pub stats: BoxStats,
}

/// Computes box statistics of `value` per category of `key`.
///
/// Records for which `value` returns `None` are skipped, and a category
/// left with no values is omitted. Categories appear sorted by name.
pub fn box_stats_by<K, V>(dataset: &Dataset, key: K, value: V) -> Vec<GroupBox>
where
    K: Fn(&Record) -> &str,
    V: Fn(&Record) -> Option<f64>,
{
    let mut boxes: Vec<GroupBox> = group_by(dataset, key)
        .into_iter()
        .filter_map(|group| {
            let values: Vec<f64> = group.records.iter().filter_map(|r| value(*r)).collect();
            BoxStats::from_values(&values).map(|stats| GroupBox {
                key: group.key,
                stats,
            })
        })
        .collect();

    boxes.sort_by(|a, b| a.key.cmp(&b.key));
    boxes
}
