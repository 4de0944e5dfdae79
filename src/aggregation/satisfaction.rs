//! Mean employee satisfaction per recruitment source.

use crate::models::{Dataset, SummaryTable};

use super::grouping::group_by;

/// Averages satisfaction scores per recruitment source.
///
/// Produces one row per distinct source present in the dataset, sorted by
/// source name. Records without a satisfaction score are skipped; a source
/// with no scored records does not appear, so no mean is ever NaN.
///
/// # Examples
///
/// ```
/// use hr_dashboard::aggregation::mean_satisfaction_by_source;
/// use hr_dashboard::models::Dataset;
/// use chrono::NaiveDate;
///
/// let empty = Dataset::new(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(), vec![]);
/// assert!(mean_satisfaction_by_source(&empty).is_empty());
/// ```
pub fn mean_satisfaction_by_source(dataset: &Dataset) -> SummaryTable<f64> {
    let mut rows: Vec<(String, f64)> = group_by(dataset, |r| r.recruitment_source.as_str())
        .into_iter()
        .filter_map(|group| {
            let scores: Vec<f64> = group
                .records
                .iter()
                .filter_map(|r| r.satisfaction.map(f64::from))
                .collect();
            if scores.is_empty() {
                return None;
            }
            let mean = scores.iter().sum::<f64>() / scores.len() as f64;
            Some((group.key, mean))
        })
        .collect();

    rows.sort_by(|a, b| a.0.cmp(&b.0));

    SummaryTable::new("Recruitment source", "Mean satisfaction", rows)
}
