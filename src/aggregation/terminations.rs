//! Termination counts per department.

use crate::models::{Dataset, SummaryTable};

use super::grouping::group_by;

/// Counts terminated employees per department.
///
/// Only departments with at least one termination appear; they are not
/// zero-filled. Rows are ordered by count descending, then by department
/// name.
///
/// # Examples
///
/// ```
/// use hr_dashboard::aggregation::terminations_by_department;
/// use hr_dashboard::models::Dataset;
/// use chrono::NaiveDate;
///
/// let empty = Dataset::new(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(), vec![]);
/// assert!(terminations_by_department(&empty).is_empty());
/// ```
pub fn terminations_by_department(dataset: &Dataset) -> SummaryTable<u64> {
    let terminated = dataset.iter().filter(|r| r.terminated);

    let mut rows: Vec<(String, u64)> = group_by(terminated, |r| r.department.as_str())
        .into_iter()
        .map(|group| (group.key, group.records.len() as u64))
        .collect();

    rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    SummaryTable::new("Department", "Terminations", rows)
}
