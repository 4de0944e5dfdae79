//! Category counts and percentage shares.

use serde::{Deserialize, Serialize};

use crate::models::{Dataset, Record};

use super::grouping::group_by;

/// Count and share of one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    /// The category value.
    pub category: String,
    /// Number of records in the category.
    pub count: u64,
    /// Share of all records, as a percentage (0-100).
    pub percent: f64,
}

/// Counts records per category of `key` with each category's share.
///
/// Categories appear in first-seen order.
pub fn category_shares<K>(dataset: &Dataset, key: K) -> Vec<CategoryShare>
where
    K: Fn(&Record) -> &str,
{
    let total = dataset.len() as f64;

    group_by(dataset, key)
        .into_iter()
        .map(|group| {
            let count = group.records.len() as u64;
            CategoryShare {
                category: group.key,
                count,
                percent: count as f64 * 100.0 / total,
            }
        })
        .collect()
}

/// Per-category counts split by a secondary category.
///
/// `counts[s][c]` is the number of records with secondary value
/// `series[s]` and primary value `categories[c]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossCount {
    /// Primary category values, sorted ascending.
    pub categories: Vec<String>,
    /// One series per secondary value, sorted ascending.
    pub series: Vec<CountSeries>,
}

/// Counts for one secondary category value across the primary categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountSeries {
    /// The secondary category value.
    pub name: String,
    /// Counts aligned with [`CrossCount::categories`].
    pub counts: Vec<u64>,
}

/// Counts records per `(primary, secondary)` category pair.
///
/// # Examples
///
/// ```
/// use hr_dashboard::aggregation::cross_count;
/// use hr_dashboard::models::Dataset;
/// use chrono::NaiveDate;
///
/// let empty = Dataset::new(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(), vec![]);
/// let counts = cross_count(&empty, |r| r.position.as_str(), |r| r.sex.as_str());
/// assert!(counts.categories.is_empty());
/// assert!(counts.series.is_empty());
/// ```
pub fn cross_count<P, S>(dataset: &Dataset, primary: P, secondary: S) -> CrossCount
where
    P: Fn(&Record) -> &str,
    S: Fn(&Record) -> &str,
{
    let mut categories: Vec<String> = group_by(dataset, &primary)
        .into_iter()
        .map(|g| g.key)
        .collect();
    categories.sort();

    let mut series: Vec<CountSeries> = group_by(dataset, secondary)
        .into_iter()
        .map(|group| {
            let mut counts = vec![0u64; categories.len()];
            for record in &group.records {
                let value = primary(*record);
                if let Ok(index) = categories.binary_search_by(|c| c.as_str().cmp(value)) {
                    counts[index] += 1;
                }
            }
            CountSeries {
                name: group.key,
                counts,
            }
        })
        .collect();
    series.sort_by(|a, b| a.name.cmp(&b.name));

    CrossCount { categories, series }
}
