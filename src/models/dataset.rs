//! The prepared, immutable employee dataset.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Record;

/// An ordered collection of prepared employee records.
///
/// Every record in a dataset produced by the preparer has a parsed date of
/// birth and an in-range age relative to [`Dataset::as_of`]. The dataset is
/// never mutated after construction; aggregations borrow it.
///
/// # Example
///
/// ```
/// use hr_dashboard::models::Dataset;
/// use chrono::NaiveDate;
///
/// let as_of = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
/// let dataset = Dataset::new(as_of, vec![]);
/// assert!(dataset.is_empty());
/// assert_eq!(dataset.as_of(), as_of);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// The reference date used to derive age and tenure.
    as_of: NaiveDate,
    /// Records in source order.
    records: Vec<Record>,
}

impl Dataset {
    /// Creates a dataset from records already derived against `as_of`.
    pub fn new(as_of: NaiveDate, records: Vec<Record>) -> Self {
        Self { as_of, records }
    }

    /// Returns the reference date used to derive age and tenure.
    pub fn as_of(&self) -> NaiveDate {
        self.as_of
    }

    /// Returns all records in source order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns an iterator over the records.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the dataset holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
